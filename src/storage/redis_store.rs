use redis::{Client, Commands};
use crate::errors::StorageResult;
use super::KeyValueStore;

// Profile keys live under `aquapulse:<profile>:<key>`
pub struct RedisStore {
    client: Client,
    prefix: String,
}

impl RedisStore {
    pub fn open(url: &str, profile: &str) -> StorageResult<Self> {
        let client = Client::open(url)?;
        Ok(Self {
            client,
            prefix: format!("aquapulse:{}:", profile),
        })
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl KeyValueStore for RedisStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let mut conn = self.client.get_connection()?;
        let value: Option<String> = conn.get(self.key(key))?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut conn = self.client.get_connection()?;
        conn.set::<_, _, ()>(self.key(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut conn = self.client.get_connection()?;
        conn.del::<_, ()>(self.key(key))?;
        Ok(())
    }
}
