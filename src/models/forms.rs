use serde::Deserialize;
use super::user::Role;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub quota: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CommunityQuery {
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct AlertQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
