use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Farmer,
    Admin,
}

// Persisted as `{email, name, role, quota?}`; the password is never kept.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota: Option<f64>,   // Daily allotment in liters, meaningful for farmers
}
