use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Error,
    Warning,
    Info,
    Success,
}

impl AlertType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "error" => Some(AlertType::Error),
            "warning" => Some(AlertType::Warning),
            "info" => Some(AlertType::Info),
            "success" => Some(AlertType::Success),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: AlertType,
    pub title: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertCounts {
    pub all: usize,
    pub error: usize,
    pub warning: usize,
    pub info: usize,
    pub success: usize,
}
