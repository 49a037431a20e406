mod auth;
mod dashboard;
mod community;
mod reports;
mod alerts;

pub use auth::{handle_register, handle_login, handle_logout, current_user};
pub use dashboard::{serve_dashboard, refresh_dashboard};
pub use community::serve_community;
pub use reports::{serve_reports, download_report_csv};
pub use alerts::serve_alerts;
