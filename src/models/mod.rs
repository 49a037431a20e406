mod user;
mod forms;
mod sensor;
mod alert;

pub use user::{User, Role};
pub use forms::{LoginForm, RegisterForm, CommunityQuery, AlertQuery};
pub use sensor::{SensorData, Farmer, HistoricalRecord, UsageData};
pub use alert::{Alert, AlertType, AlertCounts};
