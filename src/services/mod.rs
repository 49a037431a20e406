mod session_store;
mod data_service;

pub use session_store::SessionStore;
pub use data_service::DataService;
