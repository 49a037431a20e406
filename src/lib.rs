//! AquaPulse: session handling and water-usage evaluation for a community
//! tank dashboard, plus the small JSON service that serves its views.

pub mod app;
pub mod config;
pub mod errors;
pub mod evaluator;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod storage;
pub mod worker;
