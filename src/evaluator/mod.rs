//! Usage evaluator: pure functions deriving display values and severity
//! tiers from quotas, usage and tank readings. Nothing here keeps state, so
//! every function can be called as often as the views like.

pub mod severity;
pub mod usage;
pub mod summary;
pub mod alerts;

pub use severity::{Severity, ThresholdPolicy, classify_severity, TANK_PERCENT_POLICY, REPORT_LITERS_POLICY};
pub use usage::{compute_fill_percentage, compute_quota_status, tank_status, QuotaStatus, TankStatus};
pub use summary::{community_summary, report_summary, report_csv, CommunitySummary, FarmerUsage, ReportScales, ReportSummary, ReportRow};
pub use alerts::{derive_alerts, filter_alerts, count_alerts};
