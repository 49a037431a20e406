use crate::models::{Alert, AlertCounts, AlertType};
use super::severity::{Severity, ThresholdPolicy};
use super::summary::CommunitySummary;
use super::usage::TankStatus;

struct AlertFeed {
    alerts: Vec<Alert>,
    as_of: String,
}

impl AlertFeed {
    fn push(&mut self, kind: AlertType, title: &str, message: String) {
        self.alerts.push(Alert {
            id: self.alerts.len() as u32 + 1,
            kind,
            title: title.to_string(),
            message,
            timestamp: self.as_of.clone(),
        });
    }
}

/// Build the alert feed from the current tank reading and community usage.
///
/// `tank_policy` must be the same percentage policy used to classify `tank`.
pub fn derive_alerts(
    tank: &TankStatus,
    tank_policy: &ThresholdPolicy,
    community: &CommunitySummary,
    community_usage_warning: f64,
    as_of: &str,
) -> Vec<Alert> {
    let mut feed = AlertFeed { alerts: Vec::new(), as_of: as_of.to_string() };

    match tank.severity {
        Severity::Critical => feed.push(
            AlertType::Error,
            "Critical Water Level",
            format!(
                "Tank water level has dropped below {}%. Immediate attention required.",
                tank_policy.critical_below
            ),
        ),
        Severity::Low => feed.push(
            AlertType::Warning,
            "Low Water Level",
            format!(
                "Tank water level is below {}%. Current level: {}L ({}%).",
                tank_policy.low_below,
                tank.water_level.round(),
                tank.percentage.round()
            ),
        ),
        Severity::Normal => {}
    }

    for farmer in community.farmers.iter().filter(|f| f.current_usage > f.quota) {
        feed.push(
            AlertType::Warning,
            "Excessive Usage Detected",
            format!(
                "{} has exceeded daily quota by {}L. Current usage: {}L.",
                farmer.name,
                farmer.current_usage - farmer.quota,
                farmer.current_usage
            ),
        );
    }

    if let Some(pct) = community.usage_percentage {
        if pct >= community_usage_warning {
            feed.push(
                AlertType::Warning,
                "High Community Usage",
                format!(
                    "Total community usage at {}%. Monitor closely to avoid depletion.",
                    pct.round()
                ),
            );
        }

        feed.push(
            AlertType::Info,
            "Daily Usage Summary",
            format!(
                "Community has used {}L of {}L today across {} farmers.",
                community.total_usage, community.total_quota, community.total_farmers
            ),
        );
    }

    let troubled = feed
        .alerts
        .iter()
        .any(|a| matches!(a.kind, AlertType::Error | AlertType::Warning));
    if !troubled {
        feed.push(
            AlertType::Success,
            "System Healthy",
            "Tank level and farmer usage are within normal limits.".to_string(),
        );
    }

    feed.alerts
}

// `None` keeps every alert
pub fn filter_alerts(alerts: &[Alert], kind: Option<AlertType>) -> Vec<Alert> {
    alerts
        .iter()
        .filter(|a| kind.map_or(true, |k| a.kind == k))
        .cloned()
        .collect()
}

pub fn count_alerts(alerts: &[Alert]) -> AlertCounts {
    let count = |k: AlertType| alerts.iter().filter(|a| a.kind == k).count();
    AlertCounts {
        all: alerts.len(),
        error: count(AlertType::Error),
        warning: count(AlertType::Warning),
        info: count(AlertType::Info),
        success: count(AlertType::Success),
    }
}
