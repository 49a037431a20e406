use serde::Serialize;
use chrono::NaiveDate;
use crate::errors::UsageResult;
use crate::models::{Farmer, HistoricalRecord};
use super::severity::{Severity, ThresholdPolicy};
use super::usage::{compute_fill_percentage, compute_quota_status, QuotaStatus};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FarmerUsage {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub quota: f64,
    pub current_usage: f64,
    pub status: Option<QuotaStatus>,     // None when the quota cannot be evaluated
    pub bar_percentage: Option<f64>,     // Progress bar width, capped at 100
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CommunitySummary {
    pub total_farmers: usize,
    pub total_quota: f64,
    pub total_usage: f64,
    pub remaining: f64,
    pub exceeded_count: usize,
    pub usage_percentage: Option<f64>,   // None when there is no quota to measure against
    pub farmers: Vec<FarmerUsage>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ReportScales {
    pub level: f64,
    pub usage: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub date: NaiveDate,
    pub level: f64,
    pub usage: f64,
    pub status: Severity,
    pub level_percent: f64,
    pub usage_percent: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub days: usize,
    pub avg_level: f64,
    pub avg_usage: f64,
    pub rows: Vec<ReportRow>,
}

fn matches_search(farmer: &Farmer, needle: &str) -> bool {
    farmer.name.to_lowercase().contains(needle) || farmer.email.to_lowercase().contains(needle)
}

/// Community-wide quota totals plus the per-farmer cards.
///
/// Totals always cover every farmer; `search` only narrows the card list.
/// A farmer whose quota cannot be evaluated still gets a card, with no
/// status, and still counts towards the totals.
pub fn community_summary(farmers: &[Farmer], search: Option<&str>) -> CommunitySummary {
    let total_quota: f64 = farmers.iter().map(|f| f.quota).sum();
    let total_usage: f64 = farmers.iter().map(|f| f.current_usage).sum();
    let exceeded_count = farmers.iter().filter(|f| f.current_usage > f.quota).count();

    let usage_percentage = if farmers.is_empty() {
        None
    } else {
        match compute_quota_status(total_quota, total_usage) {
            Ok(status) => Some(status.percentage_unclamped),
            Err(e) => {
                tracing::warn!("Community usage percentage unavailable: {}", e);
                None
            }
        }
    };

    let needle = search.map(str::to_lowercase).unwrap_or_default();
    let cards = farmers
        .iter()
        .filter(|f| needle.is_empty() || matches_search(f, &needle))
        .map(|farmer| {
            let status = match compute_quota_status(farmer.quota, farmer.current_usage) {
                Ok(status) => Some(status),
                Err(e) => {
                    tracing::warn!("Skipping quota status for farmer {}: {}", farmer.id, e);
                    None
                }
            };
            FarmerUsage {
                id: farmer.id,
                name: farmer.name.clone(),
                email: farmer.email.clone(),
                quota: farmer.quota,
                current_usage: farmer.current_usage,
                bar_percentage: status.map(|s| s.percentage_unclamped.min(100.0)),
                status,
            }
        })
        .collect();

    CommunitySummary {
        total_farmers: farmers.len(),
        total_quota,
        total_usage,
        remaining: total_quota - total_usage,
        exceeded_count,
        usage_percentage,
        farmers: cards,
    }
}

pub fn report_summary(
    records: &[HistoricalRecord],
    policy: &ThresholdPolicy,
    scales: &ReportScales,
) -> UsageResult<ReportSummary> {
    let days = records.len();
    let (avg_level, avg_usage) = if days == 0 {
        (0.0, 0.0)
    } else {
        let level_sum: f64 = records.iter().map(|r| r.level).sum();
        let usage_sum: f64 = records.iter().map(|r| r.usage).sum();
        ((level_sum / days as f64).round(), (usage_sum / days as f64).round())
    };

    let rows = records
        .iter()
        .map(|r| -> UsageResult<ReportRow> {
            Ok(ReportRow {
                date: r.date,
                level: r.level,
                usage: r.usage,
                status: policy.classify(r.level),
                level_percent: compute_fill_percentage(scales.level, r.level)?,
                usage_percent: compute_fill_percentage(scales.usage, r.usage)?,
            })
        })
        .collect::<UsageResult<Vec<_>>>()?;

    Ok(ReportSummary { days, avg_level, avg_usage, rows })
}

pub fn report_csv(records: &[HistoricalRecord]) -> String {
    std::iter::once("Date,Water Level (L),Usage (L)".to_string())
        .chain(records.iter().map(|r| format!("{},{},{}", r.date, r.level, r.usage)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::severity::REPORT_LITERS_POLICY;

    fn farmer(id: u32, name: &str, email: &str, quota: f64, usage: f64) -> Farmer {
        Farmer {
            id,
            name: name.into(),
            email: email.into(),
            quota,
            current_usage: usage,
            role: "Farmer".into(),
        }
    }

    fn record(date: &str, level: f64, usage: f64) -> HistoricalRecord {
        HistoricalRecord {
            date: date.parse().unwrap(),
            level,
            usage,
        }
    }

    const SCALES: ReportScales = ReportScales { level: 500.0, usage: 25000.0 };

    #[test]
    fn test_community_summary() {
        let farmers = vec![
            farmer(1, "Arun Patel", "arun@example.com", 6000.0, 6200.0),
            farmer(2, "Priya Sharma", "priya@example.com", 5000.0, 3800.0),
        ];
        let summary = community_summary(&farmers, None);
        assert_eq!(summary.total_farmers, 2);
        assert_eq!(summary.total_quota, 11000.0);
        assert_eq!(summary.total_usage, 10000.0);
        assert_eq!(summary.remaining, 1000.0);
        assert_eq!(summary.exceeded_count, 1);
        assert_eq!(summary.farmers.len(), 2);
        assert!(summary.farmers[0].status.unwrap().exceeded);
        assert_eq!(summary.farmers[0].bar_percentage, Some(100.0));
        assert_eq!(summary.farmers[1].bar_percentage, Some(76.0));
    }

    #[test]
    fn test_community_search() {
        let farmers = vec![
            farmer(1, "Arun Patel", "arun@example.com", 6000.0, 6200.0),
            farmer(2, "Priya Sharma", "priya@example.com", 5000.0, 3800.0),
        ];

        let summary = community_summary(&farmers, Some("PRIYA"));
        assert_eq!(summary.farmers.len(), 1);
        assert_eq!(summary.farmers[0].id, 2);
        // Totals ignore the filter
        assert_eq!(summary.total_farmers, 2);
        assert_eq!(summary.exceeded_count, 1);

        let summary = community_summary(&farmers, Some("arun@"));
        assert_eq!(summary.farmers[0].id, 1);

        let summary = community_summary(&farmers, Some("nobody"));
        assert!(summary.farmers.is_empty());

        // Search text is matched as given, surrounding spaces included
        let summary = community_summary(&farmers, Some(" arun"));
        assert!(summary.farmers.is_empty());
        let summary = community_summary(&farmers, Some("arun patel"));
        assert_eq!(summary.farmers.len(), 1);
    }

    #[test]
    fn test_empty_community() {
        let summary = community_summary(&[], None);
        assert_eq!(summary.total_quota, 0.0);
        assert_eq!(summary.usage_percentage, None);
    }

    #[test]
    fn test_zero_quota_farmer_keeps_the_rest() {
        let farmers = vec![
            farmer(1, "Arun Patel", "arun@example.com", 6000.0, 6200.0),
            farmer(2, "New Farmer", "new@example.com", 0.0, 0.0),
            farmer(3, "Suresh Yadav", "suresh@example.com", 5000.0, 100.0),
        ];
        let summary = community_summary(&farmers, None);
        assert_eq!(summary.total_farmers, 3);
        assert_eq!(summary.total_quota, 11000.0);
        assert_eq!(summary.total_usage, 6300.0);
        assert_eq!(summary.exceeded_count, 1);
        assert!(summary.usage_percentage.is_some());

        assert_eq!(summary.farmers.len(), 3);
        assert!(summary.farmers[0].status.unwrap().exceeded);
        assert_eq!(summary.farmers[1].status, None);
        assert_eq!(summary.farmers[1].bar_percentage, None);
        assert_eq!(summary.farmers[2].status.unwrap().remaining, 4900.0);
    }

    #[test]
    fn test_all_zero_quotas_have_no_percentage() {
        let farmers = vec![farmer(1, "Zero", "zero@example.com", 0.0, 10.0)];
        let summary = community_summary(&farmers, None);
        assert_eq!(summary.usage_percentage, None);
        assert_eq!(summary.exceeded_count, 1);
        assert_eq!(summary.farmers[0].status, None);
    }

    #[test]
    fn test_report_summary() {
        let records = vec![
            record("2025-01-09", 420.0, 17800.0),
            record("2025-01-10", 380.0, 19200.0),
            record("2025-01-11", 290.0, 21500.0),
        ];
        let summary = report_summary(&records, &REPORT_LITERS_POLICY, &SCALES).unwrap();
        assert_eq!(summary.days, 3);
        assert_eq!(summary.avg_level, 363.0);
        assert_eq!(summary.avg_usage, 19500.0);
        assert_eq!(summary.rows[0].status, Severity::Normal);
        assert_eq!(summary.rows[1].status, Severity::Low);
        assert_eq!(summary.rows[2].status, Severity::Critical);
        assert_eq!(summary.rows[0].level_percent, 84.0);
        assert_eq!(summary.rows[2].usage_percent, 86.0);
    }

    #[test]
    fn test_empty_report() {
        let summary = report_summary(&[], &REPORT_LITERS_POLICY, &SCALES).unwrap();
        assert_eq!(summary.days, 0);
        assert_eq!(summary.avg_level, 0.0);
        assert_eq!(summary.avg_usage, 0.0);
    }

    #[test]
    fn test_report_csv() {
        let records = vec![
            record("2025-01-09", 420.0, 17800.0),
            record("2025-01-10", 380.5, 19200.0),
        ];
        assert_eq!(
            report_csv(&records),
            "Date,Water Level (L),Usage (L)\n2025-01-09,420,17800\n2025-01-10,380.5,19200"
        );
        assert_eq!(report_csv(&[]), "Date,Water Level (L),Usage (L)");
    }
}
