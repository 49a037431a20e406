use serde::Serialize;
use crate::errors::{UsageError, UsageResult};
use super::severity::{Severity, ThresholdPolicy};

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct QuotaStatus {
    pub remaining: f64,               // Signed, negative once exceeded
    pub exceeded: bool,
    pub percentage_unclamped: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct TankStatus {
    pub tank_depth: f64,
    pub water_level: f64,
    pub percentage: f64,
    pub severity: Severity,
    pub estimated_refill_hours: f64,
}

fn check_capacity(capacity: f64) -> UsageResult<()> {
    if !capacity.is_finite() || capacity <= 0.0 {
        return Err(UsageError::InvalidCapacity(capacity));
    }
    Ok(())
}

fn check_amount(amount: f64) -> UsageResult<()> {
    if !amount.is_finite() {
        return Err(UsageError::InvalidAmount(amount));
    }
    Ok(())
}

/// Percentage of `capacity` filled by `current_amount`, clamped to [0, 100].
pub fn compute_fill_percentage(capacity: f64, current_amount: f64) -> UsageResult<f64> {
    check_capacity(capacity)?;
    check_amount(current_amount)?;
    Ok((current_amount / capacity * 100.0).clamp(0.0, 100.0))
}

/// Quota arithmetic for one farmer.
///
/// `exceeded` and `percentage_unclamped` come from the raw ratio, so a
/// farmer at 6200 L of a 6000 L quota reports 103.3 % here even though
/// progress bars cap at 100.
pub fn compute_quota_status(quota: f64, usage: f64) -> UsageResult<QuotaStatus> {
    check_capacity(quota)?;
    check_amount(usage)?;
    Ok(QuotaStatus {
        remaining: quota - usage,
        exceeded: usage > quota,
        percentage_unclamped: usage / quota * 100.0,
    })
}

// Level is derived from the distance between sensor and water surface
pub fn tank_status(
    tank_depth: f64,
    current_distance: f64,
    policy: &ThresholdPolicy,
) -> UsageResult<TankStatus> {
    check_amount(current_distance)?;
    let water_level = tank_depth - current_distance;
    let percentage = compute_fill_percentage(tank_depth, water_level)?;

    Ok(TankStatus {
        tank_depth,
        water_level,
        percentage,
        severity: policy.classify(percentage),
        estimated_refill_hours: ((tank_depth - water_level) / 100.0).round(),
    })
}
