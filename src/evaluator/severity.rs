use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Low,
    Normal,
}

/// Three-tier classification over a single unit (percent, liters, ...).
///
/// Values strictly below `critical_below` are critical, values strictly below
/// `low_below` are low, everything else is normal.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPolicy {
    pub critical_below: f64,
    pub low_below: f64,
}

// Tank fill level and alert classification, in percent filled
pub const TANK_PERCENT_POLICY: ThresholdPolicy = ThresholdPolicy {
    critical_below: 20.0,
    low_below: 50.0,
};

// Historical report rows, in absolute liters
pub const REPORT_LITERS_POLICY: ThresholdPolicy = ThresholdPolicy {
    critical_below: 300.0,
    low_below: 400.0,
};

impl ThresholdPolicy {
    pub fn classify(&self, value: f64) -> Severity {
        if value < self.critical_below {
            Severity::Critical
        } else if value < self.low_below {
            Severity::Low
        } else {
            Severity::Normal
        }
    }
}

pub fn classify_severity(percentage: f64) -> Severity {
    TANK_PERCENT_POLICY.classify(percentage)
}
