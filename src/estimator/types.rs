//! Estimator input and result records.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::calc;

/// User-supplied inputs for one estimate.
///
/// Recomputed from scratch on every submission; nothing persists beyond the
/// result record. Range expectations (capacity > 0, hours within 0–24,
/// percentages within 0–100, low ≤ high) are the config layer's to enforce
/// before this record is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorInput {
    /// Maximum power that can be shifted or controlled (kW).
    pub capacity_kw: f64,
    /// Hours per day electricity use can shift (0.5–24).
    pub flex_hours_per_day: f64,
    /// Earliest shifting start, e.g. "16:00". Display-only.
    #[serde(default)]
    pub window_start: Option<String>,
    /// Latest shifting finish. Display-only.
    #[serde(default)]
    pub window_end: Option<String>,
    /// Off-peak or average rate (p/kWh).
    pub baseline_rate_p: f64,
    /// Peak rate (p/kWh), typically 4-7pm.
    pub peak_rate_p: f64,
    /// Conservative participation estimate (%).
    pub participation_low_pct: f64,
    /// Optimistic participation estimate (%).
    pub participation_high_pct: f64,
    /// Selected incentive-program names; empty disables incentive revenue.
    #[serde(default)]
    pub programs: Vec<String>,
    /// Conservative availability (hours/year), required with programs.
    #[serde(default)]
    pub availability_hours_low: Option<f64>,
    /// Optimistic availability (hours/year).
    #[serde(default)]
    pub availability_hours_high: Option<f64>,
    /// Peak carbon intensity (kg CO2/kWh); `None` disables the CO2 figure.
    #[serde(default)]
    pub peak_emission_factor: Option<f64>,
    /// Off-peak carbon intensity (kg CO2/kWh).
    #[serde(default)]
    pub offpeak_emission_factor: Option<f64>,
}

/// Derived value estimate. Never stored; purely a function of the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorResult {
    /// Annual cost savings, conservative bound (£).
    pub cost_savings_low: f64,
    /// Annual cost savings, optimistic bound (£).
    pub cost_savings_high: f64,
    /// Annual incentive revenue, conservative bound (£). Zero without programs.
    pub incentive_low: f64,
    /// Annual incentive revenue, optimistic bound (£).
    pub incentive_high: f64,
    /// Blended annual CO2 savings (kg). Zero when emission factors are absent.
    pub co2_savings_kg: f64,
    /// Savings plus incentives, conservative (£).
    pub total_low: f64,
    /// Savings plus incentives, optimistic (£).
    pub total_high: f64,
    /// Unix seconds at which the estimate was produced.
    pub timestamp_unix: u64,
}

/// Runs all three formulas over one input record.
///
/// Incentive revenue is (0, 0) when no programs are selected or no
/// availability hours were given; the CO2 figure uses the mean of the two
/// participation rates and is 0 unless both emission factors are present.
/// Apart from the timestamp the output depends only on the input.
pub fn estimate(input: &EstimatorInput) -> EstimatorResult {
    let (cost_low, cost_high) = calc::cost_savings(
        input.capacity_kw,
        input.flex_hours_per_day,
        input.peak_rate_p,
        input.baseline_rate_p,
        input.participation_low_pct,
        input.participation_high_pct,
    );

    let (incentive_low, incentive_high) = match (
        input.availability_hours_low,
        input.availability_hours_high,
    ) {
        (Some(avail_low), Some(avail_high)) => calc::incentive_revenue(
            input.capacity_kw,
            &input.programs,
            avail_low,
            avail_high,
            input.participation_low_pct,
            input.participation_high_pct,
        ),
        _ => (0.0, 0.0),
    };

    let co2_savings_kg = match (input.peak_emission_factor, input.offpeak_emission_factor) {
        (Some(peak), Some(offpeak)) => {
            let participation_avg =
                (input.participation_low_pct + input.participation_high_pct) / 2.0;
            calc::co2_savings(
                input.capacity_kw,
                input.flex_hours_per_day,
                peak,
                offpeak,
                participation_avg,
            )
        }
        _ => 0.0,
    };

    EstimatorResult {
        cost_savings_low: cost_low,
        cost_savings_high: cost_high,
        incentive_low,
        incentive_high,
        co2_savings_kg,
        total_low: cost_low + incentive_low,
        total_high: cost_high + incentive_high,
        timestamp_unix: unix_now(),
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
