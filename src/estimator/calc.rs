//! Deterministic value-estimate formulas.
//!
//! Pure functions with no stored state, no I/O, and no randomness:
//! identical inputs always produce bit-identical outputs. Inputs are
//! expected pre-validated by the config layer; these functions clamp
//! output at zero, not input.

/// Indicative £/kW per availability-hour rate for a flexibility program.
///
/// Rates are based on recent NESO auction and DNO tender results. Unknown
/// program names fall back to a conservative 0.005.
pub fn program_rate(program: &str) -> f64 {
    match program {
        // £20/MW/h = £0.020/kW/h
        "Dynamic Containment (DC)" => 0.020,
        "Dynamic Moderation (DM)" => 0.015,
        "Dynamic Regulation (DR)" => 0.018,
        // Per kWh delivered (higher)
        "Demand Flexibility Service (DFS)" => 0.50,
        "Peak load reduction (PR)" => 0.010,
        "Balancing Reserve (BR)" => 0.012,
        "Quick Reserve (QR)" => 0.015,
        "Static Firm Frequency Response (SFFR)" => 0.010,
        _ => 0.005,
    }
}

const DAYS_PER_YEAR: f64 = 365.0;

/// Annual cost savings from time-shifting, as a (low, high) £ range.
///
/// Pence rates convert to £ by /100; daily shifted energy is capacity ×
/// flexibility hours; each bound scales by its participation rate over 365
/// days and floors at zero (a negative peak/off-peak differential yields
/// zero savings, never negative).
pub fn cost_savings(
    capacity_kw: f64,
    flex_hours_per_day: f64,
    peak_rate_p: f64,
    offpeak_rate_p: f64,
    participation_low_pct: f64,
    participation_high_pct: f64,
) -> (f64, f64) {
    let peak_rate = peak_rate_p / 100.0;
    let offpeak_rate = offpeak_rate_p / 100.0;

    let kwh_per_day = capacity_kw * flex_hours_per_day;
    let savings_per_kwh = peak_rate - offpeak_rate;

    let low = kwh_per_day * savings_per_kwh * (participation_low_pct / 100.0) * DAYS_PER_YEAR;
    let high = kwh_per_day * savings_per_kwh * (participation_high_pct / 100.0) * DAYS_PER_YEAR;

    (low.max(0.0), high.max(0.0))
}

/// Annual incentive revenue from selected programs, as a (low, high) £ range.
///
/// The applicable rate is the arithmetic mean of the selected programs'
/// rates, not a sum: stacking programs averages the per-kW-hour rate. This
/// is the source tool's deliberate conservative simplification and likely
/// underestimates genuine multi-program stacking revenue; it is preserved
/// as-is. Returns (0, 0) when no programs are selected.
pub fn incentive_revenue(
    capacity_kw: f64,
    programs: &[String],
    availability_hours_low: f64,
    availability_hours_high: f64,
    participation_low_pct: f64,
    participation_high_pct: f64,
) -> (f64, f64) {
    if programs.is_empty() {
        return (0.0, 0.0);
    }

    let rate_sum: f64 = programs.iter().map(|p| program_rate(p)).sum();
    let avg_rate = rate_sum / programs.len() as f64;

    let low = capacity_kw * avg_rate * availability_hours_low * (participation_low_pct / 100.0);
    let high = capacity_kw * avg_rate * availability_hours_high * (participation_high_pct / 100.0);

    (low.max(0.0), high.max(0.0))
}

/// Annual CO2 savings in kg from shifting to lower-carbon periods.
///
/// A single blended figure rather than a range: callers pass the mean of
/// their low and high participation rates. Floors at zero even when the
/// off-peak factor exceeds the peak factor.
pub fn co2_savings(
    capacity_kw: f64,
    flex_hours_per_day: f64,
    peak_emission_factor: f64,
    offpeak_emission_factor: f64,
    participation_avg_pct: f64,
) -> f64 {
    let kwh_per_day = capacity_kw * flex_hours_per_day;
    let emission_reduction = peak_emission_factor - offpeak_emission_factor;

    let savings =
        kwh_per_day * emission_reduction * (participation_avg_pct / 100.0) * DAYS_PER_YEAR;
    savings.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn cost_savings_worked_example() {
        // 100 kW × 4 h × £0.20/kWh × 365 days at 30% and 80%.
        let (low, high) = cost_savings(100.0, 4.0, 35.0, 15.0, 30.0, 80.0);
        assert!((low - 8760.0).abs() < 1e-9, "low = {low}");
        assert!((high - 23360.0).abs() < 1e-9, "high = {high}");
    }

    #[test]
    fn cost_savings_zero_capacity_is_zero() {
        let (low, high) = cost_savings(0.0, 4.0, 35.0, 15.0, 30.0, 80.0);
        assert_eq!((low, high), (0.0, 0.0));
    }

    #[test]
    fn cost_savings_inverted_tariff_floors_at_zero() {
        // Off-peak above peak: negative differential floors to zero.
        let (low, high) = cost_savings(100.0, 4.0, 15.0, 35.0, 30.0, 80.0);
        assert_eq!((low, high), (0.0, 0.0));
    }

    #[test]
    fn incentive_revenue_worked_example() {
        let programs = strings(&["Dynamic Containment (DC)"]);
        let (low, high) = incentive_revenue(1000.0, &programs, 2000.0, 4000.0, 30.0, 80.0);
        assert!((low - 12000.0).abs() < 1e-9, "low = {low}");
        assert!((high - 64000.0).abs() < 1e-9, "high = {high}");
    }

    #[test]
    fn incentive_revenue_no_programs_is_zero() {
        let (low, high) = incentive_revenue(5000.0, &[], 2000.0, 4000.0, 30.0, 80.0);
        assert_eq!((low, high), (0.0, 0.0));
    }

    #[test]
    fn incentive_revenue_averages_rates_rather_than_summing() {
        // DC (0.020) + PR (0.010) average to 0.015.
        let programs = strings(&["Dynamic Containment (DC)", "Peak load reduction (PR)"]);
        let (low, _) = incentive_revenue(1000.0, &programs, 1000.0, 1000.0, 100.0, 100.0);
        assert!((low - 15000.0).abs() < 1e-9, "low = {low}");
    }

    #[test]
    fn incentive_revenue_unknown_program_uses_fallback_rate() {
        let programs = strings(&["Mystery Scheme"]);
        let (low, _) = incentive_revenue(1000.0, &programs, 1000.0, 1000.0, 100.0, 100.0);
        assert!((low - 5000.0).abs() < 1e-9, "low = {low}");
    }

    #[test]
    fn co2_savings_worked_example() {
        // 100 kW × 4 h × 0.10 kg/kWh × 55% × 365 = 8030 kg/year.
        let co2 = co2_savings(100.0, 4.0, 0.25, 0.15, 55.0);
        assert!((co2 - 8030.0).abs() < 1e-9, "co2 = {co2}");
    }

    #[test]
    fn co2_savings_inverted_factors_floor_at_zero() {
        let co2 = co2_savings(100.0, 4.0, 0.15, 0.25, 55.0);
        assert_eq!(co2, 0.0);
    }

    #[test]
    fn estimator_functions_are_idempotent() {
        let a = cost_savings(123.4, 5.5, 33.3, 11.1, 25.0, 75.0);
        let b = cost_savings(123.4, 5.5, 33.3, 11.1, 25.0, 75.0);
        assert_eq!(a, b);

        let programs = strings(&["Quick Reserve (QR)", "Balancing Reserve (BR)"]);
        let x = incentive_revenue(321.0, &programs, 1500.0, 3500.0, 20.0, 90.0);
        let y = incentive_revenue(321.0, &programs, 1500.0, 3500.0, 20.0, 90.0);
        assert_eq!(x, y);

        assert_eq!(
            co2_savings(80.0, 6.0, 0.22, 0.12, 40.0),
            co2_savings(80.0, 6.0, 0.22, 0.12, 40.0)
        );
    }

    #[test]
    fn known_program_rates_match_the_table() {
        assert_eq!(program_rate("Dynamic Containment (DC)"), 0.020);
        assert_eq!(program_rate("Demand Flexibility Service (DFS)"), 0.50);
        assert_eq!(program_rate("Static Firm Frequency Response (SFFR)"), 0.010);
        assert_eq!(program_rate("not a program"), 0.005);
    }
}
