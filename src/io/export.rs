//! CSV export for estimate results.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::estimator::{EstimatorInput, EstimatorResult};

/// Column header for the estimate summary CSV.
const HEADER: &str = "timestamp_unix,capacity_kw,flex_hours_per_day,window_start,window_end,\
                      baseline_rate_p,peak_rate_p,participation_low_pct,participation_high_pct,\
                      cost_savings_low,cost_savings_high,incentive_low,incentive_high,\
                      total_low,total_high,co2_savings_kg,programs";

/// Exports one estimate (inputs and results) to a CSV file at the given path.
///
/// Writes a header row and a single summary row. Produces deterministic
/// output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(input: &EstimatorInput, result: &EstimatorResult, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(input, result, buf)
}

/// Writes one estimate summary as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(
    input: &EstimatorInput,
    result: &EstimatorResult,
    writer: impl Write,
) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(',').map(str::trim))?;

    // Summary row
    wtr.write_record(&[
        result.timestamp_unix.to_string(),
        format!("{:.2}", input.capacity_kw),
        format!("{:.2}", input.flex_hours_per_day),
        input
            .window_start
            .clone()
            .unwrap_or_else(|| "Not specified".to_string()),
        input
            .window_end
            .clone()
            .unwrap_or_else(|| "Not specified".to_string()),
        format!("{:.2}", input.baseline_rate_p),
        format!("{:.2}", input.peak_rate_p),
        format!("{:.1}", input.participation_low_pct),
        format!("{:.1}", input.participation_high_pct),
        format!("{:.2}", result.cost_savings_low),
        format!("{:.2}", result.cost_savings_high),
        format!("{:.2}", result.incentive_low),
        format!("{:.2}", result.incentive_high),
        format!("{:.2}", result.total_low),
        format!("{:.2}", result.total_high),
        format!("{:.2}", result.co2_savings_kg),
        input.programs.join(", "),
    ])?;

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenarioConfig;
    use crate::estimator::estimate;

    fn sample() -> (EstimatorInput, EstimatorResult) {
        let input = ScenarioConfig::battery_fleet().to_input();
        let result = estimate(&input);
        (input, result)
    }

    #[test]
    fn header_row_matches_schema() {
        let (input, result) = sample();
        let mut buf = Vec::new();
        write_csv(&input, &result, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let first_line = output.as_deref().unwrap_or("").lines().next().unwrap_or("");
        assert!(first_line.starts_with("timestamp_unix,capacity_kw"));
        assert!(first_line.ends_with("co2_savings_kg,programs"));
    }

    #[test]
    fn exactly_one_summary_row() {
        let (input, result) = sample();
        let mut buf = Vec::new();
        write_csv(&input, &result, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        assert_eq!(output.as_deref().map(|o| o.lines().count()), Some(2));
    }

    #[test]
    fn round_trip_parseable() {
        let (input, result) = sample();
        let mut buf = Vec::new();
        write_csv(&input, &result, &mut buf).ok();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let headers = rdr.headers().cloned().ok();
        assert_eq!(headers.as_ref().map(csv::StringRecord::len), Some(17));

        let rows: Vec<_> = rdr.records().collect();
        assert_eq!(rows.len(), 1);
        let row = rows[0].as_ref().ok();
        assert!(row.is_some(), "summary row should parse");
        // Monetary columns parse as f64
        for i in 9..16 {
            let val: Option<Result<f64, _>> = row.map(|r| r[i].parse());
            assert!(val.is_some_and(|v| v.is_ok()), "column {i} should parse as f64");
        }
        // Program list survives the embedded comma via quoting
        assert_eq!(
            row.map(|r| r[16].to_string()),
            Some("Dynamic Containment (DC), Dynamic Moderation (DM)".to_string())
        );
    }

    #[test]
    fn deterministic_output() {
        let (input, result) = sample();
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_csv(&input, &result, &mut buf1).ok();
        write_csv(&input, &result, &mut buf2).ok();
        assert_eq!(buf1, buf2);
    }
}
