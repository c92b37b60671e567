use crate::data::descriptions::{field_explanation, service_description};
use crate::data::model::{DatasetMetadata, Mode, RequirementRecord};
use crate::data::store::PairCompatibility;
use crate::estimator::EstimatorResult;

pub fn print_metadata(meta: &DatasetMetadata) {
    println!("{} (v{})", meta.title, meta.version);
    println!("Source: {} — {}", meta.source, meta.date);
}

pub fn print_compatibility_report(pairs: &[PairCompatibility]) {
    println!("\n--- Stacking Compatibility ---");
    for pair in pairs {
        println!("\n{} + {}", pair.service_a, pair.service_b);
        for mode in Mode::ALL {
            let cell = pair.cell(mode);
            let badge = cell.classification().badge();
            let value = cell.value.as_deref().unwrap_or("No data available");
            println!("  {badge:<5} {mode:<11} {value}");
        }
    }
}

pub fn print_requirements(service: &str, reqs: &RequirementRecord) {
    println!("\n--- Technical Requirements: {service} ---");
    if let Some(text) = service_description(service) {
        println!("{text}");
    }
    if reqs.is_empty() {
        println!("No technical requirement data available for this service.");
        return;
    }
    for (field, value) in reqs {
        let rendered = match value.as_str() {
            Some(s) => s.to_string(),
            None => value.to_string(),
        };
        match field_explanation(field) {
            Some(explanation) => println!("  {field}: {rendered}\n      ({explanation})"),
            None => println!("  {field}: {rendered}"),
        }
    }
}

pub fn print_estimate_report(result: &EstimatorResult) {
    println!("\n--- Estimated Annual Value ---");
    println!(
        "Cost savings:      £{:.0} - £{:.0}",
        result.cost_savings_low, result.cost_savings_high
    );
    if result.incentive_high > 0.0 {
        println!(
            "Incentive revenue: £{:.0} - £{:.0} (if available and eligible; not guaranteed)",
            result.incentive_low, result.incentive_high
        );
    }
    println!(
        "Total value:       £{:.0} - £{:.0}",
        result.total_low, result.total_high
    );
    if result.co2_savings_kg > 0.0 {
        println!(
            "CO2 savings:       {:.0} kg/year ({:.1} tonnes)",
            result.co2_savings_kg,
            result.co2_savings_kg / 1000.0
        );
    }
    println!("\nEstimates only — verify with NESO and your DNO before committing.");
}
