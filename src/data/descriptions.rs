//! Plain-English copy for services and technical-requirement fields.

/// User-facing description of a service, keyed by exact display name.
const SERVICE_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "Capacity Market (CM)",
        "A long-term market where you're paid to guarantee capacity availability during peak demand periods.",
    ),
    (
        "Wholesale Market (WM)",
        "Trading electricity in advance through day-ahead and intraday markets based on supply and demand.",
    ),
    (
        "Balancing Market (BM)",
        "Real-time trading where the ESO adjusts your generation or demand to balance the grid.",
    ),
    (
        "Balancing Reserve (BR)",
        "Providing rapid response reserve capacity to help manage unexpected generation losses.",
    ),
    (
        "Quick Reserve (QR)",
        "Fast-acting reserve that can deliver full power within 2 minutes for grid stability.",
    ),
    (
        "Short Term Operating Reserve (STOR)",
        "Providing backup power or demand reduction within 20 minutes of instruction.",
    ),
    (
        "Dynamic Containment (DC)",
        "Fastest frequency response service, automatically correcting frequency deviations within 1 second.",
    ),
    (
        "Dynamic Moderation (DM)",
        "Automatic frequency response service reacting within 1 second to moderate frequency changes.",
    ),
    (
        "Dynamic Regulation (DR)",
        "Continuous automatic response to regulate grid frequency within narrow tolerances.",
    ),
    (
        "Static Firm Frequency Response (SFFR)",
        "Traditional frequency response service providing automatic power adjustments.",
    ),
    (
        "Demand Flexibility Service (DFS)",
        "National scheme for reducing electricity demand during peak periods (typically 4-7pm).",
    ),
    (
        "Peak load reduction (PR)",
        "Services to reduce demand during network peak times, helping avoid reinforcement costs.",
    ),
];

/// Explanation of a technical-requirement field, keyed by field name.
const FIELD_EXPLANATIONS: &[(&str, &str)] = &[
    (
        "Payment structure",
        "How you get paid - availability fees, utilization fees, or both",
    ),
    (
        "Procurement mechanism",
        "How the service is bought - auction, tender, bilateral contract, etc.",
    ),
    (
        "Procurement frequency",
        "How often procurement windows open (daily, monthly, annually)",
    ),
    (
        "Contract length",
        "Duration of your commitment once accepted into the service",
    ),
    (
        "Pre-qualification",
        "Requirements you must meet before you can participate",
    ),
    (
        "Minimum capacity",
        "Smallest MW size that can participate in the service",
    ),
    (
        "Maximum capacity",
        "Largest MW size or no upper limit for participation",
    ),
    (
        "Metering requirements",
        "Type of meter and data collection needed (e.g., half-hourly, second-by-second)",
    ),
    (
        "Response time",
        "How quickly you must deliver full power after receiving instruction",
    ),
    (
        "Sustained delivery time",
        "How long you must maintain your response once activated",
    ),
    (
        "Recovery time",
        "How long before you must be ready to respond again",
    ),
    (
        "Availability windows",
        "When the service operates (24/7, peak hours, seasonal)",
    ),
    (
        "Notice period",
        "How much warning you get before being dispatched",
    ),
    (
        "Baseline methodology",
        "How your normal consumption/generation is calculated for measuring response",
    ),
    (
        "Operational direction",
        "What you're asked to do - increase, decrease, or both",
    ),
    (
        "Performance monitoring",
        "How your delivery is measured and verified",
    ),
    (
        "Penalties",
        "Financial consequences for underdelivery or non-compliance",
    ),
    (
        "Availability",
        "How often you must be ready to provide the service",
    ),
];

/// User-friendly description of a service, if one exists.
pub fn service_description(service_name: &str) -> Option<&'static str> {
    SERVICE_DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == service_name)
        .map(|(_, text)| *text)
}

/// Explanation for a technical field, with a fuzzy fallback.
///
/// Tries an exact match first, then case-insensitive substring containment
/// in either direction, so dataset field variants like "Minimum capacity
/// (MW)" still resolve.
pub fn field_explanation(field_name: &str) -> Option<&'static str> {
    if let Some((_, text)) = FIELD_EXPLANATIONS.iter().find(|(name, _)| *name == field_name) {
        return Some(text);
    }
    let lower = field_name.to_lowercase();
    FIELD_EXPLANATIONS
        .iter()
        .find(|(name, _)| {
            let key = name.to_lowercase();
            lower.contains(&key) || key.contains(&lower)
        })
        .map(|(_, text)| *text)
}
