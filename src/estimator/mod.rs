//! Deterministic cost/revenue/CO2 value estimator.

pub mod calc;
pub mod types;

pub use calc::co2_savings;
pub use calc::cost_savings;
pub use calc::incentive_revenue;
pub use calc::program_rate;
pub use types::EstimatorInput;
pub use types::EstimatorResult;
pub use types::estimate;
