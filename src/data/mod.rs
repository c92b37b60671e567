//! Static reference data: dataset model, load-once store, and display copy.

/// Service and field description tables.
pub mod descriptions;
pub mod model;
pub mod store;

// Re-export the main types for convenience
pub use model::Classification;
pub use model::CompatibilityCell;
pub use model::Mode;
pub use model::StackingDataset;
pub use store::CompatibilityStore;
pub use store::DataError;
pub use store::PairCompatibility;
