//! File output: estimate summary export.

pub mod export;
