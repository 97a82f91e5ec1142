//! Adapters for external dependencies.

pub mod history_sea;

pub use history_sea::SeaHistoryRepo;
