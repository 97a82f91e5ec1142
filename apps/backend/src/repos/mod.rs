//! Data-access interface the view services depend on.

pub mod history;

pub use history::HistoryRepo;
