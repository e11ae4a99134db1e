pub mod client;
pub mod cycle;

pub use client::AnalysisClient;
pub use cycle::run_cycle;
