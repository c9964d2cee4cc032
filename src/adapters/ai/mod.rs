//! Analysis provider adapters.

mod failover_provider;
mod groq_provider;
mod heuristic_provider;

pub use failover_provider::FailoverAnalysisProvider;
pub use groq_provider::{GroqAnalysisProvider, GroqConfig};
pub use heuristic_provider::HeuristicAnalysisProvider;
