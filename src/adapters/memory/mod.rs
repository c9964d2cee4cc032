//! In-memory adapters for tests and keyless demo deployments.

mod decision_repository;

pub use decision_repository::InMemoryDecisionRepository;
