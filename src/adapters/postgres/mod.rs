//! PostgreSQL adapters.

mod decision_repository;

pub use decision_repository::PostgresDecisionRepository;
