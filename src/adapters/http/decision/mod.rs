//! Decision HTTP adapter: DTOs, handlers, and routes.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::DecisionHandlers;
pub use routes::decision_routes;
