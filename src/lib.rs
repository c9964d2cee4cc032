//! PathFinder - AI-Powered Decision Analysis Engine
//!
//! This crate scores a caller's candidate options against weighted
//! priorities using a language-model provider, repairs the provider's
//! unreliable output into a schema-complete analysis, and persists
//! results for authenticated users.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
