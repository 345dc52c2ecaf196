//! Task board management for Corkboard.
//!
//! This module implements the board's server side: durable task records with
//! a per-column sort position, the ordering engine that assigns and
//! renumbers positions across create, update, and bulk-reorder operations,
//! and the JSON request/response boundary an external HTTP front dispatches
//! into. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Pure ordering rules in [`ordering`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - The request/response boundary in [`api`]

pub mod adapters;
pub mod api;
pub mod domain;
pub mod ordering;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
