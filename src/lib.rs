//! Corkboard: kanban task board core.
//!
//! This crate provides the persistence, ordering, and interaction logic for
//! a three-column task board: durable task records with a per-column sort
//! position, the rules that assign and renumber those positions as tasks
//! are created, updated, and dragged between columns, and the pointer-driven
//! gesture model that turns a drag into a reorder command.
//!
//! # Architecture
//!
//! Corkboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`board`]: Task records, the ordering engine, and the request/response
//!   boundary consumed by an external HTTP front
//! - [`ui`]: Client-side board snapshots and the drag interaction controller

pub mod board;
pub mod ui;
