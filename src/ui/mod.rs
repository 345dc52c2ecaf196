//! Client-side board state and drag interaction for Corkboard.
//!
//! The front end renders from an immutable [`snapshot::BoardSnapshot`]
//! rebuilt after every mutation (store-and-reload, never in-place
//! mutation), describes its rendered geometry as [`layout`] rectangles,
//! and feeds pointer events into the [`drag::DragController`] state
//! machine, which turns a completed gesture into a reorder command for
//! the board API. DOM rendering and network transport stay with the
//! embedding front end.

pub mod drag;
pub mod layout;
pub mod snapshot;

#[cfg(test)]
mod tests;
