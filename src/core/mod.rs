//! Core state machine types and logic.
//!
//! This module contains the generic transition engine:
//! - Rule predicates guarding edges
//! - Edge records and their behavior flags
//! - The machine itself: registration, processing, inspection
//!
//! Everything here is generic over the state and condition types; the
//! character-level layer in [`crate::text`] builds on top of it.

mod edge;
mod machine;
mod rule;

pub use edge::{Edge, EdgeFlags};
pub use machine::{Machine, ProcessOutcome};
pub use rule::Rule;
