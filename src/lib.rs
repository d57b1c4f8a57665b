//! Edgewise: a hand-wired finite-state-machine engine for building lexers
//!
//! Edgewise keeps the machine explicit: you register edges one by one, each
//! guarded by a rule, then feed conditions through a single `process` call.
//! The engine is generic over state and condition types; the `text` layer
//! specializes it to characters with a compact single-character pattern
//! language, which is how most tokenizers end up wiring their states.
//!
//! # Core Concepts
//!
//! - **Machine**: states, edges, and the processing loop
//! - **Rule**: a predicate deciding whether an edge accepts a condition
//! - **Pattern**: the character-class mini-language for `char` machines
//! - **Graph export**: DOT and JSON snapshots of the wiring
//!
//! # Example
//!
//! ```rust
//! use edgewise::{EdgeFlags, TextMachine};
//!
//! const READY: u32 = 0;
//! const WORD: u32 = 1;
//! const NUMBER: u32 = 2;
//!
//! let mut machine: TextMachine<u32> = TextMachine::new(READY);
//! machine.add_pattern_edge(READY, WORD, "\\w", EdgeFlags::NONE)?;
//! machine.add_pattern_edge(WORD, WORD, "\\w\\d", EdgeFlags::NONE)?;
//! machine.add_pattern_edge(READY, NUMBER, "\\d", EdgeFlags::NONE)?;
//! machine.add_pattern_edge(NUMBER, NUMBER, "\\d", EdgeFlags::NONE)?;
//! machine.add_pattern_global_edge(READY, "\\s\\n", EdgeFlags::SILENT)?;
//!
//! for sym in "ab1".chars() {
//!     machine.process(sym);
//! }
//! assert_eq!(machine.current_state(), &WORD);
//!
//! // Whitespace silently returns the machine to READY.
//! assert!(!machine.process(' '));
//! assert_eq!(machine.current_state(), &READY);
//! # Ok::<(), edgewise::PatternError>(())
//! ```

pub mod core;
pub mod text;
pub mod viz;

// Re-export commonly used types
pub use crate::core::{Edge, EdgeFlags, Machine, ProcessOutcome, Rule};
pub use crate::text::{Pattern, PatternError, TextMachine};
pub use crate::viz::{ExportError, GraphEdge, GraphNode, MachineGraph};
