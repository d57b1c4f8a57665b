//! Character-level machines for lexing and scanning.
//!
//! This module specializes the engine to `char` conditions:
//! - The [`Pattern`] mini-language for single-character classes
//! - Edge registration straight from pattern text or a bare character
//!
//! A [`TextMachine`] is an ordinary [`Machine`] and keeps its whole API;
//! the methods here only add the character-flavored registration surface.

mod error;
mod pattern;

pub use error::PatternError;
pub use pattern::Pattern;

use std::fmt;
use std::hash::Hash;

use crate::core::{EdgeFlags, Machine};

/// A machine driven one character at a time.
pub type TextMachine<S> = Machine<S, char>;

impl<S> Machine<S, char>
where
    S: Clone + Eq + Hash + fmt::Debug,
{
    /// Register an edge guarded by a [`Pattern`], written in pattern text.
    ///
    /// The pattern is compiled eagerly, so a malformed pattern is rejected
    /// here rather than at processing time. Its text becomes the edge
    /// label.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the pattern does not parse; the
    /// machine is left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use edgewise::{EdgeFlags, TextMachine};
    ///
    /// let mut machine: TextMachine<u32> = TextMachine::new(0);
    /// machine.add_pattern_edge(0, 1, "a-z", EdgeFlags::NONE)?;
    /// machine.add_pattern_edge(1, 1, "a-z0-9", EdgeFlags::NONE)?;
    ///
    /// assert!(machine.process('h'));
    /// assert!(machine.process('i'));
    /// assert_eq!(machine.current_state(), &1);
    /// # Ok::<(), edgewise::PatternError>(())
    /// ```
    pub fn add_pattern_edge(
        &mut self,
        source: S,
        destination: S,
        pattern: &str,
        flags: EdgeFlags,
    ) -> Result<(), PatternError> {
        let compiled = Pattern::parse(pattern)?;
        self.add_edge(source, destination, compiled, pattern, flags);
        Ok(())
    }

    /// Register a global edge guarded by a [`Pattern`].
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the pattern does not parse; the
    /// machine is left untouched.
    pub fn add_pattern_global_edge(
        &mut self,
        destination: S,
        pattern: &str,
        flags: EdgeFlags,
    ) -> Result<(), PatternError> {
        let compiled = Pattern::parse(pattern)?;
        self.add_global_edge(destination, compiled, pattern, flags);
        Ok(())
    }

    /// Register an edge matching exactly one character, labeled with that
    /// character.
    pub fn add_char_edge(&mut self, source: S, destination: S, sym: char, flags: EdgeFlags) {
        self.add_edge(source, destination, sym, sym.to_string(), flags);
    }

    /// Register a global edge matching exactly one character.
    pub fn add_char_global_edge(&mut self, destination: S, sym: char, flags: EdgeFlags) {
        self.add_global_edge(destination, sym, sym.to_string(), flags);
    }
}
