//! Edges connecting machine states.
//!
//! An edge binds a source state to a destination state behind a [`Rule`].
//! Flags refine how an edge participates in resolution: silent edges move
//! the machine without reporting an observable change, and global edges are
//! consulted from every state after the per-state list is exhausted.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::core::rule::Rule;

/// Flag set controlling edge behavior during resolution.
///
/// Flags combine with `|`. Membership is asked through
/// [`contains`](EdgeFlags::contains); testing a combined set with `==`
/// would conflate "exactly these flags" with "at least these flags".
///
/// # Example
///
/// ```rust
/// use edgewise::EdgeFlags;
///
/// let flags = EdgeFlags::SILENT | EdgeFlags::GLOBAL;
/// assert!(flags.contains(EdgeFlags::SILENT));
/// assert!(flags.contains(EdgeFlags::GLOBAL));
/// assert!(!EdgeFlags::NONE.contains(EdgeFlags::SILENT));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeFlags(u8);

impl EdgeFlags {
    /// Plain edge: no special behavior.
    pub const NONE: EdgeFlags = EdgeFlags(0);
    /// Traversing the edge does not count as an observable state change.
    pub const SILENT: EdgeFlags = EdgeFlags(1);
    /// The edge applies from every state, after per-state edges.
    pub const GLOBAL: EdgeFlags = EdgeFlags(1 << 1);

    /// Whether every flag in `other` is set in `self`.
    pub fn contains(self, other: EdgeFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no flag is set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for EdgeFlags {
    type Output = EdgeFlags;

    fn bitor(self, rhs: EdgeFlags) -> EdgeFlags {
        EdgeFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for EdgeFlags {
    fn bitor_assign(&mut self, rhs: EdgeFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for EdgeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        let mut sep = "";
        if self.contains(EdgeFlags::SILENT) {
            f.write_str("SILENT")?;
            sep = " | ";
        }
        if self.contains(EdgeFlags::GLOBAL) {
            f.write_str(sep)?;
            f.write_str("GLOBAL")?;
        }
        Ok(())
    }
}

/// A single transition: source and destination states, a guarding rule,
/// a display label, and behavior flags.
///
/// Edges are created through [`Machine::add_edge`] and
/// [`Machine::add_global_edge`] rather than directly; the machine owns the
/// bookkeeping that makes an edge reachable.
///
/// [`Machine::add_edge`]: crate::Machine::add_edge
/// [`Machine::add_global_edge`]: crate::Machine::add_global_edge
pub struct Edge<S, C> {
    source: S,
    destination: S,
    rule: Rule<C>,
    label: String,
    flags: EdgeFlags,
}

impl<S, C> Edge<S, C> {
    pub(crate) fn new(
        source: S,
        destination: S,
        rule: Rule<C>,
        label: impl Into<String>,
        flags: EdgeFlags,
    ) -> Self {
        Edge {
            source,
            destination,
            rule,
            label: escape_label(&label.into()),
            flags,
        }
    }

    /// State the edge leaves from. For global edges this records the
    /// machine's default state and carries no resolution meaning.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// State the edge moves to.
    pub fn destination(&self) -> &S {
        &self.destination
    }

    /// The rule guarding the edge.
    pub fn rule(&self) -> &Rule<C> {
        &self.rule
    }

    /// Display label with backslashes doubled for graph renderers.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Behavior flags the edge was registered with.
    pub fn flags(&self) -> EdgeFlags {
        self.flags
    }
}

impl<S: Clone, C> Clone for Edge<S, C> {
    fn clone(&self) -> Self {
        Edge {
            source: self.source.clone(),
            destination: self.destination.clone(),
            rule: self.rule.clone(),
            label: self.label.clone(),
            flags: self.flags,
        }
    }
}

impl<S: fmt::Debug, C> fmt::Debug for Edge<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("source", &self.source)
            .field("destination", &self.destination)
            .field("label", &self.label)
            .field("flags", &self.flags)
            .finish()
    }
}

/// Double every backslash so the label stays readable once embedded in a
/// quoted graph attribute.
fn escape_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        if c == '\\' {
            escaped.push_str("\\\\");
        } else {
            escaped.push(c);
        }
    }
    escaped
}
