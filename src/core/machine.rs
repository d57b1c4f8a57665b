//! The transition engine: states, edge registration, and condition
//! processing.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::core::edge::{Edge, EdgeFlags};
use crate::core::rule::Rule;

/// Result of processing one condition, as reported by
/// [`Machine::process_outcome`].
///
/// `ended_state` carries the state the machine was in when the call began,
/// before any transition; it always equals [`Machine::previous_state`]
/// immediately after the call. Callers watching for token boundaries compare
/// it against the state the machine actually moved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessOutcome<S> {
    /// State observed at the start of the call.
    pub ended_state: S,
    /// Whether a non-silent edge was traversed.
    pub changed: bool,
}

/// A finite-state machine over arbitrary state and condition types.
///
/// States are registered implicitly when edges mention them. Conditions are
/// fed one at a time through [`process`](Machine::process); each call scans
/// the current state's edges in registration order, then the global edges,
/// and traverses the first edge whose [`Rule`] accepts the condition.
///
/// Two refinements shape the traversal:
///
/// * An edge flagged [`EdgeFlags::SILENT`] moves the machine without
///   counting as an observable change.
/// * When a traversal lands on the default state, the same condition is
///   resolved once more from there. A delimiter edge can therefore return
///   to the default state and immediately open the next run.
///
/// # Example
///
/// ```rust
/// use edgewise::{EdgeFlags, Machine, Rule};
///
/// let mut machine = Machine::new(0u32);
/// machine.add_edge(0, 1, Rule::new(|sym: &char| sym.is_ascii_digit()), "0-9", EdgeFlags::NONE);
/// machine.add_edge(1, 1, Rule::new(|sym: &char| sym.is_ascii_digit()), "0-9", EdgeFlags::NONE);
/// machine.add_global_edge(0, Rule::equals(' '), " ", EdgeFlags::SILENT);
///
/// assert!(machine.process('4'));
/// assert!(machine.process('2'));
/// assert_eq!(machine.current_state(), &1);
///
/// // The space hops back silently: no observable change.
/// assert!(!machine.process(' '));
/// assert_eq!(machine.current_state(), &0);
/// ```
pub struct Machine<S, C> {
    default_state: S,
    current_state: S,
    previous_state: S,
    possible_states: HashSet<S>,
    edges: HashMap<S, Vec<Edge<S, C>>>,
    global_edges: Vec<Edge<S, C>>,
    state_names: HashMap<S, String>,
}

impl<S, C> Machine<S, C>
where
    S: Clone + Eq + Hash + fmt::Debug,
{
    /// Create a machine resting in `default_state`.
    ///
    /// The default state doubles as the re-evaluation anchor: landing on it
    /// mid-call triggers one extra resolution of the same condition.
    pub fn new(default_state: S) -> Self {
        Machine::with_start(default_state.clone(), default_state)
    }

    /// Create a machine whose default and starting states differ.
    pub fn with_start(default_state: S, start_state: S) -> Self {
        let mut possible_states = HashSet::new();
        possible_states.insert(default_state.clone());
        possible_states.insert(start_state.clone());

        Machine {
            default_state,
            previous_state: start_state.clone(),
            current_state: start_state,
            possible_states,
            edges: HashMap::new(),
            global_edges: Vec::new(),
            state_names: HashMap::new(),
        }
    }

    /// Register an edge from `source` to `destination`, guarded by `rule`.
    ///
    /// Edges are consulted in registration order; the first acceptance wins.
    /// A bare condition value may be passed as the rule and registers an
    /// exact match. Both endpoints become known states.
    pub fn add_edge<R>(
        &mut self,
        source: S,
        destination: S,
        rule: R,
        label: impl Into<String>,
        flags: EdgeFlags,
    ) where
        R: Into<Rule<C>>,
    {
        let edge = Edge::new(
            source.clone(),
            destination.clone(),
            rule.into(),
            label,
            flags,
        );
        debug!(
            source = ?source,
            destination = ?destination,
            label = edge.label(),
            flags = ?flags,
            "edge registered"
        );
        self.possible_states.insert(source.clone());
        self.possible_states.insert(destination);
        self.edges.entry(source).or_default().push(edge);
    }

    /// Register an edge reachable from every state.
    ///
    /// Global edges are consulted after the current state's own edges, in
    /// registration order, and always carry [`EdgeFlags::GLOBAL`]. Only the
    /// destination becomes a known state; the recorded source is the default
    /// state and has no resolution meaning.
    pub fn add_global_edge<R>(
        &mut self,
        destination: S,
        rule: R,
        label: impl Into<String>,
        flags: EdgeFlags,
    ) where
        R: Into<Rule<C>>,
    {
        let edge = Edge::new(
            self.default_state.clone(),
            destination.clone(),
            rule.into(),
            label,
            flags | EdgeFlags::GLOBAL,
        );
        debug!(
            destination = ?destination,
            label = edge.label(),
            flags = ?edge.flags(),
            "global edge registered"
        );
        self.possible_states.insert(destination);
        self.global_edges.push(edge);
    }

    /// Attach a display name to a state for graph export and diagnostics.
    ///
    /// Naming a state does not register it; only edges and the constructors
    /// do that.
    pub fn set_state_name(&mut self, state: S, name: impl Into<String>) {
        self.state_names.insert(state, name.into());
    }

    /// Feed one condition through the machine.
    ///
    /// Resolution scans the current state's edges in registration order,
    /// then the global edges. The first edge whose rule accepts the
    /// condition is traversed. If that traversal lands on the default
    /// state, the condition is resolved once more from there; a second
    /// landing on the default state does not recurse further.
    ///
    /// Returns `true` when at least one non-silent edge was traversed
    /// during the call. Traversing only silent edges, or no edge at all,
    /// returns `false`.
    pub fn process(&mut self, condition: C) -> bool {
        self.previous_state = self.current_state.clone();
        let mut observed = false;

        if let Some((destination, flags)) = self.resolve(&condition) {
            self.change_state(destination);
            observed |= !flags.contains(EdgeFlags::SILENT);

            // Landing on the default state re-runs resolution exactly once
            // with the same condition.
            if self.current_state == self.default_state {
                if let Some((destination, flags)) = self.resolve(&condition) {
                    self.change_state(destination);
                    observed |= !flags.contains(EdgeFlags::SILENT);
                }
            }
        } else {
            trace!(state = ?self.current_state, "no edge accepted the condition");
        }

        observed
    }

    /// Feed one condition through the machine and report the outcome.
    ///
    /// Equivalent to [`process`](Machine::process), with the pre-call state
    /// bundled alongside the change flag. See [`ProcessOutcome`] for what
    /// `ended_state` holds.
    pub fn process_outcome(&mut self, condition: C) -> ProcessOutcome<S> {
        let changed = self.process(condition);
        ProcessOutcome {
            ended_state: self.previous_state.clone(),
            changed,
        }
    }

    /// State the machine is currently in.
    pub fn current_state(&self) -> &S {
        &self.current_state
    }

    /// State the machine was in when the last `process` call began.
    ///
    /// Before any processing this is the starting state.
    pub fn previous_state(&self) -> &S {
        &self.previous_state
    }

    /// The re-evaluation anchor state the machine was built with.
    pub fn default_state(&self) -> &S {
        &self.default_state
    }

    /// Display name attached to `state`, or `""` when none was set.
    pub fn state_name(&self, state: &S) -> &str {
        self.state_names
            .get(state)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// All states the machine knows about, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.possible_states.iter()
    }

    /// Edges registered from `state`, in registration order.
    pub fn edges_from(&self, state: &S) -> &[Edge<S, C>] {
        self.edges.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Global edges, in registration order.
    pub fn global_edges(&self) -> &[Edge<S, C>] {
        &self.global_edges
    }

    fn resolve(&self, condition: &C) -> Option<(S, EdgeFlags)> {
        self.edges_from(&self.current_state)
            .iter()
            .chain(self.global_edges.iter())
            .find(|edge| edge.rule().check(condition))
            .map(|edge| (edge.destination().clone(), edge.flags()))
    }

    fn change_state(&mut self, destination: S) {
        trace!(from = ?self.current_state, to = ?destination, "state change");
        self.current_state = destination;
    }
}

impl<S: Clone, C> Clone for Machine<S, C> {
    fn clone(&self) -> Self {
        Machine {
            default_state: self.default_state.clone(),
            current_state: self.current_state.clone(),
            previous_state: self.previous_state.clone(),
            possible_states: self.possible_states.clone(),
            edges: self.edges.clone(),
            global_edges: self.global_edges.clone(),
            state_names: self.state_names.clone(),
        }
    }
}

impl<S: fmt::Debug, C> fmt::Debug for Machine<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("default_state", &self.default_state)
            .field("current_state", &self.current_state)
            .field("previous_state", &self.previous_state)
            .field("states", &self.possible_states.len())
            .field("edges", &self.edges.values().map(Vec::len).sum::<usize>())
            .field("global_edges", &self.global_edges.len())
            .finish()
    }
}
