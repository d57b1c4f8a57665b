//! Rule predicates guarding transitions.
//!
//! A rule is a pure boolean function over one input symbol. It is the atomic
//! unit of transition logic: an edge fires when its rule accepts the
//! condition being processed.

use std::sync::Arc;

/// Pure predicate that decides whether an edge accepts one input symbol.
///
/// Rules come in two flavors behind the same contract: an exact-value match
/// built with [`Rule::equals`], and an arbitrary predicate built with
/// [`Rule::new`]. Both are evaluated at most once per candidate edge per
/// `process` call, in edge-list order.
///
/// Rules are expected to be deterministic and side-effect free; the engine
/// gives no ordering guarantee beyond edge-list order if they are not.
///
/// # Example
///
/// ```rust
/// use edgewise::Rule;
///
/// let vowel = Rule::new(|sym: &char| "aeiou".contains(*sym));
/// assert!(vowel.check(&'e'));
/// assert!(!vowel.check(&'x'));
///
/// let exact = Rule::equals('+');
/// assert!(exact.check(&'+'));
/// assert!(!exact.check(&'-'));
/// ```
pub struct Rule<C> {
    predicate: Arc<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Rule<C> {
    /// Create a rule from an arbitrary predicate function.
    ///
    /// The predicate must be thread-safe (`Send + Sync`) so machines can be
    /// moved across threads or confined one-per-worker.
    ///
    /// # Example
    ///
    /// ```rust
    /// use edgewise::Rule;
    ///
    /// let even = Rule::new(|value: &u32| value % 2 == 0);
    /// assert!(even.check(&4));
    /// ```
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Rule {
            predicate: Arc::new(predicate),
        }
    }

    /// Create a rule that accepts exactly one value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use edgewise::Rule;
    ///
    /// let newline = Rule::equals('\n');
    /// assert!(newline.check(&'\n'));
    /// assert!(!newline.check(&' '));
    /// ```
    pub fn equals(value: C) -> Self
    where
        C: PartialEq + Send + Sync + 'static,
    {
        Rule::new(move |condition: &C| *condition == value)
    }

    /// Check whether the rule accepts this condition.
    pub fn check(&self, condition: &C) -> bool {
        (self.predicate)(condition)
    }
}

impl<C> Clone for Rule<C> {
    fn clone(&self) -> Self {
        Rule {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

/// A bare value registers as an exact-match rule, mirroring the literal
/// registration path of the engine.
impl<C: PartialEq + Send + Sync + 'static> From<C> for Rule<C> {
    fn from(value: C) -> Self {
        Rule::equals(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicate_rule_matches_accepted_values() {
        let digit = Rule::new(|sym: &char| sym.is_ascii_digit());

        assert!(digit.check(&'7'));
        assert!(!digit.check(&'x'));
    }

    #[test]
    fn equality_rule_accepts_only_its_value() {
        let rule = Rule::equals(42u32);

        assert!(rule.check(&42));
        assert!(!rule.check(&41));
        assert!(!rule.check(&0));
    }

    #[test]
    fn from_value_builds_equality_rule() {
        let rule: Rule<char> = 'a'.into();

        assert!(rule.check(&'a'));
        assert!(!rule.check(&'b'));
    }

    #[test]
    fn rule_is_deterministic() {
        let rule = Rule::new(|sym: &char| *sym == ' ' || *sym == '\t');

        let first = rule.check(&'\t');
        let second = rule.check(&'\t');

        assert_eq!(first, second);
    }

    #[test]
    fn cloned_rule_shares_the_predicate() {
        let rule = Rule::equals('z');
        let cloned = rule.clone();

        assert_eq!(rule.check(&'z'), cloned.check(&'z'));
        assert_eq!(rule.check(&'q'), cloned.check(&'q'));
    }
}
