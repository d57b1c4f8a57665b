//! The character-class pattern language.
//!
//! Patterns are compact one-character matchers in the spirit of a regex
//! character class: `"a-z"`, `"\\w\\d"`, `"^\\s"`. A pattern examines one
//! symbol and answers yes or no; there is no repetition, grouping, or
//! alternation.

use std::fmt;
use std::str::FromStr;

use crate::core::Rule;
use crate::text::error::PatternError;

/// Ordering domain for ranges. A range covers the contiguous slice of this
/// string between its endpoints, so `"x-3"` spans the uppercase letters
/// in between.
const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Clone, Debug)]
enum Element {
    /// Match exactly this character.
    Literal(char),
    /// Match any character.
    Wildcard,
    /// Flip the polarity of the whole pattern.
    Negate,
    /// Match characters between `start` and `end` in [`ALPHABET`] order,
    /// both ends included.
    Range { start: char, end: char },
    /// Match a character class such as `\w`, or a forced literal such
    /// as `\-`.
    Escape(char),
}

/// A compiled single-character pattern.
///
/// A pattern is a sequence of elements tried left to right; the first
/// element that accepts the symbol decides the answer. The elements are:
///
/// * a plain character matches itself;
/// * `.` matches any character;
/// * `a-z` matches the inclusive run between its endpoints, ordered by
///   lowercase letters, then uppercase, then digits (endpoints outside
///   that alphabet produce an empty range);
/// * `^` anywhere in the pattern negates the whole answer;
/// * `\w` (letter), `\d` (digit), `\s` (space or tab), `\n`, `\t`, `\0`
///   match a class, and `\\`, `\^`, `\-`, `\.` force the literal
///   character.
///
/// A second `^` is inert: negation latches rather than toggles. An escape
/// with an unknown class character is also inert and matches nothing.
///
/// # Example
///
/// ```rust
/// use edgewise::Pattern;
///
/// let ident = Pattern::parse("a-zA-Z_")?;
/// assert!(ident.matches('q'));
/// assert!(ident.matches('_'));
/// assert!(!ident.matches('7'));
///
/// let not_space = Pattern::parse("^\\s")?;
/// assert!(not_space.matches('x'));
/// assert!(!not_space.matches(' '));
/// # Ok::<(), edgewise::PatternError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    elements: Vec<Element>,
}

impl Pattern {
    /// Compile a pattern from its textual form.
    ///
    /// The only rejected form is a trailing bare backslash; everything
    /// else parses, including degenerate ranges that can never match.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::UnterminatedEscape`] when the pattern ends
    /// with a single `\`.
    pub fn parse(source: &str) -> Result<Pattern, PatternError> {
        let mut elements = Vec::new();
        let mut previous = '\0';
        let mut chars = source.chars();

        while let Some(sym) = chars.next() {
            match sym {
                '^' => elements.push(Element::Negate),
                '.' => elements.push(Element::Wildcard),
                '-' => {
                    // The preceding character already matched as a literal;
                    // the range picks up from it. A missing end runs the
                    // range to the end of the alphabet.
                    let end = chars.next().unwrap_or('\0');
                    elements.push(Element::Range {
                        start: previous,
                        end,
                    });
                    previous = end;
                    continue;
                }
                '\\' => {
                    let class = chars.next().ok_or_else(|| PatternError::UnterminatedEscape {
                        pattern: source.to_string(),
                    })?;
                    elements.push(Element::Escape(class));
                    previous = class;
                    continue;
                }
                _ => elements.push(Element::Literal(sym)),
            }
            previous = sym;
        }

        Ok(Pattern {
            source: source.to_string(),
            elements,
        })
    }

    /// Test one symbol against the pattern.
    ///
    /// Elements are tried in order; the first hit returns the current
    /// polarity. A pattern that exhausts its elements without a hit
    /// returns the opposite polarity, so `"^x"` accepts everything
    /// except `x`.
    pub fn matches(&self, sym: char) -> bool {
        let mut negated = false;

        for element in &self.elements {
            match *element {
                Element::Negate => negated = true,
                Element::Wildcard => return !negated,
                Element::Literal(lit) => {
                    if lit == sym {
                        return !negated;
                    }
                }
                Element::Range { start, end } => {
                    if range_contains(start, end, sym) {
                        return !negated;
                    }
                }
                Element::Escape(class) => {
                    if escape_matches(class, sym) {
                        return !negated;
                    }
                }
            }
        }

        negated
    }

    /// The textual form the pattern was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::parse(s)
    }
}

/// A compiled pattern plugs in anywhere a rule over `char` is expected.
impl From<Pattern> for Rule<char> {
    fn from(pattern: Pattern) -> Self {
        Rule::new(move |sym: &char| pattern.matches(*sym))
    }
}

/// Inclusive scan of [`ALPHABET`] from `start` to `end`. The scan stops at
/// `end` even if `start` was never seen, which makes reversed ranges empty
/// rather than an error.
fn range_contains(start: char, end: char, sym: char) -> bool {
    let mut inside = false;
    for alph in ALPHABET.chars() {
        if alph == start {
            inside = true;
        }
        if inside && sym == alph {
            return true;
        }
        if alph == end {
            break;
        }
    }
    false
}

fn escape_matches(class: char, sym: char) -> bool {
    match class {
        '\\' | '^' | '-' | '.' => sym == class,
        'w' => sym.is_ascii_alphabetic(),
        'd' => sym.is_ascii_digit(),
        's' => sym == ' ' || sym == '\t',
        'n' => sym == '\n',
        't' => sym == '\t',
        '0' => sym == '\0',
        _ => false,
    }
}
