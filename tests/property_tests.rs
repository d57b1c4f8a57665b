//! Property-based tests for the engine and the pattern language.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use edgewise::{EdgeFlags, Machine, Pattern, Rule, TextMachine};
use proptest::prelude::*;

/// Characters that assemble into a valid pattern without negation, so a
/// prepended `^` is the only polarity switch in play.
const CARET_FREE: &[char] = &[
    'a', 'b', 'c', 'm', 'z', 'A', 'Z', '0', '5', '9', '-', '.', ' ', '+', '_',
];

/// Same pool with negation included, for properties that do not care
/// about polarity.
const PATTERN_CHARS: &[char] = &[
    'a', 'b', 'c', 'm', 'z', 'A', 'Z', '0', '5', '9', '-', '.', ' ', '+', '_', '^',
];

prop_compose! {
    fn caret_free_pattern()(chars in prop::collection::vec(
        prop::sample::select(CARET_FREE),
        0..8,
    )) -> String {
        chars.into_iter().collect()
    }
}

prop_compose! {
    fn pattern_text()(chars in prop::collection::vec(
        prop::sample::select(PATTERN_CHARS),
        0..8,
    )) -> String {
        chars.into_iter().collect()
    }
}

proptest! {
    #[test]
    fn equality_rule_accepts_exactly_its_value(value in any::<char>(), probe in any::<char>()) {
        let rule = Rule::equals(value);
        prop_assert_eq!(rule.check(&probe), value == probe);
    }

    #[test]
    fn rule_check_is_deterministic(value in any::<char>(), probe in any::<char>()) {
        let rule = Rule::equals(value);
        prop_assert_eq!(rule.check(&probe), rule.check(&probe));
    }

    #[test]
    fn lowercase_range_agrees_with_ascii(sym in any::<char>()) {
        let pattern = Pattern::parse("a-z").unwrap();
        prop_assert_eq!(pattern.matches(sym), sym.is_ascii_lowercase());
    }

    #[test]
    fn digit_range_agrees_with_ascii(sym in any::<char>()) {
        let pattern = Pattern::parse("0-9").unwrap();
        prop_assert_eq!(pattern.matches(sym), sym.is_ascii_digit());
    }

    #[test]
    fn open_ended_range_covers_the_rest_of_the_alphabet(sym in any::<char>()) {
        // "a-" runs from the first alphabet character to the last.
        let pattern = Pattern::parse("a-").unwrap();
        prop_assert_eq!(pattern.matches(sym), sym.is_ascii_alphanumeric());
    }

    #[test]
    fn pattern_matching_is_deterministic(source in pattern_text(), sym in any::<char>()) {
        let pattern = Pattern::parse(&source).unwrap();
        prop_assert_eq!(pattern.matches(sym), pattern.matches(sym));
    }

    #[test]
    fn caret_prefix_complements_the_pattern(source in caret_free_pattern(), sym in any::<char>()) {
        let plain = Pattern::parse(&source).unwrap();
        let negated = Pattern::parse(&format!("^{source}")).unwrap();
        prop_assert_eq!(negated.matches(sym), !plain.matches(sym));
    }

    #[test]
    fn double_caret_behaves_like_single(source in caret_free_pattern(), sym in any::<char>()) {
        let single = Pattern::parse(&format!("^{source}")).unwrap();
        let double = Pattern::parse(&format!("^^{source}")).unwrap();
        prop_assert_eq!(single.matches(sym), double.matches(sym));
    }

    #[test]
    fn machine_without_edges_never_moves(
        default in any::<u8>(),
        inputs in prop::collection::vec(any::<char>(), 0..20),
    ) {
        let mut machine: Machine<u8, char> = Machine::new(default);

        for sym in inputs {
            prop_assert!(!machine.process(sym));
            prop_assert_eq!(machine.current_state(), &default);
        }
    }

    #[test]
    fn earlier_edge_wins(sym in any::<char>()) {
        let mut machine = Machine::with_start(9u32, 0);
        machine.add_edge(0, 1, Rule::new(|_: &char| true), "first", EdgeFlags::NONE);
        machine.add_edge(0, 2, Rule::new(|_: &char| true), "second", EdgeFlags::NONE);

        prop_assert!(machine.process(sym));
        prop_assert_eq!(machine.current_state(), &1);
    }

    #[test]
    fn labels_double_every_backslash(label in "[a-z\\\\]{0,12}") {
        let mut machine: Machine<u32, char> = Machine::new(0);
        machine.add_edge(0, 1, 'x', label.clone(), EdgeFlags::NONE);

        let expected: String = label
            .chars()
            .flat_map(|c| if c == '\\' { vec![c, c] } else { vec![c] })
            .collect();
        prop_assert_eq!(machine.edges_from(&0)[0].label(), expected.as_str());
    }

    #[test]
    fn whitespace_always_returns_the_tokenizer_to_ready(
        inputs in prop::collection::vec(prop::sample::select(&['a', 'z', '1', '9', ' ', '\t', '+'][..]), 1..30),
    ) {
        let mut machine: TextMachine<u32> = TextMachine::new(0);
        machine.add_pattern_edge(0, 1, "\\w", EdgeFlags::NONE).unwrap();
        machine.add_pattern_edge(1, 1, "\\w\\d", EdgeFlags::NONE).unwrap();
        machine.add_pattern_edge(0, 2, "\\d", EdgeFlags::NONE).unwrap();
        machine.add_pattern_edge(2, 2, "\\d", EdgeFlags::NONE).unwrap();
        machine.add_pattern_global_edge(0, "\\s", EdgeFlags::SILENT).unwrap();

        for sym in inputs {
            machine.process(sym);
            if sym == ' ' || sym == '\t' {
                prop_assert_eq!(machine.current_state(), &0);
            }
        }
    }

    #[test]
    fn outcome_always_reports_the_pre_call_state(
        inputs in prop::collection::vec(any::<char>(), 1..30),
    ) {
        let mut machine: TextMachine<u32> = TextMachine::new(0);
        machine.add_pattern_edge(0, 1, "\\w", EdgeFlags::NONE).unwrap();
        machine.add_pattern_edge(1, 0, "\\d", EdgeFlags::NONE).unwrap();

        for sym in inputs {
            let before = *machine.current_state();
            let outcome = machine.process_outcome(sym);
            prop_assert_eq!(outcome.ended_state, before);
            prop_assert_eq!(machine.previous_state(), &before);
        }
    }
}
