// Integration tests for the subset construction engine
//
// Exercises the full pipeline: regex -> epsilon-NFA -> subset construction
// -> matching, plus hand-built NFAs for the epsilon-cycle and strict
// acceptance edge cases.

use finch_dfa::{epsilon_closure, Dfa, DfaError, SubsetBuilder, SubsetConfig, TableDump};
use finch_nfa::{Alphabet, Label, Nfa};

fn ab_alphabet() -> Alphabet {
    Alphabet::new(['a', 'b']).unwrap()
}

fn build_pattern(pattern: &str) -> Dfa {
    let nfa = Nfa::from_regex(pattern, ab_alphabet()).unwrap();
    SubsetBuilder::with_defaults().build(&nfa).unwrap()
}

#[test]
fn test_end_to_end_a_star_b() {
    // 1. Compile "zero or more `a` followed by one `b`"
    let dfa = build_pattern("a*b");

    // 2. Accepted inputs
    for input in ["b", "ab", "aab", "aaaaaab"] {
        assert!(dfa.matches(input).unwrap(), "should accept {:?}", input);
    }

    // 3. Rejected inputs
    for input in ["", "a", "ba", "abb", "bb"] {
        assert!(!dfa.matches(input).unwrap(), "should reject {:?}", input);
    }

    // 4. Out-of-alphabet input is an error, not a non-match
    let err = dfa.matches("abc").unwrap_err();
    assert!(matches!(err, DfaError::InvalidSymbol { symbol: 'c' }));
}

#[test]
fn test_start_state_equals_start_closure() {
    let nfa = Nfa::from_regex("a*b", ab_alphabet()).unwrap();
    let dfa = SubsetBuilder::with_defaults().build(&nfa).unwrap();
    let start_state = dfa.state(dfa.start()).unwrap();
    assert_eq!(
        start_state.nfa_states,
        epsilon_closure(&nfa, &[nfa.start()])
    );
}

#[test]
fn test_epsilon_cycle_terminates() {
    // A -ε-> B -ε-> A, with a real move hanging off B
    let mut nfa = Nfa::new(ab_alphabet());
    let a = nfa.add_state();
    let b = nfa.add_state();
    let f = nfa.add_state();
    nfa.add_transition(a, Label::Epsilon, b).unwrap();
    nfa.add_transition(b, Label::Epsilon, a).unwrap();
    nfa.add_transition(b, Label::Symbol(0), f).unwrap();
    nfa.mark_accepting(f).unwrap();

    assert_eq!(epsilon_closure(&nfa, &[a]), vec![a, b]);

    let dfa = SubsetBuilder::with_defaults().build(&nfa).unwrap();
    assert!(dfa.matches("a").unwrap());
    assert!(!dfa.matches("").unwrap());
}

#[test]
fn test_strict_acceptance_rule() {
    // two accepting states; `a` reaches both, `b` reaches only one
    let mut nfa = Nfa::new(ab_alphabet());
    let s = nfa.add_state();
    let f1 = nfa.add_state();
    let f2 = nfa.add_state();
    nfa.add_transition(s, Label::Symbol(0), f1).unwrap();
    nfa.add_transition(s, Label::Symbol(0), f2).unwrap();
    nfa.add_transition(s, Label::Symbol(1), f1).unwrap();
    nfa.mark_accepting(f1).unwrap();
    nfa.mark_accepting(f2).unwrap();

    let dfa = SubsetBuilder::with_defaults().build(&nfa).unwrap();
    assert!(dfa.matches("a").unwrap(), "set {{f1, f2}} must accept");
    assert!(
        !dfa.matches("b").unwrap(),
        "set {{f1}} misses f2, so the strict rule rejects"
    );
}

#[test]
fn test_dead_state_absorbs() {
    let dfa = build_pattern("b");

    // `ba` walks into the dead state on `a`; nothing recovers from there
    assert!(!dfa.matches("ba").unwrap());
    assert!(!dfa.matches("baaaabbb").unwrap());

    let dead = dfa
        .states()
        .iter()
        .find(|s| s.nfa_states.is_empty())
        .expect("dead state must be in the table");
    for slot in &dead.transitions {
        assert_eq!(*slot, Some(dead.id), "dead state must absorb every symbol");
    }
    assert!(!dead.is_accepting);
}

#[test]
fn test_table_is_deterministic_and_closed() {
    let dfa = build_pattern("(a|b)*ab");
    for state in dfa.states() {
        // one slot per symbol, each a single well-defined target in range
        assert_eq!(state.transitions.len(), dfa.alphabet().len());
        for slot in &state.transitions {
            let target = slot.expect("eager construction fills every slot");
            assert!(target < dfa.state_count(), "dangling DFA state reference");
        }
    }
}

#[test]
fn test_construction_is_bounded() {
    let nfa = Nfa::from_regex("(a|b)*ab", ab_alphabet()).unwrap();
    let dfa = SubsetBuilder::with_defaults().build(&nfa).unwrap();
    assert!(dfa.state_count() <= 1usize << nfa.state_count());
}

#[test]
fn test_state_limit_aborts_build() {
    let nfa = Nfa::from_regex("(a|b)*ab", ab_alphabet()).unwrap();
    let builder = SubsetBuilder::new(SubsetConfig { max_states: 2 });
    let err = builder.build(&nfa).unwrap_err();
    assert!(matches!(err, DfaError::StateLimitExceeded { max: 2, .. }));
}

#[test]
fn test_dump_round_trips_through_json() {
    let dfa = build_pattern("a*b");
    let dump = dfa.dump();

    let json = serde_json::to_string(&dump).unwrap();
    let parsed: TableDump = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, dump);

    let rebuilt = Dfa::from_dump(&parsed).unwrap();
    for input in ["", "a", "b", "ab", "aab", "ba"] {
        assert_eq!(
            dfa.matches(input).unwrap(),
            rebuilt.matches(input).unwrap(),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_table_shared_across_threads() {
    let dfa = build_pattern("(a|b)*ab");
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert!(dfa.matches("abab").unwrap());
                    assert!(!dfa.matches("aba").unwrap());
                }
            });
        }
    });
}

#[test]
fn test_alternation_end_to_end() {
    let dfa = build_pattern("a(a|b)*b");
    assert!(dfa.matches("ab").unwrap());
    assert!(dfa.matches("aabbab").unwrap());
    assert!(!dfa.matches("a").unwrap());
    assert!(!dfa.matches("ba").unwrap());
    assert!(!dfa.matches("aba").unwrap());
}
