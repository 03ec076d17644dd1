use thompson_compiler::{compile, CompileError};
use thompson_runtime::matches;

/// Compiles `pattern` and asserts each `(input, expected)` pair against it.
fn assert_matches(pattern: &str, input_output: &[(&str, bool)]) {
    let automaton = compile(pattern).expect("failed to compile");

    for (test_id, (input, expected_res)) in input_output.iter().enumerate() {
        let res = matches(&automaton, input);
        assert_eq!(
            (pattern, test_id, *input, *expected_res),
            (pattern, test_id, *input, res)
        )
    }
}

#[test]
fn should_match_concatenation_exactly() {
    assert_matches(
        "a.b",
        &[
            ("ab", true),
            ("a", false),
            ("b", false),
            ("ba", false),
            ("abb", false),
        ],
    );
}

#[test]
fn should_match_zero_or_more() {
    assert_matches(
        "a*",
        &[("", true), ("a", true), ("aaaa", true), ("b", false)],
    );
}

#[test]
fn should_match_one_or_more() {
    assert_matches("a+", &[("", false), ("a", true), ("aaa", true)]);
}

#[test]
fn should_match_zero_or_one() {
    assert_matches("a?", &[("", true), ("a", true), ("aa", false)]);
}

#[test]
fn should_match_either_branch_of_alternation() {
    assert_matches(
        "a|b",
        &[("a", true), ("b", true), ("ab", false), ("", false)],
    );
}

#[test]
fn should_scope_quantifiers_to_groups() {
    assert_matches(
        "(a.b)*",
        &[
            ("", true),
            ("ab", true),
            ("abab", true),
            ("a", false),
            ("aba", false),
        ],
    );
    assert_matches(
        "(a|b).c",
        &[("ac", true), ("bc", true), ("c", false), ("abc", false)],
    );
}

#[test]
fn should_match_binary_strings_starting_with_two_zeros() {
    assert_matches(
        "0.0.(0|1)*",
        &[
            ("001110", true),
            ("01110", false),
            ("1000001", false),
            ("001000001", true),
        ],
    );
}

#[test]
fn should_distinguish_quantifiers_after_a_prefix() {
    let inputs = ["001110", "001", "00111", "00", "0001110"];
    let cases = [
        ("0.0.1+", [false, true, true, false, false]),
        ("0.0.1?", [false, true, false, true, false]),
        ("0.0.1*", [false, true, true, true, false]),
    ];

    for (pattern, expected) in cases {
        let input_output = inputs
            .iter()
            .copied()
            .zip(expected)
            .collect::<Vec<(&str, bool)>>();

        assert_matches(pattern, &input_output);
    }
}

#[test]
fn should_chain_quantified_subexpressions() {
    assert_matches(
        "0.0.1+.(0|1)*",
        &[
            ("001110", true),
            ("001", true),
            ("00101", true),
            ("00", false),
            ("0001110", false),
        ],
    );
    assert_matches(
        "0.0.1?.0*",
        &[
            ("001110", false),
            ("001", true),
            ("00100", true),
            ("00", true),
            ("0000", true),
        ],
    );
}

#[test]
fn should_match_escaped_operators_literally() {
    assert_matches(
        "0.0.1.\\*.1",
        &[
            ("0011", false),
            ("001*1", true),
            ("00111", false),
            ("0001110", false),
        ],
    );
    assert_matches(
        "0.0.1.\\+.\\*.1",
        &[("001+1", false), ("001+*1", true), ("001*1", false)],
    );
    assert_matches(
        "\\(.a.\\|.b.\\)",
        &[("(a|b)", true), ("a", false), ("b", false)],
    );
    assert_matches("a.\\\\", &[("a\\", true), ("a", false)]);
}

#[test]
fn should_terminate_on_nested_quantifiers() {
    assert_matches("(a*)*", &[("", true), ("aaa", true), ("ab", false)]);
    assert_matches("(a?)+", &[("", true), ("a", true), ("aa", true)]);
    assert_matches("(a+)?", &[("", true), ("aaa", true), ("b", false)]);
}

#[test]
fn should_treat_each_character_as_a_symbol() {
    assert_matches("é.ß*", &[("é", true), ("éßß", true), ("e", false)]);
    assert_matches("a. .b", &[("a b", true), ("ab", false)]);
}

#[test]
fn should_fail_to_compile_invalid_expressions() {
    let input_output = [
        ("", CompileError::EmptyExpression),
        ("   ", CompileError::EmptyExpression),
        (".", CompileError::MalformedExpression),
        ("a.|b", CompileError::MalformedExpression),
        // adjacent literals are not implicitly concatenated.
        ("001+(0|1)*", CompileError::MalformedExpression),
    ];

    for (test_id, (pattern, expected)) in input_output.into_iter().enumerate() {
        assert_eq!((test_id, Err(expected)), (test_id, compile(pattern)))
    }
}

#[test]
fn should_tolerate_unbalanced_groups() {
    assert_matches("(a.b", &[("ab", true)]);
    assert_matches("a.b)", &[("ab", true)]);
}

#[test]
fn should_share_an_automaton_across_threads() {
    let automaton = compile("0.0.(0|1)*").expect("failed to compile");
    let inputs = ["001110", "01110", "1000001", "001000001"];

    let results = std::thread::scope(|s| {
        let handles = inputs
            .iter()
            .map(|input| {
                let automaton = &automaton;
                s.spawn(move || matches(automaton, input))
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("matcher thread panicked"))
            .collect::<Vec<_>>()
    });

    assert_eq!(vec![true, false, false, true], results);
}
