use quickcheck::quickcheck;
use thompson_compiler::compile;
use thompson_runtime::{matches, matches_symbols};

const PATTERNS: [&str; 5] = ["0.0.(0|1)*", "a*", "(a.b)*", "a|b", "0.0.1?.0*"];

#[test]
fn should_match_identically_across_compilations() {
    fn prop(input: String) -> bool {
        PATTERNS.iter().all(|pattern| {
            let first = compile(pattern).expect("failed to compile");
            let second = compile(pattern).expect("failed to compile");

            first == second && matches(&first, &input) == matches(&second, &input)
        })
    }

    quickcheck(prop as fn(String) -> bool);
}

#[test]
fn should_accept_any_binary_string_after_two_zeros() {
    fn prop(bits: Vec<bool>) -> bool {
        let automaton = compile("0.0.(0|1)*").expect("failed to compile");
        let input = ['0', '0']
            .into_iter()
            .chain(bits.into_iter().map(|bit| if bit { '1' } else { '0' }));

        matches_symbols(&automaton, input)
    }

    quickcheck(prop as fn(Vec<bool>) -> bool);
}

#[test]
fn should_accept_unbounded_repetition() {
    fn prop(cnt: u8) -> bool {
        let star = compile("a*").expect("failed to compile");
        let plus = compile("a+").expect("failed to compile");
        let input = "a".repeat(cnt as usize);

        matches(&star, &input) && matches(&plus, &input) == (cnt > 0)
    }

    quickcheck(prop as fn(u8) -> bool);
}
