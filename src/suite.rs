//! minispec's own specification suite: the demonstration run exercises the
//! library through every verifier kind, including itself as the subject.

use minispec::{describe, evaluate, it, quantify, Outcome, Spec, Verifier};

pub fn specs() -> Vec<Spec> {
    let mut specs = Vec::new();

    specs.extend(describe(
        "describe",
        vec![
            it(
                "groups specifications under a shared label",
                describe("widgets", vec![it("works", true)])
                    .iter()
                    .all(|spec| spec.name() == "widgets"),
            ),
            it(
                "keeps specifications in declaration order",
                Verifier::case(|| {
                    let group = describe(
                        "ordering",
                        vec![it("first", true), it("second", true)],
                    );
                    assert_eq!(group[0].requirement(), "first");
                    assert_eq!(group[1].requirement(), "second");
                }),
            ),
        ],
    ));

    specs.extend(describe(
        "it",
        vec![
            it("accepts a literal boolean", 2 + 2 == 4),
            it(
                "accepts an assertion based test case",
                Verifier::case(|| assert_eq!("hello".len(), 5)),
            ),
            it(
                "accepts a QuickCheck property",
                Verifier::property(prop_reverse_twice_is_identity as fn(Vec<u8>) -> bool),
            ),
            it(
                "accepts a pending marker",
                Verifier::pending("nested describe groups are not specified yet"),
            ),
        ],
    ));

    specs.extend(describe(
        "evaluate",
        vec![
            it(
                "treats a false boolean as a failure with no detail",
                evaluate(Verifier::Bool(false)) == Outcome::Fail(String::new()),
            ),
            it(
                "converts a panicking check into a failure instead of aborting",
                evaluate(Verifier::case(|| panic!("boom")))
                    == Outcome::Fail("boom".to_string()),
            ),
            it(
                "contains runtime faults raised inside a check",
                Verifier::case(|| {
                    let empty: Vec<i32> = Vec::new();
                    let outcome = evaluate(Verifier::case(move || {
                        let _ = empty[1];
                    }));
                    assert!(outcome.is_fail());
                }),
            ),
            it(
                "rejects a property with a counterexample",
                evaluate(Verifier::property(prop_all_bytes_are_small as fn(u8) -> bool))
                    == Outcome::Fail(String::new()),
            ),
        ],
    ));

    specs.extend(describe(
        "quantify",
        vec![
            it(
                "keeps a count of exactly one singular",
                quantify(1, "example") == "1 example",
            ),
            it("pluralizes a count of zero", quantify(0, "failure") == "0 failures"),
            it(
                "pluralizes every other count",
                Verifier::property(prop_quantify_pluralizes as fn(usize) -> bool),
            ),
        ],
    ));

    specs
}

fn prop_reverse_twice_is_identity(xs: Vec<u8>) -> bool {
    let mut reversed = xs.clone();
    reversed.reverse();
    reversed.reverse();
    reversed == xs
}

fn prop_all_bytes_are_small(n: u8) -> bool {
    n < 5
}

fn prop_quantify_pluralizes(n: usize) -> bool {
    n == 1 || quantify(n, "thing").ends_with('s')
}
