// tests/selection_tests.rs

use oslc_query::{
    InvertedSelection, PrefixMap, Properties, Property, QualifiedName, Selected, Selection,
    Wildcard, invert_selection, parse_prefixes, parse_select,
};
use proptest::prelude::*;
use rstest::rstest;

const QM: &str = "http://qm.example.com/ns/";

fn prefixes() -> PrefixMap {
    parse_prefixes("qm=<http://qm.example.com/ns/>,oslc=<http://open-services.net/ns/core#>")
        .unwrap()
}

fn invert(expression: &str) -> InvertedSelection {
    invert_selection(&parse_select(expression, &prefixes()).unwrap())
}

fn qm(local: &str) -> String {
    format!("{}{}", QM, local)
}

fn nested<'a>(selection: &'a InvertedSelection, local: &str) -> &'a InvertedSelection {
    match selection.get(&qm(local)) {
        Some(Selection::Nested(nested)) => nested,
        other => panic!("expected nested selection for qm:{}, got {:?}", local, other),
    }
}

// ============================================================================
// Wildcards
// ============================================================================

// `*{*}` selects everything at the top level and recurses one level with `*`.
// The common selection is the inversion of the inner `*`, so it carries only
// the singleton wildcard. A nested carrier there would have to contain itself.
#[test]
fn test_nested_wildcard_of_wildcard() {
    let inverted = invert("*{*}");

    assert!(inverted.has_singleton_wildcard());
    let common = inverted.common_nested().expect("common nested selection");
    assert!(common.has_singleton_wildcard());
    assert!(common.common_nested().is_none());
    assert_eq!(inverted.len(), 0);

    assert_eq!(
        inverted.select("http://example.com/anything"),
        Some(Selected::Nested(common))
    );
    assert_eq!(common.select("http://example.com/anything"), Some(Selected::Singleton));
}

#[test]
fn test_singleton_wildcard() {
    let inverted = invert("*");
    assert_eq!(inverted.wildcard(), &Wildcard::Singleton);
    assert!(inverted.common_nested().is_none());
    assert_eq!(inverted.select(&qm("anything")), Some(Selected::Singleton));
}

#[rstest]
#[case("qm:testcase,*")]
#[case("*,qm:testcase")]
#[case("*,qm:testcase,*")]
fn test_wildcard_absorbs_plain_names(#[case] expression: &str) {
    let inverted = invert(expression);
    assert_eq!(inverted, invert("*"));
    assert!(!inverted.contains(&qm("testcase")));
    assert_eq!(inverted.select(&qm("testcase")), Some(Selected::Singleton));
}

#[test]
fn test_wildcard_keeps_nested_names() {
    let inverted = invert("*,qm:state{*}");
    assert!(inverted.has_singleton_wildcard());
    assert!(nested(&inverted, "state").has_singleton_wildcard());
    assert_eq!(inverted.select(&qm("other")), Some(Selected::Singleton));
}

#[test]
fn test_nested_wildcard_merges_into_named_entries() {
    let inverted = invert("*{qm:a},qm:b{qm:c}");

    let b = nested(&inverted, "b");
    assert!(b.contains(&qm("a")));
    assert!(b.contains(&qm("c")));

    let Some(Selected::Nested(other)) = inverted.select(&qm("other")) else {
        panic!("unnamed property should recurse with the common selection");
    };
    assert!(other.contains(&qm("a")));
    assert!(!other.contains(&qm("c")));
}

#[test]
fn test_nested_wildcard_turns_plain_name_into_common() {
    assert_eq!(invert("qm:b,*{qm:a}"), invert("*{qm:a}"));
    assert_eq!(invert("*{qm:a},qm:b"), invert("*{qm:a}"));
}

#[test]
fn test_repeated_nested_wildcards_merge() {
    let inverted = invert("*{qm:a},*{qm:b{qm:x}},*{qm:b{qm:y}}");
    let common = inverted.common_nested().unwrap();
    assert!(common.contains(&qm("a")));
    let b = nested(common, "b");
    assert!(b.contains(&qm("x")));
    assert!(b.contains(&qm("y")));
}

// ============================================================================
// Named properties
// ============================================================================

#[test]
fn test_plain_names() {
    let inverted = invert("oslc:create,qm:verified");
    assert_eq!(inverted.len(), 2);
    assert_eq!(
        inverted.select("http://open-services.net/ns/core#create"),
        Some(Selected::Singleton)
    );
    assert_eq!(inverted.select(&qm("verified")), Some(Selected::Singleton));
    assert_eq!(inverted.select(&qm("state")), None);
    assert!(!inverted.has_singleton_wildcard());
}

#[test]
fn test_deeply_nested_names() {
    let inverted = invert("qm:state{oslc:verified_by{oslc:owner,qm:duration}}");
    let state = nested(&inverted, "state");
    let Some(Selection::Nested(verified_by)) =
        state.get("http://open-services.net/ns/core#verified_by")
    else {
        panic!("expected nested selection for oslc:verified_by");
    };
    assert_eq!(verified_by.len(), 2);
    assert_eq!(verified_by.select(&qm("duration")), Some(Selected::Singleton));
}

#[test]
fn test_nested_name_wins_over_plain_name() {
    let inverted = invert("qm:submitted,qm:submitted{qm:date}");
    assert_eq!(inverted, invert("qm:submitted{qm:date}"));
}

#[test]
fn test_repeated_nested_names_merge() {
    let inverted = invert("qm:s{qm:a},qm:s{qm:b{qm:x}},qm:s{qm:b{qm:y}}");
    let s = nested(&inverted, "s");
    assert_eq!(s.get(&qm("a")), Some(&Selection::Singleton));
    let b = nested(s, "b");
    assert_eq!(b.len(), 2);
}

#[test]
fn test_merge_combines_selections() {
    let mut lhs = invert("qm:a,qm:s{qm:x}");
    lhs.merge(invert("qm:b,qm:s{qm:y}"));

    assert_eq!(lhs, invert("qm:a,qm:b,qm:s{qm:x,qm:y}"));
}

// ============================================================================
// Order independence
// ============================================================================

const LOCALS: [&str; 4] = ["a", "b", "c", "d"];

fn name(index: usize) -> QualifiedName {
    QualifiedName::new(QM, LOCALS[index]).with_prefix("qm")
}

fn arb_property() -> impl Strategy<Value = Property> {
    let leaf = prop_oneof![
        3 => (0..LOCALS.len()).prop_map(|i| Property::Identifier(name(i))),
        1 => Just(Property::Wildcard),
    ];

    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            3 => (0..LOCALS.len(), prop::collection::vec(inner.clone(), 1..4)).prop_map(
                |(i, children)| Property::NestedIdentifier {
                    name: name(i),
                    children: Properties::new(children),
                }
            ),
            1 => prop::collection::vec(inner, 1..4).prop_map(|children| {
                Property::NestedWildcard {
                    children: Properties::new(children),
                }
            }),
        ]
    })
}

fn arb_properties() -> impl Strategy<Value = Properties> {
    prop::collection::vec(arb_property(), 1..6).prop_map(Properties::new)
}

/// Reorders siblings at every level: rotate by `shift`, reversed when `shift` is odd.
fn reorder(properties: &Properties, shift: usize) -> Properties {
    let mut children: Vec<Property> = properties
        .iter()
        .map(|property| match property {
            Property::NestedIdentifier { name, children } => Property::NestedIdentifier {
                name: name.clone(),
                children: reorder(children, shift + 1),
            },
            Property::NestedWildcard { children } => Property::NestedWildcard {
                children: reorder(children, shift + 1),
            },
            other => other.clone(),
        })
        .collect();

    let len = children.len();
    children.rotate_left(shift % len);
    if shift % 2 == 1 {
        children.reverse();
    }
    Properties::new(children)
}

proptest! {
    #[test]
    fn prop_sibling_order_does_not_matter(properties in arb_properties(), shift in 0usize..8) {
        let reordered = reorder(&properties, shift);
        prop_assert_eq!(invert_selection(&properties), invert_selection(&reordered));
    }

    #[test]
    fn prop_repeating_a_selection_changes_nothing(properties in arb_properties()) {
        let mut doubled = properties.children.clone();
        doubled.extend(properties.children.iter().cloned());
        prop_assert_eq!(
            invert_selection(&properties),
            invert_selection(&Properties::new(doubled))
        );
    }

    #[test]
    fn prop_merge_is_commutative(lhs in arb_properties(), rhs in arb_properties()) {
        let mut left_first = invert_selection(&lhs);
        left_first.merge(invert_selection(&rhs));
        let mut right_first = invert_selection(&rhs);
        right_first.merge(invert_selection(&lhs));
        prop_assert_eq!(left_first, right_first);
    }

    #[test]
    fn prop_rendered_selection_inverts_the_same(properties in arb_properties()) {
        let reparsed = parse_select(&properties.to_string(), &prefixes()).unwrap();
        prop_assert_eq!(invert_selection(&reparsed), invert_selection(&properties));
    }
}
