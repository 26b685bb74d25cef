mod common;

use bunner_page_router::{RouteNode, RouteSpec, parse_routes};
use common::{field_mapper, mappers};
use serde_json::json;

#[test]
fn parse_routes_when_siblings_and_children_then_rebuilds_tree() {
    let routes = parse_routes(
        "
        one
        two
            nested (/:nested) -> base
                base (/)
                second (/:second)
                    third
        three
            nested (/nested/:nested) -> base
                base (/)
                second (/:second)
        ",
    );

    let expected = vec![
        RouteNode::new("one"),
        RouteNode::new("two").with_child(
            RouteNode::new("nested")
                .with_path("/:nested")
                .with_index("base")
                .with_children([
                    RouteNode::new("base").with_path("/"),
                    RouteNode::new("second")
                        .with_path("/:second")
                        .with_child(RouteNode::new("third")),
                ]),
        ),
        RouteNode::new("three").with_child(
            RouteNode::new("nested")
                .with_path("/nested/:nested")
                .with_index("base")
                .with_children([
                    RouteNode::new("base").with_path("/"),
                    RouteNode::new("second").with_path("/:second"),
                ]),
        ),
    ];

    assert_eq!(routes, expected);
}

#[test]
fn parse_routes_when_dedent_skips_levels_then_returns_to_matching_ancestor() {
    let routes = parse_routes("a\n\tb\n\t\tc\n\t\t\td\n\te\nf");

    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].segment, "a");
    assert_eq!(routes[0].children.len(), 2);
    assert_eq!(routes[0].children[0].segment, "b");
    assert_eq!(routes[0].children[0].children[0].segment, "c");
    assert_eq!(routes[0].children[0].children[0].children[0].segment, "d");
    assert_eq!(routes[0].children[1].segment, "e");
    assert_eq!(routes[1].segment, "f");
}

#[test]
fn parse_routes_when_blank_lines_present_then_ignores_them() {
    let routes = parse_routes("\n\n  one\n\n   \n  two\n");
    let names: Vec<&str> = routes.iter().map(|node| node.segment.as_str()).collect();
    assert_eq!(names, ["one", "two"]);
}

#[test]
fn parse_routes_when_line_malformed_then_keeps_node_with_missing_fields() {
    let routes = parse_routes("one\n  broken (/oops\ntwo");

    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].children.len(), 1);
    assert!(routes[0].children[0].segment.is_empty());
    assert_eq!(routes[0].children[0].path, None);
}

#[test]
fn route_spec_when_params_follow_block_then_attach_to_last_line() {
    let routes = RouteSpec::new()
        .lines("first\nsecond (/second/:id)")
        .params(mappers(vec![(
            "id",
            field_mapper("id", |param| json!({"id": param})),
        )]))
        .lines("third")
        .build();

    assert_eq!(routes.len(), 3);
    assert!(routes[0].params.is_none());
    assert!(
        routes[1]
            .params
            .as_ref()
            .is_some_and(|params| params.contains_key("id"))
    );
    assert!(routes[2].params.is_none());
}

#[test]
fn route_spec_when_params_attach_to_nested_line_then_child_carries_them() {
    let routes = RouteSpec::new()
        .lines("parent\n  child (/:x)")
        .params(mappers(vec![("x", field_mapper("x", |param| json!(param)))]))
        .lines("\n  sibling")
        .build();

    assert_eq!(routes.len(), 1);
    let children = &routes[0].children;
    assert_eq!(children.len(), 2);
    assert!(children[0].params.is_some());
    assert!(children[1].params.is_none());
    assert!(routes[0].params.is_none());
}

#[test]
fn route_spec_when_params_not_preceded_by_declaration_then_ignored() {
    let routes = RouteSpec::new()
        .params(mappers(vec![("a", field_mapper("a", |param| json!(param)))]))
        .lines("one")
        .params(mappers(vec![("b", field_mapper("b", |param| json!(param)))]))
        .lines("   ")
        .params(mappers(vec![("c", field_mapper("c", |param| json!(param)))]))
        .build();

    assert_eq!(routes.len(), 1);
    let params = routes[0].params.as_ref().expect("first override should attach");
    assert!(params.contains_key("b"));
    assert!(!params.contains_key("a"));
    assert!(!params.contains_key("c"));
}
