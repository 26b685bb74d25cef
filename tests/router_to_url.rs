mod common;

use bunner_page_router::Route;
use common::{fixture_router, object, route};
use serde_json::json;

#[test]
fn to_url_when_page_unknown_then_returns_not_found_path() {
    let router = fixture_router();
    assert_eq!(router.to_url(&Route::new("unknown")), "/notfound");
}

#[test]
fn to_url_when_page_unknown_then_query_is_dropped() {
    let router = fixture_router();
    let unknown = Route::new("unknown").with_query(object(json!({"a": "b"})));

    assert_eq!(router.to_url(&unknown), "/notfound");
    let location = router.to_location(&unknown);
    assert_eq!(location.pathname, "/notfound");
    assert_eq!(location.search, "");
}

#[test]
fn to_url_when_string_page_then_uses_segment_path() {
    let router = fixture_router();
    assert_eq!(router.to_url(&Route::new("simplest")), "/simplest");
}

#[test]
fn to_url_when_path_specified_then_ignores_unused_data() {
    let router = fixture_router();
    assert_eq!(
        router.to_url(&route("simple", json!({"test": "value"}))),
        "/path/to/whatever"
    );
}

#[test]
fn to_url_when_single_param_then_substitutes_raw_value() {
    let router = fixture_router();
    assert_eq!(
        router.to_url(&route("single-param", json!({"data": "1234"}))),
        "/path/to/1234"
    );
}

#[test]
fn to_url_when_single_param_mapped_then_uses_node_mapper() {
    let router = fixture_router();
    assert_eq!(
        router.to_url(&route(
            "single-param-mapped",
            json!({"data": {"value": "1234", "other": "nothing"}})
        )),
        "/path/to/mapped/1234"
    );
}

#[test]
fn to_url_when_multiple_params_then_substitutes_in_order() {
    let router = fixture_router();
    assert_eq!(
        router.to_url(&route(
            "multiple-params",
            json!({"first": "1234", "second": "2345"})
        )),
        "/path/to/1234/next/2345"
    );
}

#[test]
fn to_url_when_multiple_params_mapped_then_node_mapper_beats_global() {
    let router = fixture_router();
    assert_eq!(
        router.to_url(&route(
            "multiple-params-mapped",
            json!({
                "one": {"oneValue": "1234", "prop1": null},
                "two": {"twoValue": "2345", "prop2": null}
            })
        )),
        "/path/to/mapped/1234/next/2345"
    );
}

#[test]
fn to_url_when_non_string_values_then_uses_textual_form() {
    let router = fixture_router();
    assert_eq!(
        router.to_url(&route("multiple-params", json!({"first": 12, "second": true}))),
        "/path/to/12/next/true"
    );
}

#[test]
fn to_url_when_query_present_then_appends_bracket_encoded_search() {
    let router = fixture_router();
    let with_query = route("simple", json!({"test": "value"}))
        .with_query(object(json!({"modal": {"name": "modal 1", "data": {"some": "data"}}})));

    assert_eq!(
        router.to_url(&with_query),
        "/path/to/whatever?modal%5Bname%5D=modal%201&modal%5Bdata%5D%5Bsome%5D=data"
    );
}

#[test]
fn to_location_when_query_empty_then_search_is_bare_marker() {
    let router = fixture_router();
    let location = router.to_location(&Route::new("simplest"));
    assert_eq!(location.pathname, "/simplest");
    assert_eq!(location.search, "?");
    assert_eq!(location.href(), "/simplest");
}

#[test]
fn to_url_when_sub_page_then_prefixes_parent_path() {
    let router = fixture_router();
    assert_eq!(
        router.to_url(&Route::new("bottom.simplest")),
        "/bottom/path/simplest"
    );
    assert_eq!(
        router.to_url(&Route::new("bottom.next")),
        "/bottom/path/next/path"
    );
}

#[test]
fn to_url_when_parent_has_index_then_resolves_to_index_child() {
    let router = fixture_router();
    assert_eq!(router.to_url(&Route::new("bottom")), "/bottom/path/simplest");
    assert_eq!(
        router.to_url(&Route::new("bottom")),
        router.to_url(&Route::new("bottom.simplest"))
    );
}

#[test]
fn to_url_when_sub_page_with_data_then_uses_inherited_global_mapper() {
    let router = fixture_router();
    let data = json!({"one": {"oneValue": "testing"}});

    assert_eq!(
        router.to_url(&route("bottom.next-data", data.clone())),
        "/bottom/path/next/testing"
    );
    assert_eq!(
        router.to_url(&route("bottom.next-data.simplest", data.clone())),
        "/bottom/path/next/testing/simplest"
    );
    assert_eq!(
        router.to_url(&route("bottom.next-data.final", data)),
        "/bottom/path/next/testing/final/path"
    );
}

#[test]
fn to_url_when_placeholder_value_missing_then_renders_empty() {
    let router = fixture_router();
    assert_eq!(router.to_url(&Route::new("single-param")), "/path/to/");
}
