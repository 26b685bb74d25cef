#![allow(dead_code)]

use bunner_page_router::{
    ParamMapper, ParamMappers, Route, RouteData, RouteSpec, Router, RouterConfig,
};
use serde_json::{Value, json};

pub fn object(value: Value) -> RouteData {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other:?}"),
    }
}

pub fn route(page: &str, data: Value) -> Route {
    Route::new(page).with_data(object(data))
}

pub fn field_mapper<F>(field: &'static str, decode: F) -> ParamMapper
where
    F: Fn(&str) -> Value + Send + Sync + 'static,
{
    ParamMapper::new(
        move |value| {
            value
                .get(field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        },
        decode,
    )
}

pub fn mappers(entries: Vec<(&str, ParamMapper)>) -> ParamMappers {
    entries
        .into_iter()
        .map(|(name, mapper)| (name.to_string(), mapper))
        .collect()
}

pub fn fixture_spec() -> RouteSpec {
    RouteSpec::new()
        .lines(
            "
            simplest
            simple (/path/to/whatever)
            single-param (/path/to/:data)
            single-param-mapped (/path/to/mapped/:data)",
        )
        .params(mappers(vec![(
            "data",
            field_mapper("value", |param| json!({"value": param, "other": "something"})),
        )]))
        .lines(
            "
            multiple-params (/path/to/:first/next/:second)
            multiple-params-mapped (/path/to/mapped/:one/next/:two)",
        )
        .params(mappers(vec![(
            "two",
            field_mapper("twoValue", |param| json!({"twoValue": param, "prop2": "2"})),
        )]))
        .lines(
            "
            bottom (/bottom/path) -> simplest
                simplest
                next (/next/path)
                next-data (/next/:one)
                    simplest
                    final (/final/path)
            ",
        )
}

pub fn fixture_config() -> RouterConfig {
    RouterConfig::builder()
        .param(
            "one",
            field_mapper("oneValue", |param| json!({"oneValue": param, "prop1": "1"})),
        )
        .param(
            "two",
            field_mapper("shouldNotShow", |param| json!({"shouldNotShow": param})),
        )
        .build()
        .expect("fixture config should build")
}

pub fn fixture_router() -> Router {
    Router::from_spec(fixture_spec(), Some(fixture_config())).expect("fixture routes should compile")
}
