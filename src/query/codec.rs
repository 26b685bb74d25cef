use memchr::memchr;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde_json::{Map, Value};

/// Everything except the RFC 3986 unreserved characters.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const OPEN_BRACKET: &str = "%5B";
const CLOSE_BRACKET: &str = "%5D";

pub const MAX_KEY_DEPTH: usize = 5;
pub const MAX_ARRAY_INDEX: usize = 20;

/// Serializes a nested object into bracket notation, e.g. `a%5Bb%5D=c`.
#[tracing::instrument(level = "trace", skip(object), fields(keys=object.len() as u64))]
pub fn stringify(object: &Map<String, Value>) -> String {
    let mut pairs = Vec::new();
    for (key, value) in object {
        push_pairs(&mut pairs, encode_component(key), value);
    }
    pairs.join("&")
}

fn push_pairs(pairs: &mut Vec<String>, prefix: String, value: &Value) {
    match value {
        Value::Object(entries) => {
            for (key, nested) in entries {
                let key = format!("{prefix}{OPEN_BRACKET}{}{CLOSE_BRACKET}", encode_component(key));
                push_pairs(pairs, key, nested);
            }
        }
        Value::Array(items) => {
            for (idx, nested) in items.iter().enumerate() {
                push_pairs(pairs, format!("{prefix}{OPEN_BRACKET}{idx}{CLOSE_BRACKET}"), nested);
            }
        }
        Value::Null => pairs.push(format!("{prefix}=")),
        Value::String(text) => pairs.push(format!("{prefix}={}", encode_component(text))),
        other => pairs.push(format!("{prefix}={}", encode_component(&other.to_string()))),
    }
}

fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Parses a search string (with or without the leading `?`) into a nested object.
///
/// Bracketed keys nest; `[]` and small numeric indices build arrays; a key that
/// repeats at the same level collects its values into an array.
#[tracing::instrument(level = "trace", fields(search=%search))]
pub fn parse(search: &str) -> Map<String, Value> {
    let trimmed = search.strip_prefix('?').unwrap_or(search);
    let mut root = Map::new();

    for pair in trimmed.split('&') {
        if pair.is_empty() {
            continue;
        }

        let (raw_key, raw_value) = match memchr(b'=', pair.as_bytes()) {
            Some(pos) => (&pair[..pos], &pair[pos + 1..]),
            None => (pair, ""),
        };

        let key = decode_component(raw_key);
        if key.is_empty() {
            continue;
        }

        let path = split_key(&key);
        insert(&mut root, &path, Value::String(decode_component(raw_value)));
    }

    for value in root.values_mut() {
        compact_arrays(value);
    }

    root
}

fn split_key(key: &str) -> Vec<String> {
    let (head, mut rest) = match memchr(b'[', key.as_bytes()) {
        Some(0) | None => return vec![key.to_string()],
        Some(pos) => (&key[..pos], &key[pos..]),
    };
    // an unclosed first bracket is part of the key
    if memchr(b']', rest.as_bytes()).is_none() {
        return vec![key.to_string()];
    }

    let mut segments = vec![head.to_string()];

    while segments.len() <= MAX_KEY_DEPTH {
        let Some(inner) = rest.strip_prefix('[') else {
            break;
        };
        let Some(close) = memchr(b']', inner.as_bytes()) else {
            break;
        };
        segments.push(inner[..close].to_string());
        rest = &inner[close + 1..];
    }

    if !rest.is_empty() {
        segments.push(rest.to_string());
    }

    segments
}

fn insert(target: &mut Map<String, Value>, path: &[String], value: Value) {
    let Some((head, rest)) = path.split_first() else {
        return;
    };

    let key = if head.is_empty() {
        target.len().to_string()
    } else {
        head.clone()
    };

    if rest.is_empty() {
        match target.get_mut(&key) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let previous = existing.take();
                *existing = Value::Array(vec![previous, value]);
            }
            None => {
                target.insert(key, value);
            }
        }
        return;
    }

    let entry = target
        .entry(key)
        .or_insert_with(|| Value::Object(Map::new()));
    if let Some(nested) = nested_object(entry) {
        insert(nested, rest, value);
    }
}

/// Object to descend into. A scalar already stored under the key is kept: it
/// becomes the first element of an array whose last element is the object.
fn nested_object(entry: &mut Value) -> Option<&mut Map<String, Value>> {
    match &mut *entry {
        Value::Object(_) => {}
        Value::Array(items) => {
            if !matches!(items.last(), Some(Value::Object(_))) {
                items.push(Value::Object(Map::new()));
            }
        }
        scalar => {
            let previous = scalar.take();
            *scalar = Value::Array(vec![previous, Value::Object(Map::new())]);
        }
    }
    match entry {
        Value::Object(nested) => Some(nested),
        Value::Array(items) => items.last_mut().and_then(Value::as_object_mut),
        _ => None,
    }
}

fn array_index(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<usize>()
        .ok()
        .filter(|idx| *idx <= MAX_ARRAY_INDEX)
}

fn compact_arrays(value: &mut Value) {
    match value {
        Value::Object(entries) => {
            for nested in entries.values_mut() {
                compact_arrays(nested);
            }
            if !entries.is_empty() && entries.keys().all(|key| array_index(key).is_some()) {
                let mut indexed: Vec<(usize, Value)> = std::mem::take(entries)
                    .into_iter()
                    .filter_map(|(key, nested)| array_index(&key).map(|idx| (idx, nested)))
                    .collect();
                indexed.sort_by_key(|(idx, _)| *idx);
                *value = Value::Array(indexed.into_iter().map(|(_, nested)| nested).collect());
            }
        }
        Value::Array(items) => {
            for nested in items.iter_mut() {
                compact_arrays(nested);
            }
        }
        _ => {}
    }
}
