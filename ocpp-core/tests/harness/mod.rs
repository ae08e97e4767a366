use std::collections::hash_map::DefaultHasher;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::sync::Once;

use anyhow::Context;
use log::LevelFilter;
use rocpp_types::JsonCodec;
use serde_json::Value;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Trace)
            .try_init()
            .ok();
    });
}

pub fn fixture(name: &str) -> anyhow::Result<Value> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{name}.json"));
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("fixture {name} is not valid JSON"))
}

pub fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Parses `json`, checks that serializing gives the same document back and
/// that parsing that output yields an equal value.
pub fn assert_round_trip<T: JsonCodec + Eq + Hash + Debug>(json: &Value) -> anyhow::Result<T> {
    let value = T::try_parse(json)?;
    let out = value.to_json();
    assert_eq!(&out, json, "{} changed on the way out", T::TYPE_NAME);
    let again = T::try_parse(&out)?;
    assert_eq!(again, value);
    assert_eq!(hash_of(&again), hash_of(&value));
    Ok(value)
}

pub fn contains_null(json: &Value) -> bool {
    match json {
        Value::Null => true,
        Value::Array(items) => items.iter().any(contains_null),
        Value::Object(object) => object.values().any(contains_null),
        _ => false,
    }
}
