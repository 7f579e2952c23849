use std::fs;

use serde_json::json;

use crate::image_pipeline::channels::ChannelMap;
use crate::image_pipeline::common::error::TaggerError;

fn load_str(text: &str) -> Result<ChannelMap, TaggerError> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("channels.json");
    fs::write(&path, text).unwrap();
    ChannelMap::load(&path)
}

#[test]
fn test_description_matches_python_dumps() {
    let map = load_str(r#"{"0":"DAPI","1":"CD3"}"#).unwrap();

    assert_eq!(map.to_description().unwrap(), r#"{"0": "DAPI", "1": "CD3"}"#);
}

#[test]
fn test_source_order_preserved() {
    let map = load_str(r#"{"10": "CD8", "2": "CD4", "0": "DAPI"}"#).unwrap();

    assert_eq!(
        map.to_description().unwrap(),
        r#"{"10": "CD8", "2": "CD4", "0": "DAPI"}"#
    );
    let keys: Vec<&String> = map.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["10", "2", "0"]);
}

#[test]
fn test_non_ascii_escaped() {
    let map: ChannelMap = [("0", "µ-actin"), ("1", "\u{1F52C}"), ("2", "del\u{7f}")]
        .into_iter()
        .collect();

    let description = map.to_description().unwrap();

    assert!(description.is_ascii());
    assert_eq!(
        description,
        r#"{"0": "\u00b5-actin", "1": "\ud83d\udd2c", "2": "del\u007f"}"#
    );
    assert_eq!(ChannelMap::from_description(&description), Some(map));
}

#[test]
fn test_control_characters_and_quotes() {
    let map: ChannelMap = [("0", "a\"b\n\tc\\")].into_iter().collect();

    assert_eq!(map.to_description().unwrap(), r#"{"0": "a\"b\n\tc\\"}"#);
}

#[test]
fn test_nested_values_pass_through() {
    let map: ChannelMap = [("0", json!(["DAPI", 405])), ("1", json!({"name": "CD3"}))]
        .into_iter()
        .collect();

    assert_eq!(
        map.to_description().unwrap(),
        r#"{"0": ["DAPI", 405], "1": {"name": "CD3"}}"#
    );
}

#[test]
fn test_number_text_passes_through() {
    let map = load_str(r#"{"0": 1e100, "1": 1e-7, "2": 123456789012345678901234, "3": 0.10}"#)
        .unwrap();

    let description = map.to_description().unwrap();

    assert_eq!(
        description,
        r#"{"0": 1e100, "1": 1e-7, "2": 123456789012345678901234, "3": 0.10}"#
    );
    assert_eq!(ChannelMap::from_description(&description), Some(map));
}

#[test]
fn test_empty_object() {
    let map = load_str("{}").unwrap();

    assert!(map.is_empty());
    assert_eq!(map.to_description().unwrap(), "{}");
}

#[test]
fn test_not_an_object() {
    let result = load_str(r#"["DAPI", "CD3"]"#);

    assert!(matches!(result, Err(TaggerError::ChannelMapNotObject(_))));
}

#[test]
fn test_malformed_json() {
    let result = load_str(r#"{"0": "DAPI","#);

    assert!(matches!(result, Err(TaggerError::ChannelMapParse { .. })));
    assert!(result.unwrap_err().is_configuration());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ChannelMap::load(dir.path().join("absent.json"));

    assert!(matches!(result, Err(TaggerError::ChannelMapRead { .. })));
}

#[test]
fn test_from_description_rejects_non_objects() {
    assert_eq!(ChannelMap::from_description("plain text"), None);
    assert_eq!(ChannelMap::from_description("[1, 2]"), None);
    assert_eq!(
        ChannelMap::from_description(r#"{"0": "DAPI"}"#)
            .and_then(|m| m.get("0").cloned()),
        Some(json!("DAPI"))
    );
}
