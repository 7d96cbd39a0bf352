#![cfg(feature = "json")]
use serde_json::json;
use toon_codec::{Delimiter, EncodeOptions};

#[test]
fn encode_flat_object() -> Result<(), Box<dyn std::error::Error>> {
    let v = json!({"name": "Ada", "age": 36, "active": true});
    let s = toon_codec::encode_json(&v, &EncodeOptions::default())?;
    assert_eq!(s, "name: Ada\nage: 36\nactive: true\n");
    Ok(())
}

#[test]
fn encode_nested_object_indents() -> Result<(), Box<dyn std::error::Error>> {
    let v = json!({"server": {"host": "localhost", "port": 8080}});
    let s = toon_codec::encode_json(&v, &EncodeOptions::default())?;
    assert_eq!(s, "server:\n  host: localhost\n  port: 8080\n");
    Ok(())
}

#[test]
fn encode_custom_indent_width() -> Result<(), Box<dyn std::error::Error>> {
    let v = json!({"a": {"b": 1}});
    let opts = EncodeOptions {
        indent: 4,
        ..Default::default()
    };
    let s = toon_codec::encode_json(&v, &opts)?;
    assert_eq!(s, "a:\n    b: 1\n");
    Ok(())
}

#[test]
fn encode_root_scalars() -> Result<(), Box<dyn std::error::Error>> {
    let opts = EncodeOptions::default();
    assert_eq!(toon_codec::encode_json(&json!(null), &opts)?, "null\n");
    assert_eq!(toon_codec::encode_json(&json!(true), &opts)?, "true\n");
    assert_eq!(toon_codec::encode_json(&json!(42), &opts)?, "42\n");
    assert_eq!(toon_codec::encode_json(&json!("hi"), &opts)?, "hi\n");
    Ok(())
}

#[test]
fn encode_empty_containers() -> Result<(), Box<dyn std::error::Error>> {
    let opts = EncodeOptions::default();
    assert_eq!(toon_codec::encode_json(&json!({}), &opts)?, "");
    assert_eq!(toon_codec::encode_json(&json!([]), &opts)?, "[0]:\n");
    assert_eq!(
        toon_codec::encode_json(&json!({"xs": []}), &opts)?,
        "xs[0]:\n"
    );
    assert_eq!(toon_codec::encode_json(&json!({"o": {}}), &opts)?, "o:\n");
    Ok(())
}

#[test]
fn encode_inline_scalar_array() -> Result<(), Box<dyn std::error::Error>> {
    let v = json!({"nums": [1, 2, 3], "tags": ["red", "green"]});
    let s = toon_codec::encode_json(&v, &EncodeOptions::default())?;
    assert_eq!(s, "nums[3]: 1,2,3\ntags[2]: red,green\n");
    Ok(())
}

#[test]
fn encode_root_inline_array() -> Result<(), Box<dyn std::error::Error>> {
    let s = toon_codec::encode_json(&json!([1, 2, 3]), &EncodeOptions::default())?;
    assert_eq!(s, "[3]: 1,2,3\n");
    Ok(())
}

#[test]
fn long_scalar_array_switches_to_list_form() -> Result<(), Box<dyn std::error::Error>> {
    let items: Vec<String> = (0..20).map(|i| format!("entry_{i:03}")).collect();
    let s = toon_codec::encode_json(&json!({ "xs": items }), &EncodeOptions::default())?;
    assert!(s.starts_with("xs[20]:\n"));
    assert!(s.contains("  - entry_000\n"));
    assert!(s.contains("  - entry_019\n"));
    Ok(())
}

#[test]
fn mixed_array_uses_item_markers() -> Result<(), Box<dyn std::error::Error>> {
    let v = json!({"items": [1, {"x": 2}, [3, 4]]});
    let s = toon_codec::encode_json(&v, &EncodeOptions::default())?;
    assert_eq!(
        s,
        "items[3]:\n  - 1\n  -\n    x: 2\n  -\n    [2]: 3,4\n"
    );
    Ok(())
}

#[test]
fn empty_object_element_is_bare_marker() -> Result<(), Box<dyn std::error::Error>> {
    let v = json!({"items": [{}, 1]});
    let s = toon_codec::encode_json(&v, &EncodeOptions::default())?;
    assert_eq!(s, "items[2]:\n  -\n  - 1\n");
    Ok(())
}

#[test]
fn non_identifier_keys_are_quoted() -> Result<(), Box<dyn std::error::Error>> {
    let v = json!({"full-name": 1, "a key": 2, "1st": 3});
    let s = toon_codec::encode_json(&v, &EncodeOptions::default())?;
    assert_eq!(s, "\"full-name\": 1\n\"a key\": 2\n\"1st\": 3\n");
    Ok(())
}

#[test]
fn pipe_delimiter_marks_headers() -> Result<(), Box<dyn std::error::Error>> {
    let v = json!({"nums": [1, 2, 3]});
    let opts = EncodeOptions {
        delimiter: Delimiter::Pipe,
        ..Default::default()
    };
    let s = toon_codec::encode_json(&v, &opts)?;
    assert_eq!(s, "nums[3|]: 1|2|3\n");
    Ok(())
}

#[test]
fn zero_indent_is_rejected() {
    let opts = EncodeOptions {
        indent: 0,
        ..Default::default()
    };
    let err = toon_codec::encode_json(&json!({"a": 1}), &opts).unwrap_err();
    assert!(matches!(err, toon_codec::Error::InvalidOptions(_)));
}
