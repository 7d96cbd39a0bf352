#![cfg(feature = "json")]
use serde_json::json;
use toon_codec::{DecodeOptions, ExpandPaths};

fn lenient(s: &str) -> Result<serde_json::Value, toon_codec::Error> {
    toon_codec::decode_to_json(s, &DecodeOptions::default().lenient())
}

#[test]
fn actual_count_wins_over_declared() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(lenient("nums[3]: 1,2\n")?, json!({"nums": [1, 2]}));
    assert_eq!(lenient("nums[1]: 1,2,3\n")?, json!({"nums": [1, 2, 3]}));
    assert_eq!(
        lenient("items[5]:\n  - 1\n")?,
        json!({"items": [1]})
    );
    Ok(())
}

#[test]
fn short_table_rows_pad_with_null() -> Result<(), Box<dyn std::error::Error>> {
    let v = lenient("rows[2]{a,b}:\n  1,2\n  3\n")?;
    assert_eq!(v, json!({"rows": [{"a": 1, "b": 2}, {"a": 3, "b": null}]}));
    Ok(())
}

#[test]
fn extra_table_cells_are_dropped() -> Result<(), Box<dyn std::error::Error>> {
    let v = lenient("rows[1]{a}:\n  1,2,3\n")?;
    assert_eq!(v, json!({"rows": [{"a": 1}]}));
    Ok(())
}

#[test]
fn duplicate_keys_last_write_wins() -> Result<(), Box<dyn std::error::Error>> {
    let v = lenient("a: 1\nb: 2\na: 3\n")?;
    assert_eq!(v, json!({"a": 3, "b": 2}));
    Ok(())
}

#[test]
fn odd_indentation_clamps_to_depth() -> Result<(), Box<dyn std::error::Error>> {
    let v = lenient("a:\n   b: 1\n")?;
    assert_eq!(v, json!({"a": {"b": 1}}));
    Ok(())
}

#[test]
fn leading_indent_is_tolerated() -> Result<(), Box<dyn std::error::Error>> {
    let v = lenient(" a: 1\n")?;
    assert_eq!(v, json!({"a": 1}));
    Ok(())
}

#[test]
fn stray_lines_are_dropped() -> Result<(), Box<dyn std::error::Error>> {
    let v = lenient("a: 1\nloose text\n- 2\nb: 3\n")?;
    assert_eq!(v, json!({"a": 1, "b": 3}));
    Ok(())
}

#[test]
fn path_collision_overwrites() -> Result<(), Box<dyn std::error::Error>> {
    let opts = DecodeOptions {
        expand_paths: ExpandPaths::Safe,
        ..Default::default()
    }
    .lenient();
    let v = toon_codec::decode_to_json("a: 1\na.b: 2\n", &opts)?;
    assert_eq!(v, json!({"a": {"b": 2}}));
    Ok(())
}

#[test]
fn well_formed_input_decodes_identically() -> Result<(), Box<dyn std::error::Error>> {
    let s = "users[2]{id,name}:\n  1,Alice\n  2,Bob\nactive: true\n";
    let strict = toon_codec::decode_to_json(s, &DecodeOptions::default())?;
    let loose = lenient(s)?;
    assert_eq!(strict, loose);
    Ok(())
}
