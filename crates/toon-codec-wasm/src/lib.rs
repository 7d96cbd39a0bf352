use toon_codec::{DecodeOptions, Delimiter, EncodeOptions, ExpandPaths, KeyFolding};
use wasm_bindgen::prelude::*;

/// Maximum input size in bytes (10 MB)
const MAX_INPUT_SIZE: usize = 10 * 1024 * 1024;

/// Install the panic hook once at module load for readable browser errors.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn parse_delimiter(s: &str) -> Result<Delimiter, String> {
    match s {
        "," => Ok(Delimiter::Comma),
        "\t" => Ok(Delimiter::Tab),
        "|" => Ok(Delimiter::Pipe),
        other => Err(format!("unsupported delimiter: {:?}", other)),
    }
}

fn check_size(input: &str) -> Result<(), String> {
    if input.len() > MAX_INPUT_SIZE {
        return Err(format!(
            "input exceeds maximum size of {} bytes",
            MAX_INPUT_SIZE
        ));
    }
    Ok(())
}

/// Convert a JSON string to TOON text.
#[wasm_bindgen]
pub fn json_to_toon(
    json_str: &str,
    delimiter: &str,
    indent: usize,
    key_folding: bool,
) -> Result<String, String> {
    check_size(json_str)?;
    let value: serde_json::Value =
        serde_json::from_str(json_str).map_err(|e| format!("invalid JSON: {}", e))?;
    let options = EncodeOptions {
        indent,
        delimiter: parse_delimiter(delimiter)?,
        key_folding: if key_folding {
            KeyFolding::Safe
        } else {
            KeyFolding::Off
        },
    };
    toon_codec::encode_json(&value, &options).map_err(|e| e.to_string())
}

/// Convert TOON text to a JSON string.
#[wasm_bindgen]
pub fn toon_to_json(
    toon_str: &str,
    indent: usize,
    strict: bool,
    expand_paths: bool,
    pretty: bool,
) -> Result<String, String> {
    check_size(toon_str)?;
    let options = DecodeOptions {
        indent,
        strict,
        expand_paths: if expand_paths {
            ExpandPaths::Safe
        } else {
            ExpandPaths::Off
        },
    };
    let value = toon_codec::decode_to_json(toon_str, &options).map_err(|e| e.to_string())?;
    let out = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    out.map_err(|e| e.to_string())
}
