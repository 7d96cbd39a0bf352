#![doc = include_str!("../README.md")]

pub mod decode;
pub mod encode;
pub mod error;
mod number;
pub mod options;
pub mod tabular;
pub mod value;

#[cfg(feature = "json")]
pub mod json;

pub use crate::error::{Error, Result};
pub use crate::options::{DecodeOptions, Delimiter, EncodeOptions, ExpandPaths, KeyFolding};
pub use crate::value::{Number, Value};

#[cfg(feature = "json")]
use std::io::{Read, Write};

#[cfg(feature = "json")]
use serde::{Serialize, de::DeserializeOwned};

/// Encode a [`Value`] as TOON text. Pure and deterministic; fails only on
/// invalid options.
pub fn encode(value: &Value, options: &EncodeOptions) -> Result<String> {
    encode::encoders::encode_document(value, options)
}

/// Decode TOON text into a [`Value`]. Structural errors carry the 1-based
/// source line number.
pub fn decode(input: &str, options: &DecodeOptions) -> Result<Value> {
    decode::parser::parse_document(input, options)
}

/// Encode a `serde_json::Value` directly.
#[cfg(feature = "json")]
pub fn encode_json(value: &serde_json::Value, options: &EncodeOptions) -> Result<String> {
    encode(&json::from_json(value), options)
}

/// Decode TOON text into a `serde_json::Value`.
#[cfg(feature = "json")]
pub fn decode_to_json(input: &str, options: &DecodeOptions) -> Result<serde_json::Value> {
    Ok(json::to_json(decode(input, options)?))
}

/// Encode any `Serialize` type (routed through `serde_json`'s data model).
#[cfg(feature = "json")]
pub fn to_string<T: Serialize>(value: &T, options: &EncodeOptions) -> Result<String> {
    let v = serde_json::to_value(value)?;
    encode_json(&v, options)
}

/// Decode TOON text into any `DeserializeOwned` type.
#[cfg(feature = "json")]
pub fn from_str<T: DeserializeOwned>(input: &str, options: &DecodeOptions) -> Result<T> {
    let v = decode_to_json(input, options)?;
    Ok(serde_json::from_value(v)?)
}

#[cfg(feature = "json")]
pub fn encode_to_writer<W: Write, T: Serialize>(
    mut writer: W,
    value: &T,
    options: &EncodeOptions,
) -> Result<()> {
    let s = to_string(value, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(feature = "json")]
pub fn decode_from_reader<R: Read, T: DeserializeOwned>(
    mut reader: R,
    options: &DecodeOptions,
) -> Result<T> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    from_str(&s, options)
}
