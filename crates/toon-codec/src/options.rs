use crate::error::{Error, Result};

/// Cell/field separator used by array headers and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ',' => Some(Delimiter::Comma),
            '\t' => Some(Delimiter::Tab),
            '|' => Some(Delimiter::Pipe),
            _ => None,
        }
    }
}

/// Key folding mode for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyFolding {
    /// No key folding, standard nested encoding.
    #[default]
    Off,
    /// Collapse single-key object chains into a dotted path; a chain is left
    /// unfolded when any segment would need quoting or contains a dot.
    Safe,
}

/// Path expansion mode for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpandPaths {
    /// Dotted keys are preserved as-is.
    #[default]
    Off,
    /// Expand unquoted dotted keys into nested objects. Only keys whose
    /// segments are all bare identifiers are expanded.
    Safe,
}

/// Encoder options.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Spaces per nesting level (must be > 0, default 2).
    pub indent: usize,
    pub delimiter: Delimiter,
    pub key_folding: KeyFolding,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            delimiter: Delimiter::default(),
            key_folding: KeyFolding::default(),
        }
    }
}

impl EncodeOptions {
    /// Rejects malformed option values before any traversal starts.
    pub fn validate(&self) -> Result<()> {
        if self.indent == 0 {
            return Err(Error::InvalidOptions(
                "indent must be a positive number of spaces".to_string(),
            ));
        }
        Ok(())
    }
}

/// Decoder options.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Expected spaces per nesting level (must be > 0, default 2). Used to
    /// validate indentation, not merely to guess it.
    pub indent: usize,
    /// Strict grammar validation (default true). When false, indentation
    /// drift and count mismatches degrade to best-effort reconstruction.
    pub strict: bool,
    pub expand_paths: ExpandPaths,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            strict: true,
            expand_paths: ExpandPaths::default(),
        }
    }
}

impl DecodeOptions {
    pub fn validate(&self) -> Result<()> {
        if self.indent == 0 {
            return Err(Error::InvalidOptions(
                "indent must be a positive number of spaces".to_string(),
            ));
        }
        Ok(())
    }

    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }
}
