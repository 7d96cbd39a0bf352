use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DelimArg {
    Comma,
    Tab,
    Pipe,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FoldArg {
    Off,
    Safe,
}

#[derive(Parser, Debug)]
#[command(name = "toon-codec-cli", about = "JSON <-> TOON converter", version)]
struct Args {
    /// Decode TOON to JSON (default encodes JSON to TOON)
    #[arg(short, long)]
    decode: bool,

    /// Delimiter for array headers and rows (encoding)
    #[arg(long, value_enum, default_value_t = DelimArg::Comma)]
    delimiter: DelimArg,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Collapse single-key object chains into dotted paths (encoding)
    #[arg(long, value_enum, default_value_t = FoldArg::Off)]
    key_folding: FoldArg,

    /// Expand dotted keys back into nested objects (decoding)
    #[arg(long, value_enum, default_value_t = FoldArg::Off)]
    expand_paths: FoldArg,

    /// Tolerate indentation drift and count mismatches instead of failing
    #[arg(long)]
    lenient: bool,

    /// Pretty-print JSON output (decoding)
    #[arg(long)]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    if args.decode {
        let options = toon_codec::DecodeOptions {
            indent: args.indent,
            strict: !args.lenient,
            expand_paths: match args.expand_paths {
                FoldArg::Off => toon_codec::ExpandPaths::Off,
                FoldArg::Safe => toon_codec::ExpandPaths::Safe,
            },
        };
        let value = toon_codec::decode_to_json(&buf, &options)?;
        if args.pretty {
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("{}", serde_json::to_string(&value)?);
        }
    } else {
        let options = toon_codec::EncodeOptions {
            indent: args.indent,
            delimiter: match args.delimiter {
                DelimArg::Comma => toon_codec::Delimiter::Comma,
                DelimArg::Tab => toon_codec::Delimiter::Tab,
                DelimArg::Pipe => toon_codec::Delimiter::Pipe,
            },
            key_folding: match args.key_folding {
                FoldArg::Off => toon_codec::KeyFolding::Off,
                FoldArg::Safe => toon_codec::KeyFolding::Safe,
            },
        };
        let value: serde_json::Value = serde_json::from_str(&buf)?;
        let out = toon_codec::encode_json(&value, &options)?;
        print!("{}", out);
    }

    Ok(())
}
