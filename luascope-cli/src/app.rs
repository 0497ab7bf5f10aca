use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// luascope - inspect string constants of compiled Lua chunks
#[derive(Debug, Parser)]
#[command(name = "luascope", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Chunk format options, as they would be read from the chunk header.
#[derive(Debug, Args)]
pub struct FormatOptions {
    /// Generation tag of the chunk (hex like 0x53 or decimal).
    #[arg(short, long, value_name = "TAG")]
    pub generation: String,

    /// Width of the chunk's size_t in bytes.
    #[arg(long, default_value_t = 8)]
    pub size_t: u8,

    /// Chunk stores integers big-endian.
    #[arg(long)]
    pub big_endian: bool,

    /// Endianness flag byte as found in the chunk header (1 little, 0 big).
    #[arg(long, value_name = "FLAG", conflicts_with = "big_endian")]
    pub endian_flag: Option<u8>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode consecutive string records from a file.
    Decode {
        /// Path to the chunk file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        #[command(flatten)]
        format: FormatOptions,

        /// Offset of the first record (hex like 0x1a or decimal).
        #[arg(long, value_name = "OFFSET")]
        offset: Option<String>,

        /// Number of records to decode.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Encode a string record and print it as hex.
    Encode {
        #[command(flatten)]
        format: FormatOptions,

        /// Encode a null string instead of TEXT.
        #[arg(long, conflicts_with = "text")]
        null: bool,

        /// The string to encode.
        #[arg(value_name = "TEXT", required_unless_present = "null")]
        text: Option<String>,
    },
}
