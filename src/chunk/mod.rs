//! String constants of compiled Lua chunks.
//!
//! This module implements the string record codec a container reader/writer uses for the
//! string constants of a chunk. It does not decode instructions, assemble constant pools or
//! validate the chunk header; the caller reads the header, builds a [`config::ChunkConfig`]
//! from it and hands string records to the codec one at a time.
//!
//! # Key Components
//!
//! - [`config::ChunkConfig`] - Generation tag, `size_t` width, byte order and tracing of a chunk
//! - [`sizet::SizeT`] - The chunk-native length integer
//! - [`lstring::LString`] - A decoded string constant, or null
//! - [`strings::StringCodec`] - The three record layouts and their selection
//! - [`strings::StringReader`] - Sequential decoding with a reusable scratch buffer
//!
//! # Usage Examples
//!
//! ```rust
//! use luascope::{ChunkConfig, File, StringReader};
//!
//! let file = File::from_mem(vec![0x00, 0x04, b'a', b'b', b'c', b'd'])?;
//! let config = ChunkConfig::new(0x53, 8)?;
//! let mut reader = StringReader::new(config)?;
//!
//! let mut parser = file.parser_at(0)?;
//! for value in reader.read_n(&mut parser, 2)? {
//!     println!("{value}");
//! }
//! # Ok::<(), luascope::Error>(())
//! ```

pub mod config;
pub mod lstring;
pub mod sizet;
pub mod strings;
