// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # luascope
//!
//! Decoding and encoding of the string constants embedded in compiled Lua bytecode chunks.
//!
//! Over its lifetime the bytecode format has stored string constants in three mutually
//! incompatible layouts. `luascope` implements all of them with exact byte-level fidelity,
//! so a bytecode reader/writer can hand string records to it and get back precisely what
//! the original toolchain produced or expects.
//!
//! ## Quick Start
//!
//! ```rust
//! use luascope::prelude::*;
//!
//! // Configuration as read from the chunk header by the caller
//! let config = ChunkConfig::new(0x54, 8)?;
//! let codec = config.codec()?;
//!
//! let data = [0x06, 0, 0, 0, 0, 0, 0, 0, b'p', b'r', b'i', b'n', b't'];
//! let value = codec.parse(&mut Parser::new(&data), &config)?;
//! assert_eq!(value, LString::from("print"));
//!
//! // Writing reproduces the record
//! assert_eq!(codec.encode(&config, &value)?, data);
//! # Ok::<(), luascope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`file`] - Chunk input (owned buffers and memory-mapped files), the [`Parser`] cursor and
//!   byte order helpers
//! - [`chunk`] - The string record codec: [`ChunkConfig`], [`SizeT`], [`LString`],
//!   [`StringCodec`] and [`StringReader`]
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Record Layouts
//!
//! | Generation | Codec                    | Framing                                 |
//! |------------|--------------------------|-----------------------------------------|
//! | 5.0 - 5.2  | [`StringCodec::Legacy`]  | `size_t` length, stored terminator byte |
//! | 5.3        | [`StringCodec::Compact`] | one byte length with `size_t` escape, scrambled content |
//! | 5.4        | [`StringCodec::Modern`]  | `size_t` length, implicit terminator    |
//!
//! The compact layout descrambles content when reading but writes content verbatim, so
//! decoding and re-encoding a compact record yields different bytes. See
//! [`chunk::strings`] for details.
//!
//! ## Logging
//!
//! `luascope` logs through the [`log`](https://docs.rs/log) facade. With
//! [`ChunkConfig::with_debug`] enabled every decoded string is traced at debug level.
//!
//! ## Thread Safety
//!
//! All codec operations are pure functions of their input buffer and [`ChunkConfig`]. Scratch
//! memory is either allocated per call or owned by the caller, so any number of threads can
//! decode records of the same chunk concurrently, see [`StringCodec::parse_at`].

#[macro_use]
pub(crate) mod error;

/// Chunk input, cursor and byte order utilities.
pub mod file;

/// The string record codec.
pub mod chunk;

/// Convenient re-exports of the most commonly used types and traits.
pub mod prelude;

/// `luascope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `luascope` Error type
pub use error::Error;

pub use chunk::{
    config::ChunkConfig,
    lstring::LString,
    sizet::SizeT,
    strings::{StringCodec, StringReader},
};
pub use file::{io::Endianness, parser::Parser, File};
