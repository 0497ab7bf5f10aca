//! Convenient re-exports of the most commonly used types and traits.
//!
//! ```rust
//! use luascope::prelude::*;
//!
//! let config = ChunkConfig::new(0x54, 8)?;
//! let value = config.codec()?.parse(&mut Parser::new(&[0; 8]), &config)?;
//! assert_eq!(value, LString::Null);
//! # Ok::<(), luascope::Error>(())
//! ```

pub use crate::{
    chunk::{
        config::ChunkConfig,
        lstring::LString,
        sizet::SizeT,
        strings::{StringCodec, StringReader},
    },
    file::{io::Endianness, parser::Parser, File},
    Error, Result,
};
