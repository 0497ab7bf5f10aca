//! The shortened string record layout.
//!
//! ```text
//! u8      size         0 for a null string, 0xFF if a size_t follows
//! size_t  size         only present if the first byte was 0xFF
//! u8[n]   content      scrambled, see `descramble`
//! ```
//!
//! The reader consumes `size` content bytes and descrambles them, while the writer stores
//! `content.len() + 1` as the size followed by the unmodified content. The two directions
//! are therefore not inverses of each other.

use std::io::Write;

use crate::{
    chunk::{config::ChunkConfig, lstring::LString, sizet::SizeT},
    file::parser::Parser,
    Result,
};

/// Marker byte announcing a full-width `size_t` length.
pub const EXTENDED_SIZE: u8 = 0xFF;

/// Reverse the keystream applied to compact string content, in place.
///
/// The keystream counter starts at `len - 1`; for every byte after the first, the key is
/// `counter % 255` and is then added to the counter. The first byte is never touched.
/// The counter is a 32-bit signed accumulator that wraps on overflow.
///
/// # Examples
///
/// ```rust
/// use luascope::chunk::strings::descramble;
///
/// let mut buffer = [0x41, 0x42, 0x43, 0x44];
/// descramble(&mut buffer);
/// assert_eq!(buffer, [0x41, 0x41, 0x45, 0x48]);
/// ```
pub fn descramble(buffer: &mut [u8]) {
    let mut counter = (buffer.len() as i32).wrapping_sub(1);
    for byte in buffer.iter_mut().skip(1) {
        *byte ^= next_key(&mut counter);
    }
}

fn next_key(counter: &mut i32) -> u8 {
    // Truncation keeps the low byte of the (possibly negative) remainder
    let key = (*counter % 255) as u8;
    *counter = counter.wrapping_add(i32::from(key));
    key
}

pub(super) fn parse(
    parser: &mut Parser,
    config: &ChunkConfig,
    scratch: &mut Vec<u8>,
) -> Result<LString> {
    let size = match parser.read_le::<u8>()? {
        0 => return Ok(LString::Null),
        EXTENDED_SIZE => {
            let size = SizeT::parse(parser, config)?;
            log::trace!("extended string size {}", size.value());
            size.to_usize()?
        }
        size => usize::from(size),
    };

    scratch.clear();
    scratch.extend_from_slice(parser.read_bytes(size)?);
    descramble(scratch);

    Ok(LString::new(scratch.as_slice()))
}

pub(super) fn write<W: Write + ?Sized>(
    out: &mut W,
    config: &ChunkConfig,
    value: &LString,
) -> Result<()> {
    let Some(content) = value.content() else {
        out.write_all(&[0x00])?;
        return Ok(());
    };

    let size = content.len() + 1;
    if size < usize::from(EXTENDED_SIZE) {
        out.write_all(&[size as u8])?;
    } else {
        let size = SizeT::from_len(size, config)?;
        out.write_all(&[EXTENDED_SIZE])?;
        size.write(out, config)?;
    }

    // No inverse keystream is applied on the way out
    out.write_all(content)?;
    Ok(())
}

pub(super) fn encoded_len(config: &ChunkConfig, value: &LString) -> usize {
    match value.content() {
        None => 1,
        Some(content) if content.len() + 1 < usize::from(EXTENDED_SIZE) => 1 + content.len(),
        Some(content) => 1 + usize::from(config.size_t()) + content.len(),
    }
}
