use anyhow::Context;
use luascope::{ChunkConfig, Endianness};

use crate::app::{FormatOptions, GlobalOptions};

/// Parse a number string supporting hex (0x...) and decimal.
pub fn parse_number(s: &str) -> anyhow::Result<usize> {
    let trimmed = s.trim();
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        usize::from_str_radix(hex, 16).with_context(|| format!("invalid hex number: {s}"))
    } else {
        trimmed
            .parse::<usize>()
            .with_context(|| format!("invalid number: {s}"))
    }
}

/// Build the chunk configuration from the command line format options.
pub fn chunk_config(format: &FormatOptions, opts: &GlobalOptions) -> anyhow::Result<ChunkConfig> {
    let tag = parse_number(&format.generation)?;
    let tag = u8::try_from(tag).with_context(|| format!("generation tag out of range: {tag}"))?;

    let endianness = match format.endian_flag {
        Some(flag) => Endianness::from_flag(flag).context("invalid chunk header")?,
        None if format.big_endian => Endianness::Big,
        None => Endianness::Little,
    };

    let config = ChunkConfig::new(tag, format.size_t)
        .context("invalid chunk format")?
        .with_endianness(endianness)
        .with_debug(opts.verbose);

    log::debug!(
        "chunk format: generation 0x{:02x}, size_t {}, {} endian (flag {})",
        config.version(),
        config.size_t(),
        config.endianness(),
        config.endianness().flag()
    );

    Ok(config)
}
