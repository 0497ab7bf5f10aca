//! The benchmark string tables must decode cleanly with every codec.

#[path = "../benches/common/mod.rs"]
mod common;

use common::{build_table, table_value, TABLE_LEN};
use luascope::prelude::*;
use strum::IntoEnumIterator;

#[test]
fn test_tables_decode_sequentially() -> Result<()> {
    for codec in StringCodec::iter() {
        let config = ChunkConfig::new(codec.tag(), 8)?;
        let (data, offsets) = build_table(codec, &config, TABLE_LEN);
        assert_eq!(offsets.len(), TABLE_LEN);

        let mut reader = StringReader::new(config)?;
        let mut parser = Parser::new(&data);
        let values = reader.read_n(&mut parser, TABLE_LEN)?;

        assert!(!parser.has_more_data(), "{codec}");
        for (index, value) in values.iter().enumerate() {
            assert_eq!(value.is_null(), table_value(index).is_null(), "{codec} #{index}");
            assert_eq!(
                value.content().map(<[u8]>::len),
                table_value(index).content().map(<[u8]>::len),
                "{codec} #{index}"
            );
        }
    }
    Ok(())
}

#[test]
fn test_tables_decode_at_offsets() -> Result<()> {
    for codec in StringCodec::iter() {
        let config = ChunkConfig::new(codec.tag(), 8)?;
        let (data, offsets) = build_table(codec, &config, TABLE_LEN);

        let values = codec.parse_at(&data, &offsets, &config)?;
        assert_eq!(values.len(), TABLE_LEN, "{codec}");

        let mut reader = StringReader::new(config)?;
        let mut parser = Parser::new(&data);
        assert_eq!(values, reader.read_n(&mut parser, TABLE_LEN)?, "{codec}");
    }
    Ok(())
}

#[test]
fn test_compact_table_is_raw_records() -> Result<()> {
    let config = ChunkConfig::new(0x53, 8)?;
    let (data, offsets) = build_table(StringCodec::Compact, &config, 8);

    // Record 1 is "local_1": size byte 7, then exactly 7 stored bytes
    assert_eq!(data[offsets[0]], 0x00);
    assert_eq!(data[offsets[1]], 7);
    assert_eq!(offsets[2] - offsets[1], 1 + 7);

    // Record 7 is a 307 byte literal behind the extended size marker
    assert_eq!(data[offsets[7]], 0xFF);
    assert_eq!(&data[offsets[7] + 1..offsets[7] + 9], &307_u64.to_le_bytes());
    assert_eq!(data.len() - offsets[7], 1 + 8 + 307);
    Ok(())
}
