//! String tables shared by the benches and the tests that keep them decodable.

#![allow(dead_code)]

use luascope::{chunk::strings::EXTENDED_SIZE, ChunkConfig, LString, SizeT, StringCodec};

/// Number of records in a benchmark table.
pub const TABLE_LEN: usize = 4096;

/// The value stored at `index`: short identifiers, with a null and a long literal every 8th.
pub fn table_value(index: usize) -> LString {
    match index % 8 {
        0 => LString::Null,
        7 => LString::new(vec![b'x'; 300 + index % 64]),
        _ => LString::from(format!("local_{index}")),
    }
}

/// Append a compact record as a compiler stores it: the size counts exactly the content bytes
/// that follow. The codec's own writer stores one more than it emits, so its output is not a
/// readable table.
fn write_compact_record(out: &mut Vec<u8>, config: &ChunkConfig, value: &LString) {
    let Some(content) = value.content() else {
        out.push(0x00);
        return;
    };

    if content.len() < usize::from(EXTENDED_SIZE) {
        out.push(content.len() as u8);
    } else {
        out.push(EXTENDED_SIZE);
        SizeT::from_len(content.len(), config)
            .unwrap()
            .write(out, config)
            .unwrap();
    }
    out.extend_from_slice(content);
}

/// Build a table of `count` records in the on-disk layout of `codec`.
///
/// Returns the table and the offset of every record.
pub fn build_table(
    codec: StringCodec,
    config: &ChunkConfig,
    count: usize,
) -> (Vec<u8>, Vec<usize>) {
    let mut data = Vec::new();
    let mut offsets = Vec::with_capacity(count);

    for index in 0..count {
        let value = table_value(index);
        offsets.push(data.len());
        match codec {
            StringCodec::Compact => write_compact_record(&mut data, config, &value),
            _ => codec.write(&mut data, config, &value).unwrap(),
        }
    }

    (data, offsets)
}
