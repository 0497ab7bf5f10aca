#![no_main]

use libfuzzer_sys::fuzz_target;
use luascope::{ChunkConfig, Endianness, Parser, StringReader};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, data)) = data.split_first() else {
        return;
    };

    let tag = 0x50 + (selector & 0x07);
    let size_t = 1 + ((selector >> 3) & 0x07);
    let endianness = if selector & 0x40 != 0 {
        Endianness::Big
    } else {
        Endianness::Little
    };

    let Ok(config) = ChunkConfig::new(tag, size_t) else {
        return;
    };
    let Ok(mut reader) = StringReader::new(config.with_endianness(endianness)) else {
        return;
    };

    let mut parser = Parser::new(data);
    while parser.has_more_data() {
        let start = parser.pos();
        match reader.read(&mut parser) {
            Ok(_) => assert!(parser.pos() > start),
            Err(_) => {
                assert_eq!(parser.pos(), start);
                break;
            }
        }
    }
});
