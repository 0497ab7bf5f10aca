use std::path::Path;

use anyhow::Context;
use luascope::{File, LString, StringReader};
use serde::Serialize;

use crate::{
    app::{FormatOptions, GlobalOptions},
    commands::common::{chunk_config, parse_number},
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct RecordEntry {
    offset: String,
    size: usize,
    kind: &'static str,
    trailing: Option<String>,
    value: Option<String>,
}

#[derive(Debug, Serialize)]
struct DecodeOutput {
    codec: String,
    records: Vec<RecordEntry>,
}

pub fn run(
    path: &Path,
    format: &FormatOptions,
    offset: Option<&str>,
    count: usize,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let config = chunk_config(format, opts)?;
    let mut reader = StringReader::new(config)?;

    let file = File::from_file(path)
        .with_context(|| format!("failed to load chunk: {}", path.display()))?;
    let start = offset.map(parse_number).transpose()?.unwrap_or(0);
    let mut parser = file
        .parser_at(start)
        .with_context(|| format!("offset 0x{start:x} is past the end of the file"))?;

    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        let record_offset = parser.pos();
        let value = reader
            .read(&mut parser)
            .with_context(|| format!("failed to decode string record at 0x{record_offset:x}"))?;

        records.push(RecordEntry {
            offset: format!("0x{record_offset:06x}"),
            size: parser.pos() - record_offset,
            kind: if value.is_null() { "null" } else { "string" },
            trailing: value.trailing().map(|byte| format!("0x{byte:02x}")),
            value: render(&value),
        });
    }

    let output = DecodeOutput {
        codec: reader.codec().to_string(),
        records,
    };

    print_output(&output, opts, |out| {
        println!("Codec: {}", out.codec);
        println!();

        let mut tw = TabWriter::new(vec![
            ("Offset", Align::Left),
            ("Size", Align::Right),
            ("Kind", Align::Left),
            ("Trailing", Align::Left),
            ("Value", Align::Left),
        ]);
        for record in &out.records {
            tw.row(vec![
                record.offset.clone(),
                record.size.to_string(),
                record.kind.to_string(),
                record.trailing.clone().unwrap_or_default(),
                record.value.clone().unwrap_or_default(),
            ]);
        }
        tw.print();
    })
}

fn render(value: &LString) -> Option<String> {
    value
        .content()
        .map(|content| content.escape_ascii().to_string())
}
