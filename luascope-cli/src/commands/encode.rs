use luascope::LString;
use serde::Serialize;

use crate::{
    app::{FormatOptions, GlobalOptions},
    commands::common::chunk_config,
    output::{hex, print_output},
};

#[derive(Debug, Serialize)]
struct EncodeOutput {
    codec: String,
    size: usize,
    bytes: String,
}

pub fn run(
    format: &FormatOptions,
    null: bool,
    text: Option<&str>,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let config = chunk_config(format, opts)?;
    let codec = config.codec()?;

    let value = match text {
        Some(text) if !null => LString::from(text),
        _ => LString::Null,
    };
    let bytes = codec.encode(&config, &value)?;

    let output = EncodeOutput {
        codec: codec.to_string(),
        size: bytes.len(),
        bytes: hex(&bytes),
    };

    print_output(&output, opts, |out| {
        println!("{}", out.bytes);
    })
}
