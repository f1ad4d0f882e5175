#![doc = include_str!("../README.md")]

pub mod chart;
pub mod decode;
pub mod encode;
pub mod error;
pub mod language;
mod number;
pub mod options;
pub mod value;

pub use crate::chart::{Chart, Dataset, OptionGroup, OptionTree, Series};
pub use crate::decode::data_block::parse_data;
pub use crate::decode::option_block::parse_options;
pub use crate::error::{Error, Result};
pub use crate::language::{ChartType, DEFAULT_LANGUAGES, FALLBACK_MESSAGE};
pub use crate::options::Options;
pub use crate::value::{Number, OptionValue};

use std::io::{Read, Write};

/// Parse a chart code block. Never fails: malformed input degrades to
/// missing cells, skipped option lines or an empty dataset.
pub fn parse(code: &str) -> Chart {
    let blocks = crate::decode::scanner::split_blocks(code);
    tracing::debug!(
        data_bytes = blocks.data.len(),
        option_bytes = ?blocks.options.map(str::len),
        "split chart code block"
    );
    Chart {
        data: parse_data(blocks.data),
        options: parse_options(blocks.options),
    }
}

/// Like [`parse`], but with `options.strict` set the input is validated
/// first and the first offending line is reported.
pub fn parse_with_options(code: &str, options: &Options) -> Result<Chart> {
    if options.strict {
        let blocks = crate::decode::scanner::split_blocks(code);
        crate::decode::validation::validate(&blocks)?;
    }
    Ok(parse(code))
}

pub fn parse_from_reader<R: Read>(mut reader: R, options: &Options) -> Result<Chart> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    parse_with_options(&s, options)
}

pub fn encode_to_string(chart: &Chart) -> Result<String> {
    crate::encode::encode(chart)
}

pub fn encode_to_writer<W: Write>(mut writer: W, chart: &Chart) -> Result<()> {
    let s = encode_to_string(chart)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}
