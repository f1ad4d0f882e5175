//! Encoding a [`Chart`] back into its text form.
//!
//! Output layout: legend line, data rows, a blank line, then one
//! `key: value` line per option. Parsing the output yields the same chart
//! with two exceptions: trailing missing cells stay missing while interior
//! ones read back as empty strings, and a row that would render as a blank
//! line is written as a single tab, so its first two cells read back as
//! empty strings. Charts the text form cannot express are rejected with
//! [`Error::Message`]: tabs or newlines in names and cells, an empty first
//! series name without categories, a lone unnamed series next to
//! categories, blank rows in a one-column table, and option groups or keys
//! that would parse back under another name.

mod writer;

use crate::chart::{Chart, Dataset, OptionTree};
use crate::decode::option_block::{DEFAULT_GROUP, GROUP_ALIASES};
use crate::error::{Error, Result};
use crate::value::OptionValue;

use self::writer::LineWriter;

pub fn encode(chart: &Chart) -> Result<String> {
    let mut w = LineWriter::new();
    encode_dataset(&mut w, &chart.data)?;
    if chart.options.iter().any(|(_, g)| !g.is_empty()) {
        w.blank();
        encode_options(&mut w, &chart.options)?;
    }
    Ok(w.into_string())
}

fn encode_dataset(w: &mut LineWriter, data: &Dataset) -> Result<()> {
    let has_category = data.has_categories() || data.series.is_empty();
    for name in data.series.iter().map(|s| s.name.as_str()) {
        check_cell("series name", name)?;
    }
    if !has_category && data.series.first().is_some_and(|s| s.name.is_empty()) {
        return Err(Error::Message(
            "first series name must not be empty without categories".to_string(),
        ));
    }
    // "\t" alone is the bare category marker, which names no series
    if has_category && data.series.len() == 1 && data.series[0].name.is_empty() {
        return Err(Error::Message(
            "a single series next to categories must be named".to_string(),
        ));
    }
    let width = data.series.len() + usize::from(has_category);

    if data.series.is_empty() {
        // a bare marker still has to be a non-blank line
        w.line("\t");
    } else {
        let marker = has_category.then_some(Some(""));
        w.cells(marker.into_iter().chain(data.series.iter().map(|s| Some(s.name.as_str()))));
    }

    let mut row: Vec<Option<&str>> = Vec::with_capacity(data.series.len() + 1);
    for idx in 0..data.row_count() {
        row.clear();
        if has_category {
            row.push(Some(data.categories.get(idx).map_or("", String::as_str)));
        }
        for series in &data.series {
            row.push(series.data.get(idx).and_then(|c| c.as_deref()));
        }
        while row.last().is_some_and(|c| c.is_none()) {
            row.pop();
        }
        for cell in row.iter().flatten() {
            check_cell("cell", cell)?;
        }
        // an empty line would be skipped, or end the data block
        if row.iter().all(|c| c.is_none_or(str::is_empty)) && row.len() <= 1 {
            if width < 2 {
                return Err(Error::Message(format!(
                    "row {} is blank and the table has a single column",
                    idx + 1
                )));
            }
            row.clear();
            row.extend([Some(""), Some("")]);
        }
        w.cells(row.iter().copied());
    }
    Ok(())
}

fn encode_options(w: &mut LineWriter, options: &OptionTree) -> Result<()> {
    for (group, leaves) in options.iter() {
        if group.contains(['.', ':', '\n']) {
            return Err(Error::Message(format!("option group '{}' cannot be encoded", group)));
        }
        if GROUP_ALIASES.iter().any(|&(short, _)| short == group) {
            return Err(Error::Message(format!(
                "option group '{}' would read back as its alias",
                group
            )));
        }
        let prefix = short_group(group);
        for (leaf, value) in leaves.iter() {
            if leaf.contains(['.', ':', '\n']) {
                return Err(Error::Message(format!("option key '{}' cannot be encoded", leaf)));
            }
            let key = match prefix {
                None => leaf.to_string(),
                Some(prefix) => format!("{}.{}", prefix, leaf),
            };
            w.line_kv(&key, &format_value(value)?);
        }
    }
    Ok(())
}

/// Key prefix for a group; `None` for the implicit group.
fn short_group(group: &str) -> Option<&str> {
    if group == DEFAULT_GROUP {
        return None;
    }
    let short = GROUP_ALIASES
        .iter()
        .find(|&&(_, full)| full == group)
        .map_or(group, |&(short, _)| short);
    Some(short)
}

fn format_value(value: &OptionValue) -> Result<String> {
    Ok(match value {
        OptionValue::Number(n) => n.to_string(),
        OptionValue::String(s) if reads_back_as_text(s) => s.clone(),
        other => serde_json::to_string(&other.to_json())?,
    })
}

/// Whether writing `s` bare parses back to the same string.
fn reads_back_as_text(s: &str) -> bool {
    !s.is_empty()
        && s.trim() == s
        && !s.contains('\n')
        && serde_json::from_str::<serde_json::Value>(s).is_err()
}

fn check_cell(what: &str, value: &str) -> Result<()> {
    if value.contains(['\t', '\n']) {
        return Err(Error::Message(format!(
            "{} {:?} contains a tab or newline",
            what, value
        )));
    }
    Ok(())
}
