//! Option stage: `key[.leaf]: value` lines into an [`OptionTree`].

use crate::chart::OptionTree;
use crate::decode::scanner;
use crate::value::OptionValue;

/// Group that single-part keys land in.
pub const DEFAULT_GROUP: &str = "chart";

/// Short group names accepted on dotted keys.
pub const GROUP_ALIASES: &[(&str, &str)] = &[("x", "xAxis"), ("y", "yAxis")];

/// One option line split into its parts, before value typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionLine<'a> {
    pub group: &'a str,
    pub leaf: &'a str,
    /// Everything after the first colon, untrimmed.
    pub raw: &'a str,
}

/// Split a line; `None` when it carries no value.
pub fn split_option_line(line: &str) -> Option<OptionLine<'_>> {
    let (key, raw) = line.split_once(':')?;
    if raw.trim().is_empty() {
        return None;
    }
    let mut segments = key.split('.');
    let first = segments.next().unwrap_or_default();
    let (group, leaf) = match segments.next() {
        // segments past the second are ignored
        Some(leaf) => (resolve_group(first), leaf),
        None => (DEFAULT_GROUP, first),
    };
    Some(OptionLine { group, leaf, raw })
}

/// Map a dotted key's group through [`GROUP_ALIASES`].
pub fn resolve_group(group: &str) -> &str {
    GROUP_ALIASES
        .iter()
        .find(|(short, _)| *short == group)
        .map_or(group, |&(_, full)| full)
}

/// Parse an option block; `None` gives an empty tree.
pub fn parse_options(block: Option<&str>) -> OptionTree {
    let mut tree = OptionTree::new();
    let Some(block) = block else {
        return tree;
    };

    for (number, line) in scanner::iter(block, 1) {
        let Some(OptionLine { group, leaf, raw }) = split_option_line(line) else {
            if !line.is_empty() {
                tracing::trace!(line = number, "skipping option line without value");
            }
            continue;
        };
        tree.insert(group, leaf, OptionValue::from_raw(raw));
    }

    tracing::debug!(groups = tree.len(), "parsed chart options");
    tree
}
