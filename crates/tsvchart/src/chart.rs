//! Parsed chart model: the tabular [`Dataset`] and the two-level
//! [`OptionTree`].

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::value::OptionValue;

/// One legend column. `None` marks a cell the row did not have.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    pub name: String,
    pub data: Vec<Option<String>>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dataset {
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl Dataset {
    pub fn has_categories(&self) -> bool {
        !self.categories.is_empty()
    }

    /// Number of data rows, taking the longest column.
    pub fn row_count(&self) -> usize {
        self.series
            .iter()
            .map(|s| s.data.len())
            .chain(core::iter::once(self.categories.len()))
            .max()
            .unwrap_or(0)
    }
}

/// Leaf options of one group, in first-insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptionGroup {
    entries: Vec<(String, OptionValue)>,
}

impl OptionGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`; a repeated key is overwritten in place.
    pub fn insert(&mut self, key: impl Into<String>, value: OptionValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for OptionGroup {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        let mut group = OptionGroup::new();
        for (k, v) in map {
            group.insert(k, OptionValue::from(v));
        }
        group
    }
}

/// Group key (`chart`, `xAxis`, `yAxis` or any literal) to its leaf options.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "serde_json::Map<String, serde_json::Value>")
)]
pub struct OptionTree {
    groups: Vec<(String, OptionGroup)>,
}

impl OptionTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// The group for `key`, created empty on first use.
    pub fn group_mut(&mut self, key: &str) -> &mut OptionGroup {
        let idx = match self.groups.iter().position(|(k, _)| k == key) {
            Some(idx) => idx,
            None => {
                self.groups.push((key.to_string(), OptionGroup::new()));
                self.groups.len() - 1
            }
        };
        &mut self.groups[idx].1
    }

    pub fn group(&self, key: &str) -> Option<&OptionGroup> {
        self.groups.iter().find(|(k, _)| k == key).map(|(_, g)| g)
    }

    pub fn get(&self, group: &str, leaf: &str) -> Option<&OptionValue> {
        self.group(group).and_then(|g| g.get(leaf))
    }

    pub fn insert(&mut self, group: &str, leaf: impl Into<String>, value: OptionValue) {
        self.group_mut(group).insert(leaf, value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionGroup)> {
        self.groups.iter().map(|(k, g)| (k.as_str(), g))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl TryFrom<serde_json::Map<String, serde_json::Value>> for OptionTree {
    type Error = crate::Error;

    fn try_from(map: serde_json::Map<String, serde_json::Value>) -> crate::Result<Self> {
        let mut tree = OptionTree::new();
        for (key, value) in map {
            match value {
                serde_json::Value::Object(leaves) => {
                    tree.groups.push((key, OptionGroup::from(leaves)));
                }
                other => {
                    return Err(crate::Error::Message(format!(
                        "option group '{}' must be an object, got {}",
                        key, other
                    )));
                }
            }
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl Serialize for OptionGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl Serialize for OptionTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (k, g) in &self.groups {
            map.serialize_entry(k, g)?;
        }
        map.end()
    }
}

/// Result of one parse: the dataset and the chart options.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    pub data: Dataset,
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: OptionTree,
}
