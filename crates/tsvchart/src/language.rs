//! Code block language tags such as `chart` and `chart:line`.

use core::str::FromStr;

/// Tags a host should route to the chart parser by default.
pub const DEFAULT_LANGUAGES: &[&str] = &[
    "chart",
    "chart:bar",
    "chart:line",
    "chart:column",
    "chart:area",
    "chart:pie",
];

/// Text shown in place of a chart the host failed to render.
pub const FALLBACK_MESSAGE: &str = "invalid chart data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Column,
    Area,
    Pie,
}

impl ChartType {
    pub const ALL: [ChartType; 5] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Column,
        ChartType::Area,
        ChartType::Pie,
    ];

    /// Subtype after the first `:` of `tag`, [`ChartType::Bar`] when there is
    /// none. `None` for a subtype no chart factory exists for.
    pub fn from_language(tag: &str) -> Option<Self> {
        match tag.split(':').nth(1) {
            None => Some(ChartType::default()),
            Some(subtype) => subtype.parse().ok(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Column => "column",
            ChartType::Area => "area",
            ChartType::Pie => "pie",
        }
    }

    /// Name of the charting library's factory function, e.g. `barChart`.
    pub fn factory_name(self) -> String {
        format!("{}Chart", self.as_str())
    }
}

impl core::fmt::Display for ChartType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        ChartType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| crate::Error::Message(format!("unknown chart type '{}'", s)))
    }
}
