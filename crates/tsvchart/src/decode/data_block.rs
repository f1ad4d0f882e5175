//! Data stage: legend line plus tab-separated rows.

use crate::chart::{Dataset, Series};
use crate::decode::scanner;

/// Legend cell that marks the first column as category labels.
const CATEGORY_MARKER: &str = "";

const CELL_DELIMITER: char = '\t';

/// Parse a data block. Blank lines are ignored, short rows leave `None`
/// cells and an empty block gives an empty dataset.
pub fn parse_data(block: &str) -> Dataset {
    let mut lines = scanner::iter(block, 1)
        .map(|(_, line)| line)
        .filter(|line| !line.is_empty());

    let Some(legend_line) = lines.next() else {
        return Dataset::default();
    };
    let (has_category, legends) = split_legend(legend_line);

    let mut dataset = Dataset {
        categories: Vec::new(),
        series: legends.into_iter().map(Series::new).collect(),
    };

    for line in lines {
        let mut cells = line.split(CELL_DELIMITER);
        if has_category {
            // split always yields at least one cell
            dataset
                .categories
                .push(cells.next().unwrap_or_default().to_string());
        }
        for series in dataset.series.iter_mut() {
            series.data.push(cells.next().map(str::to_string));
        }
    }

    tracing::debug!(
        has_category,
        series = dataset.series.len(),
        rows = dataset.row_count(),
        "parsed chart data"
    );
    dataset
}

/// Split the legend line into the category flag and the series names.
pub(crate) fn split_legend(legend_line: &str) -> (bool, Vec<&str>) {
    let mut legends = legend_line.split(CELL_DELIMITER);
    let first = legends.next().unwrap_or_default();
    if first != CATEGORY_MARKER {
        return (false, core::iter::once(first).chain(legends).collect());
    }
    let names: Vec<&str> = legends.collect();
    // a bare marker line names no series at all; "\t\t" still names two
    // unnamed ones, the lone marker is the only special case
    if names.len() == 1 && names[0].is_empty() {
        return (true, Vec::new());
    }
    (true, names)
}
