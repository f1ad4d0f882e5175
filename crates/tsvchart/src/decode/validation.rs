//! Strict-mode validation
use crate::decode::data_block::split_legend;
use crate::decode::option_block::split_option_line;
use crate::decode::scanner::{self, Blocks};

#[derive(Debug)]
pub struct ValidationError {
    pub line: usize,
    pub message: String,
}

impl From<ValidationError> for crate::Error {
    fn from(e: ValidationError) -> Self {
        crate::Error::syntax(e.line, e.message)
    }
}

/// Validate both blocks, reporting lines of the whole input.
pub fn validate(blocks: &Blocks<'_>) -> Result<(), ValidationError> {
    validate_data(blocks.data, blocks.data_line)?;
    if let Some(options) = blocks.options {
        validate_options(options, blocks.options_line)?;
    }
    Ok(())
}

/// Every row must have exactly as many cells as the legend line.
pub fn validate_data(block: &str, first_line: usize) -> Result<(), ValidationError> {
    let mut lines = scanner::iter(block, first_line).filter(|(_, line)| !line.is_empty());
    let Some((_, legend_line)) = lines.next() else {
        return Err(ValidationError {
            line: first_line,
            message: "data block has no legend line".to_string(),
        });
    };
    let (has_category, legends) = split_legend(legend_line);
    let expected = legends.len() + usize::from(has_category);

    for (number, line) in lines {
        let got = line.split('\t').count();
        if got != expected {
            return Err(ValidationError {
                line: number,
                message: format!("row cell count {} does not match legend ({})", got, expected),
            });
        }
    }
    Ok(())
}

/// Every non-empty option line must be `key: value`.
pub fn validate_options(block: &str, first_line: usize) -> Result<(), ValidationError> {
    for (number, line) in scanner::iter(block, first_line) {
        if line.trim().is_empty() || split_option_line(line).is_some() {
            continue;
        }
        let message = if line.contains(':') {
            "option line has no value"
        } else {
            "option line is missing ':'"
        };
        return Err(ValidationError {
            line: number,
            message: message.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_row_reports_input_line() {
        let blocks = scanner::split_blocks("\n\tA\tB\nx\t1\t2\ny\t3\n");
        let err = validate(&blocks).unwrap_err();
        assert_eq!(err.line, 4);
        assert!(err.message.contains("row cell count 2"));
    }

    #[test]
    fn option_errors_name_the_problem() {
        let blocks = scanner::split_blocks("A\n1\n\nwidth: 1\ny.max 9000");
        let err = validate(&blocks).unwrap_err();
        assert_eq!(err.line, 5);
        assert_eq!(err.message, "option line is missing ':'");

        let blocks = scanner::split_blocks("A\n1\n\nheight:  ");
        let err = validate(&blocks).unwrap_err();
        assert_eq!(err.message, "option line has no value");
    }

    #[test]
    fn empty_data_block_is_rejected() {
        let err = validate(&scanner::split_blocks("\n\n")).unwrap_err();
        assert!(err.message.contains("legend"));
    }

    #[test]
    fn well_formed_input_passes() {
        let blocks = scanner::split_blocks("\tA\nx\t1\n\nwidth: 1\n\n");
        assert!(validate(&blocks).is_ok());
    }
}
