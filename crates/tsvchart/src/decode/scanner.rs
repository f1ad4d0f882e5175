//! Block splitting and numbered line iteration.

/// The two text blocks of a chart code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blocks<'a> {
    pub data: &'a str,
    /// 1-based line of the input where `data` starts.
    pub data_line: usize,
    pub options: Option<&'a str>,
    /// 1-based line of the input where `options` starts; meaningless when
    /// `options` is `None`.
    pub options_line: usize,
}

/// Strip leading newlines and split on runs of two or more. The first
/// segment is the data block, the second the option block; later segments
/// are dropped.
pub fn split_blocks(input: &str) -> Blocks<'_> {
    let rest = input.trim_start_matches('\n');
    let data_line = input.len() - rest.len() + 1;

    let Some(sep) = rest.find("\n\n") else {
        return Blocks {
            data: rest,
            data_line,
            options: None,
            options_line: data_line,
        };
    };
    let run = rest.as_bytes()[sep..]
        .iter()
        .take_while(|&&b| b == b'\n')
        .count();
    let data = &rest[..sep];
    let newlines_before = data.bytes().filter(|&b| b == b'\n').count() + run;
    let after = &rest[sep + run..];
    let options = after.find("\n\n").map_or(after, |end| &after[..end]);
    Blocks {
        data,
        data_line,
        options: Some(options),
        options_line: data_line + newlines_before,
    }
}

pub struct LineIter<'a> {
    rest: Option<&'a str>,
    line: usize,
}

/// Lines of `block` split on `\n` only, numbered from `first_line`.
/// A trailing newline yields a final empty line, as a plain split would.
pub fn iter(block: &str, first_line: usize) -> LineIter<'_> {
    LineIter {
        rest: Some(block),
        line: first_line,
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        let number = self.line;
        self.line += 1;
        match rest.find('\n') {
            Some(pos) => {
                self.rest = Some(&rest[pos + 1..]);
                Some((number, &rest[..pos]))
            }
            None => {
                self.rest = None;
                Some((number, rest))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_blank_run() {
        let b = split_blocks("\n\nA\tB\n1\t2\n\n\nwidth: 1\ntitle: t\n\nheight: 2");
        assert_eq!(b.data, "A\tB\n1\t2");
        assert_eq!(b.data_line, 3);
        assert_eq!(b.options, Some("width: 1\ntitle: t"));
        assert_eq!(b.options_line, 7);
    }

    #[test]
    fn segments_after_second_blank_run_are_dropped() {
        let b = split_blocks("A\n1\n\nwidth: 1\n\n\nheight: 2\n\nmore");
        assert_eq!(b.options, Some("width: 1"));
    }

    #[test]
    fn no_separator_means_no_options() {
        let b = split_blocks("A\tB\n1\t2\n");
        assert_eq!(b.data, "A\tB\n1\t2\n");
        assert_eq!(b.options, None);
    }

    #[test]
    fn trailing_blank_run_gives_empty_options() {
        let b = split_blocks("A\n1\n\n");
        assert_eq!(b.data, "A\n1");
        assert_eq!(b.options, Some(""));
    }

    #[test]
    fn numbered_lines_follow_plain_split() {
        let lines: Vec<_> = iter("a\n\nb\n", 4).collect();
        assert_eq!(lines, [(4, "a"), (5, ""), (6, "b"), (7, "")]);
    }
}
