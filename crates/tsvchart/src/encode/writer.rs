pub struct LineWriter {
    out: String,
}

impl LineWriter {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    pub fn line(&mut self, s: &str) {
        self.out.push_str(s);
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Tab-joined cells; `None` writes an empty cell.
    pub fn cells<'a, I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        for (idx, cell) in cells.into_iter().enumerate() {
            if idx > 0 {
                self.out.push('\t');
            }
            self.out.push_str(cell.unwrap_or_default());
        }
        self.out.push('\n');
    }

    pub fn line_kv(&mut self, key: &str, value: &str) {
        self.out.push_str(key);
        self.out.push_str(": ");
        self.out.push_str(value);
        self.out.push('\n');
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for LineWriter {
    fn default() -> Self {
        Self::new()
    }
}
