#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Reject ragged rows, colon-less option lines and a missing legend
    /// instead of tolerating them (default: false)
    pub strict: bool,
}

impl Options {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}
