/// Indent-aware output buffer filled by the printer functions
#[derive(Debug, Default)]
pub struct CodeWriter {
    buffer: String,
    indent_level: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn add_line(&mut self, text: &str) {
        self.add_indented(text);
        self.add("\n");
    }

    pub fn add_indented(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.buffer.push_str("  ");
        }
        self.buffer.push_str(text);
    }

    /// Empty line, never indented
    pub fn blank_line(&mut self) {
        self.add("\n");
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}
