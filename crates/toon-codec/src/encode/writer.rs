/// Accumulates output lines. Callers pass already-formatted (quoted/escaped)
/// text; the writer only handles indentation and line structure.
pub struct LineWriter {
    out: String,
    indent_cache: String,
}

impl LineWriter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            indent_cache: String::new(),
        }
    }

    fn write_indent(&mut self, spaces: usize) {
        if spaces == 0 {
            return;
        }
        if self.indent_cache.len() < spaces {
            self.indent_cache
                .extend(core::iter::repeat(' ').take(spaces - self.indent_cache.len()));
        }
        self.out.push_str(&self.indent_cache[..spaces]);
    }

    pub fn line(&mut self, spaces: usize, s: &str) {
        self.write_indent(spaces);
        self.out.push_str(s);
        self.out.push('\n');
    }

    pub fn line_kv(&mut self, spaces: usize, key: &str, value: &str) {
        self.write_indent(spaces);
        self.out.push_str(key);
        self.out.push_str(": ");
        self.out.push_str(value);
        self.out.push('\n');
    }

    pub fn line_list_item(&mut self, spaces: usize, value: &str) {
        self.write_indent(spaces);
        self.out.push_str("- ");
        self.out.push_str(value);
        self.out.push('\n');
    }

    /// Bare `-` marker introducing a nested list element block.
    pub fn line_list_marker(&mut self, spaces: usize) {
        self.write_indent(spaces);
        self.out.push('-');
        self.out.push('\n');
    }

    pub fn line_key_only(&mut self, spaces: usize, key: &str) {
        self.write_indent(spaces);
        self.out.push_str(key);
        self.out.push(':');
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
