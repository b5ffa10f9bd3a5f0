/// A buffered line writer that tracks the current indentation level.
///
/// Every line is prefixed with the indentation that was current when
/// it was written. Lines are never reordered or merged.
#[derive(Debug)]
pub struct Emitter {
    unit: String,
    depth: usize,
    lines: Vec<String>,
}

impl Emitter {
    /// Creates an emitter that indents each level by `width` spaces.
    pub fn new(width: usize) -> Self {
        Self {
            unit: " ".repeat(width),
            depth: 0,
            lines: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decreases the indentation level.
    ///
    /// # Panics
    ///
    /// Panics if the level is already zero. Every `dedent()` must be
    /// paired with an earlier `indent()`.
    pub fn dedent(&mut self) {
        self.depth = self
            .depth
            .checked_sub(1)
            .unwrap_or_else(|| panic!("can't dedent below zero"));
    }

    /// Appends a line at the current indentation level.
    /// The line shouldn't contain a newline; the emitter adds one.
    pub fn line(&mut self, line: impl AsRef<str>) {
        let line = line.as_ref();
        let mut buffered = String::with_capacity(self.unit.len() * self.depth + line.len() + 1);
        for _ in 0..self.depth {
            buffered.push_str(&self.unit);
        }
        buffered.push_str(line);
        buffered.push('\n');
        self.lines.push(buffered);
    }

    /// Writes `open`, then calls `f` one level deeper, then writes `close`.
    pub fn block<T>(
        &mut self,
        open: impl AsRef<str>,
        close: impl AsRef<str>,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        self.line(open);
        self.indent();
        let result = f(self);
        self.dedent();
        self.line(close);
        result
    }

    /// Concatenates all the buffered lines.
    pub fn finish(self) -> Vec<u8> {
        self.lines.concat().into_bytes()
    }
}
