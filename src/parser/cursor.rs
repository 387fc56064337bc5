/// Forward-only position over the lines of one source text.
///
/// A single cursor is threaded by `&mut` through every nested scope, so a
/// child scope consumes exactly the lines its parent resumes after.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    lines: Vec<&'src str>,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { lines: source.lines().collect(), pos: 0 }
    }

    /// Yield the next line and move past it.
    pub fn next_line(&mut self) -> Option<&'src str> {
        let line = self.lines.get(self.pos).copied()?;
        self.pos += 1;
        Some(line)
    }

    /// 1-based number of the line most recently yielded, 0 before the first.
    pub fn line_number(&self) -> usize {
        self.pos
    }

    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.lines.len()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
