use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;

use crate::pos::{BytePos, Span};
use crate::sync::Lrc;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum FileName {
    Real(PathBuf),
    Custom(String),
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileName::Real(p) => write!(f, "{}", p.display()),
            FileName::Custom(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FileName {
    fn from(s: &str) -> Self {
        FileName::Real(PathBuf::from(s))
    }
}

/// A single source file registered in a [SourceMap].
#[derive(Debug)]
pub struct SourceFile {
    pub name: FileName,
    /// Offset of the first byte of `src` in the source map address space.
    pub start_pos: BytePos,
    /// Offset one past the last byte of `src`.
    pub end_pos: BytePos,
    pub src: String,
    /// Offsets of the first byte of every line.
    lines: Vec<BytePos>,
}

impl SourceFile {
    fn new(name: FileName, start_pos: BytePos, src: String) -> Self {
        let mut lines = vec![start_pos];
        for (i, b) in src.bytes().enumerate() {
            if b == b'\n' {
                lines.push(BytePos(start_pos.0 + i as u32 + 1));
            }
        }
        let end_pos = BytePos(start_pos.0 + src.len() as u32);
        SourceFile {
            name,
            start_pos,
            end_pos,
            src,
            lines,
        }
    }

    /// Zero-based (line, column) of `pos`, which must lie within this file.
    pub fn lookup_line_col(&self, pos: BytePos) -> (usize, usize) {
        let line = match self.lines.binary_search(&pos) {
            Ok(l) => l,
            Err(l) => l - 1,
        };
        (line, (pos.0 - self.lines[line].0) as usize)
    }

    pub fn span(&self) -> Span {
        Span::new(self.start_pos, self.end_pos)
    }
}

/// Registry of source files sharing one byte-offset address space, so a
/// [Span] alone identifies both a file and a position within it.
#[derive(Default)]
pub struct SourceMap {
    files: RefCell<Vec<Lrc<SourceFile>>>,
}

impl SourceMap {
    pub fn new_source_file(&self, name: FileName, src: String) -> Lrc<SourceFile> {
        let mut files = self.files.borrow_mut();
        // Offset 0 belongs to DUMMY_SP.
        let start = files.last().map(|f| f.end_pos.0 + 1).unwrap_or(1);
        let file = Lrc::new(SourceFile::new(name, BytePos(start), src));
        files.push(file.clone());
        file
    }

    pub fn load_file(&self, path: &std::path::Path) -> std::io::Result<Lrc<SourceFile>> {
        let src = std::fs::read_to_string(path)?;
        Ok(self.new_source_file(FileName::Real(path.to_path_buf()), src))
    }

    pub fn lookup_file(&self, pos: BytePos) -> Option<Lrc<SourceFile>> {
        if pos.0 == 0 {
            return None;
        }
        let files = self.files.borrow();
        let idx = match files.binary_search_by_key(&pos, |f| f.start_pos) {
            Ok(i) => i,
            Err(0) => return None,
            Err(i) => i - 1,
        };
        let file = &files[idx];
        if pos <= file.end_pos {
            Some(file.clone())
        } else {
            None
        }
    }

    pub fn span_to_filename(&self, span: Span) -> Option<FileName> {
        self.lookup_file(span.lo).map(|f| f.name.clone())
    }

    /// `file:line:col` rendering for diagnostics; line is one-based.
    pub fn span_to_string(&self, span: Span) -> String {
        match self.lookup_file(span.lo) {
            Some(f) => {
                let (line, col) = f.lookup_line_col(span.lo);
                format!("{}:{}:{}", f.name, line + 1, col)
            }
            None => "<unknown>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_spans_across_files() {
        let cm = SourceMap::default();
        let a = cm.new_source_file(FileName::Custom("a.js".into()), "var x;\nx;".into());
        let b = cm.new_source_file(FileName::Custom("b.js".into()), "1".into());

        assert_eq!(a.start_pos, BytePos(1));
        assert_eq!(
            cm.span_to_filename(Span::new(BytePos(8), BytePos(9))),
            Some(FileName::Custom("a.js".into()))
        );
        assert_eq!(
            cm.span_to_filename(b.span()),
            Some(FileName::Custom("b.js".into()))
        );
        assert_eq!(cm.span_to_filename(crate::DUMMY_SP), None);

        let (line, col) = a.lookup_line_col(BytePos(8));
        assert_eq!((line, col), (1, 0));
    }
}
