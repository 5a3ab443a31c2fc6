//! Line-oriented file reading
//!
//! Target files are read line by line with 1-based numbering. Bytes that are
//! not valid UTF-8 are replaced instead of failing the file; they become
//! separators for the tokenizer anyway.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::core::error::XrefError;

/// Iterator over `(line_number, line)` pairs
#[derive(Debug)]
pub struct NumberedLines<R> {
    reader: R,
    buffer: Vec<u8>,
    line_number: u32,
    lossy_lines: usize,
}

impl<R: BufRead> NumberedLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            line_number: 0,
            lossy_lines: 0,
        }
    }

    /// Number of the last line returned
    pub fn lines_read(&self) -> u32 {
        self.line_number
    }

    /// Lines that needed lossy UTF-8 conversion so far
    pub fn lossy_lines(&self) -> usize {
        self.lossy_lines
    }
}

impl<R: BufRead> Iterator for NumberedLines<R> {
    type Item = io::Result<(u32, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => None,
            Ok(_) => {
                if self.buffer.last() == Some(&b'\n') {
                    self.buffer.pop();
                }
                self.line_number += 1;
                let line = match String::from_utf8(std::mem::take(&mut self.buffer)) {
                    Ok(line) => line,
                    Err(e) => {
                        self.lossy_lines += 1;
                        String::from_utf8_lossy(e.as_bytes()).into_owned()
                    }
                };
                Some(Ok((self.line_number, line)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Open `path` for numbered line reading
pub fn open_lines(path: &Path) -> Result<NumberedLines<BufReader<File>>, XrefError> {
    let file = File::open(path).map_err(|source| XrefError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(NumberedLines::new(BufReader::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn collect(bytes: &[u8]) -> Vec<(u32, String)> {
        NumberedLines::new(bytes)
            .map(|line| line.unwrap())
            .collect()
    }

    #[test]
    fn test_numbering_starts_at_one() {
        let lines = collect(b"first\nsecond\n");
        assert_eq!(
            lines,
            vec![(1, "first".to_string()), (2, "second".to_string())]
        );
    }

    #[test]
    fn test_last_line_without_newline() {
        let lines = collect(b"a\nb");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], (2, "b".to_string()));
    }

    #[test]
    fn test_empty_lines_are_counted() {
        let lines = collect(b"\n\nthird\n");
        assert_eq!(lines[2], (3, "third".to_string()));
    }

    #[test]
    fn test_crlf_keeps_carriage_return() {
        let lines = collect(b"dos\r\n");
        assert_eq!(lines[0].1, "dos\r");
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let mut reader = NumberedLines::new(&b"ok\nbad \xff byte\n"[..]);
        assert_eq!(reader.next().unwrap().unwrap().1, "ok");
        let (number, line) = reader.next().unwrap().unwrap();
        assert_eq!(number, 2);
        assert!(line.starts_with("bad "));
        assert!(line.ends_with(" byte"));
        assert_eq!(reader.lossy_lines(), 1);
    }

    #[test]
    fn test_open_missing_file() {
        let temp = tempdir().unwrap();
        let err = open_lines(&temp.path().join("missing.txt")).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_open_existing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("x.txt");
        fs::write(&path, "one\ntwo\n").unwrap();
        let count = open_lines(&path).unwrap().count();
        assert_eq!(count, 2);
    }
}
