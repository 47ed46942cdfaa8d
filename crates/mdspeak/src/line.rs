use std::io::{self, BufRead};

/// One raw input line, terminator included.
#[derive(Debug, Clone)]
pub struct LineRecord {
    pub raw: Vec<u8>,
    pub start: usize,
    pub end: usize,
}

/// Lazily yields the lines of `reader` as bytes.
///
/// Input is never decoded, so documents that are not valid UTF-8 still scan.
/// A read error is yielded once and ends the iteration.
pub struct Lines<R> {
    reader: R,
    offset: usize,
    done: bool,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            offset: 0,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<LineRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buffer = Vec::new();
        let bytes_read = match self.reader.read_until(b'\n', &mut buffer) {
            Ok(n) => n,
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        };

        if bytes_read == 0 {
            self.done = true;
            return None;
        }

        let start = self.offset;
        self.offset += bytes_read;

        Some(Ok(LineRecord {
            raw: buffer,
            start,
            end: self.offset,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    #[test]
    fn keeps_terminators_and_offsets() {
        let lines: Vec<LineRecord> = Lines::new(Cursor::new("one\r\ntwo\nthree"))
            .collect::<io::Result<_>>()
            .unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].raw, b"one\r\n");
        assert_eq!((lines[0].start, lines[0].end), (0, 5));
        assert_eq!(lines[1].raw, b"two\n");
        assert_eq!(lines[2].raw, b"three");
        assert_eq!((lines[2].start, lines[2].end), (9, 14));
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(Lines::new(Cursor::new("")).count(), 0);
    }

    #[test]
    fn accepts_invalid_utf8() {
        let lines: Vec<LineRecord> = Lines::new(Cursor::new(vec![0xff, b'a', b'\n']))
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(lines[0].raw, vec![0xff, b'a', b'\n']);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        }
    }

    #[test]
    fn read_error_is_reported_once() {
        let mut lines = Lines::new(BufReader::new(FailingReader));
        assert!(matches!(lines.next(), Some(Err(_))));
        assert!(lines.next().is_none());
    }
}
