//! Input helpers for tile record files
//!
//! Opens plain or gzip-compressed text with a large read buffer and
//! iterates lines without reallocating.

use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Default buffer size for BufReader (128KB)
pub const DEFAULT_BUFFER_SIZE: usize = 128 * 1024;

/// Compression of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFormat {
    /// Plain text (uncompressed)
    Plain,
    /// Gzip or bgzip compressed (.gz)
    Gzip,
}

/// Detect compression from the `.gz` extension or the gzip magic bytes (1f 8b)
pub fn detect_compression(path: &Path) -> io::Result<CompressionFormat> {
    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        return Ok(CompressionFormat::Gzip);
    }

    let mut file = File::open(path)?;
    let mut magic = [0u8; 2];
    let bytes_read = file.read(&mut magic)?;
    if bytes_read == 2 && magic == [0x1f, 0x8b] {
        return Ok(CompressionFormat::Gzip);
    }
    Ok(CompressionFormat::Plain)
}

/// Open a text input, decompressing if needed
pub fn open_reader<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead + Send>> {
    let path = path.as_ref();
    let format = detect_compression(path)?;
    let file = File::open(path)?;

    Ok(match format {
        CompressionFormat::Gzip => Box::new(BufReader::with_capacity(
            DEFAULT_BUFFER_SIZE,
            MultiGzDecoder::new(file),
        )),
        CompressionFormat::Plain => Box::new(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file)),
    })
}

/// Line iterator that reuses a buffer to avoid allocations
pub struct LineIterator<R: BufRead> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> LineIterator<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::with_capacity(1024),
        }
    }

    /// Read the next line into the internal buffer
    /// Returns None at EOF, Some(Ok(&str)) on success, Some(Err) on error
    pub fn next_line(&mut self) -> Option<io::Result<&str>> {
        self.buffer.clear();
        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => None,
            Ok(_) => {
                if self.buffer.ends_with('\n') {
                    self.buffer.pop();
                    if self.buffer.ends_with('\r') {
                        self.buffer.pop();
                    }
                }
                Some(Ok(&self.buffer))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_plain_detected() -> io::Result<()> {
        let mut temp = NamedTempFile::new()?;
        writeln!(temp, "plain text")?;
        temp.flush()?;
        assert_eq!(detect_compression(temp.path())?, CompressionFormat::Plain);
        Ok(())
    }

    #[test]
    fn test_gzip_detected_by_magic() -> io::Result<()> {
        let mut temp = NamedTempFile::new()?;
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"line1\nline2\n")?;
        temp.write_all(&encoder.finish()?)?;
        temp.flush()?;

        assert_eq!(detect_compression(temp.path())?, CompressionFormat::Gzip);

        let mut iter = LineIterator::new(open_reader(temp.path())?);
        assert_eq!(iter.next_line().unwrap()?, "line1");
        assert_eq!(iter.next_line().unwrap()?, "line2");
        assert!(iter.next_line().is_none());
        Ok(())
    }

    #[test]
    fn test_line_iterator_strips_crlf() -> io::Result<()> {
        let mut iter = LineIterator::new(&b"a\r\nb\n"[..]);
        assert_eq!(iter.next_line().unwrap()?, "a");
        assert_eq!(iter.next_line().unwrap()?, "b");
        assert!(iter.next_line().is_none());
        Ok(())
    }
}
