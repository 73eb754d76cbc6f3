use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// How a file's content is carried over to the output tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// No null byte anywhere; rewritten line by line.
    Text,
    /// Copied byte for byte.
    Binary,
}

/// Scans the whole file for a null byte.
pub fn classify_file(path: &Path) -> std::io::Result<ContentKind> {
    let mut reader = BufReader::new(File::open(path)?);

    loop {
        let chunk = reader.fill_buf()?;
        if chunk.is_empty() {
            return Ok(ContentKind::Text);
        }
        if chunk.contains(&0) {
            return Ok(ContentKind::Binary);
        }
        let consumed = chunk.len();
        reader.consume(consumed);
    }
}

pub fn is_text_file(path: &Path) -> std::io::Result<bool> {
    classify_file(path).map(|kind| kind == ContentKind::Text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn plain_text_is_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.md");
        fs::write(&path, "# Title\n\nBody\n").unwrap();

        assert_eq!(classify_file(&path).unwrap(), ContentKind::Text);
    }

    #[test]
    fn empty_file_is_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, b"").unwrap();

        assert!(is_text_file(&path).unwrap());
    }

    #[test]
    fn non_utf8_without_null_is_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, [0xe9u8, 0xe8, 0xff, b'\n']).unwrap();

        assert!(is_text_file(&path).unwrap());
    }

    #[test]
    fn null_byte_makes_binary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("image.png");
        fs::write(&path, [0x89u8, b'P', b'N', b'G', 0x00, 0x01]).unwrap();

        assert_eq!(classify_file(&path).unwrap(), ContentKind::Binary);
    }

    #[test]
    fn null_byte_past_first_buffer_is_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("late.bin");
        let mut content = vec![b'a'; 64 * 1024];
        content.push(0);
        fs::write(&path, &content).unwrap();

        assert_eq!(classify_file(&path).unwrap(), ContentKind::Binary);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(classify_file(&dir.path().join("nope")).is_err());
    }
}
