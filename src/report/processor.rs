//! Finding sinks

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::ErrorLog;

/// Consumes the findings of a run.
pub trait ErrorProcessor {
    fn process(&self, errors: &[ErrorLog]) -> io::Result<()>;
}

/// Writes `subject` and `body` on consecutive lines, one pair per finding.
///
/// The target file is truncated first.
#[derive(Debug, Clone)]
pub struct FileOutputErrorProcessor {
    path: PathBuf,
}

impl FileOutputErrorProcessor {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ErrorProcessor for FileOutputErrorProcessor {
    fn process(&self, errors: &[ErrorLog]) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(&self.path)?);
        for error in errors {
            writeln!(out, "{}", error.subject())?;
            writeln!(out, "{}", error.body())?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_writes_subject_body_pairs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("errors.txt");
        let processor = FileOutputErrorProcessor::new(&path);

        processor
            .process(&[ErrorLog::new("Subject1", "Body1"), ErrorLog::new("Subject2", "Body2")])
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Subject1\nBody1\nSubject2\nBody2\n");
    }

    #[test]
    fn test_truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("errors.txt");
        fs::write(&path, "stale content that should vanish\n").unwrap();

        FileOutputErrorProcessor::new(&path).process(&[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_unwritable_path_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("errors.txt");
        let result = FileOutputErrorProcessor::new(&path).process(&[ErrorLog::new("a", "b")]);
        assert!(result.is_err());
    }
}
