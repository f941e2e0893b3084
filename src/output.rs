//! Persisting headlines to a flat text file.

use crate::error::{Result, ScraperError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default output file name used by the command-line tool.
pub const DEFAULT_OUTPUT_FILE: &str = "headlines.txt";

/// Write `headlines` to `path`, one per line, replacing any existing content.
pub fn save_headlines<S: AsRef<str>>(headlines: &[S], path: &Path) -> Result<()> {
    let io_err = |source| ScraperError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    for headline in headlines {
        writeln!(writer, "{}", headline.as_ref()).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;

    tracing::debug!(path = %path.display(), lines = headlines.len(), "saved headlines");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_one_line_per_headline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        save_headlines(&["First", "Second – ünïcode"], &path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "First\nSecond – ünïcode\n"
        );
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "stale\nstale\nstale\n").unwrap();

        save_headlines(&["fresh".to_string()], &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = save_headlines(&["x"], &path).unwrap_err();
        assert!(matches!(err, ScraperError::Io { .. }));
    }
}
