//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;
use tracing::warn;

use wordmeter_core::markdown;

pub mod chars;
pub mod info;
pub mod limits;
pub mod passive;
pub mod reading_time;
pub mod readability;
pub mod sentences;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod stats;
pub mod words;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Read a file (or stdin for `-`) and validate its size against the limit.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let bytes = if path.as_str() == STDIN_PATH {
        read_stdin(max_bytes)?
    } else {
        // Preflight: check file size via metadata before reading into memory.
        let metadata = std::fs::metadata(path.as_std_path())
            .with_context(|| format!("failed to read {path}"))?;
        if let Some(max) = max_bytes {
            let size = metadata.len();
            if size > max as u64 {
                anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
            }
        }
        std::fs::read(path.as_std_path()).with_context(|| format!("failed to read {path}"))?
    };

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(file = %path, "input is not valid UTF-8; replacing invalid sequences");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    })
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let stdin = std::io::stdin().lock();
    match max_bytes {
        Some(max) => {
            stdin
                .take(max as u64 + 1)
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            if buf.len() > max {
                anyhow::bail!("input too large: stdin exceeds {max} bytes");
            }
        }
        None => {
            let mut stdin = stdin;
            stdin.read_to_end(&mut buf).context("failed to read stdin")?;
        }
    }
    Ok(buf)
}

/// Whether a path names a markdown file.
pub fn is_markdown(path: &Utf8Path) -> bool {
    matches!(path.extension(), Some("md" | "markdown"))
}

/// Read input and convert markdown files to plain text unless `raw` is set.
pub fn load_text(path: &Utf8Path, raw: bool, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let content = read_input_file(path, max_bytes)?;
    if !raw && is_markdown(path) {
        tracing::debug!(file = %path, "converting markdown to plain text");
        return Ok(markdown::to_plain_text(&content));
    }
    Ok(content)
}

/// Display name for an input path.
pub fn display_name(path: &Utf8Path) -> &str {
    if path.as_str() == STDIN_PATH { "<stdin>" } else { path.as_str() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &[u8]) -> Utf8PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        Utf8PathBuf::try_from(path).unwrap()
    }

    #[test]
    fn reads_file_under_limit() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "a.txt", b"hello");
        assert_eq!(read_input_file(&path, Some(5)).unwrap(), "hello");
    }

    #[test]
    fn rejects_file_over_limit() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "a.txt", b"hello world");
        let err = read_input_file(&path, Some(5)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "a.txt", b"caf\xe9 ok");
        assert_eq!(read_input_file(&path, None).unwrap(), "caf\u{fffd} ok");
    }

    #[test]
    fn missing_file_errors() {
        let err = read_input_file(Utf8Path::new("/no/such/file.txt"), None).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn markdown_is_converted_unless_raw() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "a.md", b"# Title\n\nBody **text**.");
        assert_eq!(load_text(&path, false, None).unwrap(), "Title\n\nBody text.");
        assert!(load_text(&path, true, None).unwrap().contains("**text**"));
    }

    #[test]
    fn markdown_detection() {
        assert!(is_markdown(Utf8Path::new("notes.md")));
        assert!(is_markdown(Utf8Path::new("notes.markdown")));
        assert!(!is_markdown(Utf8Path::new("notes.txt")));
        assert!(!is_markdown(Utf8Path::new(STDIN_PATH)));
    }
}
