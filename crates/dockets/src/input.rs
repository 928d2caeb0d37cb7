use crate::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where a page's HTML or text comes from.
#[derive(Debug, Clone, clap::Args, serde::Serialize, serde::Deserialize)]
pub struct InputArgs {
    /// File to read. Reads stdin when omitted or `-`
    #[arg(value_name = "INPUT", env = "DOCKETS_INPUT")]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    pub fn read(&self) -> Result<String> {
        let content = read_input(self.input.as_deref())?;
        debug!(
            "Read {} bytes from {}",
            content.len(),
            source_name(self.input.as_deref())
        );
        Ok(content)
    }
}

fn is_stdin(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p.as_os_str() == "-")
}

/// Human-readable name of the input source.
pub fn source_name(path: Option<&Path>) -> String {
    match path {
        Some(p) if !is_stdin(Some(p)) => p.display().to_string(),
        _ => "stdin".to_string(),
    }
}

/// Read the whole input as UTF-8 text
///
/// `None` and `-` read from stdin, anything else is treated as a file path.
pub fn read_input(path: Option<&Path>) -> std::result::Result<String, Error> {
    let to_error = |e: std::io::Error| Error::InputRead {
        source_name: source_name(path),
        reason: e.to_string(),
    };

    match path {
        Some(p) if !is_stdin(Some(p)) => std::fs::read_to_string(p).map_err(to_error),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(to_error)?;
            Ok(buffer)
        }
    }
}

/// Write a value as pretty JSON to a file, replacing it if present.
pub fn write_json_file<T: serde::Serialize>(
    path: &Path,
    value: &T,
) -> std::result::Result<(), Error> {
    let to_error = |reason: String| Error::OutputWrite {
        path: path.display().to_string(),
        reason,
    };

    let json = serde_json::to_string_pretty(value).map_err(|e| to_error(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| to_error(e.to_string()))
}

/// Read a JSON array of docket ids, dropping the first `skip` entries.
pub fn read_docket_list(path: &Path, skip: usize) -> std::result::Result<Vec<String>, Error> {
    let to_error = |reason: String| Error::InputRead {
        source_name: path.display().to_string(),
        reason,
    };

    let content = std::fs::read_to_string(path).map_err(|e| to_error(e.to_string()))?;
    let dockets: Vec<String> =
        serde_json::from_str(&content).map_err(|e| to_error(e.to_string()))?;

    Ok(dockets.into_iter().skip(skip).collect())
}
