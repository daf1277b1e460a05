//! Reading lint results.
//!
//! Input is the JSON array a linter emits for its results, one object per
//! file:
//!
//! ```json
//! [
//!   {
//!     "filePath": "foo.scss",
//!     "errorCount": 1,
//!     "warningCount": 0,
//!     "messages": [
//!       { "message": "Unexpected foo.", "severity": 2, "line": 5, "column": 10, "ruleId": "foo" }
//!     ]
//!   }
//! ]
//! ```
//!
//! Severities are decoded in a second step so that an unknown value is
//! reported as [`Error::UnsupportedSeverity`] rather than a generic parse
//! failure.

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::finding::{FileResult, Message, Severity};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireFileResult {
    file_path: String,
    #[serde(default)]
    error_count: usize,
    #[serde(default)]
    warning_count: usize,
    #[serde(default)]
    messages: Vec<WireMessage>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMessage {
    message: String,
    severity: i64,
    #[serde(default)]
    line: u32,
    #[serde(default)]
    column: u32,
    #[serde(default)]
    rule_id: String,
}

impl TryFrom<WireFileResult> for FileResult {
    type Error = Error;

    fn try_from(wire: WireFileResult) -> Result<Self> {
        let messages = wire
            .messages
            .into_iter()
            .map(|m| -> Result<Message> {
                Ok(Message {
                    message: m.message,
                    severity: Severity::try_from(m.severity)?,
                    line: m.line,
                    column: m.column,
                    rule_id: m.rule_id,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(FileResult {
            file_path: wire.file_path,
            error_count: wire.error_count,
            warning_count: wire.warning_count,
            messages,
        })
    }
}

/// Parses a JSON array of file results.
///
/// # Errors
///
/// - [`Error::InvalidInput`] when the text is not a well-formed results array.
/// - [`Error::UnsupportedSeverity`] when a message severity is neither 1 nor 2.
pub fn parse_results(json: &str) -> Result<Vec<FileResult>> {
    let wire: Vec<WireFileResult> = serde_json::from_str(json)?;
    let results = wire
        .into_iter()
        .map(FileResult::try_from)
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(files = results.len(), "parsed lint results");
    Ok(results)
}

/// Reads and parses results from `path`, or from stdin when `path` is
/// `None` or `-`.
///
/// # Errors
///
/// Returns [`Error::InputNotFound`] for a missing file, [`Error::Io`] when
/// reading fails, and any error from [`parse_results`].
pub fn read_results(path: Option<&Path>) -> Result<Vec<FileResult>> {
    let content = match path {
        Some(p) if p != Path::new("-") => {
            if !p.exists() {
                return Err(Error::InputNotFound {
                    path: p.to_path_buf(),
                });
            }
            tracing::debug!(path = %p.display(), "reading lint results");
            std::fs::read_to_string(p)?
        }
        _ => {
            tracing::debug!("reading lint results from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    parse_results(&content)
}
