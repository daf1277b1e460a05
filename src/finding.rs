use std::fmt;

use crate::error::Error;

/// Severity of a single lint message.
///
/// On the wire a severity is an integer: `2` for errors and `1` for
/// warnings. Any other value is rejected with
/// [`Error::UnsupportedSeverity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    /// The label shown in the report column.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<i64> for Severity {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Error> {
        match value {
            2 => Ok(Severity::Error),
            1 => Ok(Severity::Warning),
            severity => Err(Error::UnsupportedSeverity { severity }),
        }
    }
}

impl From<Severity> for i64 {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => 2,
            Severity::Warning => 1,
        }
    }
}

/// One diagnostic at a source position.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub message: String,
    pub severity: Severity,
    /// 1-based line; `0` when the linter reported no position.
    #[serde(default)]
    pub line: u32,
    /// 1-based column; `0` when the linter reported no position.
    #[serde(default)]
    pub column: u32,
    #[serde(default)]
    pub rule_id: String,
}

impl Message {
    /// Message text as displayed: a single trailing period is dropped.
    pub fn display_text(&self) -> &str {
        self.message.strip_suffix('.').unwrap_or(&self.message)
    }
}

/// Messages and summary counts produced for one source file.
///
/// `error_count` and `warning_count` are taken as supplied; the formatter
/// never recounts them from `messages`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResult {
    pub file_path: String,
    #[serde(default)]
    pub error_count: usize,
    #[serde(default)]
    pub warning_count: usize,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl FileResult {
    /// Builds a result whose counts are tallied from `messages`.
    pub fn new(file_path: impl Into<String>, messages: Vec<Message>) -> Self {
        let (error_count, warning_count) =
            messages
                .iter()
                .fold((0, 0), |(e, w), m| match m.severity {
                    Severity::Error => (e + 1, w),
                    Severity::Warning => (e, w + 1),
                });

        FileResult {
            file_path: file_path.into(),
            error_count,
            warning_count,
            messages,
        }
    }
}

/// Aggregate counts across a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub errors: usize,
    pub warnings: usize,
}

impl Totals {
    /// Sums the caller-supplied counts of every file.
    pub fn from_results(results: &[FileResult]) -> Self {
        results.iter().fold(Totals::default(), |acc, r| Totals {
            errors: acc.errors + r.error_count,
            warnings: acc.warnings + r.warning_count,
        })
    }

    pub fn problems(&self) -> usize {
        self.errors + self.warnings
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings > 0
    }
}
