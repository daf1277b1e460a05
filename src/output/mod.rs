//! Output formatting for lint results.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`stylish`] | The column-aligned console formatter |
//! | [`style`]   | The [`Styler`] color capability and [`ColorChoice`] |
//!
//! # Examples
//!
//! ```
//! use stylish_report::finding::{FileResult, Message, Severity};
//! use stylish_report::output::{self, AnsiStyler};
//!
//! let results = vec![FileResult::new(
//!     "foo.scss",
//!     vec![Message {
//!         message: "Unexpected foo.".to_string(),
//!         severity: Severity::Error,
//!         line: 5,
//!         column: 10,
//!         rule_id: "foo".to_string(),
//!     }],
//! )];
//!
//! let text = output::format_report(&results, &AnsiStyler::new(false));
//! assert_eq!(
//!     text,
//!     "\nfoo.scss\n  5:10  error  Unexpected foo  foo\n\n\u{2716} 1 problem (1 error, 0 warnings)\n"
//! );
//! ```

pub mod style;
pub mod stylish;

pub use style::{AnsiStyler, ColorChoice, Styler};

use crate::finding::FileResult;

/// Formats `results` with the stylish formatter.
pub fn format_report(results: &[FileResult], styler: &dyn Styler) -> String {
    stylish::format(results, styler)
}
