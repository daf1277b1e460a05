//! # stylish-report
//!
//! Renders lint results, grouped by source file, as a column-aligned console
//! report with a colorized summary line.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use stylish_report::{input, output};
//! use stylish_report::output::ColorChoice;
//!
//! let results = input::read_results(None).expect("failed to read results");
//! let styler = ColorChoice::Auto.styler();
//! print!("{}", output::format_report(&results, &styler));
//! ```
//!
//! ## Architecture
//!
//! 1. **[`input`]**: read a JSON array of per-file results.
//! 2. **[`finding`]**: core data types ([`finding::FileResult`], [`finding::Message`]).
//! 3. **[`output`]**: the stylish formatter and its [`output::Styler`] color capability.
//! 4. **[`config`]**: optional `stylish-report.toml` settings for the binary.
//!
//! The formatter is a pure function of its inputs: color is decided by the
//! caller and injected through a [`output::Styler`].

pub mod config;
pub mod error;
pub mod finding;
pub mod input;
pub mod output;

pub use error::{Error, Result};
