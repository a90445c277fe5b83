//! Codeblocker helps generating indented code, or other brace-delimited text, without
//! keeping track of indentation by hand.
//!
//! A [`CodeBlocker`] collects lines, prefixing each with its indent string once per
//! indentation level. A [`Scope`] wraps lines in braces and indents them one level more.
//!
//! ```
//! use codeblocker::CodeBlocker;
//!
//! let blocker = CodeBlocker::new();
//! blocker.write_line("public class Foo")?;
//! blocker.block(|blocker| {
//!     blocker.write_line("public void Bar()")?;
//!     blocker.block(|blocker| blocker.write_line("return;"))
//! })?;
//! assert_eq!(
//!     blocker.render(),
//!     "public class Foo\r\n{\r\n\tpublic void Bar()\r\n\t{\r\n\t\treturn;\r\n\t};\r\n};\r\n"
//! );
//! # Ok::<(), codeblocker::CodeBlockerError>(())
//! ```

mod builder;
mod log;
mod reindent;
mod scope;
mod sink;

pub use builder::{Closing, CodeBlocker, Options};
pub use reindent::Reindenter;
pub use scope::Scope;
pub use sink::{SharedSink, Sink};

/// Terminator written at the end of every line.
pub const LINE_ENDING: &str = "\r\n";

/// Indent string used unless another is configured.
pub const DEFAULT_INDENT: &str = "\t";

/// Errors that can occur when generating code.
#[derive(thiserror::Error, Debug)]
pub enum CodeBlockerError {
    #[error("Invalid indent string: {0}")]
    InvalidIndent(String),
    #[error("The code blocker has been closed")]
    Closed,
    #[error("Unmatched closing brace on line {line}")]
    UnmatchedClose { line: usize },
}

pub type Result<T> = std::result::Result<T, CodeBlockerError>;
