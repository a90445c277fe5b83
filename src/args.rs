use clap::Parser;
use std::path::PathBuf;

/// Re-indents brace-delimited code. Every line ending with `{` opens a block, which is
/// closed by a line starting with `}`. Block content is indented one level more than the
/// block. If no files are provided, stdin is read and the result is printed to stdout.
#[derive(Parser, Debug)]
#[command(version, about)]
pub(crate) struct Arguments {
    /// The string to indent with, once per level. Defaults to a tab.
    #[arg(short = 'i', long, group = "indentation")]
    pub(crate) indent: Option<String>,

    /// Indents with the given number of spaces per level.
    #[arg(long, group = "indentation")]
    pub(crate) spaces: Option<usize>,

    /// Closes blocks with `}` rather than `};`.
    #[arg(long)]
    pub(crate) no_semicolon: bool,

    /// If set, all output is written to the specified file rather than to stdout.
    #[arg(short = 'o', long)]
    pub(crate) output_file: Option<PathBuf>,

    /// Enables verbose output, printing debug information to stdout if writing to file,
    /// otherwise to stderr.
    #[arg(short = 'v', long)]
    pub(crate) verbose: bool,

    /// Paths to the files to re-indent. If no files are provided, the program reads from
    /// stdin.
    #[arg(value_name = "FILE")]
    pub(crate) source_files: Vec<PathBuf>,
}

impl Arguments {
    pub(crate) fn indent_string(&self) -> String {
        match (&self.indent, self.spaces) {
            (Some(indent), _) => indent.clone(),
            (None, Some(spaces)) => " ".repeat(spaces),
            (None, None) => codeblocker::DEFAULT_INDENT.to_string(),
        }
    }
}

pub(crate) fn arguments() -> Arguments {
    Arguments::parse()
}
