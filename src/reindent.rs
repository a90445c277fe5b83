use crate::builder::{CodeBlocker, Options};
use crate::scope::Scope;
use crate::{CodeBlockerError, log, verbose};

/// Re-emits brace-delimited text with the indentation of a [`CodeBlocker`].
///
/// The text is handled line by line. A line ending with `{` opens a scope, with any text
/// before the brace written on a line of its own. Each `}` (or `};`) at the start of a
/// line closes the innermost scope. Braces elsewhere, e.g., in strings or comments, are
/// written as is.
pub struct Reindenter {
    options: Options,
    log: Option<log::Logger>,
}

impl Reindenter {
    pub fn new(options: Options) -> Self {
        Self { options, log: None }
    }

    /// Enables verbose logging to the given writer.
    pub fn log(mut self, write: Box<dyn std::io::Write>) -> Self {
        self.log = Some(log::Logger::new(write));
        self
    }

    pub fn reindent(&self, text: &str) -> crate::Result<String> {
        let blocker = CodeBlocker::with_options(self.options.clone())?;
        let mut scopes: Vec<Scope> = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let mut rest = line.trim();
            if rest.is_empty() {
                blocker.blank_line()?;
                continue;
            }

            while let Some(after_brace) = rest.strip_prefix('}') {
                let mut scope = scopes
                    .pop()
                    .ok_or(CodeBlockerError::UnmatchedClose { line: index + 1 })?;
                scope.close()?;
                let after_brace = after_brace.trim_start();
                rest = after_brace
                    .strip_prefix(';')
                    .unwrap_or(after_brace)
                    .trim_start();
            }

            if let Some(head) = rest.strip_suffix('{') {
                let head = head.trim_end();
                if !head.is_empty() {
                    blocker.write_line(head)?;
                }
                scopes.push(blocker.scope()?);
            } else if !rest.is_empty() {
                blocker.write_line(rest)?;
            }
        }

        if !scopes.is_empty() {
            verbose!(
                self.log,
                "Closing {} block(s) left open at end of input",
                scopes.len()
            );
        }
        while let Some(mut scope) = scopes.pop() {
            scope.close()?;
        }

        blocker.close();
        Ok(blocker.render())
    }
}
