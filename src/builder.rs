use crate::scope::Scope;
use crate::sink::Sink;
use crate::{CodeBlockerError, LINE_ENDING};
use std::{cell::RefCell, rc::Rc};

/// Token written on the line that closes a [`Scope`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Closing {
    /// `}`
    Brace,
    /// `};`
    #[default]
    BraceSemicolon,
}

impl Closing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Closing::Brace => "}",
            Closing::BraceSemicolon => "};",
        }
    }
}

/// Settings fixed when a [`CodeBlocker`] is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    indent: String,
    closing: Closing,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent: crate::DEFAULT_INDENT.to_string(),
            closing: Closing::default(),
        }
    }
}

impl Options {
    /// Sets the string repeated once per indentation level.
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Sets the token closing every scope of the code blocker.
    pub fn closing(mut self, closing: Closing) -> Self {
        self.closing = closing;
        self
    }

    fn validate(&self) -> crate::Result<()> {
        if self.indent.contains(['\r', '\n']) {
            return Err(CodeBlockerError::InvalidIndent(format!(
                "{:?} contains a line break",
                self.indent
            )));
        }
        Ok(())
    }
}

struct State {
    sink: Box<dyn Sink>,
    options: Options,
    depth: usize,
    at_line_start: bool,
    closed: bool,
}

impl State {
    fn ensure_open(&self) -> crate::Result<()> {
        if self.closed {
            Err(CodeBlockerError::Closed)
        } else {
            Ok(())
        }
    }

    fn start_line(&mut self) {
        if self.at_line_start {
            let indent = self.options.indent.repeat(self.depth);
            self.sink.append(&indent);
            self.at_line_start = false;
        }
    }
}

/// Helper to build a string of code with indentation.
///
/// Every physical line is prefixed with the indent string repeated once per indentation
/// level, using the level current when the line starts. Lines end with
/// [`LINE_ENDING`](crate::LINE_ENDING).
///
/// A `CodeBlocker` is a handle to state shared with the [`Scope`]s opened on it, so the
/// caller keeps writing through the code blocker while scopes are open. It is not meant to
/// be shared between threads.
pub struct CodeBlocker {
    state: Rc<RefCell<State>>,
}

impl Default for CodeBlocker {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeBlocker {
    /// Creates a code blocker writing to its own buffer, indenting with a tab.
    pub fn new() -> Self {
        Self::create(Box::new(String::new()), Options::default())
    }

    /// Creates a code blocker writing to its own buffer with a custom indent string.
    pub fn with_indent(indent: impl Into<String>) -> crate::Result<Self> {
        Self::with_options(Options::default().indent(indent))
    }

    pub fn with_options(options: Options) -> crate::Result<Self> {
        options.validate()?;
        Ok(Self::create(Box::new(String::new()), options))
    }

    /// Creates a code blocker writing to a sink supplied by the caller. Closing the code
    /// blocker leaves the sink usable for the caller, e.g., a [`crate::SharedSink`] can be
    /// written to by several code blockers in turn.
    pub fn with_sink(sink: impl Sink + 'static, options: Options) -> crate::Result<Self> {
        options.validate()?;
        Ok(Self::create(Box::new(sink), options))
    }

    fn create(sink: Box<dyn Sink>, options: Options) -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                sink,
                options,
                depth: 0,
                at_line_start: true,
                closed: false,
            })),
        }
    }

    // Another handle to the same state, used by scopes
    pub(crate) fn handle(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }

    /// Writes text without ending the line. Indentation is added only if the text starts a
    /// new line.
    pub fn write(&self, text: &str) -> crate::Result<()> {
        let mut state = self.state.borrow_mut();
        state.ensure_open()?;
        state.start_line();
        state.sink.append(text);
        Ok(())
    }

    /// Writes text and ends the line.
    pub fn write_line(&self, text: &str) -> crate::Result<()> {
        let mut state = self.state.borrow_mut();
        state.ensure_open()?;
        state.start_line();
        state.sink.append(text);
        state.sink.append(LINE_ENDING);
        state.at_line_start = true;
        Ok(())
    }

    /// Ends the line without any indentation, i.e., an empty line when at the start of a
    /// line.
    pub fn blank_line(&self) -> crate::Result<()> {
        let mut state = self.state.borrow_mut();
        state.ensure_open()?;
        state.sink.append(LINE_ENDING);
        state.at_line_start = true;
        Ok(())
    }

    pub fn indent(&self) {
        self.state.borrow_mut().depth += 1;
    }

    /// Decreases the indentation level. The level never goes below zero.
    pub fn outdent(&self) {
        let mut state = self.state.borrow_mut();
        state.depth = state.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.state.borrow().depth
    }

    pub fn set_depth(&self, depth: usize) {
        self.state.borrow_mut().depth = depth;
    }

    pub fn indent_string(&self) -> String {
        self.state.borrow().options.indent.clone()
    }

    pub fn closing(&self) -> Closing {
        self.state.borrow().options.closing
    }

    /// Returns all code written so far. The content is kept, also after closing.
    pub fn render(&self) -> String {
        self.state.borrow().sink.render()
    }

    /// Finalizes the code blocker. Subsequent writes and scopes fail with
    /// [`CodeBlockerError::Closed`]. Closing more than once has no effect.
    pub fn close(&self) {
        self.state.borrow_mut().closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.state.borrow().closed
    }

    /// Opens a scope on this code blocker, see [`Scope::new`].
    pub fn scope(&self) -> crate::Result<Scope> {
        Scope::new(self)
    }

    /// Writes the output of `content` inside a scope. The scope is closed also when
    /// `content` fails, in which case that error is returned.
    pub fn block<F>(&self, content: F) -> crate::Result<()>
    where
        F: FnOnce(&CodeBlocker) -> crate::Result<()>,
    {
        let mut scope = self.scope()?;
        let result = content(self);
        let closed = scope.close();
        result.and(closed)
    }
}

impl std::fmt::Display for CodeBlocker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::fmt::Debug for CodeBlocker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("CodeBlocker")
            .field("options", &state.options)
            .field("depth", &state.depth)
            .field("closed", &state.closed)
            .finish_non_exhaustive()
    }
}
