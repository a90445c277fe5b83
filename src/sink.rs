use std::{cell::RefCell, rc::Rc};

/// Destination for the text emitted by a [`crate::CodeBlocker`].
pub trait Sink {
    /// Appends text verbatim.
    fn append(&mut self, text: &str);

    /// Returns all text appended so far.
    fn render(&self) -> String;
}

impl Sink for String {
    fn append(&mut self, text: &str) {
        self.push_str(text);
    }

    fn render(&self) -> String {
        self.clone()
    }
}

/// An in-memory sink that can be handed to several code blockers while the caller keeps a
/// handle to read the combined result. Clones share the same buffer.
#[derive(Clone, Debug, Default)]
pub struct SharedSink {
    text: Rc<RefCell<String>>,
}

impl SharedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> String {
        self.text.borrow().clone()
    }
}

impl Sink for SharedSink {
    fn append(&mut self, text: &str) {
        self.text.borrow_mut().push_str(text);
    }

    fn render(&self) -> String {
        SharedSink::render(self)
    }
}

impl std::fmt::Display for SharedSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text.borrow())
    }
}
