use crate::builder::CodeBlocker;
use crate::CodeBlockerError;

/// A block of code wrapped in braces.
///
/// Opening a scope writes `{` and increases the indentation level. Closing it, explicitly
/// with [`Scope::close`] or implicitly when dropped, decreases the level and writes the
/// closing token of the code blocker (`};` by default).
///
/// The indentation level is the code blocker's single counter. A scope does not remember
/// the level it was opened at, so manual indentation changes made while the scope is open
/// carry over, and scopes closed out of order still just decrease the level by one each.
///
/// ```
/// let blocker = codeblocker::CodeBlocker::new();
/// blocker.write_line("struct Point")?;
/// {
///     let _scope = blocker.scope()?;
///     blocker.write_line("int x;")?;
/// }
/// assert_eq!(blocker.render(), "struct Point\r\n{\r\n\tint x;\r\n};\r\n");
/// # Ok::<(), codeblocker::CodeBlockerError>(())
/// ```
#[derive(Debug)]
pub struct Scope {
    blocker: CodeBlocker,
    open: bool,
}

impl Scope {
    /// Opens a scope. Fails without writing anything if the code blocker is closed.
    pub fn new(blocker: &CodeBlocker) -> crate::Result<Self> {
        if blocker.is_closed() {
            return Err(CodeBlockerError::Closed);
        }
        blocker.write_line("{")?;
        blocker.indent();
        Ok(Self {
            blocker: blocker.handle(),
            open: true,
        })
    }

    /// Closes the scope. Only the first call has an effect.
    pub fn close(&mut self) -> crate::Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        self.blocker.outdent();
        self.blocker.write_line(self.blocker.closing().as_str())
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        // Nothing to report to when dropped, e.g., if the code blocker was closed first
        let _ = self.close();
    }
}
