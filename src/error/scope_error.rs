/// Represents the failures of declaring, assigning and looking up names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    /// The name is already declared in the same frame.
    #[error("'{name}' is already defined in this scope")]
    DuplicateBinding {
        /// The name of the variable.
        name: String,
    },
    /// No frame in the scope chain declares the name.
    #[error("Unknown variable '{name}'")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// The frame id was not issued by this environment.
    #[error("Frame {frame} does not exist")]
    UnknownFrame {
        /// Index of the missing frame.
        frame: usize,
    },
}

impl ScopeError {
    /// Attaches a source line, turning the failure into a [`RuntimeError`].
    ///
    /// [`RuntimeError`]: crate::error::RuntimeError
    #[must_use]
    pub fn at_line(self, line: usize) -> crate::error::RuntimeError {
        crate::error::RuntimeError::Scope { source: self,
                                            line }
    }
}
