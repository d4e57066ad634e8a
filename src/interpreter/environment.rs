use std::collections::HashMap;

use crate::{error::ScopeError, interpreter::value::core::Value};

/// Result type used by scope operations.
pub type ScopeResult<T> = Result<T, ScopeError>;

/// Handle to one frame of an [`Environment`].
///
/// Frame ids are only handed out by the environment that owns the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(usize);

#[derive(Debug, Default)]
struct Frame {
    parent:   Option<FrameId>,
    bindings: HashMap<String, Value>,
}

/// Stores the variable bindings of a program as a chain of lexical scopes.
///
/// Frames live in an arena and refer to their parent by index. A child frame
/// can only be created from an existing frame, so every parent precedes and
/// outlives its children and the frames always form a tree.
///
/// ## Usage
///
/// ```
/// use gune::interpreter::{environment::Environment, value::core::Value};
///
/// let mut environment = Environment::new();
/// let root = environment.root();
/// environment.declare(root, "x", Value::Float(5.0)).unwrap();
///
/// let child = environment.push_frame(root).unwrap();
/// environment.declare(child, "x", Value::Float(9.0)).unwrap();
///
/// assert_eq!(environment.lookup(child, "x"), Ok(Value::Float(9.0)));
/// assert_eq!(environment.lookup(root, "x"), Ok(Value::Float(5.0)));
/// ```
#[derive(Debug)]
pub struct Environment {
    frames: Vec<Frame>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds an environment whose root frame holds the given bindings.
///
/// A name that appears more than once keeps its last value.
impl FromIterator<(String, Value)> for Environment {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self { frames: vec![Frame { parent:   None,
                                    bindings: iter.into_iter().collect(), }], }
    }
}

impl Environment {
    /// Creates an environment holding a single, empty root frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![Frame::default()] }
    }

    /// Returns the root frame, the only frame without a parent.
    #[must_use]
    pub const fn root(&self) -> FrameId {
        FrameId(0)
    }

    /// Creates a new, empty frame whose parent is `parent`.
    ///
    /// # Errors
    /// Returns `UnknownFrame` if `parent` does not belong to this environment.
    pub fn push_frame(&mut self, parent: FrameId) -> ScopeResult<FrameId> {
        self.frame(parent)?;

        self.frames.push(Frame { parent:   Some(parent),
                                 bindings: HashMap::new(), });
        Ok(FrameId(self.frames.len() - 1))
    }

    /// Returns the parent of `frame`, or `None` for the root.
    ///
    /// # Errors
    /// Returns `UnknownFrame` if `frame` does not belong to this environment.
    pub fn parent_of(&self, frame: FrameId) -> ScopeResult<Option<FrameId>> {
        Ok(self.frame(frame)?.parent)
    }

    /// Binds `name` to `value` in `frame` and returns the value.
    ///
    /// Only `frame` itself is checked for an existing binding, so a child frame
    /// may shadow a name that is visible through its parents.
    ///
    /// # Errors
    /// - `DuplicateBinding` if `frame` already declares `name`.
    /// - `UnknownFrame` if `frame` does not belong to this environment.
    pub fn declare(&mut self, frame: FrameId, name: &str, value: Value) -> ScopeResult<Value> {
        let bindings = &mut self.frame_mut(frame)?.bindings;

        if bindings.contains_key(name) {
            return Err(ScopeError::DuplicateBinding { name: name.to_string() });
        }

        bindings.insert(name.to_string(), value);
        Ok(value)
    }

    /// Rebinds `name` in the nearest frame that declares it, starting at
    /// `frame` and walking up through its parents, and returns the value.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if no frame in the chain declares `name`.
    ///
    /// # Example
    /// ```
    /// use gune::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut environment = Environment::new();
    /// let root = environment.root();
    /// environment.declare(root, "x", Value::Nil).unwrap();
    ///
    /// let child = environment.push_frame(root).unwrap();
    /// environment.assign(child, "x", Value::Float(1.0)).unwrap();
    ///
    /// assert_eq!(environment.lookup(root, "x"), Ok(Value::Float(1.0)));
    /// assert!(environment.assign(child, "y", Value::Nil).is_err());
    /// ```
    pub fn assign(&mut self, frame: FrameId, name: &str, value: Value) -> ScopeResult<Value> {
        let owner = self.resolve(frame, name)?;
        let binding = self.frame_mut(owner)?
                          .bindings
                          .get_mut(name)
                          .ok_or_else(|| undefined(name))?;

        *binding = value;
        Ok(value)
    }

    /// Returns the value bound to `name` in the nearest frame that declares
    /// it, starting at `frame` and walking up through its parents.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if no frame in the chain declares `name`.
    pub fn lookup(&self, frame: FrameId, name: &str) -> ScopeResult<Value> {
        let owner = self.resolve(frame, name)?;

        self.frame(owner)?
            .bindings
            .get(name)
            .copied()
            .ok_or_else(|| undefined(name))
    }

    /// Finds the nearest frame in the chain starting at `frame` that declares
    /// `name`.
    fn resolve(&self, frame: FrameId, name: &str) -> ScopeResult<FrameId> {
        let mut current = Some(frame);

        while let Some(id) = current {
            let scope = self.frame(id)?;
            if scope.bindings.contains_key(name) {
                return Ok(id);
            }
            current = scope.parent;
        }

        Err(undefined(name))
    }

    fn frame(&self, id: FrameId) -> ScopeResult<&Frame> {
        self.frames
            .get(id.0)
            .ok_or(ScopeError::UnknownFrame { frame: id.0 })
    }

    fn frame_mut(&mut self, id: FrameId) -> ScopeResult<&mut Frame> {
        self.frames
            .get_mut(id.0)
            .ok_or(ScopeError::UnknownFrame { frame: id.0 })
    }
}

fn undefined(name: &str) -> ScopeError {
    ScopeError::UndefinedVariable { name: name.to_string() }
}
