/// Represents a runtime value in the interpreter.
///
/// Values are produced transiently during evaluation and only become durable
/// when bound into an [`Environment`](crate::interpreter::environment::Environment).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Float(f64),
    /// The absence of a value, written `nil`.
    Nil,
}

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A [`Value::Float`].
    Float,
    /// A [`Value::Nil`].
    Nil,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl Value {
    /// Returns the kind of this value.
    ///
    /// # Example
    /// ```
    /// use gune::interpreter::value::core::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Float(1.0).kind(), ValueKind::Float);
    /// assert_eq!(Value::Nil.kind(), ValueKind::Nil);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Float(_) => ValueKind::Float,
            Self::Nil => ValueKind::Nil,
        }
    }
}

/// Renders a float as its shortest round-tripping decimal form and `nil` as
/// the literal text `nil`.
///
/// Floats never use an exponent, however large or small they are. The
/// infinities that overflowing arithmetic produces render as `inf` and `-inf`.
///
/// # Example
/// ```
/// use gune::interpreter::value::core::Value;
///
/// assert_eq!(Value::Float(14.0).to_string(), "14");
/// assert_eq!(Value::Float(2.5).to_string(), "2.5");
/// assert_eq!(Value::Float(1e21).to_string(), "1000000000000000000000");
/// assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-inf");
/// assert_eq!(Value::Nil.to_string(), "nil");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float(r) => write!(f, "{r}"),
            Self::Nil => write!(f, "nil"),
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float => write!(f, "float"),
            Self::Nil => write!(f, "nil"),
        }
    }
}
