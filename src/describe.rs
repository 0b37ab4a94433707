use crate::error::{CollectionError, Result, Stage};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

// ============================================================================
// Runtime type descriptors
// ============================================================================

/// Runtime view of an element's type.
///
/// Statically typed elements already agree on their type, so this only
/// matters for dynamic payloads (`serde_json::Value`) and for the error
/// message produced when a `TypeCheck` rejects something.
pub trait Describe {
    fn type_name(&self) -> &'static str;

    fn is_numeric(&self) -> bool {
        false
    }

    fn is_string(&self) -> bool {
        false
    }

    fn is_boolean(&self) -> bool {
        false
    }
}

macro_rules! describe_numeric {
    ($($t:ty),*) => {
        $(
            impl Describe for $t {
                fn type_name(&self) -> &'static str {
                    "number"
                }

                fn is_numeric(&self) -> bool {
                    true
                }
            }
        )*
    };
}

describe_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Describe for bool {
    fn type_name(&self) -> &'static str {
        "boolean"
    }

    fn is_boolean(&self) -> bool {
        true
    }
}

impl Describe for char {
    fn type_name(&self) -> &'static str {
        "string"
    }

    fn is_string(&self) -> bool {
        true
    }
}

impl Describe for String {
    fn type_name(&self) -> &'static str {
        "string"
    }

    fn is_string(&self) -> bool {
        true
    }
}

impl Describe for &str {
    fn type_name(&self) -> &'static str {
        "string"
    }

    fn is_string(&self) -> bool {
        true
    }
}

impl<T: Describe> Describe for Option<T> {
    fn type_name(&self) -> &'static str {
        match self {
            Some(inner) => inner.type_name(),
            None => "null",
        }
    }

    fn is_numeric(&self) -> bool {
        self.as_ref().map_or(false, Describe::is_numeric)
    }

    fn is_string(&self) -> bool {
        self.as_ref().map_or(false, Describe::is_string)
    }

    fn is_boolean(&self) -> bool {
        self.as_ref().map_or(false, Describe::is_boolean)
    }
}

impl Describe for Value {
    fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn is_numeric(&self) -> bool {
        self.is_number()
    }

    fn is_string(&self) -> bool {
        Value::is_string(self)
    }

    fn is_boolean(&self) -> bool {
        Value::is_boolean(self)
    }
}

// ============================================================================
// TypeCheck: the injected predicate
// ============================================================================

/// Predicate every element of a `Queue` or `Stack` must satisfy.
///
/// The `expected` label is what the error reports when an element is
/// rejected; the element's own `Describe::type_name` supplies the actual type.
/// Clones share the same closure.
pub struct TypeCheck<T> {
    expected: Cow<'static, str>,
    predicate: Rc<dyn Fn(&T) -> bool>,
}

impl<T> TypeCheck<T> {
    pub fn new<F>(expected: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        TypeCheck {
            expected: expected.into(),
            predicate: Rc::new(predicate),
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn accepts(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T: 'static> TypeCheck<T> {
    /// Accepts every value. The compiler already guarantees homogeneity.
    pub fn any() -> Self {
        Self::new("any", |_: &T| true)
    }
}

impl<T: Describe + 'static> TypeCheck<T> {
    pub fn numeric() -> Self {
        Self::new("number", |value: &T| value.is_numeric())
    }

    pub fn string() -> Self {
        Self::new("string", |value: &T| value.is_string())
    }

    pub fn boolean() -> Self {
        Self::new("boolean", |value: &T| value.is_boolean())
    }
}

impl<T: Describe> TypeCheck<T> {
    pub(crate) fn validate(&self, value: &T, stage: Stage) -> Result<()> {
        if self.accepts(value) {
            Ok(())
        } else {
            Err(CollectionError::invalid_type(stage, self.expected(), value.type_name()))
        }
    }

    /// Checks every element; reports the first rejected one.
    pub(crate) fn validate_all<'a, I>(&self, values: I, stage: Stage) -> Result<()>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        values
            .into_iter()
            .try_for_each(|value| self.validate(value, stage))
    }
}

impl<T: Describe + 'static> Default for TypeCheck<T> {
    fn default() -> Self {
        Self::numeric()
    }
}

impl<T> Clone for TypeCheck<T> {
    fn clone(&self) -> Self {
        TypeCheck {
            expected: self.expected.clone(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for TypeCheck<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeCheck")
            .field("expected", &self.expected)
            .finish_non_exhaustive()
    }
}
