//! Error type for type-erased function chains.

/// Represents a failed downcast of a [`Dynamic`](super::Dynamic) value.
///
/// Produced when a function in a dynamic chain assumes a concrete type that
/// the incoming value does not have. Both fields hold the names reported by
/// [`std::any::type_name`].
///
/// # Examples
///
/// ```rust
/// use fncombinators::dynamic::TypeMismatchError;
///
/// let error = TypeMismatchError {
///     expected: "i32",
///     found: "alloc::string::String",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "type mismatch: expected `i32`, found `alloc::string::String`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatchError {
    /// The type the function tried to convert the value into.
    pub expected: &'static str,
    /// The type actually stored in the value.
    pub found: &'static str,
}

impl std::fmt::Display for TypeMismatchError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "type mismatch: expected `{}`, found `{}`",
            self.expected, self.found
        )
    }
}

impl std::error::Error for TypeMismatchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_error_display() {
        let error = TypeMismatchError {
            expected: "u8",
            found: "bool",
        };
        assert_eq!(
            format!("{error}"),
            "type mismatch: expected `u8`, found `bool`"
        );
    }

    #[test]
    fn test_type_mismatch_error_equality() {
        let error1 = TypeMismatchError {
            expected: "u8",
            found: "bool",
        };
        let error2 = error1.clone();
        let error3 = TypeMismatchError {
            expected: "bool",
            found: "u8",
        };
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_type_mismatch_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(TypeMismatchError {
            expected: "u8",
            found: "bool",
        });
        assert!(error.source().is_none());
    }
}
