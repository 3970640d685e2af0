//! The type-erased value carried through dynamic chains.

use std::any::{Any, type_name};
use std::fmt;

use super::TypeMismatchError;

/// A value of any `'static + Send + Sync` type.
///
/// `Dynamic` carries no static type information. Functions that need the
/// underlying value convert it explicitly with [`downcast`](Self::downcast)
/// or [`downcast_ref`](Self::downcast_ref), which fail with a
/// [`TypeMismatchError`] when the stored type differs.
///
/// # Examples
///
/// ```rust
/// use fncombinators::dynamic::Dynamic;
///
/// let value = Dynamic::new(42_i32);
/// assert!(value.is::<i32>());
/// assert_eq!(value.downcast_ref::<i32>(), Ok(&42));
/// assert!(value.downcast_ref::<u64>().is_err());
/// assert_eq!(value.downcast::<i32>(), Ok(42));
/// ```
pub struct Dynamic {
    value: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

static_assertions::assert_impl_all!(Dynamic: Send, Sync);

impl Dynamic {
    /// Erases the type of `value`.
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            value: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Returns the name of the stored type, as given by [`std::any::type_name`].
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the stored value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Converts the value back into a `T`, consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatchError`] if the stored value is not a `T`.
    pub fn downcast<T: Any>(self) -> Result<T, TypeMismatchError> {
        let found = self.type_name;
        self.value
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| mismatch::<T>(found))
    }

    /// Borrows the value as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatchError`] if the stored value is not a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Result<&T, TypeMismatchError> {
        self.value
            .downcast_ref::<T>()
            .ok_or_else(|| mismatch::<T>(self.type_name))
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Dynamic")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

fn mismatch<T: Any>(found: &'static str) -> TypeMismatchError {
    let error = TypeMismatchError {
        expected: type_name::<T>(),
        found,
    };
    #[cfg(feature = "log")]
    log::debug!("dynamic downcast failed: {error}");
    error
}
