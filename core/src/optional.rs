use thiserror::Error;

/// Error produced when constructing or extracting from an [`Optional`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Error)]
pub enum OptionalError {
  /// An absent value was given to [`Optional::of`].
  #[error("Value must not be absent; use `Optional::of_nullable` to accept an absent value")]
  InvalidArgument,
  /// A value was requested from an empty [`Optional`].
  #[error("No value present")]
  NoSuchElement,
}


/// A container which either holds exactly one value, or nothing.
///
/// Created through [`of`](Self::of), [`of_nullable`](Self::of_nullable), or [`empty`](Self::empty). A container is
/// never modified after creation: every operation produces a new container or a plain value.
///
/// Absence is `None`: the factories accept anything that converts into an `Option<T>`, which includes a bare `T`.
#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct Optional<T> {
  slot: Slot<T>,
}

#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
enum Slot<T> {
  Empty,
  Present(T),
}

impl<T> Optional<T> {
  /// Creates a container holding `value`.
  ///
  /// # Errors
  ///
  /// Returns [`OptionalError::InvalidArgument`] if `value` is absent. Use [`of_nullable`](Self::of_nullable) when
  /// absence is expected.
  #[inline]
  pub fn of(value: impl Into<Option<T>>) -> Result<Self, OptionalError> {
    match value.into() {
      Some(value) => Ok(Self::present(value)),
      None => {
        #[cfg(feature = "tracing")]
        tracing::trace!(value_type = std::any::type_name::<T>(), "rejected absent value");
        Err(OptionalError::InvalidArgument)
      }
    }
  }

  /// Creates a container holding `value`, or an empty container if `value` is absent.
  #[inline]
  pub fn of_nullable(value: impl Into<Option<T>>) -> Self {
    match value.into() {
      Some(value) => Self::present(value),
      None => Self::empty(),
    }
  }

  /// Creates an empty container.
  #[inline]
  pub const fn empty() -> Self { Self { slot: Slot::Empty } }

  #[inline]
  const fn present(value: T) -> Self { Self { slot: Slot::Present(value) } }


  #[inline]
  pub const fn is_present(&self) -> bool { matches!(self.slot, Slot::Present(_)) }

  #[inline]
  pub const fn is_empty(&self) -> bool { !self.is_present() }


  /// Gets a reference to the contained value.
  ///
  /// # Errors
  ///
  /// Returns [`OptionalError::NoSuchElement`] if this container is empty.
  #[inline]
  pub fn get(&self) -> Result<&T, OptionalError> {
    match &self.slot {
      Slot::Present(value) => Ok(value),
      Slot::Empty => Err(Self::no_such_element()),
    }
  }

  /// Consumes this container, returning the contained value.
  ///
  /// # Errors
  ///
  /// Returns [`OptionalError::NoSuchElement`] if this container is empty.
  #[inline]
  pub fn into_value(self) -> Result<T, OptionalError> {
    match self.slot {
      Slot::Present(value) => Ok(value),
      Slot::Empty => Err(Self::no_such_element()),
    }
  }

  /// Returns the contained value, or `default` if this container is empty. `default` is evaluated by the caller
  /// regardless.
  #[inline]
  pub fn or_else(self, default: T) -> T {
    match self.slot {
      Slot::Present(value) => value,
      Slot::Empty => default,
    }
  }


  /// Applies `transform` to the contained value, if any.
  ///
  /// The result of `transform` goes through the same rule as [`of_nullable`](Self::of_nullable): a transform that
  /// returns `None` produces an empty container instead of a present one. `transform` is called at most once, and only
  /// when a value is present.
  #[inline]
  pub fn map<U, R: Into<Option<U>>>(self, transform: impl FnOnce(T) -> R) -> Optional<U> {
    match self.slot {
      Slot::Present(value) => Optional::of_nullable(transform(value)),
      Slot::Empty => Optional::empty(),
    }
  }

  /// Like [`map`](Self::map), but `transform` may fail. Its error is returned as-is.
  #[inline]
  pub fn try_map<U, R: Into<Option<U>>, E>(
    self,
    transform: impl FnOnce(T) -> Result<R, E>
  ) -> Result<Optional<U>, E> {
    match self.slot {
      Slot::Present(value) => Ok(Optional::of_nullable(transform(value)?)),
      Slot::Empty => Ok(Optional::empty()),
    }
  }

  /// Returns this container if it holds a value for which `predicate` returns `true`, or an empty container otherwise.
  /// `predicate` is called at most once, and only when a value is present.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    let keep = match &self.slot {
      Slot::Present(value) => predicate(value),
      Slot::Empty => false,
    };
    if keep { self } else { Self::empty() }
  }

  /// Like [`filter`](Self::filter), but `predicate` may fail. Its error is returned as-is.
  #[inline]
  pub fn try_filter<E>(self, predicate: impl FnOnce(&T) -> Result<bool, E>) -> Result<Self, E> {
    let keep = match &self.slot {
      Slot::Present(value) => predicate(value)?,
      Slot::Empty => false,
    };
    Ok(if keep { self } else { Self::empty() })
  }


  #[inline]
  pub const fn as_ref(&self) -> Optional<&T> {
    match &self.slot {
      Slot::Present(value) => Optional::present(value),
      Slot::Empty => Optional::empty(),
    }
  }

  #[inline]
  pub fn into_option(self) -> Option<T> {
    match self.slot {
      Slot::Present(value) => Some(value),
      Slot::Empty => None,
    }
  }


  #[inline]
  fn no_such_element() -> OptionalError {
    #[cfg(feature = "tracing")]
    tracing::trace!(value_type = std::any::type_name::<T>(), "requested value from empty container");
    OptionalError::NoSuchElement
  }
}

impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Self::empty() }
}

impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(value: Option<T>) -> Self { Self::of_nullable(value) }
}

impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self { optional.into_option() }
}
