use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::optional::Optional;

/// Serializes the same way as `Option<T>`: an empty container becomes `null` (or the format's equivalent).
impl<T: Serialize> Serialize for Optional<T> {
  #[inline]
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.as_ref().into_option().serialize(serializer)
  }
}

/// Deserializes through [`Optional::of_nullable`], so `null` becomes an empty container.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
  #[inline]
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Option::<T>::deserialize(deserializer).map(Optional::from)
  }
}
