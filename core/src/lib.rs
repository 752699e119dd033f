pub mod optional;

#[cfg(feature = "serde")]
mod serde_impls;

pub use optional::{Optional, OptionalError};
