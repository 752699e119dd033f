#![cfg(feature = "serde")]

use optional_core::{Optional, OptionalError};

#[test]
fn present_serializes_as_inner_value() {
  let optional = Optional::<u32>::of(5).expect("value is not absent");
  assert_eq!(serde_json::to_string(&optional).expect("serialize"), "5");
}

#[test]
fn empty_serializes_as_null() {
  assert_eq!(serde_json::to_string(&Optional::<u32>::empty()).expect("serialize"), "null");
}

#[test]
fn null_deserializes_as_empty() {
  let optional: Optional<String> = serde_json::from_str("null").expect("deserialize");
  assert!(optional.is_empty());
}

#[test]
fn value_deserializes_as_present() {
  let optional: Optional<String> = serde_json::from_str("\"test\"").expect("deserialize");
  assert_eq!(optional.get().map(String::as_str), Ok("test"));
}

#[test]
fn nested_in_struct_field() {
  #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
  struct Settings {
    name: Optional<String>,
    retries: Optional<u8>,
  }

  let settings: Settings = serde_json::from_str(r#"{"name":null,"retries":3}"#).expect("deserialize");
  assert!(settings.name.is_empty());
  assert_eq!(settings.retries.get(), Ok(&3));
  assert_eq!(serde_json::to_string(&settings).expect("serialize"), r#"{"name":null,"retries":3}"#);
}

#[test]
fn error_serializes_as_variant_name() {
  assert_eq!(serde_json::to_string(&OptionalError::NoSuchElement).expect("serialize"), "\"NoSuchElement\"");
  let error: OptionalError = serde_json::from_str("\"InvalidArgument\"").expect("deserialize");
  assert_eq!(error, OptionalError::InvalidArgument);
}
