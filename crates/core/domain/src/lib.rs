pub mod data;

pub use data::{FieldScalar, FieldValue};
