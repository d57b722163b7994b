//! Provide the pure half of inspectorgen: the structural field model, the eligibility rules that decide which
//! fields an inspector can bind, and the naming conventions shared by the generator.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state, no logging. Whatever system actually knows about
//!   the user's types (a compiler, a registered schema, a hand-written list) only has to produce [`FieldMeta`]
//!   records; everything else here is a function of those records.
//! - `serde` support for the model types is available behind the `serde` feature.

pub mod attributes;
pub mod classify;
pub mod field;
pub mod naming;
pub mod types;

pub use classify::{classify, collection_element, is_field_eligible, is_type_eligible};
pub use field::{Accessibility, FieldDescriptor, FieldMeta};
pub use types::{TypeDescriptor, TypeRef};
