//! Fieldgate object model
//!
//! This crate provides the data layer for the fieldgate access gateway:
//! - Dynamic values (`Value`)
//! - Declared type metadata and compatibility checks (`TypeSpec`)
//! - Member metadata (`FieldInfo`, `MethodInfo`, `ParameterInfo`)
//! - Registration-built type schemas with invokable method vtables
//!   (`TypeSchema`, `SchemaBuilder`)
//! - The schema registry and slot-indexed object instances
//!
//! Rust has no ambient runtime reflection, so a type's "runtime metadata" is
//! declared explicitly through the schema builder and shared by `Arc`. The
//! access policy itself lives in `fieldgate-engine`; this crate only answers
//! questions about shapes and performs raw slot and vtable access.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod info;
pub mod instance;
pub mod registry;
pub mod schema;
pub mod types;
pub mod value;

pub use error::{InvokeError, SchemaError, SchemaResult};
pub use info::{FieldInfo, MethodInfo, ParameterInfo, Visibility};
pub use instance::Instance;
pub use registry::SchemaRegistry;
pub use schema::{FieldDef, MethodDef, MethodFn, ParamDef, SchemaBuilder, TypeSchema};
pub use types::{TypeKind, TypeSpec};
pub use value::Value;
