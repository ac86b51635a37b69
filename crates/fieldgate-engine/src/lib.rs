//! Fieldgate access engine
//!
//! This crate provides the resolve → validate → invoke pipeline over the
//! object model from `fieldgate-core`:
//! - Accessor resolution by exact field name or method naming convention
//! - The access policy (visibility, staticness, arity, nullability, and
//!   value/parameter type compatibility)
//! - Structured diagnostics with pluggable sinks
//! - `ObjectGateway`, the public facade binding one instance
//!
//! Operations never raise: a miss or a rejection degrades to `None`/`false`,
//! and every policy rejection is explained by exactly one diagnostic on the
//! injected sink.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod diag;
pub mod gateway;
pub mod resolve;
pub mod validate;

pub use diag::{Diagnostic, DiagnosticsSink, MemorySink, NullSink, Severity, TermSink};
pub use gateway::ObjectGateway;
pub use resolve::{Accessor, AccessorResolver, Direction, NamingConvention};
pub use validate::{SetterCall, Validator};

// Re-export the object model so gateway users need a single dependency.
pub use fieldgate_core::{
    FieldDef, FieldInfo, Instance, InvokeError, MethodDef, MethodFn, MethodInfo, ParamDef,
    ParameterInfo, SchemaBuilder, SchemaError, SchemaRegistry, TypeKind, TypeSchema, TypeSpec,
    Value, Visibility,
};
