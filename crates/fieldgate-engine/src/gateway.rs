//! The object gateway
//!
//! `ObjectGateway` is the public facade: it binds exactly one instance for
//! its whole lifetime and runs every operation through
//! resolve → validate → invoke-or-reject. Operations are total — a
//! resolution miss or a policy rejection degrades to `None`/`false`, and the
//! only visible account of *why* is the diagnostic stream.
//!
//! ```
//! use std::sync::Arc;
//! use fieldgate_core::{FieldDef, Instance, TypeSchema, TypeSpec, Value};
//! use fieldgate_engine::{MemorySink, ObjectGateway};
//!
//! let schema = Arc::new(
//!     TypeSchema::builder("User")
//!         .field(FieldDef::new("name", TypeSpec::string()))
//!         .build()
//!         .unwrap(),
//! );
//! let sink = Arc::new(MemorySink::new());
//! let mut gateway = ObjectGateway::new(Instance::new(&schema), sink);
//!
//! assert!(gateway.write_field("name", Value::str("Ada")));
//! assert_eq!(gateway.read_field("name"), Some(Value::str("Ada")));
//! ```

use std::sync::Arc;

use fieldgate_core::{FieldInfo, Instance, MethodInfo, TypeSchema, Value};

use crate::diag::{Diagnostic, DiagnosticsSink};
use crate::resolve::{AccessorResolver, Direction, NamingConvention};
use crate::validate::{SetterCall, Validator};

/// Policy-enforcing access facade over one bound instance.
pub struct ObjectGateway {
    target: Instance,
    resolver: AccessorResolver,
    validator: Validator,
    sink: Arc<dyn DiagnosticsSink>,
}

impl ObjectGateway {
    /// Bind a gateway to the given instance with the default naming
    /// convention.
    pub fn new(target: Instance, sink: Arc<dyn DiagnosticsSink>) -> Self {
        Self::with_convention(target, sink, NamingConvention::default())
    }

    /// Bind a gateway with a custom naming convention.
    pub fn with_convention(
        target: Instance,
        sink: Arc<dyn DiagnosticsSink>,
        convention: NamingConvention,
    ) -> Self {
        Self {
            target,
            resolver: AccessorResolver::with_convention(convention),
            validator: Validator::new(Arc::clone(&sink)),
            sink,
        }
    }

    // ========================================================================
    // Field access
    // ========================================================================

    /// Read a field by exact name. `None` if the field does not exist or the
    /// policy rejects it.
    pub fn read_field(&self, name: &str) -> Option<Value> {
        let field = self.resolver.resolve_field(self.target.schema(), name)?;
        if !self.validator.validate_field(field) {
            return None;
        }
        self.target.get_field(field.slot()).cloned()
    }

    /// Write a field by exact name. On rejection the value is dropped with
    /// no partial effect.
    pub fn write_field(&mut self, name: &str, value: Value) -> bool {
        let Some(field) = self.resolver.resolve_field(self.target.schema(), name) else {
            return false;
        };
        if !self.validator.validate_field(field) {
            return false;
        }
        let slot = field.slot();
        self.target.set_field(slot, value)
    }

    // ========================================================================
    // Method access
    // ========================================================================

    /// Read through a conventionally named getter. The value is obtained
    /// during validation and returned directly — the getter runs once.
    pub fn read_via_method(&mut self, name: &str) -> Option<Value> {
        let schema = Arc::clone(self.target.schema());
        let method = self.resolver.resolve_method(&schema, name, Direction::Read)?;
        self.validator.validate_getter(method, &mut self.target)
    }

    /// Write through a conventionally named setter. Invokes with the value,
    /// or with no arguments when the accepted setter declares none.
    pub fn write_via_method(&mut self, name: &str, value: Value) -> bool {
        let schema = Arc::clone(self.target.schema());
        let Some(method) = self.resolver.resolve_method(&schema, name, Direction::Write) else {
            return false;
        };
        let Some(call) = self.validator.validate_setter(method, &value) else {
            return false;
        };

        let args = match call {
            SetterCall::PassValue => vec![value],
            SetterCall::NoArgs => Vec::new(),
        };
        match schema.invoke(method.slot(), &mut self.target, &args) {
            Ok(_) => true,
            Err(err) => {
                self.sink.emit(Diagnostic::error(
                    method.name(),
                    format!("invocation of method `{}` failed: {}", method.name(), err),
                ));
                false
            }
        }
    }

    /// Invoke a method by exact name with a full argument list, after
    /// argument-list validation. Arguments beyond the declared parameter
    /// list are truncated at the call.
    pub fn invoke_method(&mut self, name: &str, args: &[Value]) -> Option<Value> {
        let schema = Arc::clone(self.target.schema());
        let method = schema.method(name)?;
        if !self.validator.validate_arguments(method, args) {
            return None;
        }

        let declared = method.params().len();
        let args = &args[..args.len().min(declared)];
        match schema.invoke(method.slot(), &mut self.target, args) {
            Ok(value) => Some(value),
            Err(err) => {
                self.sink.emit(Diagnostic::error(
                    method.name(),
                    format!("invocation of method `{}` failed: {}", method.name(), err),
                ));
                None
            }
        }
    }

    // ========================================================================
    // Resolution-only surface
    // ========================================================================

    /// Check if the schema declares a field with this exact name
    pub fn has_field(&self, name: &str) -> bool {
        self.target.schema().has_field(name)
    }

    /// Check if the schema declares a method with this exact name
    pub fn has_method(&self, name: &str) -> bool {
        self.target.schema().has_method(name)
    }

    /// Field metadata by exact name
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.target.schema().field(name)
    }

    /// Method metadata by exact name
    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.target.schema().method(name)
    }

    /// Resolve the getter for a logical name without invoking it
    pub fn resolve_getter(&self, name: &str) -> Option<&MethodInfo> {
        self.resolver
            .resolve_method(self.target.schema(), name, Direction::Read)
    }

    /// Resolve the setter for a logical name without invoking it
    pub fn resolve_setter(&self, name: &str) -> Option<&MethodInfo> {
        self.resolver
            .resolve_method(self.target.schema(), name, Direction::Write)
    }

    /// The bound instance
    pub fn target(&self) -> &Instance {
        &self.target
    }

    /// Mutable access to the bound instance
    pub fn target_mut(&mut self) -> &mut Instance {
        &mut self.target
    }

    /// The bound instance's schema
    pub fn schema(&self) -> &Arc<TypeSchema> {
        self.target.schema()
    }

    /// The active naming convention
    pub fn convention(&self) -> &NamingConvention {
        self.resolver.convention()
    }
}
