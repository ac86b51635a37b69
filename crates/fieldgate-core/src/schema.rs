//! Type schemas: the per-type metadata view and its builder
//!
//! A `TypeSchema` is the registration-built stand-in for runtime reflection:
//! name-keyed field and method tables plus a vtable of invokable method
//! bodies. Schemas are immutable once built and shared by `Arc`, so a bound
//! instance carries its full metadata view for its whole lifetime.
//!
//! Declaration goes through definition builders:
//!
//! ```
//! use fieldgate_core::{FieldDef, MethodDef, ParamDef, TypeSchema, TypeSpec, Value};
//!
//! let schema = TypeSchema::builder("User")
//!     .field(FieldDef::new("name", TypeSpec::string()))
//!     .method(
//!         MethodDef::new("setAge", |recv, args| {
//!             recv.set_field(1, args[0].clone());
//!             Ok(Value::Null)
//!         })
//!         .param(ParamDef::typed(TypeSpec::int())),
//!     )
//!     .field(FieldDef::new("age", TypeSpec::int()))
//!     .build()
//!     .unwrap();
//!
//! assert!(schema.has_field("name"));
//! assert!(schema.has_method("setAge"));
//! ```

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::{InvokeError, SchemaError};
use crate::info::{FieldInfo, MethodInfo, ParameterInfo, Visibility};
use crate::instance::Instance;
use crate::types::TypeSpec;
use crate::value::Value;

/// An invokable method body. Bodies receive the receiver instance and the
/// validated argument list; failure is reported by returning `Err`, never by
/// panicking.
pub type MethodFn = Arc<dyn Fn(&mut Instance, &[Value]) -> Result<Value, InvokeError> + Send + Sync>;

// ============================================================================
// Definitions
// ============================================================================

/// Declaration of a field, fed to the schema builder.
#[derive(Debug, Clone)]
pub struct FieldDef {
    name: String,
    ty: TypeSpec,
    visibility: Visibility,
    is_static: bool,
}

impl FieldDef {
    /// A public instance field of the given type
    pub fn new(name: impl Into<String>, ty: TypeSpec) -> Self {
        Self {
            name: name.into(),
            ty,
            visibility: Visibility::Public,
            is_static: false,
        }
    }

    /// Mark the field non-public
    pub fn non_public(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    /// Mark the field static (class-level)
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// Declaration of a method parameter.
#[derive(Debug, Clone)]
pub struct ParamDef {
    ty: Option<TypeSpec>,
    optional: bool,
}

impl ParamDef {
    /// A required parameter with a declared type
    pub fn typed(ty: TypeSpec) -> Self {
        Self {
            ty: Some(ty),
            optional: false,
        }
    }

    /// A required parameter with no declared type; accepts anything
    pub fn untyped() -> Self {
        Self {
            ty: None,
            optional: false,
        }
    }

    /// Mark the parameter optional (it has a default)
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Declaration of a method, fed to the schema builder.
pub struct MethodDef {
    name: String,
    visibility: Visibility,
    is_static: bool,
    params: Vec<ParamDef>,
    ret: Option<TypeSpec>,
    body: MethodFn,
}

impl MethodDef {
    /// A public instance method with the given body
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut Instance, &[Value]) -> Result<Value, InvokeError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            params: Vec::new(),
            ret: None,
            body: Arc::new(body),
        }
    }

    /// Append a parameter declaration
    pub fn param(mut self, param: ParamDef) -> Self {
        self.params.push(param);
        self
    }

    /// Declare the return type
    pub fn returns(mut self, ty: TypeSpec) -> Self {
        self.ret = Some(ty);
        self
    }

    /// Mark the method non-public
    pub fn non_public(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    /// Mark the method static
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

impl fmt::Debug for MethodDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDef")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("is_static", &self.is_static)
            .field("params", &self.params.len())
            .field("ret", &self.ret)
            .finish()
    }
}

// ============================================================================
// TypeSchema
// ============================================================================

/// Per-type metadata view: field and method tables keyed by name, plus the
/// vtable of method bodies. Lookups are pure; absence is `None`, never an
/// error.
pub struct TypeSchema {
    name: String,
    fields: FxHashMap<String, FieldInfo>,
    field_names: Vec<String>,
    methods: FxHashMap<String, MethodInfo>,
    method_names: Vec<String>,
    vtable: Vec<MethodFn>,
    instance_field_len: usize,
}

impl TypeSchema {
    /// Start declaring a schema with the given type name
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// The type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if a field with the given name is declared
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Check if a method with the given name is declared
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Field metadata by exact name
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.get(name)
    }

    /// Method metadata by exact name
    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods.get(name)
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// Method names in declaration order
    pub fn method_names(&self) -> &[String] {
        &self.method_names
    }

    /// Number of declared fields (instance and static)
    pub fn field_len(&self) -> usize {
        self.field_names.len()
    }

    /// Number of declared methods
    pub fn method_len(&self) -> usize {
        self.method_names.len()
    }

    /// Number of instance field slots an `Instance` of this type allocates
    pub fn instance_field_len(&self) -> usize {
        self.instance_field_len
    }

    /// Invoke the method body at the given vtable slot.
    pub fn invoke(
        &self,
        slot: usize,
        receiver: &mut Instance,
        args: &[Value],
    ) -> Result<Value, InvokeError> {
        let body = self.vtable.get(slot).ok_or(InvokeError::UnboundSlot(slot))?;
        body(receiver, args)
    }
}

impl fmt::Debug for TypeSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeSchema")
            .field("name", &self.name)
            .field("fields", &self.field_names)
            .field("methods", &self.method_names)
            .finish()
    }
}

// ============================================================================
// SchemaBuilder
// ============================================================================

/// Incrementally collects definitions, then builds the schema. Duplicate
/// member names are construction-time errors.
#[derive(Debug)]
pub struct SchemaBuilder {
    name: String,
    fields: Vec<FieldDef>,
    methods: Vec<MethodDef>,
}

impl SchemaBuilder {
    /// Declare a field
    pub fn field(mut self, def: FieldDef) -> Self {
        self.fields.push(def);
        self
    }

    /// Declare a method
    pub fn method(mut self, def: MethodDef) -> Self {
        self.methods.push(def);
        self
    }

    /// Finalize the schema. Slot indices are assigned in declaration order:
    /// instance fields and static fields count separately, and each method
    /// gets the next vtable slot.
    pub fn build(self) -> Result<TypeSchema, SchemaError> {
        let mut fields = FxHashMap::default();
        let mut field_names = Vec::with_capacity(self.fields.len());
        let mut instance_slots = 0usize;
        let mut static_slots = 0usize;

        for def in self.fields {
            if fields.contains_key(&def.name) {
                return Err(SchemaError::DuplicateField(def.name));
            }
            let slot = if def.is_static {
                let slot = static_slots;
                static_slots += 1;
                slot
            } else {
                let slot = instance_slots;
                instance_slots += 1;
                slot
            };
            field_names.push(def.name.clone());
            let info = FieldInfo::new(def.name.clone(), def.ty, def.visibility, def.is_static, slot);
            fields.insert(def.name, info);
        }

        let mut methods = FxHashMap::default();
        let mut method_names = Vec::with_capacity(self.methods.len());
        let mut vtable = Vec::with_capacity(self.methods.len());

        for def in self.methods {
            if methods.contains_key(&def.name) {
                return Err(SchemaError::DuplicateMethod(def.name));
            }
            let params = def
                .params
                .into_iter()
                .enumerate()
                .map(|(position, p)| ParameterInfo::new(position, p.ty, p.optional))
                .collect();
            let slot = vtable.len();
            vtable.push(def.body);
            method_names.push(def.name.clone());
            let info = MethodInfo::new(
                def.name.clone(),
                def.visibility,
                def.is_static,
                params,
                def.ret,
                slot,
            );
            methods.insert(def.name, info);
        }

        Ok(TypeSchema {
            name: self.name,
            fields,
            field_names,
            methods,
            method_names,
            vtable,
            instance_field_len: instance_slots,
        })
    }
}
