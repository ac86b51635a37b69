//! Member metadata for schema introspection
//!
//! `FieldInfo`, `MethodInfo`, and `ParameterInfo` are the immutable records a
//! `TypeSchema` hands out when queried by name. They carry everything the
//! access policy needs: visibility, staticness, declared types, nullability,
//! and slot indices into instance storage or the method vtable.

use crate::types::TypeSpec;
use crate::value::Value;

/// Member visibility. The access policy only distinguishes public from
/// non-public.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Accessible through the gateway
    Public,
    /// Rejected by the gateway policy
    Private,
}

impl Visibility {
    /// Whether this is `Public`
    #[inline]
    pub const fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// Metadata for a declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    name: String,
    ty: TypeSpec,
    visibility: Visibility,
    is_static: bool,
    slot: usize,
}

impl FieldInfo {
    pub(crate) fn new(
        name: String,
        ty: TypeSpec,
        visibility: Visibility,
        is_static: bool,
        slot: usize,
    ) -> Self {
        Self {
            name,
            ty,
            visibility,
            is_static,
            slot,
        }
    }

    /// Field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type
    pub fn ty(&self) -> &TypeSpec {
        &self.ty
    }

    /// Visibility
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether the field is public
    pub fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    /// Whether the field is static (class-level)
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Slot index. Instance fields index into `Instance::fields`; static
    /// fields index a metadata-only static table.
    pub fn slot(&self) -> usize {
        self.slot
    }
}

/// Metadata for a single method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    position: usize,
    ty: Option<TypeSpec>,
    optional: bool,
}

impl ParameterInfo {
    pub(crate) fn new(position: usize, ty: Option<TypeSpec>, optional: bool) -> Self {
        Self {
            position,
            ty,
            optional,
        }
    }

    /// Zero-based position in the parameter list
    pub fn position(&self) -> usize {
        self.position
    }

    /// Declared type; `None` means untyped (accepts anything)
    pub fn ty(&self) -> Option<&TypeSpec> {
        self.ty.as_ref()
    }

    /// Whether the parameter has a default and may be omitted
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Whether null satisfies this parameter. Untyped parameters allow null.
    pub fn allows_null(&self) -> bool {
        self.ty.as_ref().map_or(true, TypeSpec::allows_null)
    }

    /// Whether a runtime value satisfies this parameter. Untyped parameters
    /// accept anything.
    pub fn accepts(&self, value: &Value) -> bool {
        match &self.ty {
            Some(ty) => ty.accepts(value),
            None => true,
        }
    }
}

/// Metadata for a declared method.
#[derive(Clone)]
pub struct MethodInfo {
    name: String,
    visibility: Visibility,
    is_static: bool,
    params: Vec<ParameterInfo>,
    ret: Option<TypeSpec>,
    slot: usize,
}

impl MethodInfo {
    pub(crate) fn new(
        name: String,
        visibility: Visibility,
        is_static: bool,
        params: Vec<ParameterInfo>,
        ret: Option<TypeSpec>,
        slot: usize,
    ) -> Self {
        Self {
            name,
            visibility,
            is_static,
            params,
            ret,
            slot,
        }
    }

    /// Method name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Visibility
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether the method is public
    pub fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    /// Whether the method is static
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Declared parameters, in order
    pub fn params(&self) -> &[ParameterInfo] {
        &self.params
    }

    /// Parameter at the given position, if declared
    pub fn param(&self, position: usize) -> Option<&ParameterInfo> {
        self.params.get(position)
    }

    /// Number of parameters without a default
    pub fn required_param_count(&self) -> usize {
        self.params.iter().filter(|p| !p.is_optional()).count()
    }

    /// Declared return type; `None` means undeclared (null returns allowed)
    pub fn return_spec(&self) -> Option<&TypeSpec> {
        self.ret.as_ref()
    }

    /// Vtable slot of the method body
    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl std::fmt::Debug for MethodInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodInfo")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("is_static", &self.is_static)
            .field("params", &self.params)
            .field("ret", &self.ret)
            .field("slot", &self.slot)
            .finish()
    }
}
