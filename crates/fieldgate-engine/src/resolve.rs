//! Accessor resolution
//!
//! Maps a caller-supplied logical name to a concrete accessor on the target's
//! schema. Fields resolve by exact name. Methods resolve by naming
//! convention: an ordered list of prefixes per direction, each concatenated
//! with the logical name ucfirst'd, first existing method wins. There is no
//! case-insensitive or fuzzy fallback.

use fieldgate_core::{FieldInfo, MethodInfo, TypeSchema};

/// Whether an access reads or writes; selects the prefix list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Reading a value
    Read,
    /// Writing a value
    Write,
}

/// The ordered prefix lists used to derive method names from logical names.
///
/// Kept as data so the convention is testable and swappable per gateway: the
/// default maps reads to `get` and writes to `set` then `append` (overwrite
/// setters win over add-style setters sharing a logical name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConvention {
    read_prefixes: Vec<String>,
    write_prefixes: Vec<String>,
}

impl NamingConvention {
    /// Create a convention from explicit prefix lists, tried in order
    pub fn new(read_prefixes: &[&str], write_prefixes: &[&str]) -> Self {
        Self {
            read_prefixes: read_prefixes.iter().map(|p| p.to_string()).collect(),
            write_prefixes: write_prefixes.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Prefixes for the given direction, in resolution order
    pub fn prefixes(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::Read => &self.read_prefixes,
            Direction::Write => &self.write_prefixes,
        }
    }

    /// Candidate method name: prefix + logical name with its first character
    /// upper-cased
    pub fn method_name(prefix: &str, logical: &str) -> String {
        let mut chars = logical.chars();
        let mut name = String::with_capacity(prefix.len() + logical.len());
        name.push_str(prefix);
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
        name
    }
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::new(&["get"], &["set", "append"])
    }
}

/// A resolved accessor: a field or a method on the schema. Absence is
/// represented by `Option::None` at the resolver surface.
#[derive(Debug, Clone, Copy)]
pub enum Accessor<'a> {
    /// Direct field access
    Field(&'a FieldInfo),
    /// Access through a conventionally named method
    Method(&'a MethodInfo),
}

/// Resolves logical names against a schema using a naming convention.
#[derive(Debug, Clone, Default)]
pub struct AccessorResolver {
    convention: NamingConvention,
}

impl AccessorResolver {
    /// Resolver with the default `get`/`set`/`append` convention
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver with a custom convention
    pub fn with_convention(convention: NamingConvention) -> Self {
        Self { convention }
    }

    /// The active convention
    pub fn convention(&self) -> &NamingConvention {
        &self.convention
    }

    /// Resolve a field by exact name
    pub fn resolve_field<'s>(&self, schema: &'s TypeSchema, name: &str) -> Option<&'s FieldInfo> {
        schema.field(name)
    }

    /// Resolve a method for the logical name and direction. Each prefix is
    /// tried in order; the first method that exists on the schema wins.
    pub fn resolve_method<'s>(
        &self,
        schema: &'s TypeSchema,
        logical: &str,
        direction: Direction,
    ) -> Option<&'s MethodInfo> {
        self.convention
            .prefixes(direction)
            .iter()
            .find_map(|prefix| schema.method(&NamingConvention::method_name(prefix, logical)))
    }

    /// Resolve the logical name to whichever accessor exists: the field if
    /// one is declared under that exact name, otherwise the direction's
    /// conventionally named method.
    pub fn resolve<'s>(
        &self,
        schema: &'s TypeSchema,
        logical: &str,
        direction: Direction,
    ) -> Option<Accessor<'s>> {
        if let Some(field) = self.resolve_field(schema, logical) {
            return Some(Accessor::Field(field));
        }
        self.resolve_method(schema, logical, direction)
            .map(Accessor::Method)
    }
}
