//! Object instances
//!
//! An `Instance` is one bound object: a shared handle to its `TypeSchema`
//! plus a `Value` slot per declared instance field. The schema handle is
//! fixed at construction — the type of a bound instance cannot change, so
//! the metadata view never needs invalidation.

use std::sync::Arc;

use crate::schema::TypeSchema;
use crate::value::Value;

/// An object instance with slot-indexed field storage.
#[derive(Debug, Clone)]
pub struct Instance {
    schema: Arc<TypeSchema>,
    fields: Vec<Value>,
}

impl Instance {
    /// Create a new instance with all fields initialized to null.
    pub fn new(schema: &Arc<TypeSchema>) -> Self {
        Self {
            schema: Arc::clone(schema),
            fields: vec![Value::Null; schema.instance_field_len()],
        }
    }

    /// The schema describing this instance's type
    pub fn schema(&self) -> &Arc<TypeSchema> {
        &self.schema
    }

    /// The schema name
    pub fn type_name(&self) -> &str {
        self.schema.name()
    }

    /// Get a field value by slot index
    pub fn get_field(&self, slot: usize) -> Option<&Value> {
        self.fields.get(slot)
    }

    /// Set a field value by slot index. Returns false if the slot is out of
    /// bounds.
    pub fn set_field(&mut self, slot: usize, value: Value) -> bool {
        match self.fields.get_mut(slot) {
            Some(target) => {
                *target = value;
                true
            }
            None => false,
        }
    }

    /// Number of instance field slots
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.schema, &other.schema) && self.fields == other.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDef;
    use crate::types::TypeSpec;

    fn point_schema() -> Arc<TypeSchema> {
        let schema = TypeSchema::builder("Point")
            .field(FieldDef::new("x", TypeSpec::int()))
            .field(FieldDef::new("y", TypeSpec::int()))
            .build()
            .unwrap();
        Arc::new(schema)
    }

    #[test]
    fn test_new_instance_is_null_filled() {
        let instance = Instance::new(&point_schema());
        assert_eq!(instance.field_len(), 2);
        assert_eq!(instance.get_field(0), Some(&Value::Null));
        assert_eq!(instance.get_field(1), Some(&Value::Null));
    }

    #[test]
    fn test_slot_access() {
        let mut instance = Instance::new(&point_schema());
        assert!(instance.set_field(0, Value::Int(3)));
        assert_eq!(instance.get_field(0), Some(&Value::Int(3)));
    }

    #[test]
    fn test_out_of_bounds_slot() {
        let mut instance = Instance::new(&point_schema());
        assert!(!instance.set_field(9, Value::Int(1)));
        assert_eq!(instance.get_field(9), None);
    }

    #[test]
    fn test_instances_share_schema() {
        let schema = point_schema();
        let a = Instance::new(&schema);
        let b = Instance::new(&schema);
        assert_eq!(a, b);
        assert_eq!(a.type_name(), "Point");
    }
}
