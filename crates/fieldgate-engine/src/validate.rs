//! Access policy validation
//!
//! The validator classifies a resolved accessor as accepted or rejected.
//! Rules run in a fixed order and short-circuit: the first failing rule
//! determines the outcome and emits exactly one diagnostic to the injected
//! sink. Policy violations (visibility, staticness, arity, nullability) are
//! errors; value/parameter type mismatches are warnings — still rejected,
//! but flagged as "possibly intentional, definitely suspicious".
//!
//! Getter validation is the one place validation and execution fold
//! together: nullability of a getter is checked against the value it
//! actually returns, so the method is invoked during validation and the
//! obtained value is handed back for reuse — never invoked a second time.

use std::sync::Arc;

use fieldgate_core::{FieldInfo, Instance, MethodInfo, Value};

use crate::diag::{Diagnostic, DiagnosticsSink};

/// How an accepted setter should be invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetterCall {
    /// Pass the value as the single argument
    PassValue,
    /// The setter declares no parameters; invoke without arguments and drop
    /// the value
    NoArgs,
}

/// Applies the access policy. Stateless apart from the sink handle; never
/// mutates the target except for the invocation folded into getter
/// validation.
#[derive(Clone)]
pub struct Validator {
    sink: Arc<dyn DiagnosticsSink>,
}

impl Validator {
    /// Create a validator emitting to the given sink
    pub fn new(sink: Arc<dyn DiagnosticsSink>) -> Self {
        Self { sink }
    }

    fn error(&self, subject: &str, message: String) {
        self.sink.emit(Diagnostic::error(subject, message));
    }

    fn warning(&self, subject: &str, message: String) {
        self.sink.emit(Diagnostic::warning(subject, message));
    }

    /// Validate direct field access: the field must be public and non-static.
    pub fn validate_field(&self, field: &FieldInfo) -> bool {
        if !field.is_public() {
            self.error(
                field.name(),
                format!("field `{}` is not public", field.name()),
            );
            return false;
        }
        if field.is_static() {
            self.error(field.name(), format!("field `{}` is static", field.name()));
            return false;
        }
        true
    }

    /// Validate the shape shared by getters and setters: the method must be
    /// public and non-static.
    pub fn validate_method_shape(&self, method: &MethodInfo) -> bool {
        if !method.is_public() {
            self.error(
                method.name(),
                format!("method `{}` is not public", method.name()),
            );
            return false;
        }
        if method.is_static() {
            self.error(
                method.name(),
                format!("method `{}` is static", method.name()),
            );
            return false;
        }
        true
    }

    /// Validate a setter against the value to be written. On acceptance,
    /// reports how the call must be made; `None` is rejection.
    pub fn validate_setter(&self, method: &MethodInfo, value: &Value) -> Option<SetterCall> {
        if !self.validate_method_shape(method) {
            return None;
        }

        if method.params().is_empty() {
            self.warning(
                method.name(),
                format!("method `{}` accepts no parameters", method.name()),
            );
            return Some(SetterCall::NoArgs);
        }

        if method.required_param_count() > 1 {
            self.error(
                method.name(),
                format!(
                    "method `{}` requires {} arguments, a setter must accept one",
                    method.name(),
                    method.required_param_count()
                ),
            );
            return None;
        }

        let param = &method.params()[0];
        if value.is_null() {
            if param.allows_null() {
                return Some(SetterCall::PassValue);
            }
            self.error(
                method.name(),
                format!(
                    "first parameter of method `{}` is not allowed to be null",
                    method.name()
                ),
            );
            return None;
        }

        if param.accepts(value) {
            Some(SetterCall::PassValue)
        } else {
            self.warning(
                method.name(),
                format!(
                    "value of type `{}` is not accepted by the parameter type of `{}`",
                    value.type_name(),
                    method.name()
                ),
            );
            None
        }
    }

    /// Validate a getter. The method is invoked here so nullability can be
    /// checked against the live return value; on acceptance that value is
    /// returned for reuse. An invocation failure is a rejection, never a
    /// propagated error.
    pub fn validate_getter(&self, method: &MethodInfo, target: &mut Instance) -> Option<Value> {
        if !self.validate_method_shape(method) {
            return None;
        }

        let schema = Arc::clone(target.schema());
        let value = match schema.invoke(method.slot(), target, &[]) {
            Ok(value) => value,
            Err(err) => {
                self.error(
                    method.name(),
                    format!("invocation of method `{}` failed: {}", method.name(), err),
                );
                return None;
            }
        };

        if value.is_null() {
            if let Some(ret) = method.return_spec() {
                if !ret.allows_null() {
                    self.error(
                        method.name(),
                        format!(
                            "method `{}` returned null but its return type `{}` does not allow null",
                            method.name(),
                            ret
                        ),
                    );
                    return None;
                }
            }
        }

        Some(value)
    }

    /// Validate a full argument list for direct invocation. The method must
    /// be public, enough arguments must be supplied to cover the required
    /// parameters, and each supplied argument must satisfy its parameter.
    /// Arguments beyond the declared parameter list are ignored.
    pub fn validate_arguments(&self, method: &MethodInfo, args: &[Value]) -> bool {
        if !method.is_public() {
            self.error(
                method.name(),
                format!("method `{}` is not public", method.name()),
            );
            return false;
        }

        let required = method.required_param_count();
        if args.len() < required {
            self.error(
                method.name(),
                format!(
                    "method `{}` requires {} arguments, {} supplied",
                    method.name(),
                    required,
                    args.len()
                ),
            );
            return false;
        }

        for (position, arg) in args.iter().enumerate() {
            let Some(param) = method.param(position) else {
                break;
            };
            if arg.is_null() {
                if !param.allows_null() {
                    self.error(
                        method.name(),
                        format!(
                            "argument {} of method `{}` is not allowed to be null",
                            position,
                            method.name()
                        ),
                    );
                    return false;
                }
            } else if !param.accepts(arg) {
                self.warning(
                    method.name(),
                    format!(
                        "argument {} of type `{}` is not accepted by method `{}`",
                        position,
                        arg.type_name(),
                        method.name()
                    ),
                );
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::{MemorySink, Severity};
    use fieldgate_core::{FieldDef, MethodDef, ParamDef, TypeSchema, TypeSpec};

    fn validator() -> (Validator, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (Validator::new(sink.clone()), sink)
    }

    fn schema() -> Arc<TypeSchema> {
        let schema = TypeSchema::builder("Account")
            .field(FieldDef::new("name", TypeSpec::string()))
            .field(FieldDef::new("amount", TypeSpec::int()))
            .field(FieldDef::new("count", TypeSpec::int()).as_static())
            .field(FieldDef::new("secret", TypeSpec::string()).non_public())
            .method(
                MethodDef::new("setAmount", |recv, args| {
                    recv.set_field(1, args[0].clone());
                    Ok(Value::Null)
                })
                .param(ParamDef::typed(TypeSpec::int())),
            )
            .method(
                MethodDef::new("setNote", |_, _| Ok(Value::Null))
                    .param(ParamDef::typed(TypeSpec::string().nullable())),
            )
            .method(MethodDef::new("touch", |_, _| Ok(Value::Null)))
            .method(
                MethodDef::new("setRange", |_, _| Ok(Value::Null))
                    .param(ParamDef::typed(TypeSpec::int()))
                    .param(ParamDef::typed(TypeSpec::int())),
            )
            .method(
                MethodDef::new("getAmount", |recv, _| {
                    Ok(recv.get_field(1).cloned().unwrap_or(Value::Null))
                })
                .returns(TypeSpec::int()),
            )
            .method(
                MethodDef::new("getNote", |_, _| Ok(Value::Null))
                    .returns(TypeSpec::string().nullable()),
            )
            .method(
                MethodDef::new("getBroken", |_, _| Err(fieldgate_core::InvokeError::raised("boom")))
                    .returns(TypeSpec::int()),
            )
            .method(MethodDef::new("hidden", |_, _| Ok(Value::Null)).non_public())
            .method(MethodDef::new("getTag", |_, _| Ok(Value::Null)))
            .build()
            .unwrap();
        Arc::new(schema)
    }

    #[test]
    fn test_field_policy() {
        let (validator, sink) = validator();
        let schema = schema();

        assert!(validator.validate_field(schema.field("name").unwrap()));
        assert!(sink.is_empty());

        assert!(!validator.validate_field(schema.field("count").unwrap()));
        assert!(!validator.validate_field(schema.field("secret").unwrap()));

        let entries = sink.drain();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].severity, Severity::Error);
        assert!(entries[0].message.contains("static"));
        assert!(entries[1].message.contains("not public"));
    }

    #[test]
    fn test_setter_accepts_matching_value() {
        let (validator, sink) = validator();
        let schema = schema();
        let method = schema.method("setAmount").unwrap();

        assert_eq!(
            validator.validate_setter(method, &Value::Int(5)),
            Some(SetterCall::PassValue)
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_setter_null_policy() {
        let (validator, sink) = validator();
        let schema = schema();

        // non-nullable parameter rejects null with an error
        assert_eq!(
            validator.validate_setter(schema.method("setAmount").unwrap(), &Value::Null),
            None
        );
        let entries = sink.drain();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Error);
        assert!(entries[0].message.contains("null"));

        // nullable parameter accepts null
        assert_eq!(
            validator.validate_setter(schema.method("setNote").unwrap(), &Value::Null),
            Some(SetterCall::PassValue)
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_setter_type_mismatch_is_warning() {
        let (validator, sink) = validator();
        let schema = schema();

        assert_eq!(
            validator.validate_setter(schema.method("setAmount").unwrap(), &Value::str("five")),
            None
        );
        let entries = sink.drain();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Warning);
    }

    #[test]
    fn test_setter_without_parameters_warns_but_accepts() {
        let (validator, sink) = validator();
        let schema = schema();

        assert_eq!(
            validator.validate_setter(schema.method("touch").unwrap(), &Value::Int(1)),
            Some(SetterCall::NoArgs)
        );
        let entries = sink.drain();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Warning);
        assert!(entries[0].message.contains("no parameters"));
    }

    #[test]
    fn test_setter_with_two_required_params_rejected() {
        let (validator, sink) = validator();
        let schema = schema();

        assert_eq!(
            validator.validate_setter(schema.method("setRange").unwrap(), &Value::Int(1)),
            None
        );
        assert_eq!(sink.drain()[0].severity, Severity::Error);
    }

    #[test]
    fn test_getter_returns_live_value() {
        let (validator, sink) = validator();
        let schema = schema();
        let mut instance = Instance::new(&schema);
        instance.set_field(1, Value::Int(42));

        let value = validator.validate_getter(schema.method("getAmount").unwrap(), &mut instance);
        assert_eq!(value, Some(Value::Int(42)));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_getter_null_with_nonnullable_return_rejected() {
        let (validator, sink) = validator();
        let schema = schema();
        let mut instance = Instance::new(&schema);

        // amount slot still null
        let value = validator.validate_getter(schema.method("getAmount").unwrap(), &mut instance);
        assert_eq!(value, None);
        let entries = sink.drain();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Error);
        assert!(entries[0].message.contains("null"));
    }

    #[test]
    fn test_getter_null_allowed_by_nullable_or_undeclared_return() {
        let (validator, sink) = validator();
        let schema = schema();
        let mut instance = Instance::new(&schema);

        // declared nullable return
        assert_eq!(
            validator.validate_getter(schema.method("getNote").unwrap(), &mut instance),
            Some(Value::Null)
        );
        // no declared return type
        assert_eq!(
            validator.validate_getter(schema.method("getTag").unwrap(), &mut instance),
            Some(Value::Null)
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_getter_invocation_failure_is_rejection() {
        let (validator, sink) = validator();
        let schema = schema();
        let mut instance = Instance::new(&schema);

        let value = validator.validate_getter(schema.method("getBroken").unwrap(), &mut instance);
        assert_eq!(value, None);
        let entries = sink.drain();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Error);
        assert!(entries[0].message.contains("boom"));
    }

    #[test]
    fn test_arguments_arity() {
        let (validator, sink) = validator();
        let schema = schema();
        let method = schema.method("setRange").unwrap();

        assert!(!validator.validate_arguments(method, &[Value::Int(1)]));
        assert_eq!(sink.drain()[0].severity, Severity::Error);

        assert!(validator.validate_arguments(method, &[Value::Int(1), Value::Int(2)]));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_arguments_extras_ignored() {
        let (validator, sink) = validator();
        let schema = schema();
        let method = schema.method("setAmount").unwrap();

        assert!(validator.validate_arguments(method, &[Value::Int(1), Value::str("extra")]));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_arguments_null_and_type_checks() {
        let (validator, sink) = validator();
        let schema = schema();
        let method = schema.method("setRange").unwrap();

        assert!(!validator.validate_arguments(method, &[Value::Null, Value::Int(2)]));
        assert_eq!(sink.drain()[0].severity, Severity::Error);

        assert!(!validator.validate_arguments(method, &[Value::Int(1), Value::str("2")]));
        assert_eq!(sink.drain()[0].severity, Severity::Warning);
    }

    #[test]
    fn test_arguments_visibility_only_shape_rule() {
        let (validator, sink) = validator();
        let schema = schema();

        assert!(!validator.validate_arguments(schema.method("hidden").unwrap(), &[]));
        assert_eq!(sink.drain()[0].severity, Severity::Error);
    }
}
