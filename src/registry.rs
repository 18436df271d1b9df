use std::collections::HashMap;
use thiserror::Error;

use crate::argument::Argument;
use crate::value::{CanonicalValue, ValueType};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Lookup error: '{name}' is not declared.")]
    UndefinedArgument { name: String },

    #[error("Lookup error: '{name}' is declared as {declared}, not {requested}.")]
    TypeMismatch {
        name: String,
        declared: ValueType,
        requested: ValueType,
    },
}

/// The set of declared arguments for one parser, in declaration order.
///
/// Declaration order is tracked explicitly so that help and values output are deterministic.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    order: Vec<String>,
    arguments: HashMap<String, Argument>,
}

impl Registry {
    /// Insert or replace a declaration; the last declaration of a name wins.
    /// A replaced name keeps its original position in the declaration order.
    pub(crate) fn declare<T: CanonicalValue>(
        &mut self,
        name: impl Into<String>,
        help: impl Into<String>,
        default: T,
        store: T,
    ) {
        let argument = Argument::new(name, help, default, store);
        let name = argument.name().to_string();

        if self.arguments.insert(name.clone(), argument).is_none() {
            self.order.push(name);
        }
    }

    /// Decode the value declared under `name` at the requested type.
    pub(crate) fn get<T: CanonicalValue>(&self, name: &str) -> Result<T, LookupError> {
        let argument = self
            .arguments
            .get(name)
            .ok_or_else(|| LookupError::UndefinedArgument {
                name: name.to_string(),
            })?;

        if argument.value_type() != T::TYPE {
            return Err(LookupError::TypeMismatch {
                name: name.to_string(),
                declared: argument.value_type(),
                requested: T::TYPE,
            });
        }

        // Canonical values are only ever written via encode/normalize at the declared type.
        Ok(T::decode(argument.canonical())
            .expect("internal error - canonical value must decode at its declared type"))
    }

    pub(crate) fn lookup_mut(&mut self, name: &str) -> Option<&mut Argument> {
        self.arguments.get_mut(name)
    }

    /// Enumerate the declared arguments in declaration order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.order.iter().map(|name| {
            self.arguments
                .get(name)
                .expect("internal error - ordered name must be registered")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declare_get() {
        let mut registry = Registry::default();
        registry.declare("--output", "", "/dev/stdout".to_string(), String::default());
        registry.declare("--integer", "", 0_i64, 0_i64);
        registry.declare("--ratio", "", 0.5_f64, 0.0_f64);
        registry.declare("--verbose", "", false, true);

        assert_eq!(
            registry.get::<String>("--output").unwrap(),
            "/dev/stdout".to_string()
        );
        assert_eq!(registry.get::<i64>("--integer").unwrap(), 0);
        assert_eq!(registry.get::<f64>("--ratio").unwrap(), 0.5);
        assert_eq!(registry.get::<bool>("--verbose").unwrap(), false);
    }

    #[test]
    fn get_undefined() {
        let registry = Registry::default();

        assert_eq!(
            registry.get::<String>("--missing").unwrap_err(),
            LookupError::UndefinedArgument {
                name: "--missing".to_string(),
            }
        );
    }

    #[test]
    fn get_type_mismatch() {
        let mut registry = Registry::default();
        registry.declare("--integer", "", 0_i64, 0_i64);

        assert_eq!(
            registry.get::<bool>("--integer").unwrap_err(),
            LookupError::TypeMismatch {
                name: "--integer".to_string(),
                declared: ValueType::Integer,
                requested: ValueType::Boolean,
            }
        );
        // No implicit conversion for any mismatched type.
        assert_matches!(
            registry.get::<String>("--integer"),
            Err(LookupError::TypeMismatch { .. })
        );
        assert_matches!(
            registry.get::<f64>("--integer"),
            Err(LookupError::TypeMismatch { .. })
        );
    }

    #[test]
    fn redeclare_replaces() {
        let mut registry = Registry::default();
        registry.declare("--value", "old help", 1_i64, 0_i64);
        registry.declare("--other", "", false, false);
        registry.declare("--value", "new help", "text".to_string(), String::default());

        // Last declaration wins, entirely.
        assert_eq!(registry.get::<String>("--value").unwrap(), "text");
        assert_matches!(
            registry.get::<i64>("--value"),
            Err(LookupError::TypeMismatch { .. })
        );

        // The replaced name keeps its original position.
        let names: Vec<&str> = registry.iter().map(|argument| argument.name()).collect();
        assert_eq!(names, vec!["--value", "--other"]);
    }

    #[test]
    fn iteration_order() {
        let mut registry = Registry::default();
        registry.declare("--zebra", "", 0_i64, 0_i64);
        registry.declare("apple", "", String::default(), String::default());
        registry.declare("--mango", "", false, false);

        let names: Vec<&str> = registry.iter().map(|argument| argument.name()).collect();
        assert_eq!(names, vec!["--zebra", "apple", "--mango"]);
    }

    #[test]
    fn mutation_via_lookup() {
        let mut registry = Registry::default();
        registry.declare("--integer", "", 0_i64, 0_i64);

        registry
            .lookup_mut("--integer")
            .unwrap()
            .assign("42".to_string());

        assert_eq!(registry.get::<i64>("--integer").unwrap(), 42);
        assert!(registry.lookup_mut("--missing").is_none());
    }
}
