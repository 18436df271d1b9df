use crate::constant::OPTION_PREFIX;
use crate::value::{CanonicalValue, ValueType};

/// One declared parameter: its identity, type tag, canonical value, and help optics.
///
/// The current value is always held in canonical (textual) form, regardless of the declared
/// type; it is decoded on demand through [`CanonicalValue`](crate::CanonicalValue).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    name: String,
    value_type: ValueType,
    canonical: String,
    default: String,
    store: String,
    help: String,
    flag: bool,
    positional: bool,
}

impl Argument {
    pub(crate) fn new<T: CanonicalValue>(
        name: impl Into<String>,
        help: impl Into<String>,
        default: T,
        store: T,
    ) -> Self {
        let name = name.into();
        let positional = !name.starts_with(OPTION_PREFIX);
        let flag = store != T::default() && !positional;
        let default = default.encode();
        Self {
            canonical: default.clone(),
            default,
            store: if flag { store.encode() } else { String::default() },
            help: help.into(),
            value_type: T::TYPE,
            flag,
            positional,
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// The current value, in canonical form.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The declaration-time default, in canonical form.
    /// Kept for introspection only; it is never restored automatically.
    pub fn default(&self) -> &str {
        &self.default
    }

    /// The canonical value substituted when this flag is present; empty unless [`Argument::is_flag`].
    pub fn store(&self) -> &str {
        &self.store
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    /// Whether presence alone sets the store value (consuming no following token).
    pub fn is_flag(&self) -> bool {
        self.flag
    }

    /// Whether the name lacks the option-marker prefix.
    pub fn is_positional(&self) -> bool {
        self.positional
    }

    pub(crate) fn assign(&mut self, canonical: String) {
        self.canonical = canonical;
    }

    pub(crate) fn assign_store(&mut self) {
        self.canonical = self.store.clone();
    }
}
