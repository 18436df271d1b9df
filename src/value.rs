use thiserror::Error;

/// The closed set of primitive types a parameter may declare.
///
/// Every declared parameter carries precisely one `ValueType`, fixed at declaration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// Free text; conversion never fails.
    String,
    /// A decimal integer (`i64`).
    Integer,
    /// A decimal floating point number (`f64`).
    Float,
    /// A truthy-literal boolean; conversion never fails.
    Boolean,
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::String => write!(f, "string"),
            ValueType::Integer => write!(f, "integer"),
            ValueType::Float => write!(f, "float"),
            ValueType::Boolean => write!(f, "boolean"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{value}' cannot convert to {target}.")]
pub struct ConversionError {
    pub(crate) value: String,
    pub(crate) target: ValueType,
}

// The truthy literal set; anything else is `false`.
pub(crate) fn truthy(text: &str) -> bool {
    matches!(text, "true" | "t" | "True")
}

impl ValueType {
    /// Re-encode an incoming token as the canonical string for this type.
    ///
    /// The canonical form is the decimal re-encoding for numeric types, `"true"`/`"false"` for
    /// booleans, and the token itself for strings.
    pub(crate) fn normalize(&self, token: &str) -> Result<String, ConversionError> {
        match self {
            ValueType::String => Ok(token.to_string()),
            ValueType::Integer => token
                .parse::<i64>()
                .map(|value| value.to_string())
                .map_err(|_| ConversionError {
                    value: token.to_string(),
                    target: *self,
                }),
            ValueType::Float => token
                .parse::<f64>()
                .map(|value| value.to_string())
                .map_err(|_| ConversionError {
                    value: token.to_string(),
                    target: *self,
                }),
            ValueType::Boolean => Ok(truthy(token).to_string()),
        }
    }
}

/// Conversion between a primitive type and its canonical string representation.
///
/// Implemented for the closed set `String`, `i64`, `f64`, and `bool` - the same set as
/// [`ValueType`].
pub trait CanonicalValue: Sized + Default + PartialEq {
    /// The [`ValueType`] tag for this type.
    const TYPE: ValueType;

    /// Produce the canonical string for this value.
    fn encode(&self) -> String;

    /// Recover a typed value from a canonical string.
    fn decode(canonical: &str) -> Result<Self, ConversionError>;
}

impl CanonicalValue for String {
    const TYPE: ValueType = ValueType::String;

    fn encode(&self) -> String {
        self.clone()
    }

    fn decode(canonical: &str) -> Result<Self, ConversionError> {
        Ok(canonical.to_string())
    }
}

impl CanonicalValue for i64 {
    const TYPE: ValueType = ValueType::Integer;

    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(canonical: &str) -> Result<Self, ConversionError> {
        canonical.parse::<i64>().map_err(|_| ConversionError {
            value: canonical.to_string(),
            target: Self::TYPE,
        })
    }
}

impl CanonicalValue for f64 {
    const TYPE: ValueType = ValueType::Float;

    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(canonical: &str) -> Result<Self, ConversionError> {
        canonical.parse::<f64>().map_err(|_| ConversionError {
            value: canonical.to_string(),
            target: Self::TYPE,
        })
    }
}

impl CanonicalValue for bool {
    const TYPE: ValueType = ValueType::Boolean;

    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(canonical: &str) -> Result<Self, ConversionError> {
        Ok(truthy(canonical))
    }
}
