//! Errors raised while declaring parameters and while assigning their values.

use crate::{parameter::ParameterKind, valuetype::TypeKey};

/// Failure to convert raw values and assign them into a [crate::context::CommandContext].
///
/// When a setter fails, the context is left as it was before the setter was invoked.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("no converter is registered for values of type {value_type}")]
    MissingConverter { value_type: TypeKey },
    #[error("cannot convert {raw:?} to {value_type}: {reason}")]
    InvalidValue {
        raw: String,
        value_type: TypeKey,
        reason: String,
    },
    #[error("property {property:?} expects {expected} value(s), got {actual}")]
    ValueCount {
        property: String,
        expected: usize,
        actual: usize,
    },
    #[error("property {property:?} already holds a value that is not {expected}")]
    PropertyType {
        property: String,
        expected: TypeKey,
    },
}

/// Invalid or conflicting parameter declarations.
#[derive(Debug, thiserror::Error)]
pub enum DeclarationError {
    #[error("invalid parameter declaration: {message}")]
    InvalidArgument { message: String },
    #[error("parameter {name} is declared more than once")]
    Duplicate { name: String },
    #[error("{kind} name {name} is declared by both {existing} and {conflicting}")]
    NameConflict {
        kind: ParameterKind,
        name: String,
        existing: String,
        conflicting: String,
    },
}

impl DeclarationError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
