//! Declarative parameter metadata, as read from configuration.


use serde::{Deserialize, Serialize};

use crate::{builder::ParameterBuilder, parameter::ParameterKind, valuetype::TypeKey};

/// Declares a parameter for a property, independently of how its values are converted.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ParameterMetadata {
    pub kind: ParameterKind,
    pub property: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ParameterMetadata {
    /// Returns a [ParameterBuilder] for the property on `declaring_type`. The caller must still
    /// supply a value binding.
    pub fn builder(self, declaring_type: TypeKey) -> ParameterBuilder {
        let builder = ParameterBuilder::new(self.kind, declaring_type, self.property, self.name);
        match self.description {
            Some(description) => builder.description(description),
            None => builder,
        }
    }
}
