//! The [CommandParameter] descriptor shared by every kind of command-line parameter.

mod setter;
#[cfg(test)]
mod tests;

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::{
    context::CommandContext, converter::ConverterRegistry, error::ConversionError,
    valuetype::TypeKey,
};

pub use setter::ParameterSetter;

/// The concrete kind of a [CommandParameter].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParameterKind {
    /// Positional argument.
    Argument,
    /// Named option.
    Option,
}

/// Describes an argument or option to a command.
///
/// Two parameters are equal if they have the same [ParameterKind], declaring type, property name
/// and display name. Only the declaring type and property name contribute to the hash.
///
/// Absent parameters are represented as `Option<&CommandParameter>`, for which `None == None`,
/// `None != Some(_)`, and `Some(a) == Some(b)` iff `a == b`.
#[derive(Clone)]
pub struct CommandParameter {
    kind: ParameterKind,
    declaring_type: TypeKey,
    property_name: String,
    name: String,
    setter: ParameterSetter,
    description: Option<String>,
}

impl CommandParameter {
    /// Creates a new [CommandParameter].
    ///
    /// * `declaring_type` - the type that declares the target property.
    /// * `property_name` - the name of the target property.
    /// * `name` - the parameter name, as shown in help and diagnostics.
    /// * `setter` - converts and assigns raw values for the parameter. Its
    ///   [ParameterSetter::value_type] is the type of value the parameter accepts. If the parameter
    ///   accepts multiple values, this is the type of each individually.
    /// * `description` - used in generated help.
    ///
    /// No validation is performed, see [crate::builder::ParameterBuilder] for that.
    pub fn new(
        kind: ParameterKind,
        declaring_type: TypeKey,
        property_name: impl Into<String>,
        name: impl Into<String>,
        setter: ParameterSetter,
        description: Option<String>,
    ) -> Self {
        Self {
            kind,
            declaring_type,
            property_name: property_name.into(),
            name: name.into(),
            setter,
            description,
        }
    }

    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// The type that declares the target property.
    pub fn declaring_type(&self) -> TypeKey {
        self.declaring_type
    }

    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn setter(&self) -> &ParameterSetter {
        &self.setter
    }

    /// The type each raw value is converted to, as declared by the setter.
    pub fn value_type(&self) -> TypeKey {
        self.setter.value_type()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Converts `values` and assigns them into `context`, passing every raw value to the setter in
    /// the order given.
    pub fn assign(
        &self,
        context: &mut CommandContext,
        values: &[&str],
        converters: &ConverterRegistry,
    ) -> Result<(), ConversionError> {
        self.setter.invoke(context, values, converters)
    }

    /// Compares against a value of any type. Only a [CommandParameter] can be equal.
    pub fn eq_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<CommandParameter>()
            .is_some_and(|other| self == other)
    }
}

impl PartialEq for CommandParameter {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.declaring_type == other.declaring_type
            && self.property_name == other.property_name
            && self.name == other.name
    }
}

impl Eq for CommandParameter {}

impl std::hash::Hash for CommandParameter {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.declaring_type.hash(state);
        self.property_name.hash(state);
    }
}

impl std::fmt::Display for CommandParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl std::fmt::Debug for CommandParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandParameter")
            .field("kind", &self.kind)
            .field("declaring_type", &self.declaring_type)
            .field("property_name", &self.property_name)
            .field("name", &self.name)
            .field("value_type", &self.setter.value_type())
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
