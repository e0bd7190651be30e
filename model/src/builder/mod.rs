//! Validating construction of [CommandParameter]s.


use std::any::Any;

use crate::{
    error::DeclarationError,
    parameter::{CommandParameter, ParameterKind, ParameterSetter},
    valuetype::TypeKey,
};

/// Builds a [CommandParameter], checking its names and that it has a value binding.
pub struct ParameterBuilder {
    kind: ParameterKind,
    declaring_type: TypeKey,
    property_name: String,
    name: String,
    description: Option<String>,
    setter: Option<ParameterSetter>,
}

impl ParameterBuilder {
    pub fn new(
        kind: ParameterKind,
        declaring_type: TypeKey,
        property_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            declaring_type,
            property_name: property_name.into(),
            name: name.into(),
            description: None,
            setter: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Binds the parameter to a single value of type `T` at its property.
    pub fn scalar<T>(self) -> Self
    where
        T: Any + Send,
    {
        let setter = ParameterSetter::scalar::<T>(&self.property_name);
        self.setter(setter)
    }

    /// Binds the parameter to a `Vec<T>` at its property.
    pub fn collection<T>(self) -> Self
    where
        T: Any + Send,
    {
        let setter = ParameterSetter::collection::<T>(&self.property_name);
        self.setter(setter)
    }

    /// Binds the parameter to a custom setter. The parameter accepts the setter's value type.
    pub fn setter(mut self, setter: ParameterSetter) -> Self {
        self.setter = Some(setter);
        self
    }

    pub fn build(self) -> Result<CommandParameter, DeclarationError> {
        if !property_name_regex().is_match(&self.property_name) {
            return Err(DeclarationError::invalid_argument(format!(
                "property name {:?} on {} is not an identifier",
                self.property_name, self.declaring_type,
            )));
        }
        if self.name.is_empty() || self.name.contains(char::is_whitespace) {
            return Err(DeclarationError::invalid_argument(format!(
                "{} name {:?} for property {} must be non-empty and contain no whitespace",
                self.kind, self.name, self.property_name,
            )));
        }
        let Some(setter) = self.setter else {
            return Err(DeclarationError::invalid_argument(format!(
                "{} {} has no value binding",
                self.kind, self.name,
            )));
        };

        log::trace!(
            "Built {} {} for {}::{} accepting {}.",
            self.kind,
            self.name,
            self.declaring_type,
            self.property_name,
            setter.value_type(),
        );

        Ok(CommandParameter::new(
            self.kind,
            self.declaring_type,
            self.property_name,
            self.name,
            setter,
            self.description,
        ))
    }
}

fn property_name_regex() -> &'static lazy_regex::Regex {
    lazy_regex::regex!(r#"^[A-Za-z_][A-Za-z0-9_]*$"#)
}
