//! Setters that convert raw values and assign them into a [CommandContext].


use std::{any::Any, sync::Arc};

use crate::{
    context::CommandContext, converter::ConverterRegistry, error::ConversionError,
    valuetype::TypeKey,
};

type SetterFn = dyn Fn(&mut CommandContext, &[&str], &ConverterRegistry) -> Result<(), ConversionError>
    + Send
    + Sync;

/// Converts the raw values for a parameter and assigns the result into a [CommandContext].
///
/// A setter must consume every raw value it is given or fail, and must leave the context
/// untouched when it fails. It must not depend on any state other than its arguments.
#[derive(Clone)]
pub struct ParameterSetter {
    value_type: TypeKey,
    set: Arc<SetterFn>,
}

impl ParameterSetter {
    /// Wraps a custom setter that converts raw values to `value_type`.
    pub fn new<F>(value_type: TypeKey, setter: F) -> Self
    where
        F: Fn(&mut CommandContext, &[&str], &ConverterRegistry) -> Result<(), ConversionError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            value_type,
            set: Arc::new(setter),
        }
    }

    /// Setter that converts exactly one raw value to `T` and sets it as the value of `property`.
    pub fn scalar<T>(property: impl Into<String>) -> Self
    where
        T: Any + Send,
    {
        let property = property.into();
        Self::new(TypeKey::of::<T>(), move |context, values, converters| {
            let converter = converters.get::<T>()?;
            let [raw] = values else {
                return Err(ConversionError::ValueCount {
                    property: property.clone(),
                    expected: 1,
                    actual: values.len(),
                });
            };
            let value = converter.convert(raw)?;
            context.set(&property, value);
            Ok(())
        })
    }

    /// Setter that converts every raw value to `T` and appends them, in order, to the `Vec<T>` at
    /// `property`. Nothing is appended unless all values convert.
    pub fn collection<T>(property: impl Into<String>) -> Self
    where
        T: Any + Send,
    {
        let property = property.into();
        Self::new(TypeKey::of::<T>(), move |context, values, converters| {
            let converter = converters.get::<T>()?;
            let converted = values
                .iter()
                .map(|raw| converter.convert(raw))
                .collect::<Result<Vec<T>, _>>()?;
            context.append(&property, converted)
        })
    }

    pub fn invoke(
        &self,
        context: &mut CommandContext,
        values: &[&str],
        converters: &ConverterRegistry,
    ) -> Result<(), ConversionError> {
        (self.set)(context, values, converters)
    }

    /// The type that each raw value is converted to.
    pub fn value_type(&self) -> TypeKey {
        self.value_type
    }
}

impl std::fmt::Debug for ParameterSetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParameterSetter")
            .field("value_type", &self.value_type)
            .finish_non_exhaustive()
    }
}
