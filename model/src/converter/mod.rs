//! Registry of functions that convert raw string values into typed values, keyed by the
//! [TypeKey] of the type they produce.


use std::{any::Any, fmt::Display, marker::PhantomData, str::FromStr};

use crate::{error::ConversionError, valuetype::TypeKey};

type ConvertFn = dyn Fn(&str) -> Result<Box<dyn Any + Send>, String> + Send + Sync;

/// Mapping from value type to a conversion function for that type.
///
/// Converters are registered explicitly against the type they produce, and are looked up by exact
/// type match.
#[derive(Default)]
pub struct ConverterRegistry {
    converters: hashbrown::HashMap<TypeKey, Box<ConvertFn>>,
}

impl ConverterRegistry {
    /// Creates a new empty [ConverterRegistry].
    pub fn new() -> Self {
        Default::default()
    }

    /// Registers `convert` as the converter for values of type `T`, replacing any previous
    /// converter for `T`.
    pub fn register<T, E, F>(&mut self, convert: F)
    where
        T: Any + Send,
        E: Display + 'static,
        F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
    {
        self.converters.insert(
            TypeKey::of::<T>(),
            Box::new(move |raw: &str| match convert(raw) {
                Ok(value) => Ok(Box::new(value) as Box<dyn Any + Send>),
                Err(err) => Err(err.to_string()),
            }),
        );
    }

    /// Registers [FromStr::from_str] as the converter for values of type `T`.
    pub fn register_from_str<T>(&mut self)
    where
        T: FromStr + Any + Send,
        T::Err: Display + 'static,
    {
        self.register::<T, T::Err, _>(T::from_str);
    }

    pub fn contains(&self, value_type: &TypeKey) -> bool {
        self.converters.contains_key(value_type)
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Returns the converter for values of type `T`.
    pub fn get<T>(&self) -> Result<Converter<'_, T>, ConversionError>
    where
        T: Any,
    {
        let value_type = TypeKey::of::<T>();
        self.converters
            .get(&value_type)
            .map(|convert| Converter {
                value_type,
                convert: convert.as_ref(),
                phantom_t: PhantomData,
            })
            .ok_or(ConversionError::MissingConverter { value_type })
    }
}

/// Typed view of a single converter within a [ConverterRegistry].
pub struct Converter<'a, T> {
    value_type: TypeKey,
    convert: &'a ConvertFn,
    phantom_t: PhantomData<fn() -> T>,
}

impl<T> Converter<'_, T>
where
    T: Any,
{
    /// Converts a single raw value.
    pub fn convert(&self, raw: &str) -> Result<T, ConversionError> {
        let invalid = |reason: String| ConversionError::InvalidValue {
            raw: raw.to_string(),
            value_type: self.value_type,
            reason,
        };

        let value = (self.convert)(raw).map_err(invalid)?;
        value
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| invalid("converter produced a value of a different type".to_string()))
    }
}
