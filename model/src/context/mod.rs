//! Per-invocation state that receives converted parameter values.


use std::any::Any;

use hashbrown::hash_map::EntryRef;

use crate::{error::ConversionError, valuetype::TypeKey};

/// Holds the values assigned to a command's properties, keyed by property name.
///
/// A single context is expected to have at most one writer at a time.
#[derive(Default)]
pub struct CommandContext {
    values: hashbrown::HashMap<String, Box<dyn Any + Send>>,
}

impl CommandContext {
    /// Creates a new empty [CommandContext].
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the value of a scalar property, replacing any existing value.
    pub fn set<T>(&mut self, property: &str, value: T)
    where
        T: Any + Send,
    {
        self.values.insert(property.to_string(), Box::new(value));
    }

    /// Appends `values` to the [Vec] held by a collection property, creating it if absent.
    ///
    /// Fails without modifying the property if it already holds something other than a `Vec<T>`.
    pub fn append<T>(&mut self, property: &str, values: Vec<T>) -> Result<(), ConversionError>
    where
        T: Any + Send,
    {
        match self.values.entry_ref(property) {
            EntryRef::Occupied(mut entry) => match entry.get_mut().downcast_mut::<Vec<T>>() {
                Some(existing) => {
                    existing.extend(values);
                    Ok(())
                }
                None => Err(ConversionError::PropertyType {
                    property: property.to_string(),
                    expected: TypeKey::of::<Vec<T>>(),
                }),
            },
            EntryRef::Vacant(entry) => {
                entry.insert(Box::new(values));
                Ok(())
            }
        }
    }

    /// Returns the value of the property, if it is set and is of type `T`.
    pub fn get<T>(&self, property: &str) -> Option<&T>
    where
        T: Any,
    {
        self.values
            .get(property)
            .and_then(|value| value.downcast_ref::<T>())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.values.contains_key(property)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandContext")
            .field("properties", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}
