//! Model of a single command-line parameter (argument or option): its identity, the type of value
//! it accepts, and the setter that converts raw string tokens into that type and writes them into
//! a [context::CommandContext].

pub mod builder;
pub mod context;
pub mod converter;
pub mod error;
pub mod metadata;
pub mod parameter;
pub mod paramset;
#[cfg(test)]
mod testutil;
pub mod valuetype;

pub use builder::ParameterBuilder;
pub use context::CommandContext;
pub use converter::{Converter, ConverterRegistry};
pub use error::{ConversionError, DeclarationError};
pub use metadata::ParameterMetadata;
pub use parameter::{CommandParameter, ParameterKind, ParameterSetter};
pub use paramset::ParameterSet;
pub use valuetype::TypeKey;
