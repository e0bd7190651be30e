use crate::{
    converter::ConverterRegistry,
    parameter::{CommandParameter, ParameterKind, ParameterSetter},
    valuetype::TypeKey,
};

/// Stand-in for a type that declares command properties.
pub enum DeployCommand {}

/// Second declaring type, distinct from [DeployCommand].
pub enum BuildCommand {}

pub fn int_registry() -> ConverterRegistry {
    let mut registry = ConverterRegistry::new();
    registry.register_from_str::<i64>();
    registry
}

/// Scalar `i64` parameter.
pub fn scalar_param<Owner>(kind: ParameterKind, property: &str, name: &str) -> CommandParameter
where
    Owner: 'static,
{
    CommandParameter::new(
        kind,
        TypeKey::of::<Owner>(),
        property,
        name,
        ParameterSetter::scalar::<i64>(property),
        None,
    )
}

/// Collection `i64` parameter.
pub fn collection_param<Owner>(kind: ParameterKind, property: &str, name: &str) -> CommandParameter
where
    Owner: 'static,
{
    CommandParameter::new(
        kind,
        TypeKey::of::<Owner>(),
        property,
        name,
        ParameterSetter::collection::<i64>(property),
        None,
    )
}
