//! Collections of [CommandParameter]s belonging to a single command.


use hashbrown::HashSet;

use crate::{
    error::DeclarationError,
    parameter::{CommandParameter, ParameterKind},
};

/// The parameters of a command, in declaration order.
///
/// Rejects parameters that are equal to one already present, and parameters of the same kind
/// whose display name is already in use by a different parameter.
#[derive(Clone, Debug, Default)]
pub struct ParameterSet {
    params: Vec<CommandParameter>,
    index: HashSet<CommandParameter>,
}

impl ParameterSet {
    /// Creates a new empty [ParameterSet].
    pub fn new() -> Self {
        Default::default()
    }

    pub fn insert(&mut self, param: CommandParameter) -> Result<(), DeclarationError> {
        if self.index.contains(&param) {
            log::debug!("Rejected duplicate parameter {param:?}.");
            return Err(DeclarationError::Duplicate {
                name: param.to_string(),
            });
        }

        if let Some(existing) = self
            .params
            .iter()
            .find(|existing| existing.kind() == param.kind() && existing.name() == param.name())
        {
            log::debug!("Rejected parameter {param:?} conflicting with {existing:?}.");
            return Err(DeclarationError::NameConflict {
                kind: param.kind(),
                name: param.to_string(),
                existing: qualified_property(existing),
                conflicting: qualified_property(&param),
            });
        }

        self.index.insert(param.clone());
        self.params.push(param);
        Ok(())
    }

    /// Adds the parameters of a parent command. Parameters already present are skipped.
    ///
    /// Either every parent parameter is merged, or the set is left unchanged.
    pub fn inherit(&mut self, parent: &ParameterSet) -> Result<(), DeclarationError> {
        let mut merged = self.clone();
        for param in parent.iter() {
            if merged.contains(param) {
                log::trace!("Parameter {param} already present, not inheriting.");
                continue;
            }
            merged.insert(param.clone())?;
        }
        *self = merged;
        Ok(())
    }

    pub fn contains(&self, param: &CommandParameter) -> bool {
        self.index.contains(param)
    }

    /// Returns the parameter of the given kind with the given display name.
    pub fn get(&self, kind: ParameterKind, name: &str) -> Option<&CommandParameter> {
        self.params
            .iter()
            .find(|param| param.kind() == kind && param.name() == name)
    }

    /// Returns an [Iterator] over the parameters in the order they were inserted.
    pub fn iter(&self) -> impl Iterator<Item = &CommandParameter> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

fn qualified_property(param: &CommandParameter) -> String {
    format!("{}::{}", param.declaring_type(), param.property_name())
}
