//! Builder for assembling and freezing transition tables.

use crate::core::{
    ConfigError, Direction, MachineConfig, Scope, StateNames, StateTransition, Symbol,
};
use crate::table::error::TableError;
use crate::table::validate::validate;
use crate::table::wildcard;
use crate::table::TransitionTable;
use std::collections::HashMap;
use std::sync::Arc;
use stillwater::validation::Validation;
use tracing::debug;

/// Collects transitions from generators and turns them into a validated
/// [`TransitionTable`].
///
/// # Example
///
/// ```rust
/// use tape_machine::core::{Direction, MachineConfig};
/// use tape_machine::table::TableBuilder;
///
/// let mut builder = TableBuilder::new(MachineConfig::default()).unwrap();
/// builder
///     .rule("initial_state", '0', "YES", '0', Direction::Stay)
///     .rule("initial_state", '1', "NO", '1', Direction::Stay);
/// let table = builder.build().unwrap();
///
/// assert_eq!(table.len(), 2);
/// ```
pub struct TableBuilder {
    config: Arc<MachineConfig>,
    names: StateNames,
    transitions: Vec<StateTransition>,
}

impl TableBuilder {
    /// Create a builder for machines described by `config`.
    pub fn new(config: MachineConfig) -> Result<Self, ConfigError> {
        Self::shared(Arc::new(config))
    }

    /// Create a builder that shares an existing configuration.
    pub fn shared(config: Arc<MachineConfig>) -> Result<Self, ConfigError> {
        config.validate()?;
        let names = StateNames::new(&config);
        Ok(Self {
            config,
            names,
            transitions: Vec::new(),
        })
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Root naming scope for generators.
    pub fn scope(&mut self) -> Scope<'_> {
        self.names.root(&self.config.alphabet)
    }

    /// Add one transition.
    pub fn push(&mut self, transition: StateTransition) -> &mut Self {
        self.transitions.push(transition);
        self
    }

    /// Add a generated fragment.
    pub fn extend(&mut self, transitions: impl IntoIterator<Item = StateTransition>) -> &mut Self {
        self.transitions.extend(transitions);
        self
    }

    /// Add a hand-written transition, naming states directly.
    ///
    /// Names are interned as given, without scoping.
    pub fn rule(
        &mut self,
        from_state: &str,
        from_symbol: char,
        to_state: &str,
        to_symbol: char,
        direction: Direction,
    ) -> &mut Self {
        let from = self.names.intern(from_state);
        let to = self.names.intern(to_state);
        self.push(StateTransition::new(
            from,
            Symbol::new(from_symbol),
            to,
            Symbol::new(to_symbol),
            direction,
        ))
    }

    /// Expand wildcards, validate once and freeze the table.
    pub fn build(self) -> Result<TransitionTable, TableError> {
        let transitions = wildcard::expand(self.transitions, &self.config.alphabet);

        if let Validation::Failure(problems) = validate(&transitions, &self.names, &self.config) {
            let problems: Vec<_> = problems.iter().cloned().collect();
            debug!(problems = problems.len(), "transition table rejected");
            return Err(TableError::new(problems));
        }

        let lookup: HashMap<_, _> = transitions.iter().map(|t| (t.key(), *t)).collect();
        debug!(
            states = self.names.len(),
            transitions = transitions.len(),
            "built transition table"
        );

        Ok(TransitionTable {
            config: self.config,
            names: self.names,
            transitions,
            lookup,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::BuildError;

    #[test]
    fn builder_rejects_invalid_config() {
        let config = MachineConfig {
            accept_state: "NO".to_string(),
            ..MachineConfig::default()
        };

        assert!(matches!(
            TableBuilder::new(config),
            Err(ConfigError::DuplicateStateName { .. })
        ));
    }

    #[test]
    fn rule_interns_special_names() {
        let mut builder = TableBuilder::new(MachineConfig::default()).unwrap();
        builder.rule("initial_state", ' ', "NO", ' ', Direction::Forward);
        let table = builder.build().unwrap();

        let transition = table
            .get(StateNames::INITIAL, Symbol::new(' '))
            .copied()
            .unwrap();
        assert_eq!(transition.to_state, StateNames::REJECT);
    }

    #[test]
    fn duplicate_rules_fail_to_build() {
        let mut builder = TableBuilder::new(MachineConfig::default()).unwrap();
        builder
            .rule("foo", '0', "bar", '0', Direction::Forward)
            .rule("foo", '0', "bar", '0', Direction::Forward);

        let error = builder.build().unwrap_err();

        assert!(matches!(
            error.problems(),
            [BuildError::DuplicateTransition { .. }]
        ));
    }

    #[test]
    fn invalid_symbol_fails_to_build() {
        let mut builder = TableBuilder::new(MachineConfig::default()).unwrap();
        builder.rule("foo", '7', "bar", '0', Direction::Forward);

        let error = builder.build().unwrap_err();

        assert!(matches!(
            error.problems(),
            [BuildError::InvalidSymbol { symbol: '7', .. }]
        ));
    }

    #[test]
    fn wildcards_are_expanded_before_validation() {
        let mut builder = TableBuilder::new(MachineConfig::default()).unwrap();
        builder
            .rule("initial_state", ' ', "NO", ' ', Direction::Forward)
            .rule("initial_state", '*', "YES", '*', Direction::Forward);
        let table = builder.build().unwrap();

        assert_eq!(table.len(), 3);
        assert!(table
            .iter()
            .all(|t| t.from_symbol != Symbol::new('*') && t.to_symbol != Symbol::new('*')));
    }

    #[test]
    fn two_wildcards_in_one_state_collide() {
        let mut builder = TableBuilder::new(MachineConfig::default()).unwrap();
        builder
            .rule("foo", '*', "YES", '*', Direction::Forward)
            .rule("foo", '*', "NO", '*', Direction::Forward);

        let error = builder.build().unwrap_err();

        assert_eq!(error.problems().len(), 3);
    }
}
