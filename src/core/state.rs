//! State identities and the naming scopes that mint them.
//!
//! Generated programs contain hundreds of states. Instead of formatting names
//! by hand, every generator opens a child [`Scope`] and asks it for states; the
//! shared [`StateNames`] arena guarantees that no two states ever receive the
//! same name, however deeply generators nest.

use super::config::MachineConfig;
use super::symbol::Alphabet;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Separator between the segments of a hierarchical state name.
pub const PATH_SEPARATOR: char = '.';

/// Opaque handle to a state in a [`StateNames`] arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct StateId(u32);

impl StateId {
    /// Index of the state in its arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Arena of interned state names.
///
/// The three distinguished states always occupy the first three slots, so
/// their ids are the same in every arena.
#[derive(Clone, Debug)]
pub struct StateNames {
    names: Vec<String>,
    ids: HashMap<String, StateId>,
    scopes: HashSet<String>,
}

impl StateNames {
    pub const INITIAL: StateId = StateId(0);
    pub const ACCEPT: StateId = StateId(1);
    pub const REJECT: StateId = StateId(2);

    /// Create an arena holding only the special states named by `config`.
    ///
    /// The config is expected to have passed [`MachineConfig::validate`], so
    /// the three names are distinct.
    pub fn new(config: &MachineConfig) -> Self {
        let mut names = Self {
            names: Vec::new(),
            ids: HashMap::new(),
            scopes: HashSet::new(),
        };
        names.insert(config.initial_state.clone());
        names.insert(config.accept_state.clone());
        names.insert(config.reject_state.clone());
        names
    }

    /// Name of a state. Ids from another arena yield `"?"`.
    pub fn name(&self, id: StateId) -> &str {
        self.names.get(id.index()).map_or("?", String::as_str)
    }

    /// Look up a state by its full name.
    pub fn get(&self, name: &str) -> Option<StateId> {
        self.ids.get(name).copied()
    }

    /// Return the state called `name`, creating it if needed.
    ///
    /// Used for hand-written tables and for restoring runs by name. Unlike
    /// [`Scope::state`] this never renames: equal names mean equal states.
    pub fn intern(&mut self, name: &str) -> StateId {
        match self.get(name) {
            Some(id) => id,
            None => self.insert(name.to_string()),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether the state ends a run.
    pub fn is_terminal(&self, id: StateId) -> bool {
        id == Self::ACCEPT || id == Self::REJECT
    }

    pub fn iter(&self) -> impl Iterator<Item = (StateId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (StateId(i as u32), name.as_str()))
    }

    /// Top-level scope; names minted here carry no prefix.
    pub fn root<'a>(&'a mut self, alphabet: &'a Alphabet) -> Scope<'a> {
        Scope {
            names: self,
            alphabet,
            path: String::new(),
        }
    }

    fn is_claimed(&self, name: &str) -> bool {
        self.ids.contains_key(name) || self.scopes.contains(name)
    }

    /// First free variant of `base`: `base`, then `base#2`, `base#3`, ...
    fn unclaimed(&self, base: String) -> String {
        let mut candidate = base.clone();
        let mut ordinal = 2;
        while self.is_claimed(&candidate) {
            candidate = format!("{base}#{ordinal}");
            ordinal += 1;
        }
        candidate
    }

    fn insert(&mut self, name: String) -> StateId {
        let id = StateId(self.names.len() as u32);
        self.ids.insert(name.clone(), id);
        self.names.push(name);
        id
    }

    fn mint(&mut self, base: String) -> StateId {
        let name = self.unclaimed(base);
        self.insert(name)
    }

    fn reserve_scope(&mut self, base: String) -> String {
        let path = self.unclaimed(base);
        self.scopes.insert(path.clone());
        path
    }
}

/// A naming scope handed to generators.
///
/// Every state minted through a scope is prefixed with the scope's path, and
/// every child scope receives a path no other scope or state holds, so two
/// invocations of the same generator can never collide.
pub struct Scope<'a> {
    names: &'a mut StateNames,
    alphabet: &'a Alphabet,
    path: String,
}

impl<'a> Scope<'a> {
    pub fn alphabet(&self) -> Alphabet {
        *self.alphabet
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn initial(&self) -> StateId {
        StateNames::INITIAL
    }

    pub fn accept(&self) -> StateId {
        StateNames::ACCEPT
    }

    pub fn reject(&self) -> StateId {
        StateNames::REJECT
    }

    /// Mint a fresh state labelled `label` inside this scope.
    pub fn state(&mut self, label: &str) -> StateId {
        let base = self.qualify(label);
        self.names.mint(base)
    }

    /// Mint a fresh state labelled `label` followed by `index`.
    pub fn indexed(&mut self, label: &str, index: usize) -> StateId {
        self.state(&format!("{label}{index}"))
    }

    /// Open a nested scope.
    pub fn child(&mut self, label: &str) -> Scope<'_> {
        let base = self.qualify(label);
        let path = self.names.reserve_scope(base);
        Scope {
            names: &mut *self.names,
            alphabet: self.alphabet,
            path,
        }
    }

    /// Full name of a state, for diagnostics.
    pub fn name(&self, id: StateId) -> &str {
        self.names.name(id)
    }

    fn qualify(&self, label: &str) -> String {
        if self.path.is_empty() {
            label.to_string()
        } else {
            format!("{}{}{}", self.path, PATH_SEPARATOR, label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> StateNames {
        StateNames::new(&MachineConfig::default())
    }

    #[test]
    fn special_states_occupy_fixed_slots() {
        let names = arena();

        assert_eq!(names.name(StateNames::INITIAL), "initial_state");
        assert_eq!(names.name(StateNames::ACCEPT), "YES");
        assert_eq!(names.name(StateNames::REJECT), "NO");
        assert_eq!(names.len(), 3);
        assert!(names.is_terminal(StateNames::ACCEPT));
        assert!(names.is_terminal(StateNames::REJECT));
        assert!(!names.is_terminal(StateNames::INITIAL));
    }

    #[test]
    fn scopes_prefix_state_names() {
        let mut names = arena();
        let alphabet = Alphabet::default();
        let mut root = names.root(&alphabet);
        let mut merge = root.child("merge");
        let mut copy = merge.child("copy");
        let lift = copy.indexed("lift", 2);

        assert_eq!(copy.name(lift), "merge.copy.lift2");
    }

    #[test]
    fn repeated_labels_never_collide() {
        let mut names = arena();
        let alphabet = Alphabet::default();
        let mut root = names.root(&alphabet);

        let first = {
            let mut scope = root.child("scan");
            scope.state("blank1")
        };
        let second = {
            let mut scope = root.child("scan");
            scope.state("blank1")
        };
        let again = root.state("probe");
        let clash = root.state("probe");

        assert_ne!(first, second);
        assert_eq!(root.name(first), "scan.blank1");
        assert_eq!(root.name(second), "scan#2.blank1");
        assert_eq!(root.name(clash), "probe#2");
        assert_ne!(again, clash);
    }

    #[test]
    fn minting_never_shadows_special_states() {
        let mut names = arena();
        let alphabet = Alphabet::default();
        let mut root = names.root(&alphabet);
        let yes = root.state("YES");

        assert_ne!(yes, StateNames::ACCEPT);
        assert_eq!(root.name(yes), "YES#2");
    }

    #[test]
    fn intern_reuses_existing_names() {
        let mut names = arena();
        let foo = names.intern("foo");

        assert_eq!(names.intern("foo"), foo);
        assert_eq!(names.intern("YES"), StateNames::ACCEPT);
        assert_eq!(names.get("foo"), Some(foo));
        assert_eq!(names.get("bar"), None);
    }

    #[test]
    fn unknown_ids_render_placeholder() {
        let names = arena();
        assert_eq!(names.name(StateId(99)), "?");
    }
}
