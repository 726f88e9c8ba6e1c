use crate::aa::{ArgumentSet, LabelType};
use anyhow::{anyhow, Result};
use std::collections::HashSet;

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// A framework couples an [`ArgumentSet`] with an attack relation given as
/// ordered pairs of labels.
/// Both are fixed at construction time; no attack or argument can be added or
/// removed afterwards.
///
/// The attack relation is a set: duplicate pairs are collapsed.
/// Self-attacks are permitted.
/// An attack may reference a label absent from the argument set; such a
/// framework is not well-formed, which is detected by [`check_well_formed`](Self::check_well_formed)
/// and reported by the semantics solvers rather than at construction time.
#[derive(Default)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    attacks: Vec<(T, T)>,
}

/// An attack, represented as a couple of two argument labels.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>(&'a T, &'a T)
where
    T: LabelType;

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the label of the attacker.
    pub fn attacker(&self) -> &'a T {
        self.0
    }

    /// Returns the label of the attacked argument.
    pub fn attacked(&self) -> &'a T {
        self.1
    }
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an AA framework given its argument set and its attack relation.
    ///
    /// Attacks are provided as (attacker, attacked) label pairs.
    /// Duplicate pairs are kept only once; the first occurrence gives the ordering.
    /// No check is made on the attack endpoints at this point: the framework
    /// may be built in a state where [`check_well_formed`](Self::check_well_formed) fails.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungraph::aa::{AAFramework, ArgumentSet};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let af = AAFramework::new(arguments, &[("a", "b"), ("b", "c")]);
    /// assert_eq!(3, af.n_arguments());
    /// assert_eq!(2, af.n_attacks());
    /// ```
    pub fn new(arguments: ArgumentSet<T>, attacks: &[(T, T)]) -> Self {
        let mut seen = HashSet::with_capacity(attacks.len());
        let mut deduped = Vec::with_capacity(attacks.len());
        for att in attacks {
            if seen.insert(att.clone()) {
                deduped.push(att.clone());
            }
        }
        deduped.shrink_to_fit();
        AAFramework {
            arguments,
            attacks: deduped,
        }
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Provides an iterator to the attacks.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungraph::aa::{AAFramework, ArgumentSet};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
    /// let af = AAFramework::new(arguments, &[("a", "b")]);
    /// let attack = af.iter_attacks().next().unwrap();
    /// assert_eq!(&"a", attack.attacker());
    /// assert_eq!(&"b", attack.attacked());
    /// ```
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks.iter().map(|(a, b)| Attack(a, b))
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of attacks in this framework.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len()
    }

    /// Checks that this framework is well-formed.
    ///
    /// A framework is well-formed if and only if its argument set is non-empty
    /// and both endpoints of every attack belong to the argument set.
    /// Every attack is inspected; the check stops early only when a violating
    /// attack is found.
    ///
    /// An error describing the first violation is returned for a framework
    /// which is not well-formed.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungraph::aa::{AAFramework, ArgumentSet};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
    /// let af = AAFramework::new(arguments, &[("a", "b"), ("b", "c")]);
    /// assert!(af.check_well_formed().is_err());
    /// ```
    pub fn check_well_formed(&self) -> Result<()> {
        if self.arguments.is_empty() {
            return Err(anyhow!("malformed framework: the argument set is empty"));
        }
        for (attacker, attacked) in &self.attacks {
            if !self.arguments.contains_label(attacker) || !self.arguments.contains_label(attacked)
            {
                return Err(anyhow!(
                    "malformed framework: attack ({}, {}) references an unknown argument",
                    attacker,
                    attacked
                ));
            }
        }
        Ok(())
    }

    /// Returns `true` iff this framework is well-formed.
    ///
    /// See [`check_well_formed`](Self::check_well_formed) for the definition.
    pub fn is_well_formed(&self) -> bool {
        self.check_well_formed().is_ok()
    }

    /// Returns `true` iff some attack targets the provided label.
    ///
    /// This query is total: a label absent from the framework is simply not attacked.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungraph::aa::{AAFramework, ArgumentSet};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
    /// let af = AAFramework::new(arguments, &[("a", "b")]);
    /// assert!(af.is_attacked(&"b"));
    /// assert!(!af.is_attacked(&"a"));
    /// assert!(!af.is_attacked(&"z"));
    /// ```
    pub fn is_attacked(&self, label: &T) -> bool {
        self.attacks.iter().any(|(_, attacked)| attacked == label)
    }

    /// Returns the labels of the arguments attacking the provided label.
    ///
    /// This query is total: the empty set is returned for a label no attack targets.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungraph::aa::{AAFramework, ArgumentSet};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let af = AAFramework::new(arguments, &[("a", "c"), ("b", "c")]);
    /// assert_eq!(2, af.attackers_of(&"c").len());
    /// assert!(af.attackers_of(&"a").is_empty());
    /// ```
    pub fn attackers_of(&self, label: &T) -> HashSet<&T> {
        self.attacks
            .iter()
            .filter_map(|(attacker, attacked)| (attacked == label).then_some(attacker))
            .collect()
    }

    /// Returns the labels of the arguments attacked by some member of the provided set.
    ///
    /// This query is total: members absent from the framework attack nothing.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungraph::aa::{AAFramework, ArgumentSet};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let af = AAFramework::new(arguments, &[("a", "b"), ("b", "c")]);
    /// let attacked = af.attacked_by(&["a", "b"]);
    /// assert_eq!(2, attacked.len());
    /// ```
    pub fn attacked_by(&self, set: &[T]) -> HashSet<&T> {
        self.attacks
            .iter()
            .filter_map(|(attacker, attacked)| set.contains(attacker).then_some(attacked))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_af() -> AAFramework<&'static str> {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        AAFramework::new(args, &[("a", "b"), ("b", "c")])
    }

    #[test]
    fn test_n_args_and_attacks() {
        let af = chain_af();
        assert_eq!(3, af.n_arguments());
        assert_eq!(2, af.n_attacks());
    }

    #[test]
    fn test_duplicate_attacks_are_collapsed() {
        let args = ArgumentSet::new_with_labels(&["a", "b"]);
        let af = AAFramework::new(args, &[("a", "b"), ("a", "b"), ("a", "b")]);
        assert_eq!(1, af.n_attacks());
    }

    #[test]
    fn test_self_attack_is_permitted() {
        let args = ArgumentSet::new_with_labels(&["a"]);
        let af = AAFramework::new(args, &[("a", "a")]);
        assert_eq!(1, af.n_attacks());
        assert!(af.is_well_formed());
    }

    #[test]
    fn test_well_formed_ok() {
        assert!(chain_af().check_well_formed().is_ok());
    }

    #[test]
    fn test_well_formed_no_attacks() {
        let args = ArgumentSet::new_with_labels(&["a", "b"]);
        let af = AAFramework::new(args, &[]);
        assert!(af.is_well_formed());
    }

    #[test]
    fn test_well_formed_empty_argument_set() {
        let args = ArgumentSet::new_with_labels(&[] as &[&str]);
        let af = AAFramework::new(args, &[]);
        assert!(!af.is_well_formed());
    }

    #[test]
    fn test_well_formed_checks_all_attacks() {
        // the dangling relation must be caught whatever its position
        let args = ArgumentSet::new_with_labels(&["a", "b"]);
        let af = AAFramework::new(args, &[("a", "b"), ("b", "c")]);
        assert!(!af.is_well_formed());
        let args = ArgumentSet::new_with_labels(&["a", "b"]);
        let af = AAFramework::new(args, &[("b", "c"), ("a", "b")]);
        assert!(!af.is_well_formed());
    }

    #[test]
    fn test_well_formed_unknown_attacker() {
        let args = ArgumentSet::new_with_labels(&["a", "b"]);
        let af = AAFramework::new(args, &[("c", "a")]);
        assert!(af.check_well_formed().is_err());
    }

    #[test]
    fn test_is_attacked() {
        let af = chain_af();
        assert!(!af.is_attacked(&"a"));
        assert!(af.is_attacked(&"b"));
        assert!(af.is_attacked(&"c"));
        assert!(!af.is_attacked(&"z"));
    }

    #[test]
    fn test_attackers_of() {
        let af = chain_af();
        assert!(af.attackers_of(&"a").is_empty());
        assert_eq!(HashSet::from([&"a"]), af.attackers_of(&"b"));
        assert_eq!(HashSet::from([&"b"]), af.attackers_of(&"c"));
        assert!(af.attackers_of(&"z").is_empty());
    }

    #[test]
    fn test_attacked_by() {
        let af = chain_af();
        assert!(af.attacked_by(&[]).is_empty());
        assert_eq!(HashSet::from([&"b"]), af.attacked_by(&["a"]));
        assert_eq!(HashSet::from([&"b", &"c"]), af.attacked_by(&["a", "b"]));
        assert!(af.attacked_by(&["z"]).is_empty());
    }
}
