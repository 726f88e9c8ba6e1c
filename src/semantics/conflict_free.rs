use crate::aa::{AAFramework, Argument, LabelType};
use crate::semantics::index::{arguments_of_bitset, AttackIndex};
use crate::semantics::PowersetIterator;
use crate::utils::ArgumentBitSet;

/// Computes the conflict-free subsets of the argument universe of a framework.
///
/// A subset is conflict-free if and only if no attack has both its endpoints
/// inside the subset.
/// The empty set is always conflict-free, and a framework without attacks has
/// its whole powerset conflict-free.
///
/// This query does not require the framework to be well-formed: an attack
/// referencing an unknown argument can never have both endpoints inside a
/// subset of the universe, so it filters nothing out.
///
/// # Example
///
/// ```
/// # use dungraph::aa::{AAFramework, ArgumentSet};
/// # use dungraph::semantics::conflict_free_sets;
/// let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
/// let af = AAFramework::new(arguments, &[("a", "b")]);
/// // {}, {a}, {b}; not {a, b}
/// assert_eq!(3, conflict_free_sets(&af).len());
/// ```
pub fn conflict_free_sets<T>(af: &AAFramework<T>) -> Vec<Vec<&Argument<T>>>
where
    T: LabelType,
{
    let index = AttackIndex::new(af);
    conflict_free_bitsets(&index)
        .iter()
        .map(|s| arguments_of_bitset(af, s))
        .collect()
}

pub(crate) fn conflict_free_bitsets(index: &AttackIndex) -> Vec<ArgumentBitSet> {
    PowersetIterator::new(index.universe_len())
        .filter(|s| is_conflict_free(s, index))
        .collect()
}

pub(crate) fn is_conflict_free(set: &ArgumentBitSet, index: &AttackIndex) -> bool {
    index
        .attacks()
        .iter()
        .all(|(from, to)| !set.contains(*from) || !set.contains(*to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;
    use std::collections::BTreeSet;

    fn label_sets(sets: Vec<Vec<&Argument<&'static str>>>) -> BTreeSet<Vec<&'static str>> {
        sets.iter()
            .map(|s| s.iter().map(|a| *a.label()).collect())
            .collect()
    }

    #[test]
    fn test_no_attacks_yields_full_powerset() {
        let args = ArgumentSet::new_with_labels(&["x", "y"]);
        let af = AAFramework::new(args, &[]);
        let expected = BTreeSet::from([vec![], vec!["x"], vec!["y"], vec!["x", "y"]]);
        assert_eq!(expected, label_sets(conflict_free_sets(&af)));
    }

    #[test]
    fn test_chain() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let af = AAFramework::new(args, &[("a", "b"), ("b", "c")]);
        let expected = BTreeSet::from([
            vec![],
            vec!["a"],
            vec!["b"],
            vec!["c"],
            vec!["a", "c"],
        ]);
        assert_eq!(expected, label_sets(conflict_free_sets(&af)));
    }

    #[test]
    fn test_self_attacker_is_excluded() {
        let args = ArgumentSet::new_with_labels(&["a", "b"]);
        let af = AAFramework::new(args, &[("a", "a")]);
        let expected = BTreeSet::from([vec![], vec!["b"]]);
        assert_eq!(expected, label_sets(conflict_free_sets(&af)));
    }

    #[test]
    fn test_dangling_attack_filters_nothing() {
        let args = ArgumentSet::new_with_labels(&["a", "b"]);
        let af = AAFramework::new(args, &[("b", "c")]);
        assert_eq!(4, conflict_free_sets(&af).len());
    }

    #[test]
    fn test_empty_universe() {
        let args = ArgumentSet::new_with_labels(&[] as &[&str]);
        let af = AAFramework::new(args, &[]);
        let cf = conflict_free_sets(&af);
        assert_eq!(1, cf.len());
        assert!(cf[0].is_empty());
    }
}
