use crate::aa::{AAFramework, Argument, LabelType};
use crate::semantics::conflict_free::conflict_free_bitsets;
use crate::semantics::index::{arguments_of_bitset, AttackIndex};
use crate::utils::ArgumentBitSet;
use anyhow::Result;
use log::debug;

/// Returns `true` iff the provided set of defenders makes an argument acceptable.
///
/// A set `E` defends an argument if, for every attacker of the argument, some
/// member of `E` attacks that attacker.
/// An argument without attackers is acceptable with respect to any set,
/// including the empty one.
///
/// This predicate is total: labels unknown to the framework are unattacked,
/// hence acceptable.
///
/// # Example
///
/// ```
/// # use dungraph::aa::{AAFramework, ArgumentSet};
/// # use dungraph::semantics::is_acceptable;
/// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
/// let af = AAFramework::new(arguments, &[("a", "b"), ("b", "c")]);
/// assert!(is_acceptable(&af, &"a", &[]));
/// assert!(is_acceptable(&af, &"c", &["a"]));
/// assert!(!is_acceptable(&af, &"c", &[]));
/// ```
pub fn is_acceptable<T>(af: &AAFramework<T>, label: &T, defenders: &[T]) -> bool
where
    T: LabelType,
{
    af.attackers_of(label).iter().all(|&attacker| {
        af.attackers_of(attacker)
            .iter()
            .any(|defender| defenders.contains(*defender))
    })
}

/// Computes the admissible subsets of the argument universe of a framework.
///
/// A conflict-free set is admissible if it defends each of its members, that
/// is, every attacker of a member is itself attacked by some member of the
/// set.
/// The empty set is always admissible.
///
/// An error is returned if the framework is not well-formed.
///
/// # Example
///
/// ```
/// # use dungraph::aa::{AAFramework, ArgumentSet};
/// # use dungraph::semantics::admissible_sets;
/// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
/// let af = AAFramework::new(arguments, &[("a", "b"), ("b", "c")]);
/// // {}, {a}, {a, c}
/// assert_eq!(3, admissible_sets(&af).unwrap().len());
/// ```
pub fn admissible_sets<T>(af: &AAFramework<T>) -> Result<Vec<Vec<&Argument<T>>>>
where
    T: LabelType,
{
    af.check_well_formed()?;
    let index = AttackIndex::new(af);
    Ok(admissible_bitsets(&index)
        .iter()
        .map(|s| arguments_of_bitset(af, s))
        .collect())
}

pub(crate) fn admissible_bitsets(index: &AttackIndex) -> Vec<ArgumentBitSet> {
    let conflict_free = conflict_free_bitsets(index);
    let n_conflict_free = conflict_free.len();
    let admissible = conflict_free
        .into_iter()
        .filter(|s| is_admissible(s, index))
        .collect::<Vec<ArgumentBitSet>>();
    debug!(
        "{} admissible sets among {} conflict-free subsets",
        admissible.len(),
        n_conflict_free
    );
    admissible
}

pub(crate) fn is_acceptable_id(arg: usize, set: &ArgumentBitSet, index: &AttackIndex) -> bool {
    index
        .attackers_of(arg)
        .iter()
        .all(|attacker| index.attackers_of(attacker).intersects(set))
}

/// Computes the set of all arguments the provided set makes acceptable.
pub(crate) fn acceptable_arguments(set: &ArgumentBitSet, index: &AttackIndex) -> ArgumentBitSet {
    let mut acceptable = ArgumentBitSet::new(index.universe_len());
    for arg in 0..index.universe_len() {
        if is_acceptable_id(arg, set, index) {
            acceptable.insert(arg);
        }
    }
    acceptable
}

fn is_admissible(set: &ArgumentBitSet, index: &AttackIndex) -> bool {
    // gather the attackers of all members, then require each to be countered
    let mut external_attackers = ArgumentBitSet::new(index.universe_len());
    for member in set.iter() {
        external_attackers = external_attackers.union(index.attackers_of(member));
    }
    let all_countered = external_attackers
        .iter()
        .all(|attacker| index.attackers_of(attacker).intersects(set));
    all_countered
}
