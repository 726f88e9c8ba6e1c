use crate::aa::{AAFramework, Argument, LabelType};
use crate::utils::ArgumentBitSet;

/// An id-indexed view of the attack relation of a framework.
///
/// The index maps the label-level attack relation to argument ids so that the
/// enumeration layers work on [`ArgumentBitSet`] values only.
/// It is rebuilt on every solver call; nothing is cached across calls.
///
/// An attack whose endpoints do not both belong to the argument set has no id
/// representation and is left out: no subset of the universe can ever contain
/// such an endpoint, so the indexed relation is equivalent for subset
/// filtering.
/// Solvers requiring the full relation gate on
/// [`AAFramework::check_well_formed`] before building the index.
pub(crate) struct AttackIndex {
    universe_len: usize,
    attacks: Vec<(usize, usize)>,
    attackers: Vec<ArgumentBitSet>,
}

impl AttackIndex {
    pub(crate) fn new<T>(af: &AAFramework<T>) -> Self
    where
        T: LabelType,
    {
        let n = af.n_arguments();
        let args = af.argument_set();
        let mut attacks = Vec::with_capacity(af.n_attacks());
        let mut attackers = vec![ArgumentBitSet::new(n); n];
        for att in af.iter_attacks() {
            if let (Ok(from), Ok(to)) = (
                args.get_argument_index(att.attacker()),
                args.get_argument_index(att.attacked()),
            ) {
                attacks.push((from, to));
                attackers[to].insert(from);
            }
        }
        AttackIndex {
            universe_len: n,
            attacks,
            attackers,
        }
    }

    /// Returns the size of the argument universe.
    pub(crate) fn universe_len(&self) -> usize {
        self.universe_len
    }

    /// Returns the indexed attacks as (attacker, attacked) id pairs.
    pub(crate) fn attacks(&self) -> &[(usize, usize)] {
        &self.attacks
    }

    /// Returns the set of ids attacking the provided id.
    pub(crate) fn attackers_of(&self, id: usize) -> &ArgumentBitSet {
        &self.attackers[id]
    }

    /// Returns the set of ids attacked by some member of the provided set.
    pub(crate) fn attacked_by(&self, set: &ArgumentBitSet) -> ArgumentBitSet {
        let mut attacked = ArgumentBitSet::new(self.universe_len);
        for (from, to) in &self.attacks {
            if set.contains(*from) {
                attacked.insert(*to);
            }
        }
        attacked
    }
}

/// Maps a bitset back to the arguments it denotes, in id order.
pub(crate) fn arguments_of_bitset<'a, T>(
    af: &'a AAFramework<T>,
    set: &ArgumentBitSet,
) -> Vec<&'a Argument<T>>
where
    T: LabelType,
{
    set.iter()
        .map(|id| af.argument_set().get_argument_by_id(id))
        .collect()
}
