use crate::aa::{AAFramework, LabelType};
use crate::semantics::conflict_free::conflict_free_bitsets;
use crate::semantics::index::AttackIndex;
use crate::semantics::{ExtensionsComputer, ExtensionsResult};
use anyhow::Result;
use log::debug;

/// A powerset enumeration solver for the stable semantics.
///
/// A stable extension is a conflict-free set attacking every argument outside
/// itself: the union of the set with the arguments it attacks covers the whole
/// universe.
/// Filtering over the conflict-free sets is sufficient, as a set satisfying
/// this range condition is automatically admissible.
///
/// Some frameworks admit no stable extension at all; the computed family is
/// then empty.
///
/// # Example
///
/// ```
/// # use dungraph::aa::{AAFramework, ArgumentSet};
/// # use dungraph::semantics::{ExtensionsComputer, StableSemanticsSolver};
/// let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
/// let af = AAFramework::new(arguments, &[("a", "b")]);
/// let result = StableSemanticsSolver::new(&af).compute_extensions().unwrap();
/// assert_eq!(1, result.len());
/// ```
pub struct StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the stable semantics of the provided framework.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<'a, T> ExtensionsComputer<'a, T> for StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    fn compute_extensions(&self) -> Result<ExtensionsResult<'a, T>> {
        self.af.check_well_formed()?;
        let index = AttackIndex::new(self.af);
        let conflict_free = conflict_free_bitsets(&index);
        let n_conflict_free = conflict_free.len();
        let stable = conflict_free
            .into_iter()
            .filter(|s| s.union(&index.attacked_by(s)).is_full())
            .collect::<Vec<_>>();
        debug!(
            "{} stable extensions among {} conflict-free subsets",
            stable.len(),
            n_conflict_free
        );
        Ok(ExtensionsResult::new(self.af, stable))
    }
}
