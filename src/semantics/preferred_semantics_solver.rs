use crate::aa::{AAFramework, LabelType};
use crate::semantics::admissibility::admissible_bitsets;
use crate::semantics::index::AttackIndex;
use crate::semantics::{ExtensionsComputer, ExtensionsResult};
use anyhow::Result;
use log::debug;

/// A powerset enumeration solver for the preferred semantics.
///
/// A preferred extension is an admissible set which is maximal with respect to
/// set inclusion: no other admissible set strictly contains it.
/// Maximality is decided by pairwise inclusion comparison over the admissible
/// family, not by cardinality; two incomparable admissible sets of different
/// sizes may both be preferred.
///
/// # Example
///
/// ```
/// # use dungraph::aa::{AAFramework, ArgumentSet};
/// # use dungraph::semantics::{ExtensionsComputer, PreferredSemanticsSolver};
/// let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
/// let af = AAFramework::new(arguments, &[("a", "b"), ("b", "a")]);
/// let result = PreferredSemanticsSolver::new(&af).compute_extensions().unwrap();
/// assert_eq!(2, result.len());
/// ```
pub struct PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the preferred semantics of the provided framework.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<'a, T> ExtensionsComputer<'a, T> for PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    fn compute_extensions(&self) -> Result<ExtensionsResult<'a, T>> {
        self.af.check_well_formed()?;
        let index = AttackIndex::new(self.af);
        let admissible = admissible_bitsets(&index);
        let preferred = admissible
            .iter()
            .filter(|s| {
                !admissible
                    .iter()
                    .any(|other| *s != other && s.is_subset_of(other))
            })
            .cloned()
            .collect::<Vec<_>>();
        debug!(
            "{} preferred extensions among {} admissible sets",
            preferred.len(),
            admissible.len()
        );
        Ok(ExtensionsResult::new(self.af, preferred))
    }
}
