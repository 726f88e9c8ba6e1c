use crate::aa::{AAFramework, LabelType};
use crate::semantics::admissibility::{acceptable_arguments, admissible_bitsets};
use crate::semantics::index::AttackIndex;
use crate::semantics::{ExtensionsComputer, ExtensionsResult};
use crate::utils::ArgumentBitSet;
use anyhow::Result;
use log::debug;

/// A powerset enumeration solver for the complete semantics.
///
/// A complete extension is an admissible set equal to the set of all arguments
/// it makes acceptable: it contains everything it defends and nothing it does
/// not defend.
///
/// # Example
///
/// ```
/// # use dungraph::aa::{AAFramework, ArgumentSet};
/// # use dungraph::semantics::{CompleteSemanticsSolver, ExtensionsComputer};
/// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
/// let af = AAFramework::new(arguments, &[("a", "b"), ("b", "c")]);
/// let result = CompleteSemanticsSolver::new(&af).compute_extensions().unwrap();
/// assert_eq!(1, result.len());
/// ```
pub struct CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the complete semantics of the provided framework.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

pub(crate) fn complete_extension_bitsets(index: &AttackIndex) -> Vec<ArgumentBitSet> {
    let admissible = admissible_bitsets(index);
    let n_admissible = admissible.len();
    let complete = admissible
        .into_iter()
        .filter(|s| acceptable_arguments(s, index) == *s)
        .collect::<Vec<ArgumentBitSet>>();
    debug!(
        "{} complete extensions among {} admissible sets",
        complete.len(),
        n_admissible
    );
    complete
}

impl<'a, T> ExtensionsComputer<'a, T> for CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    fn compute_extensions(&self) -> Result<ExtensionsResult<'a, T>> {
        self.af.check_well_formed()?;
        let index = AttackIndex::new(self.af);
        Ok(ExtensionsResult::new(
            self.af,
            complete_extension_bitsets(&index),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;
    use std::collections::BTreeSet;

    fn compute_label_sets(af: &AAFramework<&'static str>) -> BTreeSet<Vec<&'static str>> {
        CompleteSemanticsSolver::new(af)
            .compute_extensions()
            .unwrap()
            .extensions()
            .iter()
            .map(|e| e.iter().map(|a| *a.label()).collect())
            .collect()
    }

    #[test]
    fn test_no_attacks() {
        let args = ArgumentSet::new_with_labels(&["x", "y"]);
        let af = AAFramework::new(args, &[]);
        // the only set closed under acceptability is the full universe
        assert_eq!(
            BTreeSet::from([vec!["x", "y"]]),
            compute_label_sets(&af)
        );
    }

    #[test]
    fn test_chain() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let af = AAFramework::new(args, &[("a", "b"), ("b", "c")]);
        assert_eq!(
            BTreeSet::from([vec!["a", "c"]]),
            compute_label_sets(&af)
        );
    }

    #[test]
    fn test_mutual_attack() {
        let args = ArgumentSet::new_with_labels(&["a", "b"]);
        let af = AAFramework::new(args, &[("a", "b"), ("b", "a")]);
        assert_eq!(
            BTreeSet::from([vec![], vec!["a"], vec!["b"]]),
            compute_label_sets(&af)
        );
    }

    #[test]
    fn test_three_cycle() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let af = AAFramework::new(args, &[("a", "b"), ("b", "c"), ("c", "a")]);
        assert_eq!(BTreeSet::from([vec![]]), compute_label_sets(&af));
    }

    #[test]
    fn test_malformed_framework() {
        let args = ArgumentSet::new_with_labels(&["a", "b"]);
        let af = AAFramework::new(args, &[("a", "b"), ("b", "c")]);
        assert!(CompleteSemanticsSolver::new(&af).compute_extensions().is_err());
    }
}
