use crate::aa::{AAFramework, LabelType};
use crate::semantics::complete_semantics_solver::complete_extension_bitsets;
use crate::semantics::index::AttackIndex;
use crate::semantics::{ExtensionsComputer, ExtensionsResult};
use anyhow::Result;

/// A powerset enumeration solver for the grounded semantics.
///
/// The grounded extensions are the complete extensions of minimal cardinality.
/// Classical theory guarantees a unique grounded extension for finite
/// well-formed frameworks; this solver returns the family of
/// minimum-cardinality complete extensions without asserting uniqueness.
///
/// # Example
///
/// ```
/// # use dungraph::aa::{AAFramework, ArgumentSet};
/// # use dungraph::semantics::{ExtensionsComputer, GroundedSemanticsSolver};
/// let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
/// let af = AAFramework::new(arguments, &[("a", "b"), ("b", "a")]);
/// let result = GroundedSemanticsSolver::new(&af).compute_extensions().unwrap();
/// assert_eq!(1, result.len());
/// assert!(result.extensions()[0].is_empty());
/// ```
pub struct GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the grounded semantics of the provided framework.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<'a, T> ExtensionsComputer<'a, T> for GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    fn compute_extensions(&self) -> Result<ExtensionsResult<'a, T>> {
        self.af.check_well_formed()?;
        let index = AttackIndex::new(self.af);
        let complete = complete_extension_bitsets(&index);
        let grounded = match complete.iter().map(|s| s.len()).min() {
            Some(min_len) => complete
                .into_iter()
                .filter(|s| s.len() == min_len)
                .collect(),
            None => vec![],
        };
        Ok(ExtensionsResult::new(self.af, grounded))
    }
}
