use crate::aa::LabelType;
use crate::semantics::ExtensionsResult;
use anyhow::Result;

/// A trait for solvers able to compute the extension family of their semantics.
pub trait ExtensionsComputer<'a, T>
where
    T: LabelType,
{
    /// Computes the extension family of the underlying framework.
    ///
    /// An error is returned if the framework is not well-formed.
    /// A well-formed framework admitting no extension yields an empty family,
    /// not an error.
    ///
    /// Nothing is cached: each call recomputes the family from the framework.
    fn compute_extensions(&self) -> Result<ExtensionsResult<'a, T>>;
}
