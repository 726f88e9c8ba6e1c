use crate::aa::{AAFramework, Argument, LabelType};
use crate::semantics::index::arguments_of_bitset;
use crate::utils::ArgumentBitSet;

/// The extension family computed by a solver, with its acceptance queries.
///
/// A result is an immutable value object built once per solver call; it
/// borrows its framework for label recovery and holds the family as bitsets.
/// Equal subsets never appear twice in a family, and the family may be empty
/// (a well-formed framework may admit no extension under some semantics).
pub struct ExtensionsResult<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    extensions: Vec<ArgumentBitSet>,
}

impl<'a, T> ExtensionsResult<'a, T>
where
    T: LabelType,
{
    pub(crate) fn new(af: &'a AAFramework<T>, extensions: Vec<ArgumentBitSet>) -> Self {
        ExtensionsResult { af, extensions }
    }

    /// Returns the extensions of the family, each as a vector of arguments in id order.
    pub fn extensions(&self) -> Vec<Vec<&'a Argument<T>>> {
        self.extensions
            .iter()
            .map(|s| arguments_of_bitset(self.af, s))
            .collect()
    }

    /// Returns the number of extensions in the family.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Returns `true` iff the family has no extension.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Returns the arguments belonging to every extension of the family.
    ///
    /// An empty family skeptically accepts nothing.
    pub fn skeptically_accepted(&self) -> Vec<&'a Argument<T>> {
        if self.extensions.is_empty() {
            return vec![];
        }
        self.universe_filter(|id| self.extensions.iter().all(|e| e.contains(id)))
    }

    /// Returns the arguments belonging to at least one extension of the family.
    pub fn credulously_accepted(&self) -> Vec<&'a Argument<T>> {
        self.universe_filter(|id| self.extensions.iter().any(|e| e.contains(id)))
    }

    /// Returns the arguments belonging to no extension of the family.
    ///
    /// This is the complement of [`credulously_accepted`](Self::credulously_accepted)
    /// within the argument universe; in particular an empty family rejects
    /// every argument.
    pub fn rejected(&self) -> Vec<&'a Argument<T>> {
        self.universe_filter(|id| !self.extensions.iter().any(|e| e.contains(id)))
    }

    fn universe_filter(&self, predicate: impl Fn(usize) -> bool) -> Vec<&'a Argument<T>> {
        self.af
            .argument_set()
            .iter()
            .filter(|a| predicate(a.id()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn labels_of(args: Vec<&Argument<&'static str>>) -> Vec<&'static str> {
        args.iter().map(|a| *a.label()).collect()
    }

    fn singleton(n: usize, id: usize) -> ArgumentBitSet {
        let mut s = ArgumentBitSet::new(n);
        s.insert(id);
        s
    }

    #[test]
    fn test_empty_family() {
        let args = ArgumentSet::new_with_labels(&["a", "b"]);
        let af = AAFramework::new(args, &[]);
        let result = ExtensionsResult::new(&af, vec![]);
        assert!(result.is_empty());
        assert_eq!(0, result.len());
        assert!(result.skeptically_accepted().is_empty());
        assert!(result.credulously_accepted().is_empty());
        assert_eq!(vec!["a", "b"], labels_of(result.rejected()));
    }

    #[test]
    fn test_single_extension() {
        let args = ArgumentSet::new_with_labels(&["a", "b"]);
        let af = AAFramework::new(args, &[]);
        let result = ExtensionsResult::new(&af, vec![singleton(2, 0)]);
        assert_eq!(1, result.len());
        assert_eq!(vec![vec!["a"]], {
            result
                .extensions()
                .into_iter()
                .map(labels_of)
                .collect::<Vec<_>>()
        });
        assert_eq!(vec!["a"], labels_of(result.skeptically_accepted()));
        assert_eq!(vec!["a"], labels_of(result.credulously_accepted()));
        assert_eq!(vec!["b"], labels_of(result.rejected()));
    }

    #[test]
    fn test_multiple_extensions() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let af = AAFramework::new(args, &[]);
        let mut common = singleton(3, 2);
        common.insert(0);
        let result = ExtensionsResult::new(&af, vec![common, singleton(3, 2)]);
        assert_eq!(vec!["c"], labels_of(result.skeptically_accepted()));
        assert_eq!(vec!["a", "c"], labels_of(result.credulously_accepted()));
        // "a" is outside one extension but inside another: not rejected
        assert_eq!(vec!["b"], labels_of(result.rejected()));
    }
}
