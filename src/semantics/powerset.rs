use crate::utils::ArgumentBitSet;

const WORD_BITS: usize = u64::BITS as usize;

/// An iterator over the powerset of an argument universe.
///
/// Every subset of a universe of `n` arguments is produced exactly once as an
/// [`ArgumentBitSet`], from the empty set up to the full universe, for a total
/// of `2^n` subsets.
/// The iteration is a binary counter over the bitset words.
///
/// Enumerating the powerset is the dominant cost of the whole engine: both
/// time and space are exponential in the number of arguments, and nothing is
/// memoized across calls.
/// Callers are responsible for keeping the universe small enough.
///
/// # Example
///
/// ```
/// # use dungraph::semantics::PowersetIterator;
/// assert_eq!(8, PowersetIterator::new(3).count());
/// ```
pub struct PowersetIterator {
    n_bits: usize,
    next_words: Option<Vec<u64>>,
}

impl PowersetIterator {
    /// Builds an iterator over the subsets of a universe of the provided size.
    pub fn new(n_bits: usize) -> Self {
        PowersetIterator {
            n_bits,
            next_words: Some(vec![0; n_bits.div_ceil(WORD_BITS)]),
        }
    }
}

impl Iterator for PowersetIterator {
    type Item = ArgumentBitSet;

    fn next(&mut self) -> Option<Self::Item> {
        let mut words = self.next_words.take()?;
        let result = ArgumentBitSet::from_words(words.clone(), self.n_bits);
        let mut carry = true;
        for w in words.iter_mut() {
            let (incremented, overflow) = w.overflowing_add(1);
            *w = incremented;
            carry = overflow;
            if !carry {
                break;
            }
        }
        let wrapped = carry || {
            let partial = self.n_bits % WORD_BITS;
            partial != 0 && words.last().map_or(true, |w| w >> partial != 0)
        };
        if !wrapped {
            self.next_words = Some(words);
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_powerset_of_empty_universe() {
        let subsets = PowersetIterator::new(0).collect::<Vec<_>>();
        assert_eq!(1, subsets.len());
        assert!(subsets[0].is_empty());
    }

    #[test]
    fn test_powerset_counts() {
        assert_eq!(2, PowersetIterator::new(1).count());
        assert_eq!(8, PowersetIterator::new(3).count());
        assert_eq!(1024, PowersetIterator::new(10).count());
    }

    #[test]
    fn test_powerset_bounds() {
        let subsets = PowersetIterator::new(3).collect::<Vec<_>>();
        assert!(subsets.first().unwrap().is_empty());
        assert!(subsets.last().unwrap().is_full());
    }

    #[test]
    fn test_powerset_has_no_duplicates() {
        let subsets = PowersetIterator::new(4).collect::<Vec<_>>();
        for (i, s) in subsets.iter().enumerate() {
            for other in &subsets[i + 1..] {
                assert_ne!(s, other);
            }
        }
    }

    #[test]
    fn test_powerset_word_boundary() {
        // universe sizes at and around a word boundary must not wrap early
        let mut it = PowersetIterator::new(64);
        assert!(it.next().unwrap().is_empty());
        assert!(it.next().is_some());
        let mut it = PowersetIterator::new(65);
        assert!(it.next().unwrap().is_empty());
        let singleton = it.next().unwrap();
        assert_eq!(1, singleton.len());
        assert_eq!(65, singleton.universe_len());
    }
}
