const WORD_BITS: usize = u64::BITS as usize;

/// A fixed-width bitset over argument ids.
///
/// Argument subsets are represented with one bit per argument of the universe,
/// making membership, union and intersection tests word-wise operations.
/// The width is fixed at construction time to the size of the argument
/// universe; ids at or beyond this width are rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArgumentBitSet {
    words: Vec<u64>,
    n_bits: usize,
}

impl ArgumentBitSet {
    /// Builds an empty set over a universe of the provided size.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungraph::utils::ArgumentBitSet;
    /// let set = ArgumentBitSet::new(3);
    /// assert!(set.is_empty());
    /// assert_eq!(3, set.universe_len());
    /// ```
    pub fn new(n_bits: usize) -> Self {
        ArgumentBitSet {
            words: vec![0; n_bits.div_ceil(WORD_BITS)],
            n_bits,
        }
    }

    pub(crate) fn from_words(words: Vec<u64>, n_bits: usize) -> Self {
        debug_assert_eq!(n_bits.div_ceil(WORD_BITS), words.len());
        ArgumentBitSet { words, n_bits }
    }

    /// Returns the size of the universe this set ranges over.
    pub fn universe_len(&self) -> usize {
        self.n_bits
    }

    /// Returns `true` iff the provided id belongs to the set.
    ///
    /// # Panics
    ///
    /// Panics if the id is outside the universe.
    pub fn contains(&self, id: usize) -> bool {
        assert!(id < self.n_bits, "id {} outside universe", id);
        self.words[id / WORD_BITS] & (1 << (id % WORD_BITS)) != 0
    }

    /// Adds the provided id to the set.
    ///
    /// # Panics
    ///
    /// Panics if the id is outside the universe.
    pub fn insert(&mut self, id: usize) {
        assert!(id < self.n_bits, "id {} outside universe", id);
        self.words[id / WORD_BITS] |= 1 << (id % WORD_BITS);
    }

    /// Returns the cardinality of the set.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungraph::utils::ArgumentBitSet;
    /// let mut set = ArgumentBitSet::new(8);
    /// set.insert(1);
    /// set.insert(5);
    /// assert_eq!(2, set.len());
    /// ```
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` iff the set has no member.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Returns `true` iff the set contains the whole universe.
    pub fn is_full(&self) -> bool {
        self.len() == self.n_bits
    }

    /// Returns the union of this set with another one over the same universe.
    pub fn union(&self, other: &ArgumentBitSet) -> ArgumentBitSet {
        debug_assert_eq!(self.n_bits, other.n_bits);
        ArgumentBitSet {
            words: self
                .words
                .iter()
                .zip(other.words.iter())
                .map(|(a, b)| a | b)
                .collect(),
            n_bits: self.n_bits,
        }
    }

    /// Returns `true` iff this set and another one share a member.
    pub fn intersects(&self, other: &ArgumentBitSet) -> bool {
        debug_assert_eq!(self.n_bits, other.n_bits);
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(a, b)| a & b != 0)
    }

    /// Returns `true` iff every member of this set belongs to another one.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungraph::utils::ArgumentBitSet;
    /// let mut small = ArgumentBitSet::new(4);
    /// small.insert(0);
    /// let mut big = ArgumentBitSet::new(4);
    /// big.insert(0);
    /// big.insert(2);
    /// assert!(small.is_subset_of(&big));
    /// assert!(!big.is_subset_of(&small));
    /// ```
    pub fn is_subset_of(&self, other: &ArgumentBitSet) -> bool {
        debug_assert_eq!(self.n_bits, other.n_bits);
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(a, b)| a & !b == 0)
    }

    /// Provides an iterator to the ids belonging to the set, in increasing order.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungraph::utils::ArgumentBitSet;
    /// let mut set = ArgumentBitSet::new(8);
    /// set.insert(6);
    /// set.insert(2);
    /// assert_eq!(vec![2, 6], set.iter().collect::<Vec<usize>>());
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.n_bits).filter(move |i| self.contains(*i))
    }
}
