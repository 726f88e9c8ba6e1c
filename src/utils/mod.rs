//! Miscellaneous components used in the library.

mod bitset;
pub use bitset::ArgumentBitSet;
