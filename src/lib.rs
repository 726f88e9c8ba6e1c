//! Dungraph is an extension-based semantics engine for Dung Abstract Argumentation frameworks.
//!
//! A framework is a finite set of arguments together with a binary attack relation.
//! This crate enumerates the classical extension families (complete, grounded,
//! preferred, stable) and classifies arguments as skeptically accepted,
//! credulously accepted or rejected with respect to a family.

#![warn(missing_docs)]

pub mod aa;

pub mod semantics;

pub mod utils;
