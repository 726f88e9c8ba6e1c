//! This module contains the extension enumeration layers and the semantics solvers.
//!
//! The layers are stacked: the powerset of the argument universe is enumerated,
//! filtered down to conflict-free sets, then to admissible sets, from which the
//! solvers derive the extension families of the classical semantics.
//! Nothing is cached in between: every solver call recomputes its layers from
//! the framework.

mod admissibility;
pub use admissibility::admissible_sets;
pub use admissibility::is_acceptable;

mod complete_semantics_solver;
pub use complete_semantics_solver::CompleteSemanticsSolver;

mod conflict_free;
pub use conflict_free::conflict_free_sets;

mod extensions;
pub use extensions::ExtensionsResult;

mod grounded_semantics_solver;
pub use grounded_semantics_solver::GroundedSemanticsSolver;

mod index;

mod powerset;
pub use powerset::PowersetIterator;

mod preferred_semantics_solver;
pub use preferred_semantics_solver::PreferredSemanticsSolver;

mod specs;
pub use specs::ExtensionsComputer;

mod stable_semantics_solver;
pub use stable_semantics_solver::StableSemanticsSolver;
