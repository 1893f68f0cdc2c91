/// Skill graph domain - graph model, reduction services and policies
///
/// Pure logic only: nothing in this module performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
