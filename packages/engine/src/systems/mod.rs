//! Systems that act on the particle columns.
//!
//! - integrator/  - spring-to-home step over every particle
//! - wells/       - well registry, collapse burst, optional pull
//! - interaction/ - pointer click -> collapse or create

pub mod integrator;
pub mod interaction;
pub mod wells;
