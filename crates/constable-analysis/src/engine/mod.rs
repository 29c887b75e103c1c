//! Orchestration: cop contract, registry, single-pass commissioner,
//! correction merging, and the per-run team.

pub mod commissioner;
pub mod cop;
pub mod corrector;
pub mod registry;
pub mod team;
