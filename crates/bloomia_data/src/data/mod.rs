//! Core data structures for Bloomia runs.

pub mod movement;
pub mod particle;
pub mod run;
