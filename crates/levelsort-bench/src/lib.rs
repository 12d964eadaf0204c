//! Layered dependency-graph generator and benchmark utilities for
//! `levelsort-core`.
//!
//! Graphs are generated deterministically from a seed so that benchmarks and
//! invariant tests see the same input on every run.

pub mod correctness;
pub mod generator;

pub use generator::{GeneratedGraph, GeneratorConfig, SizeTier, generate_layered};
