//! Layered DAG generator.
//!
//! Produces a [`DependencyGraph`] whose nodes are arranged in layers: every
//! node in layer `L > 0` has at least one prerequisite in layer `L - 1` and
//! all other prerequisites in earlier layers, so its expected dependency
//! level is exactly `L`.

pub mod topology;

use std::collections::HashMap;

use levelsort_core::DependencyGraph;
use rand::SeedableRng;
use rand::rngs::StdRng;

use topology::build_layered;

/// Configuration for the layered generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of layers (the expected number of levels).
    pub layers: usize,
    /// Nodes per layer.
    pub layer_width: usize,
    /// Maximum prerequisites drawn from the immediately preceding layer.
    pub fan_in: usize,
    /// Probability that a node also gets a prerequisite from an earlier,
    /// non-adjacent layer (0.0-1.0).
    pub skip_density: f64,
    /// Shuffle declaration order instead of declaring layer by layer.
    pub shuffle_declarations: bool,
    /// Number of back edges to inject; each closes a cycle.
    pub inject_cycles: usize,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// ~100 nodes, ~250 edges
    Small,
    /// ~2000 nodes, ~6000 edges
    Medium,
    /// ~20000 nodes, ~70000 edges
    Large,
    /// ~100000 nodes, ~350000 edges
    XLarge,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (layers, layer_width, fan_in) = match self {
            SizeTier::Small => (10, 10, 3),
            SizeTier::Medium => (40, 50, 4),
            SizeTier::Large => (100, 200, 5),
            SizeTier::XLarge => (200, 500, 5),
        };
        GeneratorConfig {
            seed,
            layers,
            layer_width,
            fan_in,
            skip_density: 0.2,
            shuffle_declarations: true,
            inject_cycles: 0,
        }
    }
}

/// A generated graph together with the layer each node was built in.
#[derive(Debug, Clone)]
pub struct GeneratedGraph {
    /// The dependency graph.
    pub graph: DependencyGraph<String>,
    /// Layer each node was generated in; equal to its expected level when no
    /// cycles were injected.
    pub layer_of: HashMap<String, usize>,
    /// Number of back edges actually injected.
    pub injected_cycles: usize,
}

/// Generates a layered dependency graph from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_layered(config: &GeneratorConfig) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(config.seed);
    build_layered(config, &mut rng)
}
