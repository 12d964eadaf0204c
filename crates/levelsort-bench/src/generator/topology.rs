//! Layer construction, skip edges, and optional cycle injection.


use levelsort_core::DependencyGraph;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::{GeneratedGraph, GeneratorConfig};

/// Builds the layered graph described by `config`.
pub fn build_layered(config: &GeneratorConfig, rng: &mut StdRng) -> GeneratedGraph {
    let layers: Vec<Vec<String>> = (0..config.layers)
        .map(|layer| {
            (0..config.layer_width)
                .map(|i| node_name(layer, i))
                .collect()
        })
        .collect();

    let mut declared: Vec<&String> = layers.iter().flatten().collect();
    if config.shuffle_declarations {
        declared.shuffle(rng);
    }

    let mut graph = DependencyGraph::with_capacity(declared.len());
    for name in declared {
        graph.add_node(name.clone());
    }

    // parent[L][i] is one prerequisite of layers[L][i] in layer L - 1.
    let mut parent: Vec<Vec<usize>> = vec![Vec::new(); layers.len()];
    for (layer, nodes) in layers.iter().enumerate().skip(1) {
        let previous = &layers[layer - 1];
        for node in nodes {
            let fan_in = rng.gen_range(1..=config.fan_in.clamp(1, previous.len()));
            let picks: Vec<usize> =
                rand::seq::index::sample(rng, previous.len(), fan_in).into_vec();
            for &p in &picks {
                graph.add_edge(previous[p].clone(), node.clone());
            }
            parent[layer].push(picks[0]);

            if layer >= 2 && rng.gen_bool(config.skip_density.clamp(0.0, 1.0)) {
                let earlier = rng.gen_range(0..layer - 1);
                let from = rng.gen_range(0..layers[earlier].len());
                graph.add_edge(layers[earlier][from].clone(), node.clone());
            }
        }
    }

    let injected_cycles = inject_back_edges(config, rng, &layers, &parent, &mut graph);

    let layer_of = layers
        .iter()
        .enumerate()
        .flat_map(|(layer, nodes)| nodes.iter().map(move |n| (n.clone(), layer)))
        .collect();

    GeneratedGraph {
        graph,
        layer_of,
        injected_cycles,
    }
}

/// Adds edges from a last-layer node back to the layer-0 ancestor reached by
/// following `parent` links, closing one cycle per edge.
fn inject_back_edges(
    config: &GeneratorConfig,
    rng: &mut StdRng,
    layers: &[Vec<String>],
    parent: &[Vec<usize>],
    graph: &mut DependencyGraph<String>,
) -> usize {
    let Some(last) = layers.len().checked_sub(1) else {
        return 0;
    };
    if last == 0 || layers[last].is_empty() {
        return 0;
    }

    let mut injected = 0;
    for _ in 0..config.inject_cycles {
        let start = rng.gen_range(0..layers[last].len());
        let mut i = start;
        for layer in (1..=last).rev() {
            i = parent[layer][i];
        }
        if graph.add_edge(layers[last][start].clone(), layers[0][i].clone()) {
            injected += 1;
        }
    }
    injected
}

fn node_name(layer: usize, index: usize) -> String {
    format!("t{layer:03}-{index:05}")
}
