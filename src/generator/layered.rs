//! Layered random graph construction.
//!
//! Generation runs in two phases. The first grows a random tree level by
//! level, with the chance of spawning a child shrinking linearly with depth.
//! The second walks every vertex in id order and sprinkles colored cross-links
//! over the tree.

use tracing::debug;

use super::{DepthMap, RandomSource};
use crate::graph::{BindPolicy, Color, Graph, GraphError};

/// Chance of a green self-loop on each vertex.
pub const SELF_LOOP_PROBABILITY: f64 = 0.10;

/// Chance of a blue link to the next vertex on the same level.
pub const SAME_LEVEL_PROBABILITY: f64 = 0.25;

/// Chance of a red link to a vertex two levels deeper.
pub const DOUBLE_SKIP_PROBABILITY: f64 = 0.33;

/// Errors that can occur during generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The depth was zero, which leaves the probability step undefined.
    #[error("Depth must be greater than zero")]
    ZeroDepth,

    /// A bind was rejected by the graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Parameters of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    depth: usize,
    branching_factor: usize,
    policy: BindPolicy,
}

impl GeneratorConfig {
    /// Validates and stores the generation parameters.
    ///
    /// A branching factor of zero is allowed and produces the root alone.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::ZeroDepth`] if `depth` is zero.
    pub fn new(depth: usize, branching_factor: usize) -> Result<Self, GenerateError> {
        if depth == 0 {
            return Err(GenerateError::ZeroDepth);
        }
        Ok(Self {
            depth,
            branching_factor,
            policy: BindPolicy::default(),
        })
    }

    /// Sets the bind policy of generated graphs.
    pub fn with_policy(mut self, policy: BindPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Number of levels grown below the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Maximum children attempted per parent.
    pub fn branching_factor(&self) -> usize {
        self.branching_factor
    }

    /// Bind policy of generated graphs.
    pub fn policy(&self) -> BindPolicy {
        self.policy
    }

    /// Amount the spawn probability drops per level, and the yellow
    /// probability grows per vertex.
    pub fn probability_step(&self) -> f64 {
        1.0 / self.depth as f64
    }
}

/// A generated graph together with its level ranges.
#[derive(Debug, Clone)]
pub struct GeneratedGraph {
    /// The populated graph
    pub graph: Graph,
    /// Id range of every populated level
    pub depth_map: DepthMap,
}

/// Generates a fresh graph: tree growth followed by cross-links.
///
/// # Errors
///
/// Returns [`GenerateError::Graph`] if a bind fails. Under
/// [`BindPolicy::Strict`] that happens as soon as a cross-link lands on an
/// already connected pair; nothing is retried.
///
/// # Example
///
/// ```rust
/// use graphgen::generator::{generate, GeneratorConfig, RngSource};
///
/// let config = GeneratorConfig::new(3, 2).unwrap();
/// let generated = generate(&config, &mut RngSource::seeded(1)).unwrap();
///
/// assert_eq!(generated.graph.target_depth(), Some(3));
/// assert!(generated.depth_map.level_count() <= 4);
/// ```
pub fn generate<R: RandomSource + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<GeneratedGraph, GenerateError> {
    let mut graph = Graph::with_target_depth(config.depth).with_policy(config.policy);
    let depth_map = grow_tree(&mut graph, config, rng)?;
    let cross_links = add_cross_links(&mut graph, &depth_map, config, rng)?;

    debug!(
        vertices = graph.vertices_amount(),
        edges = graph.edges_amount(),
        cross_links,
        levels = depth_map.level_count(),
        "generated graph"
    );
    Ok(GeneratedGraph { graph, depth_map })
}

/// Phase one: grows a random tree of grey edges from a new root.
///
/// Every vertex on level `i` makes `branching_factor` attempts to spawn a
/// child on level `i + 1`. Each attempt succeeds with a probability that
/// starts at 1 on level 0 and drops by `1 / depth` per level. Growth stops
/// early if a level ends up empty.
///
/// # Errors
///
/// Returns [`GenerateError::Graph`] if binding a child fails.
pub fn grow_tree<R: RandomSource + ?Sized>(
    graph: &mut Graph,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<DepthMap, GenerateError> {
    let mut depth_map = DepthMap::new();
    let root = graph.add_vertex(0);
    depth_map.record(0, root);

    let step = config.probability_step();
    let mut new_vertex_probability = 1.0;

    for level in 0..config.depth {
        let Some(parents) = depth_map.level(level) else {
            break;
        };

        for parent in parents.ids() {
            for _ in 0..config.branching_factor {
                if rng.chance(new_vertex_probability) {
                    let child = graph.add_vertex(level + 1);
                    graph.bind(parent, child)?;
                    depth_map.record(level + 1, child);
                }
            }
        }

        debug!(
            level,
            parents = parents.len(),
            children = depth_map.level(level + 1).map_or(0, |l| l.len()),
            probability = new_vertex_probability,
            "grew level"
        );
        new_vertex_probability -= step;
    }

    Ok(depth_map)
}

/// Phase two: adds colored cross-links over the tree.
///
/// For each vertex, in id order:
///
/// * green: a self-loop with probability 0.10
/// * blue: unless it is last on its level, a link to the next id with
///   probability 0.25
/// * yellow: if a deeper level exists, a link to a random vertex there; the
///   probability starts at 0 and grows by `1 / depth` after every vertex
/// * red: if a level two deeper exists, a link to a random vertex there with
///   probability 0.33
///
/// Returns the number of cross-links added.
///
/// # Errors
///
/// Returns [`GenerateError::Graph`] if a bind is rejected: under
/// [`BindPolicy::Strict`] a link between already connected vertices aborts
/// the phase, as does a depth map naming vertices missing from the graph.
pub fn add_cross_links<R: RandomSource + ?Sized>(
    graph: &mut Graph,
    depth_map: &DepthMap,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<usize, GenerateError> {
    let step = config.probability_step();
    let mut yellow_probability = 0.0;
    let mut added = 0;

    for (depth, level) in depth_map.levels().iter().enumerate() {
        let next = depth_map.level(depth + 1);
        let after_next = depth_map.level(depth + 2);

        for cur_id in level.ids() {
            if rng.chance(SELF_LOOP_PROBABILITY) {
                graph.bind_vertices(cur_id, cur_id, Color::Green)?;
                added += 1;
            }

            if cur_id != level.last && rng.chance(SAME_LEVEL_PROBABILITY) {
                graph.bind_vertices(cur_id, cur_id + 1, Color::Blue)?;
                added += 1;
            }

            if let Some(next) = next {
                if rng.chance(yellow_probability) {
                    let target = rng.pick(next.ids());
                    graph.bind_vertices(cur_id, target, Color::Yellow)?;
                    added += 1;
                }
            }

            if let Some(after_next) = after_next {
                if rng.chance(DOUBLE_SKIP_PROBABILITY) {
                    let target = rng.pick(after_next.ids());
                    graph.bind_vertices(cur_id, target, Color::Red)?;
                    added += 1;
                }
            }

            yellow_probability += step;
        }
    }

    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::GraphDocument;
    use crate::generator::random::testing::{Forced, Scripted};
    use crate::generator::{LevelRange, RngSource};
    use crate::graph::tree_edges_span;
    use proptest::prelude::*;

    fn grown(depth: usize, branching_factor: usize, outcome: bool) -> (Graph, DepthMap) {
        let config = GeneratorConfig::new(depth, branching_factor).unwrap();
        let mut graph = Graph::with_target_depth(depth);
        let depth_map = grow_tree(&mut graph, &config, &mut Forced(outcome)).unwrap();
        (graph, depth_map)
    }

    #[test]
    fn test_config_rejects_zero_depth() {
        assert!(matches!(
            GeneratorConfig::new(0, 3),
            Err(GenerateError::ZeroDepth)
        ));

        let config = GeneratorConfig::new(4, 0).unwrap();
        assert_eq!(config.depth(), 4);
        assert_eq!(config.branching_factor(), 0);
        assert_eq!(config.policy(), BindPolicy::Permissive);
        assert_eq!(config.probability_step(), 0.25);
    }

    #[test]
    fn test_single_child_scenario() {
        let config = GeneratorConfig::new(1, 1).unwrap();
        let (mut graph, depth_map) = grown(1, 1, true);

        assert_eq!(graph.vertices_amount(), 2);
        assert_eq!(graph.edges_amount(), 1);
        assert_eq!(graph.edge(0).unwrap().endpoints(), (0, 1));

        let added = add_cross_links(&mut graph, &depth_map, &config, &mut Forced(false)).unwrap();
        assert_eq!(added, 0);

        let parsed: serde_json::Value = serde_json::from_str(&graph.to_json().unwrap()).unwrap();
        assert_eq!(parsed["vertices"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["edges"].as_array().unwrap().len(), 1);
        assert_eq!(parsed["edges"][0]["color"], "grey");
    }

    #[test]
    fn test_zero_branching_factor_keeps_root_only() {
        let (graph, depth_map) = grown(3, 0, true);

        assert_eq!(graph.vertices_amount(), 1);
        assert_eq!(graph.edges_amount(), 0);
        assert_eq!(depth_map.levels(), &[LevelRange { first: 0, last: 0 }]);
    }

    #[test]
    fn test_failed_attempts_stop_growth() {
        let (graph, depth_map) = grown(5, 4, false);

        assert_eq!(graph.vertices_amount(), 1);
        assert_eq!(depth_map.level_count(), 1);
    }

    #[test]
    fn test_full_tree_when_every_attempt_succeeds() {
        let (graph, depth_map) = grown(2, 2, true);

        assert_eq!(graph.vertices_amount(), 7);
        assert_eq!(graph.color_count(Color::Grey), 6);
        assert_eq!(
            depth_map.levels(),
            &[
                LevelRange { first: 0, last: 0 },
                LevelRange { first: 1, last: 2 },
                LevelRange { first: 3, last: 6 },
            ]
        );
        // Children hang off the parent that spawned them
        assert!(graph.are_connected(1, 3));
        assert!(graph.are_connected(1, 4));
        assert!(graph.are_connected(2, 5));
        assert!(graph.are_connected(2, 6));
        assert!(tree_edges_span(&graph));
    }

    #[test]
    fn test_cross_links_with_forced_success() {
        let config = GeneratorConfig::new(2, 2).unwrap();
        let (mut graph, depth_map) = grown(2, 2, true);

        let added = add_cross_links(&mut graph, &depth_map, &config, &mut Forced(true)).unwrap();

        assert_eq!(added, 15);
        assert_eq!(graph.color_count(Color::Green), 7);
        assert_eq!(graph.color_count(Color::Blue), 4);
        assert_eq!(graph.color_count(Color::Yellow), 3);
        assert_eq!(graph.color_count(Color::Red), 1);
        assert_eq!(graph.edges_amount(), 21);

        // Blue links only join neighbors on the same level
        for edge in graph.edges().iter().filter(|e| e.color() == Color::Blue) {
            let (a, b) = edge.endpoints();
            assert_eq!(b, a + 1);
            assert_eq!(depth_map.depth_of(a), depth_map.depth_of(b));
        }
        assert!(graph.are_connected(0, 3));
    }

    #[test]
    fn test_strict_policy_aborts_on_connected_pair() {
        let config = GeneratorConfig::new(2, 2)
            .unwrap()
            .with_policy(BindPolicy::Strict);

        // Vertex 0's yellow link targets its own child 1
        let result = generate(&config, &mut Forced(true));
        assert!(matches!(
            result,
            Err(GenerateError::Graph(GraphError::AlreadyConnected { a: 0, b: 1 }))
        ));

        let mut graph = Graph::with_target_depth(2).with_policy(BindPolicy::Strict);
        let depth_map = grow_tree(&mut graph, &config, &mut Forced(true)).unwrap();
        let err = add_cross_links(&mut graph, &depth_map, &config, &mut Forced(true)).unwrap_err();
        assert_eq!(err.to_string(), "Vertices 0 and 1 are already connected");
        // Only the self-loop drawn before the rejected link was bound
        assert_eq!(graph.edges_amount(), 7);
        assert_eq!(graph.color_count(Color::Yellow), 0);
    }

    #[test]
    fn test_strict_policy_accepts_distinct_pairs() {
        let config = GeneratorConfig::new(2, 2)
            .unwrap()
            .with_policy(BindPolicy::Strict);
        let mut graph = Graph::with_target_depth(2).with_policy(BindPolicy::Strict);
        let depth_map = grow_tree(&mut graph, &config, &mut Forced(true)).unwrap();
        // vertex 0: green, red to 3; vertex 1: yellow to 5
        let mut rng = Scripted::new(&[true, false, true, false, false, true], &[3, 5]);

        let added = add_cross_links(&mut graph, &depth_map, &config, &mut rng).unwrap();

        assert_eq!(added, 3);
        assert!(graph.are_connected(0, 0));
        assert!(graph.are_connected(0, 3));
        assert!(graph.are_connected(1, 5));
        assert_eq!(graph.edges_amount(), 9);
    }

    #[test]
    fn test_draw_order_and_probabilities() {
        let config = GeneratorConfig::new(2, 1).unwrap();
        let mut rng = Scripted::new(&[true, true], &[]);

        let generated = generate(&config, &mut rng).unwrap();

        assert_eq!(generated.graph.vertices_amount(), 3);
        assert_eq!(generated.graph.edges_amount(), 2);
        assert_eq!(
            rng.asked,
            vec![
                // tree growth, one attempt per level
                1.0,
                0.5,
                // vertex 0: green, yellow, red
                SELF_LOOP_PROBABILITY,
                0.0,
                DOUBLE_SKIP_PROBABILITY,
                // vertex 1: green, yellow
                SELF_LOOP_PROBABILITY,
                0.5,
                // vertex 2: green
                SELF_LOOP_PROBABILITY,
            ]
        );
    }

    #[test]
    fn test_scripted_picks_choose_targets() {
        let config = GeneratorConfig::new(2, 2).unwrap();
        let (mut graph, depth_map) = grown(2, 2, true);
        // vertex 0: no green, yellow succeeds, red succeeds; rest fail
        let mut rng = Scripted::new(&[false, true, true], &[2, 6]);

        add_cross_links(&mut graph, &depth_map, &config, &mut rng).unwrap();

        assert_eq!(graph.edges_amount(), 8);
        assert_eq!(graph.edge(6).unwrap().endpoints(), (0, 2));
        assert_eq!(graph.edge(6).unwrap().color(), Color::Yellow);
        assert_eq!(graph.edge(7).unwrap().endpoints(), (0, 6));
        assert_eq!(graph.edge(7).unwrap().color(), Color::Red);
    }

    #[test]
    fn test_same_seed_same_graph() {
        let config = GeneratorConfig::new(4, 3).unwrap();
        let first = generate(&config, &mut RngSource::seeded(2024)).unwrap();
        let second = generate(&config, &mut RngSource::seeded(2024)).unwrap();

        assert_eq!(first.depth_map, second.depth_map);
        assert_eq!(first.graph.to_json().unwrap(), second.graph.to_json().unwrap());
    }

    proptest! {
        #[test]
        fn prop_tree_growth_invariants(
            seed in any::<u64>(),
            depth in 1usize..6,
            branching in 0usize..4,
        ) {
            let config = GeneratorConfig::new(depth, branching).unwrap();
            let mut graph = Graph::with_target_depth(depth);
            let depth_map = grow_tree(&mut graph, &config, &mut RngSource::seeded(seed)).unwrap();

            // Grey edges form a spanning tree
            prop_assert_eq!(graph.edges_amount() + 1, graph.vertices_amount());
            prop_assert!(tree_edges_span(&graph));

            // Levels cover every id once, in order
            let mut expected = 0;
            for (level, range) in depth_map.levels().iter().enumerate() {
                prop_assert_eq!(range.first, expected);
                for id in range.ids() {
                    prop_assert_eq!(graph.vertex(id).unwrap().depth(), level);
                }
                expected = range.last + 1;
            }
            prop_assert_eq!(expected, graph.vertices_amount());
            prop_assert!(depth_map.level_count() <= depth + 1);
        }

        #[test]
        fn prop_generated_graph_invariants(
            seed in any::<u64>(),
            depth in 1usize..6,
            branching in 0usize..4,
        ) {
            let config = GeneratorConfig::new(depth, branching).unwrap();
            let generated = generate(&config, &mut RngSource::seeded(seed)).unwrap();
            let graph = &generated.graph;

            for (position, vertex) in graph.vertices().iter().enumerate() {
                prop_assert_eq!(vertex.id(), position);
                prop_assert_eq!(generated.depth_map.depth_of(position), Some(vertex.depth()));
            }
            for (position, edge) in graph.edges().iter().enumerate() {
                prop_assert_eq!(edge.id(), position);
                let (a, b) = edge.endpoints();
                prop_assert!(graph.vertex(a).unwrap().incident_edges().contains(&position));
                prop_assert!(graph.vertex(b).unwrap().incident_edges().contains(&position));
            }

            let total: usize = graph.color_histogram().iter().map(|(_, count)| count).sum();
            prop_assert_eq!(total, graph.edges_amount());
            prop_assert_eq!(graph.color_count(Color::Grey) + 1, graph.vertices_amount());

            // JSON snapshot lists everything with known colors
            let document: GraphDocument = serde_json::from_str(&graph.to_json().unwrap()).unwrap();
            prop_assert_eq!(document.vertices.len(), graph.vertices_amount());
            prop_assert_eq!(document.edges.len(), graph.edges_amount());
            for edge in &document.edges {
                prop_assert!(Color::ALL.contains(&edge.color));
            }
        }
    }
}
