use std::collections::HashMap;

use crate::error::RoutingError;
use crate::network::topology::Topology;
use crate::{Cost, RouterId};

/// Result of a single-source shortest-path computation.
///
/// All maps are keyed by destination router and only hold routers that were
/// actually reached. The source itself appears in `distance` (at cost 0) but
/// never in `parent` or `first_hop`.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: RouterId,
    router_count: usize,
    distance: HashMap<RouterId, Cost>,
    parent: HashMap<RouterId, RouterId>,
    first_hop: HashMap<RouterId, RouterId>,
}

impl ShortestPathTree {
    /// The router this tree was computed from.
    pub fn source(&self) -> RouterId {
        self.source
    }

    /// Router count of the topology the tree was computed on.
    pub fn router_count(&self) -> usize {
        self.router_count
    }

    /// Total cost of the shortest path to `router`, if it is reachable.
    pub fn distance_to(&self, router: RouterId) -> Option<Cost> {
        self.distance.get(&router).copied()
    }

    /// Predecessor of `router` on its shortest path from the source.
    pub fn parent_of(&self, router: RouterId) -> Option<RouterId> {
        self.parent.get(&router).copied()
    }

    /// First router after the source on the shortest path to `router`.
    ///
    /// `None` for the source itself and for unreachable routers: no packet
    /// ever leaves the source in either case.
    pub fn first_hop_to(&self, router: RouterId) -> Option<RouterId> {
        self.first_hop.get(&router).copied()
    }

    /// Whether `router` is reachable from the source.
    pub fn is_reachable(&self, router: RouterId) -> bool {
        self.distance.contains_key(&router)
    }
}

/// Runs Dijkstra's algorithm from `source` over the whole topology.
///
/// Selection-based variant: each round finalizes the unvisited router with
/// the smallest tentative distance, breaking ties by the lowest router id so
/// equal-cost topologies always yield the same tree. First hops are carried
/// forward during relaxation instead of being recovered by walking parents.
pub fn calculate_shortest_path_tree(
    topology: &Topology,
    source: RouterId,
) -> Result<ShortestPathTree, RoutingError> {
    if !topology.contains(source) {
        return Err(RoutingError::InvalidSource {
            router: source,
            router_count: topology.router_count(),
        });
    }

    let mut distance = HashMap::new();
    let mut parent = HashMap::new();
    let mut first_hop = HashMap::new();

    // Tentative distances of discovered but not yet finalized routers.
    let mut tentative: HashMap<RouterId, Cost> = HashMap::new();
    tentative.insert(source, 0);

    loop {
        // Select the closest tentative router; ties go to the lowest id.
        let Some((current, current_dist)) = tentative
            .iter()
            .min_by_key(|&(&router, &dist)| (dist, router))
            .map(|(&router, &dist)| (router, dist))
        else {
            break;
        };
        tentative.remove(&current);
        distance.insert(current, current_dist);

        // Relax every outgoing link of the finalized router.
        if let Some(neighbors) = topology.neighbors_of(current) {
            for (&neighbor, &cost) in neighbors {
                if distance.contains_key(&neighbor) {
                    continue;
                }
                let candidate = current_dist.saturating_add(cost);
                if tentative.get(&neighbor).is_none_or(|&d| candidate < d) {
                    tentative.insert(neighbor, candidate);
                    parent.insert(neighbor, current);
                    let hop = if current == source {
                        neighbor
                    } else {
                        first_hop[&current]
                    };
                    first_hop.insert(neighbor, hop);
                }
            }
        }
    }

    Ok(ShortestPathTree {
        source,
        router_count: topology.router_count(),
        distance,
        parent,
        first_hop,
    })
}
