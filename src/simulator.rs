use crate::RouterId;
use crate::algorithms::dijkstra::{ShortestPathTree, calculate_shortest_path_tree};
use crate::error::RoutingError;
use crate::network::topology::Topology;
use crate::route::{Route, reconstruct_route};
use crate::routing_table::ConnectionTable;

/// Stateful query facade over the routing core.
///
/// Enforces the natural operation order: a topology must be loaded before a
/// source can be selected, and a source must be selected before tables or
/// paths can be queried. Failed operations leave the previous state intact.
#[derive(Debug)]
pub struct LinkStateSimulator {
    topology: Option<Topology>,
    tree: Option<ShortestPathTree>,
}

impl LinkStateSimulator {
    pub fn new() -> Self {
        Self {
            topology: None,
            tree: None,
        }
    }

    /// Installs a new topology, replacing any previous one.
    ///
    /// Any previously selected source is forgotten: its shortest-path tree
    /// was computed against the old topology.
    pub fn set_topology(&mut self, matrix: &[Vec<i64>]) -> Result<(), RoutingError> {
        let topology = Topology::from_matrix(matrix)?;
        self.topology = Some(topology);
        self.tree = None;
        Ok(())
    }

    /// Selects a source router and computes its shortest-path tree.
    ///
    /// On failure the previously selected source, if any, stays in effect.
    pub fn select_source(&mut self, source: RouterId) -> Result<(), RoutingError> {
        let Some(topology) = self.topology.as_ref() else {
            return Err(RoutingError::InvalidSource {
                router: source,
                router_count: 0,
            });
        };
        let tree = calculate_shortest_path_tree(topology, source)?;
        self.tree = Some(tree);
        Ok(())
    }

    pub fn has_topology(&self) -> bool {
        self.topology.is_some()
    }

    /// Router count of the loaded topology, or 0 when none is loaded.
    pub fn router_count(&self) -> usize {
        self.topology.as_ref().map_or(0, Topology::router_count)
    }

    /// Currently selected source router, if any.
    pub fn source(&self) -> Option<RouterId> {
        self.tree.as_ref().map(ShortestPathTree::source)
    }

    /// Connection table of the selected source.
    pub fn connection_table(&self) -> Result<ConnectionTable, RoutingError> {
        let tree = self.tree.as_ref().ok_or(RoutingError::NoSourceSelected)?;
        Ok(ConnectionTable::from_tree(tree))
    }

    /// Shortest path from the selected source to `destination`.
    pub fn shortest_path(&self, destination: RouterId) -> Result<Route, RoutingError> {
        let tree = self.tree.as_ref().ok_or(RoutingError::NoSourceSelected)?;
        reconstruct_route(tree, destination)
    }
}

impl Default for LinkStateSimulator {
    fn default() -> Self {
        Self::new()
    }
}
