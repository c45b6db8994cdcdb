use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithms::dijkstra::ShortestPathTree;
use crate::error::RoutingError;
use crate::{Cost, RouterId};

/// A concrete shortest path between two distinct routers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    hops: Vec<RouterId>,
    pub total_cost: Cost,
}

impl Route {
    /// Routers along the path, source first, destination last.
    pub fn hops(&self) -> &[RouterId] {
        &self.hops
    }

    /// Number of routers on the path, endpoints included.
    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.hops.iter().map(|hop| hop.to_string()).collect();
        write!(f, "{}", rendered.join(" -> "))
    }
}

/// Extracts the route to `destination` from a computed shortest-path tree.
///
/// Walks the parent map backwards from the destination and reverses the
/// collected hops. Querying the tree's own source is reported as
/// [`RoutingError::SameRouter`] rather than an empty path.
pub fn reconstruct_route(
    tree: &ShortestPathTree,
    destination: RouterId,
) -> Result<Route, RoutingError> {
    if destination < 1 || destination > tree.router_count() {
        return Err(RoutingError::InvalidDestination {
            router: destination,
            router_count: tree.router_count(),
        });
    }
    let source = tree.source();
    if destination == source {
        return Err(RoutingError::SameRouter(destination));
    }
    let Some(total_cost) = tree.distance_to(destination) else {
        return Err(RoutingError::NoRoute {
            from: source,
            to: destination,
        });
    };

    // Walk parents back to the source, then flip into forward order.
    let mut hops = vec![destination];
    let mut current = destination;
    while let Some(prev) = tree.parent_of(current) {
        hops.push(prev);
        current = prev;
    }
    hops.reverse();

    Ok(Route { hops, total_cost })
}
