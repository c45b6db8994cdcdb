use serde::{Deserialize, Serialize};

use crate::RouterId;
use crate::algorithms::dijkstra::ShortestPathTree;

/// One row of a connection table: where to forward traffic for `destination`.
///
/// `first_hop` is `None` when no packet would ever be sent: the destination
/// is the source itself, or it is unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEntry {
    pub destination: RouterId,
    pub first_hop: Option<RouterId>,
}

/// Forwarding table of a selected source router.
///
/// Holds one entry per router in the topology, in ascending id order, the
/// source and unreachable routers included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionTable {
    entries: Vec<ConnectionEntry>,
}

impl ConnectionTable {
    /// Derives the full table from a computed shortest-path tree.
    pub fn from_tree(tree: &ShortestPathTree) -> Self {
        let entries = (1..=tree.router_count())
            .map(|destination| ConnectionEntry {
                destination,
                first_hop: tree.first_hop_to(destination),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ConnectionEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConnectionEntry> {
        self.entries.iter()
    }

    /// Looks up the entry for `destination`, if it is a valid router id.
    pub fn get(&self, destination: RouterId) -> Option<&ConnectionEntry> {
        self.entries
            .iter()
            .find(|entry| entry.destination == destination)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
