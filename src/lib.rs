pub mod algorithms;
pub mod error;
pub mod menu;
pub mod network;
pub mod route;
pub mod routing_table;
pub mod simulator;

/// Identifier of a router in a loaded topology: 1-based, dense in `1..=N`.
pub type RouterId = usize;

/// Cost of a directed link between two routers.
pub type Cost = u32;

pub use algorithms::dijkstra::{ShortestPathTree, calculate_shortest_path_tree};
pub use error::RoutingError;
pub use network::topology::{NO_LINK, Topology, parse_matrix};
pub use route::{Route, reconstruct_route};
pub use routing_table::{ConnectionEntry, ConnectionTable};
pub use simulator::LinkStateSimulator;
