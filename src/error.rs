use crate::RouterId;

/// Errors surfaced by the routing core.
///
/// Every variant is a distinct, user-displayable condition; none of them
/// leaves the simulator in an unusable state.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// The cost matrix is malformed: not square, an illegal negative cost,
    /// an out-of-range cost, or unparsable matrix text.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// The requested source router is outside `1..=N`.
    #[error("invalid source router {router}: topology has {router_count} routers")]
    InvalidSource {
        router: RouterId,
        router_count: usize,
    },

    /// The requested destination router is outside `1..=N`.
    #[error("invalid destination router {router}: topology has {router_count} routers")]
    InvalidDestination {
        router: RouterId,
        router_count: usize,
    },

    /// A table or path query was issued before any source was selected.
    #[error("no source router selected")]
    NoSourceSelected,

    /// Source and destination are the same router.
    #[error("source and destination are both router {0}")]
    SameRouter(RouterId),

    /// The destination is unreachable from the selected source.
    ///
    /// `thiserror` treats a field named `source` as the error's cause, so
    /// the endpoints are `from`/`to` instead.
    #[error("no route from router {from} to router {to}")]
    NoRoute { from: RouterId, to: RouterId },
}
