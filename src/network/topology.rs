use std::collections::HashMap;

use crate::error::RoutingError;
use crate::{Cost, RouterId};

/// Matrix cell marking the absence of a direct link between two routers.
pub const NO_LINK: i64 = -1;

/// A directed network topology built from an NxN cost matrix.
///
/// Routers are numbered `1..=N` in matrix order. Only real links are kept:
/// diagonal cells and `NO_LINK` cells are filtered out at construction.
#[derive(Debug, Clone)]
pub struct Topology {
    router_count: usize,
    adjacency: HashMap<RouterId, HashMap<RouterId, Cost>>,
}

impl Topology {
    /// Builds a topology from a cost matrix.
    ///
    /// Row `i` describes the outgoing links of router `i + 1`; cell `[i][j]`
    /// is the cost of the directed link to router `j + 1`, or [`NO_LINK`].
    /// The matrix may be asymmetric. Diagonal cells are ignored.
    pub fn from_matrix(matrix: &[Vec<i64>]) -> Result<Self, RoutingError> {
        let router_count = matrix.len();

        // Validate shape before looking at any cell values.
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != router_count {
                return Err(RoutingError::InvalidTopology(format!(
                    "matrix must be square: row {} has {} columns, expected {}",
                    i + 1,
                    row.len(),
                    router_count
                )));
            }
        }

        let mut adjacency = HashMap::new();
        for (i, row) in matrix.iter().enumerate() {
            let mut neighbors = HashMap::new();
            for (j, &cell) in row.iter().enumerate() {
                if cell < 0 && cell != NO_LINK {
                    return Err(RoutingError::InvalidTopology(format!(
                        "negative link cost {} from router {} to router {}",
                        cell,
                        i + 1,
                        j + 1
                    )));
                }
                if i == j || cell == NO_LINK {
                    continue;
                }
                if cell > Cost::MAX as i64 {
                    return Err(RoutingError::InvalidTopology(format!(
                        "link cost {} from router {} to router {} exceeds {}",
                        cell,
                        i + 1,
                        j + 1,
                        Cost::MAX
                    )));
                }
                neighbors.insert(j + 1, cell as Cost);
            }
            adjacency.insert(i + 1, neighbors);
        }

        Ok(Self {
            router_count,
            adjacency,
        })
    }

    /// Number of routers in the topology.
    pub fn router_count(&self) -> usize {
        self.router_count
    }

    /// Whether `router` is a valid id in this topology.
    pub fn contains(&self, router: RouterId) -> bool {
        router >= 1 && router <= self.router_count
    }

    /// All router ids in ascending order.
    pub fn routers(&self) -> impl Iterator<Item = RouterId> {
        1..=self.router_count
    }

    /// Outgoing links of `router`, keyed by neighbor id.
    pub fn neighbors_of(&self, router: RouterId) -> Option<&HashMap<RouterId, Cost>> {
        self.adjacency.get(&router)
    }

    /// Cost of the directed link `from -> to`, if one exists.
    pub fn link_cost(&self, from: RouterId, to: RouterId) -> Option<Cost> {
        self.adjacency.get(&from).and_then(|n| n.get(&to)).copied()
    }
}

/// Parses whitespace-separated cost matrix text into rows of raw cells.
///
/// Blank lines are skipped; every remaining line must hold integer cells.
/// Shape and cost-range validation is left to [`Topology::from_matrix`].
pub fn parse_matrix(input: &str) -> Result<Vec<Vec<i64>>, RoutingError> {
    let mut matrix = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for token in line.split_whitespace() {
            let cell = token.parse::<i64>().map_err(|_| {
                RoutingError::InvalidTopology(format!(
                    "invalid cost value '{}' on line {}",
                    token,
                    index + 1
                ))
            })?;
            row.push(cell);
        }
        matrix.push(row);
    }
    if matrix.is_empty() {
        return Err(RoutingError::InvalidTopology(
            "matrix contains no rows".into(),
        ));
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_matrix_square() {
        let matrix = vec![vec![0, 10, -1], vec![-1, 0, 5], vec![-1, -1, 0]];
        let topology = Topology::from_matrix(&matrix).unwrap();
        assert_eq!(topology.router_count(), 3);
        assert_eq!(topology.link_cost(1, 2), Some(10));
        assert_eq!(topology.link_cost(2, 3), Some(5));
    }

    #[test]
    fn test_from_matrix_rejects_non_square() {
        let matrix = vec![vec![0, 1], vec![1, 0], vec![1, 1]];
        let err = Topology::from_matrix(&matrix).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidTopology(_)));
        assert!(err.to_string().contains("expected 3"));
    }

    #[test]
    fn test_from_matrix_rejects_ragged_row() {
        let matrix = vec![vec![0, 1, 2], vec![1, 0], vec![2, 1, 0]];
        let err = Topology::from_matrix(&matrix).unwrap_err();
        assert!(err.to_string().contains("row 2 has 2 columns"));
    }

    #[test]
    fn test_from_matrix_rejects_negative_cost() {
        let matrix = vec![vec![0, -5], vec![-1, 0]];
        let err = Topology::from_matrix(&matrix).unwrap_err();
        assert!(err.to_string().contains("negative link cost -5"));
    }

    #[test]
    fn test_from_matrix_rejects_negative_on_diagonal() {
        // Only -1 is allowed as a sentinel, even on the diagonal.
        let matrix = vec![vec![-2, 1], vec![1, 0]];
        let err = Topology::from_matrix(&matrix).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidTopology(_)));
    }

    #[test]
    fn test_from_matrix_filters_sentinel_and_self_links() {
        let matrix = vec![vec![0, NO_LINK], vec![3, 0]];
        let topology = Topology::from_matrix(&matrix).unwrap();
        assert_eq!(topology.link_cost(1, 2), None);
        assert_eq!(topology.link_cost(2, 1), Some(3));
        assert_eq!(topology.link_cost(1, 1), None);
    }

    #[test]
    fn test_from_matrix_ignores_nonzero_diagonal() {
        let matrix = vec![vec![9, 1], vec![1, 9]];
        let topology = Topology::from_matrix(&matrix).unwrap();
        assert_eq!(topology.link_cost(1, 1), None);
        assert_eq!(topology.link_cost(2, 2), None);
        assert_eq!(topology.link_cost(1, 2), Some(1));
    }

    #[test]
    fn test_from_matrix_rejects_oversized_cost() {
        let too_big = Cost::MAX as i64 + 1;
        let matrix = vec![vec![0, too_big], vec![1, 0]];
        let err = Topology::from_matrix(&matrix).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_from_matrix_accepts_empty() {
        let topology = Topology::from_matrix(&[]).unwrap();
        assert_eq!(topology.router_count(), 0);
        assert!(!topology.contains(1));
    }

    #[test]
    fn test_contains_bounds() {
        let matrix = vec![vec![0, 1], vec![1, 0]];
        let topology = Topology::from_matrix(&matrix).unwrap();
        assert!(!topology.contains(0));
        assert!(topology.contains(1));
        assert!(topology.contains(2));
        assert!(!topology.contains(3));
    }

    #[test]
    fn test_routers_iterates_ascending() {
        let matrix = vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]];
        let topology = Topology::from_matrix(&matrix).unwrap();
        let ids: Vec<RouterId> = topology.routers().collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_matrix_valid() {
        let input = "0 2 -1\n2 0 1\n-1 1 0\n";
        let matrix = parse_matrix(input).unwrap();
        assert_eq!(
            matrix,
            vec![vec![0, 2, -1], vec![2, 0, 1], vec![-1, 1, 0]]
        );
    }

    #[test]
    fn test_parse_matrix_skips_blank_lines() {
        let input = "0 1\n\n1 0\n\n";
        let matrix = parse_matrix(input).unwrap();
        assert_eq!(matrix.len(), 2);
    }

    #[test]
    fn test_parse_matrix_rejects_junk() {
        let input = "0 1\n1 x\n";
        let err = parse_matrix(input).unwrap_err();
        assert!(err.to_string().contains("invalid cost value 'x' on line 2"));
    }

    #[test]
    fn test_parse_matrix_rejects_empty_input() {
        let err = parse_matrix("\n  \n").unwrap_err();
        assert!(err.to_string().contains("no rows"));
    }
}
