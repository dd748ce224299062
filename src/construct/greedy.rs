//! Greedy-edge construction.
//!
//! Scans all `n(n-1)/2` edges from shortest to longest and keeps an edge
//! when both endpoints still have degree below 2 and the edge joins two
//! different path fragments. After `n - 1` edges the fragments form one
//! Hamiltonian path; joining its two ends closes the tour.

use super::runner::Construction;
use super::union_find::DisjointSet;
use crate::problem::Instance;
use crate::tour::Tour;

/// The `n` edges greedy matching accepts, in acceptance order.
///
/// The last entry is the edge that closes the Hamiltonian path into a
/// cycle. Equal-weight edges are taken in `(i, j)` lexicographic order.
pub fn greedy_edges(instance: &Instance) -> Vec<(usize, usize)> {
    let n = instance.n();
    let mut candidates: Vec<(usize, usize)> = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            candidates.push((i, j));
        }
    }
    candidates.sort_by(|&(a, b), &(c, d)| instance.dist(a, b).total_cmp(&instance.dist(c, d)));

    let mut degree = vec![0u8; n];
    let mut fragments = DisjointSet::new(n);
    let mut accepted = Vec::with_capacity(n);

    for (i, j) in candidates {
        if accepted.len() == n - 1 {
            break;
        }
        if degree[i] == 2 || degree[j] == 2 {
            continue;
        }
        if !fragments.union(i, j) {
            continue;
        }
        degree[i] += 1;
        degree[j] += 1;
        accepted.push((i, j));
    }

    let ends: Vec<usize> = (0..n).filter(|&c| degree[c] == 1).collect();
    assert!(
        accepted.len() == n - 1 && ends.len() == 2 && fragments.components() == 1,
        "greedy edge matching left {} fragments after {} edges",
        fragments.components(),
        accepted.len()
    );
    accepted.push((ends[0], ends[1]));
    accepted
}

/// Builds a tour from [`greedy_edges`] by walking the Hamiltonian path
/// from one of its endpoints. `O(n² log n)`.
pub fn greedy_edge(instance: &Instance) -> Construction {
    let n = instance.n();
    let edges = greedy_edges(instance);
    let (start, _) = edges[n - 1];

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::with_capacity(2); n];
    for &(i, j) in &edges[..n - 1] {
        adjacency[i].push(j);
        adjacency[j].push(i);
    }

    let mut order = Vec::with_capacity(n);
    let mut prev = usize::MAX;
    let mut current = start;
    loop {
        order.push(current);
        let next = adjacency[current].iter().copied().find(|&c| c != prev);
        match next {
            Some(next) => {
                prev = current;
                current = next;
            }
            None => break,
        }
    }
    assert_eq!(order.len(), n, "greedy edge path does not cover every city");

    let tour = Tour::from_vec(order);
    let cost = tour.cost(instance);
    tracing::debug!(n, cost, "greedy edge construction");
    Construction { tour, cost }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Point;

    fn five_cities() -> Instance {
        Instance::euclidean(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 3.0),
            Point::new(1.0, 5.0),
            Point::new(-2.0, 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_scenario_five_cities_single_cycle() {
        let instance = five_cities();
        let edges = greedy_edges(&instance);
        assert_eq!(edges.len(), 5);

        let mut degree = [0usize; 5];
        for &(i, j) in &edges {
            assert_ne!(i, j);
            degree[i] += 1;
            degree[j] += 1;
        }
        assert!(degree.iter().all(|&d| d == 2), "degrees {degree:?}");

        // every city reachable from city 0 over the accepted edges: one cycle
        let mut sets = DisjointSet::new(5);
        for &(i, j) in &edges {
            sets.union(i, j);
        }
        assert_eq!(sets.components(), 1);
    }

    #[test]
    fn test_edges_are_distinct() {
        let instance = five_cities();
        let mut edges: Vec<(usize, usize)> = greedy_edges(&instance)
            .into_iter()
            .map(|(i, j)| (i.min(j), i.max(j)))
            .collect();
        edges.sort_unstable();
        edges.dedup();
        assert_eq!(edges.len(), 5);
    }

    #[test]
    fn test_greedy_tour_matches_edges() {
        let instance = five_cities();
        let built = greedy_edge(&instance);
        assert!(built.tour.is_valid(5));
        assert!((built.cost - built.tour.cost(&instance)).abs() < 1e-12);

        let edge_cost: f64 = greedy_edges(&instance)
            .iter()
            .map(|&(i, j)| instance.dist(i, j))
            .sum();
        assert!((built.cost - edge_cost).abs() < 1e-9);
    }

    #[test]
    fn test_greedy_on_line_is_optimal() {
        let instance = Instance::euclidean(
            [3.0, 0.0, 7.0, 1.0, 5.0, 2.0]
                .iter()
                .map(|&x| Point::new(x, 0.0))
                .collect(),
        )
        .unwrap();
        let built = greedy_edge(&instance);
        assert!((built.cost - 14.0).abs() < 1e-12, "got {}", built.cost);
    }

    #[test]
    fn test_greedy_with_all_equal_distances() {
        let instance = Instance::from_fn(7, |_, _| 1.0).unwrap();
        let built = greedy_edge(&instance);
        assert!(built.tour.is_valid(7));
        assert!((built.cost - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_greedy_three_cities() {
        let instance = Instance::from_fn(3, |i, j| (i + j) as f64).unwrap();
        let built = greedy_edge(&instance);
        assert!(built.tour.is_valid(3));
        assert!((built.cost - 6.0).abs() < 1e-12);
    }
}
