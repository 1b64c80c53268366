use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::traits::Pather;

/// Compute one shortest path from `start` to `goal` by breadth-first search.
///
/// Neighbors are explored in the order `pather` reports them, so when
/// several shortest paths exist the one returned is the first discovered.
/// Returns the full path (including both endpoints) or `None` if `goal` is
/// unreachable.
pub fn bfs_path<N, P>(pather: &P, start: N, goal: N) -> Option<Vec<N>>
where
    N: Clone + Eq + Hash,
    P: Pather<N> + ?Sized,
{
    if start == goal {
        return Some(vec![start]);
    }

    // Keys double as the visited set; `None` marks the start.
    let mut parent: HashMap<N, Option<N>> = HashMap::new();
    parent.insert(start.clone(), None);

    let mut queue: VecDeque<N> = VecDeque::new();
    queue.push_back(start);

    let mut nbuf: Vec<N> = Vec::new();

    while let Some(current) = queue.pop_front() {
        if current == goal {
            break;
        }

        nbuf.clear();
        pather.neighbors(&current, &mut nbuf);
        log::trace!(
            "bfs: expanding node with {} neighbors, {} queued",
            nbuf.len(),
            queue.len()
        );

        for n in nbuf.drain(..) {
            if let Entry::Vacant(slot) = parent.entry(n) {
                queue.push_back(slot.key().clone());
                slot.insert(Some(current.clone()));
            }
        }
    }

    if !parent.contains_key(&goal) {
        log::debug!("bfs: goal unreachable after visiting {} nodes", parent.len());
        return None;
    }

    // Reconstruct path.
    let mut path = Vec::new();
    let mut node = Some(goal);
    while let Some(n) = node {
        node = parent.get(&n).cloned().flatten();
        path.push(n);
    }
    path.reverse();
    log::debug!(
        "bfs: found path of {} steps after visiting {} nodes",
        path.len() - 1,
        parent.len()
    );
    Some(path)
}

/// Compute the breadth-first distance map from `start`.
///
/// Every node reachable from `start` maps to its distance in doors; `start`
/// itself maps to 0, even when `pather` does not know it.
pub fn bfs_map<N, P>(pather: &P, start: N) -> HashMap<N, usize>
where
    N: Clone + Eq + Hash,
    P: Pather<N> + ?Sized,
{
    let mut dist: HashMap<N, usize> = HashMap::new();
    dist.insert(start.clone(), 0);

    let mut queue: VecDeque<(N, usize)> = VecDeque::new();
    queue.push_back((start, 0));

    let mut nbuf: Vec<N> = Vec::new();

    while let Some((current, d)) = queue.pop_front() {
        nbuf.clear();
        pather.neighbors(&current, &mut nbuf);

        for n in nbuf.drain(..) {
            if let Entry::Vacant(slot) = dist.entry(n) {
                queue.push_back((slot.key().clone(), d + 1));
                slot.insert(d + 1);
            }
        }
    }

    dist
}
