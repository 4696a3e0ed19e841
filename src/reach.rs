use std::collections::VecDeque;

use crate::field::{Field, Pos, Tile};

/// Depth-first search from `start` towards the hat, stopping at the first hit.
/// Only holes block; the field is never modified.
pub fn is_reachable(field: &Field, start: Pos) -> bool {
    if !field.contains(start) {
        return false;
    }
    let mut seen = vec![vec![false; field.width()]; field.height()];
    let mut stack = vec![start];

    while let Some(pos) = stack.pop() {
        let tile = match field.get(pos) {
            Some(tile) => tile,
            None => continue,
        };
        if tile == Tile::Hat {
            return true;
        }
        if !tile.is_passable() || seen[pos.y][pos.x] {
            continue;
        }
        seen[pos.y][pos.x] = true;
        stack.extend(field.neighbors(pos).filter(|next| !seen[next.y][next.x]));
    }
    false
}

/// Every cell reachable from `start` without stepping into a hole.
pub fn flood(field: &Field, start: Pos) -> Vec<Vec<bool>> {
    let mut seen = vec![vec![false; field.width()]; field.height()];
    if !field.get(start).is_some_and(Tile::is_passable) {
        return seen;
    }
    let mut q = VecDeque::new();
    seen[start.y][start.x] = true;
    q.push_back(start);
    while let Some(pos) = q.pop_front() {
        for next in field.neighbors(pos) {
            if seen[next.y][next.x] {
                continue;
            }
            if !field.get(next).is_some_and(Tile::is_passable) {
                continue;
            }
            seen[next.y][next.x] = true;
            q.push_back(next);
        }
    }
    seen
}

pub fn reachable_count(field: &Field, start: Pos) -> usize {
    flood(field, start).iter().flatten().filter(|seen| **seen).count()
}

/// Length of the shortest walk from `start` to the hat, if there is one.
pub fn hat_distance(field: &Field, start: Pos) -> Option<usize> {
    if !field.get(start).is_some_and(Tile::is_passable) {
        return None;
    }
    let mut dist: Vec<Vec<Option<usize>>> = vec![vec![None; field.width()]; field.height()];
    let mut q = VecDeque::new();
    dist[start.y][start.x] = Some(0);
    q.push_back(start);

    while let Some(pos) = q.pop_front() {
        let base = dist[pos.y][pos.x]?;
        if field.get(pos) == Some(Tile::Hat) {
            return Some(base);
        }
        for next in field.neighbors(pos) {
            if dist[next.y][next.x].is_some() {
                continue;
            }
            if !field.get(next).is_some_and(Tile::is_passable) {
                continue;
            }
            dist[next.y][next.x] = Some(base + 1);
            q.push_back(next);
        }
    }
    None
}
