//! Day 10: hiking trails on a topographic map

use crate::util::grid::Grid;
use crate::util::point::Point;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use std::collections::{HashMap, HashSet};

const SAMPLE: &str = "89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 10, sample = SAMPLE, tags = ["grid"], expected(part1 = "816"))]
pub struct Day10;

type Trail = Vec<Point>;

pub struct TrailMap {
    board: Grid<u8>,
    trails: Option<HashSet<Trail>>,
}

impl PuzzleParser for Day10 {
    type SharedData<'a> = TrailMap;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let board = Grid::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        Ok(TrailMap {
            board,
            trails: None,
        })
    }
}

fn find_trails(board: &Grid<u8>, stack: &mut Trail, trails: &mut HashSet<Trail>) {
    let cur = *stack.last().expect("stack is never empty");
    let next_height = board[cur] + 1;

    for neighbor in board.cardinal_neighbors(cur).collect::<Vec<_>>() {
        if board[neighbor] == next_height {
            stack.push(neighbor);

            if next_height == b'9' {
                trails.insert(stack.clone());
            } else {
                find_trails(board, stack, trails);
            }

            stack.pop();
        }
    }
}

fn find_all_trails(board: &Grid<u8>) -> HashSet<Trail> {
    let mut trails = HashSet::new();
    let mut stack = Vec::new();

    for p in board.points() {
        if board[p] == b'0' {
            stack.push(p);
            find_trails(board, &mut stack, &mut trails);
            stack.pop();
        }
    }

    trails
}

/// Trails are enumerated once and shared between the parts
fn trails(shared: &mut TrailMap) -> &HashSet<Trail> {
    if shared.trails.is_none() {
        shared.trails = Some(find_all_trails(&shared.board));
    }
    shared.trails.as_ref().expect("just inserted")
}

impl PartSolver<1> for Day10 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut nines_by_trailhead: HashMap<Point, HashSet<Point>> = HashMap::new();
        for trail in trails(shared) {
            nines_by_trailhead
                .entry(trail[0])
                .or_default()
                .insert(*trail.last().expect("trails are non-empty"));
        }

        let sum: usize = nines_by_trailhead.values().map(HashSet::len).sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Day10 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(trails(shared).len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    fn solve(part: u8) -> String {
        let mut shared = Day10::parse(SAMPLE).unwrap();
        Day10::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn part_one_sample() {
        assert_eq!(solve(1), "36");
    }

    #[test]
    fn part_two_sample() {
        assert_eq!(solve(2), "81");
    }

    #[test]
    fn single_trail() {
        let mut shared = Day10::parse("0123456789").unwrap();
        assert_eq!(trails(&mut shared).len(), 1);
    }
}
