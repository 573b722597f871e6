//! Day 6: guard patrol and loop-making obstacles

use crate::util::grid::Grid;
use crate::util::point::{self, Point};
use crate::util::turtle::Turtle;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use rayon::prelude::*;
use std::collections::HashSet;

const SAMPLE: &str = "....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 6, sample = SAMPLE, tags = ["grid"], expected(part1 = "5080", part2 = "1919"))]
pub struct Day06;

pub struct Patrol {
    board: Grid<u8>,
    start: Point,
}

impl PuzzleParser for Day06 {
    type SharedData<'a> = Patrol;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let board = Grid::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let mut starts = board.points().filter(|&p| board[p] == b'^');
        let start = starts
            .next()
            .ok_or_else(|| ParseError::MissingData("no guard start".into()))?;
        if starts.next().is_some() {
            return Err(ParseError::InvalidFormat("multiple guard starts".into()));
        }

        Ok(Patrol { board, start })
    }
}

struct WalkResult {
    visited: HashSet<Turtle>,
    loop_detected: bool,
}

fn walk(board: &Grid<u8>, start: Point, heading: Point, obstacle: Option<Point>) -> WalkResult {
    let mut visited = HashSet::new();

    let mut cur = Turtle::new(start, heading);
    while board.in_bounds(cur.position) {
        if !visited.insert(cur) {
            return WalkResult {
                visited,
                loop_detected: true,
            };
        }

        let next = cur.position + cur.heading;
        if !board.in_bounds(next) {
            break;
        }

        cur = if board[next] == b'#' || Some(next) == obstacle {
            cur.turn_right()
        } else {
            cur.step()
        };
    }

    WalkResult {
        visited,
        loop_detected: false,
    }
}

impl PartSolver<1> for Day06 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let result = walk(&shared.board, shared.start, point::UP, None);
        let positions: HashSet<Point> = result.visited.iter().map(|t| t.position).collect();

        Ok(positions.len().to_string())
    }
}

impl PartSolver<2> for Day06 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let simple_path = walk(&shared.board, shared.start, point::UP, None).visited;

        // a new obstacle only matters if it sits on the unobstructed path
        let candidates: HashSet<Point> = simple_path
            .iter()
            .map(|t| t.position)
            .filter(|&p| p != shared.start)
            .collect();

        let board = &shared.board;
        let start = shared.start;
        let num_loops = candidates
            .par_iter()
            .filter(|&&obstacle| walk(board, start, point::UP, Some(obstacle)).loop_detected)
            .count();

        Ok(num_loops.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    fn solve(part: u8) -> String {
        let mut shared = Day06::parse(SAMPLE).unwrap();
        Day06::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn part_one_sample() {
        assert_eq!(solve(1), "41");
    }

    #[test]
    fn part_two_sample() {
        assert_eq!(solve(2), "6");
    }

    #[test]
    fn missing_start_is_a_parse_error() {
        assert!(Day06::parse("....\n....").is_err());
    }
}
