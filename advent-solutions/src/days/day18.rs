//! Day 18: falling memory bytes

use crate::util::grid::Grid;
use crate::util::point::Point;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use anyhow::anyhow;
use regex::Regex;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use tracing::debug;

const SAMPLE: &str = "5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 18, sample = SAMPLE, tags = ["grid", "graph"], expected(part1 = "372", part2 = "25,6"))]
pub struct Day18;

#[derive(Clone, Copy)]
struct Params {
    w: i32,
    h: i32,
    prefix: usize,
}

const SAMPLE_PARAMS: Params = Params {
    w: 7,
    h: 7,
    prefix: 12,
};
const REAL_PARAMS: Params = Params {
    w: 71,
    h: 71,
    prefix: 1024,
};

pub struct MemorySpace {
    params: Params,
    blocks: Vec<Point>,
    board: Grid<u8>,
}

impl PuzzleParser for Day18 {
    type SharedData<'a> = MemorySpace;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let expr = Regex::new(r"^(\d+),(\d+)$").expect("static pattern");

        let blocks = input
            .trim()
            .lines()
            .map(|line| {
                let caps = expr
                    .captures(line.trim())
                    .ok_or_else(|| ParseError::InvalidFormat(format!("bad byte line {line:?}")))?;
                Ok(Point::new(
                    caps[1].parse().expect("digits only"),
                    caps[2].parse().expect("digits only"),
                ))
            })
            .collect::<Result<Vec<Point>, ParseError>>()?;

        // the sample memory space is 7x7; coordinates tell the two apart
        let params = if blocks
            .iter()
            .all(|p| p.x < SAMPLE_PARAMS.w && p.y < SAMPLE_PARAMS.h)
        {
            SAMPLE_PARAMS
        } else {
            REAL_PARAMS
        };

        if blocks.len() < params.prefix {
            return Err(ParseError::MissingData(format!(
                "expected at least {} bytes",
                params.prefix
            )));
        }

        let mut board = Grid::filled(params.h, params.w, b'.');
        for &p in &blocks[..params.prefix] {
            board[p] = b'#';
        }

        Ok(MemorySpace {
            params,
            blocks,
            board,
        })
    }
}

fn dijkstra(board: &Grid<u8>, start: Point, end: Point) -> Result<Vec<Point>, SolveError> {
    let mut dist: HashMap<Point, u64> = HashMap::new();
    let mut prev: HashMap<Point, Point> = HashMap::new();
    let mut pq = BinaryHeap::new();

    dist.insert(start, 0);
    pq.push(Reverse((0u64, start)));

    while let Some(Reverse((w, p))) = pq.pop() {
        if dist.get(&p).is_some_and(|&d| w > d) {
            continue;
        }

        for n in board.cardinal_neighbors(p) {
            if board[n] == b'#' {
                continue;
            }

            let alt = w + 1;
            if dist.get(&n).is_none_or(|&d| alt < d) {
                dist.insert(n, alt);
                prev.insert(n, p);
                pq.push(Reverse((alt, n)));
            }
        }
    }

    let mut path = vec![end];
    let mut cur = end;
    while cur != start {
        cur = *prev
            .get(&cur)
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("exit unreachable").into()))?;
        path.push(cur);
    }
    path.reverse();

    Ok(path)
}

fn is_reachable(board: &Grid<u8>, start: Point, end: Point) -> bool {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([start]);

    while let Some(p) = queue.pop_front() {
        if p == end {
            return true;
        }

        if !visited.insert(p) {
            continue;
        }

        for n in board.cardinal_neighbors(p) {
            if board[n] != b'#' {
                queue.push_back(n);
            }
        }
    }

    false
}

impl PartSolver<1> for Day18 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let start = Point::new(0, 0);
        let end = Point::new(shared.params.w - 1, shared.params.h - 1);

        let path = dijkstra(&shared.board, start, end)?;
        debug!("\n{}", shared.board.render_with_marks(path.iter().copied()));

        // counting steps, so the start point doesn't count
        Ok((path.len() - 1).to_string())
    }
}

impl PartSolver<2> for Day18 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let start = Point::new(0, 0);
        let end = Point::new(shared.params.w - 1, shared.params.h - 1);

        let mut board = shared.board.clone();
        let mut applied = shared.params.prefix;
        while is_reachable(&board, start, end) {
            let next = *shared.blocks.get(applied).ok_or_else(|| {
                SolveError::SolveFailed(anyhow!("exit never becomes unreachable").into())
            })?;
            board[next] = b'#';
            applied += 1;
        }

        let p = shared.blocks[applied - 1];
        Ok(format!("{},{}", p.x, p.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    fn solve(part: u8) -> String {
        let mut shared = Day18::parse(SAMPLE).unwrap();
        Day18::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn part_one_sample() {
        assert_eq!(solve(1), "22");
    }

    #[test]
    fn part_two_sample() {
        assert_eq!(solve(2), "6,1");
    }

    #[test]
    fn sample_dimensions_detected() {
        let shared = Day18::parse(SAMPLE).unwrap();
        assert_eq!(shared.params.w, 7);
        assert_eq!(shared.params.prefix, 12);
        assert_eq!(shared.board[Point::new(5, 4)], b'#');
        assert_eq!(shared.board[Point::new(0, 0)], b'.');
    }
}
