//! Day 20: racing the CPU with wall-phasing cheats

use crate::util::grid::Grid;
use crate::util::point::Point;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use anyhow::anyhow;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use tracing::debug;

const SAMPLE: &str = "###############
#...#...#.....#
#.#.#.#.#.###.#
#S#...#.#.#...#
#######.#.#.###
#######.#.#...#
#######.#.###.#
###..E#...#...#
###.#######.###
#...###...#...#
#.#####.#.###.#
#.#...#.#.#...#
#.#.#.#.#.#.###
#...#...#...###
###############";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 20, sample = SAMPLE, tags = ["grid", "graph"], expected(part1 = "1351", part2 = "966130"))]
pub struct Day20;

/// Cheats must save at least this much to count
const GOOD_CHEAT_THRESHOLD: i64 = 100;

pub struct RaceTrack {
    board: Grid<u8>,
    path: Option<Vec<Point>>,
}

impl PuzzleParser for Day20 {
    type SharedData<'a> = RaceTrack;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let board = Grid::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        for needle in [b'S', b'E'] {
            if board.find(needle).is_none() {
                return Err(ParseError::MissingData(format!(
                    "no {:?} tile",
                    needle as char
                )));
            }
        }
        Ok(RaceTrack { board, path: None })
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
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("track has no path").into()))?;
        path.push(cur);
    }
    path.reverse();

    Ok(path)
}

/// The honest racing line, computed once and shared between the parts
fn vanilla_path(shared: &mut RaceTrack) -> Result<&Vec<Point>, SolveError> {
    if shared.path.is_none() {
        let start = shared.board.find(b'S').expect("validated in parse");
        let end = shared.board.find(b'E').expect("validated in parse");
        shared.path = Some(dijkstra(&shared.board, start, end)?);
    }
    Ok(shared.path.as_ref().expect("just inserted"))
}

/// Count 2-picosecond cheats (one wall skipped) saving at least `threshold`.
///
/// Valid targets two steps from `x`, through an adjacent wall:
///
/// ```text
///  ..*..
///  .*#*.
///  *#x#*
///  .*#*.
///  ..*..
/// ```
fn count_wall_skips(board: &Grid<u8>, path: &[Point], threshold: i64) -> usize {
    let cheat_paths = [
        // straight through a wall
        (Point::new(1, 0), Point::new(2, 0)),
        (Point::new(-1, 0), Point::new(-2, 0)),
        (Point::new(0, 1), Point::new(0, 2)),
        (Point::new(0, -1), Point::new(0, -2)),
        // around a corner; two entries for each cardinal direction
        (Point::new(1, 0), Point::new(1, 1)),
        (Point::new(1, 0), Point::new(1, -1)),
        (Point::new(-1, 0), Point::new(-1, 1)),
        (Point::new(-1, 0), Point::new(-1, -1)),
        (Point::new(0, 1), Point::new(1, 1)),
        (Point::new(0, 1), Point::new(-1, 1)),
        (Point::new(0, -1), Point::new(1, -1)),
        (Point::new(0, -1), Point::new(-1, -1)),
    ];

    let indices_by_point: HashMap<Point, usize> =
        path.iter().enumerate().map(|(i, &p)| (p, i)).collect();

    let mut num_good_cheats = 0;
    for (i, &p) in path.iter().enumerate() {
        for &(via, to) in &cheat_paths {
            let wall = p + via;
            let dest = p + to;

            if board.get(wall) != Some(&b'#') {
                continue;
            }

            let Some(&j) = indices_by_point.get(&dest) else {
                continue;
            };
            if j < i {
                continue;
            }

            let savings = j as i64 - i as i64 - 2;
            if savings >= threshold {
                debug!(%wall, savings, "wall-skip cheat");
                num_good_cheats += 1;
            }
        }
    }

    num_good_cheats
}

/// Count cheats of up to `max_cheat` picoseconds saving at least `threshold`:
/// any pair of path cells within that Manhattan distance is a candidate.
fn count_long_cheats(path: &[Point], max_cheat: i32, threshold: i64) -> usize {
    let mut num_good_cheats = 0;
    for i in 0..path.len() {
        for j in i + 1..path.len() {
            let d = path[i].manhattan_distance(path[j]);
            if d <= max_cheat {
                let savings = j as i64 - i as i64 - d as i64;
                if savings >= threshold {
                    num_good_cheats += 1;
                }
            }
        }
    }

    num_good_cheats
}

impl PartSolver<1> for Day20 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        vanilla_path(shared)?;
        let path = shared.path.as_ref().expect("just computed");
        let count = count_wall_skips(&shared.board, path, GOOD_CHEAT_THRESHOLD);
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Day20 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let path = vanilla_path(shared)?;
        Ok(count_long_cheats(path, 20, GOOD_CHEAT_THRESHOLD).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_path() -> (Grid<u8>, Vec<Point>) {
        let mut shared = Day20::parse(SAMPLE).unwrap();
        vanilla_path(&mut shared).unwrap();
        let path = shared.path.clone().unwrap();
        (shared.board, path)
    }

    #[test]
    fn honest_run_takes_84_picoseconds() {
        let (_, path) = sample_path();
        assert_eq!(path.len() - 1, 84);
    }

    #[test]
    fn wall_skip_counts_from_statement() {
        let (board, path) = sample_path();
        // the published table: one cheat each saving 20, 36, 38, 40 and 64
        assert_eq!(count_wall_skips(&board, &path, 20), 5);
        assert_eq!(count_wall_skips(&board, &path, 64), 1);
        // every cheat in the sample
        assert_eq!(count_wall_skips(&board, &path, 0), 44);
    }

    #[test]
    fn long_cheat_counts_from_statement() {
        let (_, path) = sample_path();
        // the published table of 20-picosecond cheats saving 50 or more
        assert_eq!(count_long_cheats(&path, 20, 50), 285);
        assert_eq!(count_long_cheats(&path, 20, 74), 7);
        assert_eq!(count_long_cheats(&path, 20, 76), 3);
    }

    #[test]
    fn no_good_cheats_in_the_small_sample() {
        let (board, path) = sample_path();
        assert_eq!(count_wall_skips(&board, &path, 100), 0);
        assert_eq!(count_long_cheats(&path, 20, 100), 0);
    }
}
