//! Day 16: reindeer maze, where turning costs a thousand points

use crate::util::grid::Grid;
use crate::util::point::{self, Point};
use crate::util::turtle::Turtle;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use anyhow::anyhow;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use tracing::debug;

const SAMPLE: &str = "#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 16, sample = SAMPLE, tags = ["grid", "graph"], expected(part1 = "85420", part2 = "492"))]
pub struct Day16;

pub struct Maze {
    board: Grid<u8>,
    search: Option<Search>,
}

/// Outcome of the shortest-path search, shared between the parts
struct Search {
    cost: u64,
    best_path_tiles: usize,
}

struct Edge {
    to: Point,
    dir: Point,
    length: u64,
}

impl PuzzleParser for Day16 {
    type SharedData<'a> = Maze;

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
        Ok(Maze {
            board,
            search: None,
        })
    }
}

fn is_open(board: &Grid<u8>, p: Point) -> bool {
    board.in_bounds(p) && board[p] != b'#'
}

/// Compress corridors into weighted edges: an edge runs from a junction
/// along a straight run of cells with no side openings.
fn build_edges(board: &Grid<u8>, start: Point) -> HashMap<Point, Vec<Edge>> {
    let can_go_straight =
        |p: Point, d: Point| is_open(board, p + d);
    let can_move_to_side = |p: Point, d: Point| {
        is_open(board, p + d.turn_left()) || is_open(board, p + d.turn_right())
    };

    let mut edges: HashMap<Point, Vec<Edge>> = HashMap::new();
    let mut queue = VecDeque::from([start]);
    let mut visited = HashSet::new();

    while let Some(cur) = queue.pop_front() {
        if !visited.insert(cur) {
            continue;
        }

        for d in point::CARDINALS {
            let n = cur + d;
            if !is_open(board, n) {
                continue;
            }

            let mut length = 1;
            let mut new_p = n;
            while can_go_straight(new_p, d) && !can_move_to_side(new_p, d) {
                length += 1;
                new_p += d;
            }

            edges.entry(cur).or_default().push(Edge {
                to: new_p,
                dir: d,
                length,
            });
            queue.push_back(new_p);
        }
    }

    edges
}

/// Cost of reorienting from one heading to another, in quarter turns
fn turns_between(from: Point, to: Point) -> u64 {
    let dx = from.x != to.x;
    let dy = from.y != to.y;
    match (dx, dy) {
        (true, true) => 1,
        (false, false) => 0,
        _ => 2,
    }
}

fn search(board: &Grid<u8>) -> Result<Search, SolveError> {
    let start = board.find(b'S').expect("validated in parse");
    let end = board.find(b'E').expect("validated in parse");

    let edges = build_edges(board, start);

    let mut dist: HashMap<Turtle, u64> = HashMap::new();
    let mut prev: HashMap<Turtle, Vec<Turtle>> = HashMap::new();
    let mut pq = BinaryHeap::new();

    let origin = Turtle::new(start, point::RIGHT);
    dist.insert(origin, 0);
    pq.push(Reverse((0u64, origin)));

    while let Some(Reverse((w, t))) = pq.pop() {
        if dist.get(&t).is_some_and(|&d| w > d) {
            continue;
        }

        let Some(outgoing) = edges.get(&t.position) else {
            continue;
        };

        for edge in outgoing {
            let turns = turns_between(t.heading, edge.dir);
            let alt = w + edge.length + turns * 1000;
            let next = Turtle::new(edge.to, edge.dir);

            match dist.get(&next) {
                Some(&d) if alt == d => prev.entry(next).or_default().push(t),
                Some(&d) if alt > d => {}
                _ => {
                    dist.insert(next, alt);
                    prev.insert(next, vec![t]);
                    pq.push(Reverse((alt, next)));
                }
            }
        }
    }

    let (&end_turtle, &cost) = dist
        .iter()
        .filter(|(t, _)| t.position == end)
        .min_by_key(|&(_, &c)| c)
        .ok_or_else(|| SolveError::SolveFailed(anyhow!("no path found").into()))?;

    // walk the predecessor graph to gather every tile on any best path
    let mut tiles: HashSet<Point> = HashSet::new();
    let mut segments: Vec<(Point, Point)> = Vec::new();
    let mut queue = VecDeque::from([end_turtle]);
    let mut walked: HashSet<Turtle> = HashSet::new();

    while let Some(cur) = queue.pop_front() {
        if !walked.insert(cur) {
            continue;
        }

        tiles.insert(cur.position);
        for &t in prev.get(&cur).into_iter().flatten() {
            segments.push((cur.position, t.position));
            queue.push_back(t);
        }
    }

    for (lhs, rhs) in segments {
        let dir = Point::new((rhs.x - lhs.x).clamp(-1, 1), (rhs.y - lhs.y).clamp(-1, 1));

        let mut p = lhs;
        loop {
            tiles.insert(p);
            p += dir;
            if p == rhs {
                break;
            }
        }
    }

    debug!(cost, tiles = tiles.len(), "maze searched");

    Ok(Search {
        cost,
        best_path_tiles: tiles.len(),
    })
}

fn cached_search<'a>(shared: &'a mut Maze) -> Result<&'a Search, SolveError> {
    if shared.search.is_none() {
        shared.search = Some(search(&shared.board)?);
    }
    Ok(shared.search.as_ref().expect("just inserted"))
}

impl PartSolver<1> for Day16 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(cached_search(shared)?.cost.to_string())
    }
}

impl PartSolver<2> for Day16 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(cached_search(shared)?.best_path_tiles.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    const FIRST_SAMPLE: &str = "###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############";

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Day16::parse(input).unwrap();
        Day16::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn first_sample() {
        assert_eq!(solve(FIRST_SAMPLE, 1), "7036");
        assert_eq!(solve(FIRST_SAMPLE, 2), "45");
    }

    #[test]
    fn second_sample() {
        assert_eq!(solve(SAMPLE, 1), "11048");
        assert_eq!(solve(SAMPLE, 2), "64");
    }

    #[test]
    fn turn_costs() {
        assert_eq!(turns_between(point::RIGHT, point::RIGHT), 0);
        assert_eq!(turns_between(point::RIGHT, point::UP), 1);
        assert_eq!(turns_between(point::RIGHT, point::LEFT), 2);
    }
}
