//! Day 12: fencing garden regions

use crate::util::grid::Grid;
use crate::util::point::{self, Point};
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use std::collections::HashMap;

const SAMPLE: &str = "RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 12, sample = SAMPLE, tags = ["grid"], expected(part1 = "1377008", part2 = "815788"))]
pub struct Day12;

impl PuzzleParser for Day12 {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
    rows: i32,
    cols: i32,
}

impl UnionFind {
    fn new(rows: i32, cols: i32) -> Self {
        let size = (rows * cols) as usize;
        Self {
            parent: (0..size).collect(),
            rank: vec![1; size],
            rows,
            cols,
        }
    }

    /// Root representative of the point's set, None when out of bounds
    fn find_point(&mut self, p: Point) -> Option<Point> {
        if p.x < 0 || p.x >= self.cols || p.y < 0 || p.y >= self.rows {
            return None;
        }

        let root = self.find(self.point_to_index(p));
        Some(self.index_to_point(root))
    }

    fn unite_points(&mut self, x: Point, y: Point) {
        let ix = self.point_to_index(x);
        let iy = self.point_to_index(y);
        self.unite(ix, iy);
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] == i {
            return i;
        }

        let root = self.find(self.parent[i]);
        self.parent[i] = root;
        root
    }

    fn unite(&mut self, x: usize, y: usize) {
        let mut rx = self.find(x);
        let mut ry = self.find(y);

        if rx == ry {
            return;
        }

        if self.rank[rx] < self.rank[ry] {
            std::mem::swap(&mut rx, &mut ry);
        }

        self.parent[ry] = rx;
        self.rank[rx] += self.rank[ry];
    }

    fn point_to_index(&self, p: Point) -> usize {
        (p.y * self.cols + p.x) as usize
    }

    fn index_to_point(&self, i: usize) -> Point {
        Point::new(i as i32 % self.cols, i as i32 / self.cols)
    }
}

struct Region {
    area: usize,
    perimeter: usize,
    num_sides: usize,
}

fn make_region(uf: &mut UnionFind, board: &Grid<u8>, points: &[Point], id: u8) -> Region {
    let area = points.len();

    let mut perimeter = 0;
    let mut min_x = i32::MAX;
    let mut max_x = i32::MIN;
    let mut min_y = i32::MAX;
    let mut max_y = i32::MIN;

    for &p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);

        perimeter += 4;
        for neighbor in board.cardinal_neighbors(p) {
            if board[neighbor] == id {
                perimeter -= 1;
            }
        }
    }

    // Count sides by counting corners. Slide a 2x2 window over the bounding
    // box (one cell of margin); with one or three in-region cells the window
    // sits on a corner, and a diagonal pair of in-region cells is two.
    let repr = uf.find_point(points[0]);
    let mut sides = 0;
    for y in min_y - 1..=max_y {
        for x in min_x - 1..=max_x {
            let r1 = uf.find_point(Point::new(x, y));
            let r2 = uf.find_point(Point::new(x + 1, y));
            let r3 = uf.find_point(Point::new(x, y + 1));
            let r4 = uf.find_point(Point::new(x + 1, y + 1));

            let num_us = [r1, r2, r3, r4].iter().filter(|&&r| r == repr).count();

            if num_us == 1 || num_us == 3 {
                sides += 1;
            } else if num_us == 2 && (r1 == r4 || r2 == r3) {
                sides += 2;
            }
        }
    }

    Region {
        area,
        perimeter,
        num_sides: sides,
    }
}

fn find_regions(board: &Grid<u8>) -> Vec<Region> {
    let mut uf = UnionFind::new(board.rows(), board.cols());
    for cur in board.points() {
        let right = cur + point::RIGHT;
        let down = cur + point::DOWN;

        if board.in_bounds(right) && board[cur] == board[right] {
            uf.unite_points(cur, right);
        }

        if board.in_bounds(down) && board[cur] == board[down] {
            uf.unite_points(cur, down);
        }
    }

    let mut points_by_root: HashMap<Point, Vec<Point>> = HashMap::new();
    for p in board.points() {
        let root = uf.find_point(p).expect("in-bounds point has a root");
        points_by_root.entry(root).or_default().push(p);
    }

    points_by_root
        .iter()
        .map(|(&root, points)| make_region(&mut uf, board, points, board[root]))
        .collect()
}

impl PartSolver<1> for Day12 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total_price: usize = find_regions(shared)
            .iter()
            .map(|r| r.area * r.perimeter)
            .sum();

        Ok(total_price.to_string())
    }
}

impl PartSolver<2> for Day12 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total_price: usize = find_regions(shared)
            .iter()
            .map(|r| r.area * r.num_sides)
            .sum();

        Ok(total_price.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Day12::parse(input).unwrap();
        Day12::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn part_one_sample() {
        assert_eq!(solve(SAMPLE, 1), "1930");
    }

    #[test]
    fn part_two_sample() {
        assert_eq!(solve(SAMPLE, 2), "1206");
    }

    #[test]
    fn small_samples_from_statement() {
        let small = "AAAA\nBBCD\nBBCC\nEEEC";
        assert_eq!(solve(small, 1), "140");
        assert_eq!(solve(small, 2), "80");

        let xoxo = "OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO";
        assert_eq!(solve(xoxo, 1), "772");
    }

    #[test]
    fn diagonal_touching_regions() {
        // the part-two example with diagonally touching same-letter plots
        let input = "AAAAAA\nAAABBA\nAAABBA\nABBAAA\nABBAAA\nAAAAAA";
        assert_eq!(solve(input, 2), "368");
    }
}
