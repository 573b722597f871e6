//! Day 8: antenna antinodes

use crate::util::point::Point;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use itertools::Itertools;
use std::collections::{HashMap, HashSet};
use tracing::debug;

const SAMPLE: &str = "............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 8, sample = SAMPLE, tags = ["grid"], expected(part1 = "423", part2 = "1287"))]
pub struct Day08;

pub struct AntennaMap {
    width: i32,
    height: i32,
    stations: HashMap<u8, Vec<Point>>,
}

impl AntennaMap {
    fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    fn find_antinodes(&self, resonant: bool) -> HashSet<Point> {
        let mut antinodes = HashSet::new();
        for points in self.stations.values() {
            for (&p1, &p2) in points.iter().tuple_combinations() {
                if resonant {
                    self.add_antinodes_resonant(&mut antinodes, p1, p2);
                } else {
                    let delta = p2 - p1;
                    self.add_antinode(&mut antinodes, p1 - delta);
                    self.add_antinode(&mut antinodes, p2 + delta);
                }
            }
        }
        antinodes
    }

    fn add_antinode(&self, antinodes: &mut HashSet<Point>, p: Point) {
        if self.contains(p) {
            antinodes.insert(p);
        }
    }

    fn add_antinodes_resonant(&self, antinodes: &mut HashSet<Point>, p1: Point, p2: Point) {
        let delta = p2 - p1;

        let mut a = p1;
        while self.contains(a) {
            antinodes.insert(a);
            a -= delta;
        }

        a = p2;
        while self.contains(a) {
            antinodes.insert(a);
            a += delta;
        }
    }

    fn render(&self, antinodes: &HashSet<Point>) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(if antinodes.contains(&Point::new(x, y)) {
                    'X'
                } else {
                    '.'
                });
            }
            out.push('\n');
        }
        out
    }
}

impl PuzzleParser for Day08 {
    type SharedData<'a> = AntennaMap;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut stations: HashMap<u8, Vec<Point>> = HashMap::new();

        let mut height = 0;
        let mut width = 0i32;
        for line in input.trim().lines() {
            width = width.max(line.len() as i32);
            for (x, c) in line.bytes().enumerate() {
                if c == b'.' {
                    continue;
                }
                stations
                    .entry(c)
                    .or_default()
                    .push(Point::new(x as i32, height));
            }
            height += 1;
        }

        if height == 0 {
            return Err(ParseError::MissingData("empty map".into()));
        }

        Ok(AntennaMap {
            width,
            height,
            stations,
        })
    }
}

impl PartSolver<1> for Day08 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let antinodes = shared.find_antinodes(false);
        debug!("antinodes:\n{}", shared.render(&antinodes));
        Ok(antinodes.len().to_string())
    }
}

impl PartSolver<2> for Day08 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let antinodes = shared.find_antinodes(true);
        debug!("antinodes:\n{}", shared.render(&antinodes));
        Ok(antinodes.len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    fn solve(part: u8) -> String {
        let mut shared = Day08::parse(SAMPLE).unwrap();
        Day08::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn part_one_sample() {
        assert_eq!(solve(1), "14");
    }

    #[test]
    fn part_two_sample() {
        assert_eq!(solve(2), "34");
    }

    #[test]
    fn antinodes_clip_to_map() {
        let shared = Day08::parse("aa..").unwrap();
        // pair at (0,0) and (1,0): only the antinode at (2,0) is in bounds
        let antinodes = shared.find_antinodes(false);
        assert_eq!(antinodes, HashSet::from([Point::new(2, 0)]));
    }
}
