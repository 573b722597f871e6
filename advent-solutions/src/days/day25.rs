//! Day 25: fitting keys into locks

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use std::collections::HashSet;
use tracing::debug;

const SAMPLE: &str = "#####
.####
.####
.####
.#.#.
.#...
.....

#####
##.##
.#.##
...##
...#.
...#.
.....

.....
#....
#....
#...#
#.#.#
#.###
#####

.....
.....
#.#..
###..
###.#
###.#
#####

.....
.....
.....
#....
#.#..
#.#.#
#####";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 1)]
#[puzzle(day = 25, sample = SAMPLE, tags = ["grid"], expected(part1 = "3133"))]
pub struct Day25;

const NUM_PINS: usize = 5;
const MAX_LEVEL: u8 = 5;

/// Pin heights of one lock or key schematic
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct Levels([u8; NUM_PINS]);

impl Levels {
    fn can_fit(self, other: Levels) -> bool {
        self.0
            .iter()
            .zip(other.0)
            .all(|(a, b)| a + b <= MAX_LEVEL)
    }
}

pub struct Schematics {
    locks: Vec<Levels>,
    keys: Vec<Levels>,
}

impl Schematics {
    fn count_fitting_pairs(&self) -> usize {
        debug!(locks = self.locks.len(), keys = self.keys.len(), "fitting");

        let fitting: HashSet<(Levels, Levels)> = self
            .locks
            .iter()
            .flat_map(|&lock| {
                self.keys
                    .iter()
                    .filter(move |&&key| lock.can_fit(key))
                    .map(move |&key| (lock, key))
            })
            .collect();

        fitting.len()
    }
}

impl PuzzleParser for Day25 {
    type SharedData<'a> = Schematics;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut locks = Vec::new();
        let mut keys = Vec::new();

        for block in input.trim().split("\n\n") {
            let lines: Vec<&str> = block.lines().map(str::trim).collect();
            if lines.len() != 7 || lines.iter().any(|line| line.len() != NUM_PINS) {
                return Err(ParseError::InvalidFormat(
                    "schematics are five columns by seven rows".into(),
                ));
            }

            // locks have their top row solid, keys their bottom row
            let is_lock = lines[0].starts_with('#');

            let mut levels = [0u8; NUM_PINS];
            for line in &lines[1..] {
                for (level, c) in levels.iter_mut().zip(line.bytes()) {
                    *level += u8::from(c == b'#');
                }
            }

            if is_lock {
                locks.push(Levels(levels));
            } else {
                if !lines[6].bytes().all(|c| c == b'#') {
                    return Err(ParseError::InvalidFormat(
                        "key schematic must have a solid bottom row".into(),
                    ));
                }
                // drop the solid bottom row from the counts
                for level in &mut levels {
                    *level -= 1;
                }
                keys.push(Levels(levels));
            }
        }

        Ok(Schematics { locks, keys })
    }
}

impl PartSolver<1> for Day25 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_fitting_pairs().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    #[test]
    fn part_one_sample() {
        let mut shared = Day25::parse(SAMPLE).unwrap();
        assert_eq!(Day25::solve_part_checked(&mut shared, 1).unwrap(), "3");
    }

    #[test]
    fn pin_heights_parsed() {
        let shared = Day25::parse(SAMPLE).unwrap();
        assert_eq!(shared.locks.len(), 2);
        assert_eq!(shared.keys.len(), 3);
        assert_eq!(shared.locks[0].0, [0, 5, 3, 4, 3]);
        assert_eq!(shared.keys[0].0, [5, 0, 2, 1, 3]);
    }

    #[test]
    fn overlapping_pin_blocks_fit() {
        let lock = Levels([0, 5, 3, 4, 3]);
        let key = Levels([5, 0, 2, 1, 3]);
        assert!(!lock.can_fit(key)); // last column overlaps: 3 + 3 > 5
        assert!(lock.can_fit(Levels([3, 0, 2, 0, 2])));
    }
}
