//! Day 7: bridge calibration by operator insertion

use crate::util::numbers::{count_digits, shl10};
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use anyhow::Context;
use rayon::prelude::*;

const SAMPLE: &str = "190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 7, sample = SAMPLE, tags = ["combinatorics"], expected(part1 = "12553187650171", part2 = "96779702119491"))]
pub struct Day07;

#[derive(Clone, Copy)]
enum Op {
    Add,
    Mul,
    Concat,
}

fn eval_op(lhs: u64, rhs: u64, op: Op) -> u64 {
    match op {
        Op::Add => lhs + rhs,
        Op::Mul => lhs * rhs,
        Op::Concat => shl10(lhs, count_digits(rhs)) + rhs,
    }
}

pub struct Calibration {
    expected: u64,
    values: Vec<u64>,
}

impl Calibration {
    /// True if some left-to-right assignment of `ops` between the values
    /// evaluates to the expected result.
    fn has_valid_ops(&self, ops: &[Op]) -> bool {
        // early exit: any single value already exceeds the target
        if self.values.iter().any(|&value| value > self.expected) {
            return false;
        }

        self.search(self.values[0], 1, ops)
    }

    fn search(&self, acc: u64, ix: usize, ops: &[Op]) -> bool {
        if ix == self.values.len() {
            return acc == self.expected;
        }

        // every operator is non-decreasing, so overshooting prunes the branch
        if acc > self.expected {
            return false;
        }

        ops.iter()
            .any(|&op| self.search(eval_op(acc, self.values[ix], op), ix + 1, ops))
    }
}

impl PuzzleParser for Day07 {
    type SharedData<'a> = Vec<Calibration>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(ix, line)| {
                (|| -> Result<Calibration, anyhow::Error> {
                    let (expected, values) =
                        line.split_once(':').context("missing ':' separator")?;
                    let expected = expected.trim().parse()?;
                    let values = values
                        .split_whitespace()
                        .map(str::parse)
                        .collect::<Result<Vec<u64>, _>>()?;
                    if values.is_empty() {
                        anyhow::bail!("no values");
                    }
                    Ok(Calibration { expected, values })
                })()
                .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", ix + 1, e)))
            })
            .collect()
    }
}

fn total_calibration(calibrations: &[Calibration], ops: &[Op]) -> u64 {
    calibrations
        .par_iter()
        .filter(|c| c.has_valid_ops(ops))
        .map(|c| c.expected)
        .sum()
}

impl PartSolver<1> for Day07 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_calibration(shared, &[Op::Add, Op::Mul]).to_string())
    }
}

impl PartSolver<2> for Day07 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_calibration(shared, &[Op::Add, Op::Mul, Op::Concat]).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    fn solve(part: u8) -> String {
        let mut shared = Day07::parse(SAMPLE).unwrap();
        Day07::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn part_one_sample() {
        assert_eq!(solve(1), "3749");
    }

    #[test]
    fn part_two_sample() {
        assert_eq!(solve(2), "11387");
    }

    #[test]
    fn concat_joins_digits() {
        assert_eq!(eval_op(48, 6, Op::Concat), 486);
        assert_eq!(eval_op(1, 10, Op::Concat), 110);
    }

    #[test]
    fn concat_only_counts_in_part_two() {
        let calibrations = Day07::parse("156: 15 6").unwrap();
        assert_eq!(total_calibration(&calibrations, &[Op::Add, Op::Mul]), 0);
        assert_eq!(
            total_calibration(&calibrations, &[Op::Add, Op::Mul, Op::Concat]),
            156
        );
    }
}
