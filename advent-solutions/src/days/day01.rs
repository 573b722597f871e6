//! Day 1: pairing up two columns of location IDs

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use anyhow::{anyhow, Context};
use std::collections::HashMap;

const SAMPLE: &str = "3   4
4   3
2   5
1   3
3   9
3   3";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 1, sample = SAMPLE, tags = ["lists"], expected(part1 = "1830467", part2 = "26674158"))]
pub struct Day01;

pub struct Columns {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl PuzzleParser for Day01 {
    type SharedData<'a> = Columns;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut left = Vec::new();
        let mut right = Vec::new();

        for (ix, line) in input.trim().lines().enumerate() {
            let mut nums = line.split_whitespace();
            let pair = (|| -> Result<(i64, i64), anyhow::Error> {
                let l = nums.next().context("missing left value")?.parse()?;
                let r = nums.next().context("missing right value")?.parse()?;
                if nums.next().is_some() {
                    return Err(anyhow!("trailing tokens"));
                }
                Ok((l, r))
            })()
            .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", ix + 1, e)))?;

            left.push(pair.0);
            right.push(pair.1);
        }

        Ok(Columns { left, right })
    }
}

impl PartSolver<1> for Day01 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut left = shared.left.clone();
        let mut right = shared.right.clone();
        left.sort_unstable();
        right.sort_unstable();

        let total: i64 = left
            .iter()
            .zip(&right)
            .map(|(l, r)| (l - r).abs())
            .sum();

        Ok(total.to_string())
    }
}

impl PartSolver<2> for Day01 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut right_column_counts: HashMap<i64, i64> = HashMap::new();
        for &n in &shared.right {
            *right_column_counts.entry(n).or_default() += 1;
        }

        let score: i64 = shared
            .left
            .iter()
            .map(|n| n * right_column_counts.get(n).copied().unwrap_or(0))
            .sum();

        Ok(score.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    fn solve(part: u8) -> String {
        let mut shared = Day01::parse(SAMPLE).unwrap();
        Day01::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn part_one_sample() {
        assert_eq!(solve(1), "11");
    }

    #[test]
    fn part_two_sample() {
        assert_eq!(solve(2), "31");
    }

    #[test]
    fn rejects_short_lines() {
        assert!(Day01::parse("3   4\n17\n").is_err());
    }
}
