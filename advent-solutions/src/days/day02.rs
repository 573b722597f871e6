//! Day 2: reactor safety reports

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};

const SAMPLE: &str = "7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 2, sample = SAMPLE, tags = ["lists"], expected(part1 = "639", part2 = "674"))]
pub struct Day02;

type Report = Vec<i32>;

impl PuzzleParser for Day02 {
    type SharedData<'a> = Vec<Report>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(ix, line)| {
                line.split_whitespace()
                    .map(|tok| {
                        tok.parse().map_err(|_| {
                            ParseError::InvalidFormat(format!("(line {}) bad level {tok:?}", ix + 1))
                        })
                    })
                    .collect()
            })
            .collect()
    }
}

fn is_ordered(levels: &[i32]) -> bool {
    levels.is_sorted() || levels.iter().rev().is_sorted()
}

fn is_gradual(levels: &[i32]) -> bool {
    levels
        .windows(2)
        .all(|w| (1..=3).contains(&(w[1] - w[0]).abs()))
}

fn is_safe(levels: &[i32]) -> bool {
    is_ordered(levels) && is_gradual(levels)
}

fn is_safe_with_dampener(levels: &[i32]) -> bool {
    if is_safe(levels) {
        return true;
    }

    (0..levels.len()).any(|skip| {
        let mut modified = levels.to_vec();
        modified.remove(skip);
        is_safe(&modified)
    })
}

impl PartSolver<1> for Day02 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared.iter().filter(|r| is_safe(r)).count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Day02 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared.iter().filter(|r| is_safe_with_dampener(r)).count();
        Ok(safe.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    fn solve(part: u8) -> String {
        let mut shared = Day02::parse(SAMPLE).unwrap();
        Day02::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn part_one_sample() {
        assert_eq!(solve(1), "2");
    }

    #[test]
    fn part_two_sample() {
        assert_eq!(solve(2), "4");
    }

    #[test]
    fn dampener_removes_first_level() {
        // 9 1 2 3 is unsafe as-is but safe with the 9 removed
        assert!(!is_safe(&[9, 1, 2, 3]));
        assert!(is_safe_with_dampener(&[9, 1, 2, 3]));
    }
}
