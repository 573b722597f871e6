//! Day 3: scanning corrupted memory for mul instructions

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use regex::Regex;

const SAMPLE: &str =
    "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 3, sample = SAMPLE, tags = ["parsing"], expected(part1 = "173731097", part2 = "93729253"))]
pub struct Day03;

impl PuzzleParser for Day03 {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

fn mul_expr() -> Regex {
    Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)").expect("static pattern")
}

fn mul_expr_with_conditionals() -> Regex {
    Regex::new(r"do\(\)|mul\((\d{1,3}),(\d{1,3})\)|don't\(\)").expect("static pattern")
}

impl PartSolver<1> for Day03 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = mul_expr()
            .captures_iter(shared)
            .map(|caps| {
                let a: u64 = caps[1].parse().expect("digits only");
                let b: u64 = caps[2].parse().expect("digits only");
                a * b
            })
            .sum();

        Ok(total.to_string())
    }
}

impl PartSolver<2> for Day03 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut doing = true;
        let mut total: u64 = 0;

        for caps in mul_expr_with_conditionals().captures_iter(shared) {
            match &caps[0] {
                "do()" => doing = true,
                "don't()" => doing = false,
                _ if doing => {
                    let a: u64 = caps[1].parse().expect("digits only");
                    let b: u64 = caps[2].parse().expect("digits only");
                    total += a * b;
                }
                _ => {}
            }
        }

        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    fn solve(part: u8) -> String {
        let mut shared = Day03::parse(SAMPLE).unwrap();
        Day03::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn part_one_sample() {
        assert_eq!(solve(1), "161");
    }

    #[test]
    fn part_two_sample() {
        // "undo()" contains "do()", which re-enables the final mul
        assert_eq!(solve(2), "48");
    }

    #[test]
    fn rejects_wide_operands() {
        let mut shared = Day03::parse("mul(1234,5)").unwrap();
        assert_eq!(Day03::solve_part_checked(&mut shared, 1).unwrap(), "0");
    }
}
