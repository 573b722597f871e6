//! Day 13: claw machine button presses

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use anyhow::anyhow;
use regex::Regex;
use tracing::debug;

const SAMPLE: &str = "Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 13, sample = SAMPLE, tags = ["math"], expected(part1 = "35997", part2 = "82510994362072"))]
pub struct Day13;

#[derive(Clone, Copy)]
struct Vec2 {
    x: i64,
    y: i64,
}

/// One claw machine: two button vectors and a prize position
pub struct System {
    button_a: Vec2,
    button_b: Vec2,
    prize: Vec2,
}

impl PuzzleParser for Day13 {
    type SharedData<'a> = Vec<System>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let expr_a = Regex::new(r"Button A: X\+(\d+), Y\+(\d+)").expect("static pattern");
        let expr_b = Regex::new(r"Button B: X\+(\d+), Y\+(\d+)").expect("static pattern");
        let expr_prize = Regex::new(r"Prize: X=(\d+), Y=(\d+)").expect("static pattern");

        let capture = |expr: &Regex, line: Option<&str>, what: &str| -> Result<Vec2, ParseError> {
            let line =
                line.ok_or_else(|| ParseError::MissingData(format!("expected {what} line")))?;
            let caps = expr
                .captures(line.trim())
                .ok_or_else(|| ParseError::InvalidFormat(format!("bad {what} line {line:?}")))?;
            Ok(Vec2 {
                x: caps[1].parse().expect("digits only"),
                y: caps[2].parse().expect("digits only"),
            })
        };

        input
            .trim()
            .split("\n\n")
            .map(|chunk| {
                let mut lines = chunk.lines();
                Ok(System {
                    button_a: capture(&expr_a, lines.next(), "button A")?,
                    button_b: capture(&expr_b, lines.next(), "button B")?,
                    prize: capture(&expr_prize, lines.next(), "prize")?,
                })
            })
            .collect()
    }
}

/// Pressing A costs three tokens, B costs one
const COST_A: i64 = 3;
const COST_B: i64 = 1;

fn count_min_tokens(systems: &[System], prize_offset: i64) -> Result<i64, SolveError> {
    let mut sum = 0;
    for system in systems {
        let a = system.button_a;
        let b = system.button_b;
        let p = Vec2 {
            x: system.prize.x + prize_offset,
            y: system.prize.y + prize_offset,
        };

        // Two equations, two unknowns:
        //   m*a.x + n*b.x = p.x
        //   m*a.y + n*b.y = p.y
        // Solved by Cramer's rule for 2x2 systems.
        let det = a.x * b.y - a.y * b.x;
        if det == 0 {
            return Err(SolveError::SolveFailed(
                anyhow!("singular button matrix").into(),
            ));
        }

        let det_m = p.x * b.y - p.y * b.x;
        let det_n = a.x * p.y - a.y * p.x;

        // integer division may truncate; multiply back to verify the
        // candidate actually hits the prize
        let m = det_m / det;
        let n = det_n / det;

        let valid_solution = m >= 0
            && n >= 0
            && m * a.x + n * b.x == p.x
            && m * a.y + n * b.y == p.y;

        debug!(m, n, valid_solution, "candidate presses");

        if valid_solution {
            sum += m * COST_A + n * COST_B;
        }
    }
    Ok(sum)
}

impl PartSolver<1> for Day13 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_min_tokens(shared, 0)?.to_string())
    }
}

impl PartSolver<2> for Day13 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_min_tokens(shared, 10_000_000_000_000)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    fn solve(part: u8) -> String {
        let mut shared = Day13::parse(SAMPLE).unwrap();
        Day13::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn part_one_sample() {
        assert_eq!(solve(1), "480");
    }

    #[test]
    fn part_two_sample() {
        assert_eq!(solve(2), "875318608908");
    }

    #[test]
    fn unreachable_prize_costs_nothing() {
        let systems = Day13::parse(
            "Button A: X+26, Y+66\nButton B: X+67, Y+21\nPrize: X=12748, Y=12176",
        )
        .unwrap();
        assert_eq!(count_min_tokens(&systems, 0).unwrap(), 0);
    }

    #[test]
    fn rejects_malformed_machine() {
        assert!(Day13::parse("Button A: X+1, Y+1\nButton B: X+2, Y+2").is_err());
    }
}
