//! Day 11: blinking at stones

use crate::util::numbers::count_digits;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use std::collections::HashMap;

const SAMPLE: &str = "125 17";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 11, sample = SAMPLE, tags = ["combinatorics"])]
pub struct Day11;

type Stone = u64;
type BlinkCache = HashMap<(Stone, u64), u64>;

impl PuzzleParser for Day11 {
    type SharedData<'a> = Vec<Stone>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split_whitespace()
            .map(|tok| {
                tok.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad stone {tok:?}")))
            })
            .collect()
    }
}

/// Number of stones this one becomes after the remaining blinks
fn blink(s: Stone, num_blinks_remaining: u64, cache: &mut BlinkCache) -> u64 {
    let key = (s, num_blinks_remaining);
    if let Some(&count) = cache.get(&key) {
        return count;
    }

    let count = if num_blinks_remaining == 0 {
        1
    } else if s == 0 {
        blink(1, num_blinks_remaining - 1, cache)
    } else {
        let digits = count_digits(s);
        if digits % 2 == 0 {
            let divisor = 10u64.pow(digits / 2);
            blink(s / divisor, num_blinks_remaining - 1, cache)
                + blink(s % divisor, num_blinks_remaining - 1, cache)
        } else {
            blink(s * 2024, num_blinks_remaining - 1, cache)
        }
    };

    cache.insert(key, count);
    count
}

fn count_stones(stones: &[Stone], num_blinks: u64) -> u64 {
    let mut cache = BlinkCache::new();
    stones.iter().map(|&s| blink(s, num_blinks, &mut cache)).sum()
}

impl PartSolver<1> for Day11 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_stones(shared, 25).to_string())
    }
}

impl PartSolver<2> for Day11 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_stones(shared, 75).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    #[test]
    fn part_one_sample() {
        let mut shared = Day11::parse(SAMPLE).unwrap();
        assert_eq!(Day11::solve_part_checked(&mut shared, 1).unwrap(), "55312");
    }

    #[test]
    fn single_blink_rules() {
        let mut cache = BlinkCache::new();
        // 0 -> 1
        assert_eq!(blink(0, 1, &mut cache), 1);
        // 2024 splits into 20 and 24
        assert_eq!(blink(2024, 1, &mut cache), 2);
        // odd digit count multiplies by 2024, still one stone
        assert_eq!(blink(125, 1, &mut cache), 1);
    }

    #[test]
    fn six_blinks_of_sample() {
        // the worked example in the puzzle statement
        assert_eq!(count_stones(&[125, 17], 6), 22);
    }
}
