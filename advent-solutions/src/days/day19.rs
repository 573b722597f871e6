//! Day 19: arranging towel stripes into patterns

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use std::collections::{HashMap, HashSet};

const SAMPLE: &str = "r, wr, b, g, bwu, rb, gb, br

brwrr
bggr
gbbr
rrbgbr
ubwu
bwurrg
brgr
bbrgwb";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 19, sample = SAMPLE, tags = ["strings"], expected(part1 = "247", part2 = "692596560138745"))]
pub struct Day19;

pub struct Onsen<'a> {
    towels: Vec<&'a str>,
    patterns: Vec<&'a str>,
}

impl PuzzleParser for Day19 {
    type SharedData<'a> = Onsen<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (towel_line, pattern_block) = input
            .trim()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("expected blank line after towels".into()))?;

        let towels: Vec<&str> = towel_line.split(',').map(str::trim).collect();
        if towels.iter().any(|t| t.is_empty()) {
            return Err(ParseError::InvalidFormat("empty towel".into()));
        }

        let patterns: Vec<&str> = pattern_block.lines().map(str::trim).collect();

        Ok(Onsen { towels, patterns })
    }
}

fn can_form_pattern(towel_set: &HashSet<&str>, pattern: &str) -> bool {
    let n = pattern.len();
    let mut dp = vec![false; n + 1];
    dp[0] = true;

    for i in 1..=n {
        for j in 0..i {
            if dp[j] && towel_set.contains(&pattern[j..i]) {
                dp[i] = true;
                break;
            }
        }
    }

    dp[n]
}

fn count_combos<'a>(
    towels: &[&str],
    pattern: &'a str,
    counts: &mut HashMap<&'a str, u64>,
) -> u64 {
    if pattern.is_empty() {
        return 1;
    }

    if let Some(&count) = counts.get(pattern) {
        return count;
    }

    let num_combos = towels
        .iter()
        .filter(|towel| pattern.starts_with(**towel))
        .map(|towel| count_combos(towels, &pattern[towel.len()..], counts))
        .sum();

    counts.insert(pattern, num_combos);
    num_combos
}

impl PartSolver<1> for Day19 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let towel_set: HashSet<&str> = shared.towels.iter().copied().collect();
        let num_possible = shared
            .patterns
            .iter()
            .filter(|pattern| can_form_pattern(&towel_set, pattern))
            .count();

        Ok(num_possible.to_string())
    }
}

impl PartSolver<2> for Day19 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut count: u64 = 0;
        for pattern in &shared.patterns {
            let mut counts = HashMap::new();
            count += count_combos(&shared.towels, pattern, &mut counts);
        }

        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    fn solve(part: u8) -> String {
        let mut shared = Day19::parse(SAMPLE).unwrap();
        Day19::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn part_one_sample() {
        assert_eq!(solve(1), "6");
    }

    #[test]
    fn part_two_sample() {
        assert_eq!(solve(2), "16");
    }

    #[test]
    fn combo_counts_from_statement() {
        let shared = Day19::parse(SAMPLE).unwrap();
        let mut counts = HashMap::new();
        // gbbr can be made four different ways
        assert_eq!(count_combos(&shared.towels, "gbbr", &mut counts), 4);
        // ubwu is impossible
        let mut counts = HashMap::new();
        assert_eq!(count_combos(&shared.towels, "ubwu", &mut counts), 0);
    }
}
