//! Day 5: page ordering rules for safety manual updates

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use anyhow::anyhow;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

const SAMPLE: &str = "47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 5, sample = SAMPLE, tags = ["ordering"], expected(part1 = "5955", part2 = "4030"))]
pub struct Day05;

type Page = i32;
type Update = Vec<Page>;

/// For each page, the set of pages it must appear before in a valid update.
#[derive(Default)]
pub struct Rules {
    requirements_by_page: HashMap<Page, HashSet<Page>>,
}

impl Rules {
    fn add_rule(&mut self, must_come_before: Page, must_come_after: Page) {
        self.requirements_by_page
            .entry(must_come_before)
            .or_default()
            .insert(must_come_after);
    }

    fn is_ordered(&self, before: Page, after: Page) -> bool {
        self.requirements_by_page
            .get(&after)
            .is_none_or(|requirements| !requirements.contains(&before))
    }

    fn is_update_valid(&self, update: &Update) -> bool {
        (0..update.len() - 1).all(|i| {
            (i + 1..update.len()).all(|j| self.is_ordered(update[i], update[j]))
        })
    }
}

pub struct Manual {
    rules: Rules,
    updates: Vec<Update>,
}

impl PuzzleParser for Day05 {
    type SharedData<'a> = Manual;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let input = input.trim();
        let (rule_block, update_block) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("expected blank line between rules and updates".into()))?;

        let mut rules = Rules::default();
        for line in rule_block.lines() {
            let (before, after) = line
                .split_once('|')
                .ok_or_else(|| ParseError::InvalidFormat(format!("bad rule {line:?}")))?;
            let parsed = (|| -> Result<(Page, Page), anyhow::Error> {
                Ok((before.trim().parse()?, after.trim().parse()?))
            })()
            .map_err(|e| ParseError::InvalidFormat(format!("bad rule {line:?}: {e}")))?;
            rules.add_rule(parsed.0, parsed.1);
        }

        let updates = update_block
            .lines()
            .map(|line| {
                line.split(',')
                    .map(|tok| {
                        tok.trim()
                            .parse()
                            .map_err(|_| ParseError::InvalidFormat(format!("bad page {tok:?}")))
                    })
                    .collect()
            })
            .collect::<Result<Vec<Update>, _>>()?;

        Ok(Manual { rules, updates })
    }
}

fn middle_page(update: &Update) -> Result<Page, SolveError> {
    if update.len() % 2 == 0 {
        return Err(SolveError::SolveFailed(
            anyhow!("update has no middle page").into(),
        ));
    }
    Ok(update[update.len() / 2])
}

impl PartSolver<1> for Day05 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut sum = 0;
        for update in &shared.updates {
            if shared.rules.is_update_valid(update) {
                sum += middle_page(update)?;
            }
        }

        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Day05 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let rules = &shared.rules;

        let mut sum = 0;
        for update in &shared.updates {
            if rules.is_update_valid(update) {
                continue;
            }

            let mut fixed = update.clone();
            fixed.sort_by(|&lhs, &rhs| {
                if rules.is_ordered(lhs, rhs) {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            });
            sum += middle_page(&fixed)?;
        }

        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    fn solve(part: u8) -> String {
        let mut shared = Day05::parse(SAMPLE).unwrap();
        Day05::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn part_one_sample() {
        assert_eq!(solve(1), "143");
    }

    #[test]
    fn part_two_sample() {
        assert_eq!(solve(2), "123");
    }

    #[test]
    fn unordered_pair_detected() {
        let shared = Day05::parse(SAMPLE).unwrap();
        // rule 47|53 exists, so 53 before 47 is invalid
        assert!(shared.rules.is_ordered(47, 53));
        assert!(!shared.rules.is_ordered(53, 47));
    }
}
