//! Day 22: monkey market secret numbers

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use tracing::debug;

const SAMPLE: &str = "1
2
3
2024";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 22, sample = SAMPLE, tags = ["math"], expected(part1 = "14273043166", part2 = "1667"))]
pub struct Day22;

const NUM_ITERS: usize = 2000;

/// Rolling window of the last four price deltas, packed a byte apiece
#[derive(Clone, Copy, Default)]
struct DeltaWindow {
    packed: u32,
}

impl DeltaWindow {
    fn push(&mut self, delta: i32) {
        self.packed = (self.packed << 8) | (delta as i8 as u8 as u32);
    }

    fn at(self, i: usize) -> i32 {
        debug_assert!(i < 4);
        let shift = 8 * (3 - i);
        ((self.packed >> shift) & 0xFF) as u8 as i8 as i32
    }

    /// Dense index: deltas range -9..=9, five bits each
    fn to_index(self) -> usize {
        (((self.at(0) + 9) << 15)
            + ((self.at(1) + 9) << 10)
            + ((self.at(2) + 9) << 5)
            + (self.at(3) + 9)) as usize
    }
}

const MAX_INDEX: usize = 608_851; // DeltaWindow of four nines, plus one

pub struct Buyer {
    secret: u64,
}

impl Buyer {
    fn evolve(mut s: u64) -> u64 {
        s = (s ^ (s << 6)) & 0xFF_FFFF;
        s = (s ^ (s >> 5)) & 0xFF_FFFF;
        s = (s ^ (s << 11)) & 0xFF_FFFF;
        s
    }

    fn iter(&self, num_iters: usize) -> u64 {
        let mut s = self.secret;
        for _ in 0..num_iters {
            s = Self::evolve(s);
        }
        s
    }

    /// Credit this buyer's first-seen price to every delta prefix it shows
    fn record_prefix_prices(&self, num_iters: usize, seen: &mut [bool], prices: &mut [i32]) {
        seen.fill(false);

        let mut window = DeltaWindow::default();
        let mut s = self.secret;
        let mut price = (s % 10) as i32;

        for i in 0..num_iters {
            s = Self::evolve(s);
            let new_price = (s % 10) as i32;

            window.push(new_price - price);
            price = new_price;

            if i < 3 {
                // not enough deltas for a full prefix yet
                continue;
            }

            let ix = window.to_index();
            if !seen[ix] {
                seen[ix] = true;
                prices[ix] += price;
            }
        }
    }
}

impl PuzzleParser for Day22 {
    type SharedData<'a> = Vec<Buyer>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .map(|line| {
                line.trim()
                    .parse()
                    .map(|secret| Buyer { secret })
                    .map_err(|_| ParseError::InvalidFormat(format!("bad secret {line:?}")))
            })
            .collect()
    }
}

impl PartSolver<1> for Day22 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = shared.iter().map(|buyer| buyer.iter(NUM_ITERS)).sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Day22 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut seen = vec![false; MAX_INDEX];
        let mut prices = vec![0i32; MAX_INDEX];

        for buyer in shared.iter() {
            buyer.record_prefix_prices(NUM_ITERS, &mut seen, &mut prices);
        }

        let best_price = prices.iter().max().copied().unwrap_or(0);
        debug!(best_price, "best sell instruction");

        Ok(best_price.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    #[test]
    fn secret_evolution_from_statement() {
        let expected = [
            15887950, 16495136, 527345, 704524, 1553684, 12683156, 11100544, 12249484, 7753432,
            5908254,
        ];

        let mut s = 123;
        for want in expected {
            s = Buyer::evolve(s);
            assert_eq!(s, want);
        }
    }

    #[test]
    fn part_one_official_sample() {
        let mut shared = Day22::parse("1\n10\n100\n2024").unwrap();
        assert_eq!(
            Day22::solve_part_checked(&mut shared, 1).unwrap(),
            "37327623"
        );
    }

    #[test]
    fn part_two_sample() {
        let mut shared = Day22::parse(SAMPLE).unwrap();
        assert_eq!(Day22::solve_part_checked(&mut shared, 2).unwrap(), "23");
    }

    #[test]
    fn delta_window_round_trips() {
        let mut window = DeltaWindow::default();
        for d in [-9, 0, 5, 9] {
            window.push(d);
        }
        assert_eq!(window.at(0), -9);
        assert_eq!(window.at(3), 9);
        assert!(window.to_index() < MAX_INDEX);

        let mut max = DeltaWindow::default();
        for _ in 0..4 {
            max.push(9);
        }
        assert_eq!(max.to_index(), MAX_INDEX - 1);
    }
}
