//! Day 9: disk compaction

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use anyhow::anyhow;
use tracing::trace;

const SAMPLE: &str = "2333133121414131402";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 1)]
#[puzzle(day = 9, sample = SAMPLE, tags = ["lists"])]
pub struct Day09;

/// One disk block: a file id, or empty space
#[derive(Clone, Copy, PartialEq, Eq)]
struct Block(Option<u32>);

impl Block {
    fn is_space(self) -> bool {
        self.0.is_none()
    }
}

pub struct HardDrive {
    blocks: Vec<Block>,
}

impl HardDrive {
    /// Build from a compact map of alternating file and space run lengths.
    ///
    /// Files get ids in order of appearance. Each run is a single digit, and
    /// files are contiguous (not fragmented) in the map.
    fn from_repr(repr: &str) -> Result<Self, ParseError> {
        let digits = repr
            .trim()
            .bytes()
            .map(|c| {
                c.is_ascii_digit()
                    .then(|| (c - b'0') as usize)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("bad digit {:?}", c as char)))
            })
            .collect::<Result<Vec<usize>, _>>()?;

        if digits.is_empty() {
            return Err(ParseError::MissingData("empty hard drive".into()));
        }

        let num_blocks: usize = digits.iter().sum();
        let mut blocks = vec![Block(None); num_blocks];

        let mut it = 0;
        for (ix, chunk) in digits.chunks(2).enumerate() {
            let file_id = ix as u32;
            for _ in 0..chunk[0] {
                blocks[it] = Block(Some(file_id));
                it += 1;
            }
            if let Some(&spaces) = chunk.get(1) {
                it += spaces;
            }
        }

        Ok(HardDrive { blocks })
    }

    /// Move file blocks from the end into leftmost free space until packed
    fn compact(&mut self) {
        let mut s = 0;
        let mut f = self.blocks.len() - 1;

        while s < f {
            while s < self.blocks.len() && !self.blocks[s].is_space() {
                s += 1;
            }

            while f > s && self.blocks[f].is_space() {
                f -= 1;
            }

            if s < f {
                self.blocks.swap(s, f);
            }
        }
    }

    fn checksum(&self) -> Result<u64, SolveError> {
        let mut sum: u64 = 0;
        for (i, block) in self.blocks.iter().enumerate() {
            trace!(i, block = ?block.0, sum, "checksum step");

            let Some(id) = block.0 else {
                continue;
            };

            sum = sum
                .checked_add(id as u64 * i as u64)
                .ok_or_else(|| SolveError::SolveFailed(anyhow!("checksum overflow").into()))?;
        }
        Ok(sum)
    }
}

impl PuzzleParser for Day09 {
    type SharedData<'a> = HardDrive;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        HardDrive::from_repr(input)
    }
}

impl PartSolver<1> for Day09 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.compact();
        Ok(shared.checksum()?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    #[test]
    fn part_one_sample() {
        let mut shared = Day09::parse(SAMPLE).unwrap();
        assert_eq!(Day09::solve_part_checked(&mut shared, 1).unwrap(), "1928");
    }

    #[test]
    fn part_two_not_implemented() {
        let mut shared = Day09::parse(SAMPLE).unwrap();
        assert!(matches!(
            Day09::solve_part_checked(&mut shared, 2),
            Err(SolveError::PartOutOfRange(2))
        ));
    }

    #[test]
    fn tiny_drive() {
        // "12345": one file block, two spaces, three file blocks, ...
        let mut drive = HardDrive::from_repr("12345").unwrap();
        drive.compact();
        // 022111222 then six spaces
        assert_eq!(drive.checksum().unwrap(), 60);
    }

    #[test]
    fn rejects_non_digits() {
        assert!(HardDrive::from_repr("23x3").is_err());
    }
}
