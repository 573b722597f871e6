//! Property tests for part-range validation

use advent_solver::{ParseError, PuzzleParser, SolveError, Solver, SolverExt};
use proptest::prelude::*;

struct TwoPart;

impl PuzzleParser for TwoPart {
    type SharedData<'a> = u64;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidFormat("expected integer".into()))
    }
}

impl Solver for TwoPart {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.to_string()),
            2 => Ok((*shared + 1).to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

proptest! {
    #[test]
    fn in_range_parts_solve(n in 0u64..1_000_000, part in 1u8..=2) {
        let mut shared = n;
        let answer = TwoPart::solve_part_checked(&mut shared, part).unwrap();
        let expected = if part == 1 { n } else { n + 1 };
        prop_assert_eq!(answer, expected.to_string());
    }

    #[test]
    fn out_of_range_parts_rejected(n in 0u64..1_000_000, part in prop_oneof![Just(0u8), 3u8..=u8::MAX]) {
        let mut shared = n;
        let result = TwoPart::solve_part_checked(&mut shared, part);
        prop_assert!(matches!(result, Err(SolveError::PartOutOfRange(p)) if p == part));
    }
}
