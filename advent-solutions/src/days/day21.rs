//! Day 21: chained robot keypads

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use anyhow::anyhow;
use std::collections::HashMap;
use tracing::debug;

const SAMPLE: &str = "029A
980A
179A
456A
379A";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 21, sample = SAMPLE, tags = ["combinatorics"])]
pub struct Day21;

/// Numeric keypad layout; (0, 3) is the forbidden blank corner
fn keypad_point(c: u8) -> Option<(i64, i64)> {
    Some(match c {
        b'7' => (0, 0),
        b'8' => (1, 0),
        b'9' => (2, 0),
        b'4' => (0, 1),
        b'5' => (1, 1),
        b'6' => (2, 1),
        b'1' => (0, 2),
        b'2' => (1, 2),
        b'3' => (2, 2),
        b'0' => (1, 3),
        b'A' => (2, 3),
        _ => return None,
    })
}

const DPAD_KEYS: [u8; 5] = [b'A', b'^', b'>', b'v', b'<'];

/// Cost table for one directional keypad in the chain: how many presses the
/// controlling layer spends moving this robot's arm between two keys.
struct Robot {
    costs: HashMap<(u8, u8), u64>,
}

impl Robot {
    /// The keypad a human operates directly; every move is free
    fn base() -> Robot {
        let mut costs = HashMap::new();
        for from in DPAD_KEYS {
            for to in DPAD_KEYS {
                costs.insert((from, to), 0);
            }
        }
        Robot { costs }
    }

    fn cost_to_move(&self, from: u8, to: u8) -> u64 {
        self.costs[&(from, to)]
    }

    /// Cost for the layer above to type `moves` and return to A. Pressing is
    /// counted per move; the trailing re-home is movement only.
    fn cost_of(&self, moves: &[u8]) -> u64 {
        let mut cur = b'A';
        let mut cost = 0;
        for &c in moves {
            cost += self.cost_to_move(cur, c) + 1;
            cur = c;
        }
        cost + self.cost_to_move(cur, b'A')
    }

    /// Cost table for a robot whose d-pad is operated by this one.
    ///
    /// Move sequences avoid the blank top-left corner of the d-pad; where
    /// two safe orderings exist, the cheaper one wins.
    fn derive(&self) -> Robot {
        let of = |moves: &[u8]| self.cost_of(moves);
        let entries: [(u8, u8, u64); 25] = [
            (b'A', b'A', of(b"")),
            (b'A', b'^', of(b"<")),
            (b'A', b'>', of(b"v")),
            (b'A', b'v', of(b"<v").min(of(b"v<"))),
            (b'A', b'<', of(b"v<<").min(of(b"<v<"))), // no <<v, blank space
            (b'^', b'A', of(b">")),
            (b'^', b'^', of(b"")),
            (b'^', b'>', of(b"v>").min(of(b">v"))),
            (b'^', b'v', of(b"v")),
            (b'^', b'<', of(b"v<")), // no <v, blank space
            (b'>', b'A', of(b"^")),
            (b'>', b'^', of(b"^<").min(of(b"<^"))),
            (b'>', b'>', of(b"")),
            (b'>', b'v', of(b"<")),
            (b'>', b'<', of(b"<<")),
            (b'v', b'A', of(b">^").min(of(b"^>"))),
            (b'v', b'^', of(b"^")),
            (b'v', b'>', of(b">")),
            (b'v', b'v', of(b"")),
            (b'v', b'<', of(b"<")),
            (b'<', b'A', of(b">>^").min(of(b">^>"))), // no ^>>, blank space
            (b'<', b'^', of(b">^")),                  // no ^>
            (b'<', b'>', of(b">>")),
            (b'<', b'v', of(b">")),
            (b'<', b'<', of(b"")),
        ];

        Robot {
            costs: entries
                .into_iter()
                .map(|(from, to, cost)| ((from, to), cost))
                .collect(),
        }
    }
}

/// Presses needed on the outermost d-pad for one keypad key transition
fn keypad_move_cost(from: u8, to: u8, robot: &Robot) -> Result<u64, SolveError> {
    let bad_key = |c: u8| SolveError::SolveFailed(anyhow!("bad code key {:?}", c as char).into());
    let (fx, fy) = keypad_point(from).ok_or_else(|| bad_key(from))?;
    let (tx, ty) = keypad_point(to).ok_or_else(|| bad_key(to))?;

    let dx = tx - fx;
    let dy = ty - fy;

    let dy_char = if dy < 0 { b'^' } else { b'v' };
    let dx_char = if dx < 0 { b'<' } else { b'>' };
    let (adx, ady) = (dx.unsigned_abs(), dy.unsigned_abs());

    let horizontal_first = || {
        robot.cost_to_move(b'A', dx_char)
            + adx
            + robot.cost_to_move(dx_char, dy_char)
            + ady
            + robot.cost_to_move(dy_char, b'A')
            + 1
    };
    let vertical_first = || {
        robot.cost_to_move(b'A', dy_char)
            + ady
            + robot.cost_to_move(dy_char, dx_char)
            + adx
            + robot.cost_to_move(dx_char, b'A')
            + 1
    };

    let cost = if dx == 0 && dy == 0 {
        // already there, just press the button
        1
    } else if dx == 0 {
        robot.cost_to_move(b'A', dy_char) + ady + robot.cost_to_move(dy_char, b'A') + 1
    } else if dy == 0 {
        robot.cost_to_move(b'A', dx_char) + adx + robot.cost_to_move(dx_char, b'A') + 1
    } else if fx == 0 && ty == 3 {
        // crossing the blank space; go horizontal first
        horizontal_first()
    } else if fy == 3 && tx == 0 {
        // crossing the blank space; go vertical first
        vertical_first()
    } else {
        horizontal_first().min(vertical_first())
    };

    Ok(cost)
}

fn cost_of_code(code: &str, num_dirpads: usize) -> Result<u64, SolveError> {
    let mut robot = Robot::base();
    for _ in 1..num_dirpads {
        robot = robot.derive();
    }

    let mut cur = b'A';
    let mut cost = 0;
    for &c in code.as_bytes() {
        cost += keypad_move_cost(cur, c, &robot)?;
        cur = c;
    }
    Ok(cost)
}

impl PuzzleParser for Day21 {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let codes: Vec<&str> = input.trim().lines().map(str::trim).collect();
        for code in &codes {
            if !code.ends_with('A') {
                return Err(ParseError::InvalidFormat(format!(
                    "code {code:?} does not end in A"
                )));
            }
        }
        Ok(codes)
    }
}

fn total_complexity(codes: &[&str], num_dirpads: usize) -> Result<u64, SolveError> {
    let mut total_cost = 0;
    for code in codes {
        let code_number: u64 = code[..code.len() - 1]
            .parse()
            .map_err(|_| SolveError::SolveFailed(anyhow!("bad code number in {code:?}").into()))?;
        let code_cost = cost_of_code(code, num_dirpads)?;
        debug!(code, code_number, code_cost, "code costed");
        total_cost += code_cost * code_number;
    }
    Ok(total_cost)
}

impl PartSolver<1> for Day21 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_complexity(shared, 3)?.to_string())
    }
}

impl PartSolver<2> for Day21 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_complexity(shared, 26)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    fn solve(part: u8) -> String {
        let mut shared = Day21::parse(SAMPLE).unwrap();
        Day21::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn part_one_sample() {
        assert_eq!(solve(1), "126384");
    }

    #[test]
    fn part_two_sample() {
        assert_eq!(solve(2), "154115708116294");
    }

    #[test]
    fn per_code_press_counts_from_statement() {
        // published press counts with two intermediate robots
        assert_eq!(cost_of_code("029A", 3).unwrap(), 68);
        assert_eq!(cost_of_code("980A", 3).unwrap(), 60);
        assert_eq!(cost_of_code("179A", 3).unwrap(), 68);
        assert_eq!(cost_of_code("456A", 3).unwrap(), 64);
        assert_eq!(cost_of_code("379A", 3).unwrap(), 64);
    }

    #[test]
    fn shallow_chains_match_the_worked_example() {
        // published d-pad sequence lengths for 029A, layer by layer
        assert_eq!(cost_of_code("029A", 1).unwrap(), 12);
        assert_eq!(cost_of_code("029A", 2).unwrap(), 28);
    }

    #[test]
    fn codes_must_end_in_a() {
        assert!(Day21::parse("029").is_err());
    }
}
