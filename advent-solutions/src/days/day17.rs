//! Day 17: a 3-bit register machine

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use anyhow::anyhow;
use itertools::Itertools;
use std::collections::BTreeSet;
use tracing::{debug, trace};

const SAMPLE: &str = "Register A: 2024
Register B: 0
Register C: 0

Program: 0,3,5,4,3,0";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 17, sample = SAMPLE, tags = ["vm"], expected(part1 = "1,5,0,1,7,4,1,0,3", part2 = "47910079998866"))]
pub struct Day17;

const OPCODE_ADV: u8 = 0;
const OPCODE_BXL: u8 = 1;
const OPCODE_BST: u8 = 2;
const OPCODE_JNZ: u8 = 3;
const OPCODE_BXC: u8 = 4;
const OPCODE_OUT: u8 = 5;
const OPCODE_BDV: u8 = 6;
const OPCODE_CDV: u8 = 7;

// runaway-program guard; real programs halt in far fewer steps
const MAX_STEPS: usize = 10_000_000;

#[derive(Clone)]
pub struct Computer {
    a: i64,
    b: i64,
    c: i64,
    program: Vec<u8>,
}

impl Computer {
    /// Run to completion, returning everything the out instruction emitted
    fn run(&mut self) -> Result<Vec<u8>, SolveError> {
        let mut output = Vec::new();
        let mut ip = 0usize;
        let mut steps = 0usize;

        while ip + 1 < self.program.len() {
            steps += 1;
            if steps > MAX_STEPS {
                return Err(SolveError::SolveFailed(
                    anyhow!("program did not halt").into(),
                ));
            }

            let opcode = self.program[ip];
            let operand = self.program[ip + 1];
            trace!(ip, opcode, operand, "execute");

            match opcode {
                OPCODE_ADV => self.a >>= self.combo(operand)?,
                OPCODE_BXL => self.b ^= operand as i64,
                OPCODE_BST => self.b = self.combo(operand)? & 0x7,
                OPCODE_JNZ => {
                    if self.a != 0 {
                        ip = operand as usize;
                        continue;
                    }
                }
                OPCODE_BXC => self.b ^= self.c,
                OPCODE_OUT => output.push((self.combo(operand)? & 0x7) as u8),
                OPCODE_BDV => self.b = self.a >> self.combo(operand)?,
                OPCODE_CDV => self.c = self.a >> self.combo(operand)?,
                _ => {
                    return Err(SolveError::SolveFailed(
                        anyhow!("invalid opcode {opcode}").into(),
                    ));
                }
            }
            ip += 2;
        }

        Ok(output)
    }

    fn combo(&self, operand: u8) -> Result<i64, SolveError> {
        match operand {
            0..=3 => Ok(operand as i64),
            4 => Ok(self.a),
            5 => Ok(self.b),
            6 => Ok(self.c),
            _ => Err(SolveError::SolveFailed(
                anyhow!("invalid combo operand {operand}").into(),
            )),
        }
    }

    fn run_with_a(&self, a: i64) -> Result<Vec<u8>, SolveError> {
        let mut vm = self.clone();
        vm.a = a;
        vm.run()
    }
}

impl PuzzleParser for Day17 {
    type SharedData<'a> = Computer;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut lines = input.trim().lines();

        let mut register = |name: &str| -> Result<i64, ParseError> {
            let line = lines
                .next()
                .ok_or_else(|| ParseError::MissingData(format!("register {name} line")))?;
            let (_, value) = line
                .split_once(": ")
                .filter(|(label, _)| *label == format!("Register {name}"))
                .ok_or_else(|| ParseError::InvalidFormat(format!("bad register line {line:?}")))?;
            value
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat(format!("bad register value {value:?}")))
        };

        let a = register("A")?;
        let b = register("B")?;
        let c = register("C")?;

        if lines.next().is_none_or(|line| !line.trim().is_empty()) {
            return Err(ParseError::InvalidFormat(
                "expected blank line before program".into(),
            ));
        }

        let program_line = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("program line".into()))?;
        let (_, program) = program_line
            .split_once(": ")
            .ok_or_else(|| ParseError::InvalidFormat("bad program line".into()))?;

        let program = program
            .trim()
            .split(',')
            .map(|tok| match tok.trim().parse::<u8>() {
                Ok(n) if n < 8 => Ok(n),
                _ => Err(ParseError::InvalidFormat(format!("bad instruction {tok:?}"))),
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(Computer { a, b, c, program })
    }
}

fn format_output(output: &[u8]) -> String {
    output.iter().join(",")
}

impl PartSolver<1> for Day17 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let output = shared.clone().run()?;
        Ok(format_output(&output))
    }
}

impl PartSolver<2> for Day17 {
    /// Find the smallest A making the program output itself.
    ///
    /// The program consumes A three bits per loop iteration, so candidates
    /// are grown inductively from the last output digit backwards: shift
    /// each surviving candidate left three bits, try all eight extensions,
    /// and keep the ones whose run reproduces the expected tail.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let expected = shared.program.clone();
        let mut candidates = BTreeSet::from([0i64]);

        for tail_len in 1..=expected.len() {
            let tail = &expected[expected.len() - tail_len..];
            debug!(?tail, num_candidates = candidates.len(), "searching");

            let mut next_candidates = BTreeSet::new();
            for candidate in candidates {
                let shifted = candidate << 3;
                for low_bits in 0..8 {
                    let a = shifted + low_bits;
                    if shared.run_with_a(a)? == tail {
                        next_candidates.insert(a);
                    }
                }
            }
            candidates = next_candidates;
        }

        let best = candidates
            .first()
            .copied()
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("no quine value found").into()))?;

        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    const FIRST_SAMPLE: &str = "Register A: 729
Register B: 0
Register C: 0

Program: 0,1,5,4,3,0";

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Day17::parse(input).unwrap();
        Day17::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn part_one_samples() {
        assert_eq!(solve(FIRST_SAMPLE, 1), "4,6,3,5,6,3,5,2,1,0");
        assert_eq!(solve(SAMPLE, 1), "5,7,3,0");
    }

    #[test]
    fn part_two_sample() {
        assert_eq!(solve(SAMPLE, 2), "117440");
    }

    #[test]
    fn quine_value_reproduces_program() {
        let shared = Day17::parse(SAMPLE).unwrap();
        assert_eq!(shared.run_with_a(117440).unwrap(), shared.program);
    }

    #[test]
    fn small_instruction_examples() {
        // from the puzzle statement: 2,6 sets B to 1 when C is 9
        let mut vm = Computer {
            a: 0,
            b: 0,
            c: 9,
            program: vec![2, 6],
        };
        vm.run().unwrap();
        assert_eq!(vm.b & 0x7, 1);

        // 5,0,5,1,5,4 with A=10 outputs 0,1,2
        let mut vm = Computer {
            a: 10,
            b: 0,
            c: 0,
            program: vec![5, 0, 5, 1, 5, 4],
        };
        assert_eq!(vm.run().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn rejects_out_of_range_instructions() {
        assert!(Day17::parse(
            "Register A: 1\nRegister B: 0\nRegister C: 0\n\nProgram: 0,9"
        )
        .is_err());
    }
}
