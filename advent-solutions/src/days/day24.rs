//! Day 24: a gate network that ought to be a ripple-carry adder

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use anyhow::anyhow;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

const SAMPLE: &str = "x00: 1
x01: 0
x02: 1
x03: 1
x04: 0
y00: 1
y01: 1
y02: 1
y03: 1
y04: 1

ntg XOR fgs -> mjb
y02 OR x01 -> tnw
kwq OR kpj -> z05
x00 OR x03 -> fst
tgd XOR rvg -> z01
vdt OR tnw -> bfw
bfw AND frj -> z10
ffh OR nrd -> bqk
y00 AND y03 -> djm
y03 OR y00 -> psh
bqk OR frj -> z08
tnw OR fst -> frj
gnj AND tgd -> z11
bfw XOR mjb -> z00
x03 OR x00 -> vdt
gnj AND wpb -> z02
x04 AND y00 -> kjc
djm OR pbm -> qhw
nrd AND vdt -> hwm
kjc AND fst -> rvg
y04 OR y02 -> fgs
y01 AND x02 -> pbm
ntg OR kjc -> kwq
psh XOR fgs -> tgd
qhw XOR tgd -> z09
pbm OR djm -> kpj
x03 XOR y03 -> ffh
x00 XOR y04 -> ntg
bfw OR bqk -> z06
nrd XOR fgs -> wpb
frj XOR qhw -> z04
bqk OR frj -> z07
y03 OR x01 -> nrd
hwm AND bqk -> z03
tgd XOR rvg -> z12
tnw OR pbm -> gnj";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 24, sample = SAMPLE, tags = ["graph"])]
pub struct Day24;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
enum Op {
    // ordered so that sorting gate inputs puts plain wires first
    Wire,
    And,
    Or,
    Xor,
}

struct Gate {
    op: Op,
    lhs: String,
    rhs: String,
}

pub struct Monitor {
    wires: HashMap<String, bool>,
    gates: HashMap<String, Gate>,
}

impl Monitor {
    fn eval(&self, name: &str, memo: &mut HashMap<String, bool>) -> Result<bool, SolveError> {
        if let Some(&value) = self.wires.get(name) {
            return Ok(value);
        }
        if let Some(&value) = memo.get(name) {
            return Ok(value);
        }

        let gate = self
            .gates
            .get(name)
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("unknown signal {name:?}").into()))?;

        let lhs = self.eval(&gate.lhs, memo)?;
        let rhs = self.eval(&gate.rhs, memo)?;
        let value = match gate.op {
            Op::And => lhs && rhs,
            Op::Or => lhs || rhs,
            Op::Xor => lhs ^ rhs,
            Op::Wire => unreachable!("gates are never wires"),
        };

        memo.insert(name.to_string(), value);
        Ok(value)
    }

    /// Assemble the number on the wires with the given prefix
    fn number_on(&self, prefix: char) -> Result<u64, SolveError> {
        let mut memo = HashMap::new();
        let mut result = 0u64;

        let names = self
            .wires
            .keys()
            .chain(self.gates.keys())
            .filter(|name| name.starts_with(prefix));
        for name in names {
            let shift: u32 = name[1..].parse().map_err(|_| {
                SolveError::SolveFailed(anyhow!("bad output wire name {name:?}").into())
            })?;
            if self.eval(name, &mut memo)? {
                result |= 1 << shift;
            }
        }

        Ok(result)
    }

    fn op_of(&self, name: &str) -> Op {
        match self.gates.get(name) {
            Some(gate) => gate.op,
            None => Op::Wire,
        }
    }

    /// Flag gates whose input kinds don't fit a ripple-carry adder.
    ///
    /// In a clean adder, AND and XOR gates combine a plain wire pair or an
    /// OR carry with a XOR sum, and OR gates combine two ANDs. Inputs are
    /// ordered by kind first so each slot has one expected shape.
    fn structural_faults(&self) -> BTreeSet<String> {
        let mut faults = BTreeSet::new();

        for gate in self.gates.values() {
            let mut inputs = [gate.lhs.as_str(), gate.rhs.as_str()];
            inputs.sort_by_key(|name| self.op_of(name));
            let [lhs, rhs] = inputs;

            let (lhs_want, rhs_want) = match gate.op {
                Op::And | Op::Xor => (Op::Or, Op::Xor),
                Op::Or => (Op::And, Op::And),
                Op::Wire => unreachable!("gates are never wires"),
            };

            if self.op_of(lhs) != Op::Wire && self.op_of(lhs) != lhs_want {
                faults.insert(lhs.to_string());
            }
            if self.op_of(rhs) != Op::Wire && self.op_of(rhs) != rhs_want {
                faults.insert(rhs.to_string());
            }
        }

        faults
    }
}

impl PuzzleParser for Day24 {
    type SharedData<'a> = Monitor;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (wire_block, gate_block) = input
            .trim()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("expected blank line after wires".into()))?;

        let mut wires = HashMap::new();
        for line in wire_block.lines() {
            let (name, value) = line
                .split_once(':')
                .ok_or_else(|| ParseError::InvalidFormat(format!("bad wire line {line:?}")))?;
            let value = match value.trim() {
                "0" => false,
                "1" => true,
                other => {
                    return Err(ParseError::InvalidFormat(format!(
                        "bad wire value {other:?}"
                    )));
                }
            };
            wires.insert(name.trim().to_string(), value);
        }

        let mut gates = HashMap::new();
        for line in gate_block.lines() {
            let mut tokens = line.split_whitespace();
            let (Some(lhs), Some(opname), Some(rhs), Some("->"), Some(output), None) = (
                tokens.next(),
                tokens.next(),
                tokens.next(),
                tokens.next(),
                tokens.next(),
                tokens.next(),
            ) else {
                return Err(ParseError::InvalidFormat(format!("bad gate line {line:?}")));
            };

            let op = match opname {
                "AND" => Op::And,
                "OR" => Op::Or,
                "XOR" => Op::Xor,
                _ => {
                    return Err(ParseError::InvalidFormat(format!("unknown op {opname:?}")));
                }
            };

            gates.insert(
                output.to_string(),
                Gate {
                    op,
                    lhs: lhs.to_string(),
                    rhs: rhs.to_string(),
                },
            );
        }

        Ok(Monitor { wires, gates })
    }
}

impl PartSolver<1> for Day24 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.number_on('z')?.to_string())
    }
}

impl PartSolver<2> for Day24 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let x = shared.number_on('x')?;
        let y = shared.number_on('y')?;
        let z = shared.number_on('z')?;
        debug!(x, y, z, expected = x + y, "adder outputs");
        debug!("diff (bin): {:064b}", (x + y) ^ z);

        let faults = shared.structural_faults();
        Ok(faults.into_iter().collect::<Vec<_>>().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    const SMALL_SAMPLE: &str = "x00: 1
x01: 1
x02: 1
y00: 0
y01: 1
y02: 0

x00 AND y00 -> z00
x01 XOR y01 -> z01
x02 OR y02 -> z02";

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Day24::parse(input).unwrap();
        Day24::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn part_one_small_sample() {
        assert_eq!(solve(SMALL_SAMPLE, 1), "4");
    }

    #[test]
    fn part_one_sample() {
        assert_eq!(solve(SAMPLE, 1), "2024");
    }

    #[test]
    fn clean_adder_stage_has_no_faults() {
        // a middle full-adder stage: OR-shaped carry meets XOR-shaped sum
        let input = "x00: 1
x01: 0
y00: 1
y01: 1

x00 AND y00 -> p
x01 AND y01 -> q
p OR q -> c
x00 XOR y00 -> s
s XOR c -> z00
s AND c -> d";
        let shared = Day24::parse(input).unwrap();
        assert!(shared.structural_faults().is_empty());
    }

    #[test]
    fn misrouted_gate_is_flagged() {
        // the carry OR feeds an OR, which never happens in a clean adder
        let input = "x00: 1
y00: 1

x00 AND y00 -> and0
x00 OR y00 -> or0
and0 OR or0 -> z00";
        let shared = Day24::parse(input).unwrap();
        assert_eq!(
            shared.structural_faults(),
            BTreeSet::from(["or0".to_string()])
        );
    }
}
