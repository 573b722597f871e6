//! Day 15: warehouse robot pushing boxes

use crate::util::grid::Grid;
use crate::util::point::{self, Point};
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use tracing::trace;

const SAMPLE: &str = "##########
#..O..O.O#
#......O.#
#.OO..O.O#
#..O@..O.#
#O#..O...#
#O..O..O.#
#.OO.O.OO#
#....O...#
##########

<vv>^<v^>v>^vv^v>v<>v^v<v<^vv<<<^><<><>>v<vvv<>^v^>^<<<><<v<<<v^vv^v>^
vvv<<^>^v^^><<>>><>^<<><^vv^^<>vvv<>><^^v>^>vv<>v<<<<v<^v>^<^^>>>^<v<v
><>vv>v^v^<>><>>>><^^>vv>v<^^^>>v^v^<^^>v^^>v^<^v>v<>>v^v^<v>v^^<^^vv<
<<v<^>>^^^^>>>v^<>vvv^><v<<<>^^^vv^<vvv>^>v<^^^^v<>^>vvvv><>>v^<<^^^^^
^><^><>>><>^^<<^^v>>><^<v>^<vv>>v>>>^v><>^v><<<<v>>v<v<v>vvv>^<><<>^><
^>><>^v<><^vvv<^^<><v<<<<<><^v<<<><<<^^<v<^^^><^>>^<v^><<<^>>^v<v^v<v^
>^>>^v>vv>^<<^v<>><<><<v<<v><>v<^vv<<<>^^v^>^^>>><<^v>>v^v><^^>>^<>vv^
<><^^>^^^<><vvvvv^v<v<<>^v<v>v<<^><<><<><<<^^<<<^<<>><<><^^^>^^<>^>v<>
^^>vv<^v^v<vv>^<><v<^v>^^^>>>^^vvv^>vvv<>>>^<^>>>>>^<<^v>^vvv<>^<><<v>
v^^>>><<^^<>>^v^<v^vv<>v^<<>^<^v^v><^<<<><<^<v><v<>vv>>v><v^<vv<>v^<<^";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 15, sample = SAMPLE, tags = ["grid"])]
pub struct Day15;

#[derive(Clone)]
pub struct Warehouse {
    board: Grid<u8>,
    steps: Vec<Point>,
    robot: Point,
}

impl Warehouse {
    /// Push the robot one step, shoving any line of narrow boxes ahead of it
    fn move_robot(&mut self, dir: Point) {
        let next = self.robot + dir;

        // scan ahead for a free cell before the next wall
        let mut c = next;
        let has_space = loop {
            match self.board[c] {
                b'#' => break false,
                b'.' => break true,
                _ => c += dir,
            }
        };

        if !has_space {
            return;
        }

        while c != self.robot {
            let prev = c - dir;
            let tmp = self.board[c];
            self.board[c] = self.board[prev];
            self.board[prev] = tmp;
            c = prev;
        }

        self.robot = next;
    }

    fn apply_all_steps(&mut self) {
        for ix in 0..self.steps.len() {
            self.move_robot(self.steps[ix]);
        }
    }

    fn apply_all_steps_wide(&mut self) {
        for ix in 0..self.steps.len() {
            let dir = self.steps[ix];
            if self.can_move(self.robot, dir) {
                self.move_wide(self.robot, dir);
                self.robot += dir;
            }
            trace!(step = ix, "after step\n{}", self.board);
        }
    }

    fn gps(&self) -> u64 {
        self.board
            .points()
            .filter(|&p| self.board[p] == b'O' || self.board[p] == b'[')
            .map(|p| p.y as u64 * 100 + p.x as u64)
            .sum()
    }

    /// Double the warehouse horizontally: boxes become `[]`, the robot keeps
    /// a free cell to its right.
    fn widen(&self) -> Warehouse {
        let mut rows = Vec::with_capacity(self.board.rows() as usize);
        for y in 0..self.board.rows() {
            let mut row = Vec::with_capacity(self.board.cols() as usize * 2);
            for x in 0..self.board.cols() {
                let wide: &[u8; 2] = match self.board[Point::new(x, y)] {
                    b'#' => b"##",
                    b'O' => b"[]",
                    b'@' => b"@.",
                    _ => b"..",
                };
                row.extend_from_slice(wide);
            }
            rows.push(row);
        }

        let board = Grid::from_rows(rows).expect("doubling keeps the grid rectangular");
        let robot = Point::new(self.robot.x * 2, self.robot.y);

        Warehouse {
            board,
            steps: self.steps.clone(),
            robot,
        }
    }

    fn can_move(&self, p: Point, dir: Point) -> bool {
        let next = p + dir;

        match self.board[next] {
            b'#' => false,
            b'.' => true,
            b'[' => {
                self.can_move(next, dir)
                    && (dir == point::LEFT || self.can_move(next + point::RIGHT, dir))
            }
            b']' => {
                self.can_move(next, dir)
                    && (dir == point::RIGHT || self.can_move(next + point::LEFT, dir))
            }
            _ => false,
        }
    }

    /// Shove the cell at `p` one step, recursively clearing wide boxes out
    /// of the way first. `can_move` must have returned true.
    fn move_wide(&mut self, p: Point, dir: Point) {
        let next = p + dir;

        match self.board[next] {
            b'.' => {}
            b'[' => {
                self.move_wide(next, dir);
                if dir.is_vertical() {
                    self.move_wide(next + point::RIGHT, dir);
                }
            }
            b']' => {
                self.move_wide(next, dir);
                if dir.is_vertical() {
                    self.move_wide(next + point::LEFT, dir);
                }
            }
            c => unreachable!("move into {:?} after can_move", c as char),
        }

        let moved = self.board[p];
        self.board[p] = self.board[next];
        self.board[next] = moved;
    }
}

impl PuzzleParser for Day15 {
    type SharedData<'a> = Warehouse;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let input = input.trim_start_matches(['\n', '\r']);
        let (map_block, step_block) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("expected blank line before steps".into()))?;

        let board =
            Grid::parse(map_block).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let steps = step_block
            .bytes()
            .filter(|c| !c.is_ascii_whitespace())
            .map(|c| match c {
                b'^' => Ok(point::UP),
                b'>' => Ok(point::RIGHT),
                b'v' => Ok(point::DOWN),
                b'<' => Ok(point::LEFT),
                _ => Err(ParseError::InvalidFormat(format!(
                    "invalid direction character {:?}",
                    c as char
                ))),
            })
            .collect::<Result<Vec<Point>, _>>()?;

        let robot = board
            .find(b'@')
            .ok_or_else(|| ParseError::MissingData("no robot".into()))?;

        Ok(Warehouse {
            board,
            steps,
            robot,
        })
    }
}

impl PartSolver<1> for Day15 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut warehouse = shared.clone();
        warehouse.apply_all_steps();
        Ok(warehouse.gps().to_string())
    }
}

impl PartSolver<2> for Day15 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut warehouse = shared.widen();
        warehouse.apply_all_steps_wide();
        Ok(warehouse.gps().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    const SMALL_SAMPLE: &str = "########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<";

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Day15::parse(input).unwrap();
        Day15::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn part_one_sample() {
        assert_eq!(solve(SAMPLE, 1), "10092");
    }

    #[test]
    fn part_one_small_sample() {
        assert_eq!(solve(SMALL_SAMPLE, 1), "2028");
    }

    #[test]
    fn part_two_sample() {
        assert_eq!(solve(SAMPLE, 2), "9021");
    }

    #[test]
    fn widening_doubles_columns() {
        let shared = Day15::parse(SMALL_SAMPLE).unwrap();
        let wide = shared.widen();
        assert_eq!(wide.board.cols(), shared.board.cols() * 2);
        assert_eq!(wide.robot, Point::new(4, 2));
        assert_eq!(wide.board[wide.robot], b'@');
    }
}
