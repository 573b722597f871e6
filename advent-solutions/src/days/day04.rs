//! Day 4: XMAS word search

use crate::util::grid::Grid;
use crate::util::point::{Point, ALL_DIRECTIONS};
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};

const SAMPLE: &str = "MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 4, sample = SAMPLE, tags = ["grid"], expected(part1 = "2532", part2 = "1941"))]
pub struct Day04;

impl PuzzleParser for Day04 {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn find_word(board: &Grid<u8>, mut cur: Point, dir: Point, word: &[u8]) -> bool {
    for &c in word {
        if !board.in_bounds(cur) || board[cur] != c {
            return false;
        }
        cur += dir;
    }
    true
}

/// Two MAS in an X shape centered on `cur`, for example:
///
/// ```text
/// M   S      S   S
///   A    or    A
/// M   S      M   M
/// ```
///
/// `cur` must not be on the outermost edge of the board.
fn find_mas_in_x_shape(board: &Grid<u8>, cur: Point) -> bool {
    if board[cur] != b'A' {
        return false;
    }

    let ul = board[cur + Point::new(-1, -1)];
    let ur = board[cur + Point::new(1, -1)];
    let ll = board[cur + Point::new(-1, 1)];
    let lr = board[cur + Point::new(1, 1)];

    let ul_to_lr = (ul == b'M' && lr == b'S') || (ul == b'S' && lr == b'M');
    let ll_to_ur = (ll == b'M' && ur == b'S') || (ll == b'S' && ur == b'M');

    ul_to_lr && ll_to_ur
}

impl PartSolver<1> for Day04 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let num_xmases: usize = shared
            .points()
            .map(|p| {
                ALL_DIRECTIONS
                    .iter()
                    .filter(|&&dir| find_word(shared, p, dir, b"XMAS"))
                    .count()
            })
            .sum();

        Ok(num_xmases.to_string())
    }
}

impl PartSolver<2> for Day04 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let num_x_mas = shared
            .points()
            .filter(|p| {
                p.x != 0 && p.y != 0 && p.x != shared.cols() - 1 && p.y != shared.rows() - 1
            })
            .filter(|&p| find_mas_in_x_shape(shared, p))
            .count();

        Ok(num_x_mas.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    fn solve(part: u8) -> String {
        let mut shared = Day04::parse(SAMPLE).unwrap();
        Day04::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn part_one_sample() {
        assert_eq!(solve(1), "18");
    }

    #[test]
    fn part_two_sample() {
        assert_eq!(solve(2), "9");
    }
}
