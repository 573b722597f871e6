//! Day 14: robots patrolling a wrap-around lobby

use crate::util::numbers::posmod;
use crate::util::point::Point;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use anyhow::anyhow;
use regex::Regex;
use tracing::debug;

const SAMPLE: &str = "p=0,4 v=3,-3
p=6,3 v=-1,-3
p=10,3 v=-1,2
p=2,0 v=2,-1
p=0,0 v=1,3
p=3,0 v=-2,-2
p=7,6 v=-1,-3
p=3,0 v=-1,-2
p=9,3 v=2,3
p=7,3 v=-1,2
p=2,4 v=2,-3
p=9,5 v=-3,-3";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 14, sample = SAMPLE, tags = ["grid", "math"], expected(part1 = "221142636", part2 = "7916"))]
pub struct Day14;

#[derive(Clone, Copy)]
struct Params {
    w: i32,
    h: i32,
    iters: i32,
}

impl Params {
    const fn mid_x(self) -> i32 {
        self.w / 2
    }

    const fn mid_y(self) -> i32 {
        self.h / 2
    }
}

const REAL_PARAMS: Params = Params {
    w: 101,
    h: 103,
    iters: 100,
};
const SAMPLE_PARAMS: Params = Params {
    w: 11,
    h: 7,
    iters: 100,
};

#[derive(Clone, Copy)]
struct Robot {
    p: Point,
    v: Point,
}

pub struct Lobby {
    params: Params,
    robots: Vec<Robot>,
}

impl PuzzleParser for Day14 {
    type SharedData<'a> = Lobby;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let expr = Regex::new(r"p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)").expect("static pattern");

        let robots = input
            .trim()
            .lines()
            .map(|line| {
                let caps = expr
                    .captures(line.trim())
                    .ok_or_else(|| ParseError::InvalidFormat(format!("bad robot line {line:?}")))?;
                let num = |i: usize| caps[i].parse::<i32>().expect("matched integer");
                Ok(Robot {
                    p: Point::new(num(1), num(2)),
                    v: Point::new(num(3), num(4)),
                })
            })
            .collect::<Result<Vec<Robot>, ParseError>>()?;

        if robots.is_empty() {
            return Err(ParseError::MissingData("no robots".into()));
        }

        // the sample lobby is 11x7; positions tell the two apart
        let params = if robots
            .iter()
            .all(|r| r.p.x < SAMPLE_PARAMS.w && r.p.y < SAMPLE_PARAMS.h)
        {
            SAMPLE_PARAMS
        } else {
            REAL_PARAMS
        };

        Ok(Lobby { params, robots })
    }
}

fn predict_position(robot: Robot, params: Params) -> Point {
    let p = robot.p + robot.v * params.iters;
    Point::new(posmod(p.x, params.w), posmod(p.y, params.h))
}

/// Quadrant ID for a position, None on the middle lines
fn quadrant_for_pos(p: Point, params: Params) -> Option<usize> {
    if p.x == params.mid_x() || p.y == params.mid_y() {
        return None;
    }

    Some(((usize::from(p.y > params.mid_y())) << 1) | usize::from(p.x > params.mid_x()))
}

/// Step robots one second at a time until some robot sits in the middle of a
/// fully filled 5x5 block; that is almost certainly the tree picture.
fn find_tree(lobby: &mut Lobby) -> Result<usize, SolveError> {
    let params = Params {
        iters: 1, // gotta step one by one; bulk stepping only works for part 1
        ..lobby.params
    };
    let w = params.w;
    let h = params.h;

    let as_coord = |p: Point| (p.y * w + p.x) as usize;

    let mut grid = vec![false; (w * h) as usize];

    let find_filled_block = |grid: &[bool], p: Point| {
        if p.x < 2 || p.y < 2 || p.x + 2 >= w || p.y + 2 >= h {
            return false;
        }

        (p.y - 2..=p.y + 2)
            .all(|y| (p.x - 2..=p.x + 2).all(|x| grid[as_coord(Point::new(x, y))]))
    };

    // every robot's position is periodic in w*h steps, so searching further
    // than that revisits known pictures
    for iters in 1..=(w * h) as usize {
        grid.fill(false);

        for robot in &mut lobby.robots {
            robot.p = predict_position(*robot, params);
            grid[as_coord(robot.p)] = true;
        }

        if lobby
            .robots
            .iter()
            .any(|robot| find_filled_block(&grid, robot.p))
        {
            debug!(iters, "tree candidate found");
            return Ok(iters);
        }
    }

    Err(SolveError::SolveFailed(
        anyhow!("no tree candidate position found").into(),
    ))
}

impl PartSolver<1> for Day14 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut quadrants = [0u64; 4];
        for &robot in &shared.robots {
            let p = predict_position(robot, shared.params);
            if let Some(q) = quadrant_for_pos(p, shared.params) {
                quadrants[q] += 1;
            }
        }

        Ok(quadrants.iter().product::<u64>().to_string())
    }
}

impl PartSolver<2> for Day14 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(find_tree(shared)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    #[test]
    fn part_one_sample() {
        let mut shared = Day14::parse(SAMPLE).unwrap();
        assert_eq!(Day14::solve_part_checked(&mut shared, 1).unwrap(), "12");
    }

    #[test]
    fn sample_dimensions_detected() {
        let shared = Day14::parse(SAMPLE).unwrap();
        assert_eq!(shared.params.w, 11);
        assert_eq!(shared.params.h, 7);
    }

    #[test]
    fn wraparound_prediction() {
        // the worked example: p=2,4 v=2,-3 lands on (1,3) after 5 seconds
        let robot = Robot {
            p: Point::new(2, 4),
            v: Point::new(2, -3),
        };
        let params = Params {
            iters: 5,
            ..SAMPLE_PARAMS
        };
        assert_eq!(predict_position(robot, params), Point::new(1, 3));
    }

    #[test]
    fn no_tree_in_sample() {
        let mut shared = Day14::parse(SAMPLE).unwrap();
        assert!(matches!(
            Day14::solve_part_checked(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }
}
