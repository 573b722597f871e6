use advent_solver::{
    ParseError, PartSolver, PuzzleParser, RegistryBuilder, SolveError, SolverExt,
};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};

const SAMPLE: &str = "1\n2\n3\n4\n5";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 25, sample = SAMPLE, tags = ["test"], expected(part1 = "15"))]
struct SumProduct;

impl PuzzleParser for SumProduct {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

#[test]
fn solver_impl_generated() {
    let mut shared = SumProduct::parse(SAMPLE).unwrap();
    assert_eq!(shared, vec![1, 2, 3, 4, 5]);

    assert_eq!(SumProduct::solve_part_checked(&mut shared, 1).unwrap(), "15");
    assert_eq!(
        SumProduct::solve_part_checked(&mut shared, 2).unwrap(),
        "120"
    );
    assert!(matches!(
        SumProduct::solve_part_checked(&mut shared, 3),
        Err(SolveError::PartOutOfRange(3))
    ));
}

#[test]
fn plugin_submitted_with_metadata() {
    let registry = RegistryBuilder::new()
        .register_plugins_where(|plugin| plugin.tags.contains(&"test"))
        .unwrap()
        .build();

    let info = registry.get_info(25).expect("plugin should be registered");
    assert_eq!(info.parts, 2);
    assert_eq!(info.sample, SAMPLE);
    assert_eq!(info.expected, [Some("15"), None]);

    let mut solver = registry.create_solver(25, info.sample).unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "15");
}
