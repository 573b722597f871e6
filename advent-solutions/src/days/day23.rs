//! Day 23: LAN party cliques

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
use anyhow::anyhow;
use std::collections::{HashMap, HashSet};

const SAMPLE: &str = "kh-tc
qp-kh
de-cg
ka-co
yn-aq
qp-ub
cg-tb
vc-aq
tb-ka
wh-tc
yn-cg
kh-ub
ta-co
de-co
tc-td
tb-wq
wh-td
ta-ka
td-qp
aq-cg
wq-ub
ub-vc
de-ta
wq-aq
wq-vc
wh-yn
ka-de
kh-ta
co-tc
wh-qp
tb-vc
td-yn";

#[derive(PuzzleSolver, RegisterPuzzle)]
#[puzzle_solver(parts = 2)]
#[puzzle(day = 23, sample = SAMPLE, tags = ["graph"], expected(part1 = "1175", part2 = "bw,dr,du,ha,mm,ov,pj,qh,tz,uv,vq,wq,xw"))]
pub struct Day23;

pub struct Network {
    names: Vec<String>,
    adjacency: Vec<HashSet<usize>>,
}

impl PuzzleParser for Day23 {
    type SharedData<'a> = Network;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut ids: HashMap<&str, usize> = HashMap::new();
        let mut names: Vec<String> = Vec::new();
        let mut adjacency: Vec<HashSet<usize>> = Vec::new();

        let mut intern = |name: &'a str,
                          names: &mut Vec<String>,
                          adjacency: &mut Vec<HashSet<usize>>| {
            *ids.entry(name).or_insert_with(|| {
                names.push(name.to_string());
                adjacency.push(HashSet::new());
                names.len() - 1
            })
        };

        for line in input.trim().lines() {
            let (a, b) = line
                .trim()
                .split_once('-')
                .ok_or_else(|| ParseError::InvalidFormat(format!("bad connection {line:?}")))?;

            let a = intern(a, &mut names, &mut adjacency);
            let b = intern(b, &mut names, &mut adjacency);
            adjacency[a].insert(b);
            adjacency[b].insert(a);
        }

        Ok(Network { names, adjacency })
    }
}

impl PartSolver<1> for Day23 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let n = shared.names.len();
        let connected = |a: usize, b: usize| shared.adjacency[a].contains(&b);
        let historian = |a: usize| shared.names[a].starts_with('t');

        let mut num_t_groups = 0;
        for x in 0..n {
            for y in x + 1..n {
                for z in y + 1..n {
                    if (historian(x) || historian(y) || historian(z))
                        && connected(x, y)
                        && connected(x, z)
                        && connected(y, z)
                    {
                        num_t_groups += 1;
                    }
                }
            }
        }

        Ok(num_t_groups.to_string())
    }
}

/// Bron-Kerbosch enumeration of maximal cliques
fn find_cliques(
    cur: HashSet<usize>,
    mut candidates: HashSet<usize>,
    mut excluded: HashSet<usize>,
    adjacency: &[HashSet<usize>],
    cliques: &mut Vec<HashSet<usize>>,
) {
    if candidates.is_empty() && excluded.is_empty() {
        cliques.push(cur);
        return;
    }

    while let Some(&candidate) = candidates.iter().next() {
        let mut new_cur = cur.clone();
        new_cur.insert(candidate);

        let new_candidates = candidates
            .intersection(&adjacency[candidate])
            .copied()
            .collect();
        let new_excluded = excluded
            .intersection(&adjacency[candidate])
            .copied()
            .collect();

        find_cliques(new_cur, new_candidates, new_excluded, adjacency, cliques);

        candidates.remove(&candidate);
        excluded.insert(candidate);
    }
}

impl PartSolver<2> for Day23 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let vertices: HashSet<usize> = (0..shared.names.len()).collect();

        let mut cliques = Vec::new();
        find_cliques(
            HashSet::new(),
            vertices,
            HashSet::new(),
            &shared.adjacency,
            &mut cliques,
        );

        let max_clique = cliques
            .iter()
            .max_by_key(|clique| clique.len())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("no cliques found").into()))?;

        let mut members: Vec<&str> = max_clique
            .iter()
            .map(|&ix| shared.names[ix].as_str())
            .collect();
        members.sort_unstable();

        Ok(members.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolverExt;

    fn solve(part: u8) -> String {
        let mut shared = Day23::parse(SAMPLE).unwrap();
        Day23::solve_part_checked(&mut shared, part).unwrap()
    }

    #[test]
    fn part_one_sample() {
        assert_eq!(solve(1), "7");
    }

    #[test]
    fn part_two_sample() {
        assert_eq!(solve(2), "co,de,ka,ta");
    }

    #[test]
    fn triangle_graph_is_its_own_clique() {
        let mut shared = Day23::parse("ta-tb\ntb-tc\ntc-ta").unwrap();
        assert_eq!(Day23::solve_part_checked(&mut shared, 1).unwrap(), "1");
        assert_eq!(
            Day23::solve_part_checked(&mut shared, 2).unwrap(),
            "ta,tb,tc"
        );
    }
}
