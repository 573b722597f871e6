//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::input::InputSource;
use advent_solver::{DynSolver, ParseError, SolverRegistry};
use chrono::TimeDelta;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::debug;

/// Result from a single solver execution
pub struct SolverResult {
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, advent_solver::SolverError>,
    /// Recorded answer for the real puzzle input, if any
    pub expected: Option<&'static str>,
    pub solve_duration: TimeDelta,
    /// Present on the first part solved by an instance
    pub parse_duration: Option<TimeDelta>,
}

impl SolverResult {
    /// An error, or a mismatch against the recorded answer
    pub fn failed(&self) -> bool {
        match &self.answer {
            Err(_) => true,
            Ok(answer) => self.expected.is_some_and(|e| e != answer),
        }
    }

    /// Answered and matched the recorded answer
    pub fn passed(&self) -> bool {
        matches!(&self.answer, Ok(answer) if self.expected == Some(answer.as_str()))
    }
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub day: u8,
    pub parts: RangeInclusive<u8>,
    pub expected: [Option<&'static str>; 2],
    pub sample: &'static str,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputSource,
    parallelize_by: ParallelizeBy,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_config: SyncExecutorConfig {
                registry,
                inputs: InputSource::new(config.input_root.clone(), config.test_input),
                parallelize_by: config.parallelize_by,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_config;
        cfg.registry
            .iter_info()
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                day: info.day,
                parts: self.filter_parts(info.parts),
                // recorded answers describe the real inputs, not the samples
                expected: if cfg.inputs.uses_samples() {
                    [None, None]
                } else {
                    info.expected
                },
                sample: info.sample,
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on part_filter and the solver's part count
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.sync_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to the channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        debug!(
            num_days = work_items.len(),
            mode = ?self.sync_config.parallelize_by,
            "executing work items"
        );

        match self.sync_config.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_solver(&work, &tx, &self.sync_config) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Day | ParallelizeBy::Part => {
                let sync_config = &self.sync_config;
                self.thread_pool.install(|| {
                    work_items
                        .into_par_iter()
                        .map(|work| run_solver(&work, &tx, sync_config).err())
                        .reduce_with(|err1, err2| {
                            err1.map(|err1| ArcExecutorError::combine_opt(err2, err1))
                        })
                        .unwrap_or_default()
                        .map_or(Ok(()), Err)
                })
            }
        }
    }
}

/// Result for a part whose input never loaded
fn make_error_result(work: &WorkItem, part: u8, error: &str) -> SolverResult {
    SolverResult {
        day: work.day,
        part,
        answer: Err(advent_solver::SolverError::Parse(ParseError::Other(
            error.to_string(),
        ))),
        expected: expected_for(work, part),
        solve_duration: TimeDelta::zero(),
        parse_duration: None,
    }
}

fn expected_for(work: &WorkItem, part: u8) -> Option<&'static str> {
    work.expected.get((part - 1) as usize).copied().flatten()
}

/// Run one work item, dispatching on part-level parallelism
fn run_solver(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    sync_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let input = match sync_config.inputs.load(work.day, work.sample) {
        Ok(input) => input,
        Err(e) => {
            // report the failure once per expected part
            let error_msg = e.to_string();
            for part in work.parts.clone() {
                tx.send(make_error_result(work, part, &error_msg))
                    .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            }
            return Ok(());
        }
    };

    if sync_config.parallelize_by == ParallelizeBy::Part {
        run_solver_parts_parallel(work, &input, tx, sync_config)
    } else {
        run_solver_sequential(work, &input, tx, sync_config)
    }
}

/// Solve parts in parallel, buffering results to emit in part order
fn run_solver_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    sync_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (result_tx, result_rx) = std::sync::mpsc::channel();
    let registry = &sync_config.registry;

    work.parts
        .clone()
        .into_par_iter()
        .for_each_with(result_tx, |rtx, part| {
            let result = match registry.create_solver(work.day, input) {
                Ok(mut solver) => {
                    let mut result = solve_part(work, part, &mut *solver);
                    result.parse_duration = Some(solver.parse_duration());
                    result
                }
                Err(e) => SolverResult {
                    day: work.day,
                    part,
                    answer: Err(e),
                    expected: expected_for(work, part),
                    solve_duration: TimeDelta::zero(),
                    parse_duration: None,
                },
            };
            rtx.send(result).ok();
        });

    // emit buffered results in part order
    let mut buffer: [Option<SolverResult>; 2] = [None, None];
    let start_part = *work.parts.start();
    let mut next_part = start_part;

    for result in result_rx {
        let ix = (result.part - start_part) as usize;
        if ix < buffer.len() {
            buffer[ix] = Some(result);
        }
        while let Some(result) = buffer
            .get_mut((next_part - start_part) as usize)
            .and_then(Option::take)
        {
            tx.send(result)
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            next_part += 1;
        }
    }
    Ok(())
}

/// Parse once and solve the parts in order
fn run_solver_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    sync_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let mut solver = match sync_config.registry.create_solver(work.day, input) {
        Ok(solver) => solver,
        Err(e) => {
            let error_msg = e.to_string();
            for part in work.parts.clone() {
                tx.send(make_error_result(work, part, &error_msg))
                    .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            }
            return Ok(());
        }
    };

    let mut first = true;
    for part in work.parts.clone() {
        let mut result = solve_part(work, part, &mut *solver);
        if first {
            result.parse_duration = Some(solver.parse_duration());
            first = false;
        }
        tx.send(result)
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

/// Solve a single part on an existing instance
fn solve_part(work: &WorkItem, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    match solver.solve(part) {
        Ok(solved) => SolverResult {
            day: work.day,
            part,
            expected: expected_for(work, part),
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            parse_duration: None,
        },
        Err(e) => SolverResult {
            day: work.day,
            part,
            answer: Err(e.into()),
            expected: expected_for(work, part),
            solve_duration: TimeDelta::zero(),
            parse_duration: None,
        },
    }
}
