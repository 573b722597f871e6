//! Solver registry keyed by puzzle day

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};

/// Days per calendar (1-25)
pub const DAYS: usize = 25;

/// Calculate flat index from a day number, returning None if out of bounds
#[inline]
fn calc_index(day: u8) -> Option<usize> {
    if day == 0 || day as usize > DAYS {
        return None;
    }
    Some((day - 1) as usize)
}

/// Thread-safe factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
    /// Expected answers against the real puzzle input, one slot per part.
    /// `None` where no answer has been recorded yet.
    pub expected: [Option<&'static str>; 2],
    /// Embedded sample input, used by the driver's test mode
    pub sample: &'static str,
    /// Tags for filtering (e.g. "grid", "vm")
    pub tags: &'static [&'static str],
}

/// Factory entry with metadata
struct RegistryEntry {
    factory: SolverFactory,
    info: SolverInfo,
}

/// Builder for constructing a [`SolverRegistry`].
///
/// The builder pattern keeps the registry immutable after construction and
/// detects duplicate registration up front.
///
/// # Example
///
/// ```no_run
/// # use advent_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<RegistryEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..DAYS).map(|_| None).collect(),
        }
    }

    /// Register a solver factory with its metadata.
    ///
    /// Returns an error if the day is out of bounds or already registered.
    pub fn register<F>(mut self, info: SolverInfo, factory: F) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(info.day).ok_or(RegistrationError::InvalidDay(info.day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(info.day));
        }

        self.entries[index] = Some(RegistryEntry {
            factory: Box::new(factory),
            info,
        });
        Ok(self)
    }

    /// Register all solver plugins collected via `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins_where(|_| true)
    }

    /// Register solver plugins that match the given filter predicate.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use advent_solver::RegistryBuilder;
    /// // Register only grid puzzles
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins_where(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins_where<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers.
///
/// Maps day numbers to factory functions in a flat 25-slot table.
pub struct SolverRegistry {
    entries: Vec<Option<RegistryEntry>>,
}

impl SolverRegistry {
    /// Iterate over metadata for all registered solvers, in day order
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.entries
            .iter()
            .filter_map(|entry| entry.as_ref().map(|e| e.info))
    }

    /// Get metadata for a specific day
    pub fn get_info(&self, day: u8) -> Option<SolverInfo> {
        calc_index(day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| e.info)
    }

    /// Check if a solver exists for the day
    pub fn contains(&self, day: u8) -> bool {
        self.get_info(day).is_some()
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }

    /// Create a solver instance by invoking the factory for a specific day.
    ///
    /// Parsing happens here; the returned instance borrows the input.
    pub fn create_solver<'a>(
        &self,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(day).ok_or(SolverError::InvalidDay(day))?;

        let entry = self
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(day))?;

        (entry.factory)(input).map_err(SolverError::Parse)
    }
}

/// Trait for solvers that can register themselves with a registry builder.
///
/// Type-erased so different solver types can be collected in one plugin
/// inventory. Any type implementing [`Solver`](crate::Solver) gets this
/// through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder using the plugin's metadata
    fn register_with(
        &self,
        builder: RegistryBuilder,
        plugin: &SolverPlugin,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;
}

/// Parse input and box up a solver instance; the shape every registered
/// factory shares.
fn instantiate<'a, S: crate::solver::Solver + 'a>(
    day: u8,
    input: &'a str,
) -> Result<Box<dyn DynSolver + 'a>, ParseError> {
    Ok(Box::new(SolverInstance::<S>::new(day, input)?))
}

impl<S> RegisterableSolver for S
where
    S: crate::solver::Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        plugin: &SolverPlugin,
    ) -> Result<RegistryBuilder, RegistrationError> {
        let day = plugin.day;
        let info = SolverInfo {
            day,
            parts: S::PARTS,
            expected: plugin.expected,
            sample: plugin.sample,
            tags: plugin.tags,
        };
        builder.register(info, move |input: &str| instantiate::<S>(day, input))
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin record for automatic solver registration.
///
/// Usually generated by the `RegisterPuzzle` derive macro:
///
/// ```ignore
/// #[derive(PuzzleSolver, RegisterPuzzle)]
/// #[puzzle_solver(parts = 2)]
/// #[puzzle(day = 1, sample = SAMPLE, expected(part1 = "1830467", part2 = "26674158"))]
/// struct Day01;
/// ```
pub struct SolverPlugin {
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering
    pub tags: &'static [&'static str],
    /// Expected answers against the real puzzle input, one slot per part
    pub expected: [Option<&'static str>; 2],
    /// Embedded sample input for the driver's test mode
    pub sample: &'static str,
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::{PuzzleParser, Solver};

    struct Doubler;

    impl PuzzleParser for Doubler {
        type SharedData<'a> = i64;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat("expected integer".into()))
        }
    }

    impl Solver for Doubler {
        const PARTS: u8 = 1;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok((*shared * 2).to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    fn doubler_info(day: u8) -> SolverInfo {
        SolverInfo {
            day,
            parts: 1,
            expected: [Some("42"), None],
            sample: "21",
            tags: &["test"],
        }
    }

    fn doubler_factory(
        day: u8,
    ) -> impl for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync
    {
        move |input: &str| super::instantiate::<Doubler>(day, input)
    }

    #[test]
    fn register_and_solve() {
        let registry = RegistryBuilder::new()
            .register(doubler_info(3), doubler_factory(3))
            .unwrap()
            .build();

        assert!(registry.contains(3));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_info(3).unwrap().expected[0], Some("42"));

        let mut solver = registry.create_solver(3, "21").unwrap();
        assert_eq!(solver.day(), 3);
        assert_eq!(solver.solve(1).unwrap().answer, "42");
        assert!(matches!(
            solver.solve(2),
            Err(SolveError::PartOutOfRange(2))
        ));
    }

    #[test]
    fn duplicate_registration_rejected() {
        let result = RegistryBuilder::new()
            .register(doubler_info(3), doubler_factory(3))
            .unwrap()
            .register(doubler_info(3), doubler_factory(3));

        assert!(matches!(result, Err(RegistrationError::DuplicateSolver(3))));
    }

    #[test]
    fn invalid_day_rejected() {
        for day in [0u8, 26] {
            let result = RegistryBuilder::new().register(doubler_info(day), doubler_factory(day));
            assert!(matches!(result, Err(RegistrationError::InvalidDay(d)) if d == day));
        }
    }

    #[test]
    fn lookup_misses() {
        let registry = RegistryBuilder::new().build();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.create_solver(5, ""),
            Err(SolverError::NotFound(5))
        ));
        assert!(matches!(
            registry.create_solver(0, ""),
            Err(SolverError::InvalidDay(0))
        ));
    }

    #[test]
    fn iter_info_in_day_order() {
        let registry = RegistryBuilder::new()
            .register(doubler_info(7), doubler_factory(7))
            .unwrap()
            .register(doubler_info(2), doubler_factory(2))
            .unwrap()
            .build();

        let days: Vec<u8> = registry.iter_info().map(|i| i.day).collect();
        assert_eq!(days, vec![2, 7]);
    }
}
