//! Loading puzzle inputs from disk or embedded samples

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

/// Where solver inputs come from: `dayNN/dayNN.input` files under a root
/// directory, or each day's embedded sample in test mode.
pub struct InputSource {
    root: PathBuf,
    use_sample: bool,
}

impl InputSource {
    pub fn new(root: impl Into<PathBuf>, use_sample: bool) -> Self {
        Self {
            root: root.into(),
            use_sample,
        }
    }

    /// Conventional input file location for a day
    pub fn input_path(&self, day: u8) -> PathBuf {
        self.root
            .join(format!("day{day:02}"))
            .join(format!("day{day:02}.input"))
    }

    /// True when serving embedded samples instead of files
    pub fn uses_samples(&self) -> bool {
        self.use_sample
    }

    /// Fetch the input text for a day
    pub fn load(&self, day: u8, sample: &str) -> Result<String, InputError> {
        if self.use_sample {
            return Ok(sample.to_string());
        }

        let path = self.input_path(day);
        fs::read_to_string(&path).map_err(|source| InputError::Read { day, path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn path_convention() {
        let source = InputSource::new("/puzzles", false);
        assert_eq!(
            source.input_path(3),
            PathBuf::from("/puzzles/day03/day03.input")
        );
        assert_eq!(
            source.input_path(25),
            PathBuf::from("/puzzles/day25/day25.input")
        );
    }

    #[test]
    fn reads_input_files() {
        let temp = TempDir::new().unwrap();
        let day_dir = temp.path().join("day07");
        fs::create_dir_all(&day_dir).unwrap();
        fs::write(day_dir.join("day07.input"), "190: 10 19\n").unwrap();

        let source = InputSource::new(temp.path(), false);
        assert_eq!(source.load(7, "sample").unwrap(), "190: 10 19\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let source = InputSource::new(temp.path(), false);
        assert!(matches!(
            source.load(7, "sample"),
            Err(InputError::Read { day: 7, .. })
        ));
    }

    #[test]
    fn test_mode_serves_the_sample() {
        let temp = TempDir::new().unwrap();
        let source = InputSource::new(temp.path(), true);
        assert_eq!(source.load(7, "sample").unwrap(), "sample");
    }
}
