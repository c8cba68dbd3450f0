use anyhow::Result;
use std::path::PathBuf;

/// Overrides the directory that holds `.packlist/`.
pub const HOME_ENV: &str = "PACKLIST_HOME";
/// Start from the example items when no snapshot exists yet.
pub const SEED_ENV: &str = "PACKLIST_SEED";

const DATA_DIR: &str = ".packlist";
const DATA_FILE: &str = "items.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub seed: bool,
}

impl Config {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Config {
            data_file: data_file.into(),
            seed: false,
        }
    }

    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Resolves the configuration from command-line overrides, then the
    /// environment, then the user's home directory.
    pub fn resolve(file: Option<PathBuf>, seed: bool) -> Result<Self> {
        let data_file = match file {
            Some(path) => path,
            None => Self::default_data_file()?,
        };

        let seed = seed || std::env::var(SEED_ENV).is_ok_and(|v| parse_flag(&v));

        Ok(Config { data_file, seed })
    }

    fn default_data_file() -> Result<PathBuf> {
        if let Ok(home) = std::env::var(HOME_ENV) {
            return Ok(PathBuf::from(home).join(DATA_DIR).join(DATA_FILE));
        }

        let home = directories::UserDirs::new()
            .ok_or_else(|| anyhow::anyhow!("Failed to get home directory"))?
            .home_dir()
            .to_path_buf();

        Ok(home.join(DATA_DIR).join(DATA_FILE))
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
