//! Where catalog definitions come from.
//!
//! A [`CatalogSource`] hands out the raw `Rarity` and `Bait` sections. The
//! YAML implementation reads them from a config directory and writes the
//! default sections back when a file or section is missing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::defaults::{default_baits, default_rarities};
use super::types::{BaitEntry, BaitFile, RarityEntry, RarityFile, Settings};
use crate::core::constants::{BAIT_FILE, CONFIG_DIR_NAME, RARITY_FILE, SETTINGS_FILE};
use crate::error::ConfigurationError;

/// Provides rarity and bait definitions, in configured order.
pub trait CatalogSource {
    fn rarity_entries(&self) -> Result<IndexMap<String, RarityEntry>, ConfigurationError>;
    fn bait_entries(&self) -> Result<IndexMap<String, BaitEntry>, ConfigurationError>;
}

/// Get the default config directory (~/.lurecast/).
pub fn default_config_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(CONFIG_DIR_NAME))
}

/// Reads `rarity.yml` and `bait.yml` from a directory.
#[derive(Debug, Clone)]
pub struct YamlDirSource {
    dir: PathBuf,
}

impl YamlDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load `settings.yml`, writing the defaults if the file does not exist.
    pub fn settings(&self) -> Result<Settings, ConfigurationError> {
        let path = self.dir.join(SETTINGS_FILE);
        match read_yaml::<Settings>(&path)? {
            Some(settings) => Ok(settings),
            None => {
                let settings = Settings::default();
                write_yaml(&path, &settings)?;
                Ok(settings)
            }
        }
    }
}

impl CatalogSource for YamlDirSource {
    fn rarity_entries(&self) -> Result<IndexMap<String, RarityEntry>, ConfigurationError> {
        let path = self.dir.join(RARITY_FILE);
        let file = read_yaml::<RarityFile>(&path)?.unwrap_or_default();
        match file.rarity {
            Some(entries) => entries.into_unique(ConfigurationError::DuplicateRarity),
            None => {
                let section = default_rarities();
                let file = RarityFile {
                    rarity: Some(section.clone().into()),
                };
                write_yaml(&path, &file)?;
                log::info!("Wrote default rarities to {}", path.display());
                Ok(section)
            }
        }
    }

    fn bait_entries(&self) -> Result<IndexMap<String, BaitEntry>, ConfigurationError> {
        let path = self.dir.join(BAIT_FILE);
        let file = read_yaml::<BaitFile>(&path)?.unwrap_or_default();
        match file.bait {
            Some(entries) => entries.into_unique(ConfigurationError::DuplicateBait),
            None => {
                let section = default_baits();
                let file = BaitFile {
                    bait: Some(section.clone().into()),
                };
                write_yaml(&path, &file)?;
                log::info!("Wrote default baits to {}", path.display());
                Ok(section)
            }
        }
    }
}

/// Definitions held in memory, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub rarities: IndexMap<String, RarityEntry>,
    pub baits: IndexMap<String, BaitEntry>,
}

impl InMemorySource {
    pub fn new(
        rarities: IndexMap<String, RarityEntry>,
        baits: IndexMap<String, BaitEntry>,
    ) -> Self {
        Self { rarities, baits }
    }

    /// The stock rarities and baits.
    pub fn with_defaults() -> Self {
        Self::new(default_rarities(), default_baits())
    }
}

impl CatalogSource for InMemorySource {
    fn rarity_entries(&self) -> Result<IndexMap<String, RarityEntry>, ConfigurationError> {
        Ok(self.rarities.clone())
    }

    fn bait_entries(&self) -> Result<IndexMap<String, BaitEntry>, ConfigurationError> {
        Ok(self.baits.clone())
    }
}

/// Parse a YAML file, returning `None` if it does not exist or is empty.
fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigurationError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigurationError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    if content.trim().is_empty() {
        return Ok(None);
    }
    serde_yaml::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigurationError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

fn write_yaml<T: Serialize>(path: &Path, data: &T) -> Result<(), ConfigurationError> {
    let to_write_error = |source| ConfigurationError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    let yaml = serde_yaml::to_string(data)
        .map_err(|e| to_write_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    fs::write(path, yaml).map_err(to_write_error)
}
