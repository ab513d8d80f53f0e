use crate::generate::DEFAULT_MEAL_COUNT;
use crate::storage::DiskStore;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Seed value for meal-plan requests.
    pub default_target_calories: u32,
    pub default_meal_count: u8,
    /// Print documents list only what still needs buying.
    pub printable_unchecked_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_target_calories: 2000,
            default_meal_count: DEFAULT_MEAL_COUNT,
            printable_unchecked_only: true,
        }
    }
}

impl Config {
    fn path() -> Option<PathBuf> {
        let proj = ProjectDirs::from("com", "stagkitchen", "stagkitchen")?;
        Some(proj.config_dir().join("config.toml"))
    }

    /// Missing or unreadable config falls back to defaults; the app must
    /// work without one.
    pub fn load() -> Self {
        if let Some(path) = Self::path()
            && path.exists()
        {
            match fs::read_to_string(&path) {
                Ok(raw) => match toml::from_str(&raw) {
                    Ok(cfg) => return cfg,
                    Err(e) => log::warn!("ignoring invalid config {}: {}", path.display(), e),
                },
                Err(e) => log::warn!("could not read config {}: {}", path.display(), e),
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::path() {
            if let Some(dir) = path.parent()
                && !dir.exists()
            {
                fs::create_dir_all(dir)?;
            }
            let toml = toml::to_string_pretty(self)?;
            DiskStore::atomic_write(&path, toml)?;
        }
        Ok(())
    }
}
