use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::grid::{
    ConfigurationParameters, InDateCellGeneration, MAX_ROWS_PER_MONTH, OutDateCellGeneration,
};
use crate::ui::layout::Size;

fn default_first_day_of_week() -> String {
    "sun".to_string()
}

fn default_number_of_rows() -> usize {
    MAX_ROWS_PER_MONTH
}

fn default_strict_boundaries() -> bool {
    true
}

fn default_cell_width() -> f64 {
    4.0
}

fn default_cell_height() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_first_day_of_week")]
    pub first_day_of_week: String,
    #[serde(default = "default_number_of_rows")]
    pub number_of_rows: usize,
    #[serde(default)]
    pub generate_in_dates: InDateCellGeneration,
    #[serde(default)]
    pub generate_out_dates: OutDateCellGeneration,
    #[serde(default = "default_strict_boundaries")]
    pub has_strict_boundaries: bool,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,
    #[serde(default = "default_cell_height")]
    pub cell_height: f64,
}

impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into_config()
    }
}

/// Raw config for deserialization - all fields are Option to distinguish "not set" from "set to default"
#[derive(Debug, Clone, Deserialize, Default)]
struct RawConfig {
    pub first_day_of_week: Option<String>,
    pub number_of_rows: Option<usize>,
    pub generate_in_dates: Option<InDateCellGeneration>,
    pub generate_out_dates: Option<OutDateCellGeneration>,
    pub has_strict_boundaries: Option<bool>,
    pub time_zone: Option<String>,
    pub cell_width: Option<f64>,
    pub cell_height: Option<f64>,
}

impl RawConfig {
    fn into_config(self) -> Config {
        Config {
            first_day_of_week: self
                .first_day_of_week
                .unwrap_or_else(default_first_day_of_week),
            number_of_rows: self.number_of_rows.unwrap_or_else(default_number_of_rows),
            generate_in_dates: self.generate_in_dates.unwrap_or_default(),
            generate_out_dates: self.generate_out_dates.unwrap_or_default(),
            has_strict_boundaries: self
                .has_strict_boundaries
                .unwrap_or_else(default_strict_boundaries),
            time_zone: self.time_zone,
            cell_width: self.cell_width.unwrap_or_else(default_cell_width),
            cell_height: self.cell_height.unwrap_or_else(default_cell_height),
        }
    }

    /// Project values win wherever they are set.
    fn merge_over(self, global: RawConfig) -> RawConfig {
        RawConfig {
            first_day_of_week: self.first_day_of_week.or(global.first_day_of_week),
            number_of_rows: self.number_of_rows.or(global.number_of_rows),
            generate_in_dates: self.generate_in_dates.or(global.generate_in_dates),
            generate_out_dates: self.generate_out_dates.or(global.generate_out_dates),
            has_strict_boundaries: self.has_strict_boundaries.or(global.has_strict_boundaries),
            time_zone: self.time_zone.or(global.time_zone),
            cell_width: self.cell_width.or(global.cell_width),
            cell_height: self.cell_height.or(global.cell_height),
        }
    }
}

impl Config {
    /// Configured week start, Sunday if the value is not a weekday name.
    #[must_use]
    pub fn validated_first_day_of_week(&self) -> Weekday {
        self.first_day_of_week.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %self.first_day_of_week, "unknown first_day_of_week, using Sunday");
            Weekday::Sun
        })
    }

    #[must_use]
    pub fn validated_time_zone(&self) -> Option<Tz> {
        let name = self.time_zone.as_deref()?;
        match name.parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(e) => {
                tracing::warn!(time_zone = name, "ignoring time zone: {e}");
                None
            }
        }
    }

    /// Today's date in the configured time zone, or the local one.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        match self.validated_time_zone() {
            Some(tz) => chrono::Utc::now().with_timezone(&tz).date_naive(),
            None => Local::now().date_naive(),
        }
    }

    #[must_use]
    pub fn cell_size(&self) -> Size {
        Size::new(self.cell_width, self.cell_height)
    }

    #[must_use]
    pub fn parameters(&self, start_date: NaiveDate, end_date: NaiveDate) -> ConfigurationParameters {
        ConfigurationParameters::new(start_date, end_date)
            .with_rows(self.number_of_rows)
            .with_first_day_of_week(self.validated_first_day_of_week())
            .with_in_dates(self.generate_in_dates)
            .with_out_dates(self.generate_out_dates)
            .with_strict_boundaries(self.has_strict_boundaries)
    }

    /// Load a single config file; a missing file yields defaults.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        Ok(load_raw_config(path)?.into_config())
    }

    /// Load global config only (no project merge)
    pub fn load_global() -> io::Result<Self> {
        Self::load_from(&get_config_path())
    }

    /// Load config, merging project config over global config if present
    pub fn load_merged() -> io::Result<Self> {
        let global = load_raw_config(&get_config_path())?;

        if let Some(project) = load_project_config() {
            Ok(project.merge_over(global).into_config())
        } else {
            Ok(global.into_config())
        }
    }

    pub fn init() -> io::Result<bool> {
        let path = get_config_path();
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, "")?;
        Ok(true)
    }
}

pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("monthgrid")
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Detects if we're in a git repository and returns the project root path.
#[must_use]
pub fn find_git_root() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;
    loop {
        if current.join(".git").exists() {
            return Some(current);
        }
        if !current.pop() {
            break;
        }
    }
    None
}

fn load_raw_config(path: &Path) -> io::Result<RawConfig> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    } else {
        Ok(RawConfig::default())
    }
}

fn load_project_config() -> Option<RawConfig> {
    let root = find_git_root()?;
    let path = root.join(".monthgrid").join("config.toml");
    if path.exists() {
        let content = fs::read_to_string(&path).ok()?;
        toml::from_str(&content).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(toml_str: &str) -> RawConfig {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.validated_first_day_of_week(), Weekday::Sun);
        assert_eq!(config.number_of_rows, 6);
        assert!(config.has_strict_boundaries);
        assert_eq!(config.generate_out_dates, OutDateCellGeneration::TillEndOfRow);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "first_day_of_week = \"monday\"\nnumber_of_rows = 3\ngenerate_out_dates = \"till_end_of_grid\"\n",
        )
        .unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.validated_first_day_of_week(), Weekday::Mon);
        assert_eq!(config.number_of_rows, 3);
        assert_eq!(config.generate_out_dates, OutDateCellGeneration::TillEndOfGrid);
    }

    #[test]
    fn test_invalid_toml_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "number_of_rows = \"many\"").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_project_overrides_global() {
        let global = raw("first_day_of_week = \"mon\"\nnumber_of_rows = 2\ntime_zone = \"Europe/Oslo\"");
        let project = raw("number_of_rows = 4");
        let merged = project.merge_over(global).into_config();
        assert_eq!(merged.number_of_rows, 4);
        assert_eq!(merged.first_day_of_week, "mon");
        assert_eq!(merged.validated_time_zone(), Some(chrono_tz::Europe::Oslo));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = raw("first_day_of_week = \"someday\"\ntime_zone = \"Mars/Olympus\"").into_config();
        assert_eq!(config.validated_first_day_of_week(), Weekday::Sun);
        assert_eq!(config.validated_time_zone(), None);
    }

    #[test]
    fn test_parameters_carry_settings() {
        let config = raw("first_day_of_week = \"Mon\"\nhas_strict_boundaries = false\nnumber_of_rows = 1").into_config();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let params = config.parameters(start, start);
        assert_eq!(params.first_day_of_week, Weekday::Mon);
        assert_eq!(params.number_of_rows, 1);
        assert!(params.is_continuous());
    }
}
