//! Schedule configuration: slot grid and holiday calendar.
//!
//! Both are deployment configuration, not derived at runtime. The grid is
//! the same for every business day; the holiday list is a set of exact
//! calendar dates, year-specific, that the deploying team must keep
//! current across year boundaries.

use crate::calendar::CalendarPolicy;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Default morning grid: five labels, two concurrent hearings each.
const DEFAULT_TIME_SLOTS: [&str; 5] = ["08:00", "09:00", "10:00", "11:00", "12:00"];
const DEFAULT_CAPACITY_PER_SLOT: usize = 2;

/// Argentine national holidays, 2025.
const DEFAULT_HOLIDAYS: [(i32, u32, u32); 16] = [
    (2025, 1, 1),   // Año Nuevo
    (2025, 3, 3),   // Carnaval
    (2025, 3, 4),   // Carnaval
    (2025, 3, 24),  // Memoria
    (2025, 4, 2),   // Malvinas
    (2025, 4, 18),  // Viernes Santo
    (2025, 5, 1),   // Trabajador
    (2025, 5, 25),  // Revolución de Mayo
    (2025, 6, 17),  // Güemes
    (2025, 6, 20),  // Bandera
    (2025, 7, 9),   // Independencia
    (2025, 8, 17),  // San Martín
    (2025, 10, 12), // Diversidad
    (2025, 11, 20), // Soberanía
    (2025, 12, 8),  // Inmaculada
    (2025, 12, 25), // Navidad
];

/// Fixed per-day slot grid plus the holiday exclusion list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Ordered time labels; filled in this order.
    pub time_slots: Vec<String>,
    /// Concurrent hearings per time label, shared by every label.
    pub capacity_per_slot: usize,
    /// Exact dates excluded from hearings (quoted `"YYYY-MM-DD"` in TOML).
    pub holidays: Vec<NaiveDate>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            time_slots: DEFAULT_TIME_SLOTS.iter().map(|s| s.to_string()).collect(),
            capacity_per_slot: DEFAULT_CAPACITY_PER_SLOT,
            holidays: DEFAULT_HOLIDAYS
                .iter()
                .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
                .collect(),
        }
    }
}

impl ScheduleConfig {
    /// Parse and validate a TOML configuration document.
    ///
    /// Missing keys fall back to the defaults, so a partial file that only
    /// replaces the holiday list is valid.
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        let config: ScheduleConfig =
            toml::from_str(contents).map_err(|e| format!("Invalid schedule config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read schedule config {}: {}", path.display(), e))?;
        Self::from_toml_str(&contents)
    }

    /// Resolve the configuration from the environment.
    ///
    /// # Environment Variables
    /// - `SCHEDULE_CONFIG` (optional): path to a TOML file; when unset the
    ///   compiled-in defaults are used.
    pub fn from_env() -> Result<Self, String> {
        match env::var("SCHEDULE_CONFIG") {
            Ok(path) => Self::from_file(path),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.time_slots.is_empty() {
            return Err("time_slots must not be empty".to_string());
        }
        if self.capacity_per_slot == 0 {
            return Err("capacity_per_slot must be at least 1".to_string());
        }
        Ok(())
    }

    /// Build the calendar policy for this configuration's holiday list.
    pub fn policy(&self) -> CalendarPolicy {
        CalendarPolicy::new(self.holidays.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let config = ScheduleConfig::default();
        assert_eq!(config.time_slots.len(), 5);
        assert_eq!(config.time_slots[0], "08:00");
        assert_eq!(config.capacity_per_slot, 2);
        assert_eq!(config.holidays.len(), 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ScheduleConfig::from_toml_str(r#"holidays = ["2026-01-01"]"#).unwrap();
        assert_eq!(config.time_slots.len(), 5);
        assert_eq!(config.capacity_per_slot, 2);
        assert_eq!(
            config.holidays,
            vec![NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()]
        );
    }

    #[test]
    fn test_full_toml_document() {
        let contents = r#"
            time_slots = ["10:00", "11:00"]
            capacity_per_slot = 3
            holidays = ["2026-01-01", "2026-07-09"]
        "#;
        let config = ScheduleConfig::from_toml_str(contents).unwrap();
        assert_eq!(config.time_slots, vec!["10:00", "11:00"]);
        assert_eq!(config.capacity_per_slot, 3);
        assert_eq!(config.holidays.len(), 2);
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert!(ScheduleConfig::from_toml_str("time_slots = []").is_err());
        assert!(ScheduleConfig::from_toml_str("capacity_per_slot = 0").is_err());
    }

    #[test]
    fn test_rejects_malformed_holiday() {
        assert!(ScheduleConfig::from_toml_str(r#"holidays = ["01/01/2026"]"#).is_err());
    }

    #[test]
    fn test_policy_excludes_configured_holiday() {
        let config = ScheduleConfig::default();
        let policy = config.policy();
        // 2025-07-09 is a Wednesday but configured as a holiday
        assert!(!policy.is_business_day(NaiveDate::from_ymd_opt(2025, 7, 9).unwrap()));
    }
}
