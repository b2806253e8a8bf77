use std::path::PathBuf;

use crate::models::parse_calendar_date;

/// Application-level constants
pub const APP_NAME: &str = "ClinicRegistry";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable that points at a seed payload on disk.
pub const SEED_PATH_ENV: &str = "CLINIC_SEED_PATH";

/// Inline entries per calendar cell before the "+N more" marker.
pub const DEFAULT_INLINE_LIMIT: usize = 2;

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "info,clinic_registry=debug"
}

/// Get the application data directory (~/ClinicRegistry/).
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Seed payload location: `$CLINIC_SEED_PATH` if set, else `<app_data_dir>/seed.json`.
pub fn seed_path() -> PathBuf {
    resolve_seed_path(std::env::var_os(SEED_PATH_ENV).map(PathBuf::from))
}

fn resolve_seed_path(override_path: Option<PathBuf>) -> PathBuf {
    match override_path {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => app_data_dir().join("seed.json"),
    }
}

/// How appointment dates are compared against a requested date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateMatching {
    /// Byte-for-byte string equality: "2023-10-3" and "2023-10-03" differ.
    #[default]
    Exact,
    /// Both sides parsed as calendar dates; unparseable dates never match.
    Calendar,
}

impl DateMatching {
    pub fn matches(&self, stored: &str, requested: &str) -> bool {
        match self {
            Self::Exact => stored == requested,
            Self::Calendar => match (parse_calendar_date(stored), parse_calendar_date(requested)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

/// Knobs for the projection layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryConfig {
    pub date_matching: DateMatching,
    pub inline_limit: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            date_matching: DateMatching::Exact,
            inline_limit: DEFAULT_INLINE_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_ends_with_app_name() {
        assert!(app_data_dir().ends_with(APP_NAME));
    }

    #[test]
    fn seed_path_defaults_under_app_data() {
        let path = resolve_seed_path(None);
        assert!(path.starts_with(app_data_dir()));
        assert!(path.ends_with("seed.json"));
    }

    #[test]
    fn seed_path_override_wins() {
        let path = resolve_seed_path(Some(PathBuf::from("/tmp/custom-seed.json")));
        assert_eq!(path, PathBuf::from("/tmp/custom-seed.json"));
    }

    #[test]
    fn empty_override_is_ignored() {
        let path = resolve_seed_path(Some(PathBuf::new()));
        assert!(path.ends_with("seed.json"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_config_keeps_exact_dates_and_two_inline_entries() {
        let config = QueryConfig::default();
        assert_eq!(config.date_matching, DateMatching::Exact);
        assert_eq!(config.inline_limit, 2);
    }

    #[test]
    fn exact_matching_distinguishes_padding() {
        assert!(DateMatching::Exact.matches("2023-10-03", "2023-10-03"));
        assert!(!DateMatching::Exact.matches("2023-10-03", "2023-10-3"));
    }

    #[test]
    fn calendar_matching_ignores_padding() {
        assert!(DateMatching::Calendar.matches("2023-10-03", "2023-10-3"));
        assert!(!DateMatching::Calendar.matches("2023-10-03", "2023-10-04"));
        assert!(!DateMatching::Calendar.matches("garbage", "garbage"));
    }
}
