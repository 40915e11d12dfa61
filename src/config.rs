use crate::catalog;
use crate::scrapers::SearchParams;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub search: SearchParams,
    pub output_dir: PathBuf,
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchParams::default(),
            output_dir: PathBuf::from("storage/datasets/default"),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_delay: Duration::from_secs(2),
        }
    }
}

impl Config {
    /// Load from the process environment, after reading `.env` if present
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    ///
    /// `WM_POSTAL_AREAS` is a comma separated list of area codes or names
    /// (English or Japanese), resolved against the catalog.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(prefecture) = lookup("WM_PREFECTURE") {
            let prefecture = prefecture.trim();
            if catalog::find_prefecture(prefecture).is_none() {
                bail!("Unknown prefecture: {}", prefecture);
            }
            config.search.prefecture = prefecture.to_string();
        }

        if let Some(areas) = lookup("WM_POSTAL_AREAS") {
            config.search.postal_codes = resolve_postal_areas(&config.search.prefecture, &areas)?;
        } else if config.search.prefecture != SearchParams::default().prefecture {
            bail!(
                "WM_POSTAL_AREAS must be set when searching outside {}",
                SearchParams::default().prefecture
            );
        }

        if let Some(dir) = lookup("WM_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }

        if let Some(secs) = lookup("WM_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("Invalid WM_TIMEOUT_SECS: {}", secs))?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(retries) = lookup("WM_MAX_RETRIES") {
            config.max_retries = retries
                .trim()
                .parse()
                .with_context(|| format!("Invalid WM_MAX_RETRIES: {}", retries))?;
        }

        if let Some(secs) = lookup("WM_RETRY_DELAY_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("Invalid WM_RETRY_DELAY_SECS: {}", secs))?;
            config.retry_delay = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

fn resolve_postal_areas(prefecture: &str, list: &str) -> Result<Vec<String>> {
    let mut codes = Vec::new();

    for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let area = catalog::find_postal_area_by_code(entry)
            .or_else(|| catalog::find_postal_area_by_name(entry))
            .with_context(|| {
                let known: Vec<&str> = catalog::postal_areas_in(prefecture)
                    .map(|area| area.name.en)
                    .collect();
                format!(
                    "Unknown postal area: {} (known in {}: {})",
                    entry,
                    prefecture,
                    known.join(", ")
                )
            })?;

        if area.prefecture != prefecture {
            bail!(
                "Postal area {} ({}) is in {}, not {}",
                area.name.en,
                area.code,
                area.prefecture,
                prefecture
            );
        }
        codes.push(area.code.to_string());
    }

    if codes.is_empty() {
        bail!("WM_POSTAL_AREAS is empty");
    }

    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_to_shibuya() {
        let config = load(&[]).unwrap();
        assert_eq!(config.search.prefecture, "tokyo");
        assert_eq!(config.search.postal_codes, vec!["13113"]);
        assert_eq!(config.output_dir, PathBuf::from("storage/datasets/default"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay, Duration::from_secs(2));
    }

    #[test]
    fn resolves_names_and_codes() {
        let config = load(&[
            ("WM_PREFECTURE", "saitama"),
            ("WM_POSTAL_AREAS", "Ageo City, 11227 ,"),
        ])
        .unwrap();
        assert_eq!(config.search.prefecture, "saitama");
        assert_eq!(config.search.postal_codes, vec!["11219", "11227"]);

        let config = load(&[("WM_POSTAL_AREAS", "渋谷区")]).unwrap();
        assert_eq!(config.search.postal_codes, vec!["13113"]);
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(load(&[("WM_PREFECTURE", "atlantis")]).is_err());
        assert!(load(&[("WM_POSTAL_AREAS", "Nowhere Ward")]).is_err());
        assert!(load(&[("WM_POSTAL_AREAS", " , ")]).is_err());
        assert!(load(&[("WM_TIMEOUT_SECS", "soon")]).is_err());
        assert!(load(&[("WM_MAX_RETRIES", "-1")]).is_err());
    }

    #[test]
    fn rejects_area_from_other_prefecture() {
        let err = load(&[("WM_POSTAL_AREAS", "Ageo City")]).unwrap_err();
        assert!(err.to_string().contains("saitama"));
    }

    #[test]
    fn other_prefecture_needs_areas() {
        assert!(load(&[("WM_PREFECTURE", "osaka")]).is_err());
    }

    #[test]
    fn overrides_runtime_settings() {
        let config = load(&[
            ("WM_OUTPUT_DIR", "out"),
            ("WM_TIMEOUT_SECS", "5"),
            ("WM_MAX_RETRIES", "0"),
            ("WM_RETRY_DELAY_SECS", "1"),
        ])
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.retry_delay, Duration::from_secs(1));
    }
}
