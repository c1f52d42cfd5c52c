//! Substitution configuration, optionally stored as TOML (`subst.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SubstError};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "subst.toml";

/// How the rewritten content reaches the target path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Write a sibling temp file, then rename it over the target.
    #[default]
    Atomic,
    /// Truncate the target and write into it directly.
    InPlace,
}

/// Substitution configuration (TOML).
///
/// Missing fields fall back to the defaults: the dashboard component and the
/// Inter to Outfit font-class swap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SubstitutionConfig {
    /// File to rewrite.
    pub path: PathBuf,

    /// Literal token to find. Must be non-empty.
    pub search: String,

    /// Literal token substituted for each match.
    pub replace: String,

    pub write_mode: WriteMode,
}

impl Default for SubstitutionConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("/components/OwnerDashboard.tsx"),
            search: "font-['Inter']".to_string(),
            replace: "font-['Outfit']".to_string(),
            write_mode: WriteMode::Atomic,
        }
    }
}

impl SubstitutionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(SubstError::InvalidConfig("path must be non-empty".to_string()));
        }
        if self.search.is_empty() {
            return Err(SubstError::InvalidConfig(
                "search must be non-empty".to_string(),
            ));
        }
        Ok(())
    }

    /// True when a second run could find new matches introduced by the first.
    pub fn replacement_contains_search(&self) -> bool {
        !self.search.is_empty() && self.replace.contains(&self.search)
    }
}

/// Per-invocation overrides (CLI flags). `None` keeps the underlying value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub path: Option<PathBuf>,
    pub search: Option<String>,
    pub replace: Option<String>,
    pub write_mode: Option<WriteMode>,
}

/// Apply overrides on top of a base config and validate the result.
pub fn apply_overrides(
    mut base: SubstitutionConfig,
    overrides: &ConfigOverrides,
) -> Result<SubstitutionConfig> {
    if let Some(path) = &overrides.path {
        base.path = path.clone();
    }
    if let Some(search) = &overrides.search {
        base.search = search.clone();
    }
    if let Some(replace) = &overrides.replace {
        base.replace = replace.clone();
    }
    if let Some(write_mode) = overrides.write_mode {
        base.write_mode = write_mode;
    }
    base.validate()?;
    Ok(base)
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SubstitutionConfig::default()`. A relative
/// `path` in the file is taken relative to the directory holding the file.
pub fn load_config(path: &Path) -> Result<SubstitutionConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config file missing, using defaults");
        let cfg = SubstitutionConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).map_err(|err| SubstError::from_io(path, err))?;
    let mut cfg: SubstitutionConfig = toml::from_str(&contents).map_err(|err| {
        SubstError::InvalidConfig(format!("parse {}: {}", path.display(), err.message()))
    })?;
    cfg.validate()?;
    if cfg.path.is_relative() {
        if let Some(dir) = path.parent() {
            cfg.path = dir.join(&cfg.path);
        }
    }
    debug!(path = %path.display(), target = %cfg.path.display(), "config loaded");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, SubstitutionConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("subst.toml");
        fs::write(&path, "path = \"src/App.tsx\"\nwrite_mode = \"in_place\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.path, temp.path().join("src/App.tsx"));
        assert_eq!(cfg.search, "font-['Inter']");
        assert_eq!(cfg.replace, "font-['Outfit']");
        assert_eq!(cfg.write_mode, WriteMode::InPlace);
    }

    #[test]
    fn relative_target_resolves_against_config_directory() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config_dir = temp.path().join("web").join("config");
        fs::create_dir_all(&config_dir).expect("mkdir");
        let path = config_dir.join("subst.toml");
        fs::write(&path, "path = \"../src/Header.tsx\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.path, config_dir.join("../src/Header.tsx"));
    }

    #[test]
    fn absolute_target_is_kept_verbatim() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("subst.toml");
        fs::write(&path, "path = \"/srv/app/index.tsx\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.path, PathBuf::from("/srv/app/index.tsx"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("subst.toml");
        fs::write(&path, "paths = [\"a\", \"b\"]\n").expect("write");

        let err = load_config(&path).expect_err("unknown key");
        assert!(matches!(err, SubstError::InvalidConfig(_)));
    }

    #[test]
    fn empty_search_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("subst.toml");
        fs::write(&path, "search = \"\"\n").expect("write");

        let err = load_config(&path).expect_err("empty search");
        assert!(err.to_string().contains("search must be non-empty"));
    }

    #[test]
    fn overrides_win_over_base() {
        let overrides = ConfigOverrides {
            path: Some(PathBuf::from("index.html")),
            search: Some("Inter".to_string()),
            replace: None,
            write_mode: Some(WriteMode::InPlace),
        };
        let merged = apply_overrides(SubstitutionConfig::default(), &overrides).expect("merge");
        assert_eq!(merged.path, PathBuf::from("index.html"));
        assert_eq!(merged.search, "Inter");
        assert_eq!(merged.replace, "font-['Outfit']");
        assert_eq!(merged.write_mode, WriteMode::InPlace);
    }

    #[test]
    fn empty_overrides_preserve_base() {
        let base = SubstitutionConfig::default();
        let merged = apply_overrides(base.clone(), &ConfigOverrides::default()).expect("merge");
        assert_eq!(merged, base);
    }

    #[test]
    fn detects_replacement_containing_search() {
        let cfg = SubstitutionConfig {
            search: "Inter".to_string(),
            replace: "Inter Tight".to_string(),
            ..SubstitutionConfig::default()
        };
        assert!(cfg.replacement_contains_search());
        assert!(!SubstitutionConfig::default().replacement_contains_search());
    }
}
