//! `subst`: replace a literal token in one file and write it back.
//!
//! With no arguments, swaps `font-['Inter']` for `font-['Outfit']` in
//! `/components/OwnerDashboard.tsx`. Flags and an optional `subst.toml`
//! override the path and tokens.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use subst::error::SubstError;
use subst::exit_codes;
use subst::io::config::{
    ConfigOverrides, DEFAULT_CONFIG_FILE, SubstitutionConfig, WriteMode, apply_overrides,
    load_config,
};
use subst::logging;
use subst::substitute::{SubstituteOptions, SubstituteOutcome, substitute_file};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "subst",
    version,
    about = "Replace every literal occurrence of a token in a file"
)]
struct Cli {
    /// TOML config with `path`, `search`, `replace`, `write_mode` (default: ./subst.toml if present).
    /// A relative `path` inside it is relative to the config file's directory.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// File to rewrite.
    #[arg(short, long, value_name = "FILE")]
    path: Option<PathBuf>,

    /// Literal token to find (case-sensitive, no pattern syntax).
    #[arg(short, long, value_name = "TOKEN")]
    search: Option<String>,

    /// Literal token to substitute.
    #[arg(short, long, value_name = "TOKEN")]
    replace: Option<String>,

    /// How the result is written back.
    #[arg(long, value_enum)]
    write_mode: Option<WriteMode>,

    /// Count matches without writing.
    #[arg(long)]
    dry_run: bool,

    /// Suppress the confirmation line and warnings.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            path: self.path.clone(),
            search: self.search.clone(),
            replace: self.replace.clone(),
            write_mode: self.write_mode,
        }
    }
}

fn main() {
    let cli = parse_cli();
    logging::init(cli.quiet);
    if let Err(err) = run(&cli) {
        eprintln!("{:#}", err);
        let code = err
            .downcast_ref::<SubstError>()
            .map_or(exit_codes::INVALID, exit_codes::for_error);
        std::process::exit(code);
    }
}

/// Parse argv, keeping usage errors on `INVALID` so they stay distinct from `NOT_FOUND`.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        // `--help` / `--version` print to stdout and exit 0.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cfg = resolve_config(cli)?;
    debug!(?cfg, dry_run = cli.dry_run, "resolved config");

    let options = SubstituteOptions {
        dry_run: cli.dry_run,
    };
    let outcome = substitute_file(&cfg, &options)
        .with_context(|| format!("substitute in {}", cfg.path.display()))?;

    if !cli.quiet {
        println!("{}", confirmation(&cfg, &outcome));
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<SubstitutionConfig> {
    let base = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} not found", path.display());
            }
            load_config(path)
        }
        None => load_config(Path::new(DEFAULT_CONFIG_FILE)),
    }
    .context("load config")?;
    Ok(apply_overrides(base, &cli.overrides())?)
}

fn confirmation(cfg: &SubstitutionConfig, outcome: &SubstituteOutcome) -> String {
    if outcome.written {
        format!(
            "All occurrences of {} replaced with {} in {} ({} replaced)",
            cfg.search,
            cfg.replace,
            outcome.path.display(),
            outcome.occurrences
        )
    } else {
        format!(
            "Would replace {} occurrence(s) of {} with {} in {}",
            outcome.occurrences,
            cfg.search,
            cfg.replace,
            outcome.path.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["subst"]);
        assert_eq!(cli.overrides(), ConfigOverrides::default());
        assert!(!cli.dry_run);
        assert!(!cli.quiet);
    }

    #[test]
    fn parse_tokens_and_write_mode() {
        let cli = Cli::parse_from([
            "subst",
            "--path",
            "src/App.tsx",
            "--search",
            "font-['Inter']",
            "--replace",
            "font-['Manrope']",
            "--write-mode",
            "in-place",
            "--dry-run",
        ]);
        let overrides = cli.overrides();
        assert_eq!(overrides.path, Some(PathBuf::from("src/App.tsx")));
        assert_eq!(overrides.search.as_deref(), Some("font-['Inter']"));
        assert_eq!(overrides.replace.as_deref(), Some("font-['Manrope']"));
        assert_eq!(overrides.write_mode, Some(WriteMode::InPlace));
        assert!(cli.dry_run);
    }

    #[test]
    fn confirmation_reports_count() {
        let cfg = SubstitutionConfig::default();
        let outcome = SubstituteOutcome {
            path: cfg.path.clone(),
            occurrences: 3,
            written: true,
        };
        assert_eq!(
            confirmation(&cfg, &outcome),
            "All occurrences of font-['Inter'] replaced with font-['Outfit'] in /components/OwnerDashboard.tsx (3 replaced)"
        );
    }
}
