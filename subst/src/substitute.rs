//! Orchestration for a single substitution run.
//!
//! A run reads the target once, transforms it in memory, and writes it back
//! once. A read failure leaves the file untouched; nothing is retried.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::core::replace::replace_literal;
use crate::error::Result;
use crate::io::config::SubstitutionConfig;
use crate::io::target::{read_target, write_target};

/// Per-invocation switches that are not part of the persisted config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstituteOptions {
    /// Report what would change without writing.
    pub dry_run: bool,
}

/// Outcome of `substitute_file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstituteOutcome {
    pub path: PathBuf,
    pub occurrences: usize,
    /// False only for dry runs.
    pub written: bool,
}

/// Replace every occurrence of `cfg.search` with `cfg.replace` in `cfg.path`.
///
/// The file is rewritten even when no occurrence is found; the content is
/// then byte-identical to what was read.
pub fn substitute_file(
    cfg: &SubstitutionConfig,
    options: &SubstituteOptions,
) -> Result<SubstituteOutcome> {
    cfg.validate()?;
    if cfg.replacement_contains_search() {
        warn!(
            search = %cfg.search,
            replace = %cfg.replace,
            "replacement contains the search token; repeated runs will keep matching"
        );
    }

    let original = read_target(&cfg.path)?;
    let replaced = replace_literal(&original, &cfg.search, &cfg.replace);
    debug!(
        path = %cfg.path.display(),
        occurrences = replaced.occurrences,
        unchanged = replaced.is_unchanged(),
        "substitution computed"
    );

    if options.dry_run {
        return Ok(SubstituteOutcome {
            path: cfg.path.clone(),
            occurrences: replaced.occurrences,
            written: false,
        });
    }

    write_target(&cfg.path, &replaced.content, cfg.write_mode)?;
    info!(
        path = %cfg.path.display(),
        occurrences = replaced.occurrences,
        "target rewritten"
    );

    Ok(SubstituteOutcome {
        path: cfg.path.clone(),
        occurrences: replaced.occurrences,
        written: true,
    })
}
