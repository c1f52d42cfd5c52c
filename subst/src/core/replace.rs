//! Literal, case-sensitive substring replacement.
//!
//! Matches are found left to right and never overlap: after a match the scan
//! resumes at the end of the matched token. There are no pattern semantics.

/// Result of replacing a token in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub content: String,
    pub occurrences: usize,
}

impl Replacement {
    pub fn is_unchanged(&self) -> bool {
        self.occurrences == 0
    }
}

/// Replace every non-overlapping occurrence of `search` in `content`.
///
/// `search` must be non-empty; config validation rejects an empty token
/// before this is reached. An empty token yields the input unchanged.
pub fn replace_literal(content: &str, search: &str, replace: &str) -> Replacement {
    if search.is_empty() {
        return Replacement {
            content: content.to_string(),
            occurrences: 0,
        };
    }

    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    let mut occurrences = 0;
    for (start, matched) in content.match_indices(search) {
        out.push_str(&content[last..start]);
        out.push_str(replace);
        last = start + matched.len();
        occurrences += 1;
    }
    out.push_str(&content[last..]);

    Replacement {
        content: out,
        occurrences,
    }
}

/// Count non-overlapping occurrences of `search`, scanning left to right.
pub fn count_literal(content: &str, search: &str) -> usize {
    if search.is_empty() {
        return 0;
    }
    content.matches(search).count()
}
