//! Style tag recognition in file names.
//!
//! Two tag forms are recognized, each at most once per name:
//!
//! - bracketed: `Track [J-Pop>J-Rock] final.wav`
//! - keyword: `bass style=Kawaii>Bass v2.wav` (also `style:`, any case)
//!
//! Segments are separated by `>` and become a slash-joined candidate path.
//! A keyword tag may use several words in every segment but the last; the last
//! segment ends at the first word break, so `style=Drum and Bass>Liquid v2.wav`
//! yields `DrumandBass/Liquid`.

use crate::taxonomy::segment::{normalize_segment, validate_segment};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static BRACKET_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(?P<path>[^\]]+)\]").expect("valid bracket tag regex"));
static KEYWORD_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)style\s*[:=]\s*(?P<path>(?:[\w\-][\w\-\s]*?\s*>\s*)*[\w\-]+)")
        .expect("valid keyword tag regex")
});

/// Candidate taxonomy paths embedded in `filename`, bracketed form first.
pub fn extract_candidate_paths(filename: &str) -> Vec<String> {
    let mut results = Vec::new();
    for pattern in [&*BRACKET_TAG_RE, &*KEYWORD_TAG_RE] {
        let Some(captures) = pattern.captures(filename) else {
            continue;
        };
        let raw = &captures["path"];
        if let Some(path) = tag_to_path(raw) {
            results.push(path);
        }
    }
    results
}

fn tag_to_path(raw: &str) -> Option<String> {
    let parts: Vec<String> = raw
        .split('>')
        .map(|part| {
            let compact: String = part.chars().filter(|c| !c.is_whitespace()).collect();
            normalize_segment(&compact)
        })
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        return None;
    }
    if let Some(bad) = parts.iter().find(|p| validate_segment(p).is_err()) {
        debug!(tag = raw, segment = %bad, "Ignoring tag with unusable segment");
        return None;
    }
    Some(parts.join("/"))
}
