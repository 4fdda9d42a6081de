use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::Version;
use crate::error::ExtractError;
use crate::parser::parse;

/// Candidate shapes, longest alternative first: rc with hash, hash only, rc only, bare.
static CANDIDATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"v?[0-9]+\.[0-9]+\.[0-9]+(?:-rc-[0-9a-f]{6,}|-[0-9a-f]{6,}|-rc)?").unwrap()
});

/// A version found inside free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<'t> {
    /// The matched slice, exactly as it appears in the text
    pub text: &'t str,
    /// Byte range of `text` within the input
    pub span: Range<usize>,
    pub version: Version,
}

/// Find the first well-formed version in `text`, scanning left to right.
///
/// Candidates that match textually but do not parse (for example numbers too large for
/// `u64`) are skipped. A match is not required to end at a word boundary: `1.2.3-rcx`
/// yields `1.2.3-rc`, and a hash run into trailing letters is cut where the hex ends.
///
/// # Examples
/// ```
/// use build_version::extractor::extract;
///
/// let found = extract("Release v1.2.3-rc is ready").unwrap();
/// assert_eq!(found.text, "v1.2.3-rc");
/// ```
pub fn extract(text: &str) -> Result<Extraction<'_>, ExtractError> {
    CANDIDATE_RE
        .find_iter(text)
        .find_map(|candidate| {
            parse(candidate.as_str()).ok().map(|version| Extraction {
                text: candidate.as_str(),
                span: candidate.range(),
                version,
            })
        })
        .ok_or(ExtractError::NotFound)
}

/// Every well-formed version in `text`, in order of appearance.
pub fn extract_all(text: &str) -> Vec<Extraction<'_>> {
    CANDIDATE_RE
        .find_iter(text)
        .filter_map(|candidate| {
            parse(candidate.as_str()).ok().map(|version| Extraction {
                text: candidate.as_str(),
                span: candidate.range(),
                version,
            })
        })
        .collect()
}
