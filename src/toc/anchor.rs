//! Heading text to anchor slug
//!
//! Mirrors GitHub's fragment ids for the headings this tool sees, including
//! the `&` -> `--` quirk: "Q&A Basics" becomes `q--a-basics` and "A & B"
//! becomes `a--b`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of anything other than lowercase letters, digits and '&'
static NON_SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9&]+").expect("Invalid NON_SLUG_RE regex"));

/// Runs of the placeholder character
static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_+").expect("Invalid PLACEHOLDER_RE regex"));

/// One leading or one trailing hyphen
static EDGE_HYPHEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^-|-$)").expect("Invalid EDGE_HYPHEN_RE regex"));

const PLACEHOLDER: &str = "_";

/// Derive the anchor for a heading
pub fn anchor(heading: &str) -> String {
    let lower = heading.to_lowercase();
    let replaced = NON_SLUG_RE.replace_all(&lower, PLACEHOLDER);
    let ampersands = replaced.replace('&', "--");
    let hyphenated = PLACEHOLDER_RE.replace_all(&ampersands, "-");
    let trimmed = EDGE_HYPHEN_RE.replace_all(&hyphenated, "");
    // "a & b" leaves "a----b" behind at this point
    trimmed.replace("----", "--")
}
