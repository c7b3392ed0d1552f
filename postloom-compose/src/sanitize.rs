//! Text cleanup applied at every prompt and output boundary.
//!
//! Search snippets arrive littered with citation noise like "(Reuters)" and
//! models sneak parenthetical asides into prose. Anything headed into a
//! prompt, the screen, or a published post goes through [`sanitize`] so none
//! of that survives.

use regex::Regex;
use std::sync::LazyLock;

/// Shortest run between a `(` and the next `)`. Nested parentheses collapse
/// from the inside out only for the innermost pair; the stray-character pass
/// below picks up whatever is left.
static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("parenthetical pattern"));

/// Remove parenthetical spans and normalise whitespace.
///
/// Stray unmatched `(`/`)` are dropped before whitespace collapses so the
/// result is stable under repeated application.
pub fn sanitize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let stripped = PARENTHETICAL.replace_all(text, "");
    let no_strays = stripped.replace(['(', ')'], "");
    no_strays.split_whitespace().collect::<Vec<_>>().join(" ")
}
