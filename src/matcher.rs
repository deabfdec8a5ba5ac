use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered declaration patterns, tested against whitespace-trimmed lines.
///
/// Recognized shapes, first match wins:
/// 1. default-exported function
/// 2. exported (optionally async) function
/// 3. exported constant assigned an arrow-style function
/// 4. local constant assigned an arrow-style function
/// 5. named function declaration
static DECLARATION_PATTERNS: Lazy<[Regex; 5]> = Lazy::new(|| {
    [
        Regex::new(r"^export\s+default\s+function").unwrap(),
        Regex::new(r"^export\s+(async\s+)?function").unwrap(),
        Regex::new(r"^export\s+const\s+\w+\s*=\s*\(").unwrap(),
        Regex::new(r"^const\s+\w+\s*=\s*\(").unwrap(),
        Regex::new(r"^function\s+\w+\s*\(").unwrap(),
    ]
});

/// Tests whether a whitespace-trimmed line opens a function declaration.
///
/// # Parameters
///
/// * `trimmed` — A line with surrounding whitespace already removed.
///
/// # Returns
///
/// * `true` if any declaration pattern matches at the start of the line.
pub fn is_declaration(trimmed: &str) -> bool {
    DECLARATION_PATTERNS.iter().any(|p| p.is_match(trimmed))
}

/// Tests whether a trimmed line is itself a comment-block opener carrying
/// the attribution marker, e.g. `/** @author Jane Doe */`.
///
/// Such lines are passed through untouched so a hand-written one-line
/// annotation never gains a second block.
pub fn is_annotation_opener(trimmed: &str) -> bool {
    trimmed.starts_with("/**") && trimmed.contains("@author")
}

/// Tests whether the line at `index` already has an attribution block
/// directly above it.
///
/// Walks upward from the closing `*/` through the comment body until the
/// `/**` opener, looking for the `@author` marker anywhere in the block.
/// One-line blocks (`/** @author ... */`) are handled without walking.
/// Repeated runs stay idempotent because of this check.
///
/// # Parameters
///
/// * `lines` — The file's original lines.
/// * `index` — Index of the matched declaration line.
///
/// # Returns
///
/// * `true` if an attribution block ends on the line directly above.
pub fn has_annotation_above(lines: &[String], index: usize) -> bool {
    if index == 0 {
        return false;
    }

    let mut i = index - 1;
    let closing = lines[i].trim();
    if !closing.ends_with("*/") {
        return false;
    }
    if closing.starts_with("/**") {
        return closing.contains("@author");
    }

    let mut saw_author = false;
    while i > 0 {
        i -= 1;
        let trimmed = lines[i].trim();

        if trimmed.contains("@author") {
            saw_author = true;
        }
        if trimmed.starts_with("/**") {
            return saw_author;
        }
        if !trimmed.starts_with('*') {
            // Left the comment block without finding an opener.
            return false;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::{has_annotation_above, is_annotation_opener, is_declaration};

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matches_default_exported_function() {
        assert!(is_declaration("export default function App() {"));
    }

    #[test]
    fn matches_exported_function() {
        assert!(is_declaration("export function useThing() {"));
    }

    #[test]
    fn matches_exported_async_function() {
        assert!(is_declaration("export async function fetchData() {"));
    }

    #[test]
    fn matches_exported_const_arrow() {
        assert!(is_declaration("export const Header = () => {"));
    }

    #[test]
    fn matches_local_const_arrow() {
        assert!(is_declaration("const handleClick = (event) => {"));
    }

    #[test]
    fn matches_named_function() {
        assert!(is_declaration("function render(props) {"));
    }

    #[test]
    fn ignores_non_declarations() {
        assert!(!is_declaration("import React from \"react\";"));
        assert!(!is_declaration("export class Store {"));
        assert!(!is_declaration("const MAX_RETRIES = 3;"));
        assert!(!is_declaration("return function () {};"));
    }

    #[test]
    fn annotation_opener_requires_marker() {
        assert!(is_annotation_opener("/** @author Jane Doe */"));
        assert!(!is_annotation_opener("/**"));
        assert!(!is_annotation_opener("// @author Jane Doe"));
    }

    #[test]
    fn detects_three_line_block_above() {
        let file = lines(&["/**", " * @author Jane Doe", " */", "function foo() {}"]);
        assert!(has_annotation_above(&file, 3));
    }

    #[test]
    fn detects_one_line_block_above() {
        let file = lines(&["/** @author Jane Doe */", "function foo() {}"]);
        assert!(has_annotation_above(&file, 1));
    }

    #[test]
    fn plain_comment_block_is_not_an_annotation() {
        let file = lines(&["/**", " * Renders the page.", " */", "function foo() {}"]);
        assert!(!has_annotation_above(&file, 3));
    }

    #[test]
    fn first_line_has_nothing_above() {
        let file = lines(&["function foo() {}"]);
        assert!(!has_annotation_above(&file, 0));
    }

    #[test]
    fn ordinary_code_above_is_not_an_annotation() {
        let file = lines(&["const x = 1;", "function foo() {}"]);
        assert!(!has_annotation_above(&file, 1));
    }
}
