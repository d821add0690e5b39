//! The transform pass applied to every matched file.
//!
//! Three steps, always in this order:
//!
//! 1. [`strip_comments`] - drop block (`/* ... */`) and line (`// ...`) comments
//! 2. [`collapse_whitespace`] - every whitespace run becomes a single space
//! 3. trim both ends
//!
//! Matching is textual. A `//` inside a string literal or a URL
//! (`"http://cdn.example.com"`) is treated as a line comment and removed
//! along with the rest of its line. Downstream consumers rely on this exact
//! output, so it is kept as is.

use std::sync::LazyLock;

use regex::Regex;

/// Block comments are non-greedy and an unterminated `/*` runs to the end of
/// input. Line comments stop before any JavaScript line terminator.
static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s:/\*.*?(?:\*/|\z))|//[^\n\r\x{2028}\x{2029}]*").unwrap()
});

/// JavaScript's `\s`: Unicode White_Space minus U+0085, plus U+FEFF.
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[[\s\x{FEFF}]&&[^\x{85}]]+").unwrap());

/// Run the full transform pass over one file's content.
///
/// ```
/// use assetopt_core::domain::optimize_source;
///
/// assert_eq!(optimize_source("// hi\nconst x = 1;\n"), "const x = 1;");
/// ```
pub fn optimize_source(content: &str) -> String {
    let stripped = strip_comments(content);
    let collapsed = collapse_whitespace(&stripped);
    collapsed.trim_matches(is_js_whitespace).to_owned()
}

/// Remove every block and line comment in one global pass.
pub fn strip_comments(content: &str) -> String {
    COMMENT_RE.replace_all(content, "").into_owned()
}

/// Replace each maximal whitespace run with a single space.
pub fn collapse_whitespace(content: &str) -> String {
    WHITESPACE_RE.replace_all(content, " ").into_owned()
}

fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── full pass ─────────────────────────────────────────────────────────

    #[test]
    fn leading_line_comment_is_removed() {
        assert_eq!(optimize_source("// hi\nconst x = 1;\n"), "const x = 1;");
    }

    #[test]
    fn leading_block_comment_is_removed() {
        assert_eq!(
            optimize_source("/* block */ .a { color: red; }  "),
            ".a { color: red; }"
        );
    }

    #[test]
    fn multiline_source_collapses_to_one_line() {
        let input = "function add(a, b) {\n\t// sum\n\treturn a + b; /* done */\n}\n";
        assert_eq!(optimize_source(input), "function add(a, b) { return a + b; }");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(optimize_source(""), "");
        assert_eq!(optimize_source(" \n\t "), "");
        assert_eq!(optimize_source("/* only a comment */"), "");
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let inputs = [
            "// hi\nconst x = 1;\n",
            "/* a */ body {\n  margin: 0;\n}\n\n/* b */ p { color: #fff; }",
            "let a = 1; // one\nlet b = 2; /* two\n spans lines */ let c = 3;",
            "\u{feff}var x = 1;\r\n",
        ];
        for input in inputs {
            let once = optimize_source(input);
            assert_eq!(optimize_source(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn output_has_no_runs_tabs_or_newlines() {
        let input = "a\t\tb\n\n\nc   d\r\n  e\u{a0}\u{a0}f";
        let out = optimize_source(input);
        assert!(!out.contains("  "));
        assert!(!out.contains('\t'));
        assert!(!out.contains('\n'));
        assert!(!out.contains('\r'));
        assert_eq!(out, "a b c d e f");
    }

    #[test]
    fn output_is_trimmed() {
        let out = optimize_source("\n\n   x   \n\n");
        assert_eq!(out, "x");
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert_eq!(optimize_source("\u{feff}a"), "a");
    }

    #[test]
    fn next_line_control_is_not_whitespace() {
        // U+0085 is outside the JavaScript whitespace class.
        assert_eq!(optimize_source("a\u{85}b"), "a\u{85}b");
    }

    // ── strip_comments ────────────────────────────────────────────────────

    #[test]
    fn block_comment_is_non_greedy() {
        assert_eq!(strip_comments("a /* x */ b /* y */ c"), "a  b  c");
    }

    #[test]
    fn block_comment_spans_lines() {
        assert_eq!(strip_comments("a/*\n * doc\n */b"), "ab");
    }

    #[test]
    fn unterminated_block_comment_runs_to_end() {
        assert_eq!(strip_comments("keep /* lost\nforever"), "keep ");
    }

    #[test]
    fn line_comment_keeps_its_newline() {
        assert_eq!(strip_comments("a // c\nb"), "a \nb");
        assert_eq!(strip_comments("a // c\r\nb"), "a \r\nb");
    }

    #[test]
    fn line_comment_at_end_of_input() {
        assert_eq!(strip_comments("x = 1; // trailing"), "x = 1; ");
    }

    #[test]
    fn url_inside_string_is_treated_as_comment() {
        assert_eq!(
            optimize_source("const u = \"http://cdn.example.com/a.js\";\nrun(u);"),
            "const u = \"http: run(u);"
        );
    }

    #[test]
    fn comment_markers_inside_strings_are_not_protected() {
        assert_eq!(strip_comments("s = '/* x */';"), "s = '';");
    }

    #[test]
    fn line_comment_wins_over_block_at_same_position() {
        // `//*` starts a line comment, not a block comment.
        assert_eq!(strip_comments("a //* b */ c\nd"), "a \nd");
    }

    // ── collapse_whitespace ───────────────────────────────────────────────

    #[test]
    fn collapse_keeps_single_spaces() {
        assert_eq!(collapse_whitespace("a b"), "a b");
        assert_eq!(collapse_whitespace(" a "), " a ");
    }

    #[test]
    fn collapse_merges_mixed_runs() {
        assert_eq!(collapse_whitespace("a \t\n\r\u{2028} b"), "a b");
    }
}
