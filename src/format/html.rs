//! HTML fragment to plain text conversion.
//!
//! This is deliberately not a DOM transform. The input is rewritten by a
//! fixed, ordered list of stages, most of them regular-expression rules.
//! Later stages rely on earlier ones having run (list items are converted
//! before their `<ul>` wrappers are dropped, anchors are unwrapped before the
//! catch-all tag strip), so the order in [`PIPELINE`] is significant.
//!
//! Malformed or unbalanced markup never fails: anything an earlier rule does
//! not match is removed by the `strip_tags` rule.

use once_cell::sync::Lazy;
use regex::Regex;

/// How a matched span is rewritten.
#[derive(Debug, Clone, Copy)]
pub enum Replacement {
    /// Drop the match.
    Remove,
    /// Expand a `regex` replacement template (`${1}` for the first group).
    Template(&'static str),
}

/// A single named text rewrite.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: Replacement) -> Self {
        let pattern = Regex::new(pattern).expect("valid html rewrite regex");
        Self {
            name,
            pattern,
            replacement,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self.replacement {
            Replacement::Remove => self.pattern.replace_all(text, "").into_owned(),
            Replacement::Template(template) => {
                self.pattern.replace_all(text, template).into_owned()
            }
        }
    }
}

/// One step of the conversion pipeline.
#[derive(Debug)]
pub enum Stage {
    Rewrite(Rule),
    DecodeEntities,
    TrimLines,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Rewrite(rule) => rule.name,
            Stage::DecodeEntities => "decode_entities",
            Stage::TrimLines => "trim_lines",
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            Stage::Rewrite(rule) => rule.apply(text),
            Stage::DecodeEntities => decode_html_entities(text),
            Stage::TrimLines => trim_lines(text),
        }
    }
}

/// Entities understood by [`decode_html_entities`].
const ENTITIES: &[(&str, &str)] = &[
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&nbsp;", " "),
    ("&ndash;", "-"),
    ("&mdash;", "\u{2014}"),
    ("&lsquo;", "'"),
    ("&rsquo;", "'"),
    ("&ldquo;", "\""),
    ("&rdquo;", "\""),
    ("&hellip;", "..."),
    ("&#8230;", "..."),
    ("&#8217;", "'"),
    ("&#8220;", "\""),
    ("&#8221;", "\""),
    ("&amp;", "&"),
];

pub static PIPELINE: Lazy<Vec<Stage>> = Lazy::new(|| {
    use Replacement::{Remove, Template};

    vec![
        Stage::Rewrite(Rule::new("strip_doctype", r"<!DOCTYPE[^>]*>", Remove)),
        Stage::Rewrite(Rule::new(
            "strip_document_wrappers",
            r"</?html[^>]*>|</?body[^>]*>",
            Remove,
        )),
        Stage::Rewrite(Rule::new(
            "strip_video",
            r"<video[^>]*>[\s\S]*?</video>",
            Remove,
        )),
        Stage::Rewrite(Rule::new("strip_images", r"<img[^>]*>", Remove)),
        Stage::Rewrite(Rule::new(
            "strip_post_footer",
            r"<p>The post.*?appeared first on.*?</p>",
            Remove,
        )),
        Stage::Rewrite(Rule::new(
            "headers",
            r"<h[1-6][^>]*>(.*?)</h[1-6]>",
            Template("\n${1}\n"),
        )),
        Stage::Rewrite(Rule::new(
            "list_items",
            r"<li[^>]*>(.*?)</li>",
            Template("\u{2022} ${1}\n"),
        )),
        Stage::Rewrite(Rule::new("strip_lists", r"</?[uo]l[^>]*>", Remove)),
        Stage::Rewrite(Rule::new("paragraph_open", r"<p(?:\s[^>]*)?>", Remove)),
        Stage::Rewrite(Rule::new("paragraph_close", r"</p>", Template("\n\n"))),
        Stage::Rewrite(Rule::new("line_breaks", r"<br\s*/?>", Template("\n"))),
        Stage::Rewrite(Rule::new("anchors", r"<a[^>]*>([^<]*)</a>", Template("${1}"))),
        Stage::Rewrite(Rule::new("strip_tags", r"<[^>]+>", Remove)),
        Stage::DecodeEntities,
        // A line holding only whitespace counts as blank here; the line trim
        // below would otherwise leave three newlines behind.
        Stage::Rewrite(Rule::new(
            "collapse_newlines",
            r"\n(?:[^\S\n]*\n){2,}",
            Template("\n\n"),
        )),
        Stage::Rewrite(Rule::new("collapse_spaces", r" +", Template(" "))),
        Stage::TrimLines,
    ]
});

/// Convert an HTML fragment into readable plain text.
pub fn html_to_text(html: &str) -> String {
    PIPELINE
        .iter()
        .fold(html.to_string(), |text, stage| stage.apply(&text))
}

/// Names of the pipeline stages, in the order they run.
pub fn stage_names() -> Vec<&'static str> {
    PIPELINE.iter().map(Stage::name).collect()
}

/// Decode the fixed entity table until nothing changes, so output never
/// contains a decodable entity. Unknown entities are left untouched.
pub fn decode_html_entities(text: &str) -> String {
    let mut decoded = text.to_string();
    loop {
        let next = decode_entities_once(&decoded);
        if next == decoded {
            return decoded;
        }
        decoded = next;
    }
}

// Every literal is shorter than its entity, so repeated passes terminate.
fn decode_entities_once(text: &str) -> String {
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, &(entity, literal)| {
            acc.replace(entity, literal)
        })
}

fn trim_lines(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(name: &str) -> &'static Stage {
        PIPELINE
            .iter()
            .find(|s| s.name() == name)
            .unwrap_or_else(|| panic!("no stage named {}", name))
    }

    #[test]
    fn test_simple_paragraph() {
        assert_eq!(html_to_text("<p>Hello world</p>"), "Hello world");
    }

    #[test]
    fn test_multiple_paragraphs() {
        assert_eq!(html_to_text("<p>A</p><p>B</p>"), "A\n\nB");
        assert_eq!(
            html_to_text("<p>First paragraph.</p><p>Second paragraph.</p>"),
            "First paragraph.\n\nSecond paragraph."
        );
    }

    #[test]
    fn test_paragraph_with_attributes() {
        assert_eq!(
            html_to_text("<p class=\"lead\">Intro</p><p>Rest</p>"),
            "Intro\n\nRest"
        );
    }

    #[test]
    fn test_removes_images() {
        assert_eq!(
            html_to_text("<p>Text before</p><img src='test.jpg'/><p>Text after</p>"),
            "Text before\n\nText after"
        );
    }

    #[test]
    fn test_removes_video_with_content() {
        assert_eq!(
            html_to_text("<p>Hello</p><video src='test.mp4'></video><p>World</p>"),
            "Hello\n\nWorld"
        );

        let html = "<p>Hello</p><video controls>\n<source src='a.mp4'>\nFallback text\n</video><p>World</p>";
        let text = html_to_text(html);
        assert_eq!(text, "Hello\n\nWorld");
        assert!(!text.contains("Fallback"));
    }

    #[test]
    fn test_video_match_is_not_greedy() {
        let html = "<video>one</video><p>Keep me</p><video>two</video>";
        assert_eq!(html_to_text(html), "Keep me");
    }

    #[test]
    fn test_strips_document_wrappers() {
        let html = "<!DOCTYPE html><html lang=\"en\"><body class=\"x\"><p>Inside</p></body></html>";
        assert_eq!(html_to_text(html), "Inside");
    }

    #[test]
    fn test_converts_headers() {
        assert_eq!(html_to_text("<h2>Header</h2><p>Content</p>"), "Header\nContent");
        assert_eq!(
            html_to_text("<p>Intro</p><h3 id=\"x\">Details</h3><p>More</p>"),
            "Intro\n\nDetails\nMore"
        );
    }

    #[test]
    fn test_converts_lists() {
        assert_eq!(
            html_to_text("<ul><li>X</li><li>Y</li></ul>"),
            "\u{2022} X\n\u{2022} Y"
        );
        assert_eq!(
            html_to_text("<ol>\n<li>Item one</li>\n<li>Item two</li>\n</ol>"),
            "\u{2022} Item one\n\n\u{2022} Item two"
        );
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(html_to_text("a<br>b<br/>c<br />d"), "a\nb\nc\nd");
    }

    #[test]
    fn test_extracts_link_text() {
        assert_eq!(
            html_to_text("<p>Check out <a href='https://example.com'>this link</a> here.</p>"),
            "Check out this link here."
        );
    }

    #[test]
    fn test_anchor_with_nested_markup_is_left_for_tag_strip() {
        let after = stage("anchors").apply("<a href='x'><code>cmd</code></a>");
        assert_eq!(after, "<a href='x'><code>cmd</code></a>");
        assert_eq!(html_to_text("<a href='x'><code>cmd</code></a>"), "cmd");
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(
            html_to_text("<p>It&rsquo;s a &ldquo;test&rdquo; &amp; more</p>"),
            "It's a \"test\" & more"
        );
        assert_eq!(
            html_to_text("It&rsquo;s a &ldquo;test&rdquo;"),
            "It's a \"test\""
        );
    }

    #[test]
    fn test_unknown_entities_pass_through() {
        assert_eq!(html_to_text("caf&eacute; &#169;"), "caf&eacute; &#169;");
    }

    #[test]
    fn test_nested_entities_decode_fully() {
        assert_eq!(decode_html_entities("&amp;lt;b&amp;gt;"), "<b>");
        assert_eq!(decode_html_entities("&amp;amp;quot;"), "\"");
        assert_eq!(decode_html_entities("&amp;nbsp;x"), " x");
        assert_eq!(decode_html_entities("&amp;copy;"), "&copy;");
    }

    #[test]
    fn test_escaped_markup_survives_as_text() {
        assert_eq!(html_to_text("<p>Use &lt;details&gt; tags</p>"), "Use <details> tags");
    }

    #[test]
    fn test_removes_post_footer() {
        assert_eq!(
            html_to_text("<p>Content</p><p>The post Example appeared first on The GitHub Blog.</p>"),
            "Content"
        );

        let html = "<p>Content</p>\n<p>The post <a href=\"https://github.blog/x\">Example</a> appeared first on <a href=\"https://github.blog\">The GitHub Blog</a>.</p>\n";
        assert_eq!(html_to_text(html), "Content");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(html_to_text("a    b\n\n\n\n\nc"), "a b\n\nc");
        assert_eq!(html_to_text("  leading\t\n   trailing  "), "leading\ntrailing");
    }

    #[test]
    fn test_blank_lines_with_spaces_collapse() {
        assert_eq!(html_to_text("a\n \n \n \nb"), "a\n\nb");
        assert_eq!(html_to_text("a\r\n\r\n\r\nb"), "a\n\nb");
    }

    #[test]
    fn test_unbalanced_markup_degrades() {
        assert_eq!(html_to_text("<p>open <b>bold <i>never closed"), "open bold never closed");
        assert_eq!(html_to_text("<li>dangling"), "dangling");
        assert_eq!(html_to_text("a < b"), "a < b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(html_to_text(""), "");
        assert_eq!(html_to_text("<p></p>"), "");
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let inputs = [
            "<p>Hello world</p>",
            "<h2>What's new</h2><p>Copilot can now&nbsp;do   things.</p><ul><li>One</li><li><a href='#'>Two</a></li></ul><p>The post X appeared first on Y.</p>",
            "<p>A</p>\n \n \n<p>B</p>",
            "<div>\n  <p>Nested <em>emphasis</em></p>\n  <br/>\n</div>",
            "Plain text with trailing spaces   \n\n\n\nand gaps",
            "&amp;nbsp;x",
            "&amp;amp;quot;",
        ];

        for input in inputs {
            let once = html_to_text(input);
            assert_eq!(html_to_text(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_stage_order() {
        let names = stage_names();
        let position = |name: &str| names.iter().position(|n| *n == name).unwrap();

        assert_eq!(names.first(), Some(&"strip_doctype"));
        assert_eq!(names.last(), Some(&"trim_lines"));
        assert!(position("strip_images") < position("strip_tags"));
        assert!(position("list_items") < position("strip_lists"));
        assert!(position("strip_post_footer") < position("paragraph_open"));
        assert!(position("anchors") < position("strip_tags"));
        assert!(position("strip_tags") < position("decode_entities"));
        assert!(position("decode_entities") < position("collapse_newlines"));
    }

    #[test]
    fn test_list_items_before_wrappers() {
        let after_items = stage("list_items").apply("<ul><li>X</li></ul>");
        assert_eq!(after_items, "<ul>\u{2022} X\n</ul>");
        assert_eq!(stage("strip_lists").apply(&after_items), "\u{2022} X\n");
    }

    #[test]
    fn test_paragraph_open_leaves_other_p_tags() {
        let rule = stage("paragraph_open");
        assert_eq!(rule.apply("<p><p id=\"a\"><pre>"), "<pre>");
    }
}
