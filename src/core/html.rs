// src/core/html.rs
use super::sanitize::{normalize_entities, normalize_ws};

/// Strip tags from an HTML fragment, concatenating the text nodes.
/// Good for grid cells where a value is wrapped in anchors/spans.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = normalize_entities(s.as_ref());

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Render a whole HTML document to text, one space where each tag was.
/// Keeps words from running together so line-oriented patterns
/// ("Land Area: …") still match across markup boundaries.
pub fn page_text<S: AsRef<str>>(s: S) -> String {
    let s = normalize_entities(s.as_ref());

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => {
                in_tag = true;
                out.push(' ');
            }
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_tags_concatenates_text_nodes() {
        assert_eq!(strip_tags("<a href=\"x\">SMITH</a> <b>JOHN</b>"), "SMITH JOHN");
        assert_eq!(strip_tags("plain"), "plain");
        assert_eq!(strip_tags(""), "");
    }

    #[test]
    fn strip_tags_decodes_common_entities() {
        assert_eq!(strip_tags("<td>SMITH&nbsp;&amp;&nbsp;SONS</td>"), "SMITH & SONS");
    }

    #[test]
    fn page_text_separates_adjacent_elements() {
        let doc = "<div>Land Area:</div><span>≅ 10,500 sf</span>";
        assert_eq!(page_text(doc), "Land Area: ≅ 10,500 sf");
    }
}
