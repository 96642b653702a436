//! Minimal tolerant HTML scanning for the listing pages.
//!
//! The archived directory pages are table-era markup; a full HTML tree is
//! overkill for pulling anchors out of one known block. These helpers scan
//! case-insensitively, tolerate either attribute quote style, and normalize
//! entities and whitespace. They are not a general-purpose parser.

/// Case-insensitive search for `needle` in `haystack` starting at `from`.
fn find_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    // ASCII-only folding keeps byte offsets stable on non-ASCII pages.
    let haystack_lower = haystack[from..].to_ascii_lowercase();
    let needle_lower = needle.to_ascii_lowercase();
    haystack_lower.find(&needle_lower).map(|pos| from + pos)
}

/// Locate the byte range of the element carrying `class_name` in its
/// `class` attribute, from `<` through the matching close tag.
///
/// Nested elements of the same tag name are tracked so the block ends at
/// its own close tag, not an inner one. Returns `None` when no such
/// element exists or its close tag is missing.
fn class_block_range(html: &str, class_name: &str) -> Option<(usize, usize)> {
    let mut search_from = 0;
    loop {
        let attr_pos = find_ci(html, "class", search_from)?;
        // Walk back to the opening '<' of the tag this attribute sits in.
        let tag_start = html[..attr_pos].rfind('<')?;
        let tag_end = html[attr_pos..].find('>').map(|p| attr_pos + p)?;
        let tag = &html[tag_start..=tag_end];

        if !attribute_value(tag, "class")
            .map(|value| {
                value
                    .split_whitespace()
                    .any(|part| part.eq_ignore_ascii_case(class_name))
            })
            .unwrap_or(false)
        {
            search_from = attr_pos + 5;
            continue;
        }

        let tag_name: String = html[tag_start + 1..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        if tag_name.is_empty() {
            search_from = attr_pos + 5;
            continue;
        }

        let open_marker = format!("<{}", tag_name.to_lowercase());
        let close_marker = format!("</{}", tag_name.to_lowercase());
        let mut depth = 1;
        let mut cursor = tag_end + 1;
        while depth > 0 {
            let next_open = find_ci(html, &open_marker, cursor);
            let next_close = find_ci(html, &close_marker, cursor)?;
            match next_open {
                Some(open) if open < next_close => {
                    depth += 1;
                    cursor = open + open_marker.len();
                }
                _ => {
                    depth -= 1;
                    cursor = next_close + close_marker.len();
                }
            }
        }
        let block_end = html[cursor..].find('>').map(|p| cursor + p + 1)?;
        return Some((tag_start, block_end));
    }
}

/// Inner markup of the first element whose `class` attribute contains
/// `class_name` (content between its open and close tags).
pub fn class_block<'a>(html: &'a str, class_name: &str) -> Option<&'a str> {
    let (start, end) = class_block_range(html, class_name)?;
    let open_end = html[start..end].find('>')? + start + 1;
    let close_start = html[..end].rfind("</")?;
    if open_end > close_start {
        return None;
    }
    Some(&html[open_end..close_start])
}

/// Copy of `html` with the first element carrying `class_name` removed.
///
/// Used to drop navigation blocks whose anchors would otherwise pollute
/// the scan. Markup without such a block is returned unchanged.
pub fn remove_class_block(html: &str, class_name: &str) -> String {
    match class_block_range(html, class_name) {
        Some((start, end)) => format!("{}{}", &html[..start], &html[end..]),
        None => html.to_string(),
    }
}

/// An `<a>` element reduced to its normalized text and `href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub text: String,
    pub href: String,
}

/// Extract every `<a href=…>` anchor in document order.
///
/// Anchors without an `href`, or with empty text after normalization, are
/// skipped.
pub fn extract_anchors(html: &str) -> Vec<Anchor> {
    let mut anchors = Vec::new();
    let mut cursor = 0;

    while let Some(pos) = find_ci(html, "<a", cursor) {
        // Require a real anchor tag, not <abbr> etc.
        let after = html[pos + 2..].chars().next();
        if !matches!(after, Some(c) if c.is_whitespace() || c == '>') {
            cursor = pos + 2;
            continue;
        }
        let Some(tag_end) = html[pos..].find('>').map(|p| pos + p) else {
            break;
        };
        let tag = &html[pos..=tag_end];
        let Some(close) = find_ci(html, "</a", tag_end) else {
            break;
        };
        let inner = &html[tag_end + 1..close];

        if let Some(href) = attribute_value(tag, "href") {
            let text = normalize_text(&strip_tags(inner));
            if !text.is_empty() {
                anchors.push(Anchor {
                    text,
                    href: decode_entities(&href),
                });
            }
        }
        cursor = close + 3;
    }

    anchors
}

/// Value of `name="…"` / `name='…'` inside a single tag, if present.
fn attribute_value(tag: &str, name: &str) -> Option<String> {
    let mut search_from = 0;
    loop {
        let pos = find_ci(tag, name, search_from)?;
        // Attribute names must stand alone ("href", not "xlink:href").
        let preceded_ok = tag[..pos]
            .chars()
            .last()
            .map(|c| c.is_whitespace() || c == '<')
            .unwrap_or(false);
        if !preceded_ok {
            search_from = pos + name.len();
            continue;
        }
        let rest = tag[pos + name.len()..].trim_start();
        let Some(rest) = rest.strip_prefix('=') else {
            search_from = pos + name.len();
            continue;
        };
        let rest = rest.trim_start();
        let mut chars = rest.chars();
        return match chars.next() {
            Some(quote @ ('"' | '\'')) => {
                let value: String = chars.take_while(|&c| c != quote).collect();
                Some(value)
            }
            Some(_) => Some(
                rest.chars()
                    .take_while(|c| !c.is_whitespace() && *c != '>')
                    .collect(),
            ),
            None => None,
        };
    }
}

/// Drop any nested tags, keeping only text content.
pub fn strip_tags(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for c in fragment.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

/// Decode the handful of entities the listing pages actually use.
pub fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Entity-decode and collapse all interior whitespace runs to single spaces.
pub fn normalize_text(text: &str) -> String {
    decode_entities(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
