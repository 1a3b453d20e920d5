//! Markdown → HTML for generated documents.
//!
//! Covers the subset the generation prompt asks for: ATX headings, `**bold**`,
//! `*italic*`, `*`/`-`/`+` bullets, horizontal rules and paragraphs. Line breaks
//! inside a paragraph are kept, since contact blocks and letter closings rely on
//! them. All text is HTML-escaped before any markup is added.
//!
//! `render_markdown` is a pure function of its input.

use std::fmt::Write;

pub fn render_markdown(markdown: &str) -> String {
    let mut html = String::with_capacity(markdown.len() * 2);
    let mut paragraph: Vec<&str> = Vec::new();
    let mut in_list = false;

    for line in markdown.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            flush_paragraph(&mut html, &mut paragraph);
            close_list(&mut html, &mut in_list);
            continue;
        }

        if let Some((level, text)) = heading(trimmed) {
            flush_paragraph(&mut html, &mut paragraph);
            close_list(&mut html, &mut in_list);
            let _ = writeln!(html, "<h{level}>{}</h{level}>", render_inline(text));
            continue;
        }

        if is_rule(trimmed) {
            flush_paragraph(&mut html, &mut paragraph);
            close_list(&mut html, &mut in_list);
            html.push_str("<hr>\n");
            continue;
        }

        if let Some(item) = bullet(trimmed) {
            flush_paragraph(&mut html, &mut paragraph);
            if !in_list {
                html.push_str("<ul>\n");
                in_list = true;
            }
            let _ = writeln!(html, "<li>{}</li>", render_inline(item));
            continue;
        }

        close_list(&mut html, &mut in_list);
        paragraph.push(trimmed);
    }

    flush_paragraph(&mut html, &mut paragraph);
    close_list(&mut html, &mut in_list);
    html
}

fn flush_paragraph(html: &mut String, lines: &mut Vec<&str>) {
    if lines.is_empty() {
        return;
    }
    let body: Vec<String> = lines.iter().map(|l| render_inline(l)).collect();
    let _ = writeln!(html, "<p>{}</p>", body.join("<br>\n"));
    lines.clear();
}

fn close_list(html: &mut String, in_list: &mut bool) {
    if *in_list {
        html.push_str("</ul>\n");
        *in_list = false;
    }
}

fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let rest = &line[level..];
    if rest.is_empty() {
        return Some((level, ""));
    }
    rest.strip_prefix(' ')
        .map(|text| (level, text.trim().trim_end_matches('#').trim_end()))
}

fn bullet(line: &str) -> Option<&str> {
    ["* ", "- ", "+ "]
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .map(str::trim)
}

fn is_rule(line: &str) -> bool {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    compact.len() >= 3
        && ['-', '*', '_']
            .iter()
            .any(|&m| compact.chars().all(|c| c == m))
}

fn render_inline(text: &str) -> String {
    let escaped = escape_html(text);
    let strong = wrap_pairs(&escaped, "**", "strong");
    wrap_pairs(&strong, "*", "em")
}

/// Wraps `marker…marker` spans in `tag`. A span must be non-empty and must not
/// start or end with a space; otherwise the marker is copied literally.
fn wrap_pairs(text: &str, marker: &str, tag: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(marker) {
        let after = &rest[open + marker.len()..];
        let close = after
            .find(marker)
            .filter(|&c| c > 0 && !after.starts_with(' ') && !after[..c].ends_with(' '));
        match close {
            Some(c) => {
                out.push_str(&rest[..open]);
                let _ = write!(out, "<{tag}>{}</{tag}>", &after[..c]);
                rest = &after[c + marker.len()..];
            }
            None => {
                out.push_str(&rest[..open + marker.len()]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
