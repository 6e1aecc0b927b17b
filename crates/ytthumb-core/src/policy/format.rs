//! Best-effort structure for the plain-text policy: headings, paragraphs, links.
//!
//! A trimmed line is a heading when it is all caps and 3..60 chars long, or
//! when it is under 50 chars, starts with an uppercase ASCII letter, holds
//! only ASCII letters and whitespace, and has no `.`. Blank lines end a
//! paragraph; paragraph lines are joined with single spaces.

use once_cell::sync::Lazy;
use regex::Regex;

static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").expect("static pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Paragraph(String),
}

/// A run of paragraph text: either plain text or a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline<'a> {
    Text(&'a str),
    Link(&'a str),
}

fn is_heading(line: &str) -> bool {
    let len = line.chars().count();
    let all_caps = line == line.to_uppercase() && len > 2 && len < 60;
    let title_like = len < 50
        && line.starts_with(|c: char| c.is_ascii_uppercase())
        && line
            .chars()
            .skip(1)
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        && len > 1
        && !line.contains('.');
    all_caps || title_like
}

fn flush(current: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if !current.is_empty() {
        blocks.push(Block::Paragraph(current.join(" ")));
        current.clear();
    }
}

pub fn format_policy(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            flush(&mut current, &mut blocks);
        } else if is_heading(line) {
            flush(&mut current, &mut blocks);
            blocks.push(Block::Heading(line.to_string()));
        } else {
            current.push(line);
        }
    }
    flush(&mut current, &mut blocks);
    blocks
}

/// Splits paragraph text into plain runs and `http(s)://` links.
pub fn split_links(text: &str) -> Vec<Inline<'_>> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in LINK.find_iter(text) {
        if m.start() > last {
            out.push(Inline::Text(&text[last..m.start()]));
        }
        out.push(Inline::Link(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        out.push(Inline::Text(&text[last..]));
    }
    out
}
