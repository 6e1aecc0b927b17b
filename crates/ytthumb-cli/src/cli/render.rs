//! Text rendering for cards and the policy page.
//!
//! Every line goes through the language's text direction so Arabic output is
//! isolated as right-to-left.

use ytthumb_core::fetch::Availability;
use ytthumb_core::i18n::keys;
use ytthumb_core::policy::{split_links, Block, Inline};
use ytthumb_core::{ThumbnailDescriptor, Translator};

fn line(t: &Translator, text: &str) -> String {
    let mut s = t.language().direction().isolate(text);
    s.push('\n');
    s
}

/// Title and subtitle shown above results.
pub fn render_header(t: &Translator) -> String {
    let mut out = line(t, t.t(keys::TITLE));
    out.push_str(&line(t, t.t(keys::SUBTITLE)));
    out
}

/// One card per descriptor: `label (size)`, the URL, and the availability
/// when it was probed. A probe error leaves the card without a status.
pub fn render_cards(
    t: &Translator,
    descriptors: &[ThumbnailDescriptor],
    availability: Option<&[Option<Availability>]>,
) -> String {
    let mut out = String::new();
    for (i, d) in descriptors.iter().enumerate() {
        out.push('\n');
        out.push_str(&line(t, &format!("{} ({})", d.label, d.size)));
        out.push_str(&format!("  {}\n", d.url));
        if let Some(Some(a)) = availability.and_then(|a| a.get(i)) {
            let key = if a.is_available() {
                keys::IMAGE_AVAILABLE
            } else {
                keys::IMAGE_NOT_AVAILABLE
            };
            out.push_str(&format!("  [{}]\n", t.t(key)));
        }
    }
    out
}

/// Policy page: header with the localized date, then headings and paragraphs.
/// Links are shown in angle brackets.
pub fn render_policy(t: &Translator, blocks: &[Block], date: &str) -> String {
    let mut out = String::new();
    out.push_str(&line(t, &format!("← {}", t.t(keys::BACK_TO_HOME))));
    out.push('\n');
    out.push_str(&line(t, "Privacy Policy"));
    out.push_str(&line(t, t.t(keys::WRITTEN_BY)));
    out.push_str(&line(t, &format!("{} {}", t.t(keys::ON_DATE), date)));

    for block in blocks {
        out.push('\n');
        match block {
            Block::Heading(h) => {
                out.push_str(&line(t, h));
                out.push_str(&line(t, &"-".repeat(h.chars().count())));
            }
            Block::Paragraph(p) => {
                let text: String = split_links(p)
                    .into_iter()
                    .map(|part| match part {
                        Inline::Text(s) => s.to_string(),
                        Inline::Link(u) => format!("<{}>", u),
                    })
                    .collect();
                out.push_str(&line(t, &text));
            }
        }
    }
    out
}
