//! `ytthumb lang [code]`: list languages or switch and save.

use anyhow::Result;
use ytthumb_core::i18n::keys;
use ytthumb_core::{Language, Translator};

use crate::cli::Context;

/// Language menu, current one marked with `*`.
pub(crate) fn render_menu(current: Language) -> String {
    let t = Translator::new(current);
    let mut out = format!("{}: {}\n", t.t(keys::CURRENT_LANGUAGE), current.display_name());
    for lang in Language::all() {
        let mark = if *lang == current { '*' } else { ' ' };
        out.push_str(&format!(
            "{} {}  {}\n",
            mark,
            lang.code(),
            lang.direction().isolate(lang.display_name())
        ));
    }
    out
}

pub fn run_lang(ctx: &mut Context, code: Option<&str>) -> Result<()> {
    match code {
        None => print!("{}", render_menu(ctx.language())),
        Some(code) => {
            let lang = ctx.store.set_language(code)?;
            // An explicit switch supersedes a --lang override for this run.
            ctx.lang_override = None;
            let t = Translator::new(lang);
            println!("{} {}", t.t(keys::LANGUAGE_CHANGED), lang.display_name());
        }
    }
    Ok(())
}
