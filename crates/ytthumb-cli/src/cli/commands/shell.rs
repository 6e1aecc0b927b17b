//! `ytthumb shell`: line-driven session over `PageState`.
//!
//! Each line is a submission. `:lang [code]`, `:download [size]` and
//! `:quit` / `:q` are commands. Blank lines are ignored.

use anyhow::{Context as _, Result};
use std::io::{BufRead, Write};
use ytthumb_core::download::download_thumbnail;
use ytthumb_core::i18n::keys;
use ytthumb_core::state::{PageEvent, PageState};
use ytthumb_core::Translator;

use super::download::selected_variants;
use super::lang::render_menu;
use super::user_message;
use crate::cli::render::{render_cards, render_header};
use crate::cli::Context;

#[derive(Debug, PartialEq, Eq)]
enum ShellLine<'a> {
    Blank,
    Quit,
    Lang(Option<&'a str>),
    Download(Option<&'a str>),
    Unknown(&'a str),
    Submit(&'a str),
}

fn parse_line(line: &str) -> ShellLine<'_> {
    let line = line.trim();
    if line.is_empty() {
        return ShellLine::Blank;
    }
    let Some(cmd) = line.strip_prefix(':') else {
        return ShellLine::Submit(line);
    };
    let mut parts = cmd.split_whitespace();
    let name = parts.next().unwrap_or("");
    let arg = parts.next();
    match name {
        "q" | "quit" => ShellLine::Quit,
        "lang" => ShellLine::Lang(arg),
        "download" => ShellLine::Download(arg),
        _ => ShellLine::Unknown(name),
    }
}

pub fn run_shell<R: BufRead, W: Write>(ctx: &mut Context, input: R, mut out: W) -> Result<()> {
    let mut state = PageState::new(ctx.language());
    write!(out, "{}", render_header(&state.translator()))?;
    writeln!(out, "{}", state.translator().t(keys::INPUT_PLACEHOLDER))?;

    for line in input.lines() {
        let line = line.context("read input")?;
        match parse_line(&line) {
            ShellLine::Blank => {}
            ShellLine::Quit => break,
            ShellLine::Unknown(name) => {
                writeln!(out, "unknown command :{} (try :lang, :download, :quit)", name)?
            }
            ShellLine::Lang(None) => write!(out, "{}", render_menu(state.language()))?,
            ShellLine::Lang(Some(code)) => match ctx.store.set_language(code) {
                Ok(lang) => {
                    ctx.lang_override = None;
                    state = state.apply(PageEvent::LanguageChanged(lang));
                    let t = Translator::new(lang);
                    writeln!(out, "{} {}", t.t(keys::LANGUAGE_CHANGED), lang.display_name())?;
                    if !state.descriptors().is_empty() {
                        write!(out, "{}", render_cards(&t, state.descriptors(), None))?;
                    }
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            ShellLine::Download(size) => {
                state = download(ctx, state, size, &mut out)?;
            }
            ShellLine::Submit(text) => {
                state = state
                    .apply(PageEvent::InputChanged(text.to_string()))
                    .apply(PageEvent::Submitted);
                match state.error_message() {
                    Some(msg) => writeln!(out, "{}", msg)?,
                    None => write!(out, "{}", render_cards(&state.translator(), state.descriptors(), None))?,
                }
            }
        }
        out.flush()?;
    }
    Ok(())
}

/// Downloads one size of the loaded video. Blocking.
fn download<W: Write>(
    ctx: &Context,
    state: PageState,
    size: Option<&str>,
    out: &mut W,
) -> Result<PageState> {
    let t = state.translator();
    let Some(id) = state.video_id().cloned() else {
        writeln!(out, "{}", t.t(keys::ERROR_INVALID_URL))?;
        return Ok(state);
    };
    let variant = match selected_variants(size, false) {
        Ok(v) => v[0],
        Err(e) => {
            writeln!(out, "{}", e)?;
            return Ok(state);
        }
    };
    let Some(descriptor) = state.descriptors().iter().find(|d| d.variant == variant).cloned()
    else {
        return Ok(state);
    };
    let dir = ctx.output_dir(None)?;
    match download_thumbnail(&descriptor, &id, &dir, &ctx.fetch) {
        Ok(path) => {
            writeln!(out, "{} {}", t.t(keys::SAVED_TO), path.display())?;
            Ok(state)
        }
        Err(e) => {
            writeln!(out, "{}", user_message(&t, &e))?;
            Ok(state.apply(PageEvent::DownloadFailed))
        }
    }
}
