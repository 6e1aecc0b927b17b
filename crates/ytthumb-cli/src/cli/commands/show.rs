//! `ytthumb show <url>`: list the five thumbnails, optionally probing each.

use anyhow::{Context as _, Result};
use ytthumb_core::fetch::{self, Availability};
use ytthumb_core::derive;

use super::resolve_video_for;
use crate::cli::render::{render_cards, render_header};
use crate::cli::Context;

pub async fn run_show(ctx: &Context, url: &str, check: bool) -> Result<()> {
    let t = ctx.translator();
    let Some(id) = resolve_video_for(&t, url)? else {
        return Ok(());
    };
    let descriptors = derive(&id, &t);

    let availability = if check {
        let mut handles = Vec::with_capacity(descriptors.len());
        for d in &descriptors {
            let url = d.url.clone();
            let opts = ctx.fetch.clone();
            handles.push(tokio::task::spawn_blocking(move || fetch::probe(&url, &opts)));
        }
        let mut out: Vec<Option<Availability>> = Vec::with_capacity(handles.len());
        for (h, d) in handles.into_iter().zip(&descriptors) {
            match h.await.context("probe task join")? {
                Ok(a) => out.push(Some(a)),
                Err(e) => {
                    tracing::warn!(url = %d.url, "probe failed: {}", e);
                    out.push(None);
                }
            }
        }
        Some(out)
    } else {
        None
    };

    print!("{}", render_header(&t));
    print!("{}", render_cards(&t, &descriptors, availability.as_deref()));
    Ok(())
}
