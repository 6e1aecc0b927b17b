//! `ytthumb download <url>`: save one or all thumbnail sizes.

use anyhow::{bail, Context as _, Result};
use std::path::PathBuf;
use ytthumb_core::download::{download_thumbnail, DownloadOutcome};
use ytthumb_core::i18n::keys;
use ytthumb_core::{derive, ThumbnailDescriptor, ThumbnailVariant};

use super::{resolve_video_for, user_message};
use crate::cli::Context;

#[derive(Debug, Clone)]
pub struct DownloadArgs {
    pub url: String,
    pub size: Option<String>,
    pub all: bool,
    pub output_dir: Option<PathBuf>,
}

/// Variants selected by `--size` / `--all`; max resolution when neither is given.
pub(crate) fn selected_variants(size: Option<&str>, all: bool) -> Result<Vec<ThumbnailVariant>> {
    if all {
        return Ok(ThumbnailVariant::all().to_vec());
    }
    match size {
        None => Ok(vec![ThumbnailVariant::MaxRes]),
        Some(s) => match ThumbnailVariant::parse(s) {
            Some(v) => Ok(vec![v]),
            None => bail!(
                "unknown size {:?}; expected one of 1280x720, 640x480, 480x360, 320x180, 120x90",
                s
            ),
        },
    }
}

pub async fn run_download(ctx: &Context, args: DownloadArgs) -> Result<()> {
    let t = ctx.translator();
    let Some(id) = resolve_video_for(&t, &args.url)? else {
        return Ok(());
    };
    let variants = selected_variants(args.size.as_deref(), args.all)?;
    let dir = ctx.output_dir(args.output_dir)?;

    let wanted: Vec<ThumbnailDescriptor> = derive(&id, &t)
        .into_iter()
        .filter(|d| variants.contains(&d.variant))
        .collect();

    // One independent blocking task per descriptor; each reports on its own.
    let mut handles = Vec::with_capacity(wanted.len());
    for descriptor in wanted {
        let id = id.clone();
        let dir = dir.clone();
        let opts = ctx.fetch.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let result = download_thumbnail(&descriptor, &id, &dir, &opts);
            DownloadOutcome { descriptor, result }
        }));
    }

    let total = handles.len();
    let mut failed = 0usize;
    for h in handles {
        let outcome = h.await.context("download task join")?;
        let d = &outcome.descriptor;
        match &outcome.result {
            Ok(path) => println!(
                "{} ({}): {} {}",
                d.label,
                d.size,
                t.t(keys::SAVED_TO),
                path.display()
            ),
            Err(e) => {
                failed += 1;
                eprintln!("{} ({}): {}", d.label, d.size, user_message(&t, e));
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} downloads failed", failed, total);
    }
    Ok(())
}
