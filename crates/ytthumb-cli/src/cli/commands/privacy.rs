//! `ytthumb privacy`: render the privacy policy.

use anyhow::{Context as _, Result};
use ytthumb_core::policy::{format_policy, load_policy_or_fallback, localized_policy_date, PolicySource};

use crate::cli::render::render_policy;
use crate::cli::Context;

pub async fn run_privacy(ctx: &Context, source: Option<String>) -> Result<()> {
    let source = PolicySource::from_setting(source.as_deref().or(ctx.cfg.policy_source.as_deref()));
    tracing::debug!(?source, "loading privacy policy");
    let opts = ctx.fetch.clone();
    let text = tokio::task::spawn_blocking(move || load_policy_or_fallback(&source, &opts))
        .await
        .context("policy task join")?;

    let t = ctx.translator();
    let blocks = format_policy(&text);
    let date = localized_policy_date(t.language());
    print!("{}", render_policy(&t, &blocks, &date));
    Ok(())
}
