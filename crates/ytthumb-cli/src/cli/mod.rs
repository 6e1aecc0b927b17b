//! CLI for ytthumb.

mod commands;
mod render;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ytthumb_core::config::{self, ThumbConfig};
use ytthumb_core::fetch::FetchOptions;
use ytthumb_core::{Language, LanguageStore, Translator};

use commands::{
    run_completions, run_download, run_lang, run_privacy, run_shell, run_show, DownloadArgs,
};

/// Top-level CLI for ytthumb.
#[derive(Debug, Parser)]
#[command(name = "ytthumb")]
#[command(about = "ytthumb: get every thumbnail size of a YouTube video", long_about = None)]
pub struct Cli {
    /// Language for this run only, not saved (en, es, pt, hi, id, ar).
    #[arg(long, global = true, value_name = "CODE")]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the five thumbnails of a video URL.
    Show {
        /// YouTube video URL (watch, youtu.be, embed, /v/ or mobile link).
        url: String,
        /// Ask the image host which thumbnails actually exist.
        #[arg(long)]
        check: bool,
    },

    /// Download thumbnails of a video URL.
    Download {
        /// YouTube video URL.
        url: String,
        /// Size to download: 1280x720, 640x480, 480x360, 320x180, 120x90 or maxres/sd/hq/mq/default.
        #[arg(long, value_name = "SIZE", conflicts_with = "all")]
        size: Option<String>,
        /// Download all five sizes.
        #[arg(long)]
        all: bool,
        /// Directory to save into (default: config output_dir, else current directory).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Show the UI language, or set and save it.
    Lang {
        /// Language code to switch to.
        code: Option<String>,
    },

    /// Show the privacy policy.
    Privacy {
        /// Policy document: local path or http(s) URL (default: config policy_source, else bundled).
        #[arg(long, value_name = "PATH|URL")]
        source: Option<String>,
    },

    /// Interactive session: paste URLs line by line.
    Shell,

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Everything a command needs: config, language state, request settings.
pub struct Context {
    pub cfg: ThumbConfig,
    pub store: LanguageStore,
    /// From `--lang`; wins over the saved preference and is never persisted.
    pub lang_override: Option<Language>,
    pub fetch: FetchOptions,
}

impl Context {
    pub fn new(cfg: ThumbConfig, store: LanguageStore, lang_override: Option<Language>) -> Self {
        let fetch = FetchOptions::from(&cfg);
        Context {
            cfg,
            store,
            lang_override,
            fetch,
        }
    }

    pub fn language(&self) -> Language {
        self.lang_override.unwrap_or_else(|| self.store.language())
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.language())
    }

    /// `--output-dir`, else config `output_dir`, else the current directory.
    pub fn output_dir(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        match flag.or_else(|| self.cfg.output_dir.clone()) {
            Some(dir) => Ok(dir),
            None => std::env::current_dir().context("current directory"),
        }
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let store = LanguageStore::load(&LanguageStore::default_path()?);
        let lang_override = cli
            .lang
            .as_deref()
            .map(str::parse::<Language>)
            .transpose()?;
        let mut ctx = Context::new(cfg, store, lang_override);

        match cli.command {
            CliCommand::Show { url, check } => run_show(&ctx, &url, check).await?,
            CliCommand::Download {
                url,
                size,
                all,
                output_dir,
            } => {
                let args = DownloadArgs {
                    url,
                    size,
                    all,
                    output_dir,
                };
                run_download(&ctx, args).await?
            }
            CliCommand::Lang { code } => run_lang(&mut ctx, code.as_deref())?,
            CliCommand::Privacy { source } => run_privacy(&ctx, source).await?,
            CliCommand::Shell => {
                let stdin = std::io::stdin();
                let stdout = std::io::stdout();
                // Downloads inside the session block on curl.
                tokio::task::block_in_place(|| run_shell(&mut ctx, stdin.lock(), stdout.lock()))?
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
