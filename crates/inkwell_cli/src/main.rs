//! Inkwell CLI: terminal front-end over `inkwell_core`.
//!
//! # Responsibility
//! - Map subcommands onto core lookup/filter/related queries.
//! - Refuse to start when the configured article store fails validation.

mod cli;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use inkwell_core::{
    init_logging, AppConfig, Article, ArticleStore, ArticleView, CategoryFilter, CommentThread,
    LookupService, RelatedSelector, LISTING_SELECTORS,
};
use log::info;
use std::fmt::Write;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if let Some(settings) = &config.logging {
        init_logging(settings).context("failed to initialize logging")?;
    }

    let store = config
        .load_store()
        .context("article store failed validation; refusing to start")?;
    info!(
        "event=cli_start module=cli status=ok articles={} version={}",
        store.len(),
        inkwell_core::core_version()
    );

    print!("{}", run(&cli.command, &config, &store)?);
    Ok(())
}

/// Environment first, then CLI flags on top.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::from_env().context("invalid INKWELL_* environment")?;
    if let Some(path) = &cli.content {
        config.content_path = Some(path.clone());
    }
    if let Some(fallback_id) = &cli.fallback_id {
        config.fallback_id = fallback_id.clone();
    }
    Ok(config)
}

/// Resolves the article for `show` and its related list.
///
/// Related articles exclude the resolved article, so a fallback page never
/// recommends itself.
fn resolve_show<'s>(
    store: &'s ArticleStore,
    id: &str,
    fallback_id: &str,
    limit: usize,
) -> Result<(&'s Article, Vec<&'s Article>)> {
    let article = LookupService::new(store)
        .resolve_or_default(id, fallback_id)
        .context("fallback article is missing from the store")?;
    let related = RelatedSelector::new(store).related_to(&article.id, limit);
    Ok((article, related))
}

/// Executes one command and returns its terminal output.
fn run(command: &Commands, config: &AppConfig, store: &ArticleStore) -> Result<String> {
    let mut out = String::new();
    match command {
        Commands::List => {
            let articles = store.all().iter().collect::<Vec<_>>();
            out.push_str(&render::render_summary(&articles));
        }
        Commands::Show {
            id,
            limit,
            comments,
            comment,
        } => {
            let (article, related) = resolve_show(
                store,
                id,
                &config.fallback_id,
                limit.unwrap_or(config.related_limit),
            )?;
            out.push_str(&render::render_detail(&ArticleView::from_article(article)));

            if !related.is_empty() {
                out.push_str("\nKeep reading:\n");
                out.push_str(&render::render_summary(&related));
            }

            if *comments {
                let mut thread = CommentThread::with_sample_comments(article.id.clone());
                if let Some(text) = comment {
                    thread.post(text.clone())?;
                }
                out.push('\n');
                out.push_str(&render::render_comments(thread.comments()));
            }
        }
        Commands::Filter { selector } => {
            let articles = CategoryFilter::new(store).filter_by_category(selector);
            if articles.is_empty() {
                writeln!(out, "No articles match `{selector}`.")?;
            } else {
                out.push_str(&render::render_summary(&articles));
            }
        }
        Commands::Related { id, limit } => {
            let related =
                RelatedSelector::new(store).related_to(id, limit.unwrap_or(config.related_limit));
            out.push_str(&render::render_summary(&related));
        }
        Commands::Selectors { all } => {
            let filter = CategoryFilter::new(store);
            let counts = if *all {
                filter.selector_counts(&filter.known_selectors())
            } else {
                filter.selector_counts(&LISTING_SELECTORS)
            };
            out.push_str(&render::render_selector_counts(&counts));
        }
        Commands::Export => {
            writeln!(out, "{}", store.to_json_pretty()?)?;
        }
    }
    Ok(out)
}
