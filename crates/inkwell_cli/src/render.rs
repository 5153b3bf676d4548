//! Plain-text rendering of articles for the terminal.

use inkwell_core::{Article, ArticleView, Comment, ContentBlock, SelectorCount};
use std::fmt::Write;

/// Renders one content block.
pub fn render_block(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Paragraph { text } => text.clone(),
        ContentBlock::Heading { text } => format!("## {text}"),
        ContentBlock::Quote { text } => format!("> {text}"),
        ContentBlock::Image { src, caption } => match caption {
            Some(caption) => format!("[image: {src}] {caption}"),
            None => format!("[image: {src}]"),
        },
        ContentBlock::Code { code } => format!("```\n{code}\n```"),
    }
}

/// One summary line per article: `id  category  title`.
pub fn render_summary(articles: &[&Article]) -> String {
    let id_width = articles
        .iter()
        .map(|article| article.id.chars().count())
        .max()
        .unwrap_or(0);
    let category_width = articles
        .iter()
        .map(|article| article.category.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for article in articles {
        let _ = writeln!(
            out,
            "{:<id_width$}  {:<category_width$}  {}",
            article.id, article.category, article.title
        );
    }
    out
}

/// Full detail page: header, body blocks, author box.
pub fn render_detail(view: &ArticleView<'_>) -> String {
    let article = view.article;
    let mut out = String::new();
    let _ = writeln!(out, "# {}", article.title);
    let _ = writeln!(out, "{}", view.subtitle);
    let _ = writeln!(
        out,
        "{} ({}) | {} | {} | {} read | {}",
        article.author.name,
        view.author_role,
        article.category,
        article.date,
        article.read_time,
        article.trend
    );
    if !article.tags.is_empty() {
        let _ = writeln!(out, "tags: {}", article.tags.join(", "));
    }

    for block in view.blocks() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", render_block(block));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Written by {}", article.author.name);
    if !article.author.bio.is_empty() {
        let _ = writeln!(out, "{}", article.author.bio);
    }
    out
}

pub fn render_comments(comments: &[Comment]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} comment(s)", comments.len());
    for comment in comments {
        let _ = writeln!(
            out,
            "- {} ({}, {} like(s)): {}",
            comment.user, comment.date, comment.likes, comment.text
        );
    }
    out
}

pub fn render_selector_counts(counts: &[SelectorCount]) -> String {
    let width = counts
        .iter()
        .map(|count| count.selector.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for count in counts {
        let _ = writeln!(out, "{:<width$}  {}", count.selector, count.count);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render_block, render_detail, render_summary};
    use inkwell_core::{ArticleStore, ArticleView, ContentBlock};

    #[test]
    fn blocks_render_by_variant() {
        assert_eq!(render_block(&ContentBlock::paragraph("Body")), "Body");
        assert_eq!(render_block(&ContentBlock::heading("Title")), "## Title");
        assert_eq!(render_block(&ContentBlock::quote("Said")), "> Said");
        assert_eq!(
            render_block(&ContentBlock::image(
                "https://example.com/a.png",
                Some("Figure".to_string())
            )),
            "[image: https://example.com/a.png] Figure"
        );
        assert_eq!(
            render_block(&ContentBlock::image("https://example.com/a.png", None)),
            "[image: https://example.com/a.png]"
        );
        assert_eq!(
            render_block(&ContentBlock::code("a < b\n  && c")),
            "```\na < b\n  && c\n```"
        );
    }

    #[test]
    fn summary_aligns_columns() {
        let store = ArticleStore::seed().unwrap();
        let articles = store.all().iter().take(2).collect::<Vec<_>>();
        let summary = render_summary(&articles);
        let lines = summary.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1  Design  The Death of Flat Design"));
        assert!(lines[1].starts_with("2  DevOps  Scaling Node.js"));
    }

    #[test]
    fn detail_renders_blocks_in_order_with_fallbacks() {
        let store = ArticleStore::seed().unwrap();
        let mut article = store.get("2").unwrap().clone();
        article.author.role = String::new();
        let rendered = render_detail(&ArticleView::from_article(&article));

        let title = "# Scaling Node.js to 1 Million Users\n";
        assert!(rendered.starts_with(title));
        assert!(rendered.contains("Mike Ross (Author)"));
        let heading = rendered.find("## The Database Bottleneck").unwrap();
        let code = rendered.find("```\nconst pool").unwrap();
        assert!(heading < code);
    }
}
