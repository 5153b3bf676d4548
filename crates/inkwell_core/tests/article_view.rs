use inkwell_core::{
    resolve_author_role, resolve_subtitle, ArticleStore, ArticleView, DEFAULT_AUTHOR_ROLE,
};

#[test]
fn view_uses_subtitle_when_present() {
    let store = ArticleStore::seed().unwrap();
    let article = store.get("2").unwrap();

    let view = ArticleView::from_article(article);
    assert_eq!(view.id(), "2");
    assert_eq!(
        view.subtitle,
        "Real-world lessons from the trenches of high-scale architecture."
    );
    assert_eq!(view.author_role, "CTO");
    assert_eq!(view.blocks().len(), 5);
}

#[test]
fn missing_or_blank_subtitle_falls_back_to_excerpt() {
    let store = ArticleStore::seed().unwrap();
    let mut article = store.get("5").unwrap().clone();

    article.subtitle = None;
    assert_eq!(resolve_subtitle(&article), article.excerpt);

    article.subtitle = Some("   ".to_string());
    assert_eq!(resolve_subtitle(&article), article.excerpt);
}

#[test]
fn blank_author_role_falls_back_to_default_label() {
    let store = ArticleStore::seed().unwrap();
    let mut article = store.get("7").unwrap().clone();
    assert_eq!(resolve_author_role(&article.author), "AI Lead");

    article.author.role = String::new();
    assert_eq!(resolve_author_role(&article.author), DEFAULT_AUTHOR_ROLE);

    let view = ArticleView::from_article(&article);
    assert_eq!(view.author_role, "Author");
    assert_eq!(view.title(), "The AI Tools We Actually Use");
}
