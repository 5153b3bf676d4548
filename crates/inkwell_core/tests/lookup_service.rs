use inkwell_core::{ArticleStore, LookupError, LookupService, DEFAULT_FALLBACK_ID};

#[test]
fn find_by_id_returns_exact_match_or_none() {
    let store = ArticleStore::seed().unwrap();
    let lookup = LookupService::new(&store);

    assert_eq!(lookup.find_by_id("4").unwrap().category, "AI Tools");
    assert!(lookup.find_by_id("999").is_none());
    assert!(lookup.find_by_id(" 4").is_none());
    assert!(lookup.find_by_id("").is_none());
}

#[test]
fn resolve_or_default_prefers_requested_article() {
    let store = ArticleStore::seed().unwrap();
    let lookup = LookupService::new(&store);

    let article = lookup.resolve_or_default("6", DEFAULT_FALLBACK_ID).unwrap();
    assert_eq!(article.id, "6");
}

#[test]
fn resolve_or_default_falls_back_for_unknown_id() {
    let store = ArticleStore::seed().unwrap();
    let lookup = LookupService::new(&store);

    let article = lookup.resolve_or_default("999", "1").unwrap();
    assert_eq!(article.id, "1");
}

#[test]
fn resolve_or_default_is_total_when_fallback_exists() {
    let store = ArticleStore::seed().unwrap();
    let lookup = LookupService::new(&store);

    let long_id = "9".repeat(4096);
    let odd_ids = [
        "",
        " ",
        "0",
        "01",
        "-1",
        "../etc/passwd",
        "%20",
        "<script>",
        "記事",
        "1\n",
        long_id.as_str(),
    ];
    for id in odd_ids {
        let article = lookup
            .resolve_or_default(id, DEFAULT_FALLBACK_ID)
            .unwrap_or_else(|err| panic!("id {id:?} should resolve: {err}"));
        assert_eq!(article.id, DEFAULT_FALLBACK_ID);
    }

    for known in store.ids() {
        assert_eq!(lookup.resolve_or_default(known, "1").unwrap().id, known);
    }
}

#[test]
fn resolve_or_default_fails_when_fallback_missing() {
    let store = ArticleStore::seed().unwrap();
    let lookup = LookupService::new(&store);

    let err = lookup.resolve_or_default("999", "404").unwrap_err();
    assert_eq!(
        err,
        LookupError::NotFound {
            id: "999".to_string(),
            fallback_id: "404".to_string(),
        }
    );
    assert!(err.to_string().contains("`404`"));
}

#[test]
fn lookup_does_not_need_the_fallback_when_id_exists() {
    let store = ArticleStore::seed().unwrap();
    let lookup = LookupService::new(&store);

    let article = lookup.resolve_or_default("3", "missing").unwrap();
    assert_eq!(article.id, "3");
}
