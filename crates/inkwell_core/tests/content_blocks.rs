use inkwell_core::{ContentBlock, ContentBlockError};
use serde_json::json;

#[test]
fn blocks_deserialize_into_typed_variants() {
    let value = json!([
        { "type": "p", "text": "Body" },
        { "type": "h2", "text": "Heading" },
        { "type": "quote", "text": "Quoted" },
        { "type": "img", "src": "https://example.com/a.png", "caption": "Figure" },
        { "type": "img", "src": "https://example.com/b.png" },
        { "type": "code", "code": "const pool = new Pool({\n  max: 20,\n});" }
    ]);

    let blocks: Vec<ContentBlock> = serde_json::from_value(value).unwrap();
    assert_eq!(
        blocks,
        vec![
            ContentBlock::paragraph("Body"),
            ContentBlock::heading("Heading"),
            ContentBlock::quote("Quoted"),
            ContentBlock::image("https://example.com/a.png", Some("Figure".to_string())),
            ContentBlock::image("https://example.com/b.png", None),
            ContentBlock::code("const pool = new Pool({\n  max: 20,\n});"),
        ]
    );
    let tags = blocks
        .iter()
        .map(ContentBlock::block_type)
        .collect::<Vec<_>>();
    assert_eq!(tags, vec!["p", "h2", "quote", "img", "img", "code"]);
}

#[test]
fn serialization_uses_type_tag_and_omits_missing_caption() {
    let src = "https://example.com/a.png";
    let json = serde_json::to_value(ContentBlock::image(src, None)).unwrap();
    assert_eq!(json, json!({ "type": "img", "src": src }));

    let json = serde_json::to_value(ContentBlock::code("  let x = 1;\n")).unwrap();
    assert_eq!(json, json!({ "type": "code", "code": "  let x = 1;\n" }));
}

#[test]
fn code_is_kept_verbatim() {
    let raw = "<div>&amp;</div>\n\t  indented";
    let value = json!({ "type": "code", "code": raw });
    let block: ContentBlock = serde_json::from_value(value).unwrap();
    assert_eq!(block, ContentBlock::code(raw));
}

#[test]
fn deserialize_rejects_missing_required_field() {
    let err = serde_json::from_value::<ContentBlock>(json!({ "type": "p" })).unwrap_err();
    assert!(
        err.to_string().contains("`p` block requires a non-empty `text`"),
        "unexpected error: {err}"
    );

    let err = serde_json::from_value::<ContentBlock>(json!({ "type": "img", "caption": "x" }))
        .unwrap_err();
    assert!(err.to_string().contains("`src`"), "unexpected error: {err}");
}

#[test]
fn deserialize_rejects_field_belonging_to_another_variant() {
    // `text` does not satisfy a code block.
    let value = json!({ "type": "code", "text": "x" });
    let err = serde_json::from_value::<ContentBlock>(value).unwrap_err();
    assert!(err.to_string().contains("`code`"), "{err}");
}

#[test]
fn deserialize_rejects_unknown_type() {
    let err = serde_json::from_value::<ContentBlock>(json!({ "type": "h3", "text": "x" }))
        .unwrap_err();
    assert!(err.to_string().contains("unknown content block type `h3`"));
}

#[test]
fn validate_rejects_blank_fields_on_code_built_blocks() {
    assert_eq!(
        ContentBlock::quote("   ").validate().unwrap_err(),
        ContentBlockError::MissingField {
            block_type: "quote",
            field: "text",
        }
    );
    assert_eq!(
        ContentBlock::image("", None).validate().unwrap_err(),
        ContentBlockError::MissingField {
            block_type: "img",
            field: "src",
        }
    );
    assert_eq!(
        ContentBlock::image("images/local.png", None)
            .validate()
            .unwrap_err(),
        ContentBlockError::InvalidUrl {
            value: "images/local.png".to_string(),
        }
    );
    assert!(ContentBlock::heading("Fine").validate().is_ok());
}

#[test]
fn text_accessor_covers_prose_variants_only() {
    assert_eq!(ContentBlock::paragraph("a").text(), Some("a"));
    assert_eq!(ContentBlock::heading("b").text(), Some("b"));
    assert_eq!(ContentBlock::quote("c").text(), Some("c"));
    assert_eq!(ContentBlock::code("d").text(), None);
    let image = ContentBlock::image("https://example.com/e.png", None);
    assert_eq!(image.text(), None);
}
