//! Base HTML document with metadata and global assets

use html_escape::{encode_double_quoted_attribute as attr, encode_text};

/// Document-level metadata rendered into `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub title: String,
    pub description: String,
    pub generator: String,
    pub icon_url: String,
    pub icon_type: String,
    pub lang: String,
    /// Class applied to `<body>` selecting the site font
    pub body_class: String,
    pub stylesheet: String,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            title: "BIAIA - Pregnancy Support Platform".to_string(),
            description: "A comprehensive support platform for pregnant individuals".to_string(),
            generator: "v0.dev".to_string(),
            icon_url: "/favicon.png".to_string(),
            icon_type: "image/png".to_string(),
            lang: "en".to_string(),
            body_class: "font-inter".to_string(),
            stylesheet: "/static/globals.css".to_string(),
        }
    }
}

/// Generates the full HTML document around an already wrapped body.
///
/// Metadata values are escaped; `root_attributes` and `body` are inserted as
/// markup.
pub fn base_document(metadata: &DocumentMetadata, root_attributes: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}" {root_attributes}>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <meta name="description" content="{description}">
    <meta name="generator" content="{generator}">
    <link rel="icon" href="{icon_url}" type="{icon_type}">
    <link rel="stylesheet" href="{stylesheet}">
</head>
<body class="{body_class}">
{body}
</body>
</html>"#,
        lang = attr(&metadata.lang),
        title = encode_text(&metadata.title),
        description = attr(&metadata.description),
        generator = attr(&metadata.generator),
        icon_url = attr(&metadata.icon_url),
        icon_type = attr(&metadata.icon_type),
        stylesheet = attr(&metadata.stylesheet),
        body_class = attr(&metadata.body_class),
    )
}
