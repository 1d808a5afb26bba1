//! Landing page content

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::DocumentMetadata;

/// Generates the landing page body, before the shell wraps it.
pub fn home_content(metadata: &DocumentMetadata, places_endpoint: &str) -> String {
    format!(
        r#"<main class="container">
    <section class="hero">
        <h1>BIAIA</h1>
        <p>{description}</p>
    </section>
    <section class="nearby" data-places-endpoint="{places_endpoint}">
        <h2>Support near you</h2>
        <p>Share your location to find clinics, pharmacies and parenting groups nearby.</p>
    </section>
</main>"#,
        description = encode_text(&metadata.description),
        places_endpoint = encode_double_quoted_attribute(places_endpoint),
    )
}
