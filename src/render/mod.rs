//! Server-side HTML for the admin panel and the public site.
//!
//! Every list is rendered whole: one card or row per record, in the order the
//! backend returned them.
use chrono::NaiveDateTime;

pub mod admin;
pub mod public;

pub const PROJECT_PLACEHOLDER: &str = "https://via.placeholder.com/450x350?text=Project+Image";
pub const CLIENT_PLACEHOLDER: &str = "https://via.placeholder.com/150?text=Client";

/// Prefix for image paths the backend serves itself, e.g. `/uploads/a.png`.
#[derive(Debug, Clone, Default)]
pub struct AssetOrigin(String);

impl AssetOrigin {
    pub fn new(origin: String) -> Self {
        Self(origin.trim_end_matches('/').to_string())
    }

    pub fn resolve(&self, image: &str) -> String {
        if image.starts_with("http") {
            image.to_string()
        } else {
            format!("{}{}", self.0, image)
        }
    }
}

/// Safe for element content and double-quoted attribute values.
pub(crate) fn escape(value: &str) -> String {
    htmlescape::encode_minimal(value)
}

/// A record id as one URL path segment.
pub(crate) fn segment(id: &str) -> String {
    escape(&urlencoding::encode(id))
}

/// `<img>` with an inline fallback when the source fails to load.
pub(crate) fn image(origin: &AssetOrigin, source: &str, alt: &str, placeholder: &str) -> String {
    format!(
        r#"<img src="{src}" alt="{alt}" onerror="this.src='{placeholder}'">"#,
        src = escape(&origin.resolve(source)),
        alt = escape(alt),
        placeholder = placeholder,
    )
}

pub(crate) fn no_data(message: &str) -> String {
    format!(r#"<p class="no-data">{}</p>"#, escape(message))
}

pub(crate) fn error_block(message: &str) -> String {
    format!(r#"<p class="error">{}</p>"#, escape(message))
}

pub fn format_date(timestamp: Option<NaiveDateTime>) -> String {
    timestamp
        .map(|t| t.format("%-m/%-d/%Y").to_string())
        .unwrap_or_default()
}

fn document(title: &str, body_class: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
</head>
<body class="{body_class}">
{body}
</body>
</html>
"#,
        title = escape(title),
        body_class = body_class,
        body = body,
    )
}
