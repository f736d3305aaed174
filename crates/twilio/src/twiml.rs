//! TwiML rendering for webhook replies.

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render a single-message response, with an optional media attachment.
#[must_use]
pub fn message_response(body: &str, media_url: Option<&str>) -> String {
    let mut xml =
        String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message><Body>");
    xml.push_str(&escape(body));
    xml.push_str("</Body>");
    if let Some(url) = media_url {
        xml.push_str("<Media>");
        xml.push_str(&escape(url));
        xml.push_str("</Media>");
    }
    xml.push_str("</Message></Response>");
    xml
}
