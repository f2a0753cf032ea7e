//! Curl command generation
//!
//! Renders a [`ParsedRequest`] as a copy-pasteable, multi-line curl command.
//! The output is deterministic and parses back to an equal request through
//! [`parse_curl`]: the method is always emitted explicitly so it survives the
//! round trip, and the body is quoted through its JSON string form so
//! embedded newlines stay on one argument.
//!
//! [`parse_curl`]: crate::curl::parse_curl

use crate::literal;
use crate::request::{Body, ParsedRequest};

/// Generate an equivalent curl command for the request
pub fn generate_curl(request: &ParsedRequest) -> String {
    let mut url = request.url.clone();
    if !request.search_params.is_empty() {
        let query: Vec<String> = request
            .search_params
            .iter()
            .map(|p| {
                format!(
                    "{}={}",
                    urlencoding::encode(&p.name),
                    urlencoding::encode(&p.value)
                )
            })
            .collect();
        url.push('?');
        url.push_str(&query.join("&"));
    }

    let mut lines = vec![format!("curl {}", quote_argument(&url))];
    lines.push(format!("--request {}", request.method));

    for header in &request.headers {
        lines.push(format!(
            "--header {}",
            quote_argument(&format!("{}: {}", header.name, header.value))
        ));
    }

    if let Some(body) = &request.body {
        let text = match body {
            Body::Text(text) => text.clone(),
            Body::Json(value) => literal::to_source_text(value),
        };
        lines.push(format!("--data {}", quote_argument(&text)));
    }

    lines.join(" \\\n  ")
}

/// Double-quote a shell argument through its JSON string form, so embedded
/// quotes, backslashes and newlines land as escapes inside one token.
fn quote_argument(argument: &str) -> String {
    serde_json::to_string(argument).unwrap_or_default()
}
