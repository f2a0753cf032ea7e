//! cURL command import/parsing
//!
//! Turns a pasted curl invocation into a [`ParsedRequest`]. Parsing is a
//! best-effort sniff: callers probe arbitrary text with it (every paste into
//! a URL field), so anything that is not a curl command comes back as `None`
//! instead of an error, and flags outside the recognized table are skipped.

use crate::flags::{self, FlagAccumulation, FlagArity, FlagSpec};
use crate::request::{Body, Method, NamedPair, ParsedRequest};
use crate::shell;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use url::Url;

/// The slice of curl's surface a request form can represent
static CURL_FLAGS: &[FlagSpec] = &[
    FlagSpec {
        name: "request",
        aliases: &["X"],
        arity: FlagArity::Value,
        accumulation: FlagAccumulation::Overwrite,
    },
    FlagSpec {
        name: "get",
        aliases: &["G"],
        arity: FlagArity::Boolean,
        accumulation: FlagAccumulation::Overwrite,
    },
    FlagSpec {
        name: "header",
        aliases: &["H"],
        arity: FlagArity::Value,
        accumulation: FlagAccumulation::Append,
    },
    FlagSpec {
        name: "data",
        aliases: &["d", "data-ascii", "data-raw", "data-urlencode"],
        arity: FlagArity::Value,
        accumulation: FlagAccumulation::Append,
    },
    FlagSpec {
        name: "user",
        aliases: &["u"],
        arity: FlagArity::Value,
        accumulation: FlagAccumulation::Overwrite,
    },
];

/// Parse one curl invocation into a structured request.
///
/// Returns `None` when the input does not look like a curl command: empty
/// input, a first token other than `curl`, no URL argument, a URL that is not
/// absolute, or input the tokenizer rejects outright.
pub fn parse_curl(input: &str) -> Option<ParsedRequest> {
    let tokens = shell::tokenize(input.trim(), true).ok()?;
    let (command, rest) = tokens.split_first()?;
    if command.as_str() != "curl" || rest.is_empty() {
        return None;
    }
    tracing::debug!(tokens = tokens.len(), "tokenized curl candidate");

    let matches = flags::parse(rest, CURL_FLAGS);
    let raw_url = matches.positional().first()?;
    let parsed_url = Url::parse(raw_url).ok()?;

    // Query params embedded in the URL move into the collection; the URL
    // keeps the user's spelling minus its query string.
    let mut search_params: Vec<NamedPair> = parsed_url
        .query_pairs()
        .map(|(name, value)| NamedPair::new(name, value))
        .collect();
    // A `?` inside the fragment is not a query; only strip when the parsed
    // URL actually carries one.
    let url = match raw_url.split_once('?') {
        Some((base, _)) if parsed_url.query().is_some() => base.to_string(),
        _ => raw_url.clone(),
    };

    let mut headers: Vec<NamedPair> = matches
        .all("header")
        .iter()
        .map(|h| split_header(h))
        .collect();
    let content_type = headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case("content-type"))
        .map(|h| h.value.clone());

    if let Some(credentials) = matches.last("user") {
        headers.push(NamedPair::new(
            "Authorization",
            format!("Basic {}", STANDARD.encode(credentials)),
        ));
    }

    let data = matches.all("data");
    let get_forced = matches.is_set("get");

    let method = if get_forced {
        Method::Get
    } else if let Some(token) = matches.last("request") {
        Method::from_token(token)
    } else if !data.is_empty() {
        Method::Post
    } else {
        Method::Get
    };

    let mut body = None;
    if !data.is_empty() {
        if get_forced {
            // -G turns every data entry into a query param, no body
            for entry in data {
                let (name, value) = entry.split_once('=').unwrap_or((entry.as_str(), ""));
                search_params.push(NamedPair::new(name, value));
            }
        } else {
            body = Some(match content_type.as_deref() {
                Some(ct) if ct.eq_ignore_ascii_case("application/json") => {
                    match serde_json::from_str(&data[0]) {
                        Ok(value) => Body::from_json(value),
                        Err(_) => Body::Text(data[0].clone()),
                    }
                }
                Some(_) => Body::Text(data[0].clone()),
                None => {
                    headers.push(NamedPair::new(
                        "content-type",
                        "application/x-www-form-urlencoded",
                    ));
                    Body::Text(form_urlencode_entries(data))
                }
            });
        }
    }

    Some(ParsedRequest {
        url,
        search_params,
        method,
        headers,
        body,
    })
}

/// Split a `Name: Value` header, tolerating whitespace around the separator.
/// A header with no colon keeps its text as the name and an empty value.
fn split_header(header: &str) -> NamedPair {
    match header.split_once(':') {
        Some((name, value)) => NamedPair::new(name.trim(), value.trim()),
        None => NamedPair::new(header.trim(), ""),
    }
}

/// Merge all data entries into one urlencoded body string. Entries with an
/// `=` get their value side percent-encoded, bare entries pass through.
fn form_urlencode_entries(entries: &[String]) -> String {
    entries
        .iter()
        .map(|entry| match entry.split_once('=') {
            Some((name, value)) => format!("{}={}", name, urlencoding::encode(value)),
            None => entry.clone(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bare_get(url: &str) -> ParsedRequest {
        ParsedRequest {
            url: url.to_string(),
            search_params: vec![],
            method: Method::Get,
            headers: vec![],
            body: None,
        }
    }

    #[test]
    fn test_rejects_non_curl_input() {
        assert_eq!(parse_curl(""), None);
        assert_eq!(parse_curl("   "), None);
        assert_eq!(parse_curl("something else"), None);
        assert_eq!(parse_curl("wget https://example.com"), None);
        assert_eq!(parse_curl("curl"), None);
        assert_eq!(parse_curl("curl "), None);
    }

    #[test]
    fn test_rejects_relative_url() {
        assert_eq!(parse_curl("curl /api/users"), None);
        assert_eq!(parse_curl("curl not-a-url"), None);
    }

    #[test]
    fn test_rejects_flags_without_url() {
        assert_eq!(parse_curl("curl -G"), None);
    }

    #[test]
    fn test_tokenizer_failure_is_none() {
        // trailing backslash is an unterminated escape
        assert_eq!(parse_curl("curl https://x \\"), None);
    }

    #[test]
    fn test_quote_tolerance() {
        let expected = bare_get("https://x");
        assert_eq!(parse_curl("curl https://x"), Some(expected.clone()));
        assert_eq!(parse_curl(r#"curl "https://x""#), Some(expected.clone()));
        assert_eq!(parse_curl("curl 'https://x'"), Some(expected.clone()));
        // missing closing quote still parses in loose mode
        assert_eq!(parse_curl(r#"curl "https://x"#), Some(expected));
    }

    #[test]
    fn test_query_moves_into_search_params() {
        let parsed = parse_curl("curl https://x/search?q=rust&page=2&q=again").unwrap();
        assert_eq!(parsed.url, "https://x/search");
        assert_eq!(
            parsed.search_params,
            vec![
                NamedPair::new("q", "rust"),
                NamedPair::new("page", "2"),
                NamedPair::new("q", "again"),
            ]
        );
    }

    #[test]
    fn test_question_mark_in_fragment_is_not_a_query() {
        let parsed = parse_curl("curl https://x/p#f?a=1").unwrap();
        assert_eq!(parsed.url, "https://x/p#f?a=1");
        assert_eq!(parsed.search_params, vec![]);
    }

    #[test]
    fn test_method_last_occurrence_wins() {
        let parsed = parse_curl("curl -X put https://x --request post").unwrap();
        assert_eq!(parsed.method, Method::Post);
    }

    #[test]
    fn test_unknown_method_falls_back_to_get() {
        let parsed = parse_curl("curl -X patch https://x").unwrap();
        assert_eq!(parsed.method, Method::Get);
    }

    #[test]
    fn test_data_defaults_method_to_post() {
        let parsed = parse_curl("curl https://x -d a=1").unwrap();
        assert_eq!(parsed.method, Method::Post);
    }

    #[test]
    fn test_get_flag_turns_data_into_search_params() {
        let parsed = parse_curl("curl --get https://my-url --data limit=3 --data first=0").unwrap();
        assert_eq!(parsed.url, "https://my-url");
        assert_eq!(
            parsed.search_params,
            vec![NamedPair::new("limit", "3"), NamedPair::new("first", "0")]
        );
        assert_eq!(parsed.method, Method::Get);
        assert_eq!(parsed.headers, vec![]);
        assert_eq!(parsed.body, None);
    }

    #[test]
    fn test_get_flag_overrides_request() {
        let parsed = parse_curl("curl -G -X post https://x -d a=1").unwrap();
        assert_eq!(parsed.method, Method::Get);
        assert_eq!(parsed.body, None);
    }

    #[test]
    fn test_get_data_without_equals_gets_empty_value() {
        let parsed = parse_curl("curl -G https://x -d flag").unwrap();
        assert_eq!(parsed.search_params, vec![NamedPair::new("flag", "")]);
    }

    #[test]
    fn test_default_content_type_injected() {
        let parsed = parse_curl(r#"curl https://my-url -d param=1 -d "note=a b""#).unwrap();
        assert_eq!(
            parsed.headers,
            vec![NamedPair::new(
                "content-type",
                "application/x-www-form-urlencoded"
            )]
        );
        assert_eq!(parsed.body, Some(Body::Text("param=1&note=a%20b".to_string())));
        assert_eq!(parsed.method, Method::Post);
    }

    #[test]
    fn test_json_body_is_parsed() {
        let parsed = parse_curl(
            r#"curl https://my-url --header "content-type: application/json" --data '{"param":"value"}'"#,
        )
        .unwrap();
        assert_eq!(parsed.body, Some(Body::Json(json!({"param": "value"}))));
        assert_eq!(
            parsed.headers,
            vec![NamedPair::new("content-type", "application/json")]
        );
    }

    #[test]
    fn test_invalid_json_body_stays_text() {
        let parsed = parse_curl(
            r#"curl https://x -H "content-type: application/json" -d 'not json'"#,
        )
        .unwrap();
        assert_eq!(parsed.body, Some(Body::Text("not json".to_string())));
    }

    #[test]
    fn test_other_content_type_keeps_first_entry_raw() {
        let parsed =
            parse_curl(r#"curl https://x -H "content-type: text/plain" -d hello -d world"#)
                .unwrap();
        assert_eq!(parsed.body, Some(Body::Text("hello".to_string())));
    }

    #[test]
    fn test_header_casing_preserved_detection_insensitive() {
        let parsed = parse_curl(
            r#"curl https://x -H "Content-Type: application/json" -d '{"a":1}'"#,
        )
        .unwrap();
        assert_eq!(
            parsed.headers,
            vec![NamedPair::new("Content-Type", "application/json")]
        );
        assert_eq!(parsed.body, Some(Body::Json(json!({"a": 1}))));
    }

    #[test]
    fn test_header_without_colon_gets_empty_value() {
        let parsed = parse_curl("curl https://x -H X-Token").unwrap();
        assert_eq!(parsed.headers, vec![NamedPair::new("X-Token", "")]);
    }

    #[test]
    fn test_basic_auth_synthesized() {
        let parsed = parse_curl(r#"curl https://my-url.com -u "user:password""#).unwrap();
        assert_eq!(
            parsed.headers,
            vec![NamedPair::new(
                "Authorization",
                "Basic dXNlcjpwYXNzd29yZA=="
            )]
        );
    }

    #[test]
    fn test_basic_auth_after_explicit_headers() {
        let parsed =
            parse_curl(r#"curl https://x -u "login:secret" -H "Accept: text/html""#).unwrap();
        assert_eq!(
            parsed.headers,
            vec![
                NamedPair::new("Accept", "text/html"),
                NamedPair::new("Authorization", "Basic bG9naW46c2VjcmV0"),
            ]
        );
    }

    #[test]
    fn test_multiline_continuation() {
        let parsed = parse_curl("curl \"https://x\" \\\n  --request post \\\n  --header \"Accept: */*\"").unwrap();
        assert_eq!(parsed.method, Method::Post);
        assert_eq!(parsed.headers, vec![NamedPair::new("Accept", "*/*")]);
    }

    #[test]
    fn test_unrecognized_flags_ignored() {
        let parsed = parse_curl("curl -sSL --compressed https://x").unwrap();
        assert_eq!(parsed, bare_get("https://x"));
    }
}
