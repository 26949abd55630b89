//! Request URL assembly from `(scheme, host, path, query)` parts.

use url::{ParseError, Url};

/// Assembles an absolute URL. `authority` is `host` or `host:port`; query pairs
/// are form-encoded in the order given, and an empty query leaves no `?`.
pub fn build_url<K, V>(
    scheme: &str,
    authority: &str,
    path: &str,
    query: &[(K, V)],
) -> Result<Url, ParseError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = Url::parse(&format!("{scheme}://{authority}"))?;
    url.set_path(path);
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (k.as_ref(), v.as_ref())));
    }
    Ok(url)
}

/// `host[:port]` of a URL; the port only appears when it is explicit and not
/// the scheme default.
pub fn authority(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn pairs(url: &Url) -> BTreeMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn round_trip_preserves_parts() {
        let query = [("q", "star wars"), ("page", "2"), ("sort", "a&b=c")];
        let built = build_url("http", "localhost:8080", "/movies", &query).unwrap();
        let reparsed = Url::parse(built.as_str()).unwrap();

        assert_eq!(reparsed.scheme(), "http");
        assert_eq!(authority(&reparsed), "localhost:8080");
        assert_eq!(reparsed.path(), "/movies");

        let expected: BTreeMap<String, String> = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(pairs(&reparsed), expected);
    }

    #[test]
    fn empty_query_has_no_question_mark() {
        let url = build_url::<&str, &str>("https", "example.com", "/movies/3", &[]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/movies/3");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn default_port_is_dropped_from_authority() {
        let url = Url::parse("https://www.freecodecamp.org:443/someone").unwrap();
        assert_eq!(authority(&url), "www.freecodecamp.org");
    }

    #[test]
    fn bad_authority_is_an_error() {
        assert!(build_url::<&str, &str>("http", "", "/", &[]).is_err());
    }
}
