//! External link canonicalization.
//!
//! Each line of a section's `links.txt` is turned into an embeddable URL:
//!
//! - `https://www.youtube.com/watch?v=abc123` → `https://www.youtube.com/embed/abc123`
//! - `https://youtu.be/abc123`                → `https://www.youtube.com/embed/abc123`
//! - `https://vimeo.com/12345`                → `https://player.vimeo.com/video/12345`
//!
//! Anything else — other hosts, malformed lines, YouTube paths that are not
//! `/watch` — passes through unchanged. The `<iframe>` will simply show
//! whatever the URL serves; validating links is deliberately not this tool's
//! job.

/// Rewrite a link into its provider-canonical embed form, or return it
/// unchanged when no provider matches.
pub fn canonicalize(url: &str) -> String {
    let Some((host, path_query)) = split_host(url) else {
        return url.to_string();
    };

    // Hosts compare case-insensitively; "www." and mobile "m." prefixes
    // resolve to the same provider.
    let host = host.to_ascii_lowercase();
    let host = host
        .strip_prefix("www.")
        .or_else(|| host.strip_prefix("m."))
        .unwrap_or(&host);

    match host {
        "youtube.com" => {
            let (path, query) = split_query(path_query);
            if path == "/watch"
                && let Some(id) = query_param(query, "v")
                && !id.is_empty()
            {
                return format!("https://www.youtube.com/embed/{id}");
            }
            url.to_string()
        }
        "youtu.be" => {
            let (path, _) = split_query(path_query);
            let id = path.trim_start_matches('/');
            let id = id.split('/').next().unwrap_or("");
            if id.is_empty() {
                url.to_string()
            } else {
                format!("https://www.youtube.com/embed/{id}")
            }
        }
        "vimeo.com" => {
            let (path, _) = split_query(path_query);
            let id = path.trim_start_matches('/');
            let id = id.split('/').next().unwrap_or("");
            if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
                format!("https://player.vimeo.com/video/{id}")
            } else {
                url.to_string()
            }
        }
        _ => url.to_string(),
    }
}

/// Split `http(s)://host/rest` into `(host, "/rest")`. Returns `None` for
/// anything without an http/https scheme.
fn split_host(url: &str) -> Option<(&str, &str)> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    match rest.find(['/', '?']) {
        Some(idx) => Some((&rest[..idx], &rest[idx..])),
        None => Some((rest, "")),
    }
}

/// Split a path-with-query into `(path, query)`, query without the `?`.
fn split_query(path_query: &str) -> (&str, &str) {
    match path_query.split_once('?') {
        Some((path, query)) => (path, query),
        None => (path_query, ""),
    }
}

/// Look up a single `key=value` pair in a query string.
fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key).then_some(v)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_watch_url() {
        assert_eq!(
            canonicalize("https://www.youtube.com/watch?v=abc123"),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn youtube_watch_without_www() {
        assert_eq!(
            canonicalize("https://youtube.com/watch?v=abc123"),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn youtube_watch_extra_params() {
        assert_eq!(
            canonicalize("https://www.youtube.com/watch?v=abc123&t=42s&list=PL1"),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn youtube_short_url() {
        assert_eq!(
            canonicalize("https://youtu.be/XYZ"),
            "https://www.youtube.com/embed/XYZ"
        );
    }

    #[test]
    fn youtube_short_url_with_timestamp() {
        assert_eq!(
            canonicalize("https://youtu.be/XYZ?t=30"),
            "https://www.youtube.com/embed/XYZ"
        );
    }

    #[test]
    fn youtube_mobile_host() {
        assert_eq!(
            canonicalize("https://m.youtube.com/watch?v=abc"),
            "https://www.youtube.com/embed/abc"
        );
    }

    #[test]
    fn vimeo_numeric_id() {
        assert_eq!(
            canonicalize("https://vimeo.com/12345"),
            "https://player.vimeo.com/video/12345"
        );
    }

    #[test]
    fn vimeo_non_numeric_path_unchanged() {
        assert_eq!(
            canonicalize("https://vimeo.com/about"),
            "https://vimeo.com/about"
        );
    }

    #[test]
    fn unknown_host_unchanged() {
        assert_eq!(
            canonicalize("https://example.com/video.mp4"),
            "https://example.com/video.mp4"
        );
    }

    #[test]
    fn non_url_line_unchanged() {
        assert_eq!(canonicalize("not a url at all"), "not a url at all");
    }

    #[test]
    fn youtube_non_watch_path_unchanged() {
        assert_eq!(
            canonicalize("https://www.youtube.com/channel/UC123"),
            "https://www.youtube.com/channel/UC123"
        );
    }

    #[test]
    fn watch_without_video_id_unchanged() {
        assert_eq!(
            canonicalize("https://www.youtube.com/watch?list=PL1"),
            "https://www.youtube.com/watch?list=PL1"
        );
    }

    #[test]
    fn http_scheme_accepted() {
        assert_eq!(
            canonicalize("http://youtu.be/abc"),
            "https://www.youtube.com/embed/abc"
        );
    }
}
