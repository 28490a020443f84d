//! Roblox CDN URL check, e.g. `https://t0.rbxcdn.com/<hash>.png`.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static CDN_HOST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{2}\.rbxcdn\.com$").unwrap());

// Not anchored at the start: only the file suffix is constrained.
static CDN_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9A-Za-z\-/]*\.(png|webp)?$").unwrap());

/// `url` drops a port equal to the scheme default, so an explicit `:443`
/// only shows up in the raw authority.
fn has_explicit_port(url: &str) -> bool {
    let Some((_, rest)) = url.split_once("://") else {
        return false;
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    host_port.contains(':')
}

/// True for plain `https` URLs on a two-character `rbxcdn.com` host whose path
/// ends in `.png`, `.webp` or a bare `.`. Anything unparsable is false.
pub fn is_roblox_cdn_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    if parsed.port().is_some() || has_explicit_port(url) {
        return false;
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return false;
    }
    if parsed.scheme() != "https" {
        return false;
    }

    let host_ok = parsed.host_str().is_some_and(|h| CDN_HOST_RE.is_match(h));
    host_ok && CDN_PATH_RE.is_match(parsed.path())
}
