//! Session cookie store scoped by the public suffix list

use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::HeaderValue;
use url::Url;

/// Cookie jar that refuses cookies scoped to a public suffix
///
/// A `Domain=com` cookie set by prottapp.com would otherwise be sent to every
/// `.com` host. Such a cookie is dropped, unless the suffix is the host itself,
/// in which case it is kept as a host-only cookie.
#[derive(Default)]
pub struct SessionJar {
    inner: Jar,
}

impl CookieStore for SessionJar {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        let host = url.host_str().unwrap_or_default();
        for header in cookie_headers {
            let Ok(set_cookie) = header.to_str() else {
                continue;
            };
            if let Some(set_cookie) = scope_cookie(set_cookie, host) {
                self.inner.add_cookie_str(&set_cookie, url);
            }
        }
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        self.inner.cookies(url)
    }
}

/// Apply public suffix rules to a Set-Cookie value received from `host`
fn scope_cookie(set_cookie: &str, host: &str) -> Option<String> {
    let mut cookie = cookie::Cookie::parse(set_cookie).ok()?;

    let Some(domain) = cookie.domain() else {
        return Some(set_cookie.to_string());
    };
    let domain = domain.trim_start_matches('.').to_ascii_lowercase();

    if psl::suffix_str(&domain) != Some(domain.as_str()) {
        return Some(set_cookie.to_string());
    }
    if !domain.eq_ignore_ascii_case(host) {
        return None;
    }
    cookie.unset_domain();
    Some(cookie.to_string())
}
