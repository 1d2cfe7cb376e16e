use url::Url;

use crate::domain::{Credentials, Params};

pub const ACCEPT_CHARSET: (&str, &str) = ("Accept-Charset", "utf-8");
pub const ACCEPT_LANGUAGE: (&str, &str) = ("Accept-Language", "en-us");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Every verb except GET carries a form body (possibly empty).
    pub fn has_form_body(self) -> bool {
        !matches!(self, Self::Get)
    }
}

/// A fully prepared request, independent of the HTTP client used to send it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    /// Form-urlencoded body; `None` for GET.
    pub form: Option<String>,
}

/// Join `path` onto `base` (a normalized base URL, see [`normalize_base_url`]) and attach
/// headers, query and form body.
///
/// The query string is only set when `query` is non-empty.
pub fn build_request(
    credentials: &Credentials,
    base: &str,
    method: HttpMethod,
    path: &str,
    query: Option<&Params>,
    form: Option<&Params>,
) -> Result<HttpRequest, url::ParseError> {
    let mut url = Url::parse(base)?.join(path.trim_start_matches('/'))?;
    match query {
        Some(query) if !query.is_empty() => url.set_query(Some(&query.encode())),
        _ => url.set_query(None),
    }

    let mut headers = vec![
        (ACCEPT_CHARSET.0, ACCEPT_CHARSET.1.to_owned()),
        (ACCEPT_LANGUAGE.0, ACCEPT_LANGUAGE.1.to_owned()),
    ];
    headers.extend(credentials.headers());

    let form = method
        .has_form_body()
        .then(|| form.map(Params::encode).unwrap_or_default());

    Ok(HttpRequest {
        method,
        url,
        headers,
        form,
    })
}

/// Normalize a base URL so relative paths join below it rather than replacing its last
/// segment.
pub fn normalize_base_url(input: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(input.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
