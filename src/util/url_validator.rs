use thiserror::Error;
use url::Url;

/// Errors that can occur while validating the upstream base URL.
#[derive(Error, Debug)]
pub enum BaseUrlError {
    /// The URL string could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The URL uses a scheme other than http or https.
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
    /// Plain HTTP was requested for a non-local host.
    #[error("Insecure base URL: HTTPS required (except localhost for testing)")]
    Insecure,
    /// The URL carries a query string or fragment that would corrupt request paths.
    #[error("Base URL must not contain a query or fragment")]
    HasQueryOrFragment,
}

/// Validates the base URL that upstream requests are built from.
///
/// HTTPS is required. Plain HTTP is accepted only for `localhost` and
/// loopback addresses so that tests can point the gateway at a mock server.
/// A trailing slash is trimmed so that paths can be appended with `/`.
///
/// # Examples
///
/// ```
/// use hn_gateway::util::validate_base_url;
///
/// let url = validate_base_url("https://api.hnpwa.com/v0/").unwrap();
/// assert_eq!(url, "https://api.hnpwa.com/v0");
///
/// assert!(validate_base_url("http://api.hnpwa.com/v0").is_err());
/// assert!(validate_base_url("http://127.0.0.1:8080").is_ok());
/// ```
pub fn validate_base_url(url_str: &str) -> Result<String, BaseUrlError> {
    let url = Url::parse(url_str)?;

    if url.query().is_some() || url.fragment().is_some() {
        return Err(BaseUrlError::HasQueryOrFragment);
    }

    match url.scheme() {
        "https" => {}
        "http" => {
            if !is_local_host(&url) {
                return Err(BaseUrlError::Insecure);
            }
            tracing::warn!(base_url = %url, "Using non-HTTPS upstream base URL (localhost only)");
        }
        scheme => return Err(BaseUrlError::UnsupportedScheme(scheme.to_owned())),
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

fn is_local_host(url: &Url) -> bool {
    match url.host() {
        Some(url::Host::Domain(domain)) => domain == "localhost",
        Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
        Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}
