//! Component-level types: the [`Components`] input for
//! [`Uri::from_components`](crate::Uri::from_components) and the scheme
//! default-port table.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static DEFAULT_PORTS: Lazy<HashMap<&'static str, u16>> = Lazy::new(|| {
    HashMap::from([
        ("http", 80),
        ("https", 443),
        ("ftp", 21),
        ("gopher", 70),
        ("nntp", 119),
        ("news", 119),
        ("telnet", 23),
        ("tn3270", 23),
        ("imap", 143),
        ("pop", 110),
        ("ldap", 389),
    ])
});

/// Returns the registered default port of `scheme`, if it has one.
///
/// # Examples
///
/// ```
/// use uriref::default_port;
///
/// assert_eq!(default_port("https"), Some(443));
/// assert_eq!(default_port("gopher"), Some(70));
/// assert_eq!(default_port("example"), None);
/// ```
pub fn default_port(scheme: &str) -> Option<u16> {
    DEFAULT_PORTS.get(scheme).copied()
}

/// Raw components for building a [`Uri`](crate::Uri) without going through
/// a reference string.
///
/// `None` means the component is absent. For the host, `Some(String::new())`
/// is a present-but-empty host, distinct from no authority at all; this is
/// how `file:///path` is represented.
///
/// # Examples
///
/// ```
/// use uriref::{Components, Uri};
///
/// let uri = Uri::from_components(Components {
///     scheme: Some("https".into()),
///     host: Some("example.com".into()),
///     path: Some("/search".into()),
///     query: Some("q=uri".into()),
///     ..Components::default()
/// })?;
///
/// assert_eq!(uri.to_string(), "https://example.com/search?q=uri");
/// # Ok::<_, uriref::UriError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Components {
    /// Scheme, without the trailing `:`.
    pub scheme: Option<String>,
    /// Userinfo in `user[:password]` form, without the trailing `@`.
    pub userinfo: Option<String>,
    /// Host; `Some(String::new())` is a present-but-empty host.
    pub host: Option<String>,
    /// Port; values outside `1..=65535` are rejected.
    pub port: Option<u32>,
    /// Path.
    pub path: Option<String>,
    /// Query, without the leading `?`.
    pub query: Option<String>,
    /// Fragment, without the leading `#`.
    pub fragment: Option<String>,
}
