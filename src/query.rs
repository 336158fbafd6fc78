//! Helpers over the query string as an ordered sequence of `key[=value]`
//! pairs.

use crate::{encoding, Uri, UriError};

impl Uri {
    /// Returns a new `Uri` with `key` set to `value` in the query string.
    ///
    /// The query is an ordered sequence of `key[=value]` pairs; keys may
    /// repeat. A key matches whether it is spelled encoded or decoded, in
    /// either hex case. The first matching pair is updated in place and any
    /// later duplicates are dropped; a new key is appended. A `None` value
    /// produces a bare key without `=`.
    ///
    /// # Errors
    ///
    /// Returns [`UriError::InvalidComponentType`] for non-textual input.
    ///
    /// # Examples
    ///
    /// ```
    /// use uriref::Uri;
    ///
    /// let uri = Uri::default()
    ///     .with_query_value("a", Some("b"))?
    ///     .with_query_value("c", Some("d"))?
    ///     .with_query_value("e", None)?;
    /// assert_eq!(uri.query(), Some("a=b&c=d&e"));
    ///
    /// let uri = uri.with_query_value("a", Some("x"))?;
    /// assert_eq!(uri.query(), Some("a=x&c=d&e"));
    /// # Ok::<_, uriref::UriError>(())
    /// ```
    pub fn with_query_value(self, key: &str, value: Option<&str>) -> Result<Uri, UriError> {
        let decoded_key = encoding::decode(key);
        let pair = encode_pair(key, value);
        let mut parts: Vec<String> = Vec::new();
        let mut replaced = false;
        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            for part in query.split('&') {
                if matches_key(part, &decoded_key) {
                    if !replaced {
                        parts.push(pair.clone());
                        replaced = true;
                    }
                } else {
                    parts.push(part.to_owned());
                }
            }
        }
        if !replaced {
            parts.push(pair);
        }
        self.with_query(&parts.join("&"))
    }

    /// Returns a new `Uri` with every query pair whose key matches `key`
    /// removed.
    ///
    /// Key matching works as in [`with_query_value`](Self::with_query_value).
    ///
    /// # Errors
    ///
    /// Returns [`UriError::InvalidComponentType`] for non-textual input.
    ///
    /// # Examples
    ///
    /// ```
    /// use uriref::Uri;
    ///
    /// let uri = Uri::default().with_query("a=b&c=d&a=e")?;
    /// let uri = uri.without_query_value("a")?;
    /// assert_eq!(uri.query(), Some("c=d"));
    /// # Ok::<_, uriref::UriError>(())
    /// ```
    pub fn without_query_value(self, key: &str) -> Result<Uri, UriError> {
        let decoded_key = encoding::decode(key);
        let next = match self.query.as_deref().filter(|q| !q.is_empty()) {
            Some(query) => query
                .split('&')
                .filter(|part| !matches_key(part, &decoded_key))
                .collect::<Vec<_>>()
                .join("&"),
            None => return Ok(self),
        };
        self.with_query(&next)
    }
}

fn matches_key(part: &str, decoded_key: &[u8]) -> bool {
    let key = part.split('=').next().unwrap_or("");
    encoding::decode(key) == decoded_key
}

/// Pre-encodes only the pair separators; everything else is handled by the
/// query normalization in `with_query` without double-encoding.
fn encode_pair(key: &str, value: Option<&str>) -> String {
    let mut pair = escape_separators(key);
    if let Some(value) = value {
        pair.push('=');
        pair.push_str(&escape_separators(value));
    }
    pair
}

fn escape_separators(s: &str) -> String {
    s.replace('=', "%3D").replace('&', "%26")
}
