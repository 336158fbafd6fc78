//! Splitting of a URI reference string into its raw components.

use crate::{encoding, error::UriError};

pub(crate) struct RawParts<'a> {
    pub scheme: Option<&'a str>,
    pub authority: Option<RawAuthority<'a>>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

pub(crate) struct RawAuthority<'a> {
    pub userinfo: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<u16>,
}

// Scheme names here may begin with a digit, slightly wider than Section 3.1
// of RFC 3986: references like "0://0:0@0/0" must keep "0" as their scheme.
fn is_scheme_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Splits a reference into scheme, authority, path, query, and fragment.
///
/// The fragment starts at the first `#`, the query at the first `?` before
/// it. A scheme is a leading run of scheme characters terminated by `:`;
/// since `/` is not a scheme character, `a/b:c` has no scheme. An authority
/// is announced by a leading `//` in what remains and runs to the next `/`
/// or the end.
pub(crate) fn split(s: &str) -> Result<RawParts<'_>, UriError> {
    let malformed = || UriError::MalformedReference {
        input: s.to_owned(),
    };

    if encoding::has_control(s) {
        return Err(malformed());
    }

    let (rest, fragment) = match s.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (s, None),
    };
    let (rest, query) = match rest.split_once('?') {
        Some((rest, query)) => (rest, Some(query)),
        None => (rest, None),
    };

    let (scheme, rest) = match rest.find(':') {
        Some(i) if i > 0 && rest.as_bytes()[..i].iter().copied().all(is_scheme_byte) => {
            (Some(&rest[..i]), &rest[i + 1..])
        }
        _ => (None, rest),
    };

    let (authority, path) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find('/').unwrap_or(after.len());
            let (section, path) = after.split_at(end);
            if section.is_empty() && path.is_empty() {
                return Err(malformed());
            }
            (Some(split_authority(section, s)?), path)
        }
        None => (None, rest),
    };

    // "//" followed by nothing usable cannot round-trip through its
    // canonical form
    if let Some(authority) = &authority {
        if authority.host.is_empty()
            && authority.userinfo.map_or(true, str::is_empty)
            && authority.port.is_none()
            && path.is_empty()
        {
            return Err(malformed());
        }
    }

    Ok(RawParts {
        scheme,
        authority,
        path,
        query,
        fragment,
    })
}

/// Splits an authority section into userinfo, host, and port.
///
/// The userinfo ends at the *last* `@`, so it may itself contain `@` and
/// `:`. A bracketed `[...]` host keeps its colons and may only be followed
/// by `:port`; otherwise the port is the suffix of the last `:` that is
/// non-empty and all digits, and a `:` remaining in the host is an error.
fn split_authority<'a>(section: &'a str, input: &str) -> Result<RawAuthority<'a>, UriError> {
    let malformed = || UriError::MalformedReference {
        input: input.to_owned(),
    };

    let (userinfo, host_port) = match section.rfind('@') {
        Some(i) => (Some(&section[..i]), &section[i + 1..]),
        None => (None, section),
    };

    let (host, port_token) = if host_port.starts_with('[') {
        let close = host_port.rfind(']').ok_or_else(malformed)?;
        let rest = &host_port[close + 1..];
        if rest.is_empty() {
            (&host_port[..=close], None)
        } else if let Some(token) = rest.strip_prefix(':') {
            (&host_port[..=close], Some(token))
        } else {
            return Err(malformed());
        }
    } else {
        match host_port.rfind(':') {
            Some(i)
                if !host_port[i + 1..].is_empty()
                    && host_port.as_bytes()[i + 1..]
                        .iter()
                        .all(u8::is_ascii_digit) =>
            {
                (&host_port[..i], Some(&host_port[i + 1..]))
            }
            Some(_) => return Err(malformed()),
            None => (host_port, None),
        }
    };

    if !host.starts_with('[') && host.contains(':') {
        return Err(malformed());
    }

    let port = match port_token {
        Some(token) => Some(parse_port(token, input)?),
        None => None,
    };

    Ok(RawAuthority {
        userinfo,
        host,
        port,
    })
}

fn parse_port(token: &str, input: &str) -> Result<u16, UriError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UriError::MalformedReference {
            input: input.to_owned(),
        });
    }
    let port: u32 = token.parse().map_err(|_| UriError::MalformedReference {
        input: input.to_owned(),
    })?;
    if (1..=65535).contains(&port) {
        Ok(port as u16)
    } else {
        Err(UriError::InvalidPort { port })
    }
}
