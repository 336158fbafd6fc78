//! Reference resolution (RFC 3986, Section 5) and its approximate inverse.

use crate::{component, Uri};

/// Resolves `reference` against `base` into a target URI, per the algorithm
/// of [Section 5.2 of RFC 3986][resolution].
///
/// [resolution]: https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2
///
/// The empty reference returns `base` unchanged, fragment included. A
/// reference with a scheme is returned with only its path dot-normalized.
/// Unlike the strict RFC algorithm, the base is not required to be
/// absolute: resolving against a relative base yields another relative
/// reference.
///
/// # Examples
///
/// ```
/// use uriref::{resolve, Uri};
///
/// let base = Uri::parse("http://a/b/c/d;p?q")?;
///
/// let resolve_str = |r| resolve(&base, &Uri::parse(r).unwrap()).to_string();
/// assert_eq!(resolve_str("g;x=1/../y"), "http://a/b/c/y");
/// assert_eq!(resolve_str("?y"), "http://a/b/c/d;p?y");
/// assert_eq!(resolve_str("../../g"), "http://a/g");
/// # Ok::<_, uriref::UriError>(())
/// ```
pub fn resolve(base: &Uri, reference: &Uri) -> Uri {
    if reference.is_empty_reference() {
        return base.clone();
    }

    if !reference.scheme.is_empty() {
        let mut target = reference.clone();
        target.path = remove_dot_segments(&target.path);
        return recompose(target);
    }

    let mut target = Uri {
        scheme: base.scheme.clone(),
        fragment: reference.fragment.clone(),
        ..Uri::default()
    };

    if reference.has_authority() {
        target.userinfo = reference.userinfo.clone();
        target.host = reference.host.clone();
        target.port = reference.port;
        target.path = remove_dot_segments(&reference.path);
        target.query = reference.query.clone();
    } else {
        target.userinfo = base.userinfo.clone();
        target.host = base.host.clone();
        target.port = base.port;
        if reference.path.is_empty() {
            target.path = base.path.clone();
            target.query = match reference.query.as_deref() {
                Some(query) if !query.is_empty() => reference.query.clone(),
                _ => base.query.clone(),
            };
        } else {
            let merged = if reference.path.starts_with('/') {
                reference.path.clone()
            } else {
                merge(base, &reference.path)
            };
            target.path = remove_dot_segments(&merged);
            target.query = reference.query.clone();
        }
    }
    recompose(target)
}

/// Applies the recomposition fixups that keep a directly-assembled target
/// reparse-stable, mirroring Section 5.3 of RFC 3986.
fn recompose(mut target: Uri) -> Uri {
    if target.port.is_some() && target.port == component::default_port(&target.scheme) {
        target.port = None;
    }
    if target.has_authority() {
        if !target.path.is_empty() && !target.path.starts_with('/') {
            target.path.insert(0, '/');
        }
    } else if target.path.starts_with("//") {
        // reduce the leading slashes to one; the path would otherwise be
        // reparsed as an authority
        let trimmed = target.path.trim_start_matches('/');
        target.path = format!("/{trimmed}");
    }
    if target.scheme.is_empty() && !target.has_authority() {
        let first = target.path.split('/').next().unwrap_or("");
        if first.contains(':') {
            // a leading "segment:" would be reparsed as a scheme
            target.path.insert_str(0, "./");
        }
    }
    target
}

/// Merges a relative-path reference with the base path, per
/// [Section 5.2.3 of RFC 3986][merge].
///
/// [merge]: https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.3
fn merge(base: &Uri, reference_path: &str) -> String {
    if base.has_authority() && base.path.is_empty() {
        return format!("/{reference_path}");
    }
    match base.path.rfind('/') {
        Some(i) => format!("{}{}", &base.path[..=i], reference_path),
        None => reference_path.to_owned(),
    }
}

/// Removes the `.` and `..` segments from a path, per
/// [Section 5.2.4 of RFC 3986][remove-dot-segments].
///
/// [remove-dot-segments]: https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.4
///
/// Runs in a single pass over the input, so adversarial inputs full of
/// `../` stay linear.
///
/// # Examples
///
/// ```
/// use uriref::remove_dot_segments;
///
/// assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
/// ```
pub fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());
    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            pop_segment(&mut output);
        } else if input == "/.." {
            input = "/";
            pop_segment(&mut output);
        } else if input == "." || input == ".." {
            input = "";
        } else {
            let end = match input.strip_prefix('/') {
                Some(rest) => rest.find('/').map(|i| i + 1),
                None => input.find('/'),
            }
            .unwrap_or(input.len());
            output.push_str(&input[..end]);
            input = &input[end..];
        }
    }
    output
}

/// Removes the last segment and its preceding `/`, if any, from the output
/// buffer.
fn pop_segment(output: &mut String) {
    match output.rfind('/') {
        Some(i) => output.truncate(i),
        None => output.clear(),
    }
}

/// Returns a reference that [`resolve`]d against `base` yields `target`,
/// as relative as the components allow.
///
/// This is the approximate inverse of [`resolve`]: the round-trip
/// `resolve(base, &relativize(base, target)) == target` always holds, but
/// the returned string is not unique (`.` and `./` are equivalent, for
/// instance).
///
/// A target with a different scheme is returned unchanged; one with the
/// same scheme but a different authority is returned as a network-path
/// reference; a target that is already a relative-path reference is
/// returned as-is.
///
/// # Examples
///
/// ```
/// use uriref::{relativize, Uri};
///
/// let base = Uri::parse("http://a/b/")?;
/// let target = Uri::parse("http://a/x/y")?;
/// assert_eq!(relativize(&base, &target).to_string(), "../x/y");
/// # Ok::<_, uriref::UriError>(())
/// ```
pub fn relativize(base: &Uri, target: &Uri) -> Uri {
    if !target.scheme.is_empty()
        && (target.scheme != base.scheme || (!target.has_authority() && base.has_authority()))
    {
        return target.clone();
    }
    if target.is_relative_path_reference() {
        return target.clone();
    }
    if target.has_authority() && !same_authority(base, target) {
        let mut network_path = target.clone();
        network_path.scheme = String::new();
        return network_path;
    }

    // scheme and authority are dropped from here on
    let fragment = target.fragment.clone();
    if base.path != target.path {
        let candidate = relative(relative_path(base, target), target.query.clone(), fragment);
        // Climbing out of a rootless base path cannot always be undone by
        // dot-segment removal; keep the candidate only when it resolves
        // back to the target.
        if resolve(base, &candidate) == resolve(base, target) {
            return candidate;
        }
        return target.clone();
    }
    if base.query == target.query {
        return relative(String::new(), None, fragment);
    }
    if target.query_str().is_empty() {
        // an empty path must not be used: resolving it would inherit the
        // base query
        let last = target.path.rsplit('/').next().unwrap_or("");
        let path = if last.is_empty() {
            String::from("./")
        } else {
            last.to_owned()
        };
        return relative(path, target.query.clone(), fragment);
    }
    relative(String::new(), target.query.clone(), fragment)
}

fn same_authority(a: &Uri, b: &Uri) -> bool {
    a.userinfo == b.userinfo && a.host == b.host && a.port == b.port
}

fn relative(path: String, query: Option<String>, fragment: Option<String>) -> Uri {
    Uri {
        scheme: String::new(),
        userinfo: String::new(),
        host: None,
        port: None,
        path,
        query,
        fragment,
    }
}

/// Computes the relative-path form of `target.path` as seen from
/// `base.path`: `../` for each base directory segment past the longest
/// shared prefix, then the remaining target segments.
fn relative_path(base: &Uri, target: &Uri) -> String {
    let mut source: Vec<&str> = base.path.split('/').collect();
    let mut remaining: Vec<&str> = target.path.split('/').collect();
    source.pop();
    let last = remaining.pop().unwrap_or("");

    let mut shared = 0;
    while shared < source.len()
        && shared < remaining.len()
        && source[shared] == remaining[shared]
    {
        shared += 1;
    }

    let mut rel = "../".repeat(source.len() - shared);
    let mut tail = remaining.split_off(shared);
    tail.push(last);
    rel.push_str(&tail.join("/"));

    // An empty result or a leading "segment:" must be anchored with "./".
    // A leading "/" must be anchored too, except that a base which is an
    // authority with an empty path grows that slash back in resolve().
    if rel.is_empty() || rel.split('/').next().unwrap_or("").contains(':') {
        format!("./{rel}")
    } else if rel.starts_with('/') {
        if base.has_authority() && base.path.is_empty() {
            format!(".{rel}")
        } else {
            format!("./{rel}")
        }
    } else {
        rel
    }
}
