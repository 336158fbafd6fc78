use thiserror::Error;

/// The closed set of errors raised by this crate.
///
/// Every error is detected synchronously at the call that triggers it;
/// no failure is deferred to [`Display`](core::fmt::Display) and no
/// partially-constructed [`Uri`](crate::Uri) is ever observable.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UriError {
    /// The input string violates the URI-reference grammar, or an authority
    /// marker (`//`) is present without a usable authority behind it.
    #[error("unable to parse URI reference: {input:?}")]
    MalformedReference {
        /// The rejected input.
        input: String,
    },

    /// A port outside the range `1..=65535`.
    #[error("invalid port: {port}; must be between 1 and 65535")]
    InvalidPort {
        /// The rejected port value.
        port: u32,
    },

    /// A component argument that is not textual, i.e. contains ASCII
    /// control bytes.
    #[error("the {component} component must be textual")]
    InvalidComponentType {
        /// Name of the component that received the argument.
        component: &'static str,
    },

    /// The path of a URI without an authority would start with `//` and be
    /// reparsed as a network-path reference.
    #[error("the path of a URI without an authority must not start with \"//\": {path:?}")]
    AmbiguousPathAuthority {
        /// The rejected path.
        path: String,
    },

    /// The first segment of a relative, authority-less path contains a `:`
    /// and would be reparsed as a scheme.
    #[error(
        "a relative URI must not have a path beginning with a segment containing a colon: {segment:?}"
    )]
    AmbiguousRelativeColonSegment {
        /// The offending first path segment.
        segment: String,
    },
}
