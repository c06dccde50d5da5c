// Percent-encoding primitives over the RFC 3986 character classes

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Which characters survive encoding untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeMode {
    /// Escape every byte outside the unreserved set (`A-Z a-z 0-9 - . _ ~`)
    Strict,
    /// Additionally leave the reserved set (gen-delims and sub-delims)
    /// untouched, as the `+` and `#` operators require
    ReservedPreserving,
}

/// Unreserved plus gen-delims plus sub-delims. A raw `%` is not in any of
/// those classes, so it is escaped to `%25` in both modes.
const KEEP_RESERVED: &AsciiSet = &NON_ALPHANUMERIC
    // unreserved
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    // gen-delims
    .remove(b':')
    .remove(b'/')
    .remove(b'?')
    .remove(b'#')
    .remove(b'[')
    .remove(b']')
    .remove(b'@')
    // sub-delims
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Percent-encode `text` under the given mode.
pub fn encode(mode: EncodeMode, text: &str) -> String {
    match mode {
        EncodeMode::Strict => urlencoding::encode(text).into_owned(),
        EncodeMode::ReservedPreserving => utf8_percent_encode(text, KEEP_RESERVED).to_string(),
    }
}

/// Percent-decode `text`, recovering invalid UTF-8 lossily.
///
/// Used to map a variable name as written in the template back to the
/// params key it refers to.
pub fn decode(text: &str) -> String {
    let bytes = urlencoding::decode_binary(text.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
