use regex::bytes::Regex as BytesRegex;
use regex::Regex;
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::sync::LazyLock;

/// A Notion object id appended after a literal space: `Page 0123...cdef`.
static ID_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" [a-fA-F0-9]{32}").unwrap());

static ID_SUFFIX_BYTES_RE: LazyLock<BytesRegex> =
    LazyLock::new(|| BytesRegex::new(r"(?-u) [a-fA-F0-9]{32}").unwrap());

/// The same id inside a link target, where the space is URL-encoded.
static ENCODED_ID_SUFFIX_BYTES_RE: LazyLock<BytesRegex> =
    LazyLock::new(|| BytesRegex::new(r"(?-u)%20[a-fA-F0-9]{32}").unwrap());

/// Remove every space-prefixed Notion id from a file or directory name.
///
/// Removal repeats until no id is left, so ids exposed by an earlier
/// removal are stripped as well.
pub fn clean_name(name: &str) -> Cow<'_, str> {
    let mut cleaned = match ID_SUFFIX_RE.replace_all(name, "") {
        Cow::Borrowed(_) => return Cow::Borrowed(name),
        Cow::Owned(cleaned) => cleaned,
    };
    loop {
        let next = match ID_SUFFIX_RE.replace_all(&cleaned, "") {
            Cow::Borrowed(_) => break,
            Cow::Owned(next) => next,
        };
        cleaned = next;
    }
    Cow::Owned(cleaned)
}

/// Clean a name taken from the filesystem.
#[cfg(unix)]
pub fn clean_os_name(name: &OsStr) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let mut cleaned = name.as_bytes().to_vec();
    loop {
        let next = ID_SUFFIX_BYTES_RE
            .replace_all(&cleaned, &b""[..])
            .into_owned();
        if next.len() == cleaned.len() {
            break;
        }
        cleaned = next;
    }
    OsString::from_vec(cleaned)
}

/// Clean a name taken from the filesystem. Names that are not valid Unicode
/// are returned unchanged.
#[cfg(not(unix))]
pub fn clean_os_name(name: &OsStr) -> OsString {
    match name.to_str() {
        Some(s) => OsString::from(clean_name(s).into_owned()),
        None => name.to_os_string(),
    }
}

/// Remove Notion ids from one line of file content.
///
/// Encoded ids (`%20` + id) are stripped first, then space-prefixed ids.
/// Both passes run over the whole line and are repeated, in that order,
/// until the line stops changing.
pub fn clean_line(line: &[u8]) -> Vec<u8> {
    let mut cleaned = line.to_vec();
    loop {
        let next = {
            let without_encoded = ENCODED_ID_SUFFIX_BYTES_RE.replace_all(&cleaned, &b""[..]);
            ID_SUFFIX_BYTES_RE
                .replace_all(&without_encoded, &b""[..])
                .into_owned()
        };
        // Removal only shrinks the line.
        if next.len() == cleaned.len() {
            return cleaned;
        }
        cleaned = next;
    }
}
