//! Reserved characters and the escaping rules of the pair wire format.
//!
//! The three reserved characters are lowercase letters so the encoded
//! string stays inside the URL/cookie-safe alphabet. Base-36 codes use the
//! same letters, which is why codes are escaped exactly like values.

/// Escape character. Precedes any reserved character that is literal data.
pub const ESCAPE_CHAR: char = 'z';

/// Separates a field code from its value token.
pub const FIELD_SEP: char = 'q';

/// Terminates every pair.
pub const PAIR_SEP: char = 'j';

pub const RESERVED: [char; 3] = [ESCAPE_CHAR, FIELD_SEP, PAIR_SEP];

#[inline]
pub fn is_reserved(c: char) -> bool {
    c == ESCAPE_CHAR || c == FIELD_SEP || c == PAIR_SEP
}

/// Prefix every reserved character in `s` with [`ESCAPE_CHAR`].
///
/// # Example
///
/// ```
/// use pairpack::escape::escape;
///
/// assert_eq!(escape("jazz"), "zjazzzz");
/// assert_eq!(escape("plain"), "plain");
/// ```
pub fn escape(s: &str) -> String {
    let extra = s.chars().filter(|&c| is_reserved(c)).count();
    let mut out = String::with_capacity(s.len() + extra);
    for c in s.chars() {
        if is_reserved(c) {
            out.push(ESCAPE_CHAR);
        }
        out.push(c);
    }
    out
}

/// Inverse of [`escape`].
///
/// Each escape character followed by a reserved character collapses to
/// that character, scanning left to right. An escape character followed by
/// anything else (or nothing) is kept as-is.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ESCAPE_CHAR
            && let Some(&next) = chars.peek()
            && is_reserved(next)
        {
            out.push(next);
            chars.next();
            continue;
        }
        out.push(c);
    }

    out
}

/// Split `s` on every occurrence of `sep` that is not escaped.
///
/// An escape character always consumes the character after it, so `zzj`
/// is an escaped `z` followed by a real `j`. Like [`str::split`], the
/// result always has at least one element.
pub fn split_unescaped(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == ESCAPE_CHAR {
            escaped = true;
        } else if c == sep {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&s[start..]);

    parts
}

/// Split `s` at the first unescaped `sep`, leaving later separators in the
/// right-hand part. `None` when `s` has no unescaped `sep`.
pub fn split_once_unescaped(s: &str, sep: char) -> Option<(&str, &str)> {
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == ESCAPE_CHAR {
            escaped = true;
        } else if c == sep {
            return Some((&s[..i], &s[i + c.len_utf8()..]));
        }
    }

    None
}

/// Byte offset of the first escape character that does not introduce a
/// reserved character. [`escape`] never produces one.
pub fn find_dangling_escape(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();

    while let Some((i, c)) = chars.next() {
        if c == ESCAPE_CHAR {
            match chars.next() {
                Some((_, next)) if is_reserved(next) => {}
                _ => return Some(i),
            }
        }
    }

    None
}
