//! Character classification and escape tables used by the scanner.

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character is whitespace the scanner skips between tokens.
#[inline]
pub fn is_white_space(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\n'
            | '\r'
            | '\u{000B}' // vertical tab
            | '\u{000C}' // form feed
            | '\u{00A0}' // no-break space
            | '\u{2028}' // line separator
            | '\u{2029}' // paragraph separator
            | '\u{FEFF}' // BOM / zero-width no-break space
    )
}

/// Check if a character can start an identifier.
///
/// ASCII fast path first; non-ASCII falls back to the Unicode XID range
/// tables, which are built once and safe for concurrent reads.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch == '_'
        || ch == '$'
        || ch.is_ascii_alphabetic()
        || (ch as u32 > 0x7F && unicode_xid::UnicodeXID::is_xid_start(ch))
}

/// Check if a character can be part of an identifier.
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    ch == '_'
        || ch == '$'
        || ch.is_ascii_alphanumeric()
        || (ch as u32 > 0x7F && unicode_xid::UnicodeXID::is_xid_continue(ch))
}

/// Decode a character escape: maps the escape letter to the character it
/// denotes. Unmapped input passes through unchanged, so `\q` is `q` and
/// `\\` is `\`.
#[inline]
pub fn unescape(ch: char) -> char {
    match ch {
        'b' => '\u{0008}',
        't' => '\t',
        'n' => '\n',
        'v' => '\u{000B}',
        'f' => '\u{000C}',
        'r' => '\r',
        '"' => '"',
        '\'' => '\'',
        '`' => '`',
        _ => ch,
    }
}
