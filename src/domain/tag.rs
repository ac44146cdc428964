/// Returns true if `c` counts as whitespace when deciding whether a tag is blank.
///
/// Space separators count, except the non-breaking ones (U+00A0, U+2007,
/// U+202F). Line/paragraph separators and the ASCII controls `\t`, `\n`,
/// `\x0B`, `\x0C`, `\r` and `\x1C`..=`\x1F` count too. U+0085 does not.
pub fn is_blank_char(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        _ => c.is_whitespace(),
    }
}

/// A tag is blank when it is absent, empty, or made only of whitespace.
pub fn is_blank(tag: Option<&str>) -> bool {
    tag.map_or(true, |t| t.chars().all(is_blank_char))
}
