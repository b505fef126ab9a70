use std::borrow::Cow;

/// Trims and collapses every run of whitespace into a single ASCII space.
///
/// Returns `Cow::Borrowed` when the input is already normalized, which is the
/// common case for dates and durations copied straight out of a feed.
///
/// # Examples
///
/// ```
/// use podfeed::util::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  Wed,\n 02  Oct 2002 "), "Wed, 02 Oct 2002");
/// assert_eq!(collapse_whitespace("clean"), "clean");
/// ```
pub fn collapse_whitespace(s: &str) -> Cow<'_, str> {
    let trimmed = s.trim();

    let mut prev_space = false;
    let already_clean = trimmed.chars().all(|c| {
        let ok = if c.is_whitespace() {
            c == ' ' && !prev_space
        } else {
            true
        };
        prev_space = c.is_whitespace();
        ok
    });

    if already_clean {
        return Cow::Borrowed(trimmed);
    }

    let mut out = String::with_capacity(trimmed.len());
    for word in trimmed.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    Cow::Owned(out)
}

/// Splits a comma separated list (`itunes:keywords`, `media:keywords`) into
/// trimmed, non-empty entries.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// SEC-001: Strip terminal control characters and ANSI escape sequences.
///
/// Feed text is publisher-controlled and the CLI prints it straight to a
/// terminal. Removes C0 controls (except tab, newline, carriage return), DEL,
/// CSI sequences (`ESC [` ... final byte 0x40-0x7E), OSC sequences (`ESC ]`
/// ... BEL or `ESC \`) and bare ESC bytes.
pub fn strip_control_chars(s: &str) -> Cow<'_, str> {
    fn is_control(c: char) -> bool {
        matches!(c, '\u{00}'..='\u{08}' | '\u{0b}' | '\u{0c}' | '\u{0e}'..='\u{1f}' | '\u{7f}')
    }

    if !s.chars().any(is_control) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            if !is_control(c) {
                out.push(c);
            }
            continue;
        }

        match chars.peek() {
            Some('[') => {
                chars.next();
                // Parameter and intermediate bytes up to and including the final byte
                for c in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&c) {
                        break;
                    }
                }
            }
            Some(']') => {
                chars.next();
                while let Some(c) = chars.next() {
                    if c == '\u{07}' {
                        break;
                    }
                    if c == '\u{1b}' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => {}
        }
    }

    Cow::Owned(out)
}
