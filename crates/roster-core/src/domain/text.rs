/// Title-cases each word: a cased character following another cased character
/// is lower-cased, any other one gets its titlecase form. Uncased characters
/// (spaces, digits, apostrophes, CJK) end the current word.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_is_cased = false;
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if previous_is_cased {
            if ch == 'Σ' && !chars.peek().copied().is_some_and(is_cased) {
                out.push('ς');
            } else {
                out.extend(ch.to_lowercase());
            }
        } else {
            push_titlecase(&mut out, ch);
        }
        previous_is_cased = is_cased(ch);
    }
    out
}

fn is_cased(ch: char) -> bool {
    ch.is_lowercase() || ch.is_uppercase() || titlecase_char(ch) == Some(ch)
}

/// Characters whose titlecase form differs from their uppercase form.
fn titlecase_char(ch: char) -> Option<char> {
    match ch {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        // Greek letters with ypogegrammeni take prosgegrammeni.
        '\u{1F80}'..='\u{1FAF}' => char::from_u32(u32::from(ch) | 0x8),
        '\u{1FB3}' | '\u{1FBC}' => Some('\u{1FBC}'),
        '\u{1FC3}' | '\u{1FCC}' => Some('\u{1FCC}'),
        '\u{1FF3}' | '\u{1FFC}' => Some('\u{1FFC}'),
        _ => None,
    }
}

fn push_titlecase(out: &mut String, ch: char) {
    if let Some(title) = titlecase_char(ch) {
        out.push(title);
        return;
    }
    if ch == '\u{0149}' {
        out.push_str("\u{02BC}N");
        return;
    }
    // Multi-character expansions (ß, ligatures) keep only the first letter
    // capitalized.
    let mut upper = ch.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
        for rest in upper {
            out.extend(rest.to_lowercase());
        }
    }
}

pub fn normalize_name(value: &str) -> String {
    title_case(value.trim())
}

pub fn normalize_badge_id(value: &str) -> String {
    value.trim().to_string()
}

/// Neighborhoods and bus lines are compared and stored upper-cased.
pub fn normalize_code(value: &str) -> String {
    value.trim().to_uppercase()
}
