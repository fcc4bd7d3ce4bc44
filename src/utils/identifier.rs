//! Identifier formatting
//!
//! Turns free-form ceremony keys ("fire heart", "some_event_name") into
//! Pascal-joined identifiers ("FireHeart", "SomeEventName"):
//! 1. Title-case the whole key
//! 2. Drop whitespace
//! 3. Drop underscores
//!
//! Title-casing uses the cased/uncased word-boundary rule: a letter that
//! follows another letter is lower-cased, any other letter is upper-cased.
//! Digits and punctuation are left alone but still start a new word, so
//! "abc2def" becomes "Abc2Def" and "FIRE" becomes "Fire".
//!
//! Titlecase letters (`ǅ`, `ᾈ`, ..) count as letters. A word-initial letter
//! takes its titlecase form where Unicode gives it one distinct from the
//! uppercase form (`ǆ` -> `ǅ`, not `Ǆ`).

/// Title-case a string
///
/// Every cased character that starts a run of cased characters is
/// upper-cased, the rest of the run is lower-cased. Uncased characters pass
/// through untouched.
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut previous_cased = false;

    for ch in input.chars() {
        if is_cased(ch) {
            if previous_cased {
                result.extend(ch.to_lowercase());
            } else {
                push_titlecase(&mut result, ch);
            }
            previous_cased = true;
        } else {
            result.push(ch);
            previous_cased = false;
        }
    }

    result
}

/// Format a ceremony key as a Pascal-joined identifier
///
/// Returns: the title-cased key with all whitespace and `_` removed
pub fn pascal_join(key: &str) -> String {
    title_case(key)
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '_')
        .collect()
}

fn is_cased(ch: char) -> bool {
    ch.is_uppercase() || ch.is_lowercase() || ch.to_lowercase().ne(ch.to_uppercase())
}

fn push_titlecase(result: &mut String, ch: char) {
    match titlecase_of(ch) {
        Some(title) => result.push(title),
        None => result.extend(ch.to_uppercase()),
    }
}

/// Titlecase mapping for letters where it differs from `char::to_uppercase`
fn titlecase_of(ch: char) -> Option<char> {
    let title = match ch {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}',
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}',
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}',
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}',
        // Greek with ypogegrammeni: lowercase block maps 8 code points up
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(ch as u32 + 8)?
        }
        '\u{1F88}'..='\u{1F8F}' | '\u{1F98}'..='\u{1F9F}' | '\u{1FA8}'..='\u{1FAF}' => ch,
        '\u{1FB3}' | '\u{1FBC}' => '\u{1FBC}',
        '\u{1FC3}' | '\u{1FCC}' => '\u{1FCC}',
        '\u{1FF3}' | '\u{1FFC}' => '\u{1FFC}',
        _ => return None,
    };
    Some(title)
}
