//! Whitespace and punctuation word splitter.
//!
//! Punctuation is only treated as a delimiter when it borders whitespace or
//! sits between two letters. Punctuation inside numbers (`10'000.00`), URLs,
//! e-mail addresses and the symbols `#`, `@`, `&` survive, so chat text like
//! `#deals @bob` keeps its meaning.

use crate::defaults::{MEANING_SYMBOLS, URL_SAFE_PUNCTUATION};

/// Split `text` into words.
///
/// Never yields empty or punctuation-only entries, except for the
/// meaning-bearing symbols which count as word characters.
pub fn split_words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut cleaned = String::with_capacity(text.len());

    let mut i = 0;
    while i < chars.len() {
        if !is_junk(chars[i]) {
            cleaned.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && is_junk(chars[i]) {
            i += 1;
        }

        let run = &chars[start..i];
        let before = start.checked_sub(1).map(|j| chars[j]);
        let after = chars.get(i).copied();

        if is_split_point(run, before, after) {
            cleaned.push(' ');
        } else {
            cleaned.extend(run);
        }
    }

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Characters that may form a delimiter run.
fn is_junk(c: char) -> bool {
    !(c.is_alphanumeric() || c == '_' || c.is_whitespace() || MEANING_SYMBOLS.contains(&c))
}

fn is_boundary(c: Option<char>) -> bool {
    c.is_none_or(char::is_whitespace)
}

fn is_digit(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_ascii_digit())
}

fn is_split_point(run: &[char], before: Option<char>, after: Option<char>) -> bool {
    if is_boundary(after) {
        return true;
    }
    if is_boundary(before) {
        // "-5" keeps its sign
        return !is_digit(after);
    }
    !is_digit(before) && !is_digit(after) && !run.iter().any(|c| URL_SAFE_PUNCTUATION.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        split_words(text)
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(split("Forecast for lunch"), vec!["Forecast", "for", "lunch"]);
    }

    #[test]
    fn collapses_repeated_whitespace() {
        assert_eq!(split("  hello \t\n world  "), vec!["hello", "world"]);
    }

    #[test]
    fn strips_trailing_and_leading_punctuation() {
        assert_eq!(split("Hi there!"), vec!["Hi", "there"]);
        assert_eq!(split("...well, ok?!"), vec!["well", "ok"]);
    }

    #[test]
    fn splits_apostrophe_between_letters() {
        assert_eq!(
            split("hey ńöñàśçií how're you?"),
            vec!["hey", "ńöñàśçií", "how", "re", "you"]
        );
    }

    #[test]
    fn keeps_punctuation_inside_numbers() {
        assert_eq!(split("it costs 10'000.00 now"), vec!["it", "costs", "10'000.00", "now"]);
        assert_eq!(split("-5 degrees"), vec!["-5", "degrees"]);
    }

    #[test]
    fn keeps_meaning_bearing_symbols() {
        assert_eq!(split("#deals for @bob & me"), vec!["#deals", "for", "@bob", "&", "me"]);
    }

    #[test]
    fn keeps_email_and_url_intact() {
        assert_eq!(split("mail blabla@gmail.com"), vec!["mail", "blabla@gmail.com"]);
        assert_eq!(
            split("https://www.google.com/search?q=hello"),
            vec!["https://www.google.com/search?q=hello"]
        );
    }

    #[test]
    fn keeps_hyphenated_words() {
        assert_eq!(split("state-of-the-art model"), vec!["state-of-the-art", "model"]);
    }

    #[test]
    fn mixed_run_between_letters_is_kept_whole() {
        // Cutting only the apostrophe would leave ".world", which a second
        // pass splits again.
        assert_eq!(split("hello'.world"), vec!["hello'.world"]);
        assert_eq!(split(&split("hello'.world").join(" ")), vec!["hello'.world"]);
        assert_eq!(split("don't"), vec!["don", "t"]);
    }

    #[test]
    fn punctuation_only_input_yields_nothing() {
        assert!(split("!!! ... ?").is_empty());
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(split("").is_empty());
        assert!(split("   ").is_empty());
    }

    #[test]
    fn splitting_is_idempotent_on_joined_output() {
        let inputs = [
            "hallo chatbot, i wanna buy a pizza!",
            "how're you -5 #tag @me 10'000.00",
            "...weird -- spacing ;; here...",
            "https://example.com/a?b=c ok.",
        ];
        for input in inputs {
            let once = split(input);
            let twice = split(&once.join(" "));
            assert_eq!(once, twice, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn splitting_is_deterministic() {
        let text = "Was it a car, or a cat I saw?";
        assert_eq!(split(text), split(text));
    }
}
