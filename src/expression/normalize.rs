//! Keyword normalization for English-notation formulas
//!
//! Maps a fixed set of words and alternative operator spellings onto the single
//! symbols understood by [`tokenize`](super::tokenize). Anything else is
//! lowercased and passed through as a word.

use super::token::is_separator_char;
use crate::logging::targets;

/// Words that are rewritten to an operator symbol in English notation
pub const KEYWORDS: &[(&str, char)] = &[
    ("not", '!'),
    ("no", '!'),
    ("and", '&'),
    ("or", '|'),
    ("implies", '>'),
    ("then", '>'),
    ("if", '>'),
];

/// Look up the operator symbol for a lowercased keyword
pub fn keyword_symbol(word: &str) -> Option<char> {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == word)
        .map(|(_, symbol)| *symbol)
}

/// Rewrite English keywords and alternative operator spellings to symbols
///
/// Whole words `not`/`no` become `!`, `and` becomes `&`, `or` becomes `|` and
/// `implies`/`then`/`if` become `>`. The spellings `~`, `&&`, `||` and `=>` are
/// recognized even when written without surrounding spaces. The result has every
/// item separated by a single space.
///
/// # Examples
///
/// ```
/// use argument_validator::expression::normalize_keywords;
///
/// assert_eq!(normalize_keywords("Rain and not Snow"), "rain & ! snow");
/// assert_eq!(normalize_keywords("p=>q||~r"), "p > q | ! r");
/// ```
pub fn normalize_keywords(input: &str) -> String {
    let mut items: Vec<String> = Vec::new();
    let mut word = String::new();

    fn flush(word: &mut String, items: &mut Vec<String>) {
        if word.is_empty() {
            return;
        }
        match keyword_symbol(word) {
            Some(symbol) => items.push(symbol.to_string()),
            None => items.push(word.clone()),
        }
        word.clear();
    }

    let chars: Vec<char> = input.chars().map(|c| c.to_ascii_lowercase()).collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        let symbol = match (c, next) {
            ('=', Some('>')) | ('&', Some('&')) | ('|', Some('|')) => {
                i += 1;
                Some(if c == '=' { '>' } else { c })
            }
            ('~', _) => Some('!'),
            ('(' | ')' | '!' | '&' | '|' | '>', _) => Some(c),
            _ => None,
        };
        i += 1;

        if let Some(symbol) = symbol {
            flush(&mut word, &mut items);
            items.push(symbol.to_string());
        } else if is_separator_char(c) {
            flush(&mut word, &mut items);
        } else {
            word.push(c);
        }
    }
    flush(&mut word, &mut items);

    let normalized = items.join(" ");
    log::trace!(target: targets::LEXER, "Normalized {input:?} to {normalized:?}");
    normalized
}
