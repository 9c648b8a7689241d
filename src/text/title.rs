//! Title text preparation: font replacements, case folding and line splitting.

use std::collections::BTreeMap;

/// Case applied to the title before it is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontCase {
    Upper,
    Lower,
    #[default]
    Source,
    Title,
    Blank,
}

pub fn apply_font_case(text: &str, case: FontCase) -> String {
    match case {
        FontCase::Upper => text.to_uppercase(),
        FontCase::Lower => text.to_lowercase(),
        FontCase::Source => text.to_string(),
        FontCase::Title => title_case(text),
        FontCase::Blank => String::new(),
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = ch != '\'';
        }
    }
    out
}

/// Substitute characters the title font cannot draw.
///
/// Every key is replaced simultaneously, so swaps such as `(`↔`[` work.
pub fn apply_replacements(text: &str, replacements: &BTreeMap<String, String>) -> String {
    if replacements.is_empty() {
        return text.to_string();
    }

    // longest key first so multi-character keys win
    let mut keys: Vec<(&str, &str)> = replacements
        .iter()
        .filter(|(from, _)| !from.is_empty())
        .map(|(from, to)| (from.as_str(), to.as_str()))
        .collect();
    keys.sort_by_key(|(from, _)| std::cmp::Reverse(from.len()));

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    'outer: while !rest.is_empty() {
        for (from, to) in &keys {
            if rest.starts_with(from) {
                out.push_str(to);
                rest = &rest[from.len()..];
                continue 'outer;
            }
        }
        let ch = rest.chars().next().unwrap_or_default();
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}

/// Which lines of a split title receive the extra words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitStyle {
    Top,
    Bottom,
    Even,
}

/// Line breaking parameters of one card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitCharacteristics {
    /// Character count at which a line is split.
    pub max_line_width: usize,
    pub max_line_count: usize,
    pub style: SplitStyle,
}

impl SplitCharacteristics {
    pub const fn new(max_line_width: usize, max_line_count: usize, style: SplitStyle) -> Self {
        Self {
            max_line_width,
            max_line_count,
            style,
        }
    }
}

/// Break `title` into lines joined by `\n`.
///
/// Titles that already contain a newline are returned unchanged.
pub fn split_title(title: &str, chars: SplitCharacteristics) -> String {
    let title = title.trim();
    if title.contains('\n')
        || chars.max_line_count <= 1
        || title.chars().count() <= chars.max_line_width
    {
        return title.to_string();
    }

    let words: Vec<&str> = title.split_whitespace().collect();
    let lines = match chars.style {
        SplitStyle::Top => split_top(&words, chars),
        SplitStyle::Bottom => split_bottom(&words, chars),
        SplitStyle::Even => split_even(&words, chars),
    };
    lines.join("\n")
}

fn width(words: &[&str]) -> usize {
    words.iter().map(|w| w.chars().count()).sum::<usize>() + words.len().saturating_sub(1)
}

/// Fill lines from the top; the last line takes whatever remains.
fn split_top(words: &[&str], chars: SplitCharacteristics) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = words;
    while lines.len() + 1 < chars.max_line_count
        && rest.len() > 1
        && width(rest) > chars.max_line_width
    {
        let mut take = 1;
        while take < rest.len() - 1 && width(&rest[..=take]) <= chars.max_line_width {
            take += 1;
        }
        lines.push(rest[..take].join(" "));
        rest = &rest[take..];
    }
    lines.push(rest.join(" "));
    lines
}

/// Fill lines from the bottom; the first line takes whatever remains.
fn split_bottom(words: &[&str], chars: SplitCharacteristics) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = words;
    while lines.len() + 1 < chars.max_line_count
        && rest.len() > 1
        && width(rest) > chars.max_line_width
    {
        let mut start = rest.len() - 1;
        while start > 1 && width(&rest[start - 1..]) <= chars.max_line_width {
            start -= 1;
        }
        lines.push(rest[start..].join(" "));
        rest = &rest[..start];
    }
    lines.push(rest.join(" "));
    lines.reverse();
    lines
}

/// Spread words so every line has roughly the same width.
fn split_even(words: &[&str], chars: SplitCharacteristics) -> Vec<String> {
    let total = width(words);
    let count = total
        .div_ceil(chars.max_line_width.max(1))
        .clamp(1, chars.max_line_count)
        .min(words.len());
    let target = total.div_ceil(count);

    let mut lines = Vec::with_capacity(count);
    let mut rest = words;
    while lines.len() + 1 < count && rest.len() > 1 {
        let mut take = 1;
        while take < rest.len() - 1 && width(&rest[..=take]) <= target {
            take += 1;
        }
        lines.push(rest[..take].join(" "));
        rest = &rest[take..];
    }
    lines.push(rest.join(" "));
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/text/title.rs"]
mod tests;
