//! Minimal `{name}` / `{name:0N}` templating for episode text and logo paths.

use std::fmt;

use crate::foundation::error::{CardError, CardResult};

/// One value available to a template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Int(i64),
    Text(String),
}

impl From<i64> for FormatArg {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for FormatArg {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<&str> for FormatArg {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

/// Substitute `{name}` and zero-padded `{name:0N}` fields; `{{` and `}}` are literal braces.
pub fn format_placeholders(template: &str, values: &[(&str, FormatArg)]) -> CardResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut field = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => field.push(c),
                        None => {
                            return Err(CardError::validation(format!(
                                "unterminated field in format '{template}'"
                            )));
                        }
                    }
                }
                out.push_str(&render_field(&field, values, template)?);
            }
            '}' => {
                return Err(CardError::validation(format!(
                    "single '}}' in format '{template}'"
                )));
            }
            _ => out.push(ch),
        }
    }
    Ok(out)
}

fn render_field(field: &str, values: &[(&str, FormatArg)], template: &str) -> CardResult<String> {
    let (name, spec) = match field.split_once(':') {
        Some((name, spec)) => (name, Some(spec)),
        None => (field, None),
    };
    let value = values
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, v)| v)
        .ok_or_else(|| {
            CardError::validation(format!("unknown field '{name}' in format '{template}'"))
        })?;

    let Some(spec) = spec.filter(|s| !s.is_empty()) else {
        return Ok(value.to_string());
    };
    let width = spec
        .strip_prefix('0')
        .and_then(|w| w.parse::<usize>().ok())
        .ok_or_else(|| {
            CardError::validation(format!("unsupported format spec '{spec}' in '{template}'"))
        })?;
    match value {
        FormatArg::Int(v) if *v < 0 => {
            let width = width.saturating_sub(1);
            Ok(format!("-{:0>width$}", v.unsigned_abs()))
        }
        FormatArg::Int(v) => Ok(format!("{v:0>width$}")),
        FormatArg::Text(_) => Err(CardError::validation(format!(
            "zero padding applied to text field '{name}' in '{template}'"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/format.rs"]
mod tests;
