use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Builds a `Vec<String>` of ImageMagick arguments from mixed displayable values.
macro_rules! args {
    () => {
        Vec::<String>::new()
    };
    ($($x:expr),+ $(,)?) => {
        vec![$($x.to_string()),+]
    };
}
pub(crate) use args;

/// Argument fragments contributed by one builder method.
pub type Fragments = Vec<String>;

/// One invocation of `convert`, stored as an argument vector.
///
/// The command is never passed through a shell; [`fmt::Display`] renders a
/// quoted line only for logs and dry runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MagickCommand {
    args: Vec<String>,
}

impl MagickCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(&mut self, arg: impl Into<String>) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append the fragments of one builder method.
    pub fn extend(&mut self, fragments: Fragments) -> &mut Self {
        self.args.extend(fragments);
        self
    }

    pub fn open_group(&mut self) -> &mut Self {
        self.arg("(")
    }

    pub fn close_group(&mut self) -> &mut Self {
        self.arg(")")
    }

    /// Append a file operand, made absolute.
    pub fn file(&mut self, path: &Path) -> &mut Self {
        self.arg(path_arg(path))
    }

    pub fn as_args(&self) -> &[String] {
        &self.args
    }

    pub fn into_args(self) -> Vec<String> {
        self.args
    }

    /// Whether `needle` appears as a contiguous run of arguments.
    pub fn contains_seq(&self, needle: &[&str]) -> bool {
        !needle.is_empty()
            && self
                .args
                .windows(needle.len())
                .any(|w| w.iter().zip(needle).all(|(a, b)| a == b))
    }

    /// Last argument, which is the output file for every card command.
    pub fn output(&self) -> Option<&str> {
        self.args.last().map(String::as_str)
    }
}

impl fmt::Display for MagickCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("convert")?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

/// Absolute form of `path` for use as an ImageMagick operand.
pub fn path_arg(path: &Path) -> String {
    absolute(path).display().to_string()
}

pub(crate) fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Escape user text for ImageMagick text operators (`-annotate`, `label:`).
///
/// Backslashes and percent signs are interpreted by ImageMagick itself, and a
/// leading `@` would read the text from a file.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.chars().enumerate() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '%' => out.push_str("%%"),
            '@' if i == 0 => out.push_str("\\@"),
            _ => out.push(ch),
        }
    }
    out
}

fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_+./:,=@%#".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\\''"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/magick/command.rs"]
mod tests;
