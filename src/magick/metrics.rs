use std::sync::LazyLock;

use regex::Regex;

use crate::{
    foundation::error::CardResult,
    magick::{command::MagickCommand, runner::MagickRunner},
};

static METRICS_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Metrics:.*width:\s+(\d+)").expect("static regex"));
static METRICS_HEIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Metrics:.*height:\s+(\d+)").expect("static regex"));
static HISTOGRAM_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(\d+):\s.*?\s(#[0-9A-Fa-f]{8})").expect("static regex")
});

/// Per-annotation widths and heights reported by `-debug annotate`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextMetrics {
    pub widths: Vec<u32>,
    pub heights: Vec<u32>,
}

/// How several measured values collapse into one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reduce {
    Max,
    Sum,
}

pub fn parse_text_metrics(output: &str) -> TextMetrics {
    let grab = |re: &Regex| {
        output
            .lines()
            .filter_map(|line| re.captures(line))
            .filter_map(|c| c[1].parse::<u32>().ok())
            .collect::<Vec<_>>()
    };
    TextMetrics {
        widths: grab(&METRICS_WIDTH),
        heights: grab(&METRICS_HEIGHT),
    }
}

/// Measure the text drawn by `fragments` without producing an image.
///
/// Returns `(0.0, 0.0)` when ImageMagick reports nothing.
pub fn text_dimensions(
    runner: &mut dyn MagickRunner,
    fragments: &[String],
    width: Reduce,
    height: Reduce,
) -> CardResult<(f64, f64)> {
    let mut cmd = MagickCommand::new();
    cmd.args(["-debug", "annotate", "xc:"])
        .args(fragments.iter().cloned())
        .arg("null:");

    let metrics = parse_text_metrics(&runner.run_get_output(&cmd)?);
    if metrics.widths.is_empty() || metrics.heights.is_empty() {
        tracing::debug!("no text metrics reported");
        return Ok((0.0, 0.0));
    }

    // label: operators are measured twice
    let divisor = if fragments.iter().any(|f| f.starts_with("label:")) {
        2.0
    } else {
        1.0
    };
    let reduce = |values: &[u32], how: Reduce| match how {
        Reduce::Max => f64::from(values.iter().copied().max().unwrap_or(0)),
        Reduce::Sum => values.iter().map(|v| f64::from(*v)).sum::<f64>() / divisor,
    };

    Ok((
        reduce(&metrics.widths, width),
        reduce(&metrics.heights, height),
    ))
}

/// `(pixel count, #RRGGBBAA)` rows of a `histogram:info:` dump, in output order.
pub fn parse_histogram(output: &str) -> Vec<(u64, String)> {
    HISTOGRAM_ROW
        .captures_iter(output)
        .filter_map(|c| Some((c[1].parse().ok()?, c[2].to_string())))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/magick/metrics.rs"]
mod tests;
