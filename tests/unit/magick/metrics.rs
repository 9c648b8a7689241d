use super::*;
use crate::magick::runner::RecordingRunner;

const DEBUG_OUTPUT: &str = "\
2024-01-01T00:00:00+00:00 0:00.010 0.000u 7.1.1 Annotate convert[1]: annotate.c/RenderFreetype/1455/Annotate
  Font /ref/Sequel-Neue.otf; font-encoding none; text-encoding none; pointsize 85
2024-01-01T00:00:00+00:00 0:00.011 0.000u 7.1.1 Annotate convert[1]: annotate.c/GetTypeMetrics/921/Annotate
  Metrics: text: SEASON 1 ; width: 370; height: 68; ascent: 62; descent: -17; max advance: 100
  Metrics: text: - ; width: 47; height: 83; ascent: 62; descent: -17; max advance: 100
  Metrics: text: EPISODE 4; width: 357; height: 83; ascent: 62; descent: -17; max advance: 100
";

#[test]
fn parses_widths_and_heights() {
    let m = parse_text_metrics(DEBUG_OUTPUT);
    assert_eq!(m.widths, vec![370, 47, 357]);
    assert_eq!(m.heights, vec![68, 83, 83]);
    assert_eq!(parse_text_metrics("nothing here"), TextMetrics::default());
}

#[test]
fn text_dimensions_reduces_and_builds_probe_command() {
    let mut runner = RecordingRunner::new().with_output(DEBUG_OUTPUT);
    let frags = vec!["-pointsize".to_string(), "85".to_string()];
    let (w, h) = text_dimensions(&mut runner, &frags, Reduce::Sum, Reduce::Max).unwrap();
    assert_eq!((w, h), (774.0, 83.0));

    let cmd = &runner.commands()[0];
    assert_eq!(
        cmd.as_args(),
        ["-debug", "annotate", "xc:", "-pointsize", "85", "null:"]
    );
}

#[test]
fn label_fragments_halve_sums() {
    let mut runner = RecordingRunner::new().with_output(DEBUG_OUTPUT);
    let frags = vec!["label:S1 - E4".to_string()];
    let (w, _) = text_dimensions(&mut runner, &frags, Reduce::Sum, Reduce::Sum).unwrap();
    assert_eq!(w, 387.0);
}

#[test]
fn missing_metrics_yield_zero() {
    let mut runner = RecordingRunner::new();
    let dims = text_dimensions(&mut runner, &[], Reduce::Max, Reduce::Max).unwrap();
    assert_eq!(dims, (0.0, 0.0));
}

#[test]
fn histogram_rows_are_extracted_in_order() {
    let out = "\
     9000: (  0,  0,  0,  0) #00000000 none
      812: (230, 40, 30,255) #E6281EFF srgba(230,40,30,1)
       44: (255,255,255,255) #FFFFFFFF white
";
    let rows = parse_histogram(out);
    assert_eq!(
        rows,
        vec![
            (9000, "#00000000".to_string()),
            (812, "#E6281EFF".to_string()),
            (44, "#FFFFFFFF".to_string()),
        ]
    );
}
