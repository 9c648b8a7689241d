use super::*;

fn settings(binary: &str, container: Option<&str>) -> RenderSettings {
    RenderSettings {
        magick_binary: binary.to_string(),
        docker_container: container.map(str::to_string),
        ..RenderSettings::default()
    }
}

#[test]
fn process_runner_program_selection() {
    let r = ProcessRunner::new(&settings("convert", None));
    assert_eq!(r.program, "convert");
    assert!(r.prefix.is_empty());

    let r = ProcessRunner::new(&settings("/usr/bin/magick", None));
    assert_eq!(r.program, "/usr/bin/magick");
    assert_eq!(r.prefix, vec!["convert"]);

    let r = ProcessRunner::new(&settings("magick", Some("imagemagick")));
    assert_eq!(r.program, "docker");
    assert_eq!(r.prefix, vec!["exec", "-t", "imagemagick", "magick", "convert"]);
}

#[test]
fn recording_runner_records_and_answers_queries() {
    let mut runner = RecordingRunner::new().with_output("first").with_output("second");
    let mut cmd = MagickCommand::new();
    cmd.args(["a.png", "b.png"]);

    runner.run(&cmd).unwrap();
    assert_eq!(runner.run_get_output(&cmd).unwrap(), "first");
    assert_eq!(runner.run_get_output(&cmd).unwrap(), "second");
    assert_eq!(runner.run_get_output(&cmd).unwrap(), "");
    assert_eq!(runner.commands().len(), 4);
}

#[test]
fn recording_runner_dimensions_sources() {
    let dir = tempfile::tempdir().unwrap();
    let real = dir.path().join("logo.png");
    image::RgbaImage::new(40, 20).save(&real).unwrap();

    let mut runner = RecordingRunner::new().with_image("virtual.png", Dimensions::new(7, 9));
    assert_eq!(runner.image_dimensions(Path::new("virtual.png")).unwrap(), Dimensions::new(7, 9));
    assert_eq!(runner.image_dimensions(&real).unwrap(), Dimensions::new(40, 20));
    assert!(runner.image_dimensions(&dir.path().join("nope.png")).is_err());

    let mut runner = runner.with_fallback_dimensions(Dimensions::new(1, 2));
    assert_eq!(
        runner.image_dimensions(&dir.path().join("nope.png")).unwrap(),
        Dimensions::new(1, 2)
    );
}
