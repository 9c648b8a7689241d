use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use titlecard::{
    CardSpec, Dimensions, MagickRunner, ProcessRunner, RecordingRunner, RenderContext,
    RenderSettings,
};

#[derive(Parser, Debug)]
#[command(name = "titlecard", version)]
struct Cli {
    /// Log every ImageMagick command (overrides `RUST_LOG`).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one card described by a JSON file.
    Render(RenderArgs),
    /// List the available card types and whether they show season titles.
    List,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input card JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Render settings JSON; defaults apply when omitted.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Print the commands instead of running them.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::List => {
            cmd_list();
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_settings(path: Option<&Path>) -> anyhow::Result<RenderSettings> {
    let Some(path) = path else {
        return Ok(RenderSettings::default());
    };
    RenderSettings::from_json_file(path).with_context(|| "load render settings")
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let settings = read_settings(args.settings.as_deref())?;
    let spec = CardSpec::from_json_file(&args.in_path)?;
    let output = spec.as_card().output_file().to_path_buf();

    if args.dry_run {
        // intermediate images never exist, so measure them as full cards
        let mut runner = RecordingRunner::new().with_fallback_dimensions(Dimensions::card());
        let mut ctx = RenderContext::new(&mut runner, &settings);
        titlecard::render_card(spec, &mut ctx)?;
        for cmd in runner.commands() {
            println!("{cmd}");
        }
        return Ok(());
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let mut runner = ProcessRunner::new(&settings);
    render_with(&mut runner, &settings, spec)?;
    eprintln!("wrote {}", output.display());
    Ok(())
}

fn render_with(
    runner: &mut dyn MagickRunner,
    settings: &RenderSettings,
    spec: CardSpec,
) -> anyhow::Result<()> {
    let mut ctx = RenderContext::new(runner, settings);
    titlecard::render_card(spec, &mut ctx).with_context(|| "render card")?;
    Ok(())
}

fn cmd_list() {
    for info in titlecard::all_infos() {
        let season = if info.uses_season_title {
            "season-title"
        } else {
            ""
        };
        let line = format!("{:<28} {:<36} {season}", info.identifier, info.archive_name);
        println!("{}", line.trim_end());
    }
}
