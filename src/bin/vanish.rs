use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "vanish", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dissolve a prompt and write every animation frame as a PNG.
    Frames(FramesArgs),
    /// Rasterize a prompt and print ink diagnostics.
    Ink(InkArgs),
}

#[derive(Parser, Debug)]
struct TextArgs {
    /// Prompt text to rasterize.
    #[arg(long)]
    text: String,

    /// Font file (.ttf/.otf). Without one, text is drawn as solid cells.
    #[arg(long)]
    font: Option<PathBuf>,

    /// JSON config overriding the defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    text: TextArgs,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out: PathBuf,

    /// Seed for particle drift; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Write every Nth frame only.
    #[arg(long, default_value_t = 1)]
    every: u64,
}

#[derive(Parser, Debug)]
struct InkArgs {
    #[command(flatten)]
    text: TextArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("VANISH_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frames(args) => cmd_frames(args),
        Command::Ink(args) => cmd_ink(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<vanish::VanishConfig> {
    let cfg = match path {
        Some(p) => vanish::VanishConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => vanish::VanishConfig::default(),
    };
    let cfg = cfg.with_env_overrides();
    cfg.validate()?;
    Ok(cfg)
}

fn make_painter(font: Option<&Path>) -> anyhow::Result<Box<dyn vanish::TextPainter>> {
    Ok(match font {
        Some(p) => Box::new(
            vanish::FontTextPainter::from_path(p)
                .with_context(|| format!("load font '{}'", p.display()))?,
        ),
        None => Box::new(vanish::BlockTextPainter),
    })
}

/// Offline stand-in for the generate call: settles immediately with the prompt.
fn echo_generator(prompt: String) -> vanish::GenerateFuture {
    Box::pin(async move { Ok::<_, anyhow::Error>(prompt) })
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.text.config.as_deref())?;
    let painter = make_painter(args.text.font.as_deref())?;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let every = args.every.max(1);

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    let mut controller = vanish::DissolveController::with_rng(&cfg, painter, echo_generator, rng)?;
    controller.set_value(args.text.text.as_str());
    if !controller.submit() {
        anyhow::bail!("nothing to dissolve: prompt is empty after trimming");
    }

    write_png(&args.out, 0, &controller.frame_rgba())?;
    let mut written = 1u64;
    let mut failure = None;
    let frames = vanish::run_until_idle(
        &mut controller,
        &mut vanish::ImmediateScheduler,
        |c, report| {
            if failure.is_some() || !report.frame.is_multiple_of(every) {
                return;
            }
            match write_png(&args.out, report.frame, &c.frame_rgba()) {
                Ok(()) => written += 1,
                Err(e) => failure = Some(e),
            }
        },
    );
    if let Some(e) = failure {
        return Err(e);
    }

    eprintln!(
        "dissolved in {frames} frames, wrote {written} png(s) to {}",
        args.out.display()
    );
    Ok(())
}

fn cmd_ink(args: InkArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.text.config.as_deref())?;
    let painter = make_painter(args.text.font.as_deref())?;
    let mut controller = vanish::DissolveController::new(&cfg, painter, echo_generator)?;
    controller.set_value(args.text.text.as_str());

    eprintln!("ink diagnostics:");
    eprintln!("  family:       {}", controller.font_family());
    eprintln!("  font_size_px: {}", cfg.raster_font_size_px());
    eprintln!("  particles:    {}", controller.particle_count());
    controller.submit();
    eprintln!("  sweep_origin: {}", controller.sweep_origin());
    Ok(())
}

fn write_png(dir: &Path, frame: u64, rgba: &vanish::FrameRgba) -> anyhow::Result<()> {
    let path = dir.join(format!("frame_{frame:05}.png"));
    image::save_buffer_with_format(
        &path,
        &rgba.data,
        rgba.width,
        rgba.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
