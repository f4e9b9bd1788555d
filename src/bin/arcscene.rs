use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "arcscene", version)]
struct Cli {
    /// Verbosity of the diagnostics written to stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as an SVG document.
    Frame(FrameArgs),
    /// Render every frame of the animation into a directory.
    Frames(FramesArgs),
    /// Print the shape list and animation length.
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory, created if missing.
    #[arg(long)]
    out_dir: PathBuf,

    /// File name prefix; files are named `{prefix}{index:04}.svg`.
    #[arg(long, default_value = "frame_")]
    prefix: String,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Info(args) => cmd_info(args),
    }
}

fn load_scene(path: &Path) -> anyhow::Result<arcscene::Scene> {
    let doc = arcscene::SceneDoc::from_path(path)
        .with_context(|| format!("load scene '{}'", path.display()))?;
    let scene = doc
        .build()
        .with_context(|| format!("build scene '{}'", path.display()))?;
    Ok(scene)
}

fn write_svg(path: &Path, svg: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, svg).with_context(|| format!("write svg '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut scene = load_scene(&args.in_path)?;
    for _ in 0..args.frame {
        scene.step_all()?;
    }
    let svg = scene
        .render()
        .with_context(|| format!("render frame {}", args.frame))?;
    write_svg(&args.out, &svg)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let mut scene = load_scene(&args.in_path)?;
    let frames = scene.render_frames().context("render frames")?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for (i, svg) in frames.iter().enumerate() {
        let path = args.out_dir.join(format!("{}{i:04}.svg", args.prefix));
        write_svg(&path, svg)?;
    }

    eprintln!("wrote {} frames to {}", frames.len(), args.out_dir.display());
    Ok(())
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.in_path)?;
    let canvas = scene.canvas();
    println!("canvas: {}x{}", canvas.width, canvas.height);
    println!("shapes: {}", scene.len());
    print!("{scene}");
    println!("frames: {}", scene.max_frame_count());
    println!("end_time: {}s", scene.max_end_time());
    Ok(())
}
