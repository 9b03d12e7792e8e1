use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "roiplan", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a scene and print the weighted rectangles as JSON.
    Plan(PlanArgs),
    /// Plan a scene and write the block overlay as a PNG.
    Overlay(OverlayArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Input region document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scene id inside the document.
    #[arg(long)]
    scene: String,

    /// Frame width in pixels.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Frame height in pixels.
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Encoder block size used for quantization.
    #[arg(long, default_value_t = roiplan::DEFAULT_MIN_BLOCK)]
    min_block: u32,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Write the plan here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct OverlayArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Preview block size (16, 32, 64 or 128).
    #[arg(long, default_value_t = 16)]
    block: u32,

    /// Overlay opacity in percent; defaults to the document's setting.
    #[arg(long)]
    opacity: Option<u32>,

    /// Upscale the overlay to frame resolution.
    #[arg(long, default_value_t = false)]
    full_size: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Overlay(args) => cmd_overlay(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_document(path: &Path) -> anyhow::Result<roiplan::RegionDocument> {
    let doc = roiplan::RegionDocument::from_path(path)
        .with_context(|| format!("load region document '{}'", path.display()))?;
    doc.validate()?;
    Ok(doc)
}

fn plan_scene(
    args: &SceneArgs,
) -> anyhow::Result<(roiplan::RegionDocument, roiplan::FrameSize, roiplan::RegionPlan)> {
    let doc = read_document(&args.in_path)?;
    if !doc.scenes.contains_key(&args.scene) {
        tracing::warn!(scene = %args.scene, "scene has no regions in document");
    }
    let frame = roiplan::FrameSize::new(args.width, args.height)?;
    let planner = roiplan::RegionPlanner::new(args.min_block);
    let plan = doc.plan_scene(&planner, &args.scene, frame);
    Ok((doc, frame, plan))
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let (_, _, plan) = plan_scene(&args.scene)?;
    let json = serde_json::to_string_pretty(&plan).context("serialize plan")?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json).with_context(|| format!("write plan '{}'", out.display()))?;
            eprintln!("wrote {} ({} regions)", out.display(), plan.len());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_overlay(args: OverlayArgs) -> anyhow::Result<()> {
    let (doc, frame, plan) = plan_scene(&args.scene)?;
    let settings = roiplan::OverlaySettings {
        block_size: args.block,
        opacity: args.opacity.unwrap_or(doc.opacity),
    };

    let mut img = roiplan::render_overlay(plan.rects(), frame, settings)?;
    if args.full_size {
        img = roiplan::upscale_to_frame(&img, frame, settings.block_size);
    }
    roiplan::save_overlay_png(&img, &args.out)?;

    if plan.exceeds_recommended() {
        eprintln!(
            "warning: {} regions exceed the recommended maximum of {}",
            plan.len(),
            roiplan::MAX_RECOMMENDED_REGIONS
        );
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
