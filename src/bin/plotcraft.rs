use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use plotcraft::RenderSurface as _;

#[derive(Parser, Debug)]
#[command(name = "plotcraft", version, about = "Render scientific plots to PNG")]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one plot as a PNG.
    Render(RenderArgs),
    /// List plot types by category.
    Types,
    /// List journal presets and color palettes.
    Presets,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// CSV data file (header line, then x,y rows). Defaults to the built-in example data.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Plot config JSON. Missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Journal preset id applied over the config.
    #[arg(long)]
    preset: Option<String>,

    /// Plot type name, e.g. `scatter` or `plot_surface`.
    #[arg(long)]
    plot_type: Option<plotcraft::PlotType>,

    /// Color palette id applied over the config and preset.
    #[arg(long)]
    palette: Option<String>,

    /// Seed for plot types with random decoration. Unseeded renders vary run to run.
    #[arg(long)]
    seed: Option<u64>,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = plotcraft::Canvas::DEFAULT.width)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = plotcraft::Canvas::DEFAULT.height)]
    height: u32,

    /// Output PNG path. Defaults to a name derived from the title.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_target(false)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Types => {
            cmd_types();
            Ok(())
        }
        Command::Presets => {
            cmd_presets();
            Ok(())
        }
    }
}

fn read_config_json(path: &Path) -> anyhow::Result<plotcraft::PlotConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    plotcraft::PlotConfig::from_json(&text)
        .with_context(|| format!("parse config '{}'", path.display()))
}

fn build_session(args: &RenderArgs) -> anyhow::Result<plotcraft::PlotSession> {
    let config = match &args.config {
        Some(path) => read_config_json(path)?,
        None => plotcraft::PlotConfig::default(),
    };
    let mut session = plotcraft::PlotSession::with_data(config, plotcraft::DataSet::new());

    if let Some(id) = &args.preset {
        let preset = plotcraft::JournalPreset::by_id(id)
            .with_context(|| format!("unknown preset '{id}' (see `plotcraft presets`)"))?;
        session.apply_preset(&preset)?;
    }
    if let Some(id) = &args.palette {
        let palette = plotcraft::palette_by_id(id)
            .with_context(|| format!("unknown palette '{id}' (see `plotcraft presets`)"))?;
        session.update_config(&plotcraft::PlotConfigPatch {
            colors: Some(palette.palette()),
            ..plotcraft::PlotConfigPatch::default()
        })?;
    }
    if let Some(plot_type) = args.plot_type {
        session.change_plot_type(plot_type);
    }

    match &args.csv {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read csv '{}'", path.display()))?;
            let import = session.load_csv(&text);
            if import.dropped > 0 {
                tracing::warn!(
                    dropped = import.dropped,
                    "skipped csv rows with unreadable values"
                );
            }
        }
        None => session.load_example_data(),
    }
    Ok(session)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let session = build_session(&args)?;
    if let Err(e) = session.check_ready() {
        tracing::warn!("{e}");
    }

    let canvas = plotcraft::Canvas::new(args.width, args.height)?;
    let mut surface = plotcraft::CpuSurface::new(canvas)?;
    let mut rng = args
        .seed
        .map_or_else(plotcraft::Rng64::from_entropy, plotcraft::Rng64::new);
    let outcome = session.render(&mut surface, &mut rng);
    tracing::debug!(?outcome, "rendered frame");

    let png = plotcraft::encode_png(&surface.read_pixels())?;
    let out = args.out.unwrap_or_else(|| {
        PathBuf::from(plotcraft::export_file_name(session.config().title()))
    });
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&out, png).with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_types() {
    for category in plotcraft::PlotCategory::ALL {
        println!("{}", category.label());
        for plot_type in plotcraft::PlotType::in_category(category) {
            println!("  {:<16} {}", plot_type.as_str(), plot_type.label());
        }
    }
}

fn cmd_presets() {
    println!("Journal presets");
    for p in plotcraft::JournalPreset::builtin() {
        println!(
            "  {:<10} {:<10} {} {}/{}/{}px line {}",
            p.id, p.name, p.font_family, p.font_size, p.label_size, p.title_size, p.line_width
        );
    }
    println!("Palettes");
    for p in plotcraft::PALETTES {
        let colors = p
            .colors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {:<12} {:<12} {colors}", p.id, p.name);
    }
}
