use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use image::RgbaImage;

use boothframe::{
    Color, FontProvider, Orientation, PaperFormat, PictureConfig, PictureError, PictureResult,
    Size,
};

#[derive(Parser, Debug)]
#[command(name = "boothframe", version)]
struct Cli {
    /// Picture configuration JSON. Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More logging on stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose 1 to 4 captures into a printable picture.
    Compose(ComposeArgs),
    /// Render a themed layout template with its caption.
    Layout(LayoutArgs),
    /// Print the dominant color of an image as #rrggbb.
    MainColor(MainColorArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Capture images, in slot order.
    #[arg(required = true, num_args = 1..)]
    captures: Vec<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// auto, portrait or landscape.
    #[arg(long)]
    orientation: Option<Orientation>,

    /// Paper size in inches, e.g. 4x6.
    #[arg(long)]
    paper: Option<PaperFormat>,

    /// Canvas background, e.g. "#ffffff".
    #[arg(long)]
    background: Option<Color>,

    /// Outer margin and slot gap in pixels.
    #[arg(long)]
    margin: Option<u32>,

    /// Crop captures to fill their slots.
    #[arg(long, default_value_t = false)]
    crop: bool,

    /// Use the portable backend even when the accelerated one is available.
    #[arg(long, default_value_t = false)]
    force_fallback: bool,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Number of captures the layout is for (1 to 4).
    #[arg(long)]
    count: usize,

    /// Maximum size, e.g. 800x600.
    #[arg(long)]
    size: Size,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Template tint; overrides the configured text color.
    #[arg(long)]
    text_color: Option<Color>,

    /// Template background; overrides the configured layout background.
    #[arg(long)]
    bg_color: Option<Color>,

    /// Caption font file; overrides the configured font.
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct MainColorArgs {
    /// Image to sample.
    image: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = match &cli.config {
        Some(path) => PictureConfig::from_path(path)?,
        None => PictureConfig::default(),
    };
    match cli.cmd {
        Command::Compose(args) => cmd_compose(&cfg, args),
        Command::Layout(args) => cmd_layout(&cfg, args),
        Command::MainColor(args) => cmd_main_color(args),
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

fn cmd_compose(cfg: &PictureConfig, args: ComposeArgs) -> anyhow::Result<()> {
    let mut request = cfg.picture_request()?;
    if let Some(orientation) = args.orientation {
        request.orientation = orientation;
    }
    if let Some(paper) = args.paper {
        request.paper_format = paper;
    }
    if let Some(background) = args.background {
        request.maker.background = background;
    }
    if let Some(margin) = args.margin {
        request.maker.margin = margin;
    }
    request.maker.crop |= args.crop;
    request.force_fallback |= args.force_fallback;

    let captures = args
        .captures
        .iter()
        .map(|p| boothframe::open_image(p))
        .collect::<PictureResult<Vec<_>>>()?;

    let maker = boothframe::get_picture_maker(&captures, &request)?;
    tracing::info!(
        width = maker.width(),
        height = maker.height(),
        backend = maker.kind().as_str(),
        "composing picture"
    );
    let picture = maker.build()?;

    save_png(&picture, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_layout(cfg: &PictureConfig, args: LayoutArgs) -> anyhow::Result<()> {
    let translations = cfg.load_translations()?;
    let mut fonts: Box<dyn FontProvider> = match &args.font {
        Some(path) => Box::new(boothframe::ParleyFontProvider::from_path(path)?),
        None => match cfg.load_font()? {
            Some(font) => Box::new(font),
            None => Box::new(NoFont),
        },
    };

    let layout = boothframe::get_layout_image(
        &cfg.asset_dir(),
        &translations,
        fonts.as_mut(),
        args.text_color.unwrap_or(cfg.text_color),
        args.bg_color.or(cfg.layout_bg_color),
        args.count,
        args.size,
    )?;

    save_png(&layout, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_main_color(args: MainColorArgs) -> anyhow::Result<()> {
    let px = boothframe::main_color(&args.image)?;
    let [r, g, b, _] = px.0;
    println!("{}", Color::rgb(r, g, b).to_hex());
    Ok(())
}

fn save_png(img: &RgbaImage, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", out.display()))
}

/// Stand-in when no caption font is configured; only fails if a caption must be drawn.
struct NoFont;

impl FontProvider for NoFont {
    fn fit_font_size(&mut self, _text: &str, _w: u32, _h: u32) -> PictureResult<f32> {
        Err(PictureError::validation(
            "layout has a caption but no font is configured (use --font)",
        ))
    }

    fn render_text(&mut self, _text: &str, _size_px: f32, _color: Color) -> PictureResult<RgbaImage> {
        Err(PictureError::validation("no caption font configured"))
    }
}
