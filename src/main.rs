use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser};
use inpaint_mask::output::{expand_tilde, save_mask};
use inpaint_mask::session::{Session, SessionEnd, replay};
use inpaint_mask::util::parse_size;
use inpaint_mask::{Config, MaskEditor, PriorMask, SourceImage};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "inpaint-mask")]
#[command(
    version,
    long_version = env!("INPAINT_MASK_BUILD_VERSION"),
    about = "Paint selection masks for generative image edits"
)]
struct Cli {
    /// Source image (PNG) to paint over
    #[arg(long, short = 'i', value_name = "PNG", required_unless_present = "init_config")]
    image: Option<PathBuf>,

    /// Previously saved black/white mask to start from
    #[arg(long, short = 'm', value_name = "PNG")]
    mask: Option<PathBuf>,

    /// Available display area; the image is fitted inside it (default: source size)
    #[arg(long, short = 'c', value_name = "WIDTHxHEIGHT")]
    container: Option<String>,

    /// JSON session script to replay
    #[arg(long, short = 's', value_name = "JSON")]
    script: Option<PathBuf>,

    /// Where to write the mask (default: ./<export.filename>)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// On save, also write the composited preview (image plus highlight)
    #[arg(long, value_name = "PATH")]
    preview: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::get_config_path()?,
        };
        Config::create_default_file(&path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let image_path = cli
        .image
        .as_deref()
        .ok_or_else(|| anyhow!("--image is required"))?;
    let source = SourceImage::from_path(&resolve(image_path))
        .with_context(|| format!("Failed to load source image {}", image_path.display()))?;
    let prior = cli
        .mask
        .as_deref()
        .map(|path| {
            PriorMask::from_path(&resolve(path))
                .with_context(|| format!("Failed to load prior mask {}", path.display()))
        })
        .transpose()?;

    let (container_width, container_height) = match cli.container.as_deref() {
        Some(value) => parse_size(value)
            .ok_or_else(|| anyhow!("Invalid container size '{value}', expected WIDTHxHEIGHT"))?,
        None => (source.width() as u32, source.height() as u32),
    };

    let session = match &cli.script {
        Some(path) => Session::load(&resolve(path))?,
        None => Session::default(),
    };

    let mut editor = MaskEditor::new(&config);
    editor.open(source, prior);
    if editor.layout(container_width, container_height)?.is_none() {
        return Err(anyhow!(
            "Container {container_width}x{container_height} has no usable area"
        ));
    }

    let end = replay(&mut editor, &session)?;

    match end {
        SessionEnd::Close => {
            editor.close();
            println!("Closed without saving");
        }
        SessionEnd::Save => {
            if let Some(path) = &cli.preview {
                write_preview(&editor, &resolve(path))?;
            }
            let output = match &cli.output {
                Some(path) => resolve(path),
                None => PathBuf::from(editor.export_filename()),
            };
            let mut written = None;
            editor.save(|mask| written = Some(save_mask(&mask, &output)))?;
            match written {
                Some(result) => println!("Saved mask to {}", result?.display()),
                None => return Err(anyhow!("Nothing to save: surfaces were never laid out")),
            }
        }
    }

    Ok(())
}

fn write_preview(editor: &MaskEditor, path: &Path) -> Result<()> {
    let Some(preview) = editor.render_preview()? else {
        return Ok(());
    };
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create preview {}", path.display()))?;
    preview
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write preview {}", path.display()))?;
    log::info!("Wrote preview to {}", path.display());
    Ok(())
}

fn resolve(path: &Path) -> PathBuf {
    expand_tilde(&path.to_string_lossy())
}
