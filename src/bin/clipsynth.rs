use std::path::PathBuf;

use anyhow::{bail, Context as _};
use clap::{Parser, Subcommand};

use clipsynth::{
    generate, generate_image, generate_thumbnail, image_title, render_waveform, synthesize_speech,
    thumbnail_title, write_png, Accent, AspectRatio, CancelToken, CaptionStyle, ColorScheme,
    ContentPlanner, GalleryStore, GenerateOptions, GenerationRequest, ImageOptions, ImageStyle,
    LogProgress, MediaArtifact, MediaKind, Platform, Rgba8, SceneKind, SpeechParams, SpeechPitch,
    SpeechRate, ThumbnailOptions, VisualStyle, VoiceKind,
};

#[derive(Parser, Debug)]
#[command(name = "clipsynth", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a short clip from a prompt (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Generate a still image from a prompt.
    Image(ImageArgs),
    /// Synthesize a speech-cadence audio clip from text.
    Speech(SpeechArgs),
    /// Generate a platform thumbnail from a prompt.
    Thumbnail(ThumbnailArgs),
    /// Inspect or edit the gallery store.
    Gallery(GalleryArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Free-text prompt driving the content plan.
    #[arg(long)]
    prompt: String,

    /// Visual style: realistic, cartoon, or sketch.
    #[arg(long, default_value = "realistic")]
    style: String,

    /// Scene type: talking-head, product-demo, nature, abstract, tutorial.
    #[arg(long = "scene-type", default_value = "talking-head")]
    scene_type: String,

    /// Voice: male, female, child, robotic.
    #[arg(long, default_value = "female")]
    voice: String,

    /// Disable the caption overlay.
    #[arg(long, default_value_t = false)]
    no_captions: bool,

    /// Skip audio synthesis; produce a silent clip.
    #[arg(long, default_value_t = false)]
    no_audio: bool,

    /// Caption background color (#rrggbb).
    #[arg(long, default_value = "#000000")]
    caption_bg: String,

    /// Caption text color (#rrggbb).
    #[arg(long, default_value = "#ffffff")]
    caption_text: String,

    /// Caption background opacity in [0, 1].
    #[arg(long, default_value_t = 0.8)]
    caption_opacity: f64,

    /// Custom overlay fields as key=value; repeatable.
    #[arg(long = "field")]
    fields: Vec<String>,

    /// Clip length in seconds.
    #[arg(long, default_value_t = 5.0)]
    duration: f64,

    /// Determinism seed for randomized effects.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output directory.
    #[arg(long, default_value = "./output")]
    out_dir: PathBuf,

    /// Stem for the produced files.
    #[arg(long, default_value = "clip")]
    base_name: String,

    /// Render frames in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Gallery store to append the result to.
    #[arg(long)]
    gallery: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ImageArgs {
    #[arg(long)]
    prompt: String,

    /// Image style: photorealistic, digital-art, oil-painting,
    /// watercolor, sketch.
    #[arg(long, default_value = "digital-art")]
    style: String,

    /// Aspect ratio: square, landscape, portrait, classic.
    #[arg(long = "aspect-ratio", default_value = "square")]
    aspect_ratio: String,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Gallery store to append the result to.
    #[arg(long)]
    gallery: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SpeechArgs {
    #[arg(long)]
    text: String,

    #[arg(long, default_value = "female")]
    voice: String,

    /// Accent: american, british, australian, indian, canadian.
    #[arg(long, default_value = "american")]
    accent: String,

    /// Rate: slow, normal, fast.
    #[arg(long, default_value = "normal")]
    rate: String,

    /// Pitch: low, normal, high.
    #[arg(long, default_value = "normal")]
    pitch: String,

    /// Output WAV path.
    #[arg(long)]
    out: PathBuf,

    /// Also write a waveform visualization PNG here.
    #[arg(long)]
    waveform: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ThumbnailArgs {
    #[arg(long)]
    prompt: String,

    /// Platform: youtube, instagram, tiktok.
    #[arg(long, default_value = "youtube")]
    platform: String,

    /// Color scheme: bright, dark, minimal, colorful.
    #[arg(long = "color-scheme", default_value = "bright")]
    color_scheme: String,

    /// Overlay text.
    #[arg(long)]
    text: Option<String>,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct GalleryArgs {
    /// Gallery store file.
    #[arg(long)]
    store: PathBuf,

    #[command(subcommand)]
    cmd: GalleryCommand,
}

#[derive(Subcommand, Debug)]
enum GalleryCommand {
    /// List entries, newest first.
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long = "page-size", default_value_t = 12)]
        page_size: usize,
    },
    /// Delete an entry by id.
    Delete {
        #[arg(long)]
        id: u64,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Image(args) => cmd_image(args),
        Command::Speech(args) => cmd_speech(args),
        Command::Thumbnail(args) => cmd_thumbnail(args),
        Command::Gallery(args) => cmd_gallery(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut request = GenerationRequest::new(args.prompt);
    request.visual_style = parse_style(&args.style)?;
    request.scene_kind = parse_scene_kind(&args.scene_type)?;
    request.voice = parse_voice(&args.voice)?;
    request.include_captions = !args.no_captions;
    request.include_audio = !args.no_audio;
    request.caption_style = CaptionStyle {
        bg: Rgba8::from_hex(&args.caption_bg)?,
        text: Rgba8::from_hex(&args.caption_text)?,
        bg_opacity: args.caption_opacity,
    };
    request.custom_fields = parse_fields(&args.fields)?;
    request.duration_sec = args.duration;
    request.seed = args.seed;

    let planner = ContentPlanner::from_env();
    let mut opts = GenerateOptions::new(&args.out_dir);
    opts.base_name = args.base_name;
    opts.parallel_render = args.parallel;

    let cancel = CancelToken::new();
    let mut progress = LogProgress::default();
    let artifact = generate(&planner, &request, &opts, &cancel, &mut progress)?;

    if let Some(store_path) = args.gallery {
        append_to_gallery(&store_path, &artifact, &request.tool, serde_json::to_value(&request)?)?;
    }

    eprintln!("wrote {}", artifact.path.display());
    Ok(())
}

fn cmd_image(args: ImageArgs) -> anyhow::Result<()> {
    let options = ImageOptions {
        prompt: args.prompt.clone(),
        style: parse_image_style(&args.style)?,
        aspect_ratio: parse_aspect_ratio(&args.aspect_ratio)?,
        seed: args.seed,
    };
    let frame = generate_image(&options);
    write_png(&frame, &args.out)?;

    if let Some(store_path) = args.gallery {
        let artifact = MediaArtifact {
            kind: MediaKind::Image,
            path: args.out.clone(),
            title: image_title(&options.prompt),
            duration_label: String::new(),
            thumbnail: Some(args.out.clone()),
            has_audio: false,
            insights: None,
        };
        append_to_gallery(
            &store_path,
            &artifact,
            "text-to-image",
            serde_json::json!({
                "prompt": options.prompt,
                "style": options.style.label(),
                "aspectRatio": options.aspect_ratio.label(),
            }),
        )?;
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_speech(args: SpeechArgs) -> anyhow::Result<()> {
    let params = SpeechParams {
        voice: parse_voice(&args.voice)?,
        accent: parse_accent(&args.accent)?,
        rate: parse_rate(&args.rate)?,
        pitch: parse_pitch(&args.pitch)?,
    };
    let clip = synthesize_speech(&args.text, params);
    clip.write_wav(&args.out)?;
    if let Some(waveform_path) = args.waveform {
        write_png(&render_waveform(&clip), &waveform_path)?;
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_thumbnail(args: ThumbnailArgs) -> anyhow::Result<()> {
    let options = ThumbnailOptions {
        prompt: args.prompt,
        platform: parse_platform(&args.platform)?,
        color_scheme: parse_color_scheme(&args.color_scheme)?,
        text_overlay: args.text,
        seed: args.seed,
    };
    let frame = generate_thumbnail(&options);
    write_png(&frame, &args.out)?;
    eprintln!("wrote {} ({})", args.out.display(), thumbnail_title(&options));
    Ok(())
}

fn cmd_gallery(args: GalleryArgs) -> anyhow::Result<()> {
    let mut store = GalleryStore::open(&args.store)?;
    match args.cmd {
        GalleryCommand::List { page, page_size } => {
            let entries = store.page(page, page_size);
            if entries.is_empty() {
                eprintln!("no entries on page {page}");
                return Ok(());
            }
            for entry in entries {
                println!(
                    "{:>4}  {:<12}  {}  {}",
                    entry.id,
                    entry.tool,
                    entry.artifact.title,
                    entry.artifact.path.display()
                );
            }
        }
        GalleryCommand::Delete { id } => {
            if store.remove(id)? {
                eprintln!("deleted entry {id}");
            } else {
                bail!("no gallery entry with id {id}");
            }
        }
    }
    Ok(())
}

fn append_to_gallery(
    store_path: &PathBuf,
    artifact: &MediaArtifact,
    tool: &str,
    settings: serde_json::Value,
) -> anyhow::Result<()> {
    let mut store = GalleryStore::open(store_path)?;
    let entry = store
        .add(artifact.clone(), tool, settings)
        .with_context(|| format!("appending to gallery '{}'", store_path.display()))?;
    eprintln!("gallery entry {} added", entry.id);
    Ok(())
}

fn parse_style(s: &str) -> anyhow::Result<VisualStyle> {
    Ok(match s.to_lowercase().as_str() {
        "realistic" => VisualStyle::Realistic,
        "cartoon" => VisualStyle::Cartoon,
        "sketch" => VisualStyle::Sketch,
        other => bail!("unknown visual style '{other}'"),
    })
}

fn parse_scene_kind(s: &str) -> anyhow::Result<SceneKind> {
    Ok(match s.to_lowercase().as_str() {
        "talking-head" => SceneKind::TalkingHead,
        "product-demo" => SceneKind::ProductDemo,
        "nature" => SceneKind::Nature,
        "abstract" => SceneKind::Abstract,
        "tutorial" => SceneKind::Tutorial,
        other => bail!("unknown scene type '{other}'"),
    })
}

fn parse_voice(s: &str) -> anyhow::Result<VoiceKind> {
    Ok(match s.to_lowercase().as_str() {
        "male" => VoiceKind::Male,
        "female" => VoiceKind::Female,
        "child" => VoiceKind::Child,
        "robotic" => VoiceKind::Robotic,
        other => bail!("unknown voice '{other}'"),
    })
}

fn parse_accent(s: &str) -> anyhow::Result<Accent> {
    Ok(match s.to_lowercase().as_str() {
        "american" => Accent::American,
        "british" => Accent::British,
        "australian" => Accent::Australian,
        "indian" => Accent::Indian,
        "canadian" => Accent::Canadian,
        other => bail!("unknown accent '{other}'"),
    })
}

fn parse_rate(s: &str) -> anyhow::Result<SpeechRate> {
    Ok(match s.to_lowercase().as_str() {
        "slow" => SpeechRate::Slow,
        "normal" => SpeechRate::Normal,
        "fast" => SpeechRate::Fast,
        other => bail!("unknown rate '{other}'"),
    })
}

fn parse_pitch(s: &str) -> anyhow::Result<SpeechPitch> {
    Ok(match s.to_lowercase().as_str() {
        "low" => SpeechPitch::Low,
        "normal" => SpeechPitch::Normal,
        "high" => SpeechPitch::High,
        other => bail!("unknown pitch '{other}'"),
    })
}

fn parse_image_style(s: &str) -> anyhow::Result<ImageStyle> {
    Ok(match s.to_lowercase().as_str() {
        "photorealistic" => ImageStyle::Photorealistic,
        "digital-art" => ImageStyle::DigitalArt,
        "oil-painting" => ImageStyle::OilPainting,
        "watercolor" => ImageStyle::Watercolor,
        "sketch" => ImageStyle::Sketch,
        other => bail!("unknown image style '{other}'"),
    })
}

fn parse_aspect_ratio(s: &str) -> anyhow::Result<AspectRatio> {
    Ok(match s.to_lowercase().as_str() {
        "square" | "1:1" => AspectRatio::Square,
        "landscape" | "16:9" => AspectRatio::Landscape,
        "portrait" | "9:16" => AspectRatio::Portrait,
        "classic" | "4:3" => AspectRatio::Classic,
        other => bail!("unknown aspect ratio '{other}'"),
    })
}

fn parse_platform(s: &str) -> anyhow::Result<Platform> {
    Ok(match s.to_lowercase().as_str() {
        "youtube" => Platform::YouTube,
        "instagram" => Platform::Instagram,
        "tiktok" => Platform::TikTok,
        other => bail!("unknown platform '{other}'"),
    })
}

fn parse_color_scheme(s: &str) -> anyhow::Result<ColorScheme> {
    Ok(match s.to_lowercase().as_str() {
        "bright" => ColorScheme::BrightBold,
        "dark" => ColorScheme::DarkMoody,
        "minimal" => ColorScheme::CleanMinimal,
        "colorful" => ColorScheme::Colorful,
        other => bail!("unknown color scheme '{other}'"),
    })
}

fn parse_fields(fields: &[String]) -> anyhow::Result<Vec<(String, String)>> {
    fields
        .iter()
        .map(|f| {
            f.split_once('=')
                .map(|(k, v)| (k.trim().to_owned(), v.trim().to_owned()))
                .with_context(|| format!("field '{f}' must be key=value"))
        })
        .collect()
}
