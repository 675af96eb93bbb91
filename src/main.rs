use anyhow::Result;
use clap::Parser;
use log::info;
use sprite_slicer::{LabelOptions, SheetLoader, SpriteSheet, TrailingGroup};
use std::path::PathBuf;

/// Slice a sprite sheet into frames and print its animations
#[derive(Parser, Debug)]
#[command(name = "sprite-slicer", version)]
struct Args {
    /// Sprite sheet image (png or jpeg)
    sheet: PathBuf,

    /// Width of a single frame in pixels
    #[arg(long, short = 'w')]
    frame_width: f32,

    /// CSV file of `name,start,end` rows
    #[arg(long, conflicts_with = "labels")]
    table: Option<PathBuf>,

    /// Flat `name,start,end,...` label string
    #[arg(long)]
    labels: Option<String>,

    /// Separator for `--labels`
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Fail on an incomplete trailing group in `--labels`
    #[arg(long)]
    strict_groups: bool,

    /// Also print normalized texture coordinates
    #[arg(long)]
    uv: bool,
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    info!("Loading sprite sheet {}", args.sheet.display());

    let loader = SheetLoader::new("");
    let sheet_name = args.sheet.as_path();

    let sheet = match (&args.table, &args.labels) {
        (Some(table), _) => {
            loader.load_sheet_with_table(sheet_name, table, args.frame_width)?
        }
        (None, Some(labels)) => {
            let policy = if args.strict_groups {
                TrailingGroup::Reject
            } else {
                TrailingGroup::Ignore
            };
            let options = LabelOptions::new()
                .with_delimiter(args.delimiter)
                .with_trailing_group(policy);
            loader.load_sheet_with_labels(sheet_name, labels, args.frame_width, &options)?
        }
        (None, None) => loader.load_sheet(sheet_name, args.frame_width)?,
    };

    print_sheet(&sheet, args.uv);
    Ok(())
}

fn print_sheet(sheet: &SpriteSheet, with_uv: bool) {
    let bounds = sheet.bounds();
    println!(
        "{}x{} sheet, {} frames of width {}",
        bounds.width(),
        bounds.height(),
        sheet.frames.len(),
        sheet.frames.frame_width()
    );

    for (i, frame) in sheet.frames.iter().enumerate() {
        if with_uv {
            let (uv_min, uv_max) = frame.uv(&bounds);
            println!(
                "  [{i}] ({}, {}) - ({}, {})  uv ({:.4}, {:.4}) - ({:.4}, {:.4})",
                frame.min.x,
                frame.min.y,
                frame.max.x,
                frame.max.y,
                uv_min.x,
                uv_min.y,
                uv_max.x,
                uv_max.y
            );
        } else {
            println!(
                "  [{i}] ({}, {}) - ({}, {})",
                frame.min.x, frame.min.y, frame.max.x, frame.max.y
            );
        }
    }

    for name in sheet.animations.names() {
        if let Some(anim) = sheet.animations.get(name) {
            println!(
                "{}: frames {}..={} ({} frames)",
                anim.name,
                anim.first,
                anim.last,
                anim.frame_count()
            );
        }
    }
}
