// File-backed sprite sheet loading

use super::{
    resolve_from_delimited_string, resolve_from_table, slice, AnimationMap, FrameSequence,
    LabelOptions, SheetError, SheetImage,
};
use crate::core::Rect;
use anyhow::{Context, Result};
use image::DynamicImage;
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// A decoded sheet together with its frames and labelled animations
#[derive(Debug)]
pub struct SpriteSheet {
    pub image: DynamicImage,
    pub frames: FrameSequence,
    /// Empty when the sheet was loaded without labels
    pub animations: AnimationMap,
}

impl SpriteSheet {
    /// Get the frames of an animation by name
    pub fn animation(&self, name: &str) -> Option<&[Rect]> {
        self.animations.frames(name)
    }

    /// Bounds of the decoded image
    pub fn bounds(&self) -> Rect {
        self.image.sheet_bounds()
    }
}

/// Decode the image file at `path`
pub fn load_picture<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SheetError::NotFound(path.to_string_lossy().to_string()).into());
    }

    let image = image::open(path)
        .map_err(SheetError::from)
        .with_context(|| format!("error loading picture {}", path.display()))?;

    debug!(
        "Decoded {} ({}x{})",
        path.display(),
        image.sheet_bounds().width(),
        image.sheet_bounds().height()
    );

    Ok(image)
}

/// Loads sprite sheets and their label tables relative to a base directory
pub struct SheetLoader {
    base_path: PathBuf,
}

impl SheetLoader {
    /// Create a new sheet loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for a file
    pub fn resolve_path<P: AsRef<Path>>(&self, name: P) -> PathBuf {
        self.base_path.join(name)
    }

    /// Check if a file exists
    pub fn exists<P: AsRef<Path>>(&self, name: P) -> bool {
        self.resolve_path(name).exists()
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Load a sheet and slice it into frames, without labels
    pub fn load_sheet<P: AsRef<Path>>(&self, name: P, frame_width: f32) -> Result<SpriteSheet> {
        self.slice_sheet(name.as_ref(), frame_width)
            .context("error loading animation sheet")
    }

    /// Load a sheet and label its frames from a CSV table of `name,start,end`
    pub fn load_sheet_with_table<P: AsRef<Path>, T: AsRef<Path>>(
        &self,
        name: P,
        table_name: T,
        frame_width: f32,
    ) -> Result<SpriteSheet> {
        let load = || -> Result<SpriteSheet> {
            let mut sheet = self.slice_sheet(name.as_ref(), frame_width)?;

            let table_path = self.resolve_path(table_name.as_ref());
            if !table_path.exists() {
                return Err(SheetError::NotFound(table_path.to_string_lossy().to_string()).into());
            }
            let table = File::open(&table_path).map_err(SheetError::from)?;

            sheet.animations = resolve_from_table(&sheet.frames, BufReader::new(table))
                .with_context(|| format!("invalid label table {}", table_path.display()))?;

            info!(
                "Labelled {} animations in {} from {}",
                sheet.animations.len(),
                name.as_ref().display(),
                table_path.display()
            );
            Ok(sheet)
        };

        load().context("error loading animation sheet")
    }

    /// Load a sheet and label its frames from a flat `name,start,end,...` string
    pub fn load_sheet_with_labels<P: AsRef<Path>>(
        &self,
        name: P,
        labels: &str,
        frame_width: f32,
        options: &LabelOptions,
    ) -> Result<SpriteSheet> {
        let load = || -> Result<SpriteSheet> {
            let mut sheet = self.slice_sheet(name.as_ref(), frame_width)?;
            sheet.animations = resolve_from_delimited_string(&sheet.frames, labels, options)?;

            info!(
                "Labelled {} animations in {}",
                sheet.animations.len(),
                name.as_ref().display()
            );
            Ok(sheet)
        };

        load().context("error loading animation sheet")
    }

    fn slice_sheet(&self, name: &Path, frame_width: f32) -> Result<SpriteSheet> {
        let image = load_picture(self.resolve_path(name))?;
        let frames = slice(&image, frame_width)?;

        info!(
            "Sliced {} into {} frames of width {}",
            name.display(),
            frames.len(),
            frame_width
        );

        Ok(SpriteSheet {
            image,
            frames,
            animations: AnimationMap::default(),
        })
    }
}
