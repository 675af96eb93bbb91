// Sprite sheet system
//
// Cuts a sheet into fixed-width frames and labels ranges of those frames
// as named animations.
//
// - `bounds`: the decoded-image abstraction the slicer reads bounds from
// - `slicer`: frame slicing
// - `labels`: tabular and delimited-string label sources
// - `resolver`: turns label records into an animation map
// - `loader`: file-backed entry points built on the above

mod bounds;
mod labels;
mod loader;
mod resolver;
mod slicer;

use std::fmt;

pub use bounds::SheetImage;
pub use labels::{DelimitedTriples, LabelOptions, LabelRecord, TableRecords, TrailingGroup};
pub use loader::{load_picture, SheetLoader, SpriteSheet};
pub use resolver::{
    resolve, resolve_from_delimited_string, resolve_from_table, Animation, AnimationMap,
};
pub use slicer::{slice, slice_bounds, FrameSequence};

/// Which index field of a label record was at fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexField {
    Start,
    End,
}

impl fmt::Display for IndexField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexField::Start => write!(f, "start"),
            IndexField::End => write!(f, "end"),
        }
    }
}

/// Sprite sheet errors
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("Invalid frame width: {0} (must be positive and finite)")]
    InvalidFrameWidth(f32),

    #[error("Invalid {field} frame index {value:?} for animation {name:?} in record {record}")]
    InvalidFrameIndex {
        record: usize,
        name: String,
        field: IndexField,
        value: String,
    },

    #[error(
        "Frame range {start}..={end} of animation {name:?} is out of range for {frame_count} frames"
    )]
    FrameIndexOutOfRange {
        name: String,
        start: i64,
        end: i64,
        frame_count: usize,
    },

    #[error("Malformed record {record}: expected 3 fields, got {fields:?}")]
    MalformedRecord { record: usize, fields: Vec<String> },

    #[error("Failed to read label table: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Sprite sheet file not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
