// Sprite sheet slicing and animation labelling
//
// A sheet is a single image holding same-width frames laid out left to
// right. `sheet::slice` cuts it into frame rectangles and the resolvers
// attach names to contiguous runs of those frames:
//
// ```rust
// use sprite_slicer::{resolve_from_delimited_string, slice_bounds, LabelOptions, Rect};
//
// let frames = slice_bounds(Rect::from_size(160.0, 32.0), 32.0)?;
// let anims = resolve_from_delimited_string(&frames, "idle,0,1,jump,2,4", &LabelOptions::default())?;
// assert_eq!(anims.frames("jump").unwrap().len(), 3);
// ```

pub mod core;
pub mod sheet;

pub use crate::core::Rect;
pub use sheet::{
    load_picture, resolve, resolve_from_delimited_string, resolve_from_table, slice,
    slice_bounds, Animation, AnimationMap, DelimitedTriples, FrameSequence, IndexField,
    LabelOptions, LabelRecord, SheetError, SheetImage, SheetLoader, SpriteSheet, TableRecords,
    TrailingGroup,
};
