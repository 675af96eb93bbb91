// Label resolution: label records -> named frame ranges

use super::labels::{DelimitedTriples, LabelOptions, LabelRecord, TableRecords};
use super::{IndexField, SheetError};
use crate::core::Rect;
use std::collections::HashMap;
use std::io::Read;

/// A named, ordered run of frames
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    /// Name of the animation (e.g., "idle", "walk", "jump")
    pub name: String,
    /// Index of the first frame in the sheet
    pub first: usize,
    /// Index of the last frame in the sheet (inclusive)
    pub last: usize,
    /// Copies of `frames[first..=last]`, in sheet order
    pub frames: Vec<Rect>,
}

impl Animation {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Animations of a sheet keyed by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationMap {
    animations: HashMap<String, Animation>,
}

impl AnimationMap {
    /// Get an animation by name
    pub fn get(&self, name: &str) -> Option<&Animation> {
        self.animations.get(name)
    }

    /// Get the frames of an animation by name
    pub fn frames(&self, name: &str) -> Option<&[Rect]> {
        self.animations.get(name).map(|a| a.frames.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// All animation names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.animations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate over all animations in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Animation> {
        self.animations.values()
    }
}

/// Resolve label records against a frame list
///
/// Records are consumed in order. A later record with the same name
/// replaces the earlier one. The first bad record aborts resolution and
/// nothing is returned for the batch.
pub fn resolve<I>(frames: &[Rect], records: I) -> Result<AnimationMap, SheetError>
where
    I: IntoIterator<Item = Result<LabelRecord, SheetError>>,
{
    let mut animations = HashMap::new();

    for record in records {
        let animation = resolve_record(frames, record?)?;
        animations.insert(animation.name.clone(), animation);
    }

    Ok(AnimationMap { animations })
}

/// Resolve animations from comma-separated rows of `name,start,end`
pub fn resolve_from_table<R: Read>(frames: &[Rect], reader: R) -> Result<AnimationMap, SheetError> {
    resolve(frames, TableRecords::new(reader))
}

/// Resolve animations from a flat string of `name,start,end` triples
pub fn resolve_from_delimited_string(
    frames: &[Rect],
    text: &str,
    options: &LabelOptions,
) -> Result<AnimationMap, SheetError> {
    resolve(frames, DelimitedTriples::new(text, options))
}

fn resolve_record(frames: &[Rect], record: LabelRecord) -> Result<Animation, SheetError> {
    let start = parse_index(&record, IndexField::Start)?;
    let end = parse_index(&record, IndexField::End)?;

    let frame_count = frames.len();
    let in_range = 0 <= start && start <= end && (end as u64) < frame_count as u64;
    if !in_range {
        return Err(SheetError::FrameIndexOutOfRange {
            name: record.name,
            start,
            end,
            frame_count,
        });
    }

    let (first, last) = (start as usize, end as usize);
    Ok(Animation {
        frames: frames[first..=last].to_vec(),
        name: record.name,
        first,
        last,
    })
}

fn parse_index(record: &LabelRecord, field: IndexField) -> Result<i64, SheetError> {
    let value = match field {
        IndexField::Start => &record.start,
        IndexField::End => &record.end,
    };

    value
        .parse::<i64>()
        .map_err(|_| SheetError::InvalidFrameIndex {
            record: record.ordinal,
            name: record.name.clone(),
            field,
            value: value.clone(),
        })
}
