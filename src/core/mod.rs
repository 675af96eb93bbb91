// Core geometry shared by the slicer and its consumers

pub mod rect;

pub use rect::Rect;
