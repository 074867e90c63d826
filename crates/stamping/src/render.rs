//! GPU-ready stamp records for the renderer
//!
//! The renderer draws [`PatternStamp`] geometry directly; this module packs
//! the per-stamp parameters into a flat instance buffer it can upload as-is.

use crate::types::PatternStamp;

/// Per-stamp instance data
///
/// Field order keeps the struct free of padding so it stays `Pod`.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct StampInstance {
    /// [r, g, b, a]
    pub color: [f32; 4],
    /// Canvas-space center
    pub position: [f32; 2],
    pub scale: f32,
    /// Radians
    pub rotation: f32,
    pub opacity: f32,
    /// Number of primitives in the stamp's geometry
    pub primitive_count: u32,
    /// `PatternType` discriminant
    pub pattern: u32,
    pub _padding: u32,
}

impl From<&PatternStamp> for StampInstance {
    fn from(stamp: &PatternStamp) -> Self {
        Self {
            color: stamp.brush.color,
            position: [stamp.position.x as f32, stamp.position.y as f32],
            scale: stamp.brush.scale as f32,
            rotation: stamp.brush.rotation.to_radians() as f32,
            opacity: stamp.brush.opacity,
            primitive_count: stamp.geometry.len() as u32,
            pattern: stamp.brush.pattern as u32,
            _padding: 0,
        }
    }
}

/// Pack stamps into instance records, preserving order
pub fn stamp_instances(stamps: &[PatternStamp]) -> Vec<StampInstance> {
    stamps.iter().map(StampInstance::from).collect()
}

/// Raw bytes of an instance buffer
pub fn instance_bytes(instances: &[StampInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
