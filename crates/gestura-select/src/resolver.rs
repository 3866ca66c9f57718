//! Selection contract between the gesture pipeline and the renderer

use gestura_core::{GestureState, GestureType, Vec3};
use gestura_transform::ObjectTransform;
use tracing::trace;

use crate::{Camera, Ray};

/// A hit on the displayed object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Index into the resolver's item list
    pub index: usize,
    /// Hit item's position relative to the object center, before transform
    pub local_position: Vec3,
    /// World-space distance from the ray origin
    pub distance: f32,
}

/// Maps a world-space ray onto the transformed object.
///
/// Implementations report the nearest item along the ray, or `None` on a miss.
pub trait SelectionResolver {
    fn resolve(&self, ray: &Ray, transform: &ObjectTransform) -> Option<Selection>;
}

/// Resolve the pointer of a `Point` gesture; every other gesture selects nothing
pub fn resolve_pointer<R: SelectionResolver + ?Sized>(
    state: &GestureState,
    camera: &Camera,
    transform: &ObjectTransform,
    resolver: &R,
) -> Option<Selection> {
    if state.gesture != GestureType::Point {
        return None;
    }
    let pointer = state.pointer()?;
    let ray = camera.ray_from_ndc(pointer);
    let hit = resolver.resolve(&ray, transform);
    trace!(x = pointer.x, y = pointer.y, hit = ?hit.map(|s| s.index), "pointer resolved");
    hit
}

/// Tracks which item is currently hovered
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoverTracker {
    hovered: Option<Selection>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest resolution; returns true when the hovered item changed
    pub fn update(&mut self, selection: Option<Selection>) -> bool {
        let changed = self.hovered.map(|s| s.index) != selection.map(|s| s.index);
        self.hovered = selection;
        changed
    }

    pub fn hovered(&self) -> Option<&Selection> {
        self.hovered.as_ref()
    }

    pub fn clear(&mut self) {
        self.hovered = None;
    }
}
