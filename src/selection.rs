use crate::models::Rect;

/// Interactive state of a rectangle selection driven by pointer events.
///
/// A host shell feeds press/drag/release coordinates in image space; the
/// in-progress and final rectangles fall out normalized regardless of drag
/// direction. Validation against the image is not done here: a released
/// selection may still be degenerate or out of bounds, and
/// [`crate::clamp_to_bounds`] decides whether it is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Dragging {
        origin: (i32, i32),
        current: (i32, i32),
    },
    Selected(Rect),
}

impl Selection {
    /// Start a new drag, discarding any previous selection.
    pub fn press(&mut self, x: i32, y: i32) {
        *self = Selection::Dragging {
            origin: (x, y),
            current: (x, y),
        };
    }

    /// Update the moving corner of an in-progress drag. No-op otherwise.
    pub fn drag_to(&mut self, x: i32, y: i32) {
        if let Selection::Dragging { current, .. } = self {
            *current = (x, y);
        }
    }

    /// Finish the drag at the release point and return the selected rectangle.
    ///
    /// Returns `None` when no drag was in progress.
    pub fn release(&mut self, x: i32, y: i32) -> Option<Rect> {
        if let Selection::Dragging { origin, .. } = *self {
            let rect = Rect::from_corners(origin, (x, y));
            *self = Selection::Selected(rect);
            Some(rect)
        } else {
            None
        }
    }

    /// The current rectangle: final if selected, live if mid-drag.
    pub fn rect(&self) -> Option<Rect> {
        match *self {
            Selection::Idle => None,
            Selection::Dragging { origin, current } => Some(Rect::from_corners(origin, current)),
            Selection::Selected(rect) => Some(rect),
        }
    }

    pub fn clear(&mut self) {
        *self = Selection::Idle;
    }
}
