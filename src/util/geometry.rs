// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module maps fixed canvas coordinates onto the screen area the
//! canvas currently occupies, fitting all panels into view.

/// A point in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

impl CanvasPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub min: CanvasPoint,
    pub max: CanvasPoint,
}

impl CanvasRect {
    pub fn from_min_size(min: CanvasPoint, width: f32, height: f32) -> Self {
        Self {
            min,
            max: CanvasPoint::new(min.x + width, min.y + height),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn union(self, other: CanvasRect) -> CanvasRect {
        CanvasRect {
            min: CanvasPoint::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: CanvasPoint::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

/// Bounding box of all rects, or `None` when there are none.
pub fn bounds(rects: impl IntoIterator<Item = CanvasRect>) -> Option<CanvasRect> {
    rects.into_iter().reduce(CanvasRect::union)
}

pub const MIN_ZOOM: f32 = 0.8;
pub const MAX_ZOOM: f32 = 1.5;
/// Fraction of the view kept free around the content.
pub const FIT_PADDING: f32 = 0.1;

/// Scale and offset placing canvas coordinates on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl ViewTransform {
    pub const IDENTITY: ViewTransform = ViewTransform {
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    /// Fit `content` into a view of the given size, centred, with zoom
    /// clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`].
    pub fn fit(content: CanvasRect, view_width: f32, view_height: f32) -> ViewTransform {
        if content.width() <= 0.0 || content.height() <= 0.0 {
            return ViewTransform::IDENTITY;
        }
        let usable_w = view_width * (1.0 - 2.0 * FIT_PADDING);
        let usable_h = view_height * (1.0 - 2.0 * FIT_PADDING);
        let scale = (usable_w / content.width())
            .min(usable_h / content.height())
            .clamp(MIN_ZOOM, MAX_ZOOM);

        let center_x = (content.min.x + content.max.x) / 2.0;
        let center_y = (content.min.y + content.max.y) / 2.0;
        ViewTransform {
            scale,
            offset_x: view_width / 2.0 - center_x * scale,
            offset_y: view_height / 2.0 - center_y * scale,
        }
    }

    /// Canvas point to view-relative screen coordinates.
    pub fn apply(&self, point: CanvasPoint) -> (f32, f32) {
        (
            point.x * self.scale + self.offset_x,
            point.y * self.scale + self.offset_y,
        )
    }
}
