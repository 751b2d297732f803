//! Design System Theme Constants
//!
//! Centralized colors, spacing, and sizing for the explorer window.
//! The window runs on iced's dark theme; these values sit on top of it.
//!
//! # Usage
//! ```ignore
//! use crate::ui::theme;
//!
//! let bg = theme::color::SURFACE;
//! let padding = theme::spacing::MD;
//! ```

use iced::widget::container;
use iced::{Border, Color};

use crate::graph::NodeRole;

// =============================================================================
// COLORS
// =============================================================================

pub mod color {
    use super::*;

    /// Cards, panels, the graph background
    /// Hex: #1a1a1f
    pub const SURFACE: Color = Color::from_rgb(
        0x1a as f32 / 255.0,
        0x1a as f32 / 255.0,
        0x1f as f32 / 255.0,
    );

    /// Hover tooltip background
    /// Hex: #232328
    pub const SURFACE_ELEVATED: Color = Color::from_rgb(
        0x23 as f32 / 255.0,
        0x23 as f32 / 255.0,
        0x28 as f32 / 255.0,
    );

    /// Hex: #2e2e35
    pub const BORDER_SUBTLE: Color = Color::from_rgb(
        0x2e as f32 / 255.0,
        0x2e as f32 / 255.0,
        0x35 as f32 / 255.0,
    );

    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.93, 0.93, 0.95);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.55, 0.6);

    /// Graph edges
    pub const EDGE: Color = Color::from_rgb(0.53, 0.53, 0.53);

    pub const ERROR: Color = Color::from_rgb(0.9, 0.3, 0.3);

    /// Marker color for a graph node role
    pub fn node(role: NodeRole) -> Color {
        let [r, g, b] = role.color();
        Color::from_rgb(r, g, b)
    }
}

// =============================================================================
// SPACING & TYPOGRAPHY
// =============================================================================

pub mod spacing {
    pub const XS: u16 = 4;
    pub const SM: u16 = 8;
    pub const MD: u16 = 12;
    pub const LG: u16 = 16;
}

pub mod typography {
    pub const SIZE_TITLE: u16 = 24;
    pub const SIZE_HEADING: u16 = 18;
    pub const SIZE_BODY: u16 = 14;
    pub const SIZE_SMALL: u16 = 12;
}

pub mod graph {
    /// Height of the graph canvas in pixels
    pub const CANVAS_HEIGHT: f32 = 380.0;
    /// Margin between canvas edge and outermost markers
    pub const MARGIN: f32 = 48.0;
    pub const NODE_RADIUS: f32 = 10.0;
    /// Cursor distance (pixels) that still counts as hovering a node
    pub const HOVER_RADIUS: f32 = 14.0;
}

// =============================================================================
// CONTAINER STYLE HELPERS
// =============================================================================

/// Card style - surface background with subtle border and radius
pub fn card_style() -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(color::SURFACE)),
        border: Border {
            color: color::BORDER_SUBTLE,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}
