//! Page palette and the allocation type → fill color rule

use crate::dump::FREE_TYPE;
use image::{Rgb, Rgba};

/// D3D12_RESOURCE_FLAG_ALLOW_RENDER_TARGET
pub const FLAG_ALLOW_RENDER_TARGET: u64 = 0x1;
/// D3D12_RESOURCE_FLAG_ALLOW_DEPTH_STENCIL
pub const FLAG_ALLOW_DEPTH_STENCIL: u64 = 0x2;
/// D3D12_RESOURCE_FLAG_ALLOW_UNORDERED_ACCESS
pub const FLAG_ALLOW_UNORDERED_ACCESS: u64 = 0x4;
/// D3D12_RESOURCE_FLAG_DENY_SHARED_RESOURCE
pub const FLAG_DENY_SHARED_RESOURCE: u64 = 0x8;

/// D3D12_TEXTURE_LAYOUT_UNKNOWN
pub const LAYOUT_UNKNOWN: u64 = 0;

pub struct Theme {
    pub background: Rgba<u8>,
    pub text_h1: Rgba<u8>,    // Heap type headers
    pub text_h2: Rgba<u8>,    // Row labels and grid sizes
    pub outline: Rgba<u8>,
    pub outline_hard: Rgba<u8>, // Sub-pixel suballocation marker
    pub grid_line: Rgba<u8>,
    pub free: Rgba<u8>,
    pub buffer: Rgba<u8>,         // Yellow
    pub texture_layout: Rgba<u8>, // Green
    pub texture_depth_stencil: Rgba<u8>, // Pink
    pub texture_rt_uav: Rgba<u8>, // Light blue
    pub texture_shareable: Rgba<u8>, // Aqua
    pub texture_other: Rgba<u8>,  // Light aqua
    pub unknown: Rgba<u8>,        // Gray
}

pub const DEFAULT_THEME: Theme = Theme {
    background: Rgba([255, 255, 255, 255]),
    text_h1: Rgba([0, 0, 0, 255]),
    text_h2: Rgba([150, 150, 150, 255]),
    outline: Rgba([155, 155, 155, 255]),
    outline_hard: Rgba([0, 0, 0, 255]),
    grid_line: Rgba([224, 224, 224, 255]),
    free: Rgba([220, 220, 220, 255]),
    buffer: Rgba([255, 255, 0, 255]),
    texture_layout: Rgba([0, 255, 0, 255]),
    texture_depth_stencil: Rgba([246, 128, 255, 255]),
    texture_rt_uav: Rgba([179, 179, 255, 255]),
    texture_shareable: Rgba([0, 255, 255, 255]),
    texture_other: Rgba([183, 255, 255, 255]),
    unknown: Rgba([175, 175, 175, 255]),
};

fn is_texture(kind: &str) -> bool {
    matches!(kind, "TEXTURE1D" | "TEXTURE2D" | "TEXTURE3D")
}

/// Fill color for an allocation of the given type, flags and layout
///
/// For textures with unknown layout the flag checks run in a fixed order:
/// depth-stencil, then render-target/UAV, then shared-resource.
pub fn type_to_color(kind: &str, flags: u64, layout: u64) -> Rgba<u8> {
    if kind == FREE_TYPE {
        DEFAULT_THEME.free
    } else if kind == "BUFFER" {
        DEFAULT_THEME.buffer
    } else if is_texture(kind) {
        if layout != LAYOUT_UNKNOWN {
            DEFAULT_THEME.texture_layout
        } else if flags & FLAG_ALLOW_DEPTH_STENCIL != 0 {
            DEFAULT_THEME.texture_depth_stencil
        } else if flags & (FLAG_ALLOW_RENDER_TARGET | FLAG_ALLOW_UNORDERED_ACCESS) != 0 {
            DEFAULT_THEME.texture_rt_uav
        } else if flags & FLAG_DENY_SHARED_RESOURCE == 0 {
            DEFAULT_THEME.texture_shareable
        } else {
            DEFAULT_THEME.texture_other
        }
    } else {
        DEFAULT_THEME.unknown
    }
}

/// Drop alpha for painting onto the RGB page
pub fn opaque(color: Rgba<u8>) -> Rgb<u8> {
    let [r, g, b, _] = color.0;
    Rgb([r, g, b])
}
