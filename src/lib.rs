//! # Introduction
//!
//! `d3d12ma-dumpvis` reads the JSON memory dump written by the D3D12 Memory
//! Allocator and draws one horizontal bar per memory block or committed
//! allocation, so fragmentation and placement can be inspected at a glance.
//!
//! ## Pipeline
//!
//! ```text
//! Dump file → decode → parse → Dump → calc_params → render_page → PNG
//! ```
//!
//! 1. [`dump`] — decodes the UTF-16LE file and walks the fixed schema into a
//!    [`dump::Dump`] of heap type sections.
//! 2. [`layout`] — one pass over the model for image height and byte scale.
//! 3. [`render`] — paints the grid ruler, labels and bars onto an
//!    [`image::RgbImage`].
//!
//! ## Colors
//!
//! FREE space is light gray, buffers yellow. Textures are green when their
//! layout is known; otherwise pink (depth-stencil), light blue (render target
//! or UAV), aqua (shareable) or light aqua. Anything else is gray. Allocations
//! narrower than two pixels are drawn as a single black line.

pub mod constants;
pub mod dump;
pub mod errors;
pub mod layout;
pub mod render;

pub use errors::{VisError, VisResult};
