//! Token stream -> HTML document rendering.

mod blocks;
mod head;
mod notes;
mod reference;
mod render;

pub use reference::{Resolution, resolve, resolve_body};
pub use render::{Renderer, render_document};
