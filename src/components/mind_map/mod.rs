mod component;
mod placement;
mod render;
mod state;
mod types;

pub use component::MindMapCanvas;
pub use placement::BrowserRandom;
pub use state::MindMapState;
pub use types::{ColorTag, Point};
