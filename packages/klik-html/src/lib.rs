pub mod render;

pub use render::{ChunkIter, render_to_string};
