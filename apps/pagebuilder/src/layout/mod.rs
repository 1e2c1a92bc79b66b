// Layout engine: variant resolution, bento sizing, carousel paging and the
// preview payload built on top of them. Everything here is pure and synchronous.

pub mod bento;
pub mod carousel;
pub mod preview;
pub mod variants;

pub use bento::FiveItemRule;
pub use preview::{preview_block, BlockPreview, PreviewOptions};
