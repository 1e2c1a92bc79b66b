// Composition engine: the ordered block list of a page, its snapshot codec,
// preset catalog and preview fixtures.

pub mod block;
pub mod handlers;
pub mod items;
pub mod model;
pub mod presets;
pub mod snapshot;

pub use block::{BlockConfig, BlockId, BlockPatch, ContentSlotConfig};
pub use model::{Composition, MoveDirection};
pub use snapshot::CompositionSnapshot;
