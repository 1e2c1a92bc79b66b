// Source generation: projects a composition onto `<SectionBlock>` markup.

pub mod codegen;
pub mod handlers;

pub use codegen::{generate, generate_block};
