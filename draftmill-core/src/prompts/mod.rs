//! Instruction templates: the persisted store and placeholder substitution.

mod render;
mod store;

pub use render::render;
pub use store::{PromptStore, PromptTemplate};
