//! Tree pipeline: JSON text → tree model → rendered, collapsible tree.
//!
//! - [`model`] — one-shot decoding and the immutable [`model::TreeNode`]
//!   tagged union.
//! - [`view_state`] — expand/collapse flags keyed by node path, kept apart
//!   from the model.
//! - [`renderer`] — walks model + view state into styled lines, and the
//!   one-shot [`renderer::JsonRenderer`].

pub mod model;
pub mod renderer;
pub mod view_state;

pub use model::{DecodeError, TreeNode, build, decode};
pub use renderer::{JsonRenderer, render_tree};
pub use view_state::TreeViewState;
