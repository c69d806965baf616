//! Renderers turning a finished layout plan into output text.

pub mod dot;

pub use dot::DotRenderer;

use crate::layout::TreeDoc;
use crate::model::Family;

/// Trait for graph-description renderers.
///
/// Renderers write into one buffer and never fail: fatal layout problems are
/// caught while the plan is built, before any output exists.
pub trait Renderer {
    /// Render a laid-out tree to an output document.
    fn render(&self, family: &Family, doc: &TreeDoc) -> String;
}
