//! hostfetch core: the tiered-probe resolution engine, attribute resolvers,
//! platform capability layer, and report rendering.
//!
//! The flow is one-shot and fully synchronous: the CLI loads the immutable
//! display configuration, a [`Prober`] resolves each configured attribute
//! through its ordered source list, and the renderer writes one labeled line
//! per outcome. Probes degrade to explicit unsupported outcomes instead of
//! failing the run.

pub mod attrs;
pub mod logging;
pub mod platform;
pub mod probe;
pub mod render;

pub use attrs::Prober;
pub use probe::{ProbeOutcome, ResolvedValue, Runner};
pub use render::Renderer;
