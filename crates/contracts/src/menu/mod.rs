//! Tree menu engine
//!
//! Partitions the host's flat resource list into parent groups, their
//! children and top-level orphans, and tracks which groups are expanded.
//! Everything here is total over its input: malformed descriptors are
//! skipped, never reported as errors.

pub mod classify;
pub mod descriptor;
pub mod expansion;
pub mod label;

pub use classify::{build_render_plan, CustomEntry, RenderNode, RenderPlan};
pub use descriptor::{is_truthy, parse_resources, ResourceDescriptor, ResourceOptions};
pub use expansion::{active_parent, ExpansionState};
pub use label::{dashboard_label, humanize, resolve_label, IdentityTranslator, Translator};
