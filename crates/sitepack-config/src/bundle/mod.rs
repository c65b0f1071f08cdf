//! Bundle configuration types: output naming, transform rules and output plugins.

mod css;
mod helpers;
mod html;
mod output;
mod plugin;
mod rule;

pub use css::CssBundle;
pub use html::{HtmlPage, InjectExtras, TagDescriptor};
pub use output::{NAME_PLACEHOLDER, OutputConfig, OutputKind, PlannedOutput};
pub use plugin::OutputPlugin;
pub use rule::{EXTRACT_LOADER, FILE_LOADER, FilePattern, ModuleOptions, TransformRule, TransformStep};

pub(crate) use helpers::normalize_output_name;
