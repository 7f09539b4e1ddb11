//! Parse SVG and Android Vector Drawable path data and render it as Jetpack
//! Compose `ImageVector` path builder calls.
//!
//! ```
//! let code = pathcode::path_to_code("M0 0 h10 v10z", &pathcode::RenderOptions::minified())?;
//! assert!(code.contains("horizontalLineToRelative(dx = 10.0f)"));
//! # Ok::<(), miette::Report>(())
//! ```

pub mod command;
pub mod errors;
pub mod log;
pub mod node;
pub mod normalize;
pub mod parse;
pub mod render;
pub mod types;
pub mod wrapper;

use pest_derive::Parser;

pub use command::PathCommand;
pub use errors::PathError;
pub use node::{CommandNode, PathNode};
pub use render::RenderOptions;
pub use wrapper::PathWrapper;

/// Grammar for scalar fields of path commands.
#[derive(Parser)]
#[grammar = "path.pest"]
pub struct PathDataParser;

/// Normalize and parse raw path data.
pub fn parse_path(raw: &str, options: &RenderOptions) -> Result<PathWrapper, PathError> {
    let normalized = normalize::normalize(raw);
    parse::parse(&normalized, options.minified)
}

/// Render raw path data as a `path { ... }` block.
///
/// Returns the code on success, or an error with diagnostics.
pub fn path_to_code(raw: &str, options: &RenderOptions) -> Result<String, miette::Report> {
    let wrapper = parse_path(raw, options)?;
    if wrapper.exceeds_method_size_threshold() {
        log::warn!(
            size = wrapper.approximate_byte_size(),
            "path may exceed the JVM method size limit"
        );
    }
    Ok(wrapper.render_block("path", options.indent))
}
