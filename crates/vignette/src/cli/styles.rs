//! Styles command handler.

use vignette_continuity::StyleCatalog;

/// Handles the styles command, listing the catalog in key order.
pub fn handle_styles_command() {
    for style in StyleCatalog::all() {
        println!("{} - {}", style.key, style.name);
        println!("    {}", style.description);
    }
}
