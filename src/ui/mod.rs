/// UI building blocks
///
/// View-only helpers, split the way the screen is:
/// - Header, search bar, grid, cards and the empty/loading views (gallery.rs)
/// - The transient toast overlay (toast.rs)

pub mod gallery;
pub mod toast;
