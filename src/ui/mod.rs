//! Terminal UI for lyrsync.
//!
//! Split the way a renderer should be:
//! - `view`: pure frame layout, no IO
//! - `screen`: terminal lifecycle, the exclusive screen lock, and painting

pub mod screen;
pub mod view;
