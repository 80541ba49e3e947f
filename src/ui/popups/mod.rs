//! Modal overlays drawn over the page.
//!
//! - [`confirm`] - quit prompt and the shared confirmation layout
//! - [`disconnect`] - the wallet disconnect dialog

pub mod confirm;
pub mod disconnect;

pub use confirm::render as render_confirm_quit;
pub use disconnect::render as render_disconnect_dialog;
