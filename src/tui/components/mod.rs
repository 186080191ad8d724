// Components module - reusable UI building blocks
//
// Shell components are rendered on every screen:
// - Navbar: shop name, tabs, cart badge, account
// - Status bar: assistant status and key hints
// - Logs panel: System log entries (toggled)
//
// Cat cards and toasts are shared by the screens and overlays.

pub mod cat_card;
pub mod logs_panel;
pub mod navbar;
pub mod status_bar;
pub mod toast;

pub use toast::{Toast, ToastKind};
