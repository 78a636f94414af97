//! pagemenu: paginated, colorized selection menus for text terminals.

pub mod banner;
pub mod config;
pub mod display;
pub mod layout;
pub mod list;
pub mod logging;
pub mod metrics;
pub mod theme;
pub mod tui;
pub mod types;
