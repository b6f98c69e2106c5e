//! The application layer: page composition, theme, keymap and settings.

pub mod keymap;
pub mod layout;
pub mod page;
pub mod settings;
pub mod theme;

pub use keymap::Keymap;
pub use page::Page;
pub use settings::Settings;
pub use theme::UiTheme;
