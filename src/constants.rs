//! Application-wide constants.

/// Display name of the application.
pub const APP_NAME: &str = "NextGen";

/// Application version shown in the front-end.
pub const APP_VERSION: &str = "1.0.0";

/// One-line description shown on the home page.
pub const APP_DESCRIPTION: &str = "Application React avec Clean Architecture";

/// Storage key for the persisted theme flag.
pub const THEME_KEY: &str = "theme";

/// Storage key for the persisted todo list.
pub const TODOS_KEY: &str = "todos";
