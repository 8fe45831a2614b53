//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for copy/submit shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Copy email shortcut display
#[cfg(target_os = "macos")]
pub const COPY_EMAIL_SHORTCUT: &str = "Cmd+Y";

#[cfg(not(target_os = "macos"))]
pub const COPY_EMAIL_SHORTCUT: &str = "Ctrl+Y";

/// Copy phone shortcut display
#[cfg(target_os = "macos")]
pub const COPY_PHONE_SHORTCUT: &str = "Cmd+P";

#[cfg(not(target_os = "macos"))]
pub const COPY_PHONE_SHORTCUT: &str = "Ctrl+P";

/// True if `modifiers` carry the platform copy modifier
pub fn has_copy_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.contains(COPY_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}
