//! Core Types - Errors, chrome flags, toolbar orientation
//!
//! Shared vocabulary for the shell: the error taxonomy, the window-chrome
//! visibility bitfield and the toolbar placement parsed from the
//! application's orientation strings.

use thiserror::Error;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors raised at the shell's component seams.
///
/// All of these are absorbed at the shell surface: the worst observable
/// effect is a log line and a refused operation, never a crash.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The fixed timer table is full; the add was refused.
    #[error("too many timers")]
    TooManyTimers,

    /// An orientation string whose first letter is not one of t/b/l/r.
    #[error("invalid toolbar orientation {0:?}")]
    InvalidToolbarOrientation(String),

    /// Configuration file did not parse.
    #[error("config: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration could not be serialized for saving.
    #[error("config write: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Window Chrome (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Visibility of the window chrome pieces as a bitfield.
    ///
    /// Full-screen mode clears `MENU_BAR | TOOL_BAR` and restores them on
    /// the way back; the status line survives both modes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChromeFlags: u8 {
        const MENU_BAR = 1 << 0;
        const TOOL_BAR = 1 << 1;
        const STATUS_BAR = 1 << 2;
    }
}

impl Default for ChromeFlags {
    fn default() -> Self {
        Self::all()
    }
}

// =============================================================================
// Toolbar Orientation
// =============================================================================

/// Where the toolbar docks relative to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolbarOrientation {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl ToolbarOrientation {
    /// Parse an application orientation string.
    ///
    /// Only the first letter matters, matching the callers' habit of
    /// passing `"top"`, `"T"`, `"bottom"` or `""` interchangeably. An
    /// empty string means bottom.
    pub fn parse(orientation: &str) -> Result<Self, ShellError> {
        match orientation.chars().next() {
            Some('t') | Some('T') => Ok(Self::Top),
            Some('b') | Some('B') | None => Ok(Self::Bottom),
            Some('l') | Some('L') => Ok(Self::Left),
            Some('r') | Some('R') => Ok(Self::Right),
            Some(_) => Err(ShellError::InvalidToolbarOrientation(
                orientation.to_string(),
            )),
        }
    }

    /// True for top/bottom placements.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_first_letter() {
        assert_eq!(
            ToolbarOrientation::parse("top").unwrap(),
            ToolbarOrientation::Top
        );
        assert_eq!(
            ToolbarOrientation::parse("Bottom").unwrap(),
            ToolbarOrientation::Bottom
        );
        assert_eq!(
            ToolbarOrientation::parse("l").unwrap(),
            ToolbarOrientation::Left
        );
        assert_eq!(
            ToolbarOrientation::parse("RIGHT").unwrap(),
            ToolbarOrientation::Right
        );
    }

    #[test]
    fn test_orientation_empty_is_bottom() {
        assert_eq!(
            ToolbarOrientation::parse("").unwrap(),
            ToolbarOrientation::Bottom
        );
    }

    #[test]
    fn test_orientation_rejects_garbage() {
        assert!(matches!(
            ToolbarOrientation::parse("sideways"),
            Err(ShellError::InvalidToolbarOrientation(_))
        ));
    }

    #[test]
    fn test_orientation_axis() {
        assert!(ToolbarOrientation::Top.is_horizontal());
        assert!(ToolbarOrientation::Bottom.is_horizontal());
        assert!(!ToolbarOrientation::Left.is_horizontal());
        assert!(!ToolbarOrientation::Right.is_horizontal());
    }

    #[test]
    fn test_chrome_default_all_visible() {
        let chrome = ChromeFlags::default();
        assert!(chrome.contains(ChromeFlags::MENU_BAR));
        assert!(chrome.contains(ChromeFlags::TOOL_BAR));
        assert!(chrome.contains(ChromeFlags::STATUS_BAR));
    }
}
