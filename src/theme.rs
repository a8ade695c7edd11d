//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);

    // Shared cursor style (editor and prompt textareas)
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Tab strip styles
pub mod tabs {
    use super::*;

    pub const ACTIVE_FG: Color = palette::BG_DARK;
    pub const ACTIVE_BG: Color = palette::PURPLE;
    pub const INACTIVE: Color = palette::TEXT_MUTED;
    pub const DIVIDER: Color = palette::TEXT_DIM;
    pub const EMPTY: Color = palette::TEXT_DIM;
}

/// Editor pane styles
pub mod editor {
    use super::*;

    pub const BORDER: Color = palette::PURPLE;
    pub const TITLE: Color = palette::TEXT;
    pub const MODIFIED_MARKER: Color = palette::PINK;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
    pub const EMPTY_HINT: Color = palette::TEXT_MUTED;
}

/// Statistics bar and most-common-word popup styles
pub mod stats {
    use super::*;

    pub const LABEL: Color = palette::TEXT_MUTED;
    pub const VALUE: Color = palette::CYAN;
    pub const POPUP_BORDER: Color = palette::CYAN;
    pub const POPUP_BG: Color = palette::BG_SURFACE;
    pub const POPUP_WORD: Color = palette::YELLOW;
    pub const POPUP_EMPTY: Color = palette::TEXT_DIM;
}

/// Path prompt styles
pub mod prompt {
    use super::*;

    pub const LABEL: Color = palette::YELLOW;
    pub const TEXT: Color = palette::TEXT;
    pub const BG: Color = palette::BG_HIGHLIGHT;
}

/// Notification styles
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(55, 55, 85),
        border: Color::Rgb(130, 133, 158),
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: Color::Rgb(255, 217, 61),
        border: Color::Rgb(255, 217, 61),
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(224, 108, 117),
        border: Color::Rgb(255, 135, 145),
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}
