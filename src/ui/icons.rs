use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Icon display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,    // Standard emoji icons (📁, 🖼, etc.)
    NerdFont, // Nerd Fonts icons
}

impl IconMode {
    /// Parse the config string; unrecognized values fall back to nerd font
    pub fn from_config(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "emoji" => IconMode::Emoji,
            "nerdfont" | "nerd" | "nf" => IconMode::NerdFont,
            _ => IconMode::NerdFont,
        }
    }
}

/// Icon theme using terminal colors (respects user's terminal theme)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub folder_color: Color,
    pub image_color: Color,
    pub copied_color: Color,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            folder_color: Color::Blue,
            image_color: Color::Cyan,
            copied_color: Color::Green,
        }
    }
}

/// Renders icons as styled spans
#[derive(Debug, Clone)]
pub struct IconRenderer {
    mode: IconMode,
    theme: IconTheme,
}

impl IconRenderer {
    pub fn new(mode: IconMode, theme: IconTheme) -> Self {
        Self { mode, theme }
    }

    /// Folder icon (left pane entries)
    pub fn folder(&self) -> Span<'static> {
        let glyph = match self.mode {
            IconMode::Emoji => "📁 ",
            IconMode::NerdFont => "\u{f07b} ", // nf-fa-folder
        };
        Span::styled(glyph, Style::default().fg(self.theme.folder_color))
    }

    /// Image asset icon (grid cells)
    pub fn image(&self) -> Span<'static> {
        let glyph = match self.mode {
            IconMode::Emoji => "🖼 ",
            IconMode::NerdFont => "\u{f03e} ", // nf-fa-image
        };
        Span::styled(glyph, Style::default().fg(self.theme.image_color))
    }

    /// Copy control indicator: a check while the copied flag is set
    pub fn copy_indicator(&self, copied: bool) -> Span<'static> {
        if copied {
            let glyph = match self.mode {
                IconMode::Emoji => "✅ copied",
                IconMode::NerdFont => "\u{f00c} copied", // nf-fa-check
            };
            Span::styled(glyph, Style::default().fg(self.theme.copied_color))
        } else {
            let glyph = match self.mode {
                IconMode::Emoji => "📋 copy",
                IconMode::NerdFont => "\u{f0c5} copy", // nf-fa-copy
            };
            Span::styled(glyph, Style::default().fg(Color::Gray))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_mode_parsing() {
        assert_eq!(IconMode::from_config("emoji"), IconMode::Emoji);
        assert_eq!(IconMode::from_config("nerdfont"), IconMode::NerdFont);
        assert_eq!(IconMode::from_config("nf"), IconMode::NerdFont);
        assert_eq!(IconMode::from_config("whatever"), IconMode::NerdFont);
    }

    #[test]
    fn test_copy_indicator_changes_with_state() {
        let renderer = IconRenderer::new(IconMode::Emoji, IconTheme::default());
        assert_ne!(
            renderer.copy_indicator(true).content,
            renderer.copy_indicator(false).content
        );
    }
}
