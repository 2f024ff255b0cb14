use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name (shown in the status line when cycling)
    pub name: &'static str,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Tile number color
    pub tile: Color,
    /// Tile sitting in its solved-layout cell
    pub tile_home: Color,
    /// Blank-cell marker color
    pub blank: Color,
    /// Timer/move-counter text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
    /// Win/success color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            name: "dark",
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 110, g: 118, b: 145 },
            tile: Color::Rgb { r: 80, g: 180, b: 255 },
            tile_home: Color::Rgb { r: 90, g: 255, b: 130 },
            blank: Color::Rgb { r: 70, g: 75, b: 90 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "light",
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 120, g: 120, b: 140 },
            tile: Color::Rgb { r: 30, g: 100, b: 200 },
            tile_home: Color::Rgb { r: 40, g: 160, b: 60 },
            blank: Color::Rgb { r: 180, g: 180, b: 195 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            fg: Color::White,
            border: Color::Grey,
            tile: Color::Cyan,
            tile_home: Color::Green,
            blank: Color::DarkGrey,
            info: Color::Grey,
            key: Color::Yellow,
            success: Color::Green,
        }
    }

    /// The next theme in the cycle (dark → light → high-contrast)
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Theme by CLI name, if recognized
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "high-contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }
}
