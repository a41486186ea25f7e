use ratatui::style::Color;

/// Color palette for the active light/dark mode
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    dark: bool,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    fn pick(&self, light: Color, dark: Color) -> Color {
        if self.dark { dark } else { light }
    }

    /// Screen background
    pub fn background(&self) -> Color {
        self.pick(Color::Rgb(0xf9, 0xf9, 0xf9), Color::Rgb(0x25, 0x25, 0x25))
    }

    /// Primary branding color
    pub fn primary(&self) -> Color {
        self.pick(Color::Rgb(0x4d, 0x55, 0xcc), Color::Magenta)
    }

    /// Secondary/border color
    pub fn secondary(&self) -> Color {
        self.pick(Color::DarkGray, Color::Cyan)
    }

    /// Running status
    pub fn active(&self) -> Color {
        self.pick(Color::Green, Color::LightGreen)
    }

    /// Paused status
    pub fn warn(&self) -> Color {
        self.pick(Color::Rgb(0xb0, 0x80, 0x00), Color::Yellow)
    }

    /// Completed status
    pub fn ended(&self) -> Color {
        Color::Blue
    }

    pub fn highlight(&self) -> Color {
        self.pick(Color::Rgb(0x4d, 0x55, 0xcc), Color::Cyan)
    }

    pub fn selection_marker(&self) -> Color {
        Color::Green
    }

    /// Dimmed/inactive text
    pub fn dim(&self) -> Color {
        self.pick(Color::Gray, Color::DarkGray)
    }

    pub fn text(&self) -> Color {
        self.pick(Color::Rgb(0x25, 0x25, 0x25), Color::Rgb(0xf9, 0xf9, 0xf9))
    }

    /// Accent for numbers/counts
    pub fn accent(&self) -> Color {
        self.pick(Color::Blue, Color::LightBlue)
    }

    /// Unfilled part of a progress bar
    pub fn track(&self) -> Color {
        self.pick(Color::Rgb(0xd5, 0xe5, 0xd5), Color::DarkGray)
    }
}
