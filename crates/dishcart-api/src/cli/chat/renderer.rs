//! Terminal markdown rendering for assistant replies.

use termimad::MadSkin;
use termimad::crossterm::style::Color;

/// Renders reply markdown (bold item names, bullet lists, links) for the terminal.
pub struct ChatRenderer {
    skin: MadSkin,
}

impl ChatRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(Color::Cyan);
        skin.inline_code.set_fg(Color::Yellow);
        Self { skin }
    }

    /// Render a complete reply, indented to line up with the chat prompt.
    pub fn render(&self, markdown: &str) -> String {
        let rendered = self.skin.term_text(markdown).to_string();
        rendered
            .lines()
            .map(|line| format!("  {line}\n"))
            .collect()
    }
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}
