//! Prompt-preserving line input for the chat loop, over `rustyline_async`.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

#[derive(Debug)]
pub enum InputEvent {
    /// A submitted line, trimmed. May be empty.
    Line(String),
    /// Ctrl+D, or the terminal went away.
    Eof,
    /// Ctrl+C.
    Interrupted,
}

pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Open the readline with `prompt`. Output written through the returned
    /// `SharedWriter` is printed above the prompt line.
    pub fn open(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, writer) = Readline::new(prompt)?;
        Ok((Self { rl }, writer))
    }

    /// Swap the prompt, e.g. after `/user` changes whose cart is active.
    pub fn set_prompt(&mut self, prompt: &str) {
        let _ = self.rl.update_prompt(prompt);
    }

    /// Wait for the next line. Non-empty lines are added to the up-arrow history.
    pub async fn next_event(&mut self) -> InputEvent {
        let event = match self.rl.readline().await {
            Ok(event) => event,
            Err(_) => return InputEvent::Eof,
        };
        match event {
            ReadlineEvent::Line(raw) => {
                let line = raw.trim().to_string();
                if !line.is_empty() {
                    let _ = self.rl.add_history_entry(line.clone());
                }
                InputEvent::Line(line)
            }
            ReadlineEvent::Eof => InputEvent::Eof,
            ReadlineEvent::Interrupted => InputEvent::Interrupted,
        }
    }

    pub fn clear_screen(&mut self) {
        let _ = self.rl.clear();
    }
}
