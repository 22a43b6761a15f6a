use crossterm::event::{KeyCode, KeyEvent};

/// Single-line editable text with a cursor counted in characters
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    content: String,
    cursor_position: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the key was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                self.delete_char();
                true
            }
            KeyCode::Delete => {
                self.delete_char_forward();
                true
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                true
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                true
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                true
            }
            _ => false,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the text and put the cursor at the end
    pub fn set(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor_position = self.char_count();
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn insert_char(&mut self, c: char) {
        let index = self.byte_index(self.cursor_position);
        self.content.insert(index, c);
        self.cursor_position += 1;
    }

    fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let index = self.byte_index(self.cursor_position);
            self.content.remove(index);
        }
    }

    fn delete_char_forward(&mut self) {
        if self.cursor_position < self.char_count() {
            let index = self.byte_index(self.cursor_position);
            self.content.remove(index);
        }
    }
}

impl std::fmt::Display for InputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
