use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{ActivePanel, AppState, Field};

/// Work the key handler cannot do on the state alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    Execute,
    CopyOutput,
    SaveOutput,
}

const PAGE: i32 = 10;

pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        // Windows reports releases too
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global key bindings
        match key.code {
            KeyCode::Esc => return Some(AppEvent::Quit),
            KeyCode::Char('c') if ctrl => return Some(AppEvent::Quit),
            KeyCode::F(1) => {
                state.active_panel = ActivePanel::Configure;
                return None;
            }
            KeyCode::F(2) => {
                state.active_panel = ActivePanel::Version;
                return None;
            }
            KeyCode::F(3) => {
                state.active_panel = ActivePanel::Help;
                return None;
            }
            KeyCode::Right if ctrl => {
                state.active_panel = state.active_panel.next();
                return None;
            }
            KeyCode::Left if ctrl => {
                state.active_panel = state.active_panel.previous();
                return None;
            }
            _ => {}
        }

        match state.active_panel {
            ActivePanel::Configure => self.handle_configure_panel(key, ctrl, state),
            ActivePanel::Version | ActivePanel::Help => None,
        }
    }

    fn handle_configure_panel(&self, key: KeyEvent, ctrl: bool, state: &mut AppState) -> Option<AppEvent> {
        match key.code {
            KeyCode::Char('y') if ctrl => return Some(AppEvent::CopyOutput),
            KeyCode::Char('s') if ctrl => return Some(AppEvent::SaveOutput),
            KeyCode::Enter => return Some(AppEvent::Execute),
            KeyCode::Tab => {
                state.focus = state.focus.next();
                return None;
            }
            KeyCode::BackTab => {
                state.focus = state.focus.previous();
                return None;
            }
            KeyCode::PageUp => {
                state.scroll_output(-PAGE);
                return None;
            }
            KeyCode::PageDown => {
                state.scroll_output(PAGE);
                return None;
            }
            _ => {}
        }

        match state.focus {
            field if field.is_selector() => match key.code {
                KeyCode::Left | KeyCode::Up => state.cycle_focused(-1),
                KeyCode::Right | KeyCode::Down => state.cycle_focused(1),
                KeyCode::Char(_) if !ctrl => {
                    // Typing jumps straight to the command text
                    state.focus = Field::Input;
                    state.input.handle_key(key);
                }
                _ => {}
            },
            Field::Input => {
                if !ctrl {
                    state.input.handle_key(key);
                }
            }
            Field::Output => match key.code {
                KeyCode::Up => state.scroll_output(-1),
                KeyCode::Down => state.scroll_output(1),
                KeyCode::Home => state.output_scroll = 0,
                _ => {}
            },
            _ => {}
        }

        None
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
