use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Quit,
    Pause,
    Resume,
    CycleSymbol,
}

pub fn parse_main_command(key: &KeyEvent) -> Option<UiCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(UiCommand::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Esc => Some(UiCommand::Quit),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => Some(UiCommand::Quit),
            'p' => Some(UiCommand::Pause),
            'r' => Some(UiCommand::Resume),
            't' => Some(UiCommand::CycleSymbol),
            _ => None,
        },
        _ => None,
    }
}
