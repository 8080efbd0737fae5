//! Bottom bar: key hints generated from the active [`KeyMap`].

use crate::input::{InputAction, KeyBinding, KeyMap};
use crate::session::GameCommand;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, SCORE_TEXT};
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which group a binding's hint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HintGroup {
    Move,
    Restart,
    Close,
    Quit,
}

impl HintGroup {
    fn of(action: InputAction) -> Self {
        match action {
            InputAction::Command(GameCommand::Move(_)) => Self::Move,
            InputAction::Command(GameCommand::Restart) => Self::Restart,
            InputAction::Dismiss => Self::Close,
            InputAction::Quit => Self::Quit,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Move => "Move",
            Self::Restart => "Restart",
            Self::Close => "Close",
            Self::Quit => "Quit",
        }
    }
}

pub struct Footer<'a> {
    keymap: &'a KeyMap,
    is_over: bool,
}

impl<'a> Footer<'a> {
    pub fn new(keymap: &'a KeyMap, is_over: bool) -> Self {
        Self { keymap, is_over }
    }

    /// `(label, keys)` pairs in display order. Moves are hidden once the
    /// game is over; closing the dialog is only offered then.
    pub fn hints(&self) -> Vec<(&'static str, String)> {
        let groups: &[HintGroup] = if self.is_over {
            &[HintGroup::Restart, HintGroup::Close, HintGroup::Quit]
        } else {
            &[HintGroup::Move, HintGroup::Restart, HintGroup::Quit]
        };

        groups
            .iter()
            .filter_map(|group| {
                let mut keys: Vec<String> = Vec::new();
                for (binding, action) in self.keymap.bindings() {
                    let key = key_label(binding);
                    if HintGroup::of(*action) == *group && !keys.contains(&key) {
                        keys.push(key);
                    }
                }
                (!keys.is_empty()).then(|| (group.label(), keys.join(" ")))
            })
            .collect()
    }

    fn hint_line(&self) -> Line<'static> {
        let label_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let key_style = Style::default().fg(SCORE_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::raw(" ")];
        for (idx, (label, keys)) in self.hints().into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" │ ", separator_style));
            }
            spans.push(Span::styled(format!("{} ", label), label_style));
            spans.push(Span::styled(keys, key_style));
        }
        Line::from(spans)
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        let hints = self.hint_line();
        let version = Line::from(Span::styled(
            format!("v{} ", VERSION),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ));
        // Version only when it fits beside the hints.
        if hints.width() + version.width() < usize::from(inner.width) {
            Paragraph::new(version)
                .alignment(Alignment::Right)
                .render(inner, buf);
        }
        Paragraph::new(hints).render(inner, buf);
    }
}

fn key_label(binding: &KeyBinding) -> String {
    let key = match binding.code {
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Char(c) => c.to_string(),
        other => other.to_string(),
    };
    if binding.modifiers.contains(KeyModifiers::CONTROL) {
        format!("^{}", key.to_uppercase())
    } else {
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Direction;

    fn rendered(footer: Footer<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 3);
        let mut buf = Buffer::empty(area);
        footer.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 1)].symbol().to_string()).collect()
    }

    #[test]
    fn playing_hints_come_from_the_key_map() {
        let keymap = KeyMap::default();
        let hints = Footer::new(&keymap, false).hints();

        assert_eq!(hints[0].0, "Move");
        assert!(hints[0].1.starts_with("↑ ↓ ← →"));
        assert!(hints[0].1.contains('w') && hints[0].1.contains('h'));
        assert_eq!(hints[1], ("Restart", "r".to_string()));
        assert_eq!(hints[2], ("Quit", "q ^C".to_string()));
    }

    #[test]
    fn game_over_hints_drop_moves_and_offer_close() {
        let keymap = KeyMap::default();
        let labels: Vec<_> = Footer::new(&keymap, true)
            .hints()
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(labels, vec!["Restart", "Close", "Quit"]);
    }

    #[test]
    fn custom_bindings_change_the_hints() {
        let keymap = KeyMap::new(vec![
            (
                KeyBinding::plain(KeyCode::Char('i')),
                InputAction::Command(GameCommand::Move(Direction::Up)),
            ),
            (KeyBinding::plain(KeyCode::Esc), InputAction::Quit),
        ]);
        let hints = Footer::new(&keymap, false).hints();
        assert_eq!(
            hints,
            vec![("Move", "i".to_string()), ("Quit", "Esc".to_string())]
        );
    }

    #[test]
    fn version_is_shown_only_when_it_fits() {
        let keymap = KeyMap::default();
        let wide = rendered(Footer::new(&keymap, false), 120);
        assert!(wide.contains("Restart"));
        assert!(wide.contains(VERSION));

        let narrow = rendered(Footer::new(&keymap, false), 40);
        assert!(!narrow.contains(VERSION));
    }
}
