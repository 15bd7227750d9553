use crossterm::event::{KeyCode, KeyEvent};
use fuzzy_matcher::FuzzyMatcher as _;
use fuzzy_matcher::skim::SkimMatcherV2;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize as _};
use ratatui::text::Line;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::profile::Profile;

const TITLE: &str = "Your AWS Profiles";
const LIST_HELP: &str = "↑/↓ navigate · / filter · l view login cmd · q quit";

// dimensions before the first resize event arrives
const DEFAULT_WIDTH: u16 = 300;
const DEFAULT_HEIGHT: u16 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FilterMode {
    Idle,
    Editing,
    Applied,
}

/// What the list did with a key it was handed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Handled,
    Quit,
}

/// The listing surface: owns the profile collection, the cursor, and the
/// fuzzy filter. The session state machine delegates to it and only ever
/// reads profiles back through indices it hands out.
pub struct ProfileList {
    profiles: Vec<Profile>,
    filter: String,
    mode: FilterMode,
    /// Indices into `profiles` currently visible, best match first.
    visible: Vec<usize>,
    state: ListState,
    matcher: SkimMatcherV2,
    width: u16,
    height: u16,
}

impl ProfileList {
    pub fn new(profiles: Vec<Profile>) -> Self {
        let visible: Vec<usize> = (0..profiles.len()).collect();
        let mut state = ListState::default();
        if !visible.is_empty() {
            state.select(Some(0));
        }
        Self {
            profiles,
            filter: String::new(),
            mode: FilterMode::Idle,
            visible,
            state,
            matcher: SkimMatcherV2::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Index into the full profile collection for the current cursor.
    pub fn selected_index(&self) -> Option<usize> {
        self.state
            .selected()
            .and_then(|i| self.visible.get(i).copied())
    }

    pub fn profile_at(&self, index: usize) -> &Profile {
        &self.profiles[index]
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        if self.mode == FilterMode::Editing {
            match key.code {
                KeyCode::Esc => self.clear_filter(),
                KeyCode::Enter => {
                    self.mode = if self.filter.is_empty() {
                        FilterMode::Idle
                    } else {
                        FilterMode::Applied
                    };
                },
                KeyCode::Backspace => {
                    self.filter.pop();
                    self.refilter();
                },
                KeyCode::Char(c) => {
                    self.filter.push(c);
                    self.refilter();
                },
                _ => {},
            }
            return Outcome::Handled;
        }

        match key.code {
            KeyCode::Char('q') => return Outcome::Quit,
            KeyCode::Char('/') => {
                self.mode = FilterMode::Editing;
                self.filter.clear();
                self.refilter();
            },
            KeyCode::Esc => self.clear_filter(),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            _ => {},
        }
        Outcome::Handled
    }

    fn clear_filter(&mut self) {
        self.filter.clear();
        self.mode = FilterMode::Idle;
        self.refilter();
    }

    /// Recompute the visible set, best fuzzy score first, and reset the
    /// cursor to the top.
    fn refilter(&mut self) {
        if self.filter.is_empty() {
            self.visible = (0..self.profiles.len()).collect();
        } else {
            let mut scored: Vec<(i64, usize)> = self
                .profiles
                .iter()
                .enumerate()
                .filter_map(|(i, p)| {
                    self.matcher
                        .fuzzy_match(&p.filter_value(), &self.filter)
                        .map(|score| (score, i))
                })
                .collect();
            scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
            self.visible = scored.into_iter().map(|(_, i)| i).collect();
        }

        self.state
            .select((!self.visible.is_empty()).then_some(0));
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.visible.is_empty() {
            return;
        }
        let current = self.state.selected().unwrap_or(0) as isize;
        let last = self.visible.len() as isize - 1;
        let next = (current + delta).clamp(0, last);
        self.state.select(Some(next as usize));
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        // stay inside the last dimensions the host reported
        let area = area.intersection(Rect::new(area.x, area.y, self.width, self.height));
        let [header_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let status = match self.mode {
            FilterMode::Idle => {
                Line::styled(
                    format!("{} profiles", self.visible.len()),
                    Style::new().fg(Color::DarkGray),
                )
            },
            FilterMode::Editing => Line::from(format!("/{}▌", self.filter)),
            FilterMode::Applied => {
                Line::styled(format!("/{}", self.filter), Style::new().fg(Color::DarkGray))
            },
        };
        let header = Paragraph::new(vec![Line::from(TITLE.bold()), status]);
        frame.render_widget(header, header_area);

        let items: Vec<ListItem> = self
            .visible
            .iter()
            .map(|&i| {
                let profile = &self.profiles[i];
                ListItem::new(vec![
                    Line::from(profile.title().to_string()),
                    Line::styled(profile.description(), Style::new().fg(Color::DarkGray)),
                ])
            })
            .collect();
        let list = List::new(items)
            .highlight_symbol("> ")
            .highlight_style(Style::new().fg(Color::Magenta));
        frame.render_stateful_widget(list, list_area, &mut self.state);

        let footer = Paragraph::new(Line::styled(LIST_HELP, Style::new().fg(Color::DarkGray)));
        frame.render_widget(footer, footer_area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_list() -> ProfileList {
        ProfileList::new(vec![
            Profile::new("work"),
            Profile::new("personal"),
            Profile::new("staging"),
        ])
    }

    #[test]
    fn starts_with_first_profile_selected() {
        assert_eq!(Some(0), sample_list().selected_index());
    }

    #[test]
    fn empty_list_has_no_selection() {
        assert_eq!(None, ProfileList::new(Vec::new()).selected_index());
    }

    #[test]
    fn cursor_moves_and_clamps() {
        let mut list = sample_list();
        list.handle_key(key(KeyCode::Down));
        list.handle_key(key(KeyCode::Char('j')));
        assert_eq!(Some(2), list.selected_index());

        // already at the bottom
        list.handle_key(key(KeyCode::Down));
        assert_eq!(Some(2), list.selected_index());

        list.handle_key(key(KeyCode::Char('k')));
        assert_eq!(Some(1), list.selected_index());
    }

    #[test]
    fn typing_a_filter_narrows_matches() {
        let mut list = sample_list();
        list.handle_key(key(KeyCode::Char('/')));
        for c in "per".chars() {
            list.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(1, list.visible.len());
        assert_eq!(Some(1), list.selected_index());
    }

    #[test]
    fn esc_clears_an_applied_filter() {
        let mut list = sample_list();
        list.handle_key(key(KeyCode::Char('/')));
        list.handle_key(key(KeyCode::Char('w')));
        list.handle_key(key(KeyCode::Enter));
        assert_eq!(1, list.visible.len());

        list.handle_key(key(KeyCode::Esc));
        assert_eq!(3, list.visible.len());
        assert_eq!(Some(0), list.selected_index());
    }

    #[test]
    fn q_signals_quit_only_outside_filter_editing() {
        let mut list = sample_list();
        assert_eq!(Outcome::Quit, list.handle_key(key(KeyCode::Char('q'))));

        list.handle_key(key(KeyCode::Char('/')));
        assert_eq!(Outcome::Handled, list.handle_key(key(KeyCode::Char('q'))));
        assert_eq!("q", list.filter);
    }

    #[test]
    fn resize_updates_tracked_dimensions() {
        let mut list = sample_list();
        list.set_size(120, 40);
        assert_eq!(120, list.width());
        assert_eq!(40, list.height());
    }
}
