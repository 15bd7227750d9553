use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;

use crate::profile::Profile;
use crate::tui::list::{Outcome, ProfileList};

const KEY_SHOW_LOGIN_CMD: char = 'l';
const DETAIL_HELP: &str = "esc go back";

/// The two view modes of the session.
///
/// `Detail` keeps an index into the listing's immutable profile collection
/// rather than a reference, so the listing stays the sole owner of the data.
/// The enum being closed means there is no unmodeled state to guard against;
/// every transition is an exhaustive match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Session {
    Listing,
    Detail { selected: usize },
}

/// The interactive session: a listing surface plus a two-state view machine
/// on top of it. One event is processed to completion per call; nothing here
/// blocks or spawns.
pub struct App {
    list: ProfileList,
    session: Session,
    should_quit: bool,
}

impl App {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            list: ProfileList::new(profiles),
            session: Session::Listing,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            // the listing keeps its dimensions current even while hidden
            // behind the detail view
            Event::Resize(width, height) => self.list.set_size(*width, *height),
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            _ => {},
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char(KEY_SHOW_LOGIN_CMD) if key.modifiers.is_empty() => self.show_detail(),
            KeyCode::Esc => self.close(key),
            _ => self.delegate(key),
        }
    }

    /// Capture the current selection and switch to the detail view.
    /// A repeat trigger while already in detail, or a trigger with nothing
    /// selected, is a no-op.
    fn show_detail(&mut self) {
        match self.session {
            Session::Detail { .. } => {},
            Session::Listing => {
                if let Some(selected) = self.list.selected_index() {
                    self.session = Session::Detail { selected };
                }
            },
        }
    }

    /// In detail, drop back to the listing with its cursor and filter
    /// untouched. In the listing, the key belongs to the list (it clears an
    /// active filter).
    fn close(&mut self, key: KeyEvent) {
        match self.session {
            Session::Detail { .. } => self.session = Session::Listing,
            Session::Listing => {
                let _ = self.list.handle_key(key);
            },
        }
    }

    /// Everything else goes to the listing while it is the active view; the
    /// detail view consumes no listing-navigation keys.
    fn delegate(&mut self, key: KeyEvent) {
        match self.session {
            Session::Listing => {
                if self.list.handle_key(key) == Outcome::Quit {
                    self.should_quit = true;
                }
            },
            Session::Detail { .. } => {},
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        match self.session {
            Session::Listing => self.list.render(frame, frame.area()),
            Session::Detail { selected } => {
                let text = detail_text(self.list.profile_at(selected));
                frame.render_widget(Paragraph::new(text), frame.area());
            },
        }
    }
}

/// The detail view: the login command, a blank line, and the one available
/// action.
fn detail_text(profile: &Profile) -> Text<'static> {
    Text::from(vec![
        Line::from(profile.login_command()),
        Line::default(),
        Line::styled(DETAIL_HELP, Style::new().fg(Color::DarkGray)),
    ])
}
