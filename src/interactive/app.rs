//! TUI application state and logic

use crate::core::WordLength;
use crate::round::{Key, KeyOutcome, Outcome, PlayerId, RoundStatus};
use crate::session::Session;
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// Longest time the loop blocks on input when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App<W> {
    pub session: Session<W>,
    pub active: PlayerId,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    recorded_game: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    /// New-game menu with the highlighted word length
    Menu(WordLength),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results of finished games in this session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_finished: usize,
    pub wins: [usize; 2],
}

impl Statistics {
    #[must_use]
    pub const fn wins_for(&self, player: PlayerId) -> usize {
        self.wins[player.index()]
    }
}

impl<W: WordSource> App<W> {
    #[must_use]
    pub fn new(session: Session<W>) -> Self {
        Self {
            session,
            active: PlayerId::Left,
            input_mode: InputMode::Playing,
            messages: vec![
                Message {
                    text: "Welcome! Both players guess at the same time.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "TAB switches the active player, F2 opens the new game menu.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            recorded_game: None,
        }
    }

    /// Apply one terminal key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Playing => self.handle_playing_key(key, now),
            InputMode::Menu(selected) => self.handle_menu_key(key, selected, now),
        }
    }

    /// Run due tasks and update statistics
    pub fn tick(&mut self, now: Instant) {
        let row_before = self.session.round().row();
        self.session.run_due(now);

        let round = self.session.round();
        if round.row() != row_before && !round.is_game_over() {
            let row = round.row() + 1;
            self.add_message(&format!("Row {row} is open."), MessageStyle::Info);
        }
        self.record_finished_game();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Start a new game with the given length
    pub fn new_game(&mut self, length: WordLength, now: Instant) {
        self.session.new_game(length, now);
        self.active = PlayerId::Left;
        self.input_mode = InputMode::Playing;
        self.messages.clear();
        self.add_message(
            &format!("New game started with {length}-letter words!"),
            MessageStyle::Info,
        );
    }

    fn handle_playing_key(&mut self, key: KeyEvent, now: Instant) {
        let forwarded = match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.active = self.active.other();
                None
            }
            KeyCode::Left => {
                self.active = PlayerId::Left;
                None
            }
            KeyCode::Right => {
                self.active = PlayerId::Right;
                None
            }
            KeyCode::F(2) => {
                self.input_mode = InputMode::Menu(self.session.round().word_length());
                None
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_mode = InputMode::Menu(self.session.round().word_length());
                None
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Key::Letter(c)),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Enter => Some(Key::Enter),
            _ => None,
        };

        let Some(game_key) = forwarded else {
            return;
        };

        let player = self.active;
        match self.session.press_key(player, game_key, now) {
            KeyOutcome::Locked => {
                self.add_message(
                    &format!("{} locked in.", player.label()),
                    MessageStyle::Info,
                );
                // Hand the keyboard over to whoever still has to play
                let other = player.other();
                if self.session.round().player(other).accepts_input() {
                    self.active = other;
                }
            }
            KeyOutcome::Revealed => {
                self.add_message("Guesses revealed!", MessageStyle::Success);
            }
            KeyOutcome::Ignored if game_key == Key::Enter => {
                let round = self.session.round();
                let too_short = round.solutions_ready()
                    && round.status() != RoundStatus::Revealed
                    && round.player(player).accepts_input();
                let length = round.word_length();
                if too_short {
                    self.add_message(
                        &format!("Guesses must be {length} letters!"),
                        MessageStyle::Error,
                    );
                }
            }
            KeyOutcome::Edited | KeyOutcome::Ignored => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent, selected: WordLength, now: Instant) {
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Playing,
            KeyCode::Char('4') => self.input_mode = InputMode::Menu(WordLength::Four),
            KeyCode::Char('5') => self.input_mode = InputMode::Menu(WordLength::Five),
            KeyCode::Char('6') => self.input_mode = InputMode::Menu(WordLength::Six),
            KeyCode::Up | KeyCode::Left => {
                self.input_mode = InputMode::Menu(cycle(selected, false));
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Tab => {
                self.input_mode = InputMode::Menu(cycle(selected, true));
            }
            KeyCode::Enter => self.new_game(selected, now),
            _ => {}
        }
    }

    fn record_finished_game(&mut self) {
        let round = self.session.round();
        if !round.is_game_over() || self.recorded_game == Some(round.game()) {
            return;
        }
        let game = round.game();
        let winners: Vec<PlayerId> = PlayerId::ALL
            .into_iter()
            .filter(|&id| round.player(id).outcome() == Outcome::Won)
            .collect();

        self.recorded_game = Some(game);
        self.stats.games_finished += 1;
        for id in &winners {
            self.stats.wins[id.index()] += 1;
        }
        info!(game, ?winners, "game finished");

        let text = match winners.as_slice() {
            [] => "Nobody found their word. Press F2 for a new game.".to_string(),
            [one] => format!("🎉 {} wins! Press F2 for a new game.", one.label()),
            _ => "🎉 Both players found their word! Press F2 for a new game.".to_string(),
        };
        self.add_message(&text, MessageStyle::Success);
    }
}

fn cycle(length: WordLength, forward: bool) -> WordLength {
    let all = WordLength::ALL;
    let pos = all.iter().position(|&l| l == length).unwrap_or(0);
    let next = if forward {
        (pos + 1) % all.len()
    } else {
        (pos + all.len() - 1) % all.len()
    };
    all[next]
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource>(app: App<W>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, W: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<W>,
) -> Result<()> {
    app.tick(Instant::now());

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Block until input or the next scheduled task, whichever comes first
        let now = Instant::now();
        let timeout = app
            .session
            .next_deadline()
            .map_or(IDLE_POLL, |due| due.saturating_duration_since(now))
            .min(IDLE_POLL);

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn app() -> (App<impl FnMut(WordLength) -> Option<String>>, Instant) {
        let t0 = Instant::now();
        let source = |length: WordLength| {
            Some(match length {
                WordLength::Four => "moat".to_string(),
                WordLength::Five => "crane".to_string(),
                WordLength::Six => "bottle".to_string(),
            })
        };
        let mut app = App::new(Session::new(GameConfig::default(), source, t0));
        app.tick(t0);
        (app, t0)
    }

    fn press<W: WordSource>(app: &mut App<W>, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_word<W: WordSource>(app: &mut App<W>, word: &str, now: Instant) {
        for c in word.chars() {
            press(app, KeyCode::Char(c), now);
        }
        press(app, KeyCode::Enter, now);
    }

    #[test]
    fn letters_go_to_active_player() {
        let (mut app, t0) = app();
        press(&mut app, KeyCode::Char('a'), t0);
        press(&mut app, KeyCode::Tab, t0);
        press(&mut app, KeyCode::Char('b'), t0);

        let round = app.session.round();
        assert_eq!(round.player(PlayerId::Left).buffer(), "a");
        assert_eq!(round.player(PlayerId::Right).buffer(), "b");
    }

    #[test]
    fn locking_hands_over_to_other_player() {
        let (mut app, t0) = app();
        type_word(&mut app, "audio", t0);
        assert_eq!(app.active, PlayerId::Right);
        assert_eq!(app.session.round().status(), RoundStatus::WaitingForBoth);

        type_word(&mut app, "slate", t0);
        assert_eq!(app.session.round().status(), RoundStatus::Revealed);

        app.tick(t0 + app.session.config().settle_delay);
        assert_eq!(app.session.round().status(), RoundStatus::Typing);
        assert_eq!(app.session.round().row(), 1);
    }

    #[test]
    fn win_is_recorded_once() {
        let (mut app, t0) = app();
        type_word(&mut app, "crane", t0);
        type_word(&mut app, "crane", t0);
        let later = t0 + Duration::from_secs(1);
        app.tick(later);
        app.tick(later);

        assert!(app.session.round().is_game_over());
        assert_eq!(app.stats.games_finished, 1);
        assert_eq!(app.stats.wins_for(PlayerId::Left), 1);
        assert_eq!(app.stats.wins_for(PlayerId::Right), 1);
    }

    #[test]
    fn menu_starts_new_game_with_chosen_length() {
        let (mut app, t0) = app();
        press(&mut app, KeyCode::F(2), t0);
        assert_eq!(app.input_mode, InputMode::Menu(WordLength::Five));

        press(&mut app, KeyCode::Char('6'), t0);
        assert_eq!(app.input_mode, InputMode::Menu(WordLength::Six));
        press(&mut app, KeyCode::Enter, t0);
        app.tick(t0);

        assert_eq!(app.input_mode, InputMode::Playing);
        let round = app.session.round();
        assert_eq!(round.word_length(), WordLength::Six);
        assert_eq!(round.player(PlayerId::Left).solution(), "bottle");
    }

    #[test]
    fn menu_cycles_lengths() {
        assert_eq!(cycle(WordLength::Six, true), WordLength::Four);
        assert_eq!(cycle(WordLength::Four, false), WordLength::Six);
        assert_eq!(cycle(WordLength::Four, true), WordLength::Five);
    }

    #[test]
    fn escape_quits() {
        let (mut app, t0) = app();
        press(&mut app, KeyCode::Esc, t0);
        assert!(app.should_quit);
    }
}
