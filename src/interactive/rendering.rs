//! TUI rendering with ratatui
//!
//! Two side-by-side boards, each with its grid and keyboard.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterState, MAX_GUESSES, WordLength};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::round::{Outcome, PlayerId, RoundCoordinator, RoundStatus};
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<W: WordSource>(f: &mut Frame, app: &App<W>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Boards
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    let round = app.session.round();
    render_header(f, round, chunks[0]);

    let boards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    for (id, area) in PlayerId::ALL.into_iter().zip(boards.iter()) {
        render_board(f, app, id, *area);
    }

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if let InputMode::Menu(selected) = app.input_mode {
        render_menu(f, selected);
    }
}

fn render_header(f: &mut Frame, round: &RoundCoordinator, area: Rect) {
    let status_color = match round.status() {
        RoundStatus::Typing => Color::White,
        RoundStatus::WaitingForBoth => Color::Yellow,
        RoundStatus::Revealed => Color::Green,
    };
    let row = (round.row() as usize + 1).min(MAX_GUESSES);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "WORDLE DUEL",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("   Row {row}   Status: ")),
        Span::styled(round.status().to_string(), Style::default().fg(status_color)),
        Span::raw(format!("   {} letters", round.word_length())),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_board<W: WordSource>(f: &mut Frame, app: &App<W>, id: PlayerId, area: Rect) {
    let round = app.session.round();
    let player = round.player(id);
    let length = round.word_length();
    let is_active = app.active == id && app.input_mode == InputMode::Playing;

    let (outcome_text, outcome_color) = match player.outcome() {
        Outcome::Playing if player.is_submitted() => ("locked in", Color::Magenta),
        Outcome::Playing => ("playing", Color::White),
        Outcome::Won => ("won", Color::Green),
        Outcome::Lost => ("lost", Color::Red),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Outcome: "),
            Span::styled(
                outcome_text,
                Style::default()
                    .fg(outcome_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("   Wins: {}", app.stats.wins_for(id))),
        ]),
        Line::from(""),
    ];

    lines.extend(grid_lines(round, id, length));
    lines.push(Line::from(""));
    lines.extend(keyboard_lines(round, id, length));

    let border_style = if is_active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = if is_active {
        format!(" {} (typing) ", id.label())
    } else {
        format!(" {} ", id.label())
    };

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(if is_active {
                BorderType::Double
            } else {
                BorderType::Rounded
            })
            .border_style(border_style),
    );
    f.render_widget(paragraph, area);
}

fn tile_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterState::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterState::Unset => Style::default().fg(Color::White),
    }
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style),
        Span::raw(" "),
    ]
}

fn grid_lines(round: &RoundCoordinator, id: PlayerId, length: WordLength) -> Vec<Line<'static>> {
    let player = round.player(id);
    let feedback = player.feedback(length);
    let width = length.get();

    let mut lines: Vec<Line<'static>> = player
        .guesses()
        .iter()
        .zip(&feedback)
        .map(|(guess, scored)| {
            let spans: Vec<Span<'static>> = guess
                .chars()
                .zip(scored.states())
                .flat_map(|(letter, &state)| tile(letter, tile_style(state)))
                .collect();
            Line::from(spans)
        })
        .collect();

    if lines.len() < MAX_GUESSES && !player.outcome().is_finished() {
        // Current row: hidden lock, or the letters typed so far
        let spans: Vec<Span<'static>> = if player.is_submitted() {
            (0..width)
                .flat_map(|_| tile('•', Style::default().fg(Color::Magenta)))
                .collect()
        } else {
            let typed = player.buffer().chars();
            let blanks = std::iter::repeat_n('·', width.saturating_sub(player.buffer().len()));
            typed
                .chain(blanks)
                .flat_map(|letter| {
                    tile(
                        letter,
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    )
                })
                .collect()
        };
        lines.push(Line::from(spans));
    }

    while lines.len() < MAX_GUESSES {
        let spans: Vec<Span<'static>> = (0..width)
            .flat_map(|_| tile('·', Style::default().fg(Color::DarkGray)))
            .collect();
        lines.push(Line::from(spans));
    }

    lines
}

fn keyboard_lines(round: &RoundCoordinator, id: PlayerId, length: WordLength) -> Vec<Line<'static>> {
    let keyboard = round.player(id).keyboard(length);

    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .chars()
                .flat_map(|letter| {
                    [
                        Span::styled(
                            letter.to_ascii_uppercase().to_string(),
                            tile_style(keyboard.get(letter)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_messages<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(5)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Menu(_) => "4/5/6 or arrows: word length | Enter: start | Esc: back",
        InputMode::Playing => {
            "Letters: type | Enter: lock in | TAB/arrows: switch player | F2: new game | Esc: quit"
        }
    };
    let games = format!("Games finished: {}", app.stats.games_finished);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(area);

    f.render_widget(
        Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(games).alignment(Alignment::Center),
        chunks[1],
    );
}

fn render_menu(f: &mut Frame, selected: WordLength) {
    let area = centered(f.area(), 36, 9);

    let mut lines = vec![Line::from("Length of the word to guess"), Line::from("")];
    lines.push(Line::from(
        WordLength::ALL
            .iter()
            .flat_map(|&length| {
                let style = if length == selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                [Span::styled(format!(" {length} "), style), Span::raw("  ")]
            })
            .collect::<Vec<_>>(),
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: GO!",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));

    let menu = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" New game? ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, area);
    f.render_widget(menu, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_always_has_six_rows() {
        let round = RoundCoordinator::with_solutions(WordLength::Four, "moat", "atom");
        for id in PlayerId::ALL {
            assert_eq!(grid_lines(&round, id, WordLength::Four).len(), MAX_GUESSES);
        }
    }

    #[test]
    fn keyboard_has_three_rows() {
        let round = RoundCoordinator::with_solutions(WordLength::Five, "crane", "slate");
        assert_eq!(
            keyboard_lines(&round, PlayerId::Left, WordLength::Five).len(),
            3
        );
    }

    #[test]
    fn centered_fits_inside_area() {
        let area = Rect::new(0, 0, 20, 5);
        let inner = centered(area, 36, 9);
        assert_eq!(inner, Rect::new(0, 0, 20, 5));

        let inner = centered(Rect::new(0, 0, 100, 40), 36, 9);
        assert_eq!(inner, Rect::new(32, 15, 36, 9));
    }
}
