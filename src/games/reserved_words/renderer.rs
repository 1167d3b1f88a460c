use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::core::clock::format_clock;
use crate::core::session::Outcome;
use crate::games::reserved_words::game::ReservedWordsGame;
use crate::games::RESERVED_WORDS;

pub struct ReservedWordsRenderer;

impl ReservedWordsRenderer {
    pub fn render(frame: &mut Frame, game: &ReservedWordsGame) {
        let session = game.session();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(frame.area());

        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        frame.render_widget(
            Paragraph::new(format!("Score: {} / {}", game.shown_score, session.total()))
                .style(Style::default().add_modifier(Modifier::BOLD)),
            header[0],
        );
        frame.render_widget(
            Paragraph::new(format!("Time: {}", format_clock(session.remaining())))
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Right),
            header[1],
        );

        let (title, input) = if session.is_over() {
            (" Game Over ", Line::from(""))
        } else if game.input.is_empty() {
            (
                " Check ",
                Line::styled("Type the reserved word here", Style::default().fg(Color::DarkGray)),
            )
        } else {
            (" Check ", Line::from(game.input.as_str()))
        };
        frame.render_widget(
            Paragraph::new(input)
                .alignment(Alignment::Center)
                .block(Block::default().title(title).borders(Borders::ALL)),
            chunks[1],
        );

        let feedback_style = match session.outcome() {
            Some(Outcome::Victory) => Style::default().fg(Color::Green),
            Some(Outcome::Defeat) => Style::default().fg(Color::Red),
            None => Style::default().fg(Color::Gray),
        };
        frame.render_widget(
            Paragraph::new(game.feedback.as_str())
                .style(feedback_style)
                .alignment(Alignment::Center),
            chunks[2],
        );

        // Unscored rows stay blank until found; a lost game reveals them dimmed.
        let reveal = session.outcome() == Some(Outcome::Defeat);
        let items: Vec<ListItem> = session
            .bank()
            .entries()
            .iter()
            .map(|word| {
                let line = if word.scored {
                    Line::styled(word.title.as_str(), Style::default().fg(Color::Green))
                } else if reveal {
                    Line::styled(word.title.as_str(), Style::default().fg(Color::DarkGray))
                } else {
                    Line::from("")
                };
                ListItem::new(line.alignment(Alignment::Center))
            })
            .collect();
        frame.render_widget(
            List::new(items).block(
                Block::default()
                    .title(format!(" {} ", RESERVED_WORDS.name))
                    .borders(Borders::ALL),
            ),
            chunks[3],
        );
    }
}
