use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{GameController, GameStatus};
use crate::render::{replay, scene};

use super::canvas::CharCanvas;

/// Draw a full frame: score header, board (or game-over panel), controls
pub fn draw(frame: &mut Frame, controller: &GameController) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Game area
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    frame.render_widget(header(controller), chunks[0]);

    // Center the board horizontally
    let board_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(chunks[1])[1];

    if controller.status() == GameStatus::GameOver {
        frame.render_widget(game_over_panel(controller), board_area);
    } else {
        frame.render_widget(board(controller), board_area);
    }

    frame.render_widget(controls(), chunks[2]);
}

fn header(controller: &GameController) -> Paragraph<'static> {
    let mut spans = vec![
        Span::styled("Score: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            controller.score().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            controller.high_score().to_string(),
            Style::default().fg(Color::White),
        ),
    ];

    match controller.status() {
        GameStatus::Idle => {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                "Press Enter to start",
                Style::default().fg(Color::Gray),
            ));
        }
        GameStatus::Paused => {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                "Paused",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        _ => {}
    }

    Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
}

fn board(controller: &GameController) -> Paragraph<'static> {
    let commands = scene::commands(
        controller.grid(),
        controller.snake(),
        controller.food(),
        controller.config(),
    );
    let mut canvas = CharCanvas::new(controller.config());
    replay(&commands, &mut canvas);

    Paragraph::new(canvas.lines())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
        .alignment(Alignment::Center)
}

fn game_over_panel(controller: &GameController) -> Paragraph<'static> {
    let text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                controller.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                controller.high_score().to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Q",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ]),
    ];

    Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    )
}

fn controls() -> Paragraph<'static> {
    let text = vec![Line::from(vec![
        Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
        Span::raw(" or "),
        Span::styled("WASD", Style::default().fg(Color::Cyan)),
        Span::raw(" move | "),
        Span::styled("Enter", Style::default().fg(Color::Green)),
        Span::raw(" start | "),
        Span::styled("Space", Style::default().fg(Color::Cyan)),
        Span::raw(" pause | "),
        Span::styled("R", Style::default().fg(Color::Cyan)),
        Span::raw(" restart | "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(" reset | "),
        Span::styled("Q", Style::default().fg(Color::Red)),
        Span::raw(" quit"),
    ])];

    Paragraph::new(text).alignment(Alignment::Center)
}
