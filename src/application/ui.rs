use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::execute;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;
use tui_textarea::TextArea;

use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::services::Conversation;

fn build_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title("Ask about EV batteries"),
    );

    return textarea;
}

fn transcript_lines(messages: &[Message], line_max_width: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = vec![];

    for message in messages {
        let name_style = match message.author {
            Author::User => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Author::Bot => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        };
        lines.push(Line::from(Span::styled(
            message.author.to_string(),
            name_style,
        )));

        let text_style = match message.message_type() {
            MessageType::Normal => Style::default(),
            MessageType::Error => Style::default().fg(Color::Red),
        };
        for text_line in message.as_string_lines(line_max_width) {
            lines.push(Line::from(Span::styled(text_line, text_style)));
        }

        if let Some(sources_line) = message.sources_line() {
            lines.push(Line::from(Span::styled(
                sources_line,
                Style::default().fg(Color::DarkGray),
            )));
        }

        lines.push(Line::from(""));
    }

    return lines;
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    conversation: &mut Conversation,
    tx: mpsc::UnboundedSender<Action>,
    rx: &mut mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut textarea = build_textarea();

    loop {
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Min(1), Constraint::Max(4)])
                .split(frame.size());

            let line_max_width = layout[0].width.saturating_sub(2) as usize;
            let lines = transcript_lines(&conversation.messages, line_max_width);

            // Stick to the bottom of the transcript.
            let scroll_position = (lines.len() as u16).saturating_sub(layout[0].height);
            frame.render_widget(
                Paragraph::new(lines).scroll((scroll_position, 0)),
                layout[0],
            );

            if conversation.waiting_for_backend {
                frame.render_widget(
                    Paragraph::new("Thinking...")
                        .block(Block::default().borders(Borders::ALL)),
                    layout[1],
                );
            } else {
                frame.render_widget(textarea.widget(), layout[1]);
            }
        })?;

        // New input is disabled until the in-flight request resolves, so the
        // loop only has to wait for the worker's outcome here.
        if conversation.waiting_for_backend {
            let event = rx.recv().await;
            if event.is_none() {
                continue;
            }

            match event.unwrap() {
                Event::ChatReply(reply) => {
                    conversation.handle_reply(reply);
                }
                Event::ChatFailure() => {
                    conversation.handle_failure();
                }
            }

            continue;
        }

        match crossterm::event::read()?.into() {
            Input {
                key: Key::Char('c'),
                ctrl: true,
                ..
            } => {
                break;
            }
            Input {
                key: Key::Enter, ..
            } => {
                conversation.update_draft(&textarea.lines().join("\n"));
                if conversation.submit(&tx)? {
                    textarea = build_textarea();
                }
            }
            input => {
                textarea.input(input);
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    mut rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut conversation = Conversation::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    start_loop(&mut terminal, &mut conversation, tx, &mut rx).await?;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;
    terminal.show_cursor()?;

    return Ok(());
}
