use super::stack_view::StackView;
use crate::history::ActionKind;
use crate::keymap::Focus;
use crate::ui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use std::time::Instant;

pub fn render(app: &App, frame: &mut Frame) {
    render_at(app, frame, Instant::now());
}

/// Draw the whole screen as of `now` (drives the animations)
pub fn render_at(app: &App, frame: &mut Frame, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_editor_panel(app, frame, body[0], now);
    render_stacks_panel(app, frame, reveal(body[1], app.entrance_progress(now)));

    render_status_bar(app, frame, chunks[2]);
}

/// Top slice of `area` uncovered so far by the entrance slide
fn reveal(area: Rect, progress: f32) -> Rect {
    let height = (f32::from(area.height) * progress).round() as u16;
    Rect {
        height: height.min(area.height),
        ..area
    }
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " Stack",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "pad",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - text editor with visible history "),
    ]);

    let title_bar = Paragraph::new(title).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(title_bar, area);
}

fn render_editor_panel(app: &App, frame: &mut Frame, area: Rect, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    render_text_area(app, frame, chunks[0]);
    render_buttons(app, frame, chunks[1], now);
}

fn render_text_area(app: &App, frame: &mut Frame, area: Rect) {
    let cursor = Span::styled(" ", Style::default().bg(Color::White).fg(Color::Black));
    let focused = app.focus == Focus::Editor;
    let text = app.editor.text();

    let lines: Vec<Line> = if text.is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(cursor);
        }
        spans.push(Span::styled(
            app.config.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ));
        vec![Line::from(spans)]
    } else {
        let raw: Vec<&str> = text.split('\n').collect();
        let last = raw.len() - 1;
        raw.into_iter()
            .enumerate()
            .map(|(row, line)| {
                if row == last && focused {
                    Line::from(vec![Span::raw(line), cursor.clone()])
                } else {
                    Line::from(line)
                }
            })
            .collect()
    };

    // Keep the end of the text, where typing happens, in view
    let visible = usize::from(area.height.saturating_sub(2));
    let skip = lines.len().saturating_sub(visible);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();

    let widget = Paragraph::new(lines).block(panel_block(" Text ".to_string(), focused));

    frame.render_widget(widget, area);
}

fn render_buttons(app: &App, frame: &mut Frame, area: Rect, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let flashing = app.flashing(now);

    let undo = button(
        "Undo (Ctrl+Z)",
        app.editor.can_undo(),
        flashing == Some(ActionKind::Undo),
    );
    let redo = button(
        "Redo (Ctrl+Y)",
        app.editor.can_redo(),
        flashing == Some(ActionKind::Redo),
    );

    frame.render_widget(undo, chunks[0]);
    frame.render_widget(redo, chunks[1]);
}

fn button(label: &str, enabled: bool, flashing: bool) -> Paragraph<'_> {
    let style = if flashing {
        Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL))
}

fn render_stacks_panel(app: &App, frame: &mut Frame, area: Rect) {
    if area.height < 3 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_stack(
        app,
        frame,
        chunks[0],
        "Undo Stack",
        app.editor.undo_stack(),
        &app.undo_view,
        app.focus == Focus::UndoList,
    );
    render_stack(
        app,
        frame,
        chunks[1],
        "Redo Stack",
        app.editor.redo_stack(),
        &app.redo_view,
        app.focus == Focus::RedoList,
    );
}

fn render_stack(
    app: &App,
    frame: &mut Frame,
    area: Rect,
    title: &str,
    entries: &[String],
    view: &StackView,
    focused: bool,
) {
    let height = usize::from(area.height.saturating_sub(2));
    view.set_viewport(height);
    let newest = entries.len().checked_sub(1);

    let items: Vec<ListItem> = view
        .window(entries.len(), height)
        .map(|index| {
            let style = if Some(index) == newest {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3} ", index + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(entry_label(&entries[index], &app.config.empty_label), style),
            ]))
        })
        .collect();

    let mut block = panel_block(format!(" {} ({}) ", title, entries.len()), focused);
    if !view.is_at_newest(entries.len()) {
        block = block.title_bottom(
            Line::from(Span::styled(
                " newest: End ",
                Style::default().fg(Color::White).bg(Color::Blue),
            ))
            .right_aligned(),
        );
    }

    frame.render_widget(List::new(items).block(block), area);
}

fn panel_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

/// One-line rendition of a snapshot
pub fn entry_label(snapshot: &str, empty_label: &str) -> String {
    if snapshot.is_empty() {
        empty_label.to_string()
    } else {
        snapshot.replace('\n', "⏎")
    }
}

fn render_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let status_text = if !app.status_message.is_empty() {
        format!(" {}", app.status_message)
    } else {
        format!(
            " {} lines | {} chars | undo {} | redo {} | Ctrl+Z: Undo | Ctrl+Y: Redo | Tab: Focus | Ctrl+Q: Quit",
            app.editor.line_count(),
            app.editor.text().chars().count(),
            app.editor.undo_stack().len(),
            app.editor.redo_stack().len(),
        )
    };

    let status_bar =
        Paragraph::new(status_text).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}
