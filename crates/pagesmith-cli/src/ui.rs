use pagesmith_engine::StyleProperty;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::app::App;

pub fn draw(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)].as_ref())
        .split(rows[0]);

    draw_canvas(f, app, panes[0]);
    draw_index(f, app, panes[1]);
    draw_status(f, app, rows[1]);

    if app.surface.export().is_some() {
        draw_export(f, app);
    }
}

fn draw_canvas(f: &mut Frame, app: &App, area: Rect) {
    let session = app.controller.session();
    let selected = session.selected();
    let target = session.current_target();

    let mut lines = Vec::new();
    for (depth, handle) in app.surface.walk() {
        let element = app.surface.element(handle);
        let is_layout = element.styles.get(StyleProperty::Border).is_some();

        let mut tag_style = Style::default().fg(Color::Cyan);
        if element.id.as_ref().is_some_and(|id| Some(id) == target) {
            tag_style = tag_style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        if element.id.as_ref().is_some_and(|id| Some(id) == selected) {
            tag_style = tag_style.add_modifier(Modifier::REVERSED);
        }

        let mut spans = vec![
            Span::styled("┆ ".repeat(depth), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!(
                    "<{}#{}>",
                    element.tag,
                    element.id.as_ref().map(|id| id.as_str()).unwrap_or("")
                ),
                tag_style,
            ),
        ];
        if element.editable {
            spans.push(Span::styled(
                format!(" {}▏", element.text),
                Style::default().fg(Color::Black).bg(Color::White),
            ));
        } else if !element.text.is_empty() {
            spans.push(Span::raw(format!(" {}", element.text)));
        }
        if is_layout {
            let summary: Vec<_> = element
                .styles
                .iter()
                .filter(|(p, _)| {
                    matches!(
                        p,
                        StyleProperty::FlexDirection
                            | StyleProperty::FlexWrap
                            | StyleProperty::JustifyContent
                    )
                })
                .map(|(p, v)| format!("{}: {v}", p.css_name()))
                .collect();
            spans.push(Span::styled(
                format!("  [flex {}]", summary.join("; ")),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }

    let content = if lines.is_empty() {
        vec![Line::from("Empty page: add an element or a layout")]
    } else {
        lines
    };
    let canvas = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title("Canvas"))
        .wrap(Wrap { trim: false });
    f.render_widget(canvas, area);
}

fn draw_index(f: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .surface
        .index()
        .iter()
        .map(|entry| {
            let text = format!("{}{}", "  ".repeat(entry.depth), entry.id);
            ListItem::new(vec![Line::from(vec![Span::raw(text)])])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Elements"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, area, &mut app.index_state);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let selected = app
        .controller
        .session()
        .selected()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "none".to_string());
    let help = if app.controller.editing().is_some() {
        "Type to edit | Backspace: delete | Enter/Esc: done"
    } else {
        "p/1/2/d/s/b: add element | r/c/m: add row/column/center | ↑↓ Enter: pick | Esc: page | x: remove | e: export | q: quit"
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Workspace: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(app.surface.workspace().to_string()),
            Span::raw(format!(" | Selected: {selected}")),
            Span::styled(
                format!("  {}", app.status),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(help),
    ];
    f.render_widget(Paragraph::new(lines).block(Block::default()), area);
}

fn draw_export(f: &mut Frame, app: &App) {
    let Some(page) = app.surface.export() else {
        return;
    };
    let area = centered_rect(80, 80, f.area());

    let mut text = Text::default();
    text.lines.push(Line::styled(
        "index.html",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    text.lines
        .extend(page.markup.lines().map(|l| Line::from(l.to_string())));
    text.lines.push(Line::default());
    text.lines.push(Line::styled(
        "styles.css",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    text.lines
        .extend(page.stylesheet.lines().map(|l| Line::from(l.to_string())));

    let title = format!(
        "Export (w: write to {}, Esc: close)",
        app.export_dir.display()
    );
    let popup = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
