//! Rendering of the session state.
//!
//! Rendering is a pure function of the [`Session`] and the [`Theme`]; it never
//! mutates session state.

use crate::session::{ContextAction, ContextMenu, DirectoryPrompt, FilterState, Mode, Session};
use crate::tui::theme::Theme;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const SHADES: [char; 4] = ['░', '▒', '▓', '█'];
const FAVORITE_MARKER: &str = "★ ";
const INPUT_PLACEHOLDER: &str = "~/projects";

pub fn render(frame: &mut Frame, session: &Session, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.base()), area);
    match session.mode() {
        Mode::AddingDirectory(prompt) => render_add_directory(frame, area, prompt, theme),
        Mode::Browsing | Mode::Filtering | Mode::ContextMenu(_) => {
            render_browser(frame, area, session, theme)
        }
    }
}

/// Shade bar that is solid in the middle and fades toward both edges.
pub fn gradient_bar(width: usize) -> String {
    let half = (width / 2).max(1);
    let center = width / 2;
    (0..width)
        .map(|i| {
            let distance = center.abs_diff(i);
            let shade = 3usize.saturating_sub(distance * 4 / half);
            SHADES[shade.min(3)]
        })
        .collect()
}

fn render_browser(frame: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
    let list = session.list();
    let filter_height = u16::from(list.filter_state() != FilterState::Unfiltered);
    let favorites_height = u16::from(session.favorites_only());
    let menu_height = u16::from(matches!(session.mode(), Mode::ContextMenu(_)));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(filter_height),
            Constraint::Min(3),
            Constraint::Length(favorites_height),
            Constraint::Length(menu_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, rows[0], list.title(), theme);
    if filter_height > 0 {
        render_filter(frame, rows[1], list.query(), list.is_filtering(), theme);
    }
    render_projects(frame, rows[2], session, theme);
    if favorites_height > 0 {
        let badge = Paragraph::new(Span::styled(" Showing Favorites Only ", theme.badge()))
            .alignment(Alignment::Center);
        frame.render_widget(badge, rows[3]);
    }
    if let Mode::ContextMenu(menu) = session.mode() {
        render_context_menu(frame, rows[4], menu, theme);
    }
    render_status(frame, rows[5], session.status(), theme);
    render_hints(frame, rows[6], browser_hints(session.mode()), theme);
}

fn render_header(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    let bar = gradient_bar(area.width as usize);
    let header = Paragraph::new(vec![
        Line::from(bar.clone()),
        Line::from(title.to_string()),
        Line::from(bar),
    ])
    .style(theme.title())
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn render_filter(frame: &mut Frame, area: Rect, query: &str, editing: bool, theme: &Theme) {
    let cursor = if editing { "_" } else { "" };
    let line = Line::from(vec![
        Span::styled("Filter: ", theme.muted()),
        Span::styled(format!("{query}{cursor}"), theme.item()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_projects(frame: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
    let list = session.list();
    let items: Vec<ListItem> = list
        .visible_items()
        .map(|project| {
            let marker = if project.favorite { FAVORITE_MARKER } else { "  " };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, theme.title()),
                    Span::styled(project.name.clone(), theme.item()),
                ]),
                Line::from(Span::styled(
                    format!("  {}", project.description()),
                    theme.muted(),
                )),
            ])
        })
        .collect();

    let empty = items.is_empty();
    let widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        )
        .highlight_style(theme.selected())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(list.selected_index());
    frame.render_stateful_widget(widget, area, &mut state);

    if empty {
        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2).min(1),
        };
        let message = if session.favorites_only() {
            "No favorite projects"
        } else {
            "No projects found"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message, theme.muted())).alignment(Alignment::Center),
            inner,
        );
    }
}

fn render_context_menu(frame: &mut Frame, area: Rect, menu: &ContextMenu, theme: &Theme) {
    let selected = menu.selected_action();
    let spans: Vec<Span> = ContextAction::ALL
        .iter()
        .flat_map(|action| {
            let style = if *action == selected {
                theme.selected()
            } else {
                theme.item()
            };
            [Span::styled(format!(" {} ", action.label()), style), Span::raw(" ")]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_status(frame: &mut Frame, area: Rect, status: Option<&str>, theme: &Theme) {
    let Some(message) = status else {
        return;
    };
    let style = if message.starts_with("Error") {
        theme.error()
    } else {
        theme.success()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(message.to_string(), style)).alignment(Alignment::Center),
        area,
    );
}

fn render_hints(frame: &mut Frame, area: Rect, hints: &str, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Span::styled(hints, theme.muted())).alignment(Alignment::Center),
        area,
    );
}

fn browser_hints(mode: &Mode) -> &'static str {
    match mode {
        Mode::Filtering => "Enter: apply • Esc: clear • ↑/↓: navigate",
        Mode::ContextMenu(_) => "Enter: select • ↑/↓: choose • Esc: back",
        _ => "Enter: actions • /: filter • a: add dir • F: favorites • .: config • q: quit",
    }
}

fn render_add_directory(frame: &mut Frame, area: Rect, prompt: &DirectoryPrompt, theme: &Theme) {
    let mut lines = vec![
        Line::from(Span::styled("Add Project Directory", theme.title())),
        Line::from(""),
        Line::from(Span::styled(
            "Enter the path to your projects directory.",
            theme.muted(),
        )),
        Line::from(Span::styled(
            "Press Tab to autocomplete, Esc to cancel, Enter to confirm.",
            theme.muted(),
        )),
        Line::from(""),
    ];

    let input = if prompt.input.is_empty() {
        Span::styled(INPUT_PLACEHOLDER, theme.muted())
    } else {
        Span::styled(prompt.input.clone(), theme.item())
    };
    lines.push(Line::from(vec![Span::styled("> ", theme.title()), input]));

    let suggestions = &prompt.suggestions;
    if !suggestions.is_empty() {
        let mut heading = String::from("Suggestions:");
        if suggestions.page_count() > 1 {
            heading.push_str(&format!(
                " (Page {}/{})",
                suggestions.page() + 1,
                suggestions.page_count()
            ));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(heading, theme.muted())));

        for i in suggestions.page_range() {
            let text = &suggestions.suggestions()[i];
            let line = if i == suggestions.selected_index() {
                Span::styled(format!("> {text}"), theme.selected())
            } else {
                Span::styled(format!("  {text}"), theme.item())
            };
            lines.push(Line::from(line));
        }
    }

    if let Some(error) = &prompt.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("Error: {error}"), theme.error())));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: confirm • Tab: complete • ↑/↓: navigate • ←/→: more • Esc: cancel",
        theme.muted(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border());
    frame.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        area,
    );
}
