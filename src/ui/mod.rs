use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{AppState, DisplayState};

/// Pure view of the app state: an input bar plus exactly one of the three
/// sections, picked by `state.display`.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < 40 || area.height < 12 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 40x12.")
            .block(Block::default().borders(Borders::ALL).title("skygaze"));
        frame.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_input_bar(frame, chunks[0], state);

    match state.display {
        DisplayState::Prompt => render_message(
            frame,
            chunks[1],
            "Search City",
            "Find out the weather conditions of the city",
        ),
        DisplayState::NotFound => render_message(
            frame,
            chunks[1],
            "City Not Found",
            "Check the spelling and try another search",
        ),
        DisplayState::Result => render_result(frame, chunks[1], state),
    }
}

fn render_input_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hint = if state.lookup_in_flight {
        " searching... "
    } else {
        " Search City (Enter to search, Esc to quit) "
    };

    let input = Paragraph::new(Line::from(vec![
        Span::raw(state.city_input.as_str()),
        Span::styled("▏", Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL).title(hint));

    frame.render_widget(input, area);
}

fn render_message(frame: &mut Frame, area: Rect, title: &str, detail: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(detail.to_string()),
    ];

    let message = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, area);
}

fn render_result(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(current) = &state.current else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(5),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            current.location.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            current.date_label.clone(),
            Style::default().fg(Color::Gray),
        ),
    ]));
    frame.render_widget(header, chunks[0]);

    let summary = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("{}  {}", current.icon_glyph, current.temp_label),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(current.condition_label.clone()),
    ]);
    frame.render_widget(summary, chunks[1]);

    let conditions = Paragraph::new(Line::from(vec![
        Span::raw(format!("Humidity {}", current.humidity_label)),
        Span::raw("   "),
        Span::raw(format!("Wind {}", current.wind_label)),
    ]));
    frame.render_widget(conditions, chunks[2]);

    render_forecast_row(frame, chunks[3], state);
}

fn render_forecast_row(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.forecast.is_empty() {
        return;
    }

    let count = u32::try_from(state.forecast.len()).unwrap_or(1);
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); count as usize])
        .split(area);

    for (item, cell) in state.forecast.iter().zip(cells.iter()) {
        let card = Paragraph::new(vec![
            Line::from(item.date_label.clone()),
            Line::from(item.icon_glyph),
            Line::from(item.temp_label.clone()),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(card, *cell);
    }
}
