//! Render orchestration for the terminal wizard.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use personaje_core::{step_count, Store};

use crate::app::App;

/// Main render function
pub fn render<S: Store>(frame: &mut Frame, app: &App<S>) {
    let area = centered_column(frame.area());

    if app.wizard.summary_visible() {
        render_summary(frame, app, area);
    } else {
        render_step(frame, app, area);
    }
}

/// Cap the form width so it reads like a centered card on wide terminals.
fn centered_column(area: Rect) -> Rect {
    let width = area.width.min(80);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

fn render_step<S: Store>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let theme = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Error / status
            Constraint::Length(1), // Help
        ])
        .split(area);

    // Progress across the nine steps
    let step = app.wizard.step_index();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progreso "))
        .gauge_style(Style::default().fg(theme.progress))
        .ratio((step + 1) as f64 / step_count() as f64)
        .label(format!("Paso {} de {}", step + 1, step_count()));
    frame.render_widget(gauge, chunks[0]);

    // Current step's fields
    let definition = app.wizard.current_step();
    let mut lines: Vec<Line> = Vec::new();
    for (i, field) in definition.fields.iter().enumerate() {
        let selected = i == app.selected;
        let marker = if selected { "> " } else { "  " };
        let value = app.wizard.character().get(*field).to_string();
        let cursor = if selected { "█" } else { "" };

        let mut line = Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{}: ", field.label()), theme.label_style()),
            Span::styled(format!("{value}{cursor}"), theme.value_style()),
        ]);
        if selected {
            line = line.style(theme.selected_style());
        }
        lines.push(line);
        lines.push(Line::from(""));
    }

    let form = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", definition.title))
                .border_style(theme.border_style()),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(form, chunks[1]);

    render_message_line(frame, app, chunks[2]);

    let last_step = step + 1 == step_count();
    let advance = if last_step { "Finalizar" } else { "Siguiente" };
    let back = if step > 0 { "Esc: Atrás" } else { "Esc: Salir" };
    let help = Paragraph::new(format!("↑/↓: Campo   Enter: {advance}   {back}"))
        .style(theme.help_style());
    frame.render_widget(help, chunks[3]);
}

fn render_summary<S: Store>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let theme = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Field list
            Constraint::Length(1), // Error / status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, field) in app.visible_fields().iter().enumerate() {
        let selected = i == app.selected;
        let editing = app.wizard.editing() == Some(*field);
        let marker = if editing {
            "✎ "
        } else if selected {
            "> "
        } else {
            "  "
        };
        let value = app.wizard.character().get(*field).to_string();
        let cursor = if editing { "█" } else { "" };

        let value_style = if editing {
            theme.title_style()
        } else {
            theme.value_style()
        };
        let mut line = Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{}: ", field.label()), theme.label_style()),
            Span::styled(format!("{value}{cursor}"), value_style),
        ]);
        if selected && !editing {
            line = line.style(theme.selected_style());
        }
        lines.push(line);
    }

    let list = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Resumen del Personaje ")
                .border_style(theme.border_style()),
        )
        .wrap(Wrap { trim: false })
        .scroll((summary_scroll(app, chunks[0]), 0));
    frame.render_widget(list, chunks[0]);

    render_message_line(frame, app, chunks[1]);

    let help = if app.wizard.editing().is_some() {
        "Enter: Guardar"
    } else {
        "j/k: Mover   Enter: Editar   n: Crear otro personaje   q: Salir"
    };
    frame.render_widget(Paragraph::new(help).style(theme.help_style()), chunks[2]);
}

/// Keep the highlighted summary row on screen.
fn summary_scroll<S: Store>(app: &App<S>, area: Rect) -> u16 {
    let visible = area.height.saturating_sub(2) as usize; // minus borders
    if visible == 0 || app.selected < visible {
        0
    } else {
        (app.selected + 1 - visible) as u16
    }
}

fn render_message_line<S: Store>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let theme = &app.theme;
    if let Some(message) = app.wizard.error_message() {
        frame.render_widget(Paragraph::new(message).style(theme.error_style()), area);
    } else if let Some(status) = &app.status {
        frame.render_widget(
            Paragraph::new(status.as_str()).style(theme.error_style()),
            area,
        );
    }
}
