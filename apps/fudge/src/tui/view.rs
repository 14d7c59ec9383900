//! Frame rendering for the menu.

use super::app::{App, Screen, MENU_CHOICES};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

const ACCENT: Color = Color::Rgb(0x7D, 0x56, 0xF4);

/// Read-only facts shown in the header, refreshed by the runner.
pub struct Context<'a> {
    pub config_dir: &'a str,
    pub tracked: Option<usize>,
}

pub fn render(frame: &mut Frame, app: &App, ctx: &Context) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(2), // location
            Constraint::Min(5),    // body
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    let title = Paragraph::new(Line::from(Span::styled(
        " Fudge Config Manager ",
        Style::default().fg(Color::Rgb(0xFA, 0xFA, 0xFA)).bg(ACCENT),
    )));
    frame.render_widget(title, chunks[0]);

    let tracked = match ctx.tracked {
        Some(n) => format!("{} tracked file(s)", n),
        None => "registry unreadable".to_string(),
    };
    let location = Paragraph::new(Line::from(vec![
        Span::styled(ctx.config_dir, Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(tracked, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(location, chunks[1]);

    let body = match app.screen {
        Screen::Menu => menu_lines(app),
        Screen::AddPath => add_path_lines(app),
        Screen::Confirm => notice_lines(&app.message, Color::Green),
        Screen::Error => notice_lines(&format!("Error: {}", app.message), Color::Red),
    };
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }), chunks[2]);

    let footer = Paragraph::new(Span::styled(
        "Press 'ctrl+c' to quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(footer, chunks[3]);
}

fn menu_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Select an option:"), Line::from("")];
    for (i, choice) in MENU_CHOICES.iter().enumerate() {
        if i == app.cursor {
            lines.push(Line::from(vec![
                Span::raw("> "),
                Span::styled(*choice, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            ]));
        } else {
            lines.push(Line::from(format!("  {}", choice)));
        }
    }
    lines
}

fn add_path_lines(app: &App) -> Vec<Line<'static>> {
    vec![
        Line::from(app.message.clone()),
        Line::from(""),
        Line::from(format!("> {}█", app.input)),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'enter' to add, 'esc' to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn notice_lines(text: &str, color: Color) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(text.to_string(), Style::default().fg(color))),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'enter' or 'esc' to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        let ctx = Context {
            config_dir: "/home/u/.config/fudge_configs",
            tracked: Some(2),
        };
        terminal.draw(|f| render(f, app, &ctx)).unwrap();
        let buf = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn menu_shows_choices_and_cursor() {
        let screen = draw(&App::new());
        assert!(screen.contains("Fudge Config Manager"));
        assert!(screen.contains("> Open config"));
        assert!(screen.contains("  Sync config"));
        assert!(screen.contains("2 tracked file(s)"));
    }

    #[test]
    fn error_screen_is_prefixed() {
        let mut app = App::new();
        app.screen = Screen::Error;
        app.message = "boom".into();
        assert!(draw(&app).contains("Error: boom"));
    }
}
