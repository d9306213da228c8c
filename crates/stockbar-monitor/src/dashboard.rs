//! TUI dashboard sink using ratatui.

use chrono::{DateTime, Local};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};
use std::io;
use std::str::FromStr;
use std::time::Duration;
use stockbar_core::error::RenderError;
use stockbar_core::render::{DisplayItem, Trend};
use stockbar_core::traits::DisplaySink;

/// Colours per price trend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub rise: Color,
    pub fall: Color,
    pub flat: Color,
}

impl Palette {
    /// Build from colour names such as `"red"` or `"#ff8800"`.
    pub fn from_names(rise: &str, fall: &str, flat: &str) -> Result<Self, RenderError> {
        let parse = |name: &str| {
            Color::from_str(name)
                .map_err(|_| RenderError::Sink(format!("unknown colour: {}", name)))
        };
        Ok(Self {
            rise: parse(rise)?,
            fall: parse(fall)?,
            flat: parse(flat)?,
        })
    }

    fn color(&self, trend: Trend) -> Color {
        match trend {
            Trend::Rising => self.rise,
            Trend::Falling => self.fall,
            Trend::Flat => self.flat,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            rise: Color::Red,
            fall: Color::Green,
            flat: Color::Gray,
        }
    }
}

/// Full-screen ticker: a status line with every stock and a detail table.
pub struct TerminalSink<B: Backend + Send> {
    terminal: Terminal<B>,
    palette: Palette,
    title: String,
    items: Vec<DisplayItem>,
    refreshed_at: Option<DateTime<Local>>,
    raw_mode: bool,
}

impl TerminalSink<CrosstermBackend<io::Stdout>> {
    /// Take over the terminal (raw mode, alternate screen).
    pub fn enter(title: impl Into<String>, palette: Palette) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut sink = Self::with_backend(CrosstermBackend::new(stdout), title, palette)?;
        sink.raw_mode = true;
        sink.terminal.clear()?;
        Ok(sink)
    }

    /// Give the terminal back.
    pub fn leave(&mut self) -> io::Result<()> {
        if !self.raw_mode {
            return Ok(());
        }
        self.raw_mode = false;
        restore_terminal()
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

impl<B: Backend + Send> TerminalSink<B> {
    /// Draw on an arbitrary backend.
    pub fn with_backend(backend: B, title: impl Into<String>, palette: Palette) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            palette,
            title: title.into(),
            items: Vec::new(),
            refreshed_at: None,
            raw_mode: false,
        })
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    fn ui(frame: &mut Frame, view: &View<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Ticker
                Constraint::Min(5),    // Details
            ])
            .split(frame.area());

        render_header(frame, chunks[0], view);
        render_ticker(frame, chunks[1], view);
        render_details(frame, chunks[2], view);
    }
}

impl<B: Backend + Send> Drop for TerminalSink<B> {
    fn drop(&mut self) {
        if self.raw_mode {
            let _ = restore_terminal();
        }
    }
}

struct View<'a> {
    title: &'a str,
    items: &'a [DisplayItem],
    palette: Palette,
    refreshed_at: Option<DateTime<Local>>,
}

fn render_header(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let refreshed = view
        .refreshed_at
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string());

    let header = Paragraph::new(vec![Line::from(vec![
        Span::styled(view.title, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" | Refreshed "),
        Span::styled(refreshed, Style::default().fg(Color::Cyan)),
        Span::raw(" | Press 'q' to quit"),
    ])])
    .block(Block::default().borders(Borders::ALL).title("Stockbar"));
    frame.render_widget(header, area);
}

fn render_ticker(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let mut spans = Vec::with_capacity(view.items.len() * 2);
    for (i, item) in view.items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("「{}」{}", item.label, item.value),
            Style::default().fg(view.palette.color(item.trend)),
        ));
    }

    let ticker = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Watch-list"));
    frame.render_widget(ticker, area);
}

fn render_details(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let header_cells = ["Stock", "Quote", "Details"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
    let header = Row::new(header_cells).height(1);

    let rows = view.items.iter().map(|item| {
        let color = view.palette.color(item.trend);
        let details = item.tooltip.lines().skip(1).collect::<Vec<_>>().join("  ");
        let title = item.tooltip.lines().next().unwrap_or_default().to_string();

        Row::new(vec![
            Cell::from(title),
            Cell::from(item.value.clone()).style(Style::default().fg(color)),
            Cell::from(details),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(55),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Quotes"));

    frame.render_widget(table, area);
}

impl<B: Backend + Send> DisplaySink for TerminalSink<B> {
    fn show(&mut self, index: usize, item: &DisplayItem) -> Result<(), RenderError> {
        if index < self.items.len() {
            self.items[index] = item.clone();
        } else {
            self.items.push(item.clone());
        }
        Ok(())
    }

    fn retain(&mut self, len: usize) -> Result<(), RenderError> {
        self.items.truncate(len);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), RenderError> {
        self.refreshed_at = Some(Local::now());
        let view = View {
            title: &self.title,
            items: &self.items,
            palette: self.palette,
            refreshed_at: self.refreshed_at,
        };
        self.terminal
            .draw(|f| Self::ui(f, &view))
            .map_err(|e| RenderError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Block until `q`, `Esc` or Ctrl-C is pressed, or `stopped` turns true.
///
/// # Returns
/// `true` when a quit key was pressed
pub fn wait_for_quit_key<F>(poll: Duration, stopped: F) -> io::Result<bool>
where
    F: Fn() -> bool,
{
    while !stopped() {
        if !event::poll(poll)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let ctrl_c =
                key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            if ctrl_c || key.code == KeyCode::Char('q') || key.code == KeyCode::Esc {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn item(label: &str, value: &str, trend: Trend) -> DisplayItem {
        DisplayItem {
            label: label.to_string(),
            value: value.to_string(),
            tooltip: format!("{} (600519)\nHigh: 1705.00", label),
            trend,
        }
    }

    fn screen(sink: &TerminalSink<TestBackend>) -> String {
        sink.backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_palette_from_names() {
        let palette = Palette::from_names("green", "red", "#808080").unwrap();
        assert_eq!(palette.rise, Color::Green);
        assert_eq!(palette.fall, Color::Red);
        assert_eq!(palette.flat, Color::Rgb(0x80, 0x80, 0x80));
        assert!(Palette::from_names("not-a-colour", "red", "gray").is_err());
    }

    #[test]
    fn test_flush_draws_items() {
        let backend = TestBackend::new(100, 20);
        let mut sink = TerminalSink::with_backend(backend, "desk", Palette::default()).unwrap();

        sink.show(0, &item("Moutai", "1700.00 +0.30%", Trend::Rising)).unwrap();
        sink.show(1, &item("PingAn", "11.40 -0.87%", Trend::Falling)).unwrap();
        sink.retain(2).unwrap();
        sink.flush().unwrap();

        let text = screen(&sink);
        assert!(text.contains("desk"));
        assert!(text.contains("Moutai"));
        assert!(text.contains("11.40 -0.87%"));
        assert!(text.contains("High: 1705.00"));
    }

    #[test]
    fn test_retain_removes_rows() {
        let backend = TestBackend::new(100, 20);
        let mut sink = TerminalSink::with_backend(backend, "desk", Palette::default()).unwrap();

        sink.show(0, &item("Moutai", "1700.00", Trend::Flat)).unwrap();
        sink.show(1, &item("PingAn", "11.40", Trend::Flat)).unwrap();
        sink.flush().unwrap();

        sink.show(0, &item("Moutai", "1701.00", Trend::Flat)).unwrap();
        sink.retain(1).unwrap();
        sink.flush().unwrap();

        let text = screen(&sink);
        assert!(text.contains("1701.00"));
        assert!(!text.contains("PingAn"));
    }
}
