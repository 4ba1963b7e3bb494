//! Ratatui-based terminal UI.
//!
//! The TUI provides a settings panel for the propeller geometry (`Ae/Ao`, `Z`)
//! and the plotted series, then renders the open-water curve family with a
//! per-pitch legend.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Terminal,
};

use crate::app::pipeline::{run_sweep, SweepOutput};
use crate::domain::{Series, SweepConfig};
use crate::error::{AppError, EXIT_RUNTIME};

mod plotters_chart;

use plotters_chart::{palette_color, FamilyChart};

const AR_STEP: f64 = 0.05;
const AR_MIN: f64 = 0.05;
const Z_MIN: f64 = 1.0;
const FIELD_COUNT: usize = 3;

/// Start the TUI.
pub fn run(config: SweepConfig) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(config);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(
                EXIT_RUNTIME,
                format!("Failed to enter alternate screen: {e}"),
            ));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    config: SweepConfig,
    selected_field: usize,
    status: String,
    run: Option<SweepOutput>,
}

impl App {
    fn new(config: SweepConfig) -> Self {
        let mut app = Self {
            config,
            selected_field: 0,
            status: String::new(),
            run: None,
        };
        app.recompute();
        app
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(EXIT_RUNTIME, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the user asked to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field + 1 < FIELD_COUNT {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Char('s') => {
                self.config.series = self.config.series.next();
                self.status = format!("series: {}", self.config.series.display_name());
            }
            KeyCode::Char('a') => {
                self.config.y_range = match self.config.y_range {
                    Some(_) => None,
                    None => SweepConfig::default().y_range,
                };
                self.status = match self.config.y_range {
                    Some((lo, hi)) => format!("y-axis fixed to [{lo}, {hi}]"),
                    None => "y-axis: auto".to_string(),
                };
            }
            _ => {}
        }
        false
    }

    fn adjust_field(&mut self, delta: i32) {
        let sign = f64::from(delta.signum());
        match self.selected_field {
            0 => {
                let ar = round_to_step(self.config.geometry.ar + sign * AR_STEP, AR_STEP);
                self.config.geometry.ar = ar.max(AR_MIN);
                self.recompute();
            }
            1 => {
                self.config.geometry.z = (self.config.geometry.z + sign).max(Z_MIN);
                self.recompute();
            }
            2 => {
                self.config.series = if delta >= 0 {
                    self.config.series.next()
                } else {
                    self.config.series.next().next()
                };
                self.status = format!("series: {}", self.config.series.display_name());
            }
            _ => {}
        }
    }

    /// Re-run the sweep; on failure the previous family stays on screen.
    fn recompute(&mut self) {
        match run_sweep(&self.config) {
            Ok(run) => {
                self.status = match run.domain_warnings.first() {
                    Some(w) => format!("extrapolating: {w}"),
                    None => format!(
                        "Ae/Ao={} Z={} | {} curves",
                        self.config.geometry.ar,
                        self.config.geometry.z,
                        run.family.curves.len()
                    ),
                };
                self.run = Some(run);
            }
            Err(err) => {
                self.status = format!("Sweep failed: {err}");
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("bseries", Style::default().fg(Color::Cyan)),
            Span::raw(" · Wageningen B-series open-water curves"),
        ]));

        let g = &self.config.geometry;
        let j = &self.config.j_grid;
        let curves = self.run.as_ref().map(|r| r.family.curves.len()).unwrap_or(0);
        lines.push(Line::from(Span::styled(
            format!(
                "Ae/Ao={} | Z={} | J=[{}, {}) step {} | series: {} | curves={curves}",
                g.ar,
                g.z,
                j.start,
                j.stop,
                j.step,
                self.config.series.display_name(),
            ),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(18)])
            .split(area);

        self.draw_chart(frame, columns[0]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(5)])
            .split(columns[1]);
        self.draw_legend(frame, side[0]);
        self.draw_settings(frame, side[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let title = format!("{} vs J", self.config.series.display_name());
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(run) = &self.run else {
            let msg = Paragraph::new("No curves computed.")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        };

        let (curves, x_bounds, y_bounds) = chart_series(run, self.config.series, self.config.y_range);

        let (chart_rect, insets) = chart_layout(inner);
        let widget = FamilyChart {
            curves: &curves,
            x_bounds,
            y_bounds,
            x_label: "J",
            y_label: self.config.series.display_name(),
            fmt_x: fmt_axis_x,
            fmt_y: fmt_axis_y,
        };

        frame.render_widget(widget, chart_rect);
        if let Some(insets) = insets {
            draw_axis_ticks(frame, inner, chart_rect, insets, x_bounds, y_bounds, self.config.series);
        }
    }

    fn draw_legend(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = self
            .run
            .as_ref()
            .map(|run| {
                run.family
                    .curves
                    .iter()
                    .enumerate()
                    .map(|(idx, c)| {
                        ListItem::new(Line::from(vec![
                            Span::styled("── ", Style::default().fg(palette_color(idx))),
                            Span::raw(c.label.clone()),
                        ]))
                    })
                    .collect()
            })
            .unwrap_or_default();

        let list = List::new(items).block(Block::default().title("Legend").borders(Borders::ALL));
        frame.render_widget(list, area);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items = vec![
            ListItem::new(format!("Ae/Ao: {:.2}", self.config.geometry.ar)),
            ListItem::new(format!("Z: {}", self.config.geometry.z)),
            ListItem::new(format!("Series: {}", self.config.series.display_name())),
        ];

        let list = List::new(items)
            .block(Block::default().title("Settings").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  s series  a auto-y  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn round_to_step(v: f64, step: f64) -> f64 {
    (v / step).round() * step
}

/// Build chart series for Plotters: one line per curve, scaled like the ASCII plot.
fn chart_series(
    run: &SweepOutput,
    series: Series,
    y_range: Option<(f64, f64)>,
) -> (Vec<Vec<(f64, f64)>>, [f64; 2], [f64; 2]) {
    let grid = &run.family.j_grid;
    let x_bounds = if grid.start.is_finite() && grid.stop.is_finite() && grid.stop > grid.start {
        [grid.start, grid.stop]
    } else {
        [0.0, 1.4]
    };

    let scale = series.plot_scale();
    let curves: Vec<Vec<(f64, f64)>> = run
        .family
        .curves
        .iter()
        .map(|c| c.series(series).iter().map(|p| (p.j, scale * p.value)).collect())
        .collect();

    if let Some((lo, hi)) = y_range {
        if lo.is_finite() && hi.is_finite() && hi > lo {
            // Plotters does not clip line segments to the plotting area.
            let clipped = curves
                .into_iter()
                .map(|c| c.into_iter().filter(|&(_, y)| y >= lo && y <= hi).collect())
                .collect();
            return (clipped, x_bounds, [lo, hi]);
        }
    }

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(_, y) in curves.iter().flatten() {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if !y_min.is_finite() || !y_max.is_finite() || y_max <= y_min {
        y_min = 0.0;
        y_max = 1.0;
    }

    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);
    (curves, x_bounds, [y_min - pad, y_max + pad])
}

fn fmt_axis_x(v: f64) -> String {
    format!("{v:.2}")
}

fn fmt_axis_y(v: f64) -> String {
    format!("{v:.2}")
}

#[derive(Debug, Clone, Copy)]
struct AxisInsets {
    left: u16,
    right: u16,
    top: u16,
    bottom: u16,
}

fn chart_layout(inner: Rect) -> (Rect, Option<AxisInsets>) {
    let insets = AxisInsets {
        left: 8,
        right: 2,
        top: 1,
        bottom: 2,
    };

    if inner.width <= insets.left + insets.right + 10
        || inner.height <= insets.top + insets.bottom + 5
    {
        return (inner, None);
    }

    let rect = Rect {
        x: inner.x + insets.left,
        y: inner.y + insets.top,
        width: inner.width - insets.left - insets.right,
        height: inner.height - insets.top - insets.bottom,
    };

    (rect, Some(insets))
}

fn draw_axis_ticks(
    frame: &mut ratatui::Frame<'_>,
    inner: Rect,
    chart: Rect,
    insets: AxisInsets,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    series: Series,
) {
    let ticks = 5usize;
    let style = Style::default().fg(Color::Gray);

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let x_val = x_bounds[0] + u * (x_bounds[1] - x_bounds[0]);
        let x = chart.x + ((chart.width - 1) as f64 * u).round() as u16;
        let label = format!("{:.2}", x_val);
        let label_len = label.len() as u16;
        let start = x.saturating_sub((label.len() / 2) as u16);
        let y = chart.y + chart.height;
        if y >= inner.y + inner.height - 1 {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let y_val = y_bounds[0] + u * (y_bounds[1] - y_bounds[0]);
        let y = chart.y + (chart.height - 1) - ((chart.height - 1) as f64 * u).round() as u16;
        let label = format!("{:.2}", y_val);
        let label_len = label.len() as u16;
        let x = inner.x + insets.left.saturating_sub(1);
        let start = x.saturating_sub(label.len() as u16);
        if start < inner.x {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    let x_label = Paragraph::new("advance ratio J")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    let x_rect = Rect {
        x: chart.x,
        y: chart.y + chart.height + 1,
        width: chart.width,
        height: 1,
    };
    if x_rect.y < inner.y + inner.height {
        frame.render_widget(x_label, x_rect);
    }

    let y_label = Paragraph::new(series.display_name())
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let y_rect = Rect {
        x: inner.x,
        y: inner.y,
        width: insets.left.saturating_sub(1),
        height: 1,
    };
    frame.render_widget(y_label, y_rect);
}
