use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use indoc::indoc;
use ratatui::Frame;
use ratatui::layout::Rect as Area;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use float_wm::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use float_wm::drivers::{InputDriver, OutputDriver};
use float_wm::event_loop::{ControlFlow, EventLoop};
use float_wm::layout::RectSpec;
use float_wm::log_buffer::{self, LogBuffer};
use float_wm::window::{GeometryDefaults, TitlebarButton};
use float_wm::{
    Bounds, FloatingWindow, Viewport, WindowAdapter, WindowManager, WmConfig, tracing_sub,
};

const HELP: &str = indoc! {"
    drag a titlebar to move, drag an edge or corner to resize
    double-click a titlebar to maximize or restore
    n: new window   tab: raise bottom window   x: close top window
    ctrl+q: quit
"};

/// Floating window manager demo for the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Windows to open at startup.
    #[arg(short = 'n', long, default_value_t = 3)]
    windows: usize,

    /// Refuse to open more than this many windows.
    #[arg(long)]
    max_windows: Option<usize>,

    /// Hover time before a tooltip appears, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    tooltip_show_ms: u64,

    /// Time a tooltip stays up, in milliseconds.
    #[arg(long, default_value_t = 4000)]
    tooltip_dismiss_ms: u64,

    /// Longest gap between two titlebar presses that counts as a double-click.
    #[arg(long, default_value_t = 500)]
    double_click_ms: u64,

    /// Log to stderr instead of the status line.
    #[arg(long)]
    log_stderr: bool,
}

impl Args {
    fn config(&self) -> WmConfig {
        WmConfig::default()
            .with_tooltip_delays(
                Duration::from_millis(self.tooltip_show_ms),
                Duration::from_millis(self.tooltip_dismiss_ms),
            )
            .with_double_click_window(Duration::from_millis(self.double_click_ms))
            .with_max_windows(self.max_windows)
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let log = (!args.log_stderr).then(LogBuffer::default);
    if let Some(buffer) = &log {
        log_buffer::set_global(buffer.clone());
    }
    tracing_sub::init_default();

    let mut output = ConsoleOutputDriver::new()?;
    let (cols, rows) = output.size()?;
    let mut app = App::new(args.config(), Viewport::new(cols.into(), rows.into()), log);
    for _ in 0..args.windows {
        app.open_window();
    }

    output.enter()?;
    let mut input = ConsoleInputDriver::new();
    input.set_mouse_capture(true)?;
    let mut event_loop = EventLoop::new(input, Duration::from_millis(16));
    let result = event_loop.run(|_, event| {
        let Some(event) = event else {
            app.wm.tick(Instant::now());
            app.drain_closed();
            output.draw(|frame| app.draw(frame))?;
            return Ok(match app.wm.next_deadline() {
                Some(at) => ControlFlow::WaitUntil(at),
                None => ControlFlow::Continue,
            });
        };
        if let Event::Key(key) = event {
            return Ok(app.handle_key(key));
        }
        app.wm.handle_event(&event);
        Ok(ControlFlow::Continue)
    });
    output.exit()?;
    result
}

struct App {
    wm: WindowManager<FloatingWindow>,
    geometry: GeometryDefaults,
    log: Option<LogBuffer>,
    opened: usize,
}

impl App {
    fn new(config: WmConfig, viewport: Viewport, log: Option<LogBuffer>) -> Self {
        Self {
            wm: WindowManager::with_config(viewport, config),
            geometry: GeometryDefaults::cells(),
            log,
            opened: 0,
        }
    }

    fn open_window(&mut self) {
        self.opened += 1;
        let n = self.opened as i32;
        let title = if n % 3 == 0 {
            format!("Window {n} with a title far too long to fit its titlebar")
        } else {
            format!("Window {n}")
        };
        let spec = RectSpec::default()
            .with_position(2 + 6 * (n - 1) % 40, 2 + 3 * (n - 1) % 15)
            .with_size(40, 12);
        let window = FloatingWindow::new(title, spec, &self.geometry);
        if self.wm.register_window(window).is_none() {
            self.opened -= 1;
        }
    }

    fn drain_closed(&mut self) {
        for window in self.wm.take_closed_windows() {
            tracing::info!(title = window.title(), "window closed");
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> ControlFlow {
        if key.kind != KeyEventKind::Press {
            return ControlFlow::Continue;
        }
        match key.code {
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return ControlFlow::Quit;
            }
            KeyCode::Char('n') => self.open_window(),
            KeyCode::Tab if !self.wm.is_empty() => {
                self.wm.raise_window(0);
            }
            KeyCode::Char('x') => {
                if let Some(top) = self.wm.focused_index() {
                    self.wm.unregister_window(top);
                }
            }
            _ => {}
        }
        ControlFlow::Continue
    }

    fn draw(&mut self, frame: &mut Frame<'_>) {
        let screen = frame.area();
        let desktop = Area {
            height: screen.height.saturating_sub(1),
            ..screen
        };
        frame.render_widget(
            Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
            desktop,
        );
        for window in self.wm.windows() {
            draw_window(frame, desktop, window);
        }
        if let Some(tooltip) = self.wm.windows().find_map(|w| w.tooltip()) {
            let width = tooltip.text.chars().count() as i32 + 2;
            let bounds = Bounds::new(tooltip.position.x, tooltip.position.y, width, 1);
            if let Some(area) = clip(bounds, desktop) {
                frame.render_widget(Clear, area);
                frame.render_widget(
                    Paragraph::new(format!(" {} ", tooltip.text))
                        .style(Style::default().fg(Color::Black).bg(Color::Yellow)),
                    area,
                );
            }
        }
        self.draw_status(frame, screen);
    }

    fn draw_status(&self, frame: &mut Frame<'_>, screen: Area) {
        let cursor = self.wm.cursor();
        let mut spans = vec![
            Span::styled(
                format!(" {} {} ", cursor.glyph(), cursor.css_name()),
                Style::default().add_modifier(Modifier::REVERSED),
            ),
            Span::raw(format!(
                " windows: {}  drag: {:?} ",
                self.wm.len(),
                self.wm.drag_kind()
            )),
        ];
        if let Some(line) = self.log.as_ref().and_then(LogBuffer::last_line) {
            spans.push(Span::styled(line, Style::default().fg(Color::DarkGray)));
        }
        let area = Area {
            y: screen.bottom().saturating_sub(1),
            height: 1.min(screen.height),
            ..screen
        };
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn draw_window(frame: &mut Frame<'_>, desktop: Area, window: &FloatingWindow) {
    let Some(area) = clip(window.bounds(), desktop) else {
        return;
    };
    let accent = if window.is_focused() {
        Color::Cyan
    } else {
        Color::Gray
    };
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent)),
        area,
    );

    let layout = window.titlebar();
    if let Some(bar) = clip(layout.title, desktop) {
        let title: String = window.title().chars().take(bar.width.into()).collect();
        frame.render_widget(
            Paragraph::new(title).style(Style::default().fg(Color::Black).bg(accent)),
            bar,
        );
    }
    for (button, bounds) in layout.buttons {
        let Some(cell) = clip(bounds, desktop) else {
            continue;
        };
        let glyph = match button {
            TitlebarButton::Minimize => "_",
            TitlebarButton::Maximize if window.is_maximized() => "▭",
            TitlebarButton::Maximize => "□",
            TitlebarButton::Close => "×",
        };
        let mut style = Style::default().fg(Color::Black).bg(accent);
        if window.pressed_button() == Some(button) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        frame.render_widget(Paragraph::new(format!(" {glyph} ")).style(style), cell);
    }

    if let Some(body) = clip(window.content_bounds(), desktop) {
        let b = window.bounds();
        let text = format!(
            "z-index {}\n{}x{} at {},{}",
            window.z_index(),
            b.width,
            b.height,
            b.left,
            b.top
        );
        frame.render_widget(Paragraph::new(text), body);
    }
}

/// Visible part of `bounds` inside `area`, if any.
fn clip(bounds: Bounds, area: Area) -> Option<Area> {
    let left = bounds.left.max(i32::from(area.x));
    let top = bounds.top.max(i32::from(area.y));
    let right = bounds.right().min(i32::from(area.right()));
    let bottom = bounds.bottom().min(i32::from(area.bottom()));
    if right <= left || bottom <= top {
        return None;
    }
    Some(Area::new(
        u16::try_from(left).ok()?,
        u16::try_from(top).ok()?,
        u16::try_from(right - left).ok()?,
        u16::try_from(bottom - top).ok()?,
    ))
}
