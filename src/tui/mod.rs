//! Interactive terminal host.
//!
//! Owns the event loop, the velocity slider, the mass input field, and
//! the animated clock pair. All physics goes through
//! [`crate::relativity`]; this module only validates inputs at the
//! boundary and renders the returned scalars.

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Gauge, Paragraph, Wrap,
        canvas::{Canvas, Circle, Line as CanvasLine},
    },
};

use crate::clock::DilationClocks;
use crate::metrics::{self, DataPoint};
use crate::relativity::input::{RestMass, SLIDER_STEPS, VelocityRatio};
use crate::relativity::special;

/// Poll timeout doubling as the animation tick, 20 fps.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Coarse velocity step for Up/Down, in slider positions (1% of c).
const COARSE_STEP: i32 = 10;

struct App {
    slider_pos: u16,
    mass_text: String,
    mass: RestMass,
    mass_error: Option<String>,
    clocks: DilationClocks,
    log: Vec<DataPoint>,
}

impl App {
    fn new() -> Self {
        Self {
            slider_pos: 0,
            mass_text: "1.0".to_string(),
            mass: RestMass::from_lbs(1.0).expect("default mass is valid"),
            mass_error: None,
            clocks: DilationClocks::new(),
            log: Vec::new(),
        }
    }

    fn velocity(&self) -> VelocityRatio {
        VelocityRatio::from_slider(self.slider_pos)
    }

    fn adjust_velocity(&mut self, delta: i32) {
        let max = i32::from(SLIDER_STEPS) - 1;
        self.slider_pos = (i32::from(self.slider_pos) + delta).clamp(0, max) as u16;
        self.clocks.set_velocity(self.velocity());
        self.log.push(metrics::sample(self.velocity(), self.mass));
    }

    /// Re-validate the mass field. An invalid entry surfaces an inline
    /// message and the calculations keep the last valid mass, so nothing
    /// jumps in the displayed values while the user is mid-edit.
    fn revalidate_mass(&mut self) {
        if self.mass_text.is_empty() {
            self.mass_error = None;
            return;
        }
        match self.mass_text.parse::<f64>() {
            Ok(lbs) => match RestMass::from_lbs(lbs) {
                Ok(mass) => {
                    self.mass = mass;
                    self.mass_error = None;
                }
                Err(err) => self.mass_error = Some(err.to_string()),
            },
            Err(_) => self.mass_error = Some("please enter a valid number".to_string()),
        }
    }
}

pub fn start() -> anyhow::Result<()> {
    // Setup terminal; any failure here is fatal to startup.
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    crossterm::terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to initialize terminal")?;

    let mut app = App::new();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| draw(f, &app))?;

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Right => app.adjust_velocity(1),
                    KeyCode::Left => app.adjust_velocity(-1),
                    KeyCode::Up => app.adjust_velocity(COARSE_STEP),
                    KeyCode::Down => app.adjust_velocity(-COARSE_STEP),
                    KeyCode::Backspace => {
                        app.mass_text.pop();
                        app.revalidate_mass();
                    }
                    KeyCode::Char(c @ ('0'..='9' | '.')) => {
                        app.mass_text.push(c);
                        app.revalidate_mass();
                    }
                    KeyCode::Char('q') => {
                        crossterm::terminal::disable_raw_mode()?;
                        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
                        terminal.show_cursor()?;

                        if !app.log.is_empty() {
                            let path = Path::new("session.csv");
                            metrics::export_csv(&app.log, path)?;
                            println!("session log exported to {}", path.display());
                        }
                        break;
                    }
                    _ => {}
                }
            }
        }

        // The poll timeout is the animation timer: advance the clocks by
        // however much real time actually passed.
        app.clocks.tick(last_tick.elapsed().as_secs_f64());
        last_tick = Instant::now();
    }

    Ok(())
}

fn draw(f: &mut ratatui::Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),  // velocity gauge
                Constraint::Length(3),  // speed readout
                Constraint::Length(11), // clocks
                Constraint::Length(5),  // mass input
                Constraint::Min(10),    // info panel
                Constraint::Length(1),  // help line
            ]
            .as_ref(),
        )
        .split(f.area());

    let velocity = app.velocity();
    let ratio = velocity.ratio();

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Velocity (% of light speed)"),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(f64::from(app.slider_pos) / f64::from(SLIDER_STEPS - 1))
        .label(format!("{:.1}% c", ratio * 100.0));
    f.render_widget(gauge, chunks[0]);

    let speed = velocity.speed_m_per_s();
    let speed_text = format!("{speed:.1} m/s - {}", speed_comparison(speed));
    f.render_widget(
        Paragraph::new(speed_text).block(Block::default().borders(Borders::ALL).title("Speed")),
        chunks[1],
    );

    draw_clocks(f, app, chunks[2]);
    draw_mass_input(f, app, chunks[3]);
    draw_info(f, app, chunks[4]);

    let help = Paragraph::new("←/→ velocity ±0.1%  ↑/↓ ±1%  0-9/. edit mass  ⌫ delete  q quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[5]);
}

fn draw_clocks(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(area);

    let stationary = app.clocks.stationary_seconds();
    let dilated = app.clocks.dilated_seconds();
    let rate = app.clocks.dilation_factor() * 100.0;

    render_clock_face(
        f,
        halves[0],
        format!("Stationary Observer — {stationary:.2} s"),
        stationary,
        Color::White,
    );
    render_clock_face(
        f,
        halves[1],
        format!("Moving Observer — {dilated:.2} s (ticking at {rate:.1}%)"),
        dilated,
        Color::Red,
    );
}

/// A dial with a single hand sweeping once per 12 seconds.
fn render_clock_face(f: &mut ratatui::Frame, area: Rect, title: String, seconds: f64, hand: Color) {
    let angle = DilationClocks::hand_angle_degrees(seconds).to_radians();
    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_bounds([-1.2, 1.2])
        .y_bounds([-1.2, 1.2])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: 1.0,
                color: Color::White,
            });
            // Hand runs clockwise from 12 o'clock.
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: 0.0,
                x2: 0.85 * angle.sin(),
                y2: 0.85 * angle.cos(),
                color: hand,
            });
        });
    f.render_widget(canvas, area);
}

fn draw_mass_input(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(format!("Rest Mass (lbs): {}_", app.mass_text)),
        Line::from(format!("SI Equivalent:   {:.3} kg", app.mass.kg())),
    ];
    if let Some(err) = &app.mass_error {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Object Rest Mass")),
        area,
    );
}

fn draw_info(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let ratio = app.velocity().ratio();
    let gamma = special::gamma(ratio);
    let (time_component, _) = special::spacetime_components(ratio);
    let angle = special::direction_angle(ratio);
    let angle_from_time_axis = (std::f64::consts::FRAC_PI_2 - angle).to_degrees();
    let energies = special::energy_calculations(app.mass.kg(), ratio);

    let info = format!(
        "Time Dilation:\n\
         • A clock moving at this speed ticks at {:.1}% of the normal rate\n\
         • A signal it emits every 1 s arrives every {:.2} s on Earth\n\
         \n\
         Relativistic Effects:\n\
         • Lorentz factor (γ): {:.2}\n\
         • Length contraction: the moving object appears {:.1}% as long\n\
         • Motion direction: {:.1}° from the time axis\n\
         \n\
         Energy (E = γmc²):\n\
         • Rest mass: {:.3} kg ({:.1} lbs)\n\
         • Rest energy (E₀ = mc²): {:.1} GJ\n\
         • Total energy: {:.1} GJ\n\
         • Kinetic energy: {:.1} GJ\n\
         • {}\n\
         \n\
         The time-vs-space circle here is an intuition aid only; actual\n\
         spacetime geometry (Minkowski space) is hyperbolic, not circular.",
        time_component * 100.0,
        1.0 / time_component,
        gamma,
        time_component * 100.0,
        angle_from_time_axis,
        app.mass.kg(),
        app.mass.lbs(),
        energies.rest / 1e9,
        energies.total / 1e9,
        energies.kinetic / 1e9,
        energy_comparison(energies.total),
    );

    f.render_widget(
        Paragraph::new(info)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Relativistic Effects")),
        area,
    );
}

/// Real-world comparison for a speed in m/s.
fn speed_comparison(speed_m_per_s: f64) -> &'static str {
    if speed_m_per_s < 1.0 {
        "slower than a snail"
    } else if speed_m_per_s < 5.0 {
        "about walking speed"
    } else if speed_m_per_s < 15.0 {
        "about running speed"
    } else if speed_m_per_s < 50.0 {
        "faster than Usain Bolt"
    } else if speed_m_per_s < 300.0 {
        "faster than a cheetah"
    } else if speed_m_per_s < 1000.0 {
        "faster than a bullet"
    } else if speed_m_per_s < 8000.0 {
        "faster than the Space Station"
    } else if speed_m_per_s < 30000.0 {
        "faster than any spacecraft"
    } else {
        "approaching light speed"
    }
}

/// Real-world comparison for an energy in joules.
fn energy_comparison(energy_joules: f64) -> String {
    if energy_joules < 1e6 {
        format!("equivalent to {:.1} food Calories", energy_joules / 4184.0)
    } else if energy_joules < 1e9 {
        format!("equivalent to {:.1} kg of TNT", energy_joules / 1e6)
    } else if energy_joules < 1e12 {
        format!("equivalent to {:.1} tons of TNT", energy_joules / 1e9)
    } else if energy_joules < 1e15 {
        format!("equivalent to {:.1} kilotons of TNT", energy_joules / 1e12)
    } else {
        format!("equivalent to {:.1} megatons of TNT", energy_joules / 1e15)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_adjustment_clamps_to_slider_range() {
        let mut app = App::new();
        app.adjust_velocity(-5);
        assert_eq!(app.slider_pos, 0);
        app.adjust_velocity(2000);
        assert_eq!(app.slider_pos, SLIDER_STEPS - 1);
        assert!((app.velocity().ratio() - 0.999).abs() < 1e-12);
    }

    #[test]
    fn velocity_changes_are_logged() {
        let mut app = App::new();
        app.adjust_velocity(600);
        app.adjust_velocity(10);
        assert_eq!(app.log.len(), 2);
        assert!((app.log[0].gamma - 1.25).abs() < 1e-12);
    }

    #[test]
    fn invalid_mass_keeps_last_valid_value() {
        let mut app = App::new();
        let original_kg = app.mass.kg();

        app.mass_text = "0".to_string();
        app.revalidate_mass();
        assert!(app.mass_error.is_some());
        assert_eq!(app.mass.kg(), original_kg);

        app.mass_text = "2.0".to_string();
        app.revalidate_mass();
        assert!(app.mass_error.is_none());
        assert!((app.mass.kg() - 2.0 * special::LBS_TO_KG).abs() < 1e-12);
    }

    #[test]
    fn garbled_mass_text_is_reported() {
        let mut app = App::new();
        app.mass_text = "1.2.3".to_string();
        app.revalidate_mass();
        assert_eq!(
            app.mass_error.as_deref(),
            Some("please enter a valid number")
        );

        // An emptied field clears the message.
        app.mass_text.clear();
        app.revalidate_mass();
        assert!(app.mass_error.is_none());
    }

    #[test]
    fn speed_ladder_matches_known_thresholds() {
        assert_eq!(speed_comparison(0.5), "slower than a snail");
        assert_eq!(speed_comparison(3.0), "about walking speed");
        assert_eq!(speed_comparison(100.0), "faster than a cheetah");
        assert_eq!(speed_comparison(7800.0), "faster than the Space Station");
        assert_eq!(speed_comparison(1e8), "approaching light speed");
    }

    #[test]
    fn energy_ladder_scales_through_tnt_units() {
        assert!(energy_comparison(4184.0).contains("1.0 food Calories"));
        assert!(energy_comparison(5e6).contains("kg of TNT"));
        assert!(energy_comparison(5e10).contains("tons of TNT"));
        assert!(energy_comparison(9e16).contains("megatons of TNT"));
    }
}
