//! Decorative wireframe globe drawn behind the About screen.
//!
//! Rendering is fallible: callers draw [`render_static`] instead when
//! [`render_globe`] errors, so a bad backdrop never takes the frame down.

use std::f64::consts::{FRAC_PI_2, PI};

use color_eyre::eyre::{Result, bail};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{
        Block,
        canvas::{Canvas, Circle, Context, Points},
    },
};

use crate::theme;

const RADIUS: f64 = 1.0;
const MERIDIANS: u8 = 8;
const PARALLELS: [f64; 5] = [-60.0, -30.0, 0.0, 30.0, 60.0];
const STEPS: u8 = 48;

/// Smallest area the globe is legible in.
pub const MIN_WIDTH: u16 = 16;
pub const MIN_HEIGHT: u16 = 8;

/// Front-facing points of the meridians and parallels for a globe rotated
/// by `phase` radians about its vertical axis.
pub fn globe_points(phase: f64) -> Vec<(f64, f64)> {
    let mut points = Vec::new();

    for m in 0..MERIDIANS {
        let lon = phase + f64::from(m) * PI / f64::from(MERIDIANS);
        // each meridian is a full great circle; keep the half facing us
        for s in 0..=STEPS {
            let lat = -FRAC_PI_2 + PI * f64::from(s) / f64::from(STEPS);
            for side in [lon, lon + PI] {
                if side.cos() >= 0.0 {
                    points.push((RADIUS * lat.cos() * side.sin(), RADIUS * lat.sin()));
                }
            }
        }
    }

    for lat_deg in PARALLELS {
        let lat = lat_deg.to_radians();
        let half_width = RADIUS * lat.cos();
        for s in 0..=STEPS {
            let t = f64::from(s) / f64::from(STEPS);
            points.push((-half_width + 2.0 * half_width * t, RADIUS * lat.sin()));
        }
    }

    points
}

/// Draw the globe, or fail when `area` can't hold it.
pub fn render_globe(frame: &mut Frame, area: Rect, phase: f64) -> Result<()> {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        bail!(
            "globe needs {MIN_WIDTH}x{MIN_HEIGHT} cells, got {}x{}",
            area.width,
            area.height
        );
    }
    if !phase.is_finite() {
        bail!("globe phase is not finite: {phase}");
    }

    let points = globe_points(phase);
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.2, 1.2])
        .y_bounds([-1.2, 1.2])
        .paint(|ctx: &mut Context<'_>| {
            ctx.draw(&Points {
                coords: &points,
                color: theme::BORDER_GRAY,
            });
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: RADIUS,
                color: theme::ELECTRIC_PURPLE,
            });
        });

    frame.render_widget(canvas, area);
    Ok(())
}

/// Plain background used when the globe can't be drawn.
pub fn render_static(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BG_DARK)),
        area,
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn points_stay_on_the_disc() {
        for phase in [0.0, 0.7, 2.5] {
            for (x, y) in globe_points(phase) {
                assert!(x.hypot(y) <= RADIUS + 1e-9, "({x}, {y}) off the globe");
            }
        }
    }

    #[test]
    fn phase_rotates_the_meridians() {
        assert_ne!(globe_points(0.0), globe_points(0.3));
    }

    #[test]
    fn small_area_fails_without_drawing() {
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        let mut outcome = None;
        terminal
            .draw(|frame| outcome = Some(render_globe(frame, frame.area(), 0.0)))
            .unwrap();
        assert!(outcome.unwrap().is_err());
    }

    #[test]
    fn roomy_area_draws() {
        let mut terminal = Terminal::new(TestBackend::new(40, 16)).unwrap();
        let mut outcome = None;
        terminal
            .draw(|frame| outcome = Some(render_globe(frame, frame.area(), 1.0)))
            .unwrap();
        assert!(outcome.unwrap().is_ok());
    }
}
