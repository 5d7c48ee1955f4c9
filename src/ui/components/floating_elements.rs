//! Decorative floating background elements
//!
//! Purely cosmetic drifting and rotating shapes painted behind the content.
//! Stateless; everything is derived from the frame clock.

use crate::ui::theme::Theme;
use egui::{self, Color32, Pos2, Rect, Shape, Vec2};

/// One background shape: anchor (as window fractions), size, drift and
/// rotation periods.
struct FloatingShape {
    anchor: Vec2,
    size: f32,
    drift_px: f32,
    drift_period: f64,
    /// Full-turn period in seconds; negative spins the other way, zero
    /// disables rotation (circles ignore it)
    spin_period: f64,
    square: bool,
    alpha: f32,
}

const SHAPES: [FloatingShape; 5] = [
    FloatingShape {
        anchor: Vec2::new(0.12, 0.2),
        size: 32.0,
        drift_px: 20.0,
        drift_period: 3.0,
        spin_period: 8.0,
        square: false,
        alpha: 0.20,
    },
    FloatingShape {
        anchor: Vec2::new(0.85, 0.3),
        size: 24.0,
        drift_px: 30.0,
        drift_period: 4.0,
        spin_period: 0.0,
        square: false,
        alpha: 0.15,
    },
    FloatingShape {
        anchor: Vec2::new(0.15, 0.68),
        size: 16.0,
        drift_px: 15.0,
        drift_period: 5.0,
        spin_period: -12.0,
        square: true,
        alpha: 0.25,
    },
    FloatingShape {
        anchor: Vec2::new(0.9, 0.5),
        size: 12.0,
        drift_px: 20.0,
        drift_period: 3.0,
        spin_period: 0.0,
        square: false,
        alpha: 0.30,
    },
    FloatingShape {
        anchor: Vec2::new(0.8, 0.82),
        size: 8.0,
        drift_px: 30.0,
        drift_period: 4.0,
        spin_period: 0.0,
        square: false,
        alpha: 0.20,
    },
];

/// Decorative floating elements component
pub struct FloatingElements<'a> {
    theme: &'a Theme,
}

impl<'a> FloatingElements<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Paint the shapes over `rect`. Call before the content so they stay
    /// in the background.
    pub fn show(self, ui: &mut egui::Ui, rect: Rect) {
        let painter = ui.painter();
        let t = ui.ctx().input(|i| i.time);

        for (shape, color) in SHAPES.iter().zip(self.theme.floating.iter()) {
            let phase = (t * std::f64::consts::TAU / shape.drift_period).sin() as f32;
            let center = Pos2::new(
                rect.left() + rect.width() * shape.anchor.x,
                rect.top() + rect.height() * shape.anchor.y - phase.abs() * shape.drift_px,
            );

            let fill = color.gamma_multiply(shape.alpha);

            if shape.square {
                let angle = if shape.spin_period != 0.0 {
                    (t * std::f64::consts::TAU / shape.spin_period) as f32
                } else {
                    0.0
                };
                painter.add(rotated_square(center, shape.size, angle, fill));
            } else {
                painter.circle_filled(center, shape.size * 0.5, fill);
            }
        }

        // Loops forever
        ui.ctx().request_repaint();
    }
}

/// Build a square of side `size` rotated by `angle` around `center`
fn rotated_square(center: Pos2, size: f32, angle: f32, fill: Color32) -> Shape {
    let half = size * 0.5;
    let (sin, cos) = angle.sin_cos();
    let corners = [(-half, -half), (half, -half), (half, half), (-half, half)]
        .iter()
        .map(|&(x, y)| Pos2::new(center.x + x * cos - y * sin, center.y + x * sin + y * cos))
        .collect();
    Shape::convex_polygon(corners, fill, egui::Stroke::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_and_accent_counts_match() {
        assert_eq!(SHAPES.len(), Theme::dark().floating.len());
    }

    #[test]
    fn test_rotated_square_has_four_corners() {
        let shape = rotated_square(Pos2::new(0.0, 0.0), 10.0, 0.7, Color32::WHITE);
        match shape {
            Shape::Path(path) => assert_eq!(path.points.len(), 4),
            _ => panic!("expected a path shape"),
        }
    }
}
