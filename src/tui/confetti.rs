//! Confetti burst shown when the code is cracked.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use rand::Rng;

use crate::model::Color as PegColor;

const GRAVITY: f32 = 0.012;
const DRAG: f32 = 0.985;
const LIFETIME_TICKS: u16 = 90;
const GLYPHS: [&str; 5] = ["▪", "•", "◆", "▴", "✦"];

/// Burst origin, as a fraction of the area
const ORIGIN: (f32, f32) = (0.5, 0.7);

#[derive(Debug, Clone)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    color: Color,
    glyph: &'static str,
}

/// A short-lived particle animation.
///
/// Coordinates are fractions of the render area so the burst survives a
/// terminal resize.
#[derive(Debug, Clone)]
pub struct Confetti {
    particles: Vec<Particle>,
    ticks: u16,
}

impl Confetti {
    pub fn burst<R: Rng>(rng: &mut R, count: usize) -> Self {
        let particles = (0..count)
            .map(|_| {
                let angle = rng.random_range(-std::f32::consts::PI..0.0);
                let speed: f32 = rng.random_range(0.01..0.045);
                let peg = PegColor::CLASSIC[rng.random_range(0..PegColor::CLASSIC.len())];
                let (r, g, b) = peg.rgb();
                Particle {
                    x: ORIGIN.0,
                    y: ORIGIN.1,
                    vx: angle.cos() * speed * 0.6,
                    vy: angle.sin() * speed * 1.6,
                    color: Color::Rgb(r, g, b),
                    glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
                }
            })
            .collect();

        Self {
            particles,
            ticks: 0,
        }
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
        for p in &mut self.particles {
            p.vx *= DRAG;
            p.vy = p.vy * DRAG + GRAVITY;
            p.x += p.vx;
            p.y += p.vy;
        }
        self.particles.retain(|p| (0.0..=1.0).contains(&p.x) && p.y <= 1.0);
    }

    pub fn is_finished(&self) -> bool {
        self.ticks >= LIFETIME_TICKS || self.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl Widget for &Confetti {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for p in &self.particles {
            if p.y < 0.0 {
                continue;
            }
            let x = area.x + ((p.x * f32::from(area.width - 1)) as u16).min(area.width - 1);
            let y = area.y + ((p.y * f32::from(area.height - 1)) as u16).min(area.height - 1);
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(p.glyph).set_fg(p.color);
            }
        }
    }
}
