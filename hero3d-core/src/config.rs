/// Scene tunables. Hosts always use `SceneConfig::default()`.
use crate::parallax::DEFAULT_SMOOTHING;
use crate::projection::DEFAULT_FOCAL_LENGTH;

/// An sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB` form, as accepted by canvas fill and stroke styles
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Gold accent shared by particles and wireframes
pub const ACCENT: Rgb = Rgb::new(0xC9, 0xA9, 0x62);

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub focal_length: f64,
    /// Per-frame pointer smoothing factor
    pub smoothing: f64,
    /// Parallax strength per unit depth for wireframes
    pub shape_parallax: f64,
    /// Parallax strength per unit depth for particles
    pub particle_parallax: f64,
    pub accent: Rgb,
    pub edge_alpha: f64,
    pub edge_width: f64,
    /// Multiplier on `alpha * scale` when fading distant particles
    pub particle_fade: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: 150,
            focal_length: DEFAULT_FOCAL_LENGTH,
            smoothing: DEFAULT_SMOOTHING,
            shape_parallax: 0.1,
            particle_parallax: 0.05,
            accent: ACCENT,
            edge_alpha: 0.15,
            edge_width: 1.0,
            particle_fade: 0.8,
        }
    }
}
