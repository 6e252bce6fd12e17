//! Decorative starfield behind the page.
//!
//! A fresh set of dots is scattered on every mount; nothing is seeded or
//! kept between renders.

use crate::error::SiteError;
use crate::state::Theme;

pub const PARTICLE_COUNT: usize = 50;

/// Source of uniform values in `[0, 1)`.
pub trait Entropy {
    fn next_unit(&mut self) -> Result<f64, SiteError>;
}

/// Entropy from the OS, or `crypto.getRandomValues` in the browser.
pub struct OsEntropy;

impl Entropy for OsEntropy {
    fn next_unit(&mut self) -> Result<f64, SiteError> {
        let mut buf = [0u8; 4];
        getrandom::getrandom(&mut buf)?;
        Ok(u32::from_le_bytes(buf) as f64 / (u32::MAX as f64 + 1.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the viewport.
    pub cx: f64,
    /// Vertical position, percent of the viewport.
    pub cy: f64,
    pub opacity: f64,
    pub blink_secs: f64,
    pub delay_secs: f64,
}

pub fn scatter<E: Entropy>(count: usize, entropy: &mut E) -> Result<Vec<Particle>, SiteError> {
    (0..count)
        .map(|_| -> Result<Particle, SiteError> {
            Ok(Particle {
                cx: entropy.next_unit()? * 100.0,
                cy: entropy.next_unit()? * 100.0,
                opacity: entropy.next_unit()?,
                blink_secs: entropy.next_unit()? * 5.0 + 2.0,
                delay_secs: entropy.next_unit()? * 5.0,
            })
        })
        .collect()
}

/// SVG for the glow and dots, coloured for `theme`.
pub fn svg_markup(particles: &[Particle], theme: Theme) -> String {
    let dots = particles
        .iter()
        .map(|p| {
            format!(
                r#"<circle cx="{:.3}%" cy="{:.3}%" r="1" fill="{}" opacity="{:.3}"><animate attributeName="opacity" values="0;1;0" dur="{:.3}s" repeatCount="indefinite" begin="{:.3}s"/></circle>"#,
                p.cx,
                p.cy,
                theme.dot_color(),
                p.opacity,
                p.blink_secs,
                p.delay_secs,
            )
        })
        .collect::<String>();
    format!(
        r##"<svg class="absolute w-full h-full"><defs><radialGradient id="grad" cx="50%" cy="50%" r="50%" fx="50%" fy="50%"><stop offset="0%" stop-color="{glow}" stop-opacity="0.3"/><stop offset="100%" stop-color="{fade}" stop-opacity="0"/></radialGradient></defs><rect width="100%" height="100%" fill="url(#grad)"><animate attributeName="opacity" values="0.3;0.7;0.3" dur="5s" repeatCount="indefinite"/></rect>{dots}</svg>"##,
        glow = theme.glow_color(),
        fade = theme.fade_color(),
    )
}
