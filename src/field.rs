use crate::body::{Blob, RADIUS};
use crossterm::style::Color;

pub(crate) const METABALL_THRESHOLD: f32 = 1.8;
const GLOW_BAND: f32 = 3.5;
const HIGHLIGHT_CUTOFF: f32 = 0.8;

/// Glyphs of increasing visual weight, indexed by density.
const GLYPH_RAMP: [char; 11] = [' ', '.', '\'', ':', '~', '=', '+', '*', '#', '%', '@'];

/// Inverse-square contributions from the anchor and every ring point. The
/// vertical distance is doubled to compensate the tall character cell;
/// squared distances are floored to dodge the singularity at a point.
fn metaball_sum(blob: &Blob, x: f32, y: f32) -> f32 {
    let mut density = 0.0;
    let dx = x - blob.center.pos.x;
    let dy = (y - blob.center.pos.y) * 2.0;
    let dist_sq = (dx * dx + dy * dy).max(1.0);
    density += 30.0 / dist_sq;
    for p in &blob.points {
        let dx = x - p.pos.x;
        let dy = (y - p.pos.y) * 2.0;
        let dist_sq = (dx * dx + dy * dy).max(0.1);
        density += 22.0 / dist_sq;
    }
    density
}

/// Field sample with the shimmer modulation layered on.
pub(crate) fn density_at(blob: &Blob, pulse: f32, x: f32, y: f32) -> f32 {
    metaball_sum(blob, x, y) * (1.0 + (pulse + x * 0.1).sin() * 0.15)
}

/// Specular term: inverse-square falloff from a fixed light offset up-left of
/// the anchor.
pub(crate) fn highlight_at(blob: &Blob, x: f32, y: f32) -> f32 {
    let light_x = blob.center.pos.x - RADIUS * 0.7;
    let light_y = blob.center.pos.y - RADIUS * 0.7;
    let dx = x - light_x;
    let dy = (y - light_y) * 2.0;
    1.0 / (1.0 + (dx * dx + dy * dy) * 0.008)
}

pub(crate) fn glyph_for(density: f32) -> char {
    let idx = (density * 0.55) as usize;
    GLYPH_RAMP[idx.min(GLYPH_RAMP.len() - 1)]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Theme {
    Green,
    Purple,
    Cyan,
    Rainbow,
}

impl Theme {
    pub(crate) fn next(self) -> Theme {
        match self {
            Theme::Green => Theme::Purple,
            Theme::Purple => Theme::Cyan,
            Theme::Cyan => Theme::Rainbow,
            Theme::Rainbow => Theme::Green,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Theme::Green => "GREEN",
            Theme::Purple => "PURPLE",
            Theme::Cyan => "CYAN",
            Theme::Rainbow => "RAINBOW",
        }
    }
}

struct Palette {
    // density bands from densest down, each (floor, color, bold)
    bands: [(f32, Color, bool); 4],
    base: Color,
    glow: Color,
}

const GREEN_PALETTE: Palette = Palette {
    bands: [
        (8.0, Color::DarkGreen, true),
        (6.0, Color::DarkGreen, false),
        (4.0, Color::Green, false),
        (2.5, Color::DarkCyan, false),
    ],
    base: Color::DarkGreen,
    glow: Color::Green,
};

const PURPLE_PALETTE: Palette = Palette {
    bands: [
        (8.0, Color::DarkMagenta, true),
        (6.0, Color::DarkMagenta, false),
        (4.0, Color::Magenta, false),
        (2.5, Color::Blue, false),
    ],
    base: Color::DarkMagenta,
    glow: Color::Magenta,
};

const CYAN_PALETTE: Palette = Palette {
    bands: [
        (8.0, Color::DarkCyan, true),
        (6.0, Color::DarkCyan, false),
        (4.0, Color::Cyan, false),
        (2.5, Color::DarkBlue, false),
    ],
    base: Color::DarkCyan,
    glow: Color::Cyan,
};

const RAINBOW_CYCLE: [Color; 6] = [
    Color::DarkRed,
    Color::DarkYellow,
    Color::DarkGreen,
    Color::DarkCyan,
    Color::DarkBlue,
    Color::DarkMagenta,
];

fn palette_for(theme: Theme) -> Option<&'static Palette> {
    match theme {
        Theme::Green => Some(&GREEN_PALETTE),
        Theme::Purple => Some(&PURPLE_PALETTE),
        Theme::Cyan => Some(&CYAN_PALETTE),
        Theme::Rainbow => None,
    }
}

/// Picks the foreground for a rendered cell. Highlight wins over everything,
/// then the edge-glow band, then the theme's density bands (or the rotating
/// rainbow hue).
pub(crate) fn shade(
    theme: Theme,
    density: f32,
    highlight: f32,
    pulse: f32,
    show_glow: bool,
    show_highlights: bool,
) -> (Color, bool) {
    if show_highlights && highlight > HIGHLIGHT_CUTOFF {
        return (Color::White, true);
    }
    let palette = palette_for(theme);
    if let Some(palette) = palette {
        if show_glow && density < GLOW_BAND {
            return (palette.glow, false);
        }
        for &(floor, color, bold) in &palette.bands {
            if density > floor {
                return (color, bold);
            }
        }
        (palette.base, false)
    } else {
        let hue = ((pulse * 50.0 + density * 20.0) as i64).rem_euclid(6) as usize;
        (RAINBOW_CYCLE[hue], false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec2::Vec2;
    use rand::{rngs::StdRng, SeedableRng};

    fn test_blob() -> Blob {
        let mut rng = StdRng::seed_from_u64(21);
        Blob::new(Vec2::new(40.0, 20.0), &mut rng)
    }

    #[test]
    fn density_at_anchor_clears_threshold() {
        let blob = test_blob();
        let c = blob.center.pos;
        let d = metaball_sum(&blob, c.x, c.y);
        assert!(d > METABALL_THRESHOLD);
    }

    #[test]
    fn metaball_sum_is_reflection_symmetric() {
        let a = test_blob();
        let mut b = test_blob();
        // mirror configuration b about the x = 40 axis
        b.center.pos.x = 80.0 - a.center.pos.x;
        for (pb, pa) in b.points.iter_mut().zip(a.points.iter()) {
            pb.pos = Vec2::new(80.0 - pa.pos.x, pa.pos.y);
        }
        let sample = Vec2::new(47.5, 22.0);
        let mirrored = Vec2::new(80.0 - sample.x, sample.y);
        let da = metaball_sum(&a, sample.x, sample.y);
        let db = metaball_sum(&b, mirrored.x, mirrored.y);
        assert!((da - db).abs() < 1e-3);
    }

    #[test]
    fn glyph_ramp_is_clamped() {
        assert_eq!(glyph_for(0.0), ' ');
        assert_eq!(glyph_for(1000.0), '@');
        // threshold-level density lands on a visible sparse glyph
        assert_eq!(glyph_for(METABALL_THRESHOLD), ' ');
        assert_eq!(glyph_for(2.0), '.');
    }

    #[test]
    fn shade_prefers_highlight_then_glow_then_bands() {
        let (c, bold) = shade(Theme::Green, 9.0, 0.9, 0.0, true, true);
        assert_eq!((c, bold), (Color::White, true));

        let (c, _) = shade(Theme::Green, 2.0, 0.0, 0.0, true, true);
        assert_eq!(c, Color::Green);

        let (c, bold) = shade(Theme::Green, 9.0, 0.0, 0.0, false, true);
        assert_eq!((c, bold), (Color::DarkGreen, true));

        let (c, _) = shade(Theme::Purple, 5.0, 0.0, 0.0, false, false);
        assert_eq!(c, Color::Magenta);
    }

    #[test]
    fn rainbow_cycles_through_its_palette() {
        for step in 0..12 {
            let pulse = step as f32 * 0.1;
            let (c, bold) = shade(Theme::Rainbow, 5.0, 0.0, pulse, false, false);
            assert!(RAINBOW_CYCLE.contains(&c));
            assert!(!bold);
        }
    }

    #[test]
    fn theme_cycle_visits_all_four() {
        let mut t = Theme::Green;
        let mut seen = vec![t];
        for _ in 0..3 {
            t = t.next();
            seen.push(t);
        }
        assert_eq!(t.next(), Theme::Green);
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }
}
