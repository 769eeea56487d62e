use crate::body::{randf, Blob, NUM_POINTS};
use crate::vec2::Vec2;
use rand::{rngs::StdRng, Rng};

pub(crate) const WOBBLE_STRENGTH: f32 = 0.3;
const POKE_STRENGTH: f32 = 8.0;

/// Discrete scaling applied to every user-issued global force.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ForceMode {
    Gentle,
    Normal,
    Strong,
    Extreme,
}

impl ForceMode {
    pub(crate) fn multiplier(self) -> f32 {
        match self {
            ForceMode::Gentle => 0.2,
            ForceMode::Normal => 1.0,
            ForceMode::Strong => 2.5,
            ForceMode::Extreme => 5.0,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            ForceMode::Gentle => "GENTLE",
            ForceMode::Normal => "NORMAL",
            ForceMode::Strong => "STRONG",
            ForceMode::Extreme => "EXTREME",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum Axis {
    X,
    Y,
}

/// Mode-scaled push on every boundary point, each with its own small jitter
/// so the shove reads as soft rather than rigid. The anchor takes the force
/// unjittered.
pub(crate) fn apply_global(blob: &mut Blob, mode: ForceMode, force: Vec2, rng: &mut StdRng) {
    let force = force.scale(mode.multiplier());
    for p in &mut blob.points {
        let varied = force.add(Vec2::new(randf(rng) * 0.5, randf(rng) * 0.5));
        p.apply_force(varied);
    }
    blob.center.apply_force(force);
}

/// Inflate (positive strength) or deflate (negative) along the radius.
pub(crate) fn apply_radial(blob: &mut Blob, strength: f32) {
    let center = blob.center.pos;
    for p in &mut blob.points {
        let dir = p.pos.sub(center);
        let dist = dir.len();
        if dist > 0.1 {
            p.apply_force(dir.scale(strength / dist));
        }
    }
}

/// Tangential push around the anchor; sign of angular_vel picks the direction.
pub(crate) fn apply_rotation(blob: &mut Blob, angular_vel: f32) {
    let center = blob.center.pos;
    for p in &mut blob.points {
        let r = p.pos.sub(center);
        let tangent = Vec2::new(-r.y, r.x);
        p.apply_force(tangent.norm().scale(angular_vel));
    }
}

/// Compress one axis while letting the other bulge a little.
pub(crate) fn apply_squeeze(blob: &mut Blob, axis: Axis) {
    let center = blob.center.pos;
    for p in &mut blob.points {
        let off = p.pos.sub(center);
        let force = match axis {
            Axis::X => Vec2::new(-off.x * 0.3, off.y * 0.1),
            Axis::Y => Vec2::new(off.x * 0.1, -off.y * 0.3),
        };
        p.apply_force(force);
    }
}

pub(crate) fn apply_stretch(blob: &mut Blob, axis: Axis) {
    let center = blob.center.pos;
    for p in &mut blob.points {
        let off = p.pos.sub(center);
        let force = match axis {
            Axis::X => Vec2::new(off.x * 0.3, -off.y * 0.1),
            Axis::Y => Vec2::new(-off.x * 0.1, off.y * 0.3),
        };
        p.apply_force(force);
    }
}

/// Pulls points apart along an arbitrary direction, proportional to how far
/// each point already projects onto it.
pub(crate) fn apply_directional_stretch(blob: &mut Blob, angle: f32, strength: f32) {
    let dir = Vec2::new(1.0, 0.0).rotate(angle);
    let center = blob.center.pos;
    for p in &mut blob.points {
        let alignment = p.pos.sub(center).dot(dir);
        p.apply_force(dir.scale(alignment * strength * 0.1));
    }
}

pub(crate) fn apply_vibration(blob: &mut Blob, intensity: f32, rng: &mut StdRng) {
    for p in &mut blob.points {
        let force = Vec2::new(randf(rng) * intensity, randf(rng) * intensity);
        p.apply_force(force);
    }
}

/// Sine ripple along the ring, two full waves around the circumference.
pub(crate) fn apply_wave(blob: &mut Blob, phase: f32) {
    for (i, p) in blob.points.iter_mut().enumerate() {
        let wave = (i as f32 / NUM_POINTS as f32 * std::f32::consts::PI * 4.0 + phase).sin();
        p.apply_force(Vec2::new(wave * 0.5, 0.0));
    }
}

/// Always-on idle jitter: each point's phase runs free and its sine/cosine
/// (at a 1:1.3 frequency ratio) make the surface breathe.
pub(crate) fn apply_wobble(blob: &mut Blob, dt: f32) {
    for p in &mut blob.points {
        p.phase += dt * 2.0;
        let force = Vec2::new(
            p.phase.sin() * WOBBLE_STRENGTH,
            (p.phase * 1.3).cos() * WOBBLE_STRENGTH,
        );
        p.apply_force(force);
    }
}

/// Impulse on one random boundary point, aimed at the anchor.
pub(crate) fn poke_random(blob: &mut Blob, rng: &mut StdRng) {
    let idx = rng.gen_range(0..NUM_POINTS);
    let dir = blob.center.pos.sub(blob.points[idx].pos);
    blob.points[idx].apply_force(dir.norm().scale(POKE_STRENGTH));
}

pub(crate) fn multi_poke(blob: &mut Blob, rng: &mut StdRng) {
    for _ in 0..5 {
        poke_random(blob, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn test_blob(rng: &mut StdRng) -> Blob {
        Blob::new(Vec2::new(40.0, 20.0), rng)
    }

    #[test]
    fn multiplier_table() {
        assert_eq!(ForceMode::Gentle.multiplier(), 0.2);
        assert_eq!(ForceMode::Normal.multiplier(), 1.0);
        assert_eq!(ForceMode::Strong.multiplier(), 2.5);
        assert_eq!(ForceMode::Extreme.multiplier(), 5.0);
    }

    #[test]
    fn extreme_global_push_scales_anchor_acceleration() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut blob = test_blob(&mut rng);
        let force = Vec2::new(4.0, 0.0);
        apply_global(&mut blob, ForceMode::Extreme, force, &mut rng);
        // anchor is unjittered: |a| = |f| * 5 / mass
        let expected = force.len() * 5.0 / blob.center.mass;
        assert!((blob.center.acc.len() - expected).abs() < 1e-3);
        // boundary jitter stays within the +-0.5 per-axis band
        let base = force.scale(5.0);
        for p in &blob.points {
            let accel_force = p.acc.scale(p.mass);
            assert!((accel_force.x - base.x).abs() <= 0.5 + 1e-4);
            assert!((accel_force.y - base.y).abs() <= 0.5 + 1e-4);
        }
    }

    #[test]
    fn radial_force_points_outward_when_inflating() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut blob = test_blob(&mut rng);
        apply_radial(&mut blob, 4.0);
        for p in &blob.points {
            let out = p.pos.sub(blob.center.pos);
            assert!(p.acc.dot(out) > 0.0);
        }
    }

    #[test]
    fn rotation_force_is_tangential() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut blob = test_blob(&mut rng);
        apply_rotation(&mut blob, 0.8);
        for p in &blob.points {
            let r = p.pos.sub(blob.center.pos);
            // tangential force has no radial component
            assert!(p.acc.norm().dot(r.norm()).abs() < 1e-3);
        }
    }

    #[test]
    fn squeeze_x_compresses_x_offsets() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut blob = test_blob(&mut rng);
        apply_squeeze(&mut blob, Axis::X);
        for p in &blob.points {
            let off = p.pos.sub(blob.center.pos);
            if off.x.abs() > 1e-3 {
                assert!(p.acc.x * off.x < 0.0);
            }
        }
    }

    #[test]
    fn poke_pulls_a_point_toward_the_anchor() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut blob = test_blob(&mut rng);
        poke_random(&mut blob, &mut rng);
        let poked = blob
            .points
            .iter()
            .find(|p| p.acc.len_sq() > 0.0)
            .expect("one point must take the impulse");
        let inward = blob.center.pos.sub(poked.pos);
        assert!(poked.acc.dot(inward) > 0.0);
    }
}
