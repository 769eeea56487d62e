use crate::vec2::Vec2;
use rand::{rngs::StdRng, Rng};

pub(crate) const NUM_POINTS: usize = 24;
pub(crate) const RADIUS: f32 = 12.0;
pub(crate) const POINT_MASS: f32 = 0.5;
pub(crate) const IRREGULARITY: f32 = 3.0;

/// One mass point. Pinned points ignore forces and integration; nothing pins
/// a point in practice, but the flag is honored everywhere.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Point {
    pub(crate) pos: Vec2,
    pub(crate) vel: Vec2,
    pub(crate) acc: Vec2,
    pub(crate) mass: f32,
    pub(crate) rest_angle: f32,
    pub(crate) phase: f32,
    pub(crate) pinned: bool,
}

impl Point {
    fn at(pos: Vec2, mass: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            mass,
            rest_angle: 0.0,
            phase: 0.0,
            pinned: false,
        }
    }

    pub(crate) fn apply_force(&mut self, force: Vec2) {
        if !self.pinned {
            self.acc = self.acc.add(force.scale(1.0 / self.mass));
        }
    }
}

/// The anchor plus a circular ring of boundary points. Neighbor adjacency is
/// index arithmetic modulo NUM_POINTS; the ring size never changes.
pub(crate) struct Blob {
    pub(crate) center: Point,
    pub(crate) points: [Point; NUM_POINTS],
}

// Uniform in [-1, 1].
pub(crate) fn randf(rng: &mut StdRng) -> f32 {
    rng.gen::<f32>() * 2.0 - 1.0
}

impl Blob {
    pub(crate) fn new(stage_center: Vec2, rng: &mut StdRng) -> Self {
        let mut blob = Self {
            center: Point::at(stage_center, POINT_MASS),
            points: [Point::at(stage_center, POINT_MASS); NUM_POINTS],
        };
        blob.reset(stage_center, rng);
        blob
    }

    /// Re-randomizes all positions around the anchor and zeroes velocities.
    /// The ring size stays fixed.
    pub(crate) fn reset(&mut self, stage_center: Vec2, rng: &mut StdRng) {
        self.center = Point::at(stage_center, POINT_MASS);
        for (i, p) in self.points.iter_mut().enumerate() {
            let mut angle = i as f32 / NUM_POINTS as f32 * std::f32::consts::TAU;
            angle += randf(rng) * 0.3;
            let r = RADIUS + randf(rng) * IRREGULARITY;
            // x-offset doubled: character cells are roughly twice as tall as wide
            let pos = stage_center.add(Vec2::new(angle.cos() * r * 2.0, angle.sin() * r));
            *p = Point::at(pos, POINT_MASS + randf(rng) * 0.2);
            p.rest_angle = angle;
            p.phase = randf(rng) * std::f32::consts::TAU;
        }
    }

    pub(crate) fn prev_index(i: usize) -> usize {
        (i + NUM_POINTS - 1) % NUM_POINTS
    }

    pub(crate) fn next_index(i: usize) -> usize {
        (i + 1) % NUM_POINTS
    }

    pub(crate) fn centroid(&self) -> Vec2 {
        let mut sum = Vec2::ZERO;
        for p in &self.points {
            sum = sum.add(p.pos);
        }
        sum.scale(1.0 / NUM_POINTS as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn neighbor_indices_wrap() {
        assert_eq!(Blob::prev_index(0), NUM_POINTS - 1);
        assert_eq!(Blob::next_index(NUM_POINTS - 1), 0);
        for i in 1..NUM_POINTS - 1 {
            assert_eq!(Blob::prev_index(i), i - 1);
            assert_eq!(Blob::next_index(i), i + 1);
        }
    }

    #[test]
    fn reset_recenters_and_stills_the_ring() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut blob = Blob::new(Vec2::new(40.0, 20.0), &mut rng);
        for p in &mut blob.points {
            p.vel = Vec2::new(3.0, -3.0);
        }
        blob.reset(Vec2::new(40.0, 20.0), &mut rng);
        assert_eq!(blob.center.pos, Vec2::new(40.0, 20.0));
        for p in &blob.points {
            assert_eq!(p.vel, Vec2::ZERO);
            let off = p.pos.sub(blob.center.pos);
            // within radius + irregularity on each (aspect-corrected) axis
            assert!(off.x.abs() <= (RADIUS + IRREGULARITY) * 2.0 + 1e-3);
            assert!(off.y.abs() <= RADIUS + IRREGULARITY + 1e-3);
            // rest angle records where on the ring the point was born
            assert!(p.rest_angle >= -0.3 && p.rest_angle <= std::f32::consts::TAU + 0.3);
        }
    }

    #[test]
    fn pinned_point_ignores_forces() {
        let mut p = Point::at(Vec2::ZERO, POINT_MASS);
        p.pinned = true;
        p.apply_force(Vec2::new(10.0, 10.0));
        assert_eq!(p.acc, Vec2::ZERO);
    }

    #[test]
    fn force_scales_by_inverse_mass() {
        let mut p = Point::at(Vec2::ZERO, 0.5);
        p.apply_force(Vec2::new(4.0, 0.0));
        assert!((p.acc.x - 8.0).abs() < 1e-6);
        assert_eq!(p.acc.y, 0.0);
    }
}
