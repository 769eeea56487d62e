use crate::body::{randf, Blob, Point, NUM_POINTS, RADIUS};
use crate::forces;
use crate::vec2::Vec2;
use rand::rngs::StdRng;

pub(crate) const VISCOSITY: f32 = 0.3;
pub(crate) const FRICTION: f32 = 0.92;
pub(crate) const K_SPRING: f32 = 0.02;
pub(crate) const K_PRESSURE: f32 = 0.15;
pub(crate) const RESTITUTION: f32 = 0.7;
pub(crate) const MAX_VELOCITY: f32 = 6.0;
pub(crate) const CONSTRAINT_ITERATIONS: usize = 2;
pub(crate) const WALL_MARGIN: f32 = 2.0;

pub(crate) const GRAVITY_STRENGTH: f32 = 0.08;
pub(crate) const WIND_STRENGTH: f32 = 0.15;

/// Ambient forces toggled by commands and applied uniformly every step.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Environment {
    pub(crate) gravity: f32,
    pub(crate) wind: Vec2,
    pub(crate) turbulence: f32,
    pub(crate) enabled: bool,
}

/// Fixed stage rectangle, queried from the terminal once at startup.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Stage {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

fn ring_rest_length() -> f32 {
    (RADIUS * 2.5 * std::f32::consts::PI) / NUM_POINTS as f32
}

/// Springs to both ring neighbors and to the anchor, pressure repulsion when
/// a point crowds the anchor, and velocity-proportional viscosity. The anchor
/// itself is pulled toward the ring centroid so it follows the blob.
fn accumulate_internal_forces(blob: &mut Blob) {
    let rest = ring_rest_length();
    let center = blob.center.pos;

    for i in 0..NUM_POINTS {
        for j in [Blob::prev_index(i), Blob::next_index(i)] {
            let delta = blob.points[j].pos.sub(blob.points[i].pos);
            let dist = delta.len();
            if dist > 0.01 {
                let force = delta.scale(K_SPRING * (dist - rest) / dist);
                blob.points[i].apply_force(force);
            }
        }

        let to_center = center.sub(blob.points[i].pos);
        let dist = to_center.len();
        if dist > 0.01 {
            let force = to_center.scale(K_SPRING * 0.15 * (dist - RADIUS) / dist);
            blob.points[i].apply_force(force);
        }
        // keeps the ring from collapsing onto the anchor
        if dist < RADIUS * 0.5 && dist > 0.01 {
            let repulsion = to_center.scale(-K_PRESSURE / dist);
            blob.points[i].apply_force(repulsion);
        }

        // local damping, applied as an acceleration
        if !blob.points[i].pinned {
            let damping = blob.points[i].vel.scale(-VISCOSITY);
            blob.points[i].acc = blob.points[i].acc.add(damping);
        }
    }

    let cohesion = blob.centroid().sub(center).scale(0.1);
    blob.center.apply_force(cohesion);
}

fn apply_environment(blob: &mut Blob, env: &Environment, rng: &mut StdRng) {
    if !env.enabled {
        return;
    }
    let base = Vec2::new(env.wind.x, env.gravity + env.wind.y);
    for p in &mut blob.points {
        let mut force = base;
        if env.turbulence > 0.0 {
            force = force.add(Vec2::new(
                randf(rng) * env.turbulence,
                randf(rng) * env.turbulence,
            ));
        }
        p.apply_force(force);
    }
    blob.center.apply_force(base);
}

/// Semi-implicit step: velocity ceiling, uniform friction, wall bounce.
pub(crate) fn integrate(p: &mut Point, dt: f32, stage: &Stage) {
    if p.pinned {
        return;
    }
    p.vel = p.vel.add(p.acc.scale(dt));
    let mag = p.vel.len();
    if mag > MAX_VELOCITY {
        p.vel = p.vel.scale(MAX_VELOCITY / mag);
    }
    p.vel = p.vel.scale(FRICTION);
    p.pos = p.pos.add(p.vel.scale(dt));
    p.acc = Vec2::ZERO;
    bounce_off_walls(p, stage);
}

/// Inelastic bounce: clamp to the margin and flip-and-attenuate velocity.
fn bounce_off_walls(p: &mut Point, stage: &Stage) {
    if p.pos.x < WALL_MARGIN {
        p.pos.x = WALL_MARGIN;
        p.vel.x *= -RESTITUTION;
    }
    if p.pos.x >= stage.width - WALL_MARGIN {
        p.pos.x = stage.width - WALL_MARGIN;
        p.vel.x *= -RESTITUTION;
    }
    if p.pos.y < WALL_MARGIN {
        p.pos.y = WALL_MARGIN;
        p.vel.y *= -RESTITUTION;
    }
    if p.pos.y >= stage.height - WALL_MARGIN {
        p.pos.y = stage.height - WALL_MARGIN;
        p.vel.y *= -RESTITUTION;
    }
}

/// Positional stabilizer on top of the force springs: at this step size the
/// springs alone are too soft to keep the ring from self-intersecting under
/// hard input. Two corrections per point, applied straight to position.
pub(crate) fn relax_constraints(blob: &mut Blob) {
    let rest = ring_rest_length();
    let target_dist = RADIUS * 1.2;

    for _ in 0..CONSTRAINT_ITERATIONS {
        for i in 0..NUM_POINTS {
            let prev = Blob::prev_index(i);

            let delta = blob.points[prev].pos.sub(blob.points[i].pos);
            let dist = delta.len();
            if dist > 0.01 {
                let diff = (dist - rest) / dist;
                let correction = delta.scale(diff * 0.2);
                if !blob.points[i].pinned {
                    blob.points[i].pos = blob.points[i].pos.add(correction);
                }
                if !blob.points[prev].pinned {
                    blob.points[prev].pos = blob.points[prev].pos.sub(correction);
                }
            }

            // soft tether: only reels in stragglers, never pushes outward
            let to_center = blob.center.pos.sub(blob.points[i].pos);
            let dist = to_center.len();
            if dist > target_dist * 1.5 && dist > 0.01 {
                let diff = (dist - target_dist) / dist;
                let correction = to_center.scale(diff * 0.15);
                if !blob.points[i].pinned {
                    blob.points[i].pos = blob.points[i].pos.add(correction);
                }
            }
        }
    }
}

/// One full physics step: ambient wobble, the elastic network, environment,
/// integration of ring and anchor, then positional relaxation.
pub(crate) fn update(
    blob: &mut Blob,
    env: &Environment,
    stage: &Stage,
    dt: f32,
    rng: &mut StdRng,
) {
    forces::apply_wobble(blob, dt);
    accumulate_internal_forces(blob);
    apply_environment(blob, env, rng);
    for p in &mut blob.points {
        integrate(p, dt, stage);
    }
    integrate(&mut blob.center, dt, stage);
    relax_constraints(blob);
}
