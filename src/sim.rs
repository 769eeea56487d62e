use crate::body::Blob;
use crate::field::Theme;
use crate::forces::{self, ForceMode};
use crate::input::Command;
use crate::physics::{self, Environment, Stage, GRAVITY_STRENGTH, WIND_STRENGTH};
use crate::vec2::Vec2;
use rand::{rngs::StdRng, SeedableRng};

/// The whole mutable state of the program: body, environment, render modes,
/// the two global phases, and the RNG. Touched only by the main loop.
pub(crate) struct Sim {
    pub(crate) blob: Blob,
    pub(crate) env: Environment,
    pub(crate) stage: Stage,
    pub(crate) force_mode: ForceMode,
    pub(crate) theme: Theme,
    pub(crate) use_color: bool,
    pub(crate) show_glow: bool,
    pub(crate) show_highlights: bool,
    pub(crate) pulse: f32,
    pub(crate) wobble: f32,
    pub(crate) rng: StdRng,
}

impl Sim {
    pub(crate) fn new(stage: Stage, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let blob = Blob::new(Self::stage_center(stage), &mut rng);
        Self {
            blob,
            env: Environment::default(),
            stage,
            force_mode: ForceMode::Normal,
            theme: Theme::Green,
            use_color: true,
            show_glow: true,
            show_highlights: true,
            pulse: 0.0,
            wobble: 0.0,
            rng,
        }
    }

    fn stage_center(stage: Stage) -> Vec2 {
        Vec2::new(stage.width / 2.0, stage.height / 2.0)
    }

    pub(crate) fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::Push(force) => {
                forces::apply_global(&mut self.blob, self.force_mode, force, &mut self.rng)
            }
            Command::Inflate => forces::apply_radial(&mut self.blob, 4.0),
            Command::Deflate => forces::apply_radial(&mut self.blob, -4.0),
            Command::OscillateRadial => {
                forces::apply_radial(&mut self.blob, self.pulse.sin() * 5.0)
            }
            Command::Spin(angular_vel) => forces::apply_rotation(&mut self.blob, angular_vel),
            Command::SpinWobble => {
                forces::apply_rotation(&mut self.blob, (self.wobble * 2.0).sin() * 1.5)
            }
            Command::Squeeze(axis) => forces::apply_squeeze(&mut self.blob, axis),
            Command::Stretch(axis) => forces::apply_stretch(&mut self.blob, axis),
            Command::DragToward(angle) => {
                forces::apply_directional_stretch(&mut self.blob, angle, 2.0)
            }
            Command::Vibrate(intensity) => {
                forces::apply_vibration(&mut self.blob, intensity, &mut self.rng)
            }
            Command::Wave => forces::apply_wave(&mut self.blob, self.wobble),
            Command::Poke => forces::poke_random(&mut self.blob, &mut self.rng),
            Command::MultiPoke => forces::multi_poke(&mut self.blob, &mut self.rng),
            Command::SetMode(mode) => self.force_mode = mode,
            Command::ToggleGravity => {
                self.env.enabled = !self.env.enabled;
                self.env.gravity = if self.env.enabled { GRAVITY_STRENGTH } else { 0.0 };
            }
            Command::WindEast => {
                self.env.wind.x = if self.env.wind.x > 0.0 { 0.0 } else { WIND_STRENGTH };
                self.env.enabled = true;
            }
            Command::WindWest => {
                self.env.wind.x = if self.env.wind.x < 0.0 { 0.0 } else { -WIND_STRENGTH };
                self.env.enabled = true;
            }
            Command::ToggleTurbulence => {
                self.env.turbulence = if self.env.turbulence > 0.0 { 0.0 } else { 0.5 };
                self.env.enabled = true;
            }
            Command::CycleTheme => self.theme = self.theme.next(),
            Command::ToggleColor => self.use_color = !self.use_color,
            Command::ToggleGlow => self.show_glow = !self.show_glow,
            Command::ToggleHighlights => self.show_highlights = !self.show_highlights,
            Command::Reset => {
                let center = Self::stage_center(self.stage);
                self.blob.reset(center, &mut self.rng);
            }
            // termination is the app's call, not the sim's
            Command::Quit => {}
        }
    }

    pub(crate) fn step(&mut self, dt: f32) {
        physics::update(&mut self.blob, &self.env, &self.stage, dt, &mut self.rng);
        self.wobble += dt;
        self.pulse += dt * 3.0;
    }
}
