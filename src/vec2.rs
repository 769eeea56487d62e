#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Vec2 {
    pub(crate) x: f32,
    pub(crate) y: f32,
}

impl Vec2 {
    pub(crate) const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub(crate) fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    pub(crate) fn add(self, o: Vec2) -> Self {
        Self::new(self.x + o.x, self.y + o.y)
    }
    pub(crate) fn sub(self, o: Vec2) -> Self {
        Self::new(self.x - o.x, self.y - o.y)
    }
    pub(crate) fn scale(self, k: f32) -> Self {
        Self::new(self.x * k, self.y * k)
    }
    pub(crate) fn len_sq(self) -> f32 {
        self.x * self.x + self.y * self.y
    }
    pub(crate) fn len(self) -> f32 {
        self.len_sq().sqrt()
    }
    pub(crate) fn dot(self, o: Vec2) -> f32 {
        self.x * o.x + self.y * o.y
    }
    pub(crate) fn norm(self) -> Self {
        let l = self.len();
        if l <= 1e-2 {
            Vec2::ZERO
        } else {
            self.scale(1.0 / l)
        }
    }
    pub(crate) fn rotate(self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }
}
