//! Small animation helpers shared by the page sections.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 50.0,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }
}

/// Damped spring pulling `position` toward `target`.
///
/// Integrated with semi-implicit Euler, so stepping with a fixed `dt` gives
/// the same trajectory on every run.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(from: f64, to: f64, config: SpringConfig) -> Self {
        Self {
            config,
            position: from,
            velocity: 0.0,
            target: to,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.position).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
    }

    /// Advances the simulation by `dt` seconds and returns the new position.
    /// Once settled the position snaps onto the target.
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
            return self.position;
        }

        let SpringConfig { stiffness, damping, mass, .. } = self.config;
        let force = -stiffness * (self.position - self.target) - damping * self.velocity;
        self.velocity += force / mass * dt;
        self.position += self.velocity * dt;

        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }
}

/// Whether an element spanning `top..bottom` (viewport coordinates) overlaps
/// the viewport once it has been shrunk by `margin` on each edge.
pub fn in_view(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin && bottom > margin
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 0.016;

    fn run_to_rest(spring: &mut Spring) -> usize {
        for frame in 1..=5000 {
            spring.step(DT);
            if spring.is_settled() {
                return frame;
            }
        }
        panic!("spring never settled");
    }

    #[test]
    fn spring_reaches_target() {
        let mut spring = Spring::new(0.0, 98.0, SpringConfig::default());
        run_to_rest(&mut spring);
        assert_eq!(spring.position(), 98.0);
    }

    #[test]
    fn spring_does_not_overshoot() {
        let mut spring = Spring::new(0.0, 5.4, SpringConfig::default());
        let mut last = spring.position();
        while !spring.is_settled() {
            let next = spring.step(DT);
            assert!(next >= last, "position went backwards: {last} -> {next}");
            assert!(next <= 5.4);
            last = next;
        }
    }

    #[test]
    fn spring_counts_down() {
        let mut spring = Spring::new(15.0, 0.0, SpringConfig::default());
        spring.step(DT);
        assert!(spring.position() < 15.0);
        run_to_rest(&mut spring);
        assert_eq!(spring.position(), 0.0);
    }

    #[test]
    fn settled_spring_stays_put() {
        let mut spring = Spring::new(3.0, 3.0, SpringConfig::default());
        assert!(spring.is_settled());
        assert_eq!(spring.step(DT), 3.0);
        assert_eq!(spring.target(), 3.0);
    }

    #[test]
    fn in_view_respects_margin() {
        // 800px viewport, 50px margin leaves 50..750 as the live band.
        assert!(in_view(700.0, 900.0, 800.0, 50.0));
        assert!(!in_view(760.0, 900.0, 800.0, 50.0));
        assert!(!in_view(-200.0, 40.0, 800.0, 50.0));
        assert!(in_view(-200.0, 60.0, 800.0, 50.0));
    }
}
