use crate::error::DomainError;
use crate::math::Vec2;
use crate::motion::{MotionModel, MotionParams};
use crate::trace::Trace;

/// Simulated time advanced per animation tick.
pub const TICK_DT: f32 = 0.1;

/// Default number of ticks in one animation run.
pub const FRAME_COUNT: u32 = 1000;

/// Quantities recomputed on every tick and every parameter change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derived {
    pub acceleration: f32,
    pub period: f32,
    pub frequency: f32,
    pub position: Vec2,
}

impl Derived {
    fn at(model: &MotionModel, t: f32) -> Self {
        Derived {
            acceleration: model.centripetal_acceleration(),
            period: model.period(),
            frequency: model.frequency(),
            position: model.position_at(t),
        }
    }
}

impl std::fmt::Display for Derived {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Centripetal acceleration: {:0.2} m/s^2, period: {:0.2} s, frequency: {:0.2} Hz",
            self.acceleration, self.period, self.frequency
        )
    }
}

/// One redraw request. Everything a renderer needs, nothing it doesn't.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    pub trace: &'a [Vec2],
    pub position: Vec2,
    /// From the current position to the center of the path.
    pub accel_vector: (Vec2, Vec2),
    pub title: String,
}

/// Presentation seam. Implementations own all pixels, colors and widgets;
/// the controller only hands them frames.
pub trait Render {
    fn draw(&mut self, frame: &Frame);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating,
}

/// Owns the motion model and its trace, and serializes the two external
/// event sources (tick stream, parameter changes) into state updates.
#[derive(Debug, Clone)]
pub struct InteractionController {
    model: MotionModel,
    trace: Trace,
    derived: Derived,
    dt: f32,
    phase: Phase,
}

impl InteractionController {
    pub fn new(model: MotionModel) -> Self {
        InteractionController {
            model,
            trace: Trace::new(),
            derived: Derived::at(&model, 0.0),
            dt: TICK_DT,
            phase: Phase::Idle,
        }
    }

    pub fn with_dt(model: MotionModel, dt: f32) -> Self {
        let mut c = InteractionController::new(model);
        c.dt = dt;
        c
    }

    pub fn model(&self) -> &MotionModel {
        &self.model
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn derived(&self) -> &Derived {
        &self.derived
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Advances the animation by one tick at index `tick`, growing the
    /// trace by exactly one point.
    pub fn on_tick(&mut self, tick: u32) -> Frame<'_> {
        let t = tick as f32 * self.dt;
        let p = self.model.position_at(t);
        self.trace.push(p);
        self.derived = Derived::at(&self.model, t);
        self.frame(p)
    }

    /// Replaces the model parameters and restarts the trail from empty.
    /// May fire in either phase; the tick stream keeps its own index.
    /// On a domain error no state changes.
    pub fn on_parameter_change(&mut self, params: MotionParams) -> Result<Frame<'_>, DomainError> {
        let model = params.build()?;
        self.model = model;
        self.trace.clear();
        self.derived = Derived::at(&self.model, 0.0);
        Ok(self.frame(self.derived.position))
    }

    /// Drives a full bounded animation: Idle -> Animating, one frame per
    /// tick, back to Idle. Runs may be repeated; the trace carries over
    /// unless a parameter change clears it.
    pub fn run(&mut self, frames: u32, renderer: &mut impl Render) {
        self.phase = Phase::Animating;
        for tick in 0..frames {
            let frame = self.on_tick(tick);
            renderer.draw(&frame);
        }
        self.phase = Phase::Idle;
    }

    fn frame(&self, position: Vec2) -> Frame<'_> {
        Frame {
            trace: self.trace.points(),
            position,
            accel_vector: (position, Vec2::ZERO),
            title: format!("{}\n{}", self.model, self.derived),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use assert_float_eq::assert_float_absolute_eq;
    use more_asserts::assert_le;

    fn controller() -> InteractionController {
        InteractionController::new(MotionParams::default_circular().build().unwrap())
    }

    #[test]
    fn ticks_grow_the_trace_in_temporal_order() {
        let mut c = controller();
        let model = *c.model();

        for tick in 0..25 {
            c.on_tick(tick);
        }

        assert_eq!(c.trace().len(), 25);
        for (i, p) in c.trace().points().iter().enumerate() {
            let expected = model.position_at(i as f32 * TICK_DT);
            assert_relative_eq!(p.x, expected.x, epsilon = 1e-6);
            assert_relative_eq!(p.y, expected.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn parameter_change_resets_the_trail() {
        let mut c = controller();
        for tick in 0..10 {
            c.on_tick(tick);
        }
        assert_eq!(c.trace().len(), 10);

        // copy out of the frame before touching the controller again; the
        // frame holds a borrow of it
        let frame = c
            .on_parameter_change(MotionParams::Circular {
                radius: 0.5,
                velocity: 0.8,
            })
            .unwrap();
        assert!(frame.trace.is_empty());
        let redraw_position = frame.position;

        assert!(c.trace().is_empty());
        assert_eq!(redraw_position, c.model().position_at(0.0));

        // the tick stream keeps advancing its own index
        c.on_tick(10);
        assert_eq!(c.trace().len(), 1);
        assert_eq!(c.trace().last(), Some(c.model().position_at(1.0)));
    }

    #[test]
    fn rejected_parameter_change_leaves_state_alone() {
        let mut c = controller();
        for tick in 0..4 {
            c.on_tick(tick);
        }
        let before = c.clone();

        let err = c.on_parameter_change(MotionParams::Circular {
            radius: 1.0,
            velocity: 0.0,
        });

        assert_eq!(err.unwrap_err(), DomainError::NonPositiveVelocity(0.0));
        assert_eq!(c.trace(), before.trace());
        assert_eq!(c.model(), before.model());
    }

    #[test]
    fn derived_quantities_track_the_model() {
        let mut c = controller();
        let title = c.on_tick(0).title;

        assert_float_absolute_eq!(c.derived().acceleration, 1.0, 1e-6);
        assert_float_absolute_eq!(c.derived().period, 2.0 * std::f32::consts::PI, 1e-5);
        assert_float_absolute_eq!(c.derived().frequency, 0.15915494, 1e-5);
        assert_eq!(c.derived().position, Vec2::new(1.0, 0.0));

        assert!(title.contains("Circular motion"));
        assert!(title.contains("period: 6.28 s"));
    }

    #[test]
    fn accel_vector_points_at_the_origin() {
        let mut c = InteractionController::new(
            MotionParams::default_elliptic().build().unwrap(),
        );
        let frame = c.on_tick(7);
        assert_eq!(frame.accel_vector.0, frame.position);
        assert_eq!(frame.accel_vector.1, Vec2::ZERO);
    }

    #[test]
    fn run_is_bounded_and_restartable() {
        struct Counter {
            frames: u32,
            max_trace: usize,
        }

        impl Render for Counter {
            fn draw(&mut self, frame: &Frame) {
                self.frames += 1;
                self.max_trace = self.max_trace.max(frame.trace.len());
            }
        }

        let mut c = controller();
        let mut counter = Counter {
            frames: 0,
            max_trace: 0,
        };

        assert_eq!(c.phase(), Phase::Idle);
        c.run(100, &mut counter);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(counter.frames, 100);
        assert_eq!(counter.max_trace, 100);
        assert_le!(c.trace().len(), 100);

        // second run without a parameter change keeps accumulating
        c.run(100, &mut counter);
        assert_eq!(counter.frames, 200);
        assert_eq!(c.trace().len(), 200);
    }

    #[test]
    fn custom_tick_step() {
        let model = MotionParams::default_circular().build().unwrap();
        let mut c = InteractionController::with_dt(model, 0.05);
        c.on_tick(4);
        let expected = model.position_at(0.2);
        assert_relative_eq!(c.trace().last().unwrap().x, expected.x, epsilon = 1e-6);
    }
}
