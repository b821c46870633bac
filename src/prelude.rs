pub use crate::controller::{
    Derived, Frame, InteractionController, Phase, Render, FRAME_COUNT, TICK_DT,
};
pub use crate::error::DomainError;
pub use crate::math::{lerp, linmap, linspace, rotate, Vec2, PI};
pub use crate::motion::{CircularMotion, EllipticMotion, MotionModel, MotionParams};
pub use crate::trace::Trace;
