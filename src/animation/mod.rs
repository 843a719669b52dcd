//! Prop animation: curve-following props, swinging props and timed
//! explosions, each on its own clock.

mod clock;
mod controller;
mod explosion;
mod pendulum;
mod prop;

pub use clock::AnimationClock;
pub use controller::ObjectMotionController;
pub use explosion::{Explosion, ExplosionTracker};
pub use pendulum::{Axis, PendulumProp};
pub use prop::{CurveProp, ObjectPose};
