//! Drives every animated prop independently of the camera mode.

use glam::Vec3;

use super::explosion::{Explosion, ExplosionTracker};
use super::pendulum::PendulumProp;
use super::prop::{CurveProp, ObjectPose};
use crate::options::{MotionOptions, PropTable};

/// Owns the curve props, pendulum props and live explosions.
#[derive(Debug, Clone)]
pub struct ObjectMotionController {
    props: Vec<CurveProp>,
    pendulums: Vec<PendulumProp>,
    explosions: ExplosionTracker,
    explosion_site: Vec3,
    elapsed: f32,
}

impl ObjectMotionController {
    /// Build every prop from options. A prop whose name has a section in
    /// `placements` starts at that section's position and facing.
    #[must_use]
    pub fn from_options(options: &MotionOptions, placements: &PropTable) -> Self {
        let start_pose = |name: &str, position: [f32; 3], forward: [f32; 3]| {
            placements.get(name).map_or(
                ObjectPose {
                    position: Vec3::from_array(position),
                    forward: Vec3::from_array(forward),
                },
                |placed| ObjectPose {
                    position: placed.position,
                    forward: placed.front,
                },
            )
        };

        let props = options
            .props
            .iter()
            .map(|p| CurveProp::new(p, start_pose(&p.name, p.position, p.forward)))
            .collect();
        let pendulums = options
            .pendulums
            .iter()
            .map(|p| {
                PendulumProp::new(p, start_pose(&p.name, p.position, p.forward))
            })
            .collect();

        let explosion = &options.explosion;
        let explosion_site = placements.get(&explosion.site).map_or_else(
            || {
                log::debug!(
                    "no '{}' placement; explosions use the fallback site",
                    explosion.site
                );
                Vec3::from_array(explosion.fallback_site)
            },
            |placed| placed.position,
        );

        Self {
            props,
            pendulums,
            explosions: ExplosionTracker::new(explosion),
            explosion_site,
            elapsed: 0.0,
        }
    }

    /// Advance every animated prop and age explosions. Returns the number
    /// of explosions that finished this frame.
    pub fn update(&mut self, dt: f32) -> usize {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.elapsed += dt;
        for prop in &mut self.props {
            prop.update(dt);
        }
        for pendulum in &mut self.pendulums {
            pendulum.update(dt);
        }
        self.explosions.update(dt)
    }

    /// Pause or resume the named curve prop. `false` if no such prop.
    pub fn toggle_prop(&mut self, name: &str) -> bool {
        let Some(prop) = self.props.iter_mut().find(|p| p.name() == name)
        else {
            log::trace!("no curve prop named '{name}'");
            return false;
        };
        let animate = !prop.is_animated();
        prop.set_animated(animate);
        log::debug!("prop '{name}' animated: {animate}");
        true
    }

    /// Pause every curve prop if any is moving, else resume them all.
    pub fn toggle_all_props(&mut self) -> bool {
        if self.props.is_empty() {
            return false;
        }
        let animate = !self.props.iter().any(CurveProp::is_animated);
        for prop in &mut self.props {
            prop.set_animated(animate);
        }
        true
    }

    /// Disturb or settle the named pendulum. `false` if no such prop.
    pub fn toggle_pendulum(&mut self, name: &str) -> bool {
        let Some(pendulum) =
            self.pendulums.iter_mut().find(|p| p.name() == name)
        else {
            log::trace!("no pendulum named '{name}'");
            return false;
        };
        let disturbed = !pendulum.is_disturbed();
        pendulum.set_disturbed(disturbed);
        true
    }

    /// Settle every pendulum if any is swinging, else disturb them all.
    pub fn toggle_all_pendulums(&mut self) -> bool {
        if self.pendulums.is_empty() {
            return false;
        }
        let disturbed = !self.pendulums.iter().any(PendulumProp::is_disturbed);
        for pendulum in &mut self.pendulums {
            pendulum.set_disturbed(disturbed);
        }
        true
    }

    /// Spawn an explosion at the configured site.
    pub fn trigger_explosion(&mut self) {
        self.explosions.spawn(self.explosion_site, self.elapsed);
        log::debug!("explosion at {}", self.explosion_site);
    }

    /// Pose of the named prop (curve or pendulum).
    #[must_use]
    pub fn pose(&self, name: &str) -> Option<&ObjectPose> {
        self.props
            .iter()
            .find(|p| p.name() == name)
            .map(CurveProp::pose)
            .or_else(|| {
                self.pendulums
                    .iter()
                    .find(|p| p.name() == name)
                    .map(PendulumProp::pose)
            })
    }

    /// Every prop pose, curve props first.
    pub fn poses(&self) -> impl Iterator<Item = (&str, &ObjectPose)> {
        let curve = self.props.iter().map(|p| (p.name(), p.pose()));
        let swing = self.pendulums.iter().map(|p| (p.name(), p.pose()));
        curve.chain(swing)
    }

    /// Curve-following props.
    #[must_use]
    pub fn props(&self) -> &[CurveProp] {
        &self.props
    }

    /// Swinging props.
    #[must_use]
    pub fn pendulums(&self) -> &[PendulumProp] {
        &self.pendulums
    }

    /// Explosions still playing.
    #[must_use]
    pub fn explosions(&self) -> &[Explosion] {
        self.explosions.live()
    }

    /// Where explosions spawn.
    #[must_use]
    pub const fn explosion_site(&self) -> Vec3 {
        self.explosion_site
    }

    /// Every prop back to its start, clocks zeroed, explosions cleared.
    pub fn restart(&mut self) {
        for prop in &mut self.props {
            prop.restart();
        }
        for pendulum in &mut self.pendulums {
            pendulum.restart();
        }
        self.explosions.clear();
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(config: &str) -> ObjectMotionController {
        ObjectMotionController::from_options(
            &MotionOptions::default(),
            &PropTable::parse(config),
        )
    }

    #[test]
    fn placements_seed_start_poses() {
        let objects =
            controller("[corpse]\nposition=-3,-2,0\nfront=1,0,0\n[boat]\nposition=1,1,0\n");
        let corpse = objects.pose("corpse").copied();
        assert_eq!(corpse.map(|p| p.position), Some(Vec3::new(-3.0, -2.0, 0.0)));
        assert_eq!(corpse.map(|p| p.forward), Some(Vec3::X));
        assert_eq!(objects.explosion_site(), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn missing_placements_use_option_defaults() {
        let objects = controller("");
        let duck = objects.pose("duck").copied();
        assert_eq!(duck.map(|p| p.position), Some(Vec3::new(1.6, 1.0, 1.15)));
        assert_eq!(objects.explosion_site(), Vec3::new(-1.6, 1.9, -0.3));
        assert!(objects.pose("nobody").is_none());
    }

    #[test]
    fn paused_prop_does_not_affect_others() {
        let mut objects = controller("");
        assert!(objects.toggle_prop("corpse"));
        let _ = objects.update(0.4);
        let corpse = &objects.props()[1];
        let duck = &objects.props()[0];
        assert_eq!(corpse.elapsed(), 0.0);
        assert!((duck.elapsed() - 0.4).abs() < 1e-6);
        assert!(!objects.toggle_prop("nobody"));
    }

    #[test]
    fn toggle_all_props_pauses_then_resumes() {
        let mut objects = controller("");
        assert!(objects.toggle_all_props());
        assert!(objects.props().iter().all(|p| !p.is_animated()));
        assert!(objects.toggle_all_props());
        assert!(objects.props().iter().all(CurveProp::is_animated));
    }

    #[test]
    fn pendulum_toggles() {
        let mut objects = controller("");
        let rest = objects.pose("lantern").copied();
        assert!(objects.toggle_pendulum("lantern"));
        let _ = objects.update(0.3);
        assert_ne!(objects.pose("lantern").copied(), rest);
        assert!(objects.toggle_all_pendulums());
        assert_eq!(objects.pose("lantern").copied(), rest);
    }

    #[test]
    fn explosions_expire_and_restart_clears() {
        let mut objects = controller("");
        objects.trigger_explosion();
        assert_eq!(objects.explosions().len(), 1);
        assert_eq!(objects.update(1.0), 0);
        assert_eq!(objects.update(1.0), 1);

        objects.trigger_explosion();
        let _ = objects.update(0.5);
        objects.restart();
        assert!(objects.explosions().is_empty());
        assert!(objects.props().iter().all(|p| p.elapsed() == 0.0));
    }

    #[test]
    fn poses_lists_everything() {
        let objects = controller("");
        let names: Vec<_> = objects.poses().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["duck", "corpse", "lantern"]);
    }
}
