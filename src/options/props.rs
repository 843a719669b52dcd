//! Prop placement config: the plain `[name]` / `key=value` text format.
//!
//! ```text
//! # comment
//! [boat]
//! position=-1.6,1.9,-0.3
//! front=0,1,0
//! size=0.4
//! align=true
//! ```
//!
//! Loading never fails. Every rejected line is logged, recorded in
//! [`PropTable::issues`], and skipped.

use std::collections::BTreeMap;
use std::path::Path;

use glam::{Mat4, Quat, Vec3};

use crate::curve::{align_object, facing_or_default};
use crate::error::{LakeviewError, PropLineError};

/// Placement of one named prop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropConfig {
    /// Facing vector, or rotation axis when `align` is off.
    pub front: Vec3,
    /// Up hint for the align frame.
    pub up: Vec3,
    /// World position.
    pub position: Vec3,
    /// Uniform scale.
    pub size: f32,
    /// Rotation about `front` in radians, used when `align` is off.
    pub angle: f32,
    /// Build the model matrix from `front`/`up` instead of `angle`.
    pub align: bool,
}

impl Default for PropConfig {
    fn default() -> Self {
        Self {
            front: Vec3::Z,
            up: Vec3::Z,
            position: Vec3::ZERO,
            size: 1.0,
            angle: 0.0,
            align: false,
        }
    }
}

impl PropConfig {
    /// Model matrix placing the prop in the world.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        let scale = Mat4::from_scale(Vec3::splat(self.size));
        if self.align {
            return align_object(self.position, self.front, self.up) * scale;
        }
        let rotation =
            Quat::from_axis_angle(facing_or_default(self.front), self.angle);
        Mat4::from_translation(self.position)
            * Mat4::from_quat(rotation)
            * scale
    }
}

/// Every `[section]` of a prop config, plus the lines that were rejected.
#[derive(Debug, Default)]
pub struct PropTable {
    props: BTreeMap<String, PropConfig>,
    issues: Vec<LakeviewError>,
}

impl PropTable {
    /// Read and parse a config file. A missing or unreadable file is logged
    /// and yields an empty table.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let table = Self::parse(&text);
                log::info!(
                    "loaded {} prop(s) from {}",
                    table.len(),
                    path.display()
                );
                table
            }
            Err(e) => {
                log::error!("prop config '{}' unreadable: {e}", path.display());
                let mut table = Self::default();
                table.issues.push(LakeviewError::Io(e));
                table
            }
        }
    }

    /// Parse config text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut table = Self::default();
        let mut section: Option<String> = None;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(name) =
                line.strip_prefix('[').and_then(|l| l.strip_suffix(']'))
            {
                let name = name.trim();
                if name.is_empty() {
                    table.reject(line_no, PropLineError::EmptySectionName);
                    section = None;
                    continue;
                }
                if table
                    .props
                    .insert(name.to_owned(), PropConfig::default())
                    .is_some()
                {
                    log::warn!(
                        "prop config line {line_no}: section '{name}' redeclared, \
                         earlier values discarded"
                    );
                }
                section = Some(name.to_owned());
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                table.reject(line_no, PropLineError::MissingDelimiter);
                continue;
            };
            let Some(name) = section.as_deref() else {
                table.reject(line_no, PropLineError::KeyOutsideSection);
                continue;
            };

            let (key, value) = (key.trim(), value.trim());
            let Some(prop) = table.props.get_mut(name) else {
                continue;
            };
            if let Err(kind) = apply_key(prop, key, value) {
                table.reject(line_no, kind);
            }
        }

        table
    }

    fn reject(&mut self, line: usize, kind: PropLineError) {
        let unknown_key = matches!(kind, PropLineError::UnknownKey(_));
        let issue = LakeviewError::PropConfig { line, kind };
        if unknown_key {
            log::warn!("{issue}");
        } else {
            log::error!("{issue}");
        }
        self.issues.push(issue);
    }

    /// Placement for `name`, if the config declared it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropConfig> {
        self.props.get(name)
    }

    /// All sections in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropConfig)> {
        self.props.iter().map(|(name, prop)| (name.as_str(), prop))
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Whether no section was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Lines rejected while parsing (and the read error, if any).
    #[must_use]
    pub fn issues(&self) -> &[LakeviewError] {
        &self.issues
    }
}

fn apply_key(
    prop: &mut PropConfig,
    key: &str,
    value: &str,
) -> Result<(), PropLineError> {
    let bad = || PropLineError::BadValue {
        key: key.to_owned(),
        value: value.to_owned(),
    };
    match key {
        "front" => prop.front = parse_vec3(value).ok_or_else(bad)?,
        "up" => prop.up = parse_vec3(value).ok_or_else(bad)?,
        "position" => prop.position = parse_vec3(value).ok_or_else(bad)?,
        "size" => prop.size = value.parse().map_err(|_| bad())?,
        "angle" => prop.angle = value.parse().map_err(|_| bad())?,
        "align" => prop.align = matches!(value, "true" | "1"),
        _ => return Err(PropLineError::UnknownKey(key.to_owned())),
    }
    Ok(())
}

/// `"x,y,z"` with optional whitespace around each component.
fn parse_vec3(value: &str) -> Option<Vec3> {
    let mut parts = value.split(',').map(|p| p.trim().parse::<f32>());
    let x = parts.next()?.ok()?;
    let y = parts.next()?.ok()?;
    let z = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Vec3::new(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# scene props
[boat]
position=-1.6,1.9,-0.3
front=0,1,0
size=0.4
align=true

[tower]
  position = 0, 0.02, 0
angle=1.5707964
";

    #[test]
    fn parses_sections_and_keys() {
        let table = PropTable::parse(SAMPLE);
        assert_eq!(table.len(), 2);
        assert!(table.issues().is_empty());

        let boat = table.get("boat").copied().unwrap_or_default();
        assert_eq!(boat.position, Vec3::new(-1.6, 1.9, -0.3));
        assert_eq!(boat.front, Vec3::Y);
        assert_eq!(boat.size, 0.4);
        assert!(boat.align);

        let tower = table.get("tower").copied().unwrap_or_default();
        assert_eq!(tower.position, Vec3::new(0.0, 0.02, 0.0));
        assert_eq!(tower.size, 1.0);
        assert!(!tower.align);
    }

    #[test]
    fn bad_lines_are_skipped_not_fatal() {
        let text = "\
size=2
[]
[duck]
position
colour=red
size=big
position=1,2
position=1,2,3
";
        let table = PropTable::parse(text);
        let kinds: Vec<_> = table
            .issues()
            .iter()
            .filter_map(|issue| match issue {
                LakeviewError::PropConfig { line, kind } => {
                    Some((*line, kind.clone()))
                }
                _ => None,
            })
            .collect();

        assert_eq!(kinds.len(), 6);
        assert_eq!(kinds[0], (1, PropLineError::KeyOutsideSection));
        assert_eq!(kinds[1], (2, PropLineError::EmptySectionName));
        assert_eq!(kinds[2], (4, PropLineError::MissingDelimiter));
        assert_eq!(kinds[3], (5, PropLineError::UnknownKey("colour".into())));
        assert!(matches!(kinds[4], (6, PropLineError::BadValue { .. })));
        assert!(matches!(kinds[5], (7, PropLineError::BadValue { .. })));

        // Bad values leave the field at its default; later good lines apply
        let duck = table.get("duck").copied().unwrap_or_default();
        assert_eq!(duck.size, 1.0);
        assert_eq!(duck.position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn keys_after_empty_section_are_outside_any_section() {
        let table = PropTable::parse("[]\nsize=3\n");
        assert!(table.is_empty());
        assert_eq!(table.issues().len(), 2);
    }

    #[test]
    fn redeclared_section_starts_fresh() {
        let table = PropTable::parse("[a]\nsize=2\n[a]\nangle=1\n");
        let a = table.get("a").copied().unwrap_or_default();
        assert_eq!(a.size, 1.0);
        assert_eq!(a.angle, 1.0);
    }

    #[test]
    fn missing_file_gives_empty_table() {
        let table = PropTable::load(Path::new("/nonexistent/lakeview/props.cfg"));
        assert!(table.is_empty());
        assert!(matches!(table.issues(), [LakeviewError::Io(_)]));
    }

    #[test]
    fn model_matrix_translates_rotates_and_scales() {
        let prop = PropConfig {
            position: Vec3::new(1.0, 2.0, 3.0),
            front: Vec3::Z,
            angle: std::f32::consts::FRAC_PI_2,
            size: 2.0,
            ..PropConfig::default()
        };
        let p = prop.model_matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(1.0, 4.0, 3.0)).length() < 1e-5, "got {p}");
    }

    #[test]
    fn aligned_model_matrix_uses_front() {
        let prop = PropConfig {
            front: Vec3::Y,
            align: true,
            ..PropConfig::default()
        };
        let z = prop.model_matrix().transform_vector3(Vec3::Z);
        assert!((z + Vec3::Y).length() < 1e-6);
    }
}
