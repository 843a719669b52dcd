use std::fmt;

/// The camera's active behavior. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Parked at static viewpoint A.
    #[default]
    StaticA,
    /// Parked at static viewpoint B.
    StaticB,
    /// Keyboard/pointer driven flight.
    Free,
    /// Riding the fly-through path.
    CurvePath,
}

impl CameraMode {
    /// Static slot this mode parks at, if it is a static mode.
    #[must_use]
    pub const fn static_slot(self) -> Option<StaticSlot> {
        match self {
            Self::StaticA => Some(StaticSlot::A),
            Self::StaticB => Some(StaticSlot::B),
            Self::Free | Self::CurvePath => None,
        }
    }

    /// Whether this is one of the parked modes.
    #[must_use]
    pub const fn is_static(self) -> bool {
        self.static_slot().is_some()
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StaticA => "static A",
            Self::StaticB => "static B",
            Self::Free => "free",
            Self::CurvePath => "curve path",
        };
        f.write_str(name)
    }
}

/// One of the two configured static viewpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaticSlot {
    /// First viewpoint.
    #[default]
    A,
    /// Second viewpoint.
    B,
}

impl StaticSlot {
    /// The other slot.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Camera mode that parks at this slot.
    #[must_use]
    pub const fn mode(self) -> CameraMode {
        match self {
            Self::A => CameraMode::StaticA,
            Self::B => CameraMode::StaticB,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_and_modes_correspond() {
        for slot in [StaticSlot::A, StaticSlot::B] {
            assert_eq!(slot.mode().static_slot(), Some(slot));
            assert_eq!(slot.other().other(), slot);
        }
        assert_eq!(CameraMode::Free.static_slot(), None);
        assert!(!CameraMode::CurvePath.is_static());
    }
}
