//! Planning requests.

use crate::domain::{City, Mode};

/// The user's preferred modes, in the order they were chosen.
///
/// Behaves as an ordered set: adding a mode that is already present keeps
/// its original position.
///
/// # Examples
///
/// ```
/// use route_planner::domain::Mode;
/// use route_planner::planner::PreferredModes;
///
/// let modes = PreferredModes::from_iter([Mode::Train, Mode::Bus, Mode::Train]);
/// assert_eq!(modes.as_slice(), &[Mode::Train, Mode::Bus]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferredModes(Vec<Mode>);

impl PreferredModes {
    /// No preferred modes; every plan will be empty.
    pub fn none() -> Self {
        Self::default()
    }

    /// Bus, Train and Metro, in that order.
    pub fn all() -> Self {
        Self(Mode::ALL.to_vec())
    }

    /// Append a mode unless it is already present.
    pub fn push(&mut self, mode: Mode) {
        if !self.0.contains(&mode) {
            self.0.push(mode);
        }
    }

    pub fn as_slice(&self) -> &[Mode] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Mode> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Mode> for PreferredModes {
    fn from_iter<I: IntoIterator<Item = Mode>>(iter: I) -> Self {
        let mut modes = PreferredModes::none();
        for mode in iter {
            modes.push(mode);
        }
        modes
    }
}

/// One planning request: where from, where to, how, and optionally via where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub origin: City,
    pub destination: City,
    pub preferred_modes: PreferredModes,
    pub intermediate: Option<City>,
}

impl PlanRequest {
    /// Create a direct request.
    pub fn direct(origin: City, destination: City, preferred_modes: PreferredModes) -> Self {
        Self {
            origin,
            destination,
            preferred_modes,
            intermediate: None,
        }
    }

    /// Set the intermediate stop.
    pub fn via(mut self, intermediate: City) -> Self {
        self.intermediate = Some(intermediate);
        self
    }

    /// The request for the opposite direction.
    ///
    /// Uses the same modes and the same intermediate stop.
    pub fn reversed(&self) -> Self {
        Self {
            origin: self.destination.clone(),
            destination: self.origin.clone(),
            preferred_modes: self.preferred_modes.clone(),
            intermediate: self.intermediate.clone(),
        }
    }
}
