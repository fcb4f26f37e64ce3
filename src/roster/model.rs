//! Domain model: shifts, roles, preferences, and the problem description.

use std::collections::HashMap;

use crate::error::RosterError;

/// One cell of a roster.
///
/// The wire format maps `0 → rest`, `1 → morning`, `2 → night`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Shift {
    Rest = 0,
    Morning = 1,
    Night = 2,
}

impl Shift {
    /// Wire code of this shift.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Anything but a rest day.
    pub fn is_work(self) -> bool {
        !matches!(self, Shift::Rest)
    }
}

/// Coarse role tag carried per staff member.
///
/// Roles act only as keys for headcount rules. No role-specific rule is
/// configured by default, so unknown tags are accepted and preserved
/// verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Chief,
    Leader,
    Staff,
    Assist,
    Other(String),
}

impl Role {
    /// Parses a role tag. Never fails; unrecognised tags land in
    /// [`Role::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Chief" => Role::Chief,
            "Leader" => Role::Leader,
            "Staff" => Role::Staff,
            "Assist" => Role::Assist,
            other => Role::Other(other.to_string()),
        }
    }

    /// The tag this role was parsed from.
    pub fn tag(&self) -> &str {
        match self {
            Role::Chief => "Chief",
            Role::Leader => "Leader",
            Role::Staff => "Staff",
            Role::Assist => "Assist",
            Role::Other(tag) => tag,
        }
    }
}

/// Per-cell assignment restriction stated by a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Preference {
    /// `"NG"`: the day must stay a rest day.
    DayOff,
    /// `"NO_NIGHT"`: rest or morning, never night.
    NoNight,
    /// `"NO_MORNING"`: rest or night, never morning.
    NoMorning,
}

impl Preference {
    /// Parses a preference tag; anything outside the three literal tags is
    /// rejected.
    pub fn from_tag(tag: &str) -> Result<Self, RosterError> {
        match tag {
            "NG" => Ok(Preference::DayOff),
            "NO_NIGHT" => Ok(Preference::NoNight),
            "NO_MORNING" => Ok(Preference::NoMorning),
            other => Err(RosterError::UnknownPreference(other.to_string())),
        }
    }

    /// Whether `shift` satisfies this preference.
    pub fn allows(self, shift: Shift) -> bool {
        match self {
            Preference::DayOff => shift == Shift::Rest,
            Preference::NoNight => shift != Shift::Night,
            Preference::NoMorning => shift != Shift::Morning,
        }
    }
}

/// Immutable description of one rostering instance.
///
/// Validated on construction and read-only afterwards; every worker shares
/// it by reference during a run.
#[derive(Debug, Clone)]
pub struct RosterProblem {
    roles: Vec<Role>,
    days: usize,
    preferences: HashMap<(usize, usize), Preference>,
}

impl RosterProblem {
    /// Validates and builds a problem description.
    ///
    /// The staff count is the length of `roles`. Preference keys must lie
    /// inside the `staff × days` grid. All rejections happen here, before
    /// any optimisation starts.
    pub fn new(
        roles: Vec<Role>,
        preferences: HashMap<(usize, usize), Preference>,
        days: usize,
    ) -> Result<Self, RosterError> {
        if roles.is_empty() {
            return Err(RosterError::ZeroStaff);
        }
        if days == 0 {
            return Err(RosterError::ZeroDays);
        }
        for &(staff, day) in preferences.keys() {
            if staff >= roles.len() || day >= days {
                return Err(RosterError::PreferenceOutOfRange {
                    staff,
                    day,
                    staff_count: roles.len(),
                    days,
                });
            }
        }
        Ok(Self {
            roles,
            days,
            preferences,
        })
    }

    pub fn staff_count(&self) -> usize {
        self.roles.len()
    }

    pub fn days(&self) -> usize {
        self.days
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// The preference stated for one cell, if any.
    pub fn preference(&self, staff: usize, day: usize) -> Option<Preference> {
        self.preferences.get(&(staff, day)).copied()
    }

    /// Iterates over all stated preferences in unspecified order.
    pub fn preferences(&self) -> impl Iterator<Item = ((usize, usize), Preference)> + '_ {
        self.preferences.iter().map(|(&cell, &pref)| (cell, pref))
    }
}
