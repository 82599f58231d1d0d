use crate::helpers::datetime_to_str;
use chrono::NaiveDateTime;
use std::fmt;

/// Sentinel stored in [`NearEarthObject::diameter`] when the source gave no usable diameter.
pub const DIAMETER_UNKNOWN: f64 = f64::NAN;

/// Position of a [`NearEarthObject`] in the database's NEO collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NeoId(pub(crate) usize);

/// Position of a [`CloseApproach`] in the database's close-approach collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApproachId(pub(crate) usize);

#[derive(Debug, Clone)]
pub struct NearEarthObject {
    pub designation: String,
    pub name: Option<String>,
    /// Kilometers, or [`DIAMETER_UNKNOWN`].
    pub diameter: f64,
    pub hazardous: bool,
    pub(crate) approaches: Vec<ApproachId>,
}

impl NearEarthObject {
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: f64,
        hazardous: bool,
    ) -> Self {
        NearEarthObject {
            designation: designation.into(),
            name: name.filter(|n| !n.is_empty()),
            diameter,
            hazardous,
            approaches: Vec::new(),
        }
    }

    /// Designation followed by the name in parentheses, when there is one.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    /// The diameter, or `None` for the unknown sentinel.
    pub fn diameter_km(&self) -> Option<f64> {
        if self.diameter.is_nan() {
            None
        } else {
            Some(self.diameter)
        }
    }

    /// Close approaches linked to this object, in close-approach load order.
    pub fn approaches(&self) -> &[ApproachId] {
        &self.approaches
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEO {} has ", self.fullname())?;
        match self.diameter_km() {
            Some(d) => write!(f, "a diameter of {d:.3} km")?,
            None => write!(f, "an unknown diameter")?,
        }
        let qualifier = if self.hazardous { "" } else { "not " };
        write!(f, " and is {qualifier}potentially hazardous.")
    }
}

#[derive(Debug, Clone)]
pub struct CloseApproach {
    /// Link key used to find the owning NEO while the database is built.
    pub(crate) designation: String,
    pub time: NaiveDateTime,
    /// Astronomical units.
    pub distance: f64,
    /// Kilometers per second.
    pub velocity: f64,
    pub(crate) neo: Option<NeoId>,
}

impl CloseApproach {
    pub fn new(
        designation: impl Into<String>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> Self {
        CloseApproach {
            designation: designation.into(),
            time,
            distance,
            velocity,
            neo: None,
        }
    }

    /// The owning NEO, once linked. `None` when no NEO carries this approach's designation.
    pub fn neo(&self) -> Option<NeoId> {
        self.neo
    }

    pub fn time_str(&self) -> String {
        datetime_to_str(&self.time)
    }
}
