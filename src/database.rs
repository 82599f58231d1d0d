//! In-memory index over near-Earth objects and their close approaches.
//!
//! `NeoDatabase` owns both collections. Building it runs the linking pass:
//! every close approach is matched to its NEO by designation, gaining a
//! `NeoId` back-reference while the NEO records the approach's `ApproachId`.
//! After construction the database is read-only.

use crate::filters::Filter;
use crate::models::{ApproachId, CloseApproach, NearEarthObject, NeoId};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<String, NeoId>,
    by_name: HashMap<String, NeoId>,
}

impl NeoDatabase {
    /// Indexes the NEOs and links every close approach to its NEO.
    ///
    /// A NEO whose designation was already seen is dropped, so the first row
    /// for a designation wins. When two NEOs share a name, the name index
    /// keeps the first one in load order. Approaches without a matching NEO
    /// are kept unlinked.
    pub fn new(neos: Vec<NearEarthObject>, approaches: Vec<CloseApproach>) -> Self {
        let mut kept = Vec::with_capacity(neos.len());
        let mut by_designation = HashMap::with_capacity(neos.len());
        let mut by_name = HashMap::new();

        for mut neo in neos {
            let id = NeoId(kept.len());
            match by_designation.entry(neo.designation.clone()) {
                Entry::Occupied(_) => {
                    warn!(
                        "Ignoring duplicate near-Earth object with designation '{}'",
                        neo.designation
                    );
                    continue;
                }
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
            }
            if let Some(name) = &neo.name {
                by_name.entry(name.clone()).or_insert(id);
            }
            neo.approaches.clear();
            kept.push(neo);
        }

        let mut db = NeoDatabase {
            neos: kept,
            approaches,
            by_designation,
            by_name,
        };
        db.link();
        db
    }

    fn link(&mut self) {
        let mut unlinked = 0usize;
        for (idx, approach) in self.approaches.iter_mut().enumerate() {
            match self.by_designation.get(&approach.designation) {
                Some(&neo_id) => {
                    approach.neo = Some(neo_id);
                    self.neos[neo_id.0].approaches.push(ApproachId(idx));
                }
                None => {
                    approach.neo = None;
                    unlinked += 1;
                    debug!(
                        "Close approach #{} references unknown designation '{}'",
                        idx + 1,
                        approach.designation
                    );
                }
            }
        }

        if unlinked > 0 {
            warn!("{} close approaches have no matching near-Earth object", unlinked);
        }
        info!(
            "Linked {} close approaches to {} near-Earth objects",
            self.approaches.len() - unlinked,
            self.neos.len()
        );
    }

    /// Exact, case-sensitive lookup by primary designation.
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .map(|id| &self.neos[id.0])
    }

    /// Exact, case-sensitive lookup by name. NEOs without a name are never matched.
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name.get(name).map(|id| &self.neos[id.0])
    }

    pub fn neo(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.neos.get(id.0)
    }

    pub fn approach(&self, id: ApproachId) -> Option<&CloseApproach> {
        self.approaches.get(id.0)
    }

    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// The close approaches linked to `neo`.
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = ApproachView<'a>> + 'a {
        neo.approaches
            .iter()
            .filter_map(move |id| self.approaches.get(id.0))
            .map(move |approach| self.view(approach))
    }

    fn view<'a>(&'a self, approach: &'a CloseApproach) -> ApproachView<'a> {
        ApproachView {
            approach,
            neo: approach.neo.and_then(|id| self.neos.get(id.0)),
        }
    }

    /// Lazily yields the close approaches matching every filter, in load order.
    ///
    /// An empty filter slice matches everything. Each call starts over from
    /// the first approach.
    pub fn query<'a, F>(&'a self, filters: &'a [F]) -> impl Iterator<Item = ApproachView<'a>> + 'a
    where
        F: Filter,
    {
        self.approaches
            .iter()
            .map(move |approach| self.view(approach))
            .filter(move |view| filters.iter().all(|f| f.matches(view)))
    }
}

/// A close approach joined with its NEO, if it has one.
#[derive(Debug, Clone, Copy)]
pub struct ApproachView<'a> {
    pub approach: &'a CloseApproach,
    pub neo: Option<&'a NearEarthObject>,
}

impl ApproachView<'_> {
    /// The designation the approach was linked by.
    pub fn designation(&self) -> &str {
        match self.neo {
            Some(neo) => &neo.designation,
            None => &self.approach.designation,
        }
    }

    pub fn fullname(&self) -> String {
        match self.neo {
            Some(neo) => neo.fullname(),
            None => self.approach.designation.clone(),
        }
    }
}

impl fmt::Display for ApproachView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.approach.time_str(),
            self.fullname(),
            self.approach.distance,
            self.approach.velocity
        )
    }
}
