//! Shear building with an optional damper bank on the top story.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::error::{SolverError, SolverResult};
use td_structure::{Story, Tlcd};

/// Degree-of-freedom numbering: stories first (ground floor = 0), then one
/// DOF per damper column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DofLayout {
    pub stories: usize,
    pub dampers: usize,
}

impl DofLayout {
    pub fn dof_count(&self) -> usize {
        self.stories + self.dampers
    }

    /// Index of the top story DOF, which hosts the dampers.
    pub fn top_story(&self) -> usize {
        self.stories - 1
    }

    pub fn damper_dofs(&self) -> Range<usize> {
        self.stories..self.stories + self.dampers
    }

    pub fn has_damper(&self) -> bool {
        self.dampers > 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    stories: Vec<Story>,
    tlcd: Option<Tlcd>,
}

impl Building {
    /// Build from stories listed ground floor first.
    pub fn new(stories: Vec<Story>, tlcd: Option<Tlcd>) -> SolverResult<Self> {
        if stories.is_empty() {
            return Err(SolverError::configuration("building has no stories"));
        }
        Ok(Self { stories, tlcd })
    }

    /// Build from a 1-based floor map. Floors must be numbered `1..=n` without gaps.
    pub fn from_floors(floors: BTreeMap<usize, Story>, tlcd: Option<Tlcd>) -> SolverResult<Self> {
        for (expected, floor) in (1..).zip(floors.keys()) {
            if *floor != expected {
                return Err(SolverError::configuration(format!(
                    "story numbering must be contiguous from 1, found {floor} where {expected} was expected"
                )));
            }
        }
        Self::new(floors.into_values().collect(), tlcd)
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn tlcd(&self) -> Option<&Tlcd> {
        self.tlcd.as_ref()
    }

    pub fn layout(&self) -> DofLayout {
        DofLayout {
            stories: self.stories.len(),
            dampers: self.tlcd.as_ref().map_or(0, Tlcd::amount),
        }
    }

    /// Damper mass the story at `index` carries for its own frequency and
    /// critical damping (one column's liquid mass on the top story).
    pub fn hosted_mass(&self, index: usize) -> f64 {
        match &self.tlcd {
            Some(tlcd) if index + 1 == self.stories.len() => tlcd.mass(),
            _ => 0.0,
        }
    }

    /// Natural frequency of each story on its own (rad/s).
    pub fn story_frequencies(&self) -> Vec<f64> {
        self.stories
            .iter()
            .enumerate()
            .map(|(i, s)| s.natural_frequency(self.hosted_mass(i)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use td_core::units::m;
    use td_structure::FluidProperties;

    fn tlcd(amount: usize) -> Tlcd {
        Tlcd::new(m(0.1), m(1.0), m(0.2), amount, FluidProperties::default()).unwrap()
    }

    #[test]
    fn layout_counts_damper_columns() {
        let b = Building::new(vec![Story::default(); 3], Some(tlcd(2))).unwrap();
        let layout = b.layout();
        assert_eq!(layout.dof_count(), 5);
        assert_eq!(layout.top_story(), 2);
        assert_eq!(layout.damper_dofs(), 3..5);
        assert!(layout.has_damper());
    }

    #[test]
    fn only_top_story_hosts_damper_mass() {
        let t = tlcd(3);
        let b = Building::new(vec![Story::default(); 2], Some(t.clone())).unwrap();
        assert_eq!(b.hosted_mass(0), 0.0);
        assert_eq!(b.hosted_mass(1), t.mass());
        let freqs = b.story_frequencies();
        assert!(freqs[1] < freqs[0]);
    }

    #[test]
    fn floor_map_must_be_contiguous() {
        let mut floors = BTreeMap::new();
        floors.insert(1, Story::default());
        floors.insert(3, Story::default());
        assert!(matches!(
            Building::from_floors(floors, None),
            Err(SolverError::Configuration { .. })
        ));

        let floors: BTreeMap<usize, Story> = (1..=4).map(|i| (i, Story::default())).collect();
        assert_eq!(Building::from_floors(floors, None).unwrap().layout().dof_count(), 4);
    }

    #[test]
    fn empty_building_is_rejected() {
        assert!(Building::new(vec![], None).is_err());
        assert!(Building::from_floors(BTreeMap::new(), None).is_err());
    }
}
