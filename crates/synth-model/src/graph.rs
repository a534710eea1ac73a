//! Subject graphs and datasets.

use crate::resource::Resource;
use crate::resources::{Encounter, Observation, Patient};

/// All resources generated for one synthetic subject, in creation order:
/// practitioner, patient, encounter, condition, procedure, medication
/// request, diagnostic report, allergy, then one observation per kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubjectGraph {
    resources: Vec<Resource>,
}

impl SubjectGraph {
    pub fn from_resources(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn into_resources(self) -> Vec<Resource> {
        self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// First Patient in the graph.
    pub fn patient(&self) -> Option<&Patient> {
        self.resources.iter().find_map(|resource| match resource {
            Resource::Patient(patient) => Some(patient),
            _ => None,
        })
    }

    /// First Encounter in the graph.
    pub fn encounter(&self) -> Option<&Encounter> {
        self.resources.iter().find_map(|resource| match resource {
            Resource::Encounter(encounter) => Some(encounter),
            _ => None,
        })
    }

    pub fn observations(&self) -> impl Iterator<Item = &Observation> {
        self.resources.iter().filter_map(|resource| match resource {
            Resource::Observation(observation) => Some(observation),
            _ => None,
        })
    }

    /// Last observation whose code text equals `text`.
    pub fn observation_by_text(&self, text: &str) -> Option<&Observation> {
        self.resources.iter().rev().find_map(|resource| match resource {
            Resource::Observation(observation) if observation.code.text == text => {
                Some(observation)
            }
            _ => None,
        })
    }
}

impl IntoIterator for SubjectGraph {
    type Item = Resource;
    type IntoIter = std::vec::IntoIter<Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.into_iter()
    }
}

impl<'a> IntoIterator for &'a SubjectGraph {
    type Item = &'a Resource;
    type IntoIter = std::slice::Iter<'a, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}

/// Ordered sequence of subject graphs; order is kept through export.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    subjects: Vec<SubjectGraph>,
}

impl Dataset {
    pub fn new(subjects: Vec<SubjectGraph>) -> Self {
        Self { subjects }
    }

    pub fn subjects(&self) -> &[SubjectGraph] {
        &self.subjects
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubjectGraph> {
        self.subjects.iter()
    }

    /// All resources of all subjects, subject order first.
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.subjects.iter().flat_map(SubjectGraph::resources)
    }
}

impl FromIterator<SubjectGraph> for Dataset {
    fn from_iter<I: IntoIterator<Item = SubjectGraph>>(iter: I) -> Self {
        Self {
            subjects: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a SubjectGraph;
    type IntoIter = std::slice::Iter<'a, SubjectGraph>;

    fn into_iter(self) -> Self::IntoIter {
        self.subjects.iter()
    }
}
