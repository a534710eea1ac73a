//! Subject graph orchestration.

use chrono::Utc;
use serde_json::Value;
use synth_model::{
    AllergyIntolerance, Condition, Dataset, DiagnosticReport, Encounter, MedicationRequest,
    Observation, Patient, Practitioner, Procedure, Resource, ResourceId, SubjectGraph,
};
use tracing::{debug, info};

use crate::context::GenerationContext;
use crate::demographics::{BuiltinDemographics, DemographicProvider};
use crate::error::{GenerateError, Result};
use crate::factories::{
    ObservationType, create_allergy_intolerance, create_condition, create_diagnostic_report,
    create_encounter, create_medication_request, create_observation, create_patient,
    create_practitioner, create_procedure,
};
use crate::options::GeneratorOptions;

/// Builds cross-referenced resource graphs, one synthetic subject at a time.
///
/// Owns its random source; two generators built with the same seed and
/// anchor produce the same ids, codes and sampled values.
pub struct SubjectGraphGenerator {
    context: GenerationContext,
    observation_types: Vec<ObservationType>,
}

impl SubjectGraphGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self::with_demographics(options, Box::new(BuiltinDemographics))
    }

    pub fn with_demographics(
        options: GeneratorOptions,
        demographics: Box<dyn DemographicProvider>,
    ) -> Self {
        if let Some(seed) = options.seed {
            info!(seed, "seeded generator");
        }
        let anchor = options.anchor.unwrap_or_else(Utc::now);
        Self {
            context: GenerationContext::new(options.seed, anchor, demographics),
            observation_types: options.observation_types,
        }
    }

    pub fn observation_types(&self) -> &[ObservationType] {
        &self.observation_types
    }

    /// Generates one subject graph.
    pub fn generate_subject_graph(&mut self) -> SubjectGraph {
        self.generate_subject().into_graph()
    }

    /// Generates `count` subject graphs in sequence.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidArgument`] when `count` is zero.
    pub fn generate_dataset(&mut self, count: usize) -> Result<Dataset> {
        if count < 1 {
            return Err(GenerateError::InvalidArgument {
                name: "count",
                reason: "must be at least 1".to_string(),
            });
        }
        info!(count, "generating dataset");
        Ok((0..count).map(|_| self.generate_subject_graph()).collect())
    }

    /// Generates a full subject graph and returns only its Patient as JSON.
    pub fn create_patient_value(&mut self) -> Result<Value> {
        let subject = self.generate_subject();
        Ok(Resource::from(subject.patient).to_value()?)
    }

    /// Runs the factories in dependency order so every referenced id exists
    /// before anything points at it.
    fn generate_subject(&mut self) -> GeneratedSubject {
        let ctx = &mut self.context;
        let practitioner = create_practitioner(ctx);
        let patient = create_patient(ctx);
        let encounter = create_encounter(ctx, &patient.id, Some(&practitioner.id));
        let observations: Vec<Observation> = self
            .observation_types
            .iter()
            .map(|observation_type| {
                create_observation(ctx, &patient.id, &encounter.id, observation_type)
            })
            .collect();
        let condition = create_condition(ctx, &patient.id, Some(&encounter.id));
        let procedure = create_procedure(ctx, &patient.id, &encounter.id);
        let medication_request = create_medication_request(
            ctx,
            &patient.id,
            Some(&practitioner.id),
            Some(&encounter.id),
        );
        let observation_ids: Vec<ResourceId> = observations
            .iter()
            .map(|observation| observation.id.clone())
            .collect();
        let diagnostic_report =
            create_diagnostic_report(ctx, &patient.id, &encounter.id, &observation_ids);
        let allergy = create_allergy_intolerance(ctx, &patient.id);

        GeneratedSubject {
            practitioner,
            patient,
            encounter,
            condition,
            procedure,
            medication_request,
            diagnostic_report,
            allergy,
            observations,
        }
    }
}

struct GeneratedSubject {
    practitioner: Practitioner,
    patient: Patient,
    encounter: Encounter,
    condition: Condition,
    procedure: Procedure,
    medication_request: MedicationRequest,
    diagnostic_report: DiagnosticReport,
    allergy: AllergyIntolerance,
    observations: Vec<Observation>,
}

impl GeneratedSubject {
    fn into_graph(self) -> SubjectGraph {
        let patient_id = self.patient.id.clone();
        let mut resources = vec![
            Resource::from(self.practitioner),
            Resource::from(self.patient),
            Resource::from(self.encounter),
            Resource::from(self.condition),
            Resource::from(self.procedure),
            Resource::from(self.medication_request),
            Resource::from(self.diagnostic_report),
            Resource::from(self.allergy),
        ];
        resources.extend(self.observations.into_iter().map(Resource::from));
        debug!(
            patient_id = %patient_id,
            resource_count = resources.len(),
            "generated subject graph"
        );
        SubjectGraph::from_resources(resources)
    }
}
