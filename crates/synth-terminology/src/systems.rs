//! Terminology system URIs used by the catalog.

pub const ADMINISTRATIVE_GENDER: &str = "http://hl7.org/fhir/administrative-gender";
pub const V3_ACT_CODE: &str = "http://terminology.hl7.org/CodeSystem/v3-ActCode";
pub const ICD_10: &str = "http://hl7.org/fhir/sid/icd-10";
pub const LOINC: &str = "http://loinc.org";
pub const RXNORM: &str = "http://www.nlm.nih.gov/research/umls/rxnorm";
pub const CPT: &str = "http://www.ama-assn.org/go/cpt";
pub const SNOMED_CT: &str = "http://snomed.info/sct";
pub const CDC_RACE_ETHNICITY: &str = "urn:oid:2.16.840.1.113883.6.238";
pub const CONDITION_CLINICAL: &str = "http://terminology.hl7.org/CodeSystem/condition-clinical";
pub const CONDITION_VERIFICATION: &str =
    "http://terminology.hl7.org/CodeSystem/condition-ver-status";
pub const ALLERGY_CLINICAL: &str =
    "http://terminology.hl7.org/CodeSystem/allergyintolerance-clinical";
pub const ALLERGY_VERIFICATION: &str =
    "http://terminology.hl7.org/CodeSystem/allergyintolerance-verification";
pub const OBSERVATION_CATEGORY: &str =
    "http://terminology.hl7.org/CodeSystem/observation-category";
pub const V2_DEGREE: &str = "http://terminology.hl7.org/CodeSystem/v2-0360";

/// Identifier systems (not coded concepts, but fixed per catalog).
pub const MRN_IDENTIFIER: &str = "http://hospital.smarthealth.org/mrn";
pub const NPI_IDENTIFIER: &str = "http://hl7.org/fhir/sid/us-npi";
pub const US_CORE_ETHNICITY_EXTENSION: &str =
    "http://hl7.org/fhir/us/core/StructureDefinition/us-core-ethnicity";
