use std::path::PathBuf;

#[derive(Debug)]
pub struct DatasetResult {
    pub output_dir: PathBuf,
    pub bundle_path: PathBuf,
    pub subjects: Vec<SubjectSummary>,
    pub summary_csv: Option<PathBuf>,
    pub summary_rows: usize,
}

impl DatasetResult {
    pub fn total_accepted(&self) -> usize {
        self.subjects.iter().map(|subject| subject.accepted).sum()
    }

    pub fn total_rejected(&self) -> usize {
        self.subjects.iter().map(|subject| subject.rejected).sum()
    }

    pub fn has_rejections(&self) -> bool {
        self.total_rejected() > 0
    }
}

#[derive(Debug)]
pub struct SubjectSummary {
    pub folder: String,
    pub patient_id: Option<String>,
    pub accepted: usize,
    pub rejected: usize,
}

#[derive(Debug)]
pub struct BundleResult {
    pub output: PathBuf,
    pub resources: usize,
    pub skipped: usize,
}
