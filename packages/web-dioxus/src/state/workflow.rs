//! Two-step generation workflows.
//!
//! Step one asks the backend to generate content. Step two persists the
//! results (titles fan out into one save per title) or refreshes the
//! saved list (social posts and blogs, which the backend persists during
//! generation). Each step reports its own failures; a partially failed
//! title batch reports exactly how many landed.

use portal_client::SaveTitleRequest;
use thiserror::Error;

use super::filters::GeneratorFilters;

/// Where a generation workflow currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenerationPhase {
    #[default]
    Idle,
    Generating,
    Generated,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Please enter a title")]
    MissingTitle,
    #[error("Generation already in progress")]
    Busy,
}

/// Title generation plus the follow-up save fan-out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TitleFlow {
    pub phase: GenerationPhase,
    pub titles: Vec<String>,
}

impl TitleFlow {
    /// Move to Generating. Rejected while a generation is running.
    pub fn start(&mut self) -> Result<(), WorkflowError> {
        if self.phase == GenerationPhase::Generating {
            return Err(WorkflowError::Busy);
        }
        self.phase = GenerationPhase::Generating;
        Ok(())
    }

    pub fn complete(&mut self, titles: Vec<String>) {
        self.titles = titles;
        self.phase = GenerationPhase::Generated;
    }

    /// Generation failed. Titles from an earlier batch stay visible.
    pub fn fail(&mut self) {
        self.phase = GenerationPhase::Idle;
    }

    pub fn is_generating(&self) -> bool {
        self.phase == GenerationPhase::Generating
    }

    /// One save request per generated title, under the current filters.
    pub fn save_requests(&self, filters: &GeneratorFilters) -> Vec<SaveTitleRequest> {
        self.titles
            .iter()
            .map(|title| filters.save_title_request(title))
            .collect()
    }
}

/// Outcome totals for a batch of title saves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaveReport {
    pub saved: usize,
    pub failed: usize,
}

impl SaveReport {
    pub fn from_outcomes<T, E>(outcomes: &[Result<T, E>]) -> Self {
        let saved = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
        Self {
            saved,
            failed: outcomes.len() - saved,
        }
    }

    pub fn total(&self) -> usize {
        self.saved + self.failed
    }

    pub fn all_saved(&self) -> bool {
        self.failed == 0
    }

    pub fn summary(&self) -> String {
        format!("Saved {} of {} titles", self.saved, self.total())
    }
}

/// Single-draft generation for social posts and blog articles. The
/// backend persists these as part of generation, so the second step is
/// only a list refresh.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftFlow<T> {
    pub phase: GenerationPhase,
    pub draft: Option<T>,
}

impl<T> Default for DraftFlow<T> {
    fn default() -> Self {
        Self {
            phase: GenerationPhase::Idle,
            draft: None,
        }
    }
}

impl<T> DraftFlow<T> {
    /// Validate the title and move to Generating.
    pub fn start(&mut self, title: &str) -> Result<(), WorkflowError> {
        if title.trim().is_empty() {
            return Err(WorkflowError::MissingTitle);
        }
        if self.phase == GenerationPhase::Generating {
            return Err(WorkflowError::Busy);
        }
        self.phase = GenerationPhase::Generating;
        Ok(())
    }

    pub fn complete(&mut self, draft: T) {
        self.draft = Some(draft);
        self.phase = GenerationPhase::Generated;
    }

    /// Generation failed. An earlier draft stays visible.
    pub fn fail(&mut self) {
        self.phase = GenerationPhase::Idle;
    }

    pub fn is_generating(&self) -> bool {
        self.phase == GenerationPhase::Generating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_client::SourceType;

    #[test]
    fn test_title_flow_rejects_concurrent_generation() {
        let mut flow = TitleFlow::default();
        assert!(flow.start().is_ok());
        assert_eq!(flow.start(), Err(WorkflowError::Busy));

        flow.complete(vec!["one".to_string()]);
        assert_eq!(flow.phase, GenerationPhase::Generated);
        assert!(flow.start().is_ok());
    }

    #[test]
    fn test_title_flow_keeps_previous_batch_on_failure() {
        let mut flow = TitleFlow::default();
        flow.start().unwrap();
        flow.complete(vec!["one".to_string(), "two".to_string()]);

        flow.start().unwrap();
        flow.fail();

        assert_eq!(flow.phase, GenerationPhase::Idle);
        assert_eq!(flow.titles.len(), 2);
    }

    #[test]
    fn test_save_requests_fan_out_one_per_title() {
        let mut flow = TitleFlow::default();
        flow.start().unwrap();
        flow.complete(vec![
            "Engineering jobs surge".to_string(),
            "Remote work trends".to_string(),
            "Hiring outlook".to_string(),
        ]);

        let filters = GeneratorFilters {
            source_type: SourceType::Jobs,
            sector: Some("Engineering".to_string()),
            ..Default::default()
        };

        let requests = flow.save_requests(&filters);
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].title, "Engineering jobs surge");
        assert_eq!(requests[2].title, "Hiring outlook");
        assert!(requests
            .iter()
            .all(|r| r.filter_sector.as_deref() == Some("Engineering")));
    }

    #[test]
    fn test_draft_flow_requires_title() {
        let mut flow = DraftFlow::<String>::default();
        assert_eq!(flow.start(""), Err(WorkflowError::MissingTitle));
        assert_eq!(flow.start("   "), Err(WorkflowError::MissingTitle));
        assert_eq!(flow.phase, GenerationPhase::Idle);

        assert!(flow.start("Quarterly wrap-up").is_ok());
        flow.complete("generated body".to_string());
        assert_eq!(flow.draft.as_deref(), Some("generated body"));
    }

    #[test]
    fn test_save_report_counts_partial_failures() {
        let outcomes: Vec<Result<u32, String>> =
            vec![Ok(1), Err("boom".to_string()), Ok(2), Ok(3)];
        let report = SaveReport::from_outcomes(&outcomes);

        assert_eq!(report.saved, 3);
        assert_eq!(report.failed, 1);
        assert_eq!(report.total(), 4);
        assert!(!report.all_saved());
        assert_eq!(report.summary(), "Saved 3 of 4 titles");
    }

    #[tokio::test]
    async fn test_batch_outcomes_aggregate_across_futures() {
        let outcomes = futures::future::join_all((0..5).map(|i| async move {
            if i == 2 {
                Err(format!("save {i} failed"))
            } else {
                Ok(i)
            }
        }))
        .await;

        let report = SaveReport::from_outcomes(&outcomes);
        assert_eq!(report.saved, 4);
        assert_eq!(report.failed, 1);
        assert!(!report.all_saved());
    }
}
