use capsense_types::{AnalysisResult, AnalyzeRequest, FeedbackVerdict};
use tracing::{error, info};

use crate::{
    client::CapsenseApi,
    error::CapsenseError,
    feedback::{submit_feedback, FeedbackOutcome},
};

/// State of the analysis view: every result received so far, in arrival
/// order, the currently selected one, and the last feedback status.
#[derive(Debug, Default, Clone)]
pub struct AnalysisWorkspace {
    results: Vec<AnalysisResult>,
    selected_index: usize,
    feedback_status: Option<String>,
}

impl AnalysisWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze one customer text and append the result, selecting it.
    ///
    /// Blank input is rejected locally. On any failure the results are left
    /// as they were.
    pub async fn analyze<A>(
        &mut self,
        api: &A,
        text: &str,
    ) -> Result<&AnalysisResult, CapsenseError>
    where
        A: CapsenseApi + ?Sized,
    {
        let text = text.trim();
        if text.is_empty() {
            return Err(CapsenseError::validation("Customer text cannot be empty"));
        }

        let request = AnalyzeRequest {
            text: text.to_string(),
        };

        let result = api.analyze_text(&request).await.map_err(|e| {
            error!("Analysis failed: {}", e);
            e
        })?;

        info!(
            "Analyzed feedback #{} ({})",
            self.results.len() + 1,
            result.classification
        );
        self.results.push(result);
        self.selected_index = self.results.len() - 1;
        Ok(&self.results[self.selected_index])
    }

    /// Select the result at `index`.
    pub fn select(&mut self, index: usize) -> Result<&AnalysisResult, CapsenseError> {
        if index >= self.results.len() {
            return Err(CapsenseError::validation(format!(
                "No analysis result at index {} ({} available)",
                index,
                self.results.len()
            )));
        }
        self.selected_index = index;
        Ok(&self.results[index])
    }

    /// Currently selected result, `None` while nothing has been analyzed
    pub fn current(&self) -> Option<&AnalysisResult> {
        self.results.get(self.selected_index)
    }

    pub async fn approve<A>(&mut self, api: &A) -> &str
    where
        A: CapsenseApi + ?Sized,
    {
        self.submit(api, FeedbackVerdict::Approved).await
    }

    pub async fn reject<A>(&mut self, api: &A) -> &str
    where
        A: CapsenseApi + ?Sized,
    {
        self.submit(api, FeedbackVerdict::Rejected).await
    }

    /// Submit `verdict` for the selected result and store the status line.
    pub async fn submit<A>(&mut self, api: &A, verdict: FeedbackVerdict) -> &str
    where
        A: CapsenseApi + ?Sized,
    {
        let outcome: FeedbackOutcome =
            submit_feedback(api, verdict, self.selected_index, &self.results).await;
        self.feedback_status.insert(outcome.status_text().to_string())
    }

    pub fn results(&self) -> &[AnalysisResult] {
        &self.results
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn feedback_status(&self) -> Option<&str> {
        self.feedback_status.as_deref()
    }
}
