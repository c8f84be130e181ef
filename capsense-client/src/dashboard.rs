use capsense_types::DashboardRow;
use tracing::{error, info};

use crate::{client::CapsenseApi, error::CapsenseError};

pub const DASHBOARD_ERROR_MESSAGE: &str = "Failed to load dashboard data. Please try again.";

/// Dashboard view state: the last successfully fetched rows plus the
/// loading/error/visibility flags the view renders from.
#[derive(Debug, Default, Clone)]
pub struct DashboardLoader {
    rows: Vec<DashboardRow>,
    loading: bool,
    error: Option<String>,
    visible: bool,
}

impl DashboardLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the dashboard once.
    ///
    /// On success the rows are replaced wholesale and the dashboard becomes
    /// visible. On failure the previous rows are kept and the fixed error
    /// message is set. Nothing is retried.
    ///
    /// `load` borrows the loader for the whole request, so callers that want
    /// to render the loading state call [`begin_load`](Self::begin_load),
    /// render, fetch, then hand the result to [`finish_load`](Self::finish_load).
    pub async fn load<A>(&mut self, api: &A) -> Result<&[DashboardRow], CapsenseError>
    where
        A: CapsenseApi + ?Sized,
    {
        self.begin_load();
        let result = api.fetch_dashboard().await;
        self.finish_load(result)
    }

    /// Mark a request as in flight and clear the previous error.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of a dashboard request.
    pub fn finish_load(
        &mut self,
        result: Result<Vec<DashboardRow>, CapsenseError>,
    ) -> Result<&[DashboardRow], CapsenseError> {
        self.loading = false;

        match result {
            Ok(rows) => {
                info!("Loaded {} dashboard rows", rows.len());
                self.rows = rows;
                self.error = None;
                self.visible = true;
                Ok(self.rows.as_slice())
            }
            Err(e) => {
                error!("Dashboard access failed: {}", e);
                self.error = Some(DASHBOARD_ERROR_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// Hide the dashboard and dismiss any error. Rows are kept for the next
    /// time it is shown.
    pub fn close(&mut self) {
        self.visible = false;
        self.error = None;
    }

    pub fn rows(&self) -> &[DashboardRow] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
