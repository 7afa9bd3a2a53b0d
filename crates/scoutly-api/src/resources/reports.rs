use super::{Resource, ResourceClient};
use crate::Error;
use crate::id::EntityId;
use crate::models::{NewReport, Report, ReportDownload};

/// `/reports`. Reports are generated server-side and never edited.
#[derive(Debug, Clone, Copy)]
pub struct Reports;

impl Resource for Reports {
    const PATH: &'static str = "reports";
    const NAME: &'static str = "report";

    type Item = Report;
    type Create = NewReport;
}

impl ResourceClient<Reports> {
    /// Resolve a download link for a completed report.
    ///
    /// The backend answers 409 while generation is still running and 410
    /// once the file has expired.
    pub async fn download(&self, id: &EntityId) -> Result<ReportDownload, Error> {
        let id = id.to_string();
        self.api().get(&[Reports::PATH, id.as_str(), "download"]).await
    }
}
