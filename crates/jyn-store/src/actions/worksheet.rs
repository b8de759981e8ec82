//! Worksheet lifecycle: create, list, show, resume, delete.

use jyn_core::dashboard::{DashboardFilter, WorksheetSummary, filter_worksheets};
use jyn_core::navigation::{NavigationState, resolve_entry_stage};
use jyn_core::responses::{DeleteResponse, StepResponse, WorksheetListResponse, WorksheetView};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::service::JournalService;
use crate::store::WorksheetStore;

impl<S: WorksheetStore> JournalService<S> {
    /// Create and save a blank worksheet, positioned on the first form step.
    pub fn create_worksheet(&mut self) -> Result<StepResponse, StoreError> {
        let blank = self.store().create_blank()?;
        let stored = self.store_mut().upsert(blank)?;
        info!("Created worksheet {}", stored.id());
        Ok(StepResponse::new(&stored, Some(NavigationState::initial_form(0))))
    }

    pub fn list_worksheets(
        &self,
        filter: DashboardFilter,
        search: Option<&str>,
    ) -> Result<WorksheetListResponse, StoreError> {
        let all = self.store().list_all()?;
        let worksheets: Vec<WorksheetSummary> =
            filter_worksheets(&all, filter, search.unwrap_or_default())
                .into_iter()
                .map(WorksheetSummary::from)
                .collect();
        Ok(WorksheetListResponse {
            filter,
            search: search.map(String::from),
            total: worksheets.len(),
            worksheets,
        })
    }

    pub fn show_worksheet(&self, id: &str) -> Result<WorksheetView, StoreError> {
        let worksheet = self.load(id)?;
        Ok(WorksheetView {
            summary: WorksheetSummary::from(&worksheet),
            resume: resolve_entry_stage(&worksheet),
            worksheet,
        })
    }

    /// Where the worksheet is picked up again.
    pub fn resume_worksheet(&self, id: &str) -> Result<StepResponse, StoreError> {
        let worksheet = self.load(id)?;
        let navigation = resolve_entry_stage(&worksheet);
        debug!("Resuming worksheet {id} at {}", navigation.stage);
        Ok(StepResponse::new(&worksheet, Some(navigation)))
    }

    pub fn delete_worksheet(&mut self, id: &str) -> Result<DeleteResponse, StoreError> {
        let deleted = self.store_mut().remove(id)?;
        if deleted {
            info!("Deleted worksheet {id}");
        }
        Ok(DeleteResponse {
            id: id.to_string(),
            deleted,
        })
    }
}
