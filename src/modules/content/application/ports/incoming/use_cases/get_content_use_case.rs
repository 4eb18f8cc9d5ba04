use std::sync::Arc;

use crate::content::domain::{PortfolioContent, ProjectEntry, Section};

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

pub trait GetContentUseCase: Send + Sync {
    fn execute(&self) -> Arc<PortfolioContent>;

    fn sections(&self) -> Vec<Section> {
        self.execute().sections.clone()
    }

    fn projects(&self) -> Vec<ProjectEntry> {
        self.execute().projects.clone()
    }
}
