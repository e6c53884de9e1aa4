//! Request and response types exposed by the HTTP API.

pub mod complaint;
pub mod incident_report;
pub mod investigation;
pub mod legal_requirement;
pub mod non_compliance;
pub mod reference;
pub mod training_plan;
pub mod validation;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use complaint::*;
pub use incident_report::*;
pub use investigation::*;
pub use legal_requirement::*;
pub use non_compliance::*;
pub use reference::*;
pub use training_plan::*;

/// Body returned by every delete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
