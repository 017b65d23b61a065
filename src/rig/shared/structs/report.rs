use serde::{Deserialize, Serialize};

use crate::rig::shared::enums::ReportLevel;

/// A message shown to the user after an operator ran.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub level: ReportLevel,
    pub message: String,
}
