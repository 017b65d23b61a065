use serde::{Deserialize, Serialize};

#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportLevel {
    Info,
    Warning,
    Error,
}

impl ToString for ReportLevel {
    fn to_string(&self) -> String {
        match self {
            ReportLevel::Info => "INFO".to_string(),
            ReportLevel::Warning => "WARNING".to_string(),
            ReportLevel::Error => "ERROR".to_string(),
        }
    }
}
