use crate::rig::shared::enums::ReportLevel;
use crate::rig::shared::structs::Report;

pub trait Reporter {
    fn report(&mut self, level: ReportLevel, message: &str);
}

/// Forwards reports to the `log` facade.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, level: ReportLevel, message: &str) {
        match level {
            ReportLevel::Info => log::info!("{}", message),
            ReportLevel::Warning => log::warn!("{}", message),
            ReportLevel::Error => log::error!("{}", message),
        }
    }
}

/// Keeps every report so it can be inspected or serialized later.
impl Reporter for Vec<Report> {
    fn report(&mut self, level: ReportLevel, message: &str) {
        self.push(Report {
            level,
            message: message.to_string(),
        });
    }
}
