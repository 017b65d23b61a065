pub mod object_kind;
pub mod object_mode;
pub mod report_level;
pub use object_kind::ObjectKind;
pub use object_mode::ObjectMode;
pub use report_level::ReportLevel;
