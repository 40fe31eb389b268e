pub mod builder;
pub mod writer;
pub mod pipeline;

pub use builder::{build_report, ReportBuilder};
pub use writer::{render_csv, write_csv};
pub use pipeline::ReportPipeline;
