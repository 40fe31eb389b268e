pub mod repository;
pub mod collaborator;
pub mod issue;
pub mod report;

pub use repository::*;
pub use collaborator::*;
pub use issue::*;
pub use report::*;
