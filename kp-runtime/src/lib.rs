pub mod experiment;
pub mod report;
pub mod settings;

pub use experiment::*;
pub use settings::*;
