pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::sheets::SheetsClient;
pub use config::SheetsConfig;
pub use core::facade::Portfolio;
pub use domain::model::{
    AttributeMap, Category, DataOrigin, PortfolioData, Project, SkillCategory,
};
pub use domain::ports::RangeSource;
pub use utils::error::{PortfolioError, Result};
