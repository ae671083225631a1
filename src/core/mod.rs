pub mod cache;
pub mod facade;
pub mod parse;

pub use crate::domain::model::{
    AttributeMap, Category, DataOrigin, PortfolioData, Project, ReadOutcome, SkillCategory,
};
pub use crate::domain::ports::RangeSource;
pub use crate::utils::error::Result;
