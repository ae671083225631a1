use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key/value attributes for the about and contact sheets.
pub type AttributeMap = HashMap<String, String>;

/// The four content categories a portfolio sheet provides, each bound to a
/// fixed range key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    About,
    Skills,
    Projects,
    Contact,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::About,
        Category::Skills,
        Category::Projects,
        Category::Contact,
    ];

    pub fn range(self) -> &'static str {
        match self {
            Category::About => "About!A:B",
            Category::Skills => "Skills!A:B",
            Category::Projects => "Projects!A:F",
            Category::Contact => "Contact!A:B",
        }
    }
}

/// One skill category row: a label plus its ordered skill names.
/// Category order follows source row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

/// A project record parsed from a header-driven sheet row.
///
/// Known headers land in typed fields; anything else is kept in `extra`
/// under its normalized header key. `id` is a slug derived from the title
/// and is not guaranteed unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub techstack: String,
    pub github: String,
    pub demo: String,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, String>,
}

/// Where a served payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataOrigin {
    Remote,
    Cache,
    Fallback,
}

/// Raw rows for one range read, tagged with their origin. Range reads never
/// fail; a failed remote read surfaces as fallback rows instead.
#[derive(Debug, Clone)]
pub struct ReadOutcome {
    pub rows: Vec<Vec<String>>,
    pub origin: DataOrigin,
}

/// All four parsed categories, fetched as one bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioData {
    pub about: AttributeMap,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub contact: AttributeMap,
}
