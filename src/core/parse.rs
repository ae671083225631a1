//! Row-to-domain parsing. Every parser tolerates malformed input by
//! skipping bad rows or returning an empty collection; none of them fail.

use crate::domain::model::{AttributeMap, Project, SkillCategory};
use regex::Regex;

/// Parse 2-column rows into a key/value map. Rows missing either cell are
/// skipped; duplicate keys are last-write-wins.
pub fn parse_key_value(rows: &[Vec<String>]) -> AttributeMap {
    let mut result = AttributeMap::new();
    for row in rows {
        match (row.first(), row.get(1)) {
            (Some(key), Some(value)) if !key.is_empty() && !value.is_empty() => {
                result.insert(key.clone(), value.clone());
            }
            _ => {}
        }
    }
    result
}

/// Parse (category, comma-joined skills) rows. Tokens are trimmed and empty
/// tokens dropped; a repeated category replaces its earlier skill list while
/// keeping its original position.
pub fn parse_skills(rows: &[Vec<String>]) -> Vec<SkillCategory> {
    let mut result: Vec<SkillCategory> = Vec::new();
    for row in rows {
        match (row.first(), row.get(1)) {
            (Some(category), Some(list)) if !category.is_empty() && !list.is_empty() => {
                let skills: Vec<String> = list
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();

                match result.iter_mut().find(|c| &c.category == category) {
                    Some(existing) => existing.skills = skills,
                    None => result.push(SkillCategory {
                        category: category.clone(),
                        skills,
                    }),
                }
            }
            _ => {}
        }
    }
    result
}

/// Parse header-driven project rows. The first row names the fields; each
/// header cell is lower-cased and stripped of whitespace to form the key.
/// Known keys fill the typed `Project` fields, unknown keys land in `extra`,
/// and missing cells default to the empty string. Without a header row or
/// any data rows the result is empty.
pub fn parse_projects(rows: &[Vec<String>]) -> Vec<Project> {
    let Some((header, data_rows)) = rows.split_first() else {
        return Vec::new();
    };
    if data_rows.is_empty() {
        return Vec::new();
    }

    let keys: Vec<String> = header.iter().map(|h| normalize_header(h)).collect();

    data_rows
        .iter()
        .map(|row| {
            let mut project = Project::default();
            for (index, key) in keys.iter().enumerate() {
                let value = row.get(index).cloned().unwrap_or_default();
                match key.as_str() {
                    "title" => project.title = value,
                    "description" => project.description = value,
                    "techstack" => project.techstack = value,
                    "github" => project.github = value,
                    "demo" => project.demo = value,
                    "featured" => project.featured = parse_flag(&value),
                    _ => {
                        project.extra.insert(key.clone(), value);
                    }
                }
            }
            project.id = slugify(&project.title);
            project
        })
        .collect()
}

/// Lower-case a title and replace whitespace runs with hyphens. Not
/// guaranteed unique; an empty title slugs to the empty string.
pub fn slugify(title: &str) -> String {
    let re = Regex::new(r"\s+").unwrap();
    re.replace_all(&title.to_lowercase(), "-").to_string()
}

fn normalize_header(header: &str) -> String {
    header.to_lowercase().split_whitespace().collect()
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}
