//! Static reference tables used by the structured-data and llms.txt
//! generators.
//!
//! The skill tables are kept apart on purpose: [`SKILL_EXPANSIONS`] feeds
//! `knowsAbout` in JSON-LD, [`SKILL_CATEGORIES`] groups skills for the
//! llms.txt prompt. Matching in both is plain substring containment.

use std::collections::BTreeSet;

/// Organisation name to homepage.
const ORGANIZATION_URLS: &[(&str, &str)] = &[
    ("Cision", "https://www.cision.com"),
    ("University of the West of England", "https://www.uwe.ac.uk"),
    ("Windsor Telecom", "https://www.windsor-telecom.co.uk"),
];

/// Language name to ISO 639-1 code.
const LANGUAGE_ISO_CODES: &[(&str, &str)] = &[
    ("English", "en"),
    ("French", "fr"),
    ("German", "de"),
    ("Portuguese", "pt"),
    ("Spanish", "es"),
];

/// When a skill contains the key, the aliases are added to `knowsAbout`.
pub const SKILL_EXPANSIONS: &[(&str, &[&str])] = &[
    ("Vue.js", &["Vue 3"]),
    ("GCP", &["Google Cloud Platform"]),
    ("PHP / Laravel", &["PHP", "Laravel"]),
    ("Ruby on Rails", &["Rails"]),
    ("Testing", &["Vitest", "Cypress"]),
    ("TypeScript", &["JavaScript"]),
];

/// Ordered categories and the keywords that place a skill into them.
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    ("Backend", &["Rails", "PHP", "Laravel", "Node.js", "GraphQL", "REST"]),
    ("Cloud & DevOps", &["GCP", "Docker", "CI/CD", "Git", "Testing"]),
    ("Databases & Search", &["PostgreSQL", "MySQL", "Elasticsearch"]),
    (
        "Frontend",
        &[
            "Vue.js",
            "Vue 3",
            "TypeScript",
            "Tailwind CSS",
            "PWA",
            "webRTC",
            "Websockets",
        ],
    ),
    ("Methodology", &["Agile", "Kanban"]),
];

/// Homepage for a known organisation, `""` otherwise.
pub fn organization_url(name: &str) -> &'static str {
    ORGANIZATION_URLS
        .iter()
        .find(|(org, _)| *org == name)
        .map_or("", |(_, url)| url)
}

/// ISO 639-1 code, falling back to the lowercased first two characters.
pub fn language_code(name: &str) -> String {
    LANGUAGE_ISO_CODES
        .iter()
        .find(|(lang, _)| *lang == name)
        .map_or_else(
            || name.chars().take(2).collect::<String>().to_lowercase(),
            |(_, code)| (*code).to_owned(),
        )
}

/// Skills plus every alias whose key occurs in some skill, deduplicated
/// and sorted.
pub fn expand_skills(skills: &[String]) -> Vec<String> {
    let mut expanded: BTreeSet<String> = skills.iter().cloned().collect();

    for (key, aliases) in SKILL_EXPANSIONS {
        if skills.iter().any(|skill| skill.contains(key)) {
            expanded.extend(aliases.iter().map(|alias| (*alias).to_owned()));
        }
    }

    expanded.into_iter().collect()
}

/// Group skills by category, in table order. A skill may land in several
/// categories; skills matching none are dropped; empty categories are
/// omitted.
pub fn categorize_skills(skills: &[String]) -> Vec<(&'static str, Vec<&str>)> {
    SKILL_CATEGORIES
        .iter()
        .filter_map(|(category, keywords)| {
            let matched: Vec<&str> = skills
                .iter()
                .filter(|skill| keywords.iter().any(|kw| skill.contains(kw)))
                .map(String::as_str)
                .collect();
            (!matched.is_empty()).then_some((*category, matched))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_organization_url() {
        assert_eq!(organization_url("Cision"), "https://www.cision.com");
        assert_eq!(organization_url("Unknown Corp"), "");
        assert_eq!(organization_url("cision"), "");
    }

    #[test]
    fn test_language_code() {
        assert_eq!(language_code("Spanish"), "es");
        assert_eq!(language_code("Italian"), "it");
        assert_eq!(language_code("X"), "x");
        assert_eq!(language_code(""), "");
    }

    #[test]
    fn test_expand_skills_adds_aliases_sorted() {
        let out = expand_skills(&strings(&["TypeScript", "Vue.js / Vue 3", "Docker"]));
        assert_eq!(
            out,
            strings(&["Docker", "JavaScript", "TypeScript", "Vue 3", "Vue.js / Vue 3"])
        );
    }

    #[test]
    fn test_expand_skills_dedupes() {
        let out = expand_skills(&strings(&["Vue 3", "Vue.js"]));
        assert_eq!(out, strings(&["Vue 3", "Vue.js"]));
    }

    #[test]
    fn test_expand_skills_empty() {
        assert!(expand_skills(&[]).is_empty());
    }

    #[test]
    fn test_categorize_skills() {
        let skills = strings(&[
            "Ruby on Rails",
            "PostgreSQL",
            "Vue.js / Vue 3",
            "GitHub Actions",
            "Juggling",
        ]);
        let groups = categorize_skills(&skills);

        assert_eq!(
            groups,
            vec![
                ("Backend", vec!["Ruby on Rails"]),
                ("Cloud & DevOps", vec!["GitHub Actions"]),
                ("Databases & Search", vec!["PostgreSQL"]),
                ("Frontend", vec!["Vue.js / Vue 3"]),
            ]
        );
    }

    #[test]
    fn test_categorize_skill_in_several_categories() {
        let skills = strings(&["PHP / Laravel + Vue.js"]);
        let names: Vec<_> = categorize_skills(&skills).into_iter().map(|g| g.0).collect();
        assert_eq!(names, vec!["Backend", "Frontend"]);
    }
}
