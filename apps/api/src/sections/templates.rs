//! Static section-to-attribute-template table.
//!
//! Each entry maps a section identifier to the natural-language description of
//! the attributes the model should emit for that section. Built once at
//! startup and passed into the extractor; never mutated.

use std::collections::HashMap;

/// The nine recognized section identifiers, in no particular order.
pub const SECTION_NAMES: [&str; 9] = [
    "education",
    "experience",
    "projects",
    "skills",
    "certificates",
    "achievements",
    "interests",
    "languages",
    "customSections",
];

const EDUCATION: &str = "Extract the following attributes:\n\
    - id\n\
    - institution\n\
    - location\n\
    - degree\n\
    - gpa (if available)\n\
    - startDate\n\
    - endDate\n\n";

const EXPERIENCE: &str = "Extract the following attributes:\n\
    - title\n\
    - company\n\
    - id\n\
    - startDate\n\
    - endDate\n\
    - link\n\
    - points (list of bullet points in detail, each point one line)\n\n";

const PROJECTS: &str = "Extract the following attributes:\n\
    - projectTitle\n\
    - description\n\
    - technologies (list)\n\
    - role\n\
    - startDate\n\
    - endDate\n\n";

const SKILLS: &str = "Extract the following attributes:\n\
    - softSkills (list)\n\
    - languages (note these are computer languages) (list)\n\
    - platforms (list)\n\
    - frameworks (list)\n\
    - tools (list)\n\n";

const CERTIFICATES: &str = "Extract the following attributes:\n\
    - id\n\
    - name\n\
    - link {text, url}\n\
    - date\n\
    - description\n\n\
    Note: You return only one object with the most appropriate certification\n\n";

const ACHIEVEMENTS: &str = "Extract the following attributes:\n\
    - title\n\
    - description\n\
    - date (if available)\n\n";

const INTERESTS: &str = "Extract the following attributes:\n\
    - interests (list of interests or hobbies)\n\n";

const LANGUAGES: &str = "Extract the following attributes:\n\
    - language\n\
    - proficiency\n\n";

const CUSTOM_SECTIONS: &str = "Extract the following attributes:\n\
    - id\n\
    - title\n\
    - content\n\n";

/// Immutable lookup table from section identifier to attribute template text.
pub struct SectionTemplates {
    table: HashMap<&'static str, &'static str>,
}

impl SectionTemplates {
    pub fn new() -> Self {
        let table = HashMap::from([
            ("education", EDUCATION),
            ("experience", EXPERIENCE),
            ("projects", PROJECTS),
            ("skills", SKILLS),
            ("certificates", CERTIFICATES),
            ("achievements", ACHIEVEMENTS),
            ("interests", INTERESTS),
            ("languages", LANGUAGES),
            ("customSections", CUSTOM_SECTIONS),
        ]);
        Self { table }
    }

    /// Returns the attribute template for `section_name`, or `None` if the
    /// identifier is not one of the recognized sections.
    pub fn get(&self, section_name: &str) -> Option<&'static str> {
        self.table.get(section_name).copied()
    }
}

impl Default for SectionTemplates {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_nine_sections_resolve() {
        let templates = SectionTemplates::new();
        for name in SECTION_NAMES {
            assert!(templates.get(name).is_some(), "missing template: {name}");
        }
    }

    #[test]
    fn test_unknown_sections_do_not_resolve() {
        let templates = SectionTemplates::new();
        for name in ["bogus", "Education", "EXPERIENCE", "customsections", ""] {
            assert!(templates.get(name).is_none(), "unexpected template: {name}");
        }
    }

    #[test]
    fn test_skills_template_lists_expected_attributes() {
        let templates = SectionTemplates::new();
        let skills = templates.get("skills").unwrap();
        for attr in ["softSkills", "languages", "platforms", "frameworks", "tools"] {
            assert!(skills.contains(attr), "skills template missing: {attr}");
        }
    }
}
