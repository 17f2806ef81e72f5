use std::fmt;

use serde::{Deserialize, Serialize};

// Section
//
// the navigable regions of the page.  the variant order is the order the
// nav bar lists them in, which is not the order they appear in the document
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

pub const NAV_ORDER: [Section; 5] = [
    Section::About,
    Section::Skills,
    Section::Experience,
    Section::Projects,
    Section::Contact,
];

impl Section {
    pub fn all() -> &'static [Section] {
        &NAV_ORDER
    }

    /// The element id the section is rendered under.
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn spotlight_heading(self) -> &'static str {
        match self {
            Self::About => "Profile Focus",
            Self::Skills => "Technical Capability",
            Self::Experience => "Career Timeline Focus",
            Self::Projects => "Highlighted Outcomes",
            Self::Contact => "Contact Hub",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dom_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_are_distinct_and_lowercase() {
        let ids: Vec<&str> = Section::all().iter().map(|s| s.dom_id()).collect();
        assert_eq!(ids, ["about", "skills", "experience", "projects", "contact"]);
        assert_eq!(Section::Skills.to_string(), "skills");
    }

    #[test]
    fn nav_order_matches_ord() {
        let mut sorted = Section::all().to_vec();
        sorted.sort();
        assert_eq!(sorted, Section::all());
        assert!(Section::Skills < Section::Projects);
    }
}
