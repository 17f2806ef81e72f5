pub const OWNER_NAME: &str = "Arun Selvan G J";
pub const OWNER_TITLE: &str = "Senior DevOps & Platform Engineer";
pub const RESUME_PATH: &str = "/Arun_Selvan_GJ.pdf";
pub const PROFILE_IMAGE_PATH: &str = "/profile.jpg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Phone,
    Email,
    LinkedIn,
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub caption: &'static str,
    pub href: &'static str,
}

impl ContactLink {
    // profile links leave the site, tel: and mailto: hand off to the OS
    pub fn is_external(&self) -> bool {
        matches!(self.kind, ContactKind::LinkedIn | ContactKind::GitHub)
    }
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        kind: ContactKind::Phone,
        label: "+91 7448440011",
        caption: "Phone",
        href: "tel:+917448440011",
    },
    ContactLink {
        kind: ContactKind::Email,
        label: "gjarunselvan@gmail.com",
        caption: "Email",
        href: "mailto:gjarunselvan@gmail.com",
    },
    ContactLink {
        kind: ContactKind::LinkedIn,
        label: "LinkedIn",
        caption: "Professional profile",
        href: "https://linkedin.com/in/gjarunselvan",
    },
    ContactLink {
        kind: ContactKind::GitHub,
        label: "GitHub",
        caption: "Code and projects",
        href: "https://github.com/gjarunselvan",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_is_served_from_the_site_root() {
        assert_eq!(RESUME_PATH, "/Arun_Selvan_GJ.pdf");
        assert!(PROFILE_IMAGE_PATH.starts_with('/'));
    }

    #[test]
    fn only_profiles_are_external() {
        for link in CONTACT_LINKS {
            let profile = matches!(link.kind, ContactKind::LinkedIn | ContactKind::GitHub);
            assert_eq!(link.is_external(), profile, "{}", link.href);
        }
    }
}
