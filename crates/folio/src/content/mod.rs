pub mod blocks;
pub mod contact;
pub mod experience;
pub mod gallery;
pub mod projects;
pub mod skills;

/// One project block from `projects.txt`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub title: String,
    /// Empty when the block had exactly three lines.
    pub subtitle: String,
    /// Middle lines joined with `\n`.
    pub description: String,
    /// Image filenames in source order; may be empty.
    pub images: Vec<String>,
}

/// One position block from `experience.txt`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceRecord {
    pub title: String,
    pub company: String,
    pub date_range: String,
    /// Each item may contain `\n` soft breaks from continuation lines.
    pub responsibilities: Vec<String>,
}

/// A skill category from `skills.txt`. `name` is `None` for the single
/// implicit category that collects colon-less lines.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategory {
    pub name: Option<String>,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    LinkedIn,
    GitHub,
    ItchIo,
    Website,
    Twitter,
    Instagram,
    Facebook,
    Other,
}

impl ContactKind {
    /// Look up a kind from a normalized key (lowercase, alphanumeric only).
    pub fn from_key(key: &str) -> Self {
        match key {
            "email" => Self::Email,
            "phone" => Self::Phone,
            "linkedin" => Self::LinkedIn,
            "github" => Self::GitHub,
            "itchio" => Self::ItchIo,
            "website" => Self::Website,
            "twitter" => Self::Twitter,
            "instagram" => Self::Instagram,
            "facebook" => Self::Facebook,
            _ => Self::Other,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Email => "\u{2709}",     // envelope
            Self::Phone => "\u{260E}",     // telephone
            Self::LinkedIn => "\u{1F517}", // link
            Self::GitHub => "\u{1F4BB}",   // laptop
            Self::ItchIo => "\u{1F3AE}",   // game controller
            Self::Website => "\u{1F310}",  // globe
            Self::Twitter => "\u{1F426}",  // bird
            Self::Instagram => "\u{1F4F7}", // camera
            Self::Facebook => "\u{1F465}", // people
            Self::Other => "\u{2139}",     // info
        }
    }
}

/// One line from `contact.txt`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactEntry {
    pub kind: ContactKind,
    /// Display text. For linked entries this is the value after the key;
    /// for plain entries it is the whole original line.
    pub label: String,
    /// `mailto:`, `tel:` or an http(s) URL. `None` renders as plain text.
    pub target: Option<String>,
}

impl ContactEntry {
    /// Targets that should open in an external browser rather than a
    /// mail/dialer handler.
    pub fn opens_externally(&self) -> bool {
        self.target
            .as_deref()
            .is_some_and(|t| !t.starts_with("mailto:") && !t.starts_with("tel:"))
    }
}
