use std::{collections::HashSet, sync::LazyLock};

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    Portfolio::load().unwrap_or_else(|e| {
        log::error!("failed to load portfolio content: {e}");
        Portfolio::default()
    })
});

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(String),
    #[error("malformed content in {file}: {source}")]
    Malformed {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Email,
    Phone,
    Location,
}

impl ChannelKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Location => "Location",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Email => "✉",
            Self::Phone => "☎",
            Self::Location => "⌖",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub value: String,
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Github,
    Linkedin,
    Twitter,
}

impl SocialNetwork {
    pub fn label(self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
            Self::Twitter => "Twitter",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Github => "devicon-github-plain",
            Self::Linkedin => "devicon-linkedin-plain",
            Self::Twitter => "devicon-twitter-original",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub level: u8,
}

impl SkillRecord {
    /// The level as carried by the bar's `data-width` attribute.
    pub fn width(&self) -> String {
        format!("{}%", self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub github_url: String,
    pub live_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExperienceRecord {
    pub id: u32,
    pub position: String,
    pub company: String,
    pub location: String,
    pub start_year: u16,
    pub end_year: Option<u16>,
    pub highlights: Vec<String>,
    pub technologies: Vec<String>,
}

impl ExperienceRecord {
    pub fn period(&self) -> String {
        match self.end_year {
            Some(end) => format!("{} - {}", self.start_year, end),
            None => format!("{} - Present", self.start_year),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub roles: Vec<String>,
    pub headline: String,
    pub about_title: String,
    pub bio: Vec<String>,
    pub email: String,
    pub resume_path: String,
    pub hero_badges: Vec<String>,
    pub skills: Vec<SkillRecord>,
    pub contact: Vec<ContactChannel>,
    pub social: Vec<SocialLink>,
}

impl Profile {
    pub fn social_url(&self, network: SocialNetwork) -> Option<&str> {
        self.social
            .iter()
            .find(|s| s.network == network)
            .map(|s| s.url.as_str())
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Everything the page renders, parsed once from `content/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<ProjectRecord>,
    pub experience: Vec<ExperienceRecord>,
}

impl Portfolio {
    /// The embedded catalog. Falls back to empty content if the embedded
    /// files are unusable.
    pub fn get() -> &'static Portfolio {
        &PORTFOLIO
    }

    pub fn load() -> Result<Self, ContentError> {
        let portfolio = Self {
            profile: read("profile.json")?,
            projects: read("projects.json")?,
            experience: read("experience.json")?,
        };
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn project(&self, id: u32) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Invalid("profile name is empty".to_string()));
        }
        if let Some(skill) = self.profile.skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::Invalid(format!(
                "skill {} has level {} above 100",
                skill.name, skill.level
            )));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.projects.iter().find(|p| !seen.insert(p.id)) {
            return Err(ContentError::Invalid(format!(
                "duplicate project id {}",
                dup.id
            )));
        }
        Ok(())
    }
}

fn read<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let data = Content::get(file).ok_or_else(|| ContentError::Missing(file.to_string()))?;
    parse(file, &data.data)
}

fn parse<T: DeserializeOwned>(file: &str, bytes: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(bytes).map_err(|source| ContentError::Malformed {
        file: file.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let portfolio = Portfolio::load().expect("embedded content should parse");
        assert!(!portfolio.profile.name.is_empty());
        assert_eq!(portfolio.projects.len(), 6);
        assert_eq!(portfolio.experience.len(), 4);
        assert_eq!(portfolio.profile.skills.len(), 6);
        assert_eq!(*Portfolio::get(), portfolio);
    }

    #[test]
    fn test_profile_links() {
        let profile = &Portfolio::get().profile;
        assert!(profile
            .social_url(SocialNetwork::Github)
            .is_some_and(|u| u.starts_with("https://github.com/")));
        assert!(profile.mailto().starts_with("mailto:"));
        assert!(profile
            .contact
            .iter()
            .any(|c| c.kind == ChannelKind::Email && c.href == profile.mailto()));
    }

    #[test]
    fn test_project_lookup() {
        let portfolio = Portfolio::get();
        let first = &portfolio.projects[0];
        assert_eq!(portfolio.project(first.id), Some(first));
        assert_eq!(portfolio.project(9999), None);
    }

    #[test]
    fn test_experience_period() {
        let current = ExperienceRecord {
            id: 1,
            position: "Senior Full Stack Developer".to_string(),
            company: "Tech Solutions Inc.".to_string(),
            location: "San Francisco, CA".to_string(),
            start_year: 2022,
            end_year: None,
            highlights: vec![],
            technologies: vec![],
        };
        assert_eq!(current.period(), "2022 - Present");
        let past = ExperienceRecord {
            end_year: Some(2022),
            start_year: 2020,
            ..current
        };
        assert_eq!(past.period(), "2020 - 2022");
    }

    #[test]
    fn test_skill_width() {
        let skill = SkillRecord {
            name: "TypeScript".to_string(),
            level: 90,
        };
        assert_eq!(skill.width(), "90%");
    }

    #[test]
    fn test_malformed_content_is_reported() {
        let err = parse::<Vec<ProjectRecord>>("projects.json", b"[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, ContentError::Malformed { .. }));
        assert!(err.to_string().contains("projects.json"));
    }

    #[test]
    fn test_validation_rejects_bad_content() {
        let mut portfolio = Portfolio::get().clone();
        portfolio.profile.skills[0].level = 101;
        assert!(matches!(
            portfolio.validate(),
            Err(ContentError::Invalid(_))
        ));

        let mut portfolio = Portfolio::get().clone();
        let dup = portfolio.projects[0].clone();
        portfolio.projects.push(dup);
        assert!(portfolio.validate().is_err());

        assert!(Portfolio::default().validate().is_err());
    }
}
