use chrono::{DateTime, Datelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use dashmap::DashMap;
#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};
#[cfg(feature = "ssr")]
use rust_embed::Embed;
#[cfg(feature = "ssr")]
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub avatar: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Elijah Manda",
    initials: "EM",
    role: "Software developer",
    location: "Chipata, Eastern Province, Zambia",
    email: "elijahmandajc@gmail.com",
    avatar: "/profile.svg",
};

pub const ABOUT: &str = "I specialize in scientific software, research tools, mobile app development, web development, and game development.";

pub const CONTACT_BLURB: &str = "Open to software development opportunities";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    GitHub,
    X,
    Facebook,
    Instagram,
}

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Platform::GitHub => "GitHub",
            Platform::X => "X",
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Platform::GitHub => "devicon-github-original",
            Platform::X => "devicon-twitter-original",
            Platform::Facebook => "devicon-facebook-plain",
            Platform::Instagram => "extra-instagram",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub platform: Platform,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        platform: Platform::GitHub,
        href: "https://www.github.com/elijahmanda",
    },
    SocialLink {
        platform: Platform::X,
        href: "https://www.x.com/ElijahMandajc",
    },
    SocialLink {
        platform: Platform::Facebook,
        href: "https://www.facebook.com/share/1CjewfRxS1/?mibextid=qi2Omg",
    },
    SocialLink {
        platform: Platform::Instagram,
        href: "https://www.instagram.com/elijahmanda.jc?igsh=bnJ6bGVyam5hbXE5",
    },
];

/// A page section reachable from the nav bar.
#[derive(Debug, Clone, Copy)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavSection {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        id: "about",
        label: "About",
    },
    NavSection {
        id: "expertise",
        label: "Expertise",
    },
    NavSection {
        id: "projects",
        label: "Projects",
    },
    NavSection {
        id: "contact",
        label: "Contact",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

impl SkillGroup {
    pub fn joined(&self) -> String {
        self.items.join(" • ")
    }
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Core Languages",
        items: &["Python", "C", "Java", "JavaScript", "C++"],
    },
    SkillGroup {
        title: "Web Technologies",
        items: &["React", "Node.js", "Express"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

// nothing to list yet; the section stays hidden while this is empty
pub const EXPERIENCE: &[Experience] = &[];

/// Year the site was built, for the copyright line.
pub fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(2025)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub tags: Vec<String>,
    pub link: String,
    pub order: u32,
    pub description_html: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Project not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse front matter of {0}")]
    FrontMatter(String),
    #[error("{0} is not valid UTF-8")]
    Encoding(String),
}

#[cfg(feature = "ssr")]
#[derive(Embed)]
#[folder = "content/projects"]
pub struct ProjectAssets;

#[cfg(feature = "ssr")]
pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, Project>> = LazyLock::new(DashMap::new);

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug)]
struct FrontMatter {
    title: String,
    link: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    order: u32,
}

#[cfg(feature = "ssr")]
pub fn parse_project(slug: &str, source: &str) -> Result<Project, ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(source)
        .ok_or_else(|| ContentError::FrontMatter(slug.to_string()))?;

    let parser = Parser::new_ext(&parsed.content, Options::all());
    let mut description_html = String::new();
    pulldown_cmark::html::push_html(&mut description_html, parser);

    Ok(Project {
        slug: slug.to_string(),
        title: parsed.data.title,
        tags: parsed.data.tags,
        link: parsed.data.link,
        order: parsed.data.order,
        description_html,
    })
}

#[cfg(feature = "ssr")]
pub fn get_project(file: &str) -> Result<Project, ContentError> {
    let slug = file.strip_suffix(".md").unwrap_or(file);
    if let Some(project) = GLOBAL_PROJECT_CACHE.get(slug) {
        return Ok(project.clone());
    }
    let asset = ProjectAssets::get(file).ok_or_else(|| ContentError::NotFound(slug.to_string()))?;
    let source =
        String::from_utf8(asset.data.into()).map_err(|_| ContentError::Encoding(file.to_string()))?;
    let project = parse_project(slug, &source)?;
    GLOBAL_PROJECT_CACHE.insert(slug.to_string(), project.clone());
    Ok(project)
}

/// All embedded projects, ordered by their `order` front matter then title.
#[cfg(feature = "ssr")]
pub fn get_projects() -> Result<Vec<Project>, ContentError> {
    let mut projects = ProjectAssets::iter()
        .filter(|file| file.ends_with(".md"))
        .map(|file| get_project(&file))
        .collect::<Result<Vec<_>, _>>()?;
    projects.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.title.cmp(&b.title)));
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_sections_are_unique_anchors() {
        let mut ids = NAV_SECTIONS.iter().map(|s| s.id).collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), NAV_SECTIONS.len());
        assert_eq!(NAV_SECTIONS[0].href(), "#about");
    }

    #[test]
    fn test_social_links_are_absolute() {
        assert!(SOCIAL_LINKS.iter().all(|l| l.href.starts_with("https://")));
        assert!(SOCIAL_LINKS.iter().all(|l| !l.platform.label().is_empty()));
    }

    #[test]
    fn test_skill_groups_join() {
        assert_eq!(SKILL_GROUPS[1].joined(), "React • Node.js • Express");
    }

    #[test]
    fn test_build_year() {
        assert!(build_year() >= 2025);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_parse_project() {
        let source = "---\ntitle: Demo\nlink: https://example.com\ntags:\n  - One\n  - Two\norder: 2\n---\nA *small* demo.\n";
        let project = parse_project("demo", source).unwrap();
        assert_eq!(project.slug, "demo");
        assert_eq!(project.title, "Demo");
        assert_eq!(project.tags, vec!["One".to_string(), "Two".to_string()]);
        assert_eq!(project.order, 2);
        assert!(project.description_html.contains("<em>small</em>"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_parse_project_without_front_matter() {
        let err = parse_project("bare", "just text").unwrap_err();
        assert_eq!(err, ContentError::FrontMatter("bare".to_string()));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_embedded_projects() {
        let projects = get_projects().unwrap();
        let symbolic = projects.iter().find(|p| p.slug == "symbolic").unwrap();
        assert_eq!(symbolic.title, "Symbolic");
        assert!(symbolic.tags.contains(&"Programming Language".to_string()));
        assert!(symbolic.link.starts_with("https://"));

        assert_eq!(get_project("missing.md"), Err(ContentError::NotFound("missing".to_string())));
    }
}
