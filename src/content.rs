use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{collections::HashSet, sync::LazyLock};
use thiserror::Error;
use url::Url;

const PROFILE_FILE: &str = "profile.json";
const PROJECTS_FILE: &str = "projects.json";
const SKILLS_FILE: &str = "skills.json";

const ACTIVITY_GRAPH_BASE: &str = "https://github-readme-activity-graph.vercel.app/graph";
const LEETCODE_CARD_BASE: &str = "https://leetcard.jacoblin.cool";
const CODOLIO_CARD_BASE: &str = "https://codolio.com/api/card";

static SITE: LazyLock<Result<SiteContent, ContentError>> = LazyLock::new(SiteContent::load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file {0} not found")]
    NotFound(&'static str),
    #[error("couldn't parse {file}: {reason}")]
    Parse { file: &'static str, reason: String },
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("duplicate project id {0}")]
    DuplicateProject(u32),
    #[error("duplicate skill {0:?}")]
    DuplicateSkill(String),
    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub color: String,
    /// Live demo, if the project has one.
    pub link: Option<String>,
    pub github: String,
    pub features: Vec<String>,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup<'a> {
    pub category: &'a str,
    pub skills: Vec<&'a Skill>,
}

/// Groups skills by category.
///
/// Categories come out in the order they first appear; skills keep their source order.
pub fn group_by_category(skills: &[Skill]) -> Vec<SkillGroup<'_>> {
    let mut groups: Vec<SkillGroup<'_>> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category: &skill.category,
                skills: vec![skill],
            }),
        }
    }
    groups
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub image: String,
    pub alt: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Handles {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub leetcode: String,
    pub geeksforgeeks: String,
    pub codechef: String,
    pub codolio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedTheme {
    pub activity_graph: String,
    pub leetcode: String,
    pub codolio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub short_name: String,
    pub role: String,
    pub email: String,
    pub stats: Vec<Stat>,
    pub handles: Handles,
    pub embed_theme: EmbedTheme,
    pub badges: Vec<Badge>,
}

/// Outbound profile links and third-party embed URLs derived from a [`Profile`].
#[derive(Debug, Clone)]
pub struct Links {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub leetcode: String,
    pub geeksforgeeks: String,
    pub codechef: String,
    pub codolio: String,
    pub email: String,
    pub activity_graph: String,
    pub leetcode_card: String,
    pub codolio_card: String,
}

impl Links {
    pub fn for_profile(profile: &Profile) -> Result<Self, ContentError> {
        let h = &profile.handles;
        let theme = &profile.embed_theme;
        let graph_title = format!("{}'s Contribution Graph", profile.name);
        Ok(Self {
            github: profile_url("https://github.com", &[h.github.as_str()])?,
            linkedin: profile_url("https://www.linkedin.com/in", &[h.linkedin.as_str(), ""])?,
            twitter: profile_url("https://twitter.com", &[h.twitter.as_str()])?,
            leetcode: profile_url("https://leetcode.com/u", &[h.leetcode.as_str(), ""])?,
            geeksforgeeks: profile_url("https://www.geeksforgeeks.org/user", &[h.geeksforgeeks.as_str(), ""])?,
            codechef: profile_url("https://www.codechef.com/users", &[h.codechef.as_str()])?,
            codolio: profile_url("https://codolio.com/profile", &[h.codolio.as_str()])?,
            email: format!("mailto:{}", profile.email),
            activity_graph: embed_url(
                ACTIVITY_GRAPH_BASE,
                &[],
                &[
                    ("username", h.github.as_str()),
                    ("theme", theme.activity_graph.as_str()),
                    ("hide_border", "true"),
                    ("area", "true"),
                    ("custom_title", graph_title.as_str()),
                ],
            )?,
            leetcode_card: embed_url(
                LEETCODE_CARD_BASE,
                &[h.leetcode.as_str()],
                &[
                    ("theme", theme.leetcode.as_str()),
                    ("font", "Fira Code"),
                    ("ext", "activity"),
                ],
            )?,
            codolio_card: embed_url(
                CODOLIO_CARD_BASE,
                &[],
                &[("username", h.codolio.as_str()), ("theme", theme.codolio.as_str())],
            )?,
        })
    }
}

fn parse_url(raw: &str) -> Result<Url, ContentError> {
    Url::parse(raw).map_err(|e| ContentError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

fn embed_url(base: &str, segments: &[&str], params: &[(&str, &str)]) -> Result<String, ContentError> {
    let mut url = parse_url(base)?;
    if !segments.is_empty() {
        url.path_segments_mut()
            .map_err(|()| ContentError::InvalidUrl {
                url: base.to_string(),
                reason: "cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
    }
    // an empty serializer would still leave a trailing '?'
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params);
    }
    Ok(url.into())
}

fn profile_url(base: &str, segments: &[&str]) -> Result<String, ContentError> {
    embed_url(base, segments, &[])
}

fn check_color(color: &str) -> Result<(), ContentError> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(ContentError::InvalidColor(color.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct SiteContent {
    pub profile: Profile,
    pub links: Links,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
}

impl SiteContent {
    /// Reads and validates the embedded content files.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_parts(read(PROFILE_FILE)?, read(PROJECTS_FILE)?, read(SKILLS_FILE)?)
    }

    pub fn from_parts(
        profile: Profile,
        projects: Vec<Project>,
        skills: Vec<Skill>,
    ) -> Result<Self, ContentError> {
        let mut ids = HashSet::new();
        for project in &projects {
            if !ids.insert(project.id) {
                return Err(ContentError::DuplicateProject(project.id));
            }
            check_color(&project.color)?;
            parse_url(&project.github)?;
            parse_url(&project.image)?;
            if let Some(link) = &project.link {
                parse_url(link)?;
            }
        }

        let mut names = HashSet::new();
        for skill in &skills {
            if !names.insert(skill.name.as_str()) {
                return Err(ContentError::DuplicateSkill(skill.name.clone()));
            }
            check_color(&skill.color)?;
        }

        for badge in &profile.badges {
            parse_url(&badge.image)?;
        }
        let links = Links::for_profile(&profile)?;

        log::debug!(
            "loaded {} projects and {} skills",
            projects.len(),
            skills.len()
        );
        Ok(Self {
            profile,
            links,
            projects,
            skills,
        })
    }

    pub fn skill_groups(&self) -> Vec<SkillGroup<'_>> {
        group_by_category(&self.skills)
    }
}

fn read<T: DeserializeOwned>(file: &'static str) -> Result<T, ContentError> {
    let asset = Assets::get(file).ok_or(ContentError::NotFound(file))?;
    serde_json::from_slice(&asset.data).map_err(|e| ContentError::Parse {
        file,
        reason: e.to_string(),
    })
}

/// The site content, loaded once per process.
pub fn site() -> Result<&'static SiteContent, ContentError> {
    SITE.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, category: &str) -> Skill {
        Skill {
            name: name.to_string(),
            icon: "*".to_string(),
            color: "#123456".to_string(),
            category: category.to_string(),
        }
    }

    fn project(id: u32) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: "A project".to_string(),
            tech: vec!["Rust".to_string()],
            color: "#8b5cf6".to_string(),
            link: None,
            github: format!("https://github.com/someone/project-{id}"),
            features: vec![],
            image: "https://images.example.com/p.png".to_string(),
        }
    }

    fn profile() -> Profile {
        read(PROFILE_FILE).expect("embedded profile should parse")
    }

    #[test]
    fn test_embedded_content_loads() {
        let site = site().expect("embedded content should be valid");
        assert_eq!(site.projects.len(), 3);
        assert_eq!(site.skills.len(), 15);
        assert_eq!(site.profile.stats.len(), 3);
        assert_eq!(site.profile.badges.len(), 4);
    }

    #[test]
    fn test_grouping_embedded_skills() {
        let site = site().unwrap();
        let groups = site.skill_groups();
        let categories = groups.iter().map(|g| g.category).collect::<Vec<_>>();
        assert_eq!(categories, vec!["Frontend", "Backend", "Tools"]);

        // every skill lands in exactly one group and nothing is invented
        let flattened = groups
            .iter()
            .flat_map(|g| g.skills.iter().map(|s| s.name.as_str()))
            .collect::<Vec<_>>();
        let original = site.skills.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
        assert_eq!(flattened.len(), original.len());
        let mut a = flattened.clone();
        let mut b = original.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
        assert!(groups
            .iter()
            .all(|g| g.skills.iter().all(|s| s.category == g.category)));
    }

    #[test]
    fn test_grouping_interleaved_categories() {
        let skills = vec![
            skill("a", "Backend"),
            skill("b", "Frontend"),
            skill("c", "Backend"),
            skill("d", "Tools"),
            skill("e", "Frontend"),
        ];
        let groups = group_by_category(&skills);
        let shape = groups
            .iter()
            .map(|g| {
                (
                    g.category,
                    g.skills.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
                )
            })
            .collect::<Vec<_>>();
        assert_eq!(
            shape,
            vec![
                ("Backend", vec!["a", "c"]),
                ("Frontend", vec!["b", "e"]),
                ("Tools", vec!["d"]),
            ]
        );
    }

    #[test]
    fn test_grouping_empty() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn test_duplicate_project_rejected() {
        let res = SiteContent::from_parts(profile(), vec![project(1), project(1)], vec![]);
        assert_eq!(res.unwrap_err(), ContentError::DuplicateProject(1));
    }

    #[test]
    fn test_duplicate_skill_rejected() {
        let skills = vec![skill("Rust", "Backend"), skill("Rust", "Tools")];
        let res = SiteContent::from_parts(profile(), vec![], skills);
        assert_eq!(
            res.unwrap_err(),
            ContentError::DuplicateSkill("Rust".to_string())
        );
    }

    #[test]
    fn test_bad_color_rejected() {
        let mut p = project(1);
        p.color = "red".to_string();
        let res = SiteContent::from_parts(profile(), vec![p], vec![]);
        assert_eq!(
            res.unwrap_err(),
            ContentError::InvalidColor("red".to_string())
        );
    }

    #[test]
    fn test_bad_url_rejected() {
        let mut p = project(1);
        p.link = Some("not a url".to_string());
        let res = SiteContent::from_parts(profile(), vec![p], vec![]);
        assert!(matches!(res, Err(ContentError::InvalidUrl { .. })));
    }

    #[test]
    fn test_missing_live_link_parses_as_none() {
        let site = site().unwrap();
        let ecommerce = site.projects.iter().find(|p| p.id == 2).unwrap();
        assert!(ecommerce.link.is_none());
    }

    #[test]
    fn test_profile_links() {
        let links = Links::for_profile(&profile()).unwrap();
        assert_eq!(links.github, "https://github.com/ShubhamKumar6299");
        assert_eq!(links.leetcode, "https://leetcode.com/u/shubham_4518/");
        assert_eq!(
            links.linkedin,
            "https://www.linkedin.com/in/shubhamkumar6299/"
        );
        assert_eq!(links.codolio, "https://codolio.com/profile/ToUrIsT45");
        assert_eq!(links.email, "mailto:satyaanandsharma9534@gmail.com");
    }

    #[test]
    fn test_embed_urls_carry_username_and_theme() {
        let links = Links::for_profile(&profile()).unwrap();

        let graph = Url::parse(&links.activity_graph).unwrap();
        let pairs = graph.query_pairs().into_owned().collect::<Vec<_>>();
        assert!(pairs.contains(&("username".to_string(), "ShubhamKumar6299".to_string())));
        assert!(pairs.contains(&("theme".to_string(), "tokyo-night".to_string())));
        assert!(pairs.contains(&(
            "custom_title".to_string(),
            "Shubham Kumar's Contribution Graph".to_string()
        )));

        let leetcode = Url::parse(&links.leetcode_card).unwrap();
        assert_eq!(leetcode.path(), "/shubham_4518");
        assert!(leetcode
            .query_pairs()
            .any(|(k, v)| k == "font" && v == "Fira Code"));

        assert!(links
            .codolio_card
            .starts_with("https://codolio.com/api/card?username=ToUrIsT45"));
    }
}
