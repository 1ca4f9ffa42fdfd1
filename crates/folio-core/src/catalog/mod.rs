// ── Immutable catalogs ──
//
// Ordered, read-only collections built once from authored content.
// Declaration order is preserved everywhere: it is the order skills,
// certificates and projects are rendered in.

pub mod content;

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::error::CoreError;
use crate::model::{
    CategoryId, CertificateEntry, CertificateId, JourneyEntry, MAX_LEVEL, Profile, ProjectEntry,
    ProjectId, SkillCategory, SkillEntry,
};

pub use content::{CategoryContent, CertificateContent, PortfolioContent, SkillContent};

// ── SkillCatalog ────────────────────────────────────────────────────

/// Skills flattened in category order, then declaration order within
/// each category.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    categories: Vec<SkillCategory>,
    entries: Vec<SkillEntry>,
}

impl SkillCatalog {
    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    pub fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&SkillEntry> {
        self.entries.get(index)
    }

    pub fn category(&self, id: &CategoryId) -> Option<&SkillCategory> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn build(raw: Vec<CategoryContent>) -> Result<Self, CoreError> {
        let mut seen = IndexSet::new();
        let mut categories = Vec::with_capacity(raw.len());
        let mut entries = Vec::new();

        for (index, cat) in raw.into_iter().enumerate() {
            let id = CategoryId::new(&cat.id);
            if id.is_empty() {
                return Err(CoreError::EmptyCategory { index });
            }
            if !seen.insert(id.clone()) {
                return Err(CoreError::DuplicateCategory { id: id.to_string() });
            }

            for (skill_index, skill) in cat.skills.into_iter().enumerate() {
                if skill.name.trim().is_empty() {
                    return Err(CoreError::MissingField {
                        entity: "skill",
                        index: skill_index,
                        field: "name",
                    });
                }
                let level = u8::try_from(skill.level)
                    .ok()
                    .filter(|l| *l <= MAX_LEVEL)
                    .ok_or_else(|| CoreError::LevelOutOfRange {
                        name: skill.name.clone(),
                        level: skill.level,
                        max: MAX_LEVEL,
                    })?;

                entries.push(SkillEntry {
                    name: skill.name,
                    level,
                    tags: skill.tags.into_iter().collect(),
                    category: id.clone(),
                });
            }

            categories.push(SkillCategory {
                id,
                title: cat.title,
            });
        }

        Ok(Self {
            categories,
            entries,
        })
    }
}

// ── CertificateCatalog ──────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct CertificateCatalog {
    entries: IndexMap<CertificateId, CertificateEntry>,
}

impl CertificateCatalog {
    pub fn get(&self, id: &CertificateId) -> Option<&CertificateEntry> {
        self.entries.get(id)
    }

    pub fn get_index(&self, index: usize) -> Option<&CertificateEntry> {
        self.entries.get_index(index).map(|(_, cert)| cert)
    }

    pub fn contains(&self, id: &CertificateId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CertificateEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn build(raw: Vec<CertificateContent>) -> Result<Self, CoreError> {
        let mut entries = IndexMap::with_capacity(raw.len());

        for (index, cert) in raw.into_iter().enumerate() {
            if cert.id.trim().is_empty() {
                return Err(CoreError::MissingField {
                    entity: "certificate",
                    index,
                    field: "id",
                });
            }
            let id = CertificateId::new(cert.id.trim());
            if entries.contains_key(&id) {
                return Err(CoreError::DuplicateCertificate { id: id.to_string() });
            }

            let entry = CertificateEntry {
                id: id.clone(),
                title: cert.title,
                issuer: cert.issuer,
                date: cert.date,
                image_ref: cert.image,
                external_link: cert.link,
                tags: cert.tags.into_iter().collect(),
            };
            entries.insert(id, entry);
        }

        Ok(Self { entries })
    }
}

// ── ProjectCatalog ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    entries: IndexMap<ProjectId, ProjectEntry>,
}

impl ProjectCatalog {
    pub fn get(&self, id: ProjectId) -> Option<&ProjectEntry> {
        self.entries.get(&id)
    }

    pub fn get_index(&self, index: usize) -> Option<&ProjectEntry> {
        self.entries.get_index(index).map(|(_, project)| project)
    }

    pub fn contains(&self, id: ProjectId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn build(raw: Vec<ProjectEntry>) -> Result<Self, CoreError> {
        let mut entries = IndexMap::with_capacity(raw.len());
        for project in raw {
            if entries.contains_key(&project.id) {
                return Err(CoreError::DuplicateProject {
                    id: project.id.get(),
                });
            }
            entries.insert(project.id, project);
        }
        Ok(Self { entries })
    }
}

// ── Portfolio ───────────────────────────────────────────────────────

/// Every catalog the views read from. Built once at startup and shared
/// behind an `Arc`; nothing mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    profile: Profile,
    skills: SkillCatalog,
    certificates: CertificateCatalog,
    projects: ProjectCatalog,
    journey: Vec<JourneyEntry>,
}

impl Portfolio {
    /// Validate authored content and assemble the catalogs.
    pub fn from_content(content: PortfolioContent) -> Result<Self, CoreError> {
        let PortfolioContent {
            profile,
            categories,
            certificates,
            projects,
            journey,
        } = content;

        let portfolio = Self {
            profile,
            skills: SkillCatalog::build(categories)?,
            certificates: CertificateCatalog::build(certificates)?,
            projects: ProjectCatalog::build(projects)?,
            journey,
        };

        debug!(
            skills = portfolio.skills.len(),
            certificates = portfolio.certificates.len(),
            projects = portfolio.projects.len(),
            milestones = portfolio.journey.len(),
            "portfolio catalogs built"
        );

        Ok(portfolio)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn skills(&self) -> &SkillCatalog {
        &self.skills
    }

    pub fn certificates(&self) -> &CertificateCatalog {
        &self.certificates
    }

    pub fn projects(&self) -> &ProjectCatalog {
        &self.projects
    }

    pub fn journey(&self) -> &[JourneyEntry] {
        &self.journey
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn skill(name: &str, level: u32, tags: &[&str]) -> SkillContent {
        SkillContent {
            name: name.into(),
            level,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    fn cert(id: &str) -> CertificateContent {
        CertificateContent {
            id: id.into(),
            title: format!("Cert {id}"),
            issuer: String::new(),
            date: String::new(),
            image: String::new(),
            link: String::new(),
            tags: Vec::new(),
        }
    }

    fn project(id: u32) -> ProjectEntry {
        ProjectEntry {
            id: ProjectId::new(id),
            title: format!("Project {id}"),
            subtitle: String::new(),
            description: String::new(),
            detail_text: String::new(),
            icon_ref: String::new(),
            tags: Vec::new(),
            github_link: String::new(),
            demo_link: String::new(),
        }
    }

    #[test]
    fn skills_flatten_in_category_order() {
        let content = PortfolioContent {
            categories: vec![
                CategoryContent {
                    id: "frontend".into(),
                    title: "Frontend".into(),
                    skills: vec![skill("HTML", 90, &[]), skill("React", 50, &["Hooks"])],
                },
                CategoryContent {
                    id: "backend".into(),
                    title: "Backend".into(),
                    skills: vec![skill("Java", 65, &["Spring Boot"])],
                },
            ],
            ..PortfolioContent::default()
        };

        let portfolio = Portfolio::from_content(content).unwrap();
        let names: Vec<&str> = portfolio
            .skills()
            .entries()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, ["HTML", "React", "Java"]);
        assert_eq!(
            portfolio.skills().get(2).unwrap().category,
            CategoryId::new("backend")
        );
        assert_eq!(portfolio.skills().categories().len(), 2);
    }

    #[test]
    fn level_above_hundred_is_rejected() {
        let content = PortfolioContent {
            categories: vec![CategoryContent {
                id: "ai".into(),
                title: "AI".into(),
                skills: vec![skill("Python", 101, &[])],
            }],
            ..PortfolioContent::default()
        };

        let err = Portfolio::from_content(content).unwrap_err();
        assert_eq!(
            err,
            CoreError::LevelOutOfRange {
                name: "Python".into(),
                level: 101,
                max: MAX_LEVEL,
            }
        );
    }

    #[test]
    fn level_boundaries_are_accepted() {
        let content = PortfolioContent {
            categories: vec![CategoryContent {
                id: "tools".into(),
                title: "Tools".into(),
                skills: vec![skill("Git", 0, &[]), skill("Vim", 100, &[])],
            }],
            ..PortfolioContent::default()
        };
        assert!(Portfolio::from_content(content).is_ok());
    }

    #[test]
    fn duplicate_certificate_ids_are_rejected() {
        let content = PortfolioContent {
            certificates: vec![cert("aws"), cert("gcp"), cert("aws")],
            ..PortfolioContent::default()
        };
        let err = Portfolio::from_content(content).unwrap_err();
        assert_eq!(err, CoreError::DuplicateCertificate { id: "aws".into() });
    }

    #[test]
    fn duplicate_project_ids_are_rejected() {
        let content = PortfolioContent {
            projects: vec![project(1), project(1)],
            ..PortfolioContent::default()
        };
        let err = Portfolio::from_content(content).unwrap_err();
        assert_eq!(err, CoreError::DuplicateProject { id: 1 });
    }

    #[test]
    fn duplicate_categories_are_rejected() {
        let cat = CategoryContent {
            id: "Frontend".into(),
            title: "Frontend".into(),
            skills: Vec::new(),
        };
        let mut other = cat.clone();
        other.id = "frontend ".into();
        let content = PortfolioContent {
            categories: vec![cat, other],
            ..PortfolioContent::default()
        };
        let err = Portfolio::from_content(content).unwrap_err();
        assert_eq!(
            err,
            CoreError::DuplicateCategory {
                id: "frontend".into()
            }
        );
    }

    #[test]
    fn certificate_lookup_preserves_order() {
        let content = PortfolioContent {
            certificates: vec![cert("b"), cert("a")],
            ..PortfolioContent::default()
        };
        let portfolio = Portfolio::from_content(content).unwrap();
        let certs = portfolio.certificates();
        assert_eq!(certs.get_index(0).unwrap().id.as_str(), "b");
        assert!(certs.contains(&CertificateId::new("a")));
        assert!(!certs.contains(&CertificateId::new("c")));
    }

    #[test]
    fn certificate_tags_are_deduplicated() {
        let mut c = cert("x");
        c.tags = vec!["React".into(), "Redux".into(), "React".into()];
        let content = PortfolioContent {
            certificates: vec![c],
            ..PortfolioContent::default()
        };
        let portfolio = Portfolio::from_content(content).unwrap();
        let entry = portfolio.certificates().get(&"x".into()).unwrap();
        assert_eq!(entry.tags.len(), 2);
    }
}
