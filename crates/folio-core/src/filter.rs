// ── Skills ⇄ certificates cross-filter ──
//
// Selecting a certificate narrows the skill grid to the skills whose name
// or tags overlap the certificate's tags. Overlap is a case-insensitive
// substring test in either direction, so "React" on a certificate matches
// a skill tagged "React Hooks" and the other way around.

use std::sync::Arc;

use strum::{Display, EnumIter};
use tracing::debug;

use crate::catalog::{Portfolio, SkillCatalog};
use crate::model::{CertificateEntry, CertificateId, SkillEntry};
use crate::view::{Section, ViewCommand};

/// Which grid the Skills section is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum SkillsTab {
    #[default]
    #[strum(to_string = "Technical Skills")]
    Skills,
    #[strum(to_string = "Certifications")]
    Certificates,
}

/// The mutable view state owned by a [`CrossFilterController`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CrossFilterState {
    pub active_certificate: Option<CertificateId>,
    pub active_tab: SkillsTab,
}

/// `true` when one lowercase string contains the other.
fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Whether `skill` is related to `cert` under the bidirectional
/// substring rule, checked against the skill name and every skill tag.
pub fn certificate_matches_skill(cert: &CertificateEntry, skill: &SkillEntry) -> bool {
    let cert_tags: Vec<String> = cert.tags.iter().map(|t| t.to_lowercase()).collect();
    skill
        .match_candidates()
        .map(str::to_lowercase)
        .any(|candidate| cert_tags.iter().any(|tag| contains_either(tag, &candidate)))
}

/// Every skill related to `cert`, in catalog order.
pub fn related_skills<'a>(skills: &'a SkillCatalog, cert: &CertificateEntry) -> Vec<&'a SkillEntry> {
    skills
        .entries()
        .iter()
        .filter(|skill| certificate_matches_skill(cert, skill))
        .collect()
}

/// Coordinates certificate selection, skill filtering and the
/// Skills/Certificates tab.
///
/// The visible subset is memoized as catalog indices and recomputed only
/// when the active certificate changes.
#[derive(Debug, Clone)]
pub struct CrossFilterController {
    portfolio: Arc<Portfolio>,
    state: CrossFilterState,
    visible: Vec<usize>,
}

impl CrossFilterController {
    pub fn new(portfolio: Arc<Portfolio>) -> Self {
        let visible = (0..portfolio.skills().len()).collect();
        Self {
            portfolio,
            state: CrossFilterState::default(),
            visible,
        }
    }

    pub fn state(&self) -> &CrossFilterState {
        &self.state
    }

    pub fn active_tab(&self) -> SkillsTab {
        self.state.active_tab
    }

    /// The certificate currently filtering the skill grid, if any.
    pub fn active_certificate(&self) -> Option<&CertificateEntry> {
        self.state
            .active_certificate
            .as_ref()
            .and_then(|id| self.portfolio.certificates().get(id))
    }

    pub fn is_filtered(&self) -> bool {
        self.state.active_certificate.is_some()
    }

    /// Filter the skill grid by `id` and switch to the Skills tab.
    ///
    /// Returns the scroll request for the view. An id that is not in the
    /// catalog leaves the state untouched and returns `None`.
    pub fn select_certificate(&mut self, id: &CertificateId) -> Option<ViewCommand> {
        let Some(cert) = self.portfolio.certificates().get(id) else {
            debug!(certificate = %id, "ignoring selection of unknown certificate");
            return None;
        };

        if self.state.active_certificate.as_ref() != Some(id) {
            self.visible = self
                .portfolio
                .skills()
                .entries()
                .iter()
                .enumerate()
                .filter(|(_, skill)| certificate_matches_skill(cert, skill))
                .map(|(i, _)| i)
                .collect();
            self.state.active_certificate = Some(id.clone());
        }
        self.state.active_tab = SkillsTab::Skills;

        debug!(
            certificate = %id,
            matching = self.visible.len(),
            "certificate filter applied"
        );
        Some(ViewCommand::ScrollTo(Section::Skills))
    }

    /// Drop the certificate filter. Returns `false` if there was none.
    pub fn clear_filter(&mut self) -> bool {
        if self.state.active_certificate.take().is_none() {
            return false;
        }
        self.visible = (0..self.portfolio.skills().len()).collect();
        debug!("certificate filter cleared");
        true
    }

    /// Switch tabs. The filter is kept for when the user returns.
    pub fn set_tab(&mut self, tab: SkillsTab) {
        self.state.active_tab = tab;
    }

    /// Skills to render, in catalog order.
    pub fn visible_skills(&self) -> impl Iterator<Item = &SkillEntry> + '_ {
        let skills = self.portfolio.skills();
        self.visible.iter().filter_map(move |&i| skills.get(i))
    }

    /// Visible skill at a grid position.
    pub fn visible_skill(&self, position: usize) -> Option<&SkillEntry> {
        self.visible
            .get(position)
            .and_then(|&i| self.portfolio.skills().get(i))
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Skills validated by `cert`, independent of the active filter.
    pub fn related_skills(&self, cert: &CertificateEntry) -> Vec<&SkillEntry> {
        related_skills(self.portfolio.skills(), cert)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::{CategoryContent, CertificateContent, PortfolioContent, SkillContent};
    use pretty_assertions::assert_eq;

    fn skill(name: &str, tags: &[&str]) -> SkillContent {
        SkillContent {
            name: name.into(),
            level: 70,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    fn cert(id: &str, tags: &[&str]) -> CertificateContent {
        CertificateContent {
            id: id.into(),
            title: id.to_uppercase(),
            issuer: "Issuer".into(),
            date: "2025".into(),
            image: String::new(),
            link: String::new(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    fn portfolio(skills: Vec<SkillContent>, certs: Vec<CertificateContent>) -> Arc<Portfolio> {
        let content = PortfolioContent {
            categories: vec![CategoryContent {
                id: "all".into(),
                title: "All".into(),
                skills,
            }],
            certificates: certs,
            ..PortfolioContent::default()
        };
        Arc::new(Portfolio::from_content(content).unwrap())
    }

    fn sample() -> Arc<Portfolio> {
        portfolio(
            vec![
                skill("React", &["Hooks"]),
                skill("Java", &["Spring Boot"]),
                skill("Python", &["Pandas", "NumPy"]),
                skill("HTML", &["CSS", "JavaScript"]),
            ],
            vec![
                cert("react", &["react"]),
                cert("chain", &["Blockchain"]),
                cert("spring", &["Spring"]),
                cert("web", &["javascript essentials", "react hooks"]),
            ],
        )
    }

    fn visible_names(ctl: &CrossFilterController) -> Vec<String> {
        ctl.visible_skills().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn initial_state_shows_everything_on_skills_tab() {
        let ctl = CrossFilterController::new(sample());
        assert_eq!(ctl.state(), &CrossFilterState::default());
        assert_eq!(ctl.active_tab(), SkillsTab::Skills);
        assert_eq!(visible_names(&ctl), ["React", "Java", "Python", "HTML"]);
    }

    #[test]
    fn scenario_react_certificate_then_clear() {
        let p = portfolio(
            vec![skill("React", &["Hooks"]), skill("Java", &["Spring Boot"])],
            vec![cert("c", &["react"])],
        );
        let mut ctl = CrossFilterController::new(p);

        let cmd = ctl.select_certificate(&"c".into());
        assert_eq!(cmd, Some(ViewCommand::ScrollTo(Section::Skills)));
        assert_eq!(visible_names(&ctl), ["React"]);

        assert!(ctl.clear_filter());
        assert_eq!(visible_names(&ctl), ["React", "Java"]);
    }

    #[test]
    fn filter_matches_substring_rule_for_every_certificate() {
        // Independent restatement: some certificate tag and some candidate
        // (name or tag) contain one another, ignoring case.
        fn related(cert_tags: &[String], candidates: &[String]) -> bool {
            cert_tags.iter().any(|t| {
                let t = t.to_lowercase();
                candidates.iter().any(|c| {
                    let c = c.to_lowercase();
                    t.contains(&c) || c.contains(&t)
                })
            })
        }

        let expected: [(&str, &[&str]); 4] = [
            ("react", &["React"]),
            ("chain", &[]),
            ("spring", &["Java"]),
            ("web", &["React", "Java", "HTML"]),
        ];

        let p = sample();
        for (id, names) in expected {
            let cert = p.certificates().get(&id.into()).unwrap();
            let cert_tags: Vec<String> = cert.tags.iter().cloned().collect();
            let by_rule: Vec<&str> = p
                .skills()
                .entries()
                .iter()
                .filter(|s| {
                    let mut candidates = vec![s.name.clone()];
                    candidates.extend(s.tags.iter().cloned());
                    related(&cert_tags, &candidates)
                })
                .map(|s| s.name.as_str())
                .collect();
            assert_eq!(by_rule, names, "rule for certificate {id}");

            let mut ctl = CrossFilterController::new(Arc::clone(&p));
            ctl.select_certificate(&id.into());
            let actual: Vec<&str> = ctl.visible_skills().map(|s| s.name.as_str()).collect();
            assert_eq!(actual, names, "certificate {id}");
        }
    }

    #[test]
    fn skill_tag_containing_certificate_tag_matches() {
        let mut ctl = CrossFilterController::new(sample());
        ctl.select_certificate(&"spring".into());
        assert_eq!(visible_names(&ctl), ["Java"]);
    }

    #[test]
    fn certificate_tag_containing_skill_name_matches() {
        let mut ctl = CrossFilterController::new(sample());
        ctl.select_certificate(&"web".into());
        // "javascript essentials" contains both "java" and "javascript"
        assert_eq!(visible_names(&ctl), ["React", "Java", "HTML"]);
    }

    #[test]
    fn unmatched_certificate_yields_empty_grid() {
        let mut ctl = CrossFilterController::new(sample());
        ctl.select_certificate(&"chain".into());
        assert_eq!(ctl.visible_count(), 0);
        assert!(ctl.visible_skills().next().is_none());
        assert!(ctl.is_filtered());
    }

    #[test]
    fn selecting_forces_skills_tab() {
        let mut ctl = CrossFilterController::new(sample());
        ctl.set_tab(SkillsTab::Certificates);
        ctl.select_certificate(&"react".into());
        assert_eq!(ctl.active_tab(), SkillsTab::Skills);
    }

    #[test]
    fn clear_restores_full_catalog_in_order() {
        let mut ctl = CrossFilterController::new(sample());
        let before = visible_names(&ctl);
        ctl.select_certificate(&"spring".into());
        ctl.select_certificate(&"chain".into());
        ctl.clear_filter();
        assert_eq!(visible_names(&ctl), before);
        assert!(ctl.active_certificate().is_none());
    }

    #[test]
    fn clear_without_filter_is_noop() {
        let mut ctl = CrossFilterController::new(sample());
        assert!(!ctl.clear_filter());
        assert_eq!(ctl.state(), &CrossFilterState::default());
    }

    #[test]
    fn tab_round_trip_keeps_filter() {
        let mut ctl = CrossFilterController::new(sample());
        ctl.select_certificate(&"web".into());
        let before = visible_names(&ctl);

        ctl.set_tab(SkillsTab::Certificates);
        ctl.set_tab(SkillsTab::Skills);

        assert_eq!(visible_names(&ctl), before);
        assert_eq!(
            ctl.state().active_certificate,
            Some(CertificateId::new("web"))
        );
    }

    #[test]
    fn unknown_certificate_leaves_state_unchanged() {
        let mut ctl = CrossFilterController::new(sample());
        ctl.select_certificate(&"spring".into());
        ctl.set_tab(SkillsTab::Certificates);
        let before = ctl.state().clone();

        assert_eq!(ctl.select_certificate(&"missing".into()), None);
        assert_eq!(ctl.state(), &before);
        assert_eq!(visible_names(&ctl), ["Java"]);
    }

    #[test]
    fn related_skills_ignore_active_filter() {
        let p = sample();
        let mut ctl = CrossFilterController::new(Arc::clone(&p));
        ctl.select_certificate(&"chain".into());

        let react = p.certificates().get(&"react".into()).unwrap();
        let related: Vec<&str> = ctl
            .related_skills(react)
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(related, ["React"]);
    }

    #[test]
    fn tab_labels() {
        assert_eq!(SkillsTab::Skills.to_string(), "Technical Skills");
        assert_eq!(SkillsTab::Certificates.to_string(), "Certifications");
    }
}
