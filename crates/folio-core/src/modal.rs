// ── Detail overlay state ──
//
// At most one detail overlay is open. The single `Option<DetailTarget>`
// makes a second simultaneous overlay unrepresentable.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::Portfolio;
use crate::model::{CertificateId, ProjectId};

/// Catalog an overlay draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    Project,
    Certificate,
}

/// What a detail overlay is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailTarget {
    Project(ProjectId),
    Certificate(CertificateId),
}

impl DetailTarget {
    pub fn kind(&self) -> DetailKind {
        match self {
            Self::Project(_) => DetailKind::Project,
            Self::Certificate(_) => DetailKind::Certificate,
        }
    }
}

/// Owns which detail overlay, if any, is mounted.
#[derive(Debug, Clone)]
pub struct DetailModalController {
    portfolio: Arc<Portfolio>,
    open: Option<DetailTarget>,
}

impl DetailModalController {
    pub fn new(portfolio: Arc<Portfolio>) -> Self {
        Self {
            portfolio,
            open: None,
        }
    }

    /// Open `target`, replacing whatever was open. Returns `false` and
    /// leaves the state alone when the id is not in its catalog.
    pub fn open(&mut self, target: DetailTarget) -> bool {
        let exists = match &target {
            DetailTarget::Project(id) => self.portfolio.projects().contains(*id),
            DetailTarget::Certificate(id) => self.portfolio.certificates().contains(id),
        };
        if !exists {
            debug!(?target, "ignoring detail request for unknown entry");
            return false;
        }

        if let Some(previous) = self.open.replace(target) {
            debug!(?previous, "detail overlay replaced");
        }
        true
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn current(&self) -> Option<&DetailTarget> {
        self.open.as_ref()
    }

    pub fn open_kind(&self) -> Option<DetailKind> {
        self.open.as_ref().map(DetailTarget::kind)
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::{CertificateContent, PortfolioContent};
    use crate::model::ProjectEntry;

    fn portfolio() -> Arc<Portfolio> {
        let project = |id: u32| ProjectEntry {
            id: ProjectId::new(id),
            title: format!("P{id}"),
            subtitle: String::new(),
            description: String::new(),
            detail_text: String::new(),
            icon_ref: String::new(),
            tags: Vec::new(),
            github_link: String::new(),
            demo_link: String::new(),
        };
        let content = PortfolioContent {
            projects: vec![project(1), project(2)],
            certificates: vec![CertificateContent {
                id: "aws".into(),
                title: "AWS".into(),
                issuer: String::new(),
                date: String::new(),
                image: String::new(),
                link: String::new(),
                tags: Vec::new(),
            }],
            ..PortfolioContent::default()
        };
        Arc::new(Portfolio::from_content(content).unwrap())
    }

    #[test]
    fn starts_closed() {
        let modal = DetailModalController::new(portfolio());
        assert!(!modal.is_open());
        assert_eq!(modal.open_kind(), None);
    }

    #[test]
    fn latest_open_wins() {
        let mut modal = DetailModalController::new(portfolio());
        let sequence = [
            DetailTarget::Project(ProjectId::new(1)),
            DetailTarget::Certificate("aws".into()),
            DetailTarget::Project(ProjectId::new(2)),
        ];
        for target in sequence {
            assert!(modal.open(target.clone()));
            assert_eq!(modal.current(), Some(&target));
        }
        assert_eq!(modal.open_kind(), Some(DetailKind::Project));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut modal = DetailModalController::new(portfolio());
        modal.open(DetailTarget::Certificate("aws".into()));

        assert!(!modal.open(DetailTarget::Project(ProjectId::new(99))));
        assert!(!modal.open(DetailTarget::Certificate("gcp".into())));
        assert_eq!(
            modal.current(),
            Some(&DetailTarget::Certificate("aws".into()))
        );
    }

    #[test]
    fn close_is_unconditional() {
        let mut modal = DetailModalController::new(portfolio());
        modal.close();
        assert!(!modal.is_open());

        modal.open(DetailTarget::Project(ProjectId::new(1)));
        modal.close();
        assert_eq!(modal.current(), None);
    }
}
