//! Screen implementations. Each screen is a top-level Component.

pub mod about;
pub mod journey;
pub mod projects;
pub mod skills;

use std::sync::Arc;
use std::time::Duration;

use folio_config::Config;
use folio_core::Portfolio;

use crate::component::Component;
use crate::screen::ScreenId;

/// Create one component per tab-bar screen.
pub fn create_screens(
    portfolio: &Arc<Portfolio>,
    config: &Config,
) -> Vec<(ScreenId, Box<dyn Component>)> {
    let reduced_motion = config.effective_tilt().reduced_motion;
    vec![
        (
            ScreenId::About,
            Box::new(about::AboutScreen::new(
                Arc::clone(portfolio),
                config.ui.backdrop,
                reduced_motion,
            )),
        ),
        (
            ScreenId::Journey,
            Box::new(journey::JourneyScreen::new(Arc::clone(portfolio))),
        ),
        (
            ScreenId::Skills,
            Box::new(skills::SkillsScreen::new(
                Arc::clone(portfolio),
                config.effective_tilt(),
                Duration::from_millis(config.ui.render_rate_ms),
            )),
        ),
        (
            ScreenId::Projects,
            Box::new(projects::ProjectsScreen::new(Arc::clone(portfolio))),
        ),
    ]
}
