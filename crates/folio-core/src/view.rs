// ── View-level vocabulary shared by controllers and renderers ──

use strum::{Display, EnumIter};

/// Top-level portfolio sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum Section {
    #[default]
    About,
    Journey,
    Skills,
    Projects,
}

/// A side effect a controller asks the rendering layer to perform.
///
/// Controllers never touch the view directly; they hand these back from
/// state transitions and the view decides how to honour them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    /// Bring a section into view, scrolled to its top.
    ScrollTo(Section),
}
