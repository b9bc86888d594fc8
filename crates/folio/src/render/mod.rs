pub mod image_cache;
pub mod overlays;
pub mod sections;

use eframe::egui;

use crate::content::ProjectRecord;
use crate::theme::Theme;

/// Character limit for the description snippet on a project card.
pub const CARD_SNIPPET_LEN: usize = 100;
/// Character limit before the detail overlay collapses a description.
pub const DETAIL_SNIPPET_LEN: usize = 200;

/// Per-section load state. Sections arrive independently; one failing never
/// blocks another.
#[derive(Debug, Clone)]
pub enum SectionState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for SectionState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Experience,
    Gallery,
    Skills,
    Contact,
}

impl SectionId {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "home" => Some(Self::Home),
            "about" => Some(Self::About),
            "projects" => Some(Self::Projects),
            "experience" => Some(Self::Experience),
            "gallery" => Some(Self::Gallery),
            "skills" => Some(Self::Skills),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About Me",
            Self::Projects => "Projects",
            Self::Experience => "Work Experience",
            Self::Gallery => "Gallery",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }
}

/// Deferred interactions produced while drawing; applied by the app after
/// the frame so section renderers stay borrow-free of app state.
#[derive(Debug, Clone)]
pub enum PageAction {
    OpenViewer { images: Vec<String>, index: usize },
    OpenDetail(ProjectRecord),
    OpenFullGallery,
    ScrollTo(SectionId),
}

/// Truncate at the last space before `limit` characters and append an
/// ellipsis. `None` when the text already fits.
pub fn snippet(text: &str, limit: usize) -> Option<String> {
    if text.chars().count() <= limit {
        return None;
    }
    let mut cut: String = text.chars().take(limit).collect();
    if let Some(i) = cut.rfind(' ') {
        if i > 0 {
            cut.truncate(i);
        }
    }
    Some(format!("{cut}..."))
}

/// Card descriptions flatten line breaks into spaces before truncation.
pub fn flatten_newlines(text: &str) -> String {
    text.replace('\n', " ")
}

/// Section heading, scrolled into view when it is the pending target.
pub fn section_heading(
    ui: &mut egui::Ui,
    theme: &Theme,
    id: SectionId,
    scroll_to: &mut Option<SectionId>,
) {
    let resp = ui.label(
        egui::RichText::new(id.title())
            .size(theme.h2_size)
            .color(theme.heading_color)
            .strong(),
    );
    if *scroll_to == Some(id) {
        resp.scroll_to_me(Some(egui::Align::Min));
        *scroll_to = None;
    }
    ui.add_space(8.0);
}

pub fn loading_line(ui: &mut egui::Ui, theme: &Theme, what: &str) {
    ui.label(
        egui::RichText::new(format!("Loading {what}..."))
            .size(theme.body_size)
            .color(Theme::with_opacity(theme.foreground, 0.6))
            .italics(),
    );
}

pub fn error_line(ui: &mut egui::Ui, theme: &Theme, message: &str) {
    ui.label(
        egui::RichText::new(message)
            .size(theme.body_size)
            .color(theme.error),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_not_snipped() {
        assert_eq!(snippet("short", 100), None);
    }

    #[test]
    fn snippet_breaks_at_the_last_space() {
        let text = "alpha beta gamma delta";
        // limit falls inside "gamma"
        assert_eq!(snippet(text, 13).as_deref(), Some("alpha beta..."));
    }

    #[test]
    fn snippet_without_spaces_hard_cuts() {
        let text = "a".repeat(30);
        assert_eq!(snippet(&text, 10).as_deref(), Some("aaaaaaaaaa..."));
    }

    #[test]
    fn exact_limit_is_not_snipped() {
        let text = "x".repeat(200);
        assert_eq!(snippet(&text, 200), None);
    }

    #[test]
    fn newlines_flatten_for_cards() {
        assert_eq!(flatten_newlines("a\nb\nc"), "a b c");
    }
}
