use eframe::egui;

use crate::content::SkillCategory;
use crate::render::{self, SectionId, SectionState};
use crate::theme::Theme;

/// Display name for the implicit category of uncategorized lines.
const STANDALONE_TITLE: &str = "Technical Proficiencies";

pub fn draw(
    ui: &mut egui::Ui,
    theme: &Theme,
    state: &SectionState<Vec<SkillCategory>>,
    scroll_to: &mut Option<SectionId>,
) {
    render::section_heading(ui, theme, SectionId::Skills, scroll_to);

    match state {
        SectionState::Loading => render::loading_line(ui, theme, "skills"),
        SectionState::Failed(msg) => render::error_line(ui, theme, msg),
        SectionState::Ready(categories) => {
            for category in categories {
                let title = category.name.as_deref().unwrap_or(STANDALONE_TITLE);
                ui.label(
                    egui::RichText::new(title)
                        .size(theme.h3_size)
                        .color(theme.heading_color),
                );
                ui.horizontal_wrapped(|ui| {
                    for item in &category.items {
                        egui::Frame::new()
                            .fill(theme.panel_background)
                            .corner_radius(10.0)
                            .inner_margin(egui::Margin::symmetric(10, 4))
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new(item)
                                        .size(theme.body_size)
                                        .color(theme.foreground),
                                );
                            });
                    }
                });
                ui.add_space(10.0);
            }
        }
    }
    ui.add_space(28.0);
}
