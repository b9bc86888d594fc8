use eframe::egui;

use crate::render::{self, SectionId, SectionState};
use crate::theme::Theme;

pub fn draw(
    ui: &mut egui::Ui,
    theme: &Theme,
    state: &SectionState<String>,
    scroll_to: &mut Option<SectionId>,
) {
    render::section_heading(ui, theme, SectionId::About, scroll_to);

    match state {
        SectionState::Loading => render::loading_line(ui, theme, "about me"),
        SectionState::Failed(msg) => render::error_line(ui, theme, msg),
        SectionState::Ready(text) => {
            ui.label(
                egui::RichText::new(text.trim())
                    .size(theme.body_size)
                    .color(theme.foreground),
            );
        }
    }
    ui.add_space(28.0);
}
