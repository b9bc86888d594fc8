use eframe::egui;

use crate::content::ContactEntry;
use crate::render::{self, SectionId, SectionState};
use crate::theme::Theme;

pub fn draw(
    ui: &mut egui::Ui,
    theme: &Theme,
    state: &SectionState<Vec<ContactEntry>>,
    scroll_to: &mut Option<SectionId>,
) {
    render::section_heading(ui, theme, SectionId::Contact, scroll_to);

    match state {
        SectionState::Loading => render::loading_line(ui, theme, "contact details"),
        SectionState::Failed(msg) => render::error_line(ui, theme, msg),
        SectionState::Ready(entries) => {
            for entry in entries {
                draw_entry(ui, theme, entry);
            }
        }
    }
    ui.add_space(36.0);
}

fn draw_entry(ui: &mut egui::Ui, theme: &Theme, entry: &ContactEntry) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(entry.kind.glyph())
                .size(theme.body_size)
                .color(theme.accent),
        );
        match &entry.target {
            Some(target) => {
                let link = ui.link(
                    egui::RichText::new(&entry.label)
                        .size(theme.body_size)
                        .color(theme.accent),
                );
                if link.clicked() {
                    let url = if entry.opens_externally() {
                        egui::OpenUrl::new_tab(target)
                    } else {
                        egui::OpenUrl::same_tab(target)
                    };
                    ui.ctx().open_url(url);
                }
                link.on_hover_text(target);
            }
            None => {
                ui.label(
                    egui::RichText::new(&entry.label)
                        .size(theme.body_size)
                        .color(theme.foreground),
                );
            }
        }
    });
}
