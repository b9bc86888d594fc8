use eframe::egui;

use crate::render::{PageAction, SectionId};
use crate::theme::Theme;

const TITLE: &str = "Welcome to My Portfolio";
const SUBTITLE: &str = "Game Developer & Web Designer";
const TAGLINE: &str =
    "Creating immersive experiences and innovative solutions through code and creativity.";

pub fn draw(
    ui: &mut egui::Ui,
    theme: &Theme,
    scroll_to: &mut Option<SectionId>,
) -> Option<PageAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(36.0);
        let title = ui.label(
            egui::RichText::new(TITLE)
                .size(theme.h1_size)
                .color(theme.heading_color)
                .strong(),
        );
        if *scroll_to == Some(SectionId::Home) {
            title.scroll_to_me(Some(egui::Align::Min));
            *scroll_to = None;
        }
        ui.label(
            egui::RichText::new(SUBTITLE)
                .size(theme.h3_size)
                .color(theme.accent),
        );
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(TAGLINE)
                .size(theme.body_size)
                .color(theme.foreground),
        );
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            // center the two buttons by padding half the leftover width
            let button_span = 260.0;
            let pad = ((ui.available_width() - button_span) / 2.0).max(0.0);
            ui.add_space(pad);
            if ui.button("View My Work").clicked() {
                action = Some(PageAction::ScrollTo(SectionId::Projects));
            }
            if ui.button("Get In Touch").clicked() {
                action = Some(PageAction::ScrollTo(SectionId::Contact));
            }
        });
        ui.add_space(28.0);
    });

    action
}
