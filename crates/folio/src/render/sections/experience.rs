use eframe::egui;

use crate::content::ExperienceRecord;
use crate::render::{self, SectionId, SectionState};
use crate::theme::Theme;

pub fn draw(
    ui: &mut egui::Ui,
    theme: &Theme,
    state: &SectionState<Vec<ExperienceRecord>>,
    scroll_to: &mut Option<SectionId>,
) {
    render::section_heading(ui, theme, SectionId::Experience, scroll_to);

    match state {
        SectionState::Loading => render::loading_line(ui, theme, "work experience"),
        SectionState::Failed(msg) => render::error_line(ui, theme, msg),
        SectionState::Ready(records) => {
            for record in records {
                draw_record(ui, theme, record);
                ui.add_space(16.0);
            }
        }
    }
    ui.add_space(28.0);
}

fn draw_record(ui: &mut egui::Ui, theme: &Theme, record: &ExperienceRecord) {
    ui.label(
        egui::RichText::new(&record.title)
            .size(theme.h3_size)
            .color(theme.heading_color)
            .strong(),
    );
    ui.label(
        egui::RichText::new(&record.company)
            .size(theme.body_size)
            .color(theme.accent),
    );
    ui.label(
        egui::RichText::new(&record.date_range)
            .size(theme.caption_size)
            .color(Theme::with_opacity(theme.foreground, 0.7))
            .italics(),
    );

    for item in &record.responsibilities {
        let mut lines = item.lines();
        if let Some(first) = lines.next() {
            ui.label(
                egui::RichText::new(format!("\u{2022} {first}"))
                    .size(theme.body_size)
                    .color(theme.foreground),
            );
        }
        // continuation lines indent under their bullet
        for rest in lines {
            ui.label(
                egui::RichText::new(format!("   {rest}"))
                    .size(theme.body_size)
                    .color(theme.foreground),
            );
        }
    }
}
