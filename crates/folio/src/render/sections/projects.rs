use eframe::egui;

use crate::content::ProjectRecord;
use crate::render::image_cache::ImageCache;
use crate::render::{self, PageAction, SectionId, SectionState};
use crate::theme::Theme;

const CARD_WIDTH: f32 = 300.0;
const CARD_IMAGE_HEIGHT: f32 = 160.0;

pub fn draw(
    ui: &mut egui::Ui,
    theme: &Theme,
    cache: &ImageCache,
    state: &SectionState<Vec<ProjectRecord>>,
    scroll_to: &mut Option<SectionId>,
) -> Option<PageAction> {
    render::section_heading(ui, theme, SectionId::Projects, scroll_to);

    let mut action = None;
    match state {
        SectionState::Loading => render::loading_line(ui, theme, "projects"),
        SectionState::Failed(msg) => render::error_line(ui, theme, msg),
        SectionState::Ready(projects) => {
            ui.horizontal_wrapped(|ui| {
                for project in projects {
                    if let Some(card_action) = draw_card(ui, theme, cache, project) {
                        action = Some(card_action);
                    }
                }
            });
        }
    }
    ui.add_space(28.0);
    action
}

fn draw_card(
    ui: &mut egui::Ui,
    theme: &Theme,
    cache: &ImageCache,
    project: &ProjectRecord,
) -> Option<PageAction> {
    let mut action = None;
    let mut image_clicked = false;

    let frame = egui::Frame::group(ui.style())
        .fill(theme.panel_background)
        .corner_radius(6.0)
        .inner_margin(12.0);

    let response = frame
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.label(
                egui::RichText::new(&project.title)
                    .size(theme.h3_size)
                    .color(theme.heading_color)
                    .strong(),
            );
            if !project.subtitle.is_empty() {
                ui.label(
                    egui::RichText::new(&project.subtitle)
                        .size(theme.body_size)
                        .color(theme.accent),
                );
            }

            let flat = render::flatten_newlines(&project.description);
            let card_text =
                render::snippet(&flat, render::CARD_SNIPPET_LEN).unwrap_or(flat);
            ui.label(
                egui::RichText::new(card_text)
                    .size(theme.body_size)
                    .color(theme.foreground),
            );
            ui.add_space(6.0);

            match project.images.first() {
                Some(first) => {
                    // Card shows the first image; the viewer gets all of them.
                    if let Some(texture) = cache.get_or_load(ui.ctx(), first) {
                        let img = egui::Image::new(&texture)
                            .fit_to_exact_size(egui::vec2(CARD_WIDTH, CARD_IMAGE_HEIGHT))
                            .sense(egui::Sense::click());
                        if ui.add(img).clicked() {
                            image_clicked = true;
                            action = Some(PageAction::OpenViewer {
                                images: project.images.clone(),
                                index: 0,
                            });
                        }
                    } else {
                        render::error_line(ui, theme, &format!("Error loading {first}"));
                    }
                }
                None => {
                    ui.label(
                        egui::RichText::new("No images specified for this project.")
                            .size(theme.caption_size)
                            .color(Theme::with_opacity(theme.foreground, 0.6)),
                    );
                }
            }
        })
        .response;

    // Clicking anywhere else on the card opens the detail overlay; the
    // image click above takes precedence.
    if !image_clicked
        && response
            .interact(egui::Sense::click())
            .clicked()
    {
        action = Some(PageAction::OpenDetail(project.clone()));
    }

    action
}
