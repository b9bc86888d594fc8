use eframe::egui;

use crate::render::image_cache::ImageCache;
use crate::render::{self, PageAction, SectionId, SectionState};
use crate::theme::Theme;

/// Number of thumbnails shown inline before the full-gallery overlay.
const PREVIEW_COUNT: usize = 4;
const THUMB_SIZE: f32 = 150.0;

pub fn draw(
    ui: &mut egui::Ui,
    theme: &Theme,
    cache: &ImageCache,
    state: &SectionState<Vec<String>>,
    scroll_to: &mut Option<SectionId>,
) -> Option<PageAction> {
    render::section_heading(ui, theme, SectionId::Gallery, scroll_to);

    let mut action = None;
    match state {
        SectionState::Loading => render::loading_line(ui, theme, "gallery preview"),
        SectionState::Failed(msg) => render::error_line(ui, theme, msg),
        SectionState::Ready(filenames) if filenames.is_empty() => {
            ui.label(
                egui::RichText::new("No images in the gallery yet.")
                    .size(theme.body_size)
                    .color(Theme::with_opacity(theme.foreground, 0.6)),
            );
        }
        SectionState::Ready(filenames) => {
            ui.horizontal_wrapped(|ui| {
                for (index, name) in filenames.iter().take(PREVIEW_COUNT).enumerate() {
                    match cache.get_or_load(ui.ctx(), name) {
                        Some(texture) => {
                            let img = egui::Image::new(&texture)
                                .fit_to_exact_size(egui::vec2(THUMB_SIZE, THUMB_SIZE))
                                .sense(egui::Sense::click());
                            if ui.add(img).clicked() {
                                action = Some(PageAction::OpenViewer {
                                    images: filenames.clone(),
                                    index,
                                });
                            }
                        }
                        None => render::error_line(ui, theme, &format!("Error loading {name}")),
                    }
                }
            });
            ui.add_space(8.0);
            if ui.button("View Full Gallery").clicked() {
                action = Some(PageAction::OpenFullGallery);
            }
        }
    }
    ui.add_space(28.0);
    action
}
