//! Full-gallery overlay: a scrollable grid of every gallery image. The list is
//! captured when the overlay opens, so a reload while it is up does not shuffle
//! the thumbnails under the cursor.

use std::time::Instant;

use eframe::egui::{self, Color32, Rect, Sense};

use super::Activation;
use crate::render::image_cache::ImageCache;
use crate::theme::Theme;

const THUMB_SIZE: f32 = 180.0;

pub struct FullGalleryOverlay {
    filenames: Vec<String>,
    activation: Activation,
}

impl FullGalleryOverlay {
    pub fn new(filenames: Vec<String>) -> Self {
        Self {
            filenames,
            activation: Activation::new(),
        }
    }
}

pub enum FullGalleryAction {
    Close,
    OpenViewer { images: Vec<String>, index: usize },
}

pub fn draw(
    ctx: &egui::Context,
    overlay: &mut FullGalleryOverlay,
    cache: &ImageCache,
    theme: &Theme,
) -> Option<FullGalleryAction> {
    let now = Instant::now();
    overlay.activation.tick(now);
    let fade = overlay.activation.opacity(now);

    let mut action = None;
    let screen = ctx.screen_rect();
    let panel_rect = screen.shrink2(egui::vec2(
        (screen.width() * 0.08).min(80.0),
        (screen.height() * 0.06).min(50.0),
    ));

    egui::Area::new(egui::Id::new("full-gallery-overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let backdrop = ui.allocate_rect(screen, Sense::click());
            ui.painter()
                .rect_filled(screen, 0.0, Theme::with_opacity(Color32::BLACK, fade * 0.85));

            ui.allocate_rect(panel_rect, Sense::click());

            let mut panel_ui = ui.new_child(
                egui::UiBuilder::new()
                    .max_rect(panel_rect)
                    .id_salt("full-gallery-panel"),
            );
            egui::Frame::new()
                .fill(theme.panel_background)
                .corner_radius(8.0)
                .inner_margin(16.0)
                .show(&mut panel_ui, |ui| {
                    ui.set_min_size(panel_rect.size() - egui::vec2(32.0, 32.0));
                    if let Some(a) = draw_grid(ui, overlay, panel_rect, cache, theme) {
                        action = Some(a);
                    }
                });

            if backdrop.clicked() {
                action = Some(FullGalleryAction::Close);
            }
        });

    ctx.request_repaint();
    action
}

fn draw_grid(
    ui: &mut egui::Ui,
    overlay: &FullGalleryOverlay,
    panel_rect: Rect,
    cache: &ImageCache,
    theme: &Theme,
) -> Option<FullGalleryAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("Photo Gallery")
                .size(theme.h2_size)
                .color(theme.heading_color)
                .strong(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if ui.button("\u{2715}").clicked() {
                action = Some(FullGalleryAction::Close);
            }
        });
    });
    ui.add_space(10.0);

    let columns = ((panel_rect.width() / (THUMB_SIZE + 16.0)) as usize).max(1);
    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("full-gallery-grid")
            .num_columns(columns)
            .spacing(egui::vec2(12.0, 12.0))
            .show(ui, |ui| {
                for (index, name) in overlay.filenames.iter().enumerate() {
                    match cache.get_or_load(ui.ctx(), name) {
                        Some(texture) => {
                            let img = egui::Image::new(&texture)
                                .fit_to_exact_size(egui::vec2(THUMB_SIZE, THUMB_SIZE))
                                .sense(egui::Sense::click());
                            if ui.add(img).clicked() {
                                action = Some(FullGalleryAction::OpenViewer {
                                    images: overlay.filenames.clone(),
                                    index,
                                });
                            }
                        }
                        None => {
                            let (rect, _) = ui.allocate_exact_size(
                                egui::vec2(THUMB_SIZE, THUMB_SIZE),
                                Sense::hover(),
                            );
                            ui.painter().rect_filled(
                                rect,
                                4.0,
                                Theme::with_opacity(theme.error, 0.2),
                            );
                            ui.painter().text(
                                rect.center(),
                                egui::Align2::CENTER_CENTER,
                                "\u{26A0}",
                                egui::FontId::proportional(theme.body_size),
                                theme.error,
                            );
                        }
                    }
                    if (index + 1) % columns == 0 {
                        ui.end_row();
                    }
                }
            });
    });

    action
}
