//! Project detail overlay: title, subtitle, expandable description and the
//! project's image list. Clicking an image hands off to the image viewer.

use std::time::Instant;

use eframe::egui::{self, Color32, Rect, Sense};

use super::Activation;
use crate::content::ProjectRecord;
use crate::render::image_cache::ImageCache;
use crate::render::{self, DETAIL_SNIPPET_LEN};
use crate::theme::Theme;

pub struct DetailOverlay {
    pub project: ProjectRecord,
    expanded: bool,
    activation: Activation,
}

impl DetailOverlay {
    pub fn new(project: ProjectRecord) -> Self {
        Self {
            project,
            expanded: false,
            activation: Activation::new(),
        }
    }
}

pub enum DetailAction {
    Close,
    OpenViewer { images: Vec<String>, index: usize },
}

pub fn draw(
    ctx: &egui::Context,
    overlay: &mut DetailOverlay,
    cache: &ImageCache,
    theme: &Theme,
) -> Option<DetailAction> {
    let now = Instant::now();
    overlay.activation.tick(now);
    let fade = overlay.activation.opacity(now);

    let mut action = None;
    let screen = ctx.screen_rect();
    let panel_rect = Rect::from_center_size(
        screen.center(),
        egui::vec2(
            (screen.width() * 0.8).min(680.0),
            screen.height() * 0.82,
        ),
    );

    egui::Area::new(egui::Id::new("project-detail-overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let backdrop = ui.allocate_rect(screen, Sense::click());
            ui.painter()
                .rect_filled(screen, 0.0, Theme::with_opacity(Color32::BLACK, fade * 0.8));

            // Catch clicks on the panel body so they do not close the overlay.
            ui.allocate_rect(panel_rect, Sense::click());

            let mut panel_ui = ui.new_child(
                egui::UiBuilder::new()
                    .max_rect(panel_rect)
                    .id_salt("detail-panel"),
            );
            egui::Frame::new()
                .fill(theme.panel_background)
                .corner_radius(8.0)
                .inner_margin(20.0)
                .show(&mut panel_ui, |ui| {
                    ui.set_min_size(panel_rect.size() - egui::vec2(40.0, 40.0));
                    if let Some(a) = draw_body(ui, overlay, cache, theme) {
                        action = Some(a);
                    }
                });

            if backdrop.clicked() {
                action = Some(DetailAction::Close);
            }
        });

    ctx.request_repaint();
    action
}

fn draw_body(
    ui: &mut egui::Ui,
    overlay: &mut DetailOverlay,
    cache: &ImageCache,
    theme: &Theme,
) -> Option<DetailAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(&overlay.project.title)
                .size(theme.h2_size)
                .color(theme.heading_color)
                .strong(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if ui.button("\u{2715}").clicked() {
                action = Some(DetailAction::Close);
            }
        });
    });
    if !overlay.project.subtitle.is_empty() {
        ui.label(
            egui::RichText::new(&overlay.project.subtitle)
                .size(theme.h3_size)
                .color(theme.accent),
        );
    }
    ui.add_space(10.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        let description = overlay.project.description.clone();
        match render::snippet(&description, DETAIL_SNIPPET_LEN) {
            Some(snip) if !overlay.expanded => {
                body_text(ui, theme, &snip);
                if ui.button("Read more").clicked() {
                    overlay.expanded = true;
                }
            }
            Some(_) => {
                body_text(ui, theme, &description);
                if ui.button("Read less").clicked() {
                    overlay.expanded = false;
                }
            }
            None => body_text(ui, theme, &description),
        }
        ui.add_space(12.0);

        for (index, name) in overlay.project.images.iter().enumerate() {
            match cache.get_or_load(ui.ctx(), name) {
                Some(texture) => {
                    let width = ui.available_width().min(600.0);
                    let img = egui::Image::new(&texture)
                        .fit_to_exact_size(egui::vec2(width, width * 0.6))
                        .sense(egui::Sense::click());
                    if ui.add(img).clicked() {
                        action = Some(DetailAction::OpenViewer {
                            images: overlay.project.images.clone(),
                            index,
                        });
                    }
                }
                None => render::error_line(ui, theme, &format!("Error loading {name}")),
            }
            ui.add_space(8.0);
        }
    });

    action
}

fn body_text(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme.body_size)
            .color(theme.foreground),
    );
}
