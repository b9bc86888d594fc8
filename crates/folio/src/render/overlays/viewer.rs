//! Draws the image viewer overlay from a `ViewerSession` and feeds pointer,
//! wheel and touch input back into it. Keyboard input is routed by the app.

use std::time::Instant;

use eframe::egui::{self, Color32, Pos2, Rect, Sense, TouchPhase, Vec2};

use crate::render::image_cache::ImageCache;
use crate::theme::Theme;
use crate::viewer::{NavDirection, ViewerSession};

const THUMB_SIZE: f32 = 54.0;
const THUMB_GAP: f32 = 8.0;

pub fn draw(
    ctx: &egui::Context,
    session: &mut ViewerSession,
    cache: &ImageCache,
    theme: &Theme,
) {
    let now = Instant::now();
    session.begin_frame(now);

    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("image-viewer-overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let fade = session.backdrop_opacity(now);
            let backdrop = ui.allocate_rect(screen, Sense::click());
            ui.painter()
                .rect_filled(screen, 0.0, Theme::with_opacity(Color32::BLACK, fade * 0.92));

            draw_image(ui, session, cache, screen, fade, now);
            handle_touch(ui, session, now);
            draw_controls(ui, session, cache, theme, screen, fade, now);

            // Clicking the backdrop (not the image or a control) closes.
            if backdrop.clicked() {
                session.close();
            }
        });

    // Animations and pending swaps need continuous frames.
    ctx.request_repaint();
}

fn draw_image(
    ui: &mut egui::Ui,
    session: &mut ViewerSession,
    cache: &ImageCache,
    screen: Rect,
    fade: f32,
    now: Instant,
) {
    let Some(name) = session.displayed_image().map(String::from) else {
        return;
    };

    let Some(texture) = cache.get_or_load(ui.ctx(), &name) else {
        let center = screen.center();
        ui.painter().text(
            center,
            egui::Align2::CENTER_CENTER,
            format!("Error loading {name}"),
            egui::FontId::proportional(16.0),
            Color32::from_rgb(0xE2, 0x6C, 0x5A),
        );
        return;
    };
    if session.awaiting_load() {
        session.texture_ready(now);
    }

    let tex_size = texture.size_vec2();
    let avail = screen.size() * 0.85;
    let fit = (avail.x / tex_size.x).min(avail.y / tex_size.y);
    let base = tex_size * fit;
    let center = screen.center() + session.pan();
    let rect = Rect::from_center_size(center, base * session.scale());

    let opacity = session.image_opacity(now) * fade;
    let tint = Color32::from_rgba_unmultiplied(255, 255, 255, (opacity * 255.0) as u8);
    let uv = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0));
    ui.painter().image(texture.id(), rect, uv, tint);

    let resp = ui.interact(
        rect,
        ui.id().with("viewer-image"),
        Sense::click_and_drag(),
    );

    // Drag pans, but only once zoomed in.
    if resp.drag_started() {
        if let Some(pos) = resp.interact_pointer_pos() {
            session.start_pan(pos.to_vec2());
        }
    }
    if resp.dragged() {
        if let Some(pos) = resp.interact_pointer_pos() {
            session.continue_pan(pos.to_vec2());
        }
    }
    if resp.drag_stopped() {
        session.end_pan();
    }

    // Wheel zoom anchored under the cursor.
    if resp.hovered() {
        let (scroll, pointer) = ui.input(|i| (i.raw_scroll_delta.y, i.pointer.hover_pos()));
        if scroll != 0.0 {
            if let Some(pointer) = pointer {
                session.zoom_at(pointer - center, scroll > 0.0);
            }
        }
    }
}

fn handle_touch(ui: &egui::Ui, session: &mut ViewerSession, now: Instant) {
    let touches: Vec<(TouchPhase, Pos2)> = ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Touch { phase, pos, .. } => Some((*phase, *pos)),
                _ => None,
            })
            .collect()
    });

    for (phase, pos) in touches {
        match phase {
            TouchPhase::Start => session.touch_start(pos.to_vec2()),
            TouchPhase::Move => session.touch_move(pos.to_vec2()),
            TouchPhase::End => {
                if let Some(direction) = session.touch_end(pos.to_vec2()) {
                    session.navigate(direction, now);
                }
            }
            TouchPhase::Cancel => {
                let _ = session.touch_end(pos.to_vec2());
            }
        }
    }
}

fn draw_controls(
    ui: &mut egui::Ui,
    session: &mut ViewerSession,
    cache: &ImageCache,
    theme: &Theme,
    screen: Rect,
    fade: f32,
    now: Instant,
) {
    if fade <= 0.0 {
        return;
    }

    let button = |text: &str| {
        egui::Button::new(egui::RichText::new(text).size(18.0).color(Color32::WHITE))
            .fill(Theme::with_opacity(Color32::BLACK, fade * 0.5))
    };

    // Close, top right.
    let close_rect = Rect::from_center_size(
        Pos2::new(screen.right() - 32.0, screen.top() + 32.0),
        Vec2::splat(36.0),
    );
    if ui.put(close_rect, button("\u{2715}")).clicked() {
        session.close();
    }

    // Zoom controls, bottom right.
    let zoom_labels: [(&str, fn(&mut ViewerSession)); 3] = [
        ("+", ViewerSession::zoom_in),
        ("\u{2212}", ViewerSession::zoom_out),
        ("\u{2302}", ViewerSession::reset_zoom),
    ];
    for (i, (label, apply)) in zoom_labels.iter().enumerate() {
        let rect = Rect::from_center_size(
            Pos2::new(
                screen.right() - 32.0,
                screen.bottom() - 150.0 + i as f32 * 44.0,
            ),
            Vec2::splat(36.0),
        );
        if ui.put(rect, button(label)).clicked() {
            apply(session);
        }
    }

    if !session.has_gallery() {
        return;
    }

    // Prev/next chevrons; hidden at their boundary.
    if session.can_navigate(NavDirection::Previous) {
        let rect = Rect::from_center_size(
            Pos2::new(screen.left() + 36.0, screen.center().y),
            Vec2::splat(44.0),
        );
        if ui.put(rect, button("\u{2039}")).clicked() {
            session.navigate(NavDirection::Previous, now);
        }
    }
    if session.can_navigate(NavDirection::Next) {
        let rect = Rect::from_center_size(
            Pos2::new(screen.right() - 36.0, screen.center().y),
            Vec2::splat(44.0),
        );
        if ui.put(rect, button("\u{203A}")).clicked() {
            session.navigate(NavDirection::Next, now);
        }
    }

    // Counter above the thumbnail strip.
    let counter_color = Theme::with_opacity(Color32::WHITE, fade * 0.9);
    ui.painter().text(
        Pos2::new(screen.center().x, screen.bottom() - THUMB_SIZE - 34.0),
        egui::Align2::CENTER_CENTER,
        session.counter_text(),
        egui::FontId::monospace(14.0),
        counter_color,
    );

    draw_thumbnails(ui, session, cache, theme, screen, fade, now);
}

fn draw_thumbnails(
    ui: &mut egui::Ui,
    session: &mut ViewerSession,
    cache: &ImageCache,
    theme: &Theme,
    screen: Rect,
    fade: f32,
    now: Instant,
) {
    let count = session.images().len();
    let strip_width = count as f32 * THUMB_SIZE + (count.saturating_sub(1)) as f32 * THUMB_GAP;
    let mut x = screen.center().x - strip_width / 2.0;
    let y = screen.bottom() - THUMB_SIZE - 12.0;

    let mut jump: Option<usize> = None;
    for (index, name) in session.images().to_vec().into_iter().enumerate() {
        let rect = Rect::from_min_size(Pos2::new(x, y), Vec2::splat(THUMB_SIZE));
        x += THUMB_SIZE + THUMB_GAP;

        if let Some(texture) = cache.get_or_load(ui.ctx(), &name) {
            let uv = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0));
            let tint = Color32::from_rgba_unmultiplied(255, 255, 255, (fade * 255.0) as u8);
            ui.painter().image(texture.id(), rect, uv, tint);
        } else {
            ui.painter()
                .rect_filled(rect, 2.0, Theme::with_opacity(Color32::GRAY, fade * 0.4));
        }

        let is_current = index == session.current_index();
        let stroke = if is_current {
            egui::Stroke::new(2.0, theme.accent)
        } else {
            egui::Stroke::new(1.0, Theme::with_opacity(Color32::WHITE, fade * 0.3))
        };
        ui.painter()
            .rect_stroke(rect, 2.0, stroke, egui::StrokeKind::Outside);

        let resp = ui.interact(rect, ui.id().with(("thumb", index)), Sense::click());
        if resp.clicked() {
            jump = Some(index);
        }
    }

    if let Some(index) = jump {
        session.jump_to(index, now);
    }
}
