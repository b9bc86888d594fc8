use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use eframe::egui;
use log::error;

use crate::source::ContentSource;

/// Lazily loaded texture cache keyed by image filename. A failed fetch or
/// decode is remembered as `None` so the placeholder renders without
/// retrying every frame.
pub struct ImageCache {
    source: Arc<ContentSource>,
    cache: RefCell<HashMap<String, Option<egui::TextureHandle>>>,
}

impl ImageCache {
    pub fn new(source: Arc<ContentSource>) -> Self {
        Self {
            source,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn get_or_load(&self, ctx: &egui::Context, name: &str) -> Option<egui::TextureHandle> {
        if let Some(entry) = self.cache.borrow().get(name) {
            return entry.clone();
        }
        let loaded = self.load(ctx, name);
        self.cache
            .borrow_mut()
            .insert(name.to_string(), loaded.clone());
        loaded
    }

    /// Forget everything; used on content reload.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }

    fn load(&self, ctx: &egui::Context, name: &str) -> Option<egui::TextureHandle> {
        let bytes = self.source.fetch_image(name)?;
        let decoded = match image::load_from_memory(&bytes) {
            Ok(img) => img,
            Err(err) => {
                error!("failed to decode image {name}: {err}");
                return None;
            }
        };
        let rgba = decoded.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        Some(ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR))
    }
}
