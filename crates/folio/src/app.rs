use eframe::egui;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use crate::config::Config;
use crate::content::{self, ContactEntry, ExperienceRecord, ProjectRecord, SkillCategory};
use crate::render::image_cache::ImageCache;
use crate::render::overlays::detail::{self, DetailAction, DetailOverlay};
use crate::render::overlays::full_gallery::{self, FullGalleryAction, FullGalleryOverlay};
use crate::render::overlays::viewer as viewer_overlay;
use crate::render::sections;
use crate::render::{PageAction, SectionId, SectionState};
use crate::source::ContentSource;
use crate::theme::Theme;
use crate::viewer::{self, NavDirection, ViewerSlot};
use crate::watch::ContentWatcher;

/// One parsed section arriving from a loader thread.
enum SectionUpdate {
    About(SectionState<String>),
    Projects(SectionState<Vec<ProjectRecord>>),
    Experience(SectionState<Vec<ExperienceRecord>>),
    Gallery(SectionState<Vec<String>>),
    Skills(SectionState<Vec<SkillCategory>>),
    Contact(SectionState<Vec<ContactEntry>>),
}

struct PortfolioApp {
    source: Arc<ContentSource>,
    theme: Theme,
    about: SectionState<String>,
    projects: SectionState<Vec<ProjectRecord>>,
    experience: SectionState<Vec<ExperienceRecord>>,
    gallery: SectionState<Vec<String>>,
    skills: SectionState<Vec<SkillCategory>>,
    contact: SectionState<Vec<ContactEntry>>,
    tx: Sender<SectionUpdate>,
    rx: Receiver<SectionUpdate>,
    viewer: ViewerSlot,
    detail: Option<DetailOverlay>,
    full_gallery: Option<FullGalleryOverlay>,
    image_cache: ImageCache,
    scroll_to: Option<SectionId>,
    watcher: Option<ContentWatcher>,
}

impl PortfolioApp {
    fn new(source: ContentSource, theme: Theme, start_section: Option<SectionId>) -> Self {
        let source = Arc::new(source);
        let (tx, rx) = channel();

        let watcher = source.watchable_dir().and_then(|dir| {
            ContentWatcher::new(&dir)
                .map_err(|err| log::warn!("live reload disabled: {err:#}"))
                .ok()
        });

        Self {
            theme,
            about: SectionState::Loading,
            projects: SectionState::Loading,
            experience: SectionState::Loading,
            gallery: SectionState::Loading,
            skills: SectionState::Loading,
            contact: SectionState::Loading,
            tx,
            rx,
            viewer: ViewerSlot::default(),
            detail: None,
            full_gallery: None,
            image_cache: ImageCache::new(source.clone()),
            scroll_to: start_section,
            watcher,
            source,
        }
    }

    /// Kick off one detached loader thread per section. Each delivers its
    /// parsed records over the channel and wakes the UI.
    fn spawn_loads(&self, ctx: &egui::Context) {
        self.spawn_load(ctx, "texts.txt", "Could not load about me information.", |text| {
            SectionUpdate::About(SectionState::Ready(text.trim().to_string()))
        });
        self.spawn_load(ctx, "projects.txt", "Could not load projects.", |text| {
            SectionUpdate::Projects(SectionState::Ready(content::projects::parse(&text)))
        });
        self.spawn_load(ctx, "experience.txt", "Could not load work experience.", |text| {
            SectionUpdate::Experience(SectionState::Ready(content::experience::parse(&text)))
        });
        self.spawn_load(ctx, "gallery.txt", "Could not load gallery preview.", |text| {
            SectionUpdate::Gallery(SectionState::Ready(content::gallery::parse(&text)))
        });
        self.spawn_load(ctx, "skills.txt", "Could not load skills.", |text| {
            SectionUpdate::Skills(SectionState::Ready(content::skills::parse(&text)))
        });
        self.spawn_load(ctx, "contact.txt", "Could not load contact details.", |text| {
            SectionUpdate::Contact(SectionState::Ready(content::contact::parse(&text)))
        });
    }

    fn spawn_load(
        &self,
        ctx: &egui::Context,
        file: &'static str,
        error: &'static str,
        build: impl FnOnce(String) -> SectionUpdate + Send + 'static,
    ) {
        let source = self.source.clone();
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let text = source.fetch_text(file);
            let update = if text.is_empty() {
                failed(file, error)
            } else {
                build(text)
            };
            if tx.send(update).is_ok() {
                ctx.request_repaint();
            }
        });
    }

    fn reload(&mut self, ctx: &egui::Context) {
        log::info!("content changed, reloading sections");
        self.about = SectionState::Loading;
        self.projects = SectionState::Loading;
        self.experience = SectionState::Loading;
        self.gallery = SectionState::Loading;
        self.skills = SectionState::Loading;
        self.contact = SectionState::Loading;
        self.image_cache.clear();
        self.spawn_loads(ctx);
    }

    fn apply_updates(&mut self) {
        while let Ok(update) = self.rx.try_recv() {
            match update {
                SectionUpdate::About(s) => self.about = s,
                SectionUpdate::Projects(s) => self.projects = s,
                SectionUpdate::Experience(s) => self.experience = s,
                SectionUpdate::Gallery(s) => self.gallery = s,
                SectionUpdate::Skills(s) => self.skills = s,
                SectionUpdate::Contact(s) => self.contact = s,
            }
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();

        ctx.input(|i| {
            if let Some(session) = self.viewer.active_mut() {
                // Overlay owns the keyboard while it is up.
                if i.key_pressed(egui::Key::Escape) {
                    session.close();
                    return;
                }
                if i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals) {
                    session.zoom_in();
                }
                if i.key_pressed(egui::Key::Minus) {
                    session.zoom_out();
                }
                if i.key_pressed(egui::Key::Num0) {
                    session.reset_zoom();
                }
                let now = std::time::Instant::now();
                if i.key_pressed(egui::Key::ArrowLeft) {
                    if session.is_zoomed() {
                        session.pan_by(egui::vec2(viewer::KEY_PAN_STEP, 0.0));
                    } else {
                        session.navigate(NavDirection::Previous, now);
                    }
                }
                if i.key_pressed(egui::Key::ArrowRight) {
                    if session.is_zoomed() {
                        session.pan_by(egui::vec2(-viewer::KEY_PAN_STEP, 0.0));
                    } else {
                        session.navigate(NavDirection::Next, now);
                    }
                }
                if i.key_pressed(egui::Key::ArrowUp) && session.is_zoomed() {
                    session.pan_by(egui::vec2(0.0, viewer::KEY_PAN_STEP));
                }
                if i.key_pressed(egui::Key::ArrowDown) && session.is_zoomed() {
                    session.pan_by(egui::vec2(0.0, -viewer::KEY_PAN_STEP));
                }
                return;
            }

            if self.detail.is_some() || self.full_gallery.is_some() {
                if i.key_pressed(egui::Key::Escape) {
                    self.detail = None;
                    self.full_gallery = None;
                }
                return;
            }

            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }
            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
            }
            if i.key_pressed(egui::Key::D) {
                self.theme = self.theme.toggled();
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }
    }

    fn apply_action(&mut self, action: PageAction) {
        match action {
            PageAction::OpenViewer { images, index } => {
                self.viewer.open(images, index);
            }
            PageAction::OpenDetail(project) => {
                self.full_gallery = None;
                self.detail = Some(DetailOverlay::new(project));
            }
            PageAction::OpenFullGallery => {
                if let SectionState::Ready(filenames) = &self.gallery {
                    self.detail = None;
                    self.full_gallery = Some(FullGalleryOverlay::new(filenames.clone()));
                }
            }
            PageAction::ScrollTo(id) => {
                self.scroll_to = Some(id);
            }
        }
    }

    fn draw_page(&mut self, ctx: &egui::Context) -> Vec<PageAction> {
        let mut actions = Vec::new();
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.theme.background))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_space(30.0);
                        if let Some(a) =
                            sections::hero::draw(ui, &self.theme, &mut self.scroll_to)
                        {
                            actions.push(a);
                        }
                        ui.add_space(50.0);
                        sections::about::draw(ui, &self.theme, &self.about, &mut self.scroll_to);
                        ui.add_space(50.0);
                        if let Some(a) = sections::projects::draw(
                            ui,
                            &self.theme,
                            &self.image_cache,
                            &self.projects,
                            &mut self.scroll_to,
                        ) {
                            actions.push(a);
                        }
                        ui.add_space(50.0);
                        sections::experience::draw(
                            ui,
                            &self.theme,
                            &self.experience,
                            &mut self.scroll_to,
                        );
                        ui.add_space(50.0);
                        if let Some(a) = sections::gallery::draw(
                            ui,
                            &self.theme,
                            &self.image_cache,
                            &self.gallery,
                            &mut self.scroll_to,
                        ) {
                            actions.push(a);
                        }
                        ui.add_space(50.0);
                        sections::skills::draw(ui, &self.theme, &self.skills, &mut self.scroll_to);
                        ui.add_space(50.0);
                        sections::contact::draw(
                            ui,
                            &self.theme,
                            &self.contact,
                            &mut self.scroll_to,
                        );
                        ui.add_space(60.0);
                    });
            });
        actions
    }

    fn draw_overlays(&mut self, ctx: &egui::Context) {
        if let Some(overlay) = &mut self.detail {
            match detail::draw(ctx, overlay, &self.image_cache, &self.theme) {
                Some(DetailAction::Close) => self.detail = None,
                Some(DetailAction::OpenViewer { images, index }) => {
                    self.viewer.open(images, index);
                }
                None => {}
            }
        }
        if let Some(overlay) = &mut self.full_gallery {
            match full_gallery::draw(ctx, overlay, &self.image_cache, &self.theme) {
                Some(FullGalleryAction::Close) => self.full_gallery = None,
                Some(FullGalleryAction::OpenViewer { images, index }) => {
                    self.viewer.open(images, index);
                }
                None => {}
            }
        }
        // The image viewer draws last so it sits above whichever overlay
        // opened it.
        if let Some(session) = self.viewer.active_mut() {
            viewer_overlay::draw(ctx, session, &self.image_cache, &self.theme);
        }
        self.viewer.reap();
    }
}

fn failed(file: &str, error: &'static str) -> SectionUpdate {
    log::error!("no content for {file}");
    match file {
        "texts.txt" => SectionUpdate::About(SectionState::Failed(error.to_string())),
        "projects.txt" => SectionUpdate::Projects(SectionState::Failed(error.to_string())),
        "experience.txt" => SectionUpdate::Experience(SectionState::Failed(error.to_string())),
        "gallery.txt" => SectionUpdate::Gallery(SectionState::Failed(error.to_string())),
        "skills.txt" => SectionUpdate::Skills(SectionState::Failed(error.to_string())),
        _ => SectionUpdate::Contact(SectionState::Failed(error.to_string())),
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_updates();

        if let Some(watcher) = &self.watcher {
            if watcher.changed() {
                self.reload(ctx);
            }
        }

        self.handle_keys(ctx);

        let actions = self.draw_page(ctx);
        for action in actions {
            self.apply_action(action);
        }

        self.draw_overlays(ctx);
    }
}

pub fn run(
    source: ContentSource,
    windowed: bool,
    start_section: Option<SectionId>,
) -> anyhow::Result<()> {
    let title = format!("folio \u{2014} {}", source.describe());

    let config = Config::load_or_default();
    let theme_name = config
        .defaults
        .as_ref()
        .and_then(|d| d.theme.as_deref())
        .unwrap_or("dark");
    let theme = Theme::from_name(theme_name);

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let app = PortfolioApp::new(source, theme, start_section);
            app.spawn_loads(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
