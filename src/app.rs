//! Main application state and egui integration.
//!
//! Owns the screen state machine (menu, race, results), the frame clock and
//! the wiring between keyboard, session, renderer, HUD and the saved
//! profile.

use eframe::egui;
use std::time::Instant;

use freegear::input::KeyState;
use freegear::racing::{GameSession, Racer, SessionEvent};
use freegear::render::{render_menu_backdrop, render_race, AssetCatalog};
use freegear::storage::{GameConfig, ProfileStore};
use freegear::ui::screens::{MenuAction, MenuScreen, RaceOverlay, ResultsAction, ResultsScreen, Screen};
use freegear::ui::theme::race_visuals;
use freegear::ui::{EguiSurface, TextureCache};
use freegear::world::Projection;

/// Main application state.
pub struct FreeGearApp {
    /// Current screen
    screen: Screen,
    /// Game configuration
    config: GameConfig,
    /// Saved name and best lap
    profile: ProfileStore,
    /// Images, loaded in the background
    assets: AssetCatalog,
    /// Uploaded egui textures
    textures: TextureCache,
    /// Held keys
    keys: KeyState,
    /// Menu screen state
    menu: MenuScreen,
    /// Race in progress or just finished
    session: Option<GameSession>,
    /// Whether this race set a new best lap
    new_record: bool,
    /// Last frame time
    last_frame: Instant,
}

impl FreeGearApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        cc.egui_ctx.set_visuals(race_visuals());

        let profile = ProfileStore::open_default();
        let menu = MenuScreen::new(profile.last_player());

        let mut assets = AssetCatalog::from_config(&config);
        if let Err(e) = assets.start_loading() {
            tracing::warn!(error = %e, "images disabled, drawing placeholders");
        }

        Self {
            screen: Screen::Menu,
            config,
            profile,
            assets,
            textures: TextureCache::new(),
            keys: KeyState::new(),
            menu,
            session: None,
            new_record: false,
            last_frame: Instant::now(),
        }
    }

    fn save_profile(&self) {
        if let Err(e) = self.profile.save() {
            tracing::warn!(error = %e, "failed to save profile");
        }
    }

    fn start_race(&mut self, name: &str) {
        let name = self.profile.remember_player(name);
        self.save_profile();

        match GameSession::new(self.config.clone(), &name) {
            Ok(session) => {
                self.session = Some(session);
                self.new_record = false;
                self.keys.release_all();
                self.screen = Screen::Race;
            }
            Err(e) => tracing::error!(error = %e, "cannot start race"),
        }
    }

    fn handle_events(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::LapCompleted {
                    racer: Racer::Player,
                    lap_time,
                    ..
                } => {
                    if self.profile.record_lap(lap_time) {
                        self.new_record = true;
                        self.save_profile();
                    }
                }
                SessionEvent::Finished(_) => self.screen = Screen::Results,
                _ => {}
            }
        }
    }

    fn show_menu(&mut self, ctx: &egui::Context) {
        let best = self.profile.best_lap();
        let mut action = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let area = ui.max_rect();
                let painter = ui.painter().clone();
                let mut surface = EguiSurface::new(&painter, area, &mut self.textures, &self.assets);
                render_menu_backdrop(&mut surface, &self.assets, &self.config);

                action = self.menu.show(ui, best);
            });

        match action {
            Some(MenuAction::Start(name)) => self.start_race(&name),
            Some(MenuAction::ResetData) => {
                self.profile.clear_player();
                self.save_profile();
            }
            None => {}
        }
    }

    fn show_race(&mut self, ctx: &egui::Context, dt: f32) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            tracing::info!("race abandoned");
            self.session = None;
            self.screen = Screen::Menu;
            return;
        }

        let Some(session) = self.session.as_mut() else {
            self.screen = Screen::Menu;
            return;
        };
        let events = session.update(dt, &self.keys.controls());
        self.handle_events(events);

        self.draw_race(ctx);
        ctx.request_repaint();
    }

    fn draw_race(&mut self, ctx: &egui::Context) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let saved_best = self.profile.best_lap();
        let boost_duration = self.config.physics.boost_duration_secs;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let area = ui.max_rect();
                let projection = Projection::from_settings(&self.config.render, area.width(), area.height());
                let painter = ui.painter().clone();
                let mut surface = EguiSurface::new(&painter, area, &mut self.textures, &self.assets);
                render_race(session, &mut surface, &self.assets, &projection);

                let race_best = session.state().player_progress.best_lap();
                let hud = session.hud().with_saved_best(saved_best, race_best);
                RaceOverlay::show(ui, area, &hud, boost_duration);
            });
    }

    fn show_results(&mut self, ctx: &egui::Context) {
        let Some(result) = self.session.as_ref().and_then(|s| s.result()).cloned() else {
            self.screen = Screen::Menu;
            return;
        };

        self.draw_race(ctx);

        let saved_best = self.profile.best_lap();
        let new_record = self.new_record;
        let mut action = None;
        egui::Window::new("Results")
            .title_bar(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                action = ResultsScreen::show(ui, &result, saved_best, new_record);
            });

        match action {
            Some(ResultsAction::Restart) => {
                if let Some(session) = self.session.as_mut() {
                    session.reset();
                }
                self.new_record = false;
                self.keys.release_all();
                self.screen = Screen::Race;
            }
            Some(ResultsAction::Menu) => {
                self.session = None;
                self.menu = MenuScreen::new(self.profile.last_player());
                self.screen = Screen::Menu;
            }
            None => {}
        }
    }
}

impl eframe::App for FreeGearApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if self.assets.poll() > 0 {
            ctx.request_repaint();
        }

        ctx.input(|i| {
            if !i.focused {
                self.keys.release_all();
            }
            for event in &i.events {
                self.keys.handle_event(event);
            }
        });

        match self.screen {
            Screen::Menu => self.show_menu(ctx),
            Screen::Race => self.show_race(ctx, dt),
            Screen::Results => self.show_results(ctx),
        }
    }
}
