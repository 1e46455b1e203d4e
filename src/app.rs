//! Main application state and egui integration.

use eframe::egui;

use logslice::auth::{display_name, AuthProvider, SessionAuthProvider};
use logslice::engine::{GameEngine, GameOutcome, ScriptedEngine};
use logslice::scores::service::ScoreService;
use logslice::scores::types::{LeaderboardRow, ScoreRecord};
use logslice::storage::config::{load_config, save_config, AppConfig};
use logslice::storage::database::Database;
use logslice::ui::screens::{GameOverAction, GameOverScreen, MenuAction, MenuScreen, PlayingScreen, Screen};
use logslice::ui::theme;
use logslice::ui::widgets::{LeaderboardPanel, StatsPanel};

/// Main application state.
///
/// Owns the menu → playing → gameover state machine and the cached board
/// data the screens render from. All of it is process-local; durable state
/// lives behind the score service.
pub struct LogsliceApp {
    /// Current screen
    screen: Screen,
    /// Application configuration
    config: AppConfig,
    /// Player session
    auth: SessionAuthProvider,
    /// Score service over the local store
    service: ScoreService,
    /// Hosted gameplay engine
    engine: Box<dyn GameEngine>,
    /// Outcome of the last completed run
    last_outcome: GameOutcome,
    /// Menu screen state
    menu_screen: MenuScreen,
    /// Cached global leaderboard
    board: Vec<LeaderboardRow>,
    /// Cached personal stats
    my_stats: Option<LeaderboardRow>,
    /// Cached recent score history
    my_scores: Vec<ScoreRecord>,
}

impl LogsliceApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        let config = load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        cc.egui_ctx.set_visuals(theme::visuals());
        if (config.ui.font_scale - 1.0).abs() > f32::EPSILON {
            cc.egui_ctx.set_zoom_factor(config.ui.font_scale);
        }

        // A broken database must not block play; fall back to an in-memory
        // store and lose persistence for this session.
        let db = match Database::open(&config.database_path()) {
            Ok(db) => db,
            Err(e) => {
                tracing::error!(
                    "Failed to open database, scores will not persist: {}",
                    e
                );
                Database::open_in_memory()?
            }
        };

        let auth = match config.persisted_identity() {
            Some(identity) => SessionAuthProvider::with_identity(identity),
            None => SessionAuthProvider::new(),
        };

        let mut app = Self {
            screen: Screen::Menu,
            config,
            auth,
            service: ScoreService::new(db),
            engine: Box::new(ScriptedEngine::new()),
            last_outcome: GameOutcome::default(),
            menu_screen: MenuScreen::new(),
            board: Vec::new(),
            my_stats: None,
            my_scores: Vec::new(),
        };
        app.refresh_boards();
        Ok(app)
    }

    /// Refresh the cached leaderboard and personal data.
    ///
    /// Failures keep the previous cache; a stale board beats an empty one.
    fn refresh_boards(&mut self) {
        match self.service.leaderboard() {
            Ok(board) => self.board = board,
            Err(e) => tracing::warn!("Failed to load leaderboard: {}", e),
        }
        match self.service.my_stats(&self.auth) {
            Ok(stats) => self.my_stats = stats,
            Err(e) => tracing::warn!("Failed to load stats: {}", e),
        }
        match self.service.my_scores(&self.auth) {
            Ok(scores) => self.my_scores = scores,
            Err(e) => tracing::warn!("Failed to load score history: {}", e),
        }
    }

    /// Handle the engine reporting the end of a run.
    ///
    /// The gameover screen always shows; a failed submission is logged and
    /// otherwise ignored (losing one score beats blocking the player).
    fn handle_game_end(&mut self, outcome: GameOutcome) {
        self.last_outcome = outcome;
        self.screen = Screen::GameOver;

        if let Err(e) = self.service.submit(&self.auth, &outcome) {
            tracing::error!("Failed to save score: {}", e);
        }
        self.refresh_boards();
    }

    /// Start a fresh run.
    fn start_run(&mut self) {
        self.engine.reset();
        self.screen = Screen::Playing;
    }

    fn handle_sign_in(&mut self, account: &str) {
        // Reuse the persisted user id when the same account signs back in,
        // so the identity stays stable across sessions.
        let persisted = self
            .config
            .persisted_identity()
            .filter(|id| id.account.as_deref() == Some(account))
            .map(|id| id.user_id);

        let identity = self.auth.sign_in(account, persisted).clone();
        self.config.remember_identity(&identity);
        if let Err(e) = save_config(&self.config) {
            tracing::warn!("Failed to persist session: {}", e);
        }
        self.refresh_boards();
    }

    fn handle_sign_out(&mut self) {
        self.auth.sign_out();
        self.config.forget_identity();
        if let Err(e) = save_config(&self.config) {
            tracing::warn!("Failed to persist sign-out: {}", e);
        }
        self.refresh_boards();
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("\u{1FA93} Logslice").size(18.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let name = self.auth.identity().map(display_name);
                    if let Some(name) = name {
                        if ui.button("Sign Out").clicked() {
                            self.handle_sign_out();
                        }
                        ui.label(egui::RichText::new(name).weak());
                    }
                });
            });
        });
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        let signed_in = self.auth.identity().map(display_name);
        let action = ui
            .columns(2, |columns| {
                let action = self.menu_screen.show(&mut columns[0], signed_in.as_deref());
                if self.config.ui.show_leaderboard {
                    columns[1].add_space(32.0);
                    LeaderboardPanel::show(
                        &mut columns[1],
                        &self.board,
                        self.auth.identity().map(|id| id.user_id),
                    );
                    columns[1].add_space(24.0);
                    if self.auth.identity().is_some() {
                        StatsPanel::show(&mut columns[1], self.my_stats.as_ref(), &self.my_scores);
                    }
                }
                action
            });

        match action {
            Some(MenuAction::StartRun) => self.start_run(),
            Some(MenuAction::SignIn(account)) => self.handle_sign_in(&account),
            None => {}
        }
    }

    fn show_gameover(&mut self, ui: &mut egui::Ui) {
        let outcome = self.last_outcome;
        let action = ui.columns(2, |columns| {
            let action = GameOverScreen::show(&mut columns[0], &outcome);
            columns[1].add_space(32.0);
            LeaderboardPanel::show(
                &mut columns[1],
                &self.board,
                self.auth.identity().map(|id| id.user_id),
            );
            action
        });

        match action {
            Some(GameOverAction::PlayAgain) => self.start_run(),
            Some(GameOverAction::MainMenu) => {
                self.screen = Screen::Menu;
                self.refresh_boards();
            }
            None => {}
        }
    }
}

impl eframe::App for LogsliceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_header(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::Menu => self.show_menu(ui),
            Screen::Playing => {
                if let Some(outcome) = PlayingScreen::show(ui, self.engine.as_mut()) {
                    self.handle_game_end(outcome);
                }
            }
            Screen::GameOver => self.show_gameover(ui),
        });
    }
}
