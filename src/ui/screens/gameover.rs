//! Game over screen.

use egui::{RichText, Ui, Vec2};

use crate::engine::GameOutcome;
use crate::ui::theme::DarkTheme;

/// Action requested from the game over screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverAction {
    /// Start another run immediately
    PlayAgain,
    /// Return to the main menu
    MainMenu,
}

/// Post-run summary UI.
#[derive(Debug, Default)]
pub struct GameOverScreen;

impl GameOverScreen {
    /// Render the summary for `outcome` and return the requested action.
    ///
    /// Always renders, whether or not the score submission succeeded.
    pub fn show(ui: &mut Ui, outcome: &GameOutcome) -> Option<GameOverAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(24.0);

            ui.label(RichText::new("\u{1F480}").size(56.0));
            ui.label(
                RichText::new("TIMBER!")
                    .size(36.0)
                    .strong()
                    .color(DarkTheme::DANGER),
            );

            ui.add_space(24.0);

            egui::Frame::group(ui.style())
                .fill(DarkTheme::CARD_BG)
                .show(ui, |ui| {
                    ui.set_min_width(280.0);
                    ui.vertical_centered(|ui| {
                        ui.add_space(8.0);
                        ui.label(
                            RichText::new(outcome.score.to_string())
                                .size(48.0)
                                .strong()
                                .color(DarkTheme::ACCENT),
                        );
                        ui.label(RichText::new("FINAL SCORE").size(14.0).weak());
                        ui.add_space(12.0);
                        ui.horizontal(|ui| {
                            ui.add_space(40.0);
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(outcome.logs_sliced.to_string())
                                        .size(22.0)
                                        .strong(),
                                );
                                ui.label(RichText::new("Logs Sliced").size(12.0).weak());
                            });
                            ui.add_space(40.0);
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(format!("{}x", outcome.max_combo))
                                        .size(22.0)
                                        .strong(),
                                );
                                ui.label(RichText::new("Max Combo").size(12.0).weak());
                            });
                        });
                        ui.add_space(8.0);
                    });
                });

            ui.add_space(24.0);

            if ui
                .add_sized(
                    Vec2::new(220.0, 48.0),
                    egui::Button::new(RichText::new("Play Again").size(18.0)),
                )
                .clicked()
            {
                action = Some(GameOverAction::PlayAgain);
            }

            ui.add_space(12.0);

            if ui
                .add_sized(
                    Vec2::new(220.0, 40.0),
                    egui::Button::new(RichText::new("Main Menu").size(16.0)),
                )
                .clicked()
            {
                action = Some(GameOverAction::MainMenu);
            }
        });

        action
    }
}
