//! Personal stats and recent scores panel.

use egui::{RichText, Ui};

use crate::scores::types::{LeaderboardRow, ScoreRecord};
use crate::ui::theme::DarkTheme;

/// Renders the signed-in player's aggregates and recent runs.
pub struct StatsPanel;

impl StatsPanel {
    /// Render `stats` and the `recent` score history, newest first.
    pub fn show(ui: &mut Ui, stats: Option<&LeaderboardRow>, recent: &[ScoreRecord]) {
        ui.label(
            RichText::new("Your Stats")
                .size(20.0)
                .strong()
                .color(DarkTheme::ACCENT),
        );
        ui.add_space(8.0);

        let Some(stats) = stats else {
            ui.label(RichText::new("Play a run to start your record.").weak());
            return;
        };

        egui::Grid::new("stats_grid")
            .num_columns(2)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new("High score").weak());
                ui.label(RichText::new(stats.high_score.to_string()).strong());
                ui.end_row();

                ui.label(RichText::new("Logs sliced").weak());
                ui.label(stats.total_logs_sliced.to_string());
                ui.end_row();

                ui.label(RichText::new("Games played").weak());
                ui.label(stats.games_played.to_string());
                ui.end_row();
            });

        if recent.is_empty() {
            return;
        }

        ui.add_space(12.0);
        ui.label(RichText::new("Recent Runs").size(16.0).strong());
        ui.add_space(4.0);

        egui::Grid::new("recent_scores_grid")
            .num_columns(3)
            .spacing([16.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                for record in recent {
                    ui.label(record.score.to_string());
                    ui.label(format!("{} logs", record.logs_sliced));
                    ui.label(
                        RichText::new(record.played_at.format("%Y-%m-%d %H:%M").to_string())
                            .weak(),
                    );
                    ui.end_row();
                }
            });
    }
}
