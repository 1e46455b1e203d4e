//! Global leaderboard panel.

use egui::{RichText, Ui};
use uuid::Uuid;

use crate::scores::types::LeaderboardRow;
use crate::ui::theme::DarkTheme;

/// Renders the top leaderboard rows.
pub struct LeaderboardPanel;

impl LeaderboardPanel {
    /// Render `rows` in rank order, highlighting the current player's row.
    pub fn show(ui: &mut Ui, rows: &[LeaderboardRow], highlight: Option<Uuid>) {
        ui.label(
            RichText::new("Leaderboard")
                .size(20.0)
                .strong()
                .color(DarkTheme::ACCENT),
        );
        ui.add_space(8.0);

        if rows.is_empty() {
            ui.label(RichText::new("No scores yet. Be the first!").weak());
            return;
        }

        egui::Grid::new("leaderboard_grid")
            .num_columns(4)
            .spacing([16.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                ui.label(RichText::new("#").weak());
                ui.label(RichText::new("Player").weak());
                ui.label(RichText::new("High Score").weak());
                ui.label(RichText::new("Games").weak());
                ui.end_row();

                for (rank, row) in rows.iter().enumerate() {
                    let is_me = highlight == Some(row.user_id);
                    let name = if is_me {
                        RichText::new(&row.display_name)
                            .strong()
                            .color(DarkTheme::ACCENT)
                    } else {
                        RichText::new(&row.display_name)
                    };
                    ui.label(format!("{}", rank + 1));
                    ui.label(name);
                    ui.label(row.high_score.to_string());
                    ui.label(row.games_played.to_string());
                    ui.end_row();
                }
            });
    }
}
