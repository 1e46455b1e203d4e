//! Main menu screen.

use egui::{RichText, Ui, Vec2};

use crate::ui::theme::DarkTheme;

/// Action requested from the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Start a new run
    StartRun,
    /// Sign in with the given account identifier
    SignIn(String),
}

/// Main menu UI.
#[derive(Debug, Default)]
pub struct MenuScreen {
    account_input: String,
}

impl MenuScreen {
    /// Create a new menu screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the menu and return the requested action, if any.
    ///
    /// `signed_in` carries the current display name when a session exists;
    /// when absent a sign-in box is offered (playing stays possible, but
    /// scores are only saved for signed-in players).
    pub fn show(&mut self, ui: &mut Ui, signed_in: Option<&str>) -> Option<MenuAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(32.0);

            ui.label(RichText::new("\u{1FA93}").size(72.0));
            ui.add_space(8.0);
            ui.label(
                RichText::new("LOGSLICE")
                    .size(42.0)
                    .strong()
                    .color(DarkTheme::ACCENT),
            );
            ui.label(
                RichText::new("Slice the falling logs. Build combos. Dodge bombs.")
                    .size(16.0)
                    .weak(),
            );

            ui.add_space(40.0);

            if ui
                .add_sized(
                    Vec2::new(280.0, 60.0),
                    egui::Button::new(RichText::new("Start Slicing").size(20.0)),
                )
                .clicked()
            {
                action = Some(MenuAction::StartRun);
            }

            ui.add_space(32.0);

            match signed_in {
                Some(name) => {
                    ui.label(
                        RichText::new(format!("Playing as {}", name))
                            .size(14.0)
                            .color(DarkTheme::TEXT_SECONDARY),
                    );
                }
                None => {
                    ui.label(RichText::new("Sign in to save your scores").size(14.0).weak());
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.add_space((ui.available_width() - 320.0).max(0.0) / 2.0);
                        let edit = egui::TextEdit::singleline(&mut self.account_input)
                            .hint_text("you@example.com")
                            .desired_width(220.0);
                        let response = ui.add(edit);
                        let submitted = response.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter));
                        if (ui.button("Sign In").clicked() || submitted)
                            && !self.account_input.trim().is_empty()
                        {
                            action =
                                Some(MenuAction::SignIn(self.account_input.trim().to_string()));
                            self.account_input.clear();
                        }
                    });
                }
            }
        });

        action
    }
}
