use eframe::egui;

use crate::engine::interpret::Band;
use crate::engine::protocol::EngineCommand;
use crate::model::dimension::Dimension;
use crate::ui::app::QuizApp;

/// Scoreboard, navigation and settings.
pub fn draw_left_panel(ctx: &egui::Context, app: &mut QuizApp) {
    egui::SidePanel::left("scoreboard")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Scoreboard");
            ui.add_space(4.0);

            let scores = app.engine.session().scores;
            egui::Grid::new("scoreboard_grid").num_columns(2).show(ui, |ui| {
                for d in Dimension::ALL {
                    ui.label(d.label());
                    ui.strong(scores.get(d).to_string());
                    ui.end_row();
                }
            });

            ui.separator();

            if ui.button("Restart (choose another scenario)").clicked() {
                app.send_command(EngineCommand::Restart);
            }
            if ui.button("View leaderboard").clicked() {
                app.send_command(EngineCommand::ViewLeaderboard);
            }

            ui.separator();

            ui.collapsing("Settings", |ui| {
                let mut changed = false;

                ui.label("UI Scale");
                changed |= ui
                    .add(egui::Slider::new(&mut app.settings.ui_scale, 0.75..=2.0))
                    .changed();

                ui.add_space(4.0);
                ui.label("Band colors");
                for band in [Band::Negative, Band::Neutral, Band::Positive] {
                    ui.horizontal(|ui| {
                        let mut color = app.settings.color(band);
                        if ui.color_edit_button_srgba(&mut color).changed() {
                            app.settings.set_color(band, color);
                            changed = true;
                        }
                        ui.label(band.key());
                    });
                }

                ui.add_space(4.0);
                ui.label("Leaderboard file");
                ui.small(app.engine.leaderboard_path().display().to_string());

                if changed {
                    app.save_settings();
                }
            });
        });
}
