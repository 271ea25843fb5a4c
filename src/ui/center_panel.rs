use eframe::egui;

use crate::engine::catalog;
use crate::engine::leaderboard::SortField;
use crate::engine::protocol::EngineCommand;
use crate::model::dimension::Dimension;
use crate::model::session::Page;
use crate::ui::app::{QuizApp, Status};

const KEY_LEARNINGS: [&str; 3] = [
    "Lack of governance often induces delays and rework later; invest early in discovery, metadata and quality.",
    "Metadata, lineage and access controls are enablers for scaling and explainability.",
    "Governance drives trust, compliance, and adoption, which are prerequisites to realize enterprise impact.",
];

pub fn draw_center_panel(ctx: &egui::Context, app: &mut QuizApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        draw_status(ui, app.ui.status.as_ref());

        let page = app.engine.session().page;
        egui::ScrollArea::vertical().show(ui, |ui| match page {
            Page::Intro => draw_intro(ui, app),
            Page::Game => draw_game(ui, app),
            Page::Results => draw_results(ui, app),
            Page::Leaderboard => draw_leaderboard(ui, app),
        });
    });
}

fn draw_status(ui: &mut egui::Ui, status: Option<&Status>) {
    let Some(status) = status else {
        return;
    };
    let (color, text) = match status {
        Status::Info(t) => (egui::Color32::from_rgb(40, 130, 70), t),
        Status::Warning(t) => (egui::Color32::from_rgb(200, 140, 20), t),
        Status::Error(t) => (egui::Color32::from_rgb(170, 50, 50), t),
    };
    ui.colored_label(color, text);
    ui.separator();
}

/* ---------- Intro ---------- */

fn draw_intro(ui: &mut egui::Ui, app: &mut QuizApp) {
    ui.heading("Data Governance Serious Game");
    ui.add_space(6.0);

    ui.label(
        "Role: you are a data decision-maker steering the rollout of an AI product. \
         Goal: understand how governance choices affect time, cost/risk, trust and business impact.",
    );
    ui.add_space(6.0);

    ui.strong("Measured dimensions");
    for d in Dimension::ALL {
        ui.label(format!("• {}: {}", d.label(), d.description()));
    }

    ui.add_space(6.0);
    ui.label(
        "Each scenario follows a project lifecycle: \
         Discovery → Quality → Metadata/Lineage → Compliance/Access → Scaling.",
    );
    ui.separator();

    egui::ComboBox::from_label("Choose a scenario")
        .selected_text(app.ui.selected_scenario.clone())
        .show_ui(ui, |ui| {
            for name in catalog::names() {
                ui.selectable_value(&mut app.ui.selected_scenario, name.to_string(), name);
            }
        });

    if ui.button("Start scenario").clicked() {
        let name = app.ui.selected_scenario.clone();
        app.send_command(EngineCommand::SelectScenario(name));
    }

    ui.add_space(12.0);
    ui.label("You can look at the existing leaderboard:");
    if ui.button("View leaderboard").clicked() {
        app.send_command(EngineCommand::ViewLeaderboard);
    }
}

/* ---------- Game ---------- */

fn draw_game(ui: &mut egui::Ui, app: &mut QuizApp) {
    let session = app.engine.session();
    let (Some(scenario), Some(progress)) = (session.scenario, app.engine.progress()) else {
        return;
    };
    let step_index = session.step;
    let Some(step) = scenario.step(step_index) else {
        return;
    };

    ui.label(egui::RichText::new(scenario.name).small());
    ui.add(egui::ProgressBar::new(progress.fraction));
    ui.label(format!(
        "Progress: Step {} / {} - Remaining: {}",
        progress.step_number, progress.total, progress.remaining
    ));
    ui.add_space(8.0);

    ui.heading(step.prompt);
    ui.add_space(8.0);

    let mut picked = None;
    for (i, choice) in step.choices.iter().enumerate() {
        ui.horizontal_wrapped(|ui| {
            if ui.button(choice.label).clicked() {
                picked = Some(i);
            }
            ui.small(choice.deltas.signed_summary());
        });
        ui.add_space(4.0);
    }

    if let Some(choice) = picked {
        app.send_command(EngineCommand::ChooseOption {
            step: step_index,
            choice,
        });
    }
}

/* ---------- Results ---------- */

fn draw_results(ui: &mut egui::Ui, app: &mut QuizApp) {
    let Some(interpretations) = app.engine.interpretations() else {
        return;
    };
    let total = app.engine.session().scores.total();

    ui.heading("Scenario completed!");
    ui.add_space(6.0);
    ui.strong("Final scores");

    ui.columns(4, |cols| {
        for (col, item) in cols.iter_mut().zip(interpretations.iter()) {
            col.label(item.dimension.label());
            col.heading(item.value.to_string());
            col.colored_label(app.settings.color(item.band), item.headline);
            col.label(item.detail);
        }
    });

    ui.separator();
    ui.heading(format!("Total score: {total}"));
    ui.small("(sum of the four dimensions)");

    ui.separator();
    ui.strong("Save your result to the leaderboard");
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut app.ui.player_name)
                .hint_text("Your name (will appear on leaderboard)"),
        );
        let can_save = !app.ui.player_name.trim().is_empty();
        if ui
            .add_enabled(can_save, egui::Button::new("Save score to leaderboard"))
            .clicked()
        {
            let name = app.ui.player_name.clone();
            app.send_command(EngineCommand::Save { name });
        }
    });

    ui.separator();
    ui.strong("Key learnings");
    for line in KEY_LEARNINGS {
        ui.label(format!("• {line}"));
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Play another scenario").clicked() {
            app.send_command(EngineCommand::Restart);
        }
        if ui.button("View leaderboard").clicked() {
            app.send_command(EngineCommand::ViewLeaderboard);
        }
    });
}

/* ---------- Leaderboard ---------- */

fn draw_leaderboard(ui: &mut egui::Ui, app: &mut QuizApp) {
    ui.heading("Leaderboard");
    ui.add_space(6.0);

    let mut commands = Vec::new();

    if app.engine.leaderboard_is_empty() {
        ui.label("No entries yet - play a scenario and save your score!");
    } else {
        let view = app.engine.leaderboard_view();
        let options = app.engine.view_options().clone();

        ui.strong("Filter & sort leaderboard");
        ui.horizontal(|ui| {
            let mut filter = options.scenario.clone();
            egui::ComboBox::from_label("Scenario filter")
                .selected_text(filter.clone().unwrap_or_else(|| "All".into()))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut filter, None, "All");
                    for name in &view.scenarios {
                        ui.selectable_value(&mut filter, Some(name.clone()), name);
                    }
                });
            if filter != options.scenario {
                commands.push(EngineCommand::FilterLeaderboard(filter));
            }
        });

        ui.horizontal(|ui| {
            let mut field = options.sort;
            let mut ascending = options.ascending;
            egui::ComboBox::from_label("Sort by")
                .selected_text(field.label())
                .show_ui(ui, |ui| {
                    for f in SortField::ALL {
                        ui.selectable_value(&mut field, f, f.label());
                    }
                });
            ui.checkbox(&mut ascending, "Ascending");
            if field != options.sort || ascending != options.ascending {
                commands.push(EngineCommand::SortLeaderboard { field, ascending });
            }
        });

        ui.add_space(6.0);
        egui::Grid::new("leaderboard_grid").striped(true).show(ui, |ui| {
            for h in ["Timestamp", "Name", "Scenario", "Time", "Cost", "Trust", "Impact", "Total"] {
                ui.strong(h);
            }
            ui.end_row();

            for e in &view.rows {
                ui.label(&e.timestamp);
                ui.label(&e.name);
                ui.label(&e.scenario);
                ui.label(e.time.to_string());
                ui.label(e.cost.to_string());
                ui.label(e.trust.to_string());
                ui.label(e.impact.to_string());
                ui.strong(e.total.to_string());
                ui.end_row();
            }
        });

        ui.separator();
        ui.strong("Top performers");
        let mut top_n = options.top_n;
        ui.horizontal(|ui| {
            ui.label("Top N");
            ui.add(egui::DragValue::new(&mut top_n).range(1..=20));
        });
        if top_n != options.top_n {
            commands.push(EngineCommand::TopN(top_n));
        }

        egui::Grid::new("top_grid").striped(true).show(ui, |ui| {
            ui.strong("Name");
            ui.strong("Scenario");
            ui.strong("Total");
            ui.end_row();
            for e in &view.top {
                ui.label(&e.name);
                ui.label(&e.scenario);
                ui.label(e.total.to_string());
                ui.end_row();
            }
        });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Export…").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("CSV", &["csv"])
                    .set_file_name("leaderboard.csv")
                    .save_file()
                {
                    commands.push(EngineCommand::ExportLeaderboard(path));
                }
            }
            if ui.button("Clear leaderboard (danger!)").clicked() {
                commands.push(EngineCommand::ClearLeaderboard);
            }
        });
    }

    ui.add_space(8.0);
    if ui.button("Back to intro").clicked() {
        commands.push(EngineCommand::Back);
    }

    for cmd in commands {
        app.send_command(cmd);
    }
}
