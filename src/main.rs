//! Workout tracker application and its start-up settings.

use dirs_next as dirs;
use eframe::{App, Frame, NativeOptions, egui};
use egui_plot::{Legend, Plot};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

mod analysis;
use analysis::{aggregate, distinct_exercises, format_plan};
mod catalog;
use catalog::{
    DURATION_OPTIONS, EXERCISE_OPTIONS, REP_OPTIONS, WEIGHT_OPTIONS, WorkoutSelection,
};
mod plotting;
use plotting::{CHART_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL, bar_labels, duration_bar_chart};
mod session;
use session::{Notice, Session};
mod workout_log;
use workout_log::WorkoutRecord;

const FOOTER_NOTE: &str = "Note: Track your progress consistently and stay motivated! \u{1F4AA}";
const GOAL_HINT: &str = "E.g., Run 5km in under 30 minutes";

fn default_plot_width() -> f32 {
    600.0
}

fn default_plot_height() -> f32 {
    300.0
}

fn default_bar_color() -> [u8; 3] {
    [0, 0, 255]
}

fn default_notice_secs() -> u64 {
    3
}

fn default_true() -> bool {
    true
}

/// Display preferences read once at start-up.
///
/// The file is only ever read; workout data, goals and plans are never
/// written to disk. Missing fields fall back to their defaults so a partial
/// file is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Settings {
    #[serde(default = "default_plot_width")]
    plot_width: f32,
    #[serde(default = "default_plot_height")]
    plot_height: f32,
    #[serde(default = "default_bar_color")]
    bar_color: [u8; 3],
    #[serde(default = "default_notice_secs")]
    notice_secs: u64,
    #[serde(default = "default_true")]
    show_footer_note: bool,
}

impl Settings {
    const FILE: &'static str = "workout_tracker_settings.json";

    fn path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|p| p.join(Self::FILE))
    }

    /// Load settings from the JSON configuration file, falling back to the
    /// defaults when it is missing or unreadable.
    fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&data) {
            Ok(cfg) => {
                log::info!("Loaded settings from {}", path.display());
                cfg
            }
            Err(e) => {
                log::warn!("Ignoring invalid settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    fn bar_color32(&self) -> egui::Color32 {
        let [r, g, b] = self.bar_color;
        egui::Color32::from_rgb(r, g, b)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            plot_width: default_plot_width(),
            plot_height: default_plot_height(),
            bar_color: default_bar_color(),
            notice_secs: default_notice_secs(),
            show_footer_note: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortColumn {
    Date,
    Exercise,
    Duration,
    Reps,
    Weight,
}

/// Order records for display without touching the underlying log.
///
/// `None` keeps insertion order. Ties keep their logged order.
fn sorted_records(
    records: &[WorkoutRecord],
    sort: Option<(SortColumn, bool)>,
) -> Vec<WorkoutRecord> {
    let mut rows = records.to_vec();
    if let Some((column, ascending)) = sort {
        rows.sort_by(|a, b| {
            let ord = match column {
                SortColumn::Date => a.date.cmp(&b.date),
                SortColumn::Exercise => a.exercise.name().cmp(b.exercise.name()),
                SortColumn::Duration => a.duration_minutes.cmp(&b.duration_minutes),
                SortColumn::Reps => a.reps.cmp(&b.reps),
                SortColumn::Weight => a.weight_lbs.cmp(&b.weight_lbs),
            };
            if ascending { ord } else { ord.reverse() }
        });
    }
    rows
}

struct WorkoutTrackerApp {
    session: Session,
    selection: WorkoutSelection,
    planned: Vec<String>,
    goal_input: String,
    notice: Option<(Notice, Instant)>,
    settings: Settings,
    show_settings: bool,
    sort: Option<(SortColumn, bool)>,
}

impl Default for WorkoutTrackerApp {
    fn default() -> Self {
        Self::new(Settings::load())
    }
}

impl WorkoutTrackerApp {
    fn new(settings: Settings) -> Self {
        Self {
            session: Session::new(),
            selection: WorkoutSelection::default(),
            planned: Vec::new(),
            goal_input: String::new(),
            notice: None,
            settings,
            show_settings: false,
            sort: None,
        }
    }

    fn show_notice(&mut self, notice: Notice) {
        self.notice = Some((notice, Instant::now()));
    }

    fn log_selected_workout(&mut self) {
        let notice = self.session.log_workout_today(self.selection);
        self.show_notice(notice);
    }

    fn apply_goal(&mut self) {
        if let Some(notice) = self.session.set_goal(&self.goal_input) {
            self.show_notice(notice);
        }
    }

    fn save_plan(&mut self) {
        let notice = match self.session.save_weekly_plan(&self.planned) {
            Ok(notice) => notice,
            Err(e) => e.into(),
        };
        self.show_notice(notice);
    }

    fn sort_button(
        ui: &mut egui::Ui,
        label: &str,
        column: SortColumn,
        sort: &mut Option<(SortColumn, bool)>,
    ) {
        let arrow = match *sort {
            Some((c, true)) if c == column => " \u{25B2}",
            Some((c, false)) if c == column => " \u{25BC}",
            _ => "",
        };
        if ui.button(format!("{label}{arrow}")).clicked() {
            *sort = match *sort {
                Some((c, asc)) if c == column => Some((column, !asc)),
                _ => Some((column, true)),
            };
        }
    }

    fn log_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("\u{1F4DD} Log Your Workout");
        egui::Grid::new("log_form_grid").num_columns(2).show(ui, |ui| {
            ui.label("Exercise Name");
            egui::ComboBox::from_id_source("exercise_combo")
                .selected_text(self.selection.exercise.name())
                .show_ui(ui, |ui| {
                    for ex in EXERCISE_OPTIONS {
                        ui.selectable_value(&mut self.selection.exercise, ex, ex.name());
                    }
                });
            ui.end_row();

            ui.label("Duration (mins)");
            egui::ComboBox::from_id_source("duration_combo")
                .selected_text(self.selection.duration_minutes.to_string())
                .show_ui(ui, |ui| {
                    for d in DURATION_OPTIONS {
                        ui.selectable_value(
                            &mut self.selection.duration_minutes,
                            d,
                            d.to_string(),
                        );
                    }
                });
            ui.end_row();

            ui.label("Repetitions");
            egui::ComboBox::from_id_source("reps_combo")
                .selected_text(self.selection.reps.to_string())
                .show_ui(ui, |ui| {
                    for r in REP_OPTIONS {
                        ui.selectable_value(&mut self.selection.reps, r, r.to_string());
                    }
                });
            ui.end_row();

            ui.label("Weight (lbs)");
            egui::ComboBox::from_id_source("weight_combo")
                .selected_text(self.selection.weight_lbs.to_string())
                .show_ui(ui, |ui| {
                    for w in WEIGHT_OPTIONS {
                        ui.selectable_value(&mut self.selection.weight_lbs, w, w.to_string());
                    }
                });
            ui.end_row();
        });
        if ui.button("\u{2705} Log Workout").clicked() {
            self.log_selected_workout();
        }
    }

    fn weekly_planner(&mut self, ui: &mut egui::Ui) {
        ui.heading("\u{1F4C5} Weekly Workout Planner");
        let exercises = distinct_exercises(self.session.workouts());
        self.planned.retain(|p| exercises.contains(p));
        ui.label("Select your workouts for the week");
        ui.menu_button(
            if self.planned.is_empty() {
                "Choose an option".to_string()
            } else {
                self.planned.join(", ")
            },
            |ui| {
                if exercises.is_empty() {
                    ui.label("No options to select.");
                }
                for ex in &exercises {
                    let mut sel = self.planned.contains(ex);
                    if ui.checkbox(&mut sel, ex).changed() {
                        if sel {
                            if !self.planned.contains(ex) {
                                self.planned.push(ex.clone());
                            }
                        } else {
                            self.planned.retain(|e| e != ex);
                        }
                    }
                }
            },
        );
        if ui.button("\u{1F4C5} Save Weekly Plan").clicked() {
            self.save_plan();
        }
    }

    fn workout_table(&mut self, ui: &mut egui::Ui) {
        let rows = sorted_records(self.session.workouts().records(), self.sort);
        let mut sort = self.sort;
        let row_height = ui.text_style_height(&egui::TextStyle::Body);
        egui_extras::TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(false)
            .column(egui_extras::Column::auto())
            .column(egui_extras::Column::auto())
            .column(egui_extras::Column::auto())
            .column(egui_extras::Column::auto())
            .column(egui_extras::Column::auto())
            .header(row_height, |mut header| {
                header.col(|ui| {
                    Self::sort_button(ui, "Date", SortColumn::Date, &mut sort);
                });
                header.col(|ui| {
                    Self::sort_button(ui, "Exercise", SortColumn::Exercise, &mut sort);
                });
                header.col(|ui| {
                    Self::sort_button(ui, "Duration (mins)", SortColumn::Duration, &mut sort);
                });
                header.col(|ui| {
                    Self::sort_button(ui, "Reps", SortColumn::Reps, &mut sort);
                });
                header.col(|ui| {
                    Self::sort_button(ui, "Weight (lbs)", SortColumn::Weight, &mut sort);
                });
            })
            .body(|mut body| {
                for r in &rows {
                    body.row(row_height, |mut row| {
                        row.col(|ui| {
                            ui.label(r.date.format("%Y-%m-%d").to_string());
                        });
                        row.col(|ui| {
                            ui.label(r.exercise.name());
                        });
                        row.col(|ui| {
                            ui.label(r.duration_minutes.to_string());
                        });
                        row.col(|ui| {
                            ui.label(r.reps.to_string());
                        });
                        row.col(|ui| {
                            ui.label(r.weight_lbs.to_string());
                        });
                    });
                }
            });
        self.sort = sort;
    }

    fn duration_chart(&self, ui: &mut egui::Ui) {
        let Some(summary) = aggregate(self.session.workouts()) else {
            return;
        };
        let labels = bar_labels(&summary);
        let chart = duration_bar_chart(&summary, self.settings.bar_color32());
        ui.label(egui::RichText::new(CHART_TITLE).strong());
        Plot::new("duration_plot")
            .width(self.settings.plot_width)
            .height(self.settings.plot_height)
            .x_axis_label(X_AXIS_LABEL)
            .y_axis_label(Y_AXIS_LABEL)
            .x_axis_formatter(move |mark, _chars, _| {
                plotting::format_exercise_mark(&labels, mark.value)
            })
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);
            });
    }

    fn goal_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("\u{1F3C6} Set Fitness Goals");
        ui.horizontal(|ui| {
            ui.label("Goal");
            ui.add(egui::TextEdit::singleline(&mut self.goal_input).hint_text(GOAL_HINT));
        });
        if ui.button("\u{2705} Set Goal").clicked() {
            self.apply_goal();
        }
        if let Some(goal) = self.session.goal() {
            ui.label(format!("Current goal: {goal}"));
        }
    }

    fn settings_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings;
        egui::Window::new("Settings")
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add(
                    egui::Slider::new(&mut self.settings.plot_width, 200.0..=1200.0)
                        .text("Plot width"),
                );
                ui.add(
                    egui::Slider::new(&mut self.settings.plot_height, 100.0..=800.0)
                        .text("Plot height"),
                );
                ui.add(
                    egui::Slider::new(&mut self.settings.notice_secs, 1..=10)
                        .text("Notice seconds"),
                );
                ui.horizontal(|ui| {
                    ui.label("Bar color");
                    ui.color_edit_button_srgb(&mut self.settings.bar_color);
                });
                ui.checkbox(&mut self.settings.show_footer_note, "Show footer note");
                ui.label("Changes apply to this session only.");
            });
        self.show_settings = open;
    }

    fn notice_toast(&mut self, ctx: &egui::Context) {
        let Some((notice, start)) = &self.notice else {
            return;
        };
        if start.elapsed() >= Duration::from_secs(self.settings.notice_secs) {
            self.notice = None;
            return;
        }
        let color = match notice {
            Notice::Success(_) => egui::Color32::from_rgb(40, 160, 60),
            Notice::Warning(_) => egui::Color32::from_rgb(220, 160, 0),
        };
        egui::Area::new(egui::Id::new("notice_toast"))
            .anchor(egui::Align2::RIGHT_TOP, [-10.0, 30.0])
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.colored_label(color, notice.text());
                });
            });
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

impl App for WorkoutTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Settings").clicked() {
                        self.show_settings = true;
                        ui.close_menu();
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        egui::SidePanel::left("form_panel").show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.log_form(ui);
                ui.separator();
                self.weekly_planner(ui);
            });
        });

        if self.settings.show_footer_note {
            egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
                ui.label(FOOTER_NOTE);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("\u{1F4CA} Workout Log");
                if self.session.workouts().is_empty() {
                    ui.label("No workouts logged yet");
                } else {
                    self.workout_table(ui);
                    ui.separator();
                    ui.heading("\u{1F4C8} Progress Over Time");
                    self.duration_chart(ui);
                    ui.separator();
                    self.goal_section(ui);
                }

                ui.separator();
                ui.heading("\u{1F5D3} Weekly Plan");
                if let Some(plan) = self.session.weekly_plan() {
                    ui.label(format_plan(plan));
                }
            });
        });

        if self.show_settings {
            self.settings_window(ctx);
        }

        self.notice_toast(ctx);
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let options = NativeOptions::default();
    eframe::run_native(
        "\u{1F3CB} Workout Tracker & Planner",
        options,
        Box::new(|_cc| Box::new(WorkoutTrackerApp::default())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Exercise;
    use chrono::NaiveDate;
    use once_cell::sync::Lazy;
    use std::sync::Mutex;

    static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn with_config_home<F: FnOnce(&std::path::Path)>(f: F) {
        use std::env;

        let _guard = ENV_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let prev_config = env::var_os("XDG_CONFIG_HOME");
        unsafe {
            env::set_var("XDG_CONFIG_HOME", dir.path());
        }

        f(dir.path());

        if let Some(val) = prev_config {
            unsafe {
                env::set_var("XDG_CONFIG_HOME", val);
            }
        } else {
            unsafe {
                env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    fn record(day: u32, exercise: Exercise, duration: u32) -> WorkoutRecord {
        WorkoutRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            exercise,
            duration_minutes: duration,
            reps: 10,
            weight_lbs: 20,
        }
    }

    #[test]
    fn settings_roundtrip() {
        let s = Settings {
            plot_width: 800.0,
            plot_height: 250.0,
            bar_color: [10, 20, 30],
            notice_secs: 5,
            show_footer_note: false,
        };
        let json = serde_json::to_string(&s).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(s, loaded);
    }

    #[test]
    fn partial_settings_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"plot_width": 900.0}"#).unwrap();
        assert_eq!(loaded.plot_width, 900.0);
        assert_eq!(loaded.plot_height, 300.0);
        assert_eq!(loaded.bar_color, [0, 0, 255]);
        assert!(loaded.show_footer_note);
    }

    #[test]
    fn settings_load_from_config_dir() {
        with_config_home(|_| {
            assert_eq!(Settings::load(), Settings::default());

            let path = Settings::path().unwrap();
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, r#"{"notice_secs": 7}"#).unwrap();
            assert_eq!(Settings::load().notice_secs, 7);

            std::fs::write(&path, "not json").unwrap();
            assert_eq!(Settings::load(), Settings::default());
        });
    }

    #[test]
    fn sorted_records_keeps_log_order_by_default() {
        let records = vec![
            record(3, Exercise::Yoga, 30),
            record(1, Exercise::Cycling, 90),
        ];
        assert_eq!(sorted_records(&records, None), records);
    }

    #[test]
    fn sorted_records_by_column() {
        let records = vec![
            record(3, Exercise::Yoga, 30),
            record(1, Exercise::Cycling, 90),
            record(2, Exercise::Running, 15),
        ];
        let by_date = sorted_records(&records, Some((SortColumn::Date, true)));
        let days: Vec<_> = by_date.iter().map(|r| r.date).collect();
        assert_eq!(
            days,
            vec![records[1].date, records[2].date, records[0].date]
        );

        let by_duration = sorted_records(&records, Some((SortColumn::Duration, false)));
        let durations: Vec<u32> = by_duration.iter().map(|r| r.duration_minutes).collect();
        assert_eq!(durations, vec![90, 30, 15]);

        let by_name = sorted_records(&records, Some((SortColumn::Exercise, true)));
        let names: Vec<&str> = by_name.iter().map(|r| r.exercise.name()).collect();
        assert_eq!(names, vec!["Cycling", "Running", "Yoga"]);
    }

    #[test]
    fn app_actions_set_notices() {
        let mut app = WorkoutTrackerApp::new(Settings::default());

        app.save_plan();
        assert_eq!(
            app.notice.as_ref().map(|(n, _)| n.clone()),
            Some(Notice::Warning("Please select at least one workout.".into()))
        );

        app.selection = WorkoutSelection {
            exercise: Exercise::Running,
            duration_minutes: 60,
            reps: 10,
            weight_lbs: 0,
        };
        app.log_selected_workout();
        assert_eq!(app.session.workouts().len(), 1);
        assert!(matches!(app.notice, Some((Notice::Success(_), _))));

        app.notice = None;
        app.goal_input.clear();
        app.apply_goal();
        assert!(app.notice.is_none());
        assert_eq!(app.session.goal(), None);

        app.goal_input = "Run 5km".into();
        app.apply_goal();
        assert_eq!(app.session.goal(), Some("Run 5km"));
        assert_eq!(app.session.workouts().len(), 1);

        app.planned = vec!["Running".into()];
        app.save_plan();
        assert_eq!(app.session.weekly_plan(), Some(["Running".to_string()].as_slice()));
    }

    #[test]
    fn frame_renders_with_workouts() {
        let mut app = WorkoutTrackerApp::new(Settings::default());
        app.log_selected_workout();
        app.goal_input = "Stay consistent".into();
        app.apply_goal();

        let ctx = egui::Context::default();
        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                app.workout_table(ui);
                app.duration_chart(ui);
                app.goal_section(ui);
                app.weekly_planner(ui);
            });
        });
        assert_eq!(app.session.workouts().len(), 1);
    }
}
