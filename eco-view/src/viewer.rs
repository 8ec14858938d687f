//! Interactive three-species ecosystem viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns a simulation run (state,
//! parameters, history, markers) and implements [`eframe::App`] to drive
//! the model on a fixed tick interval and render the result.

use eco_core::{
    config::Config,
    history::History,
    markers::{MarkerSet, MarkerSpec},
    model,
    state::State,
    types::Species,
};
use eframe::App;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use glam::Vec2;
use rand::{Rng, rng};

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: [`State`], [`Config`], [`History`].
/// - The marker presentation: per-species [`MarkerSpec`]s and [`MarkerSet`]s
///   scattered over a bounded area.
/// - UI configuration (pan/zoom, timing) and eframe/egui callbacks.
///
/// The typical per-frame update is:
/// 1. Handle UI interactions / input.
/// 2. If `running` is `true` and a full tick interval has elapsed, call
///    [`Viewer::step_once`].
/// 3. Render the markers, the history plot, and the status panels.
///
/// ### Fields
/// - `state` - Current populations of the run.
/// - `cfg` - Simulation parameters (rates, efficiencies, tick interval).
/// - `history` - Per-species population log, one entry per tick.
///
/// - `initial` - Populations a Reset starts from; editable in the UI.
/// - `area_half_extents` - Half extents of the rectangle markers scatter in.
/// - `specs` - Per-species marker derivation rules, indexed by species.
/// - `markers` - Current marker positions, indexed by species.
///
/// - `rng` - Random number generator used for scattering markers.
///
/// - `running` - Whether the simulation is currently auto-advancing.
/// - `zoom` - Zoom factor for world-to-screen coordinate mapping.
/// - `pan` - Screen-space pan offset in pixels.
///
/// - `last_step_time` - Time stamp of the last tick (egui time).
/// - `last_step_dt` - Actual time delta between the last two ticks (for
///   display only).
pub struct Viewer {
    state: State,
    cfg: Config,
    history: History,

    initial: State,
    area_half_extents: Vec2,
    specs: [MarkerSpec; 3],
    markers: [MarkerSet; 3],

    rng: rand::rngs::ThreadRng,

    running: bool,
    zoom: f32,
    pan: egui::Vec2,

    last_step_time: f64,
    last_step_dt: f64,
}

impl Viewer {
    /// Creates a new viewer with the default run configuration.
    ///
    /// The default setup is:
    /// - [`State::default`] populations (200 plants, 40 herbivores,
    ///   8 carnivores), already recorded as history entry 0.
    /// - [`Config::default`] simulation parameters.
    /// - A 10 x 10 world-unit scatter area with markers drawn for the
    ///   initial populations.
    ///
    /// The camera starts zoomed in on the scatter area with no pan.
    ///
    /// ### Returns
    /// A fully-initialized [`Viewer`] ready to be passed to
    /// `eframe::run_native`.
    pub fn new() -> Self {
        let mut rng = rng();
        let state = State::default();
        let cfg = Config::default();

        let mut history = History::new();
        history.record_initial(&state);

        let area_half_extents = Vec2::new(5.0, 5.0);
        let specs = Species::ALL.map(MarkerSpec::for_species);
        let markers = Self::scatter_markers(&state, &specs, area_half_extents, &mut rng);

        Self {
            state,
            cfg,
            history,
            initial: state,
            area_half_extents,
            specs,
            markers,
            rng,
            running: false,
            zoom: 40.0,
            pan: egui::vec2(0.0, 0.0),
            last_step_time: 0.0,
            last_step_dt: 0.0,
        }
    }

    /// Scatters a fresh marker set for every species.
    ///
    /// Marker counts are derived from the current populations via the
    /// per-species [`MarkerSpec`]s; positions are uniform over the scatter
    /// area. The previous sets are dropped wholesale.
    fn scatter_markers(
        state: &State,
        specs: &[MarkerSpec; 3],
        half_extents: Vec2,
        rng: &mut impl Rng,
    ) -> [MarkerSet; 3] {
        Species::ALL.map(|species| {
            let count = specs[species.index()].count_for(state.population(species));
            MarkerSet::scatter_in_rect(count, half_extents, rng)
        })
    }

    /// Restarts the run from the configured initial populations.
    ///
    /// This keeps the current parameter values and camera settings, but:
    /// - Replaces the state with the (possibly edited) initial populations.
    /// - Starts a fresh history seeded with that state.
    /// - Rescatters all markers.
    /// - Clears the step timer and stops auto-running.
    fn reset(&mut self) {
        self.state = self.initial;
        self.history = History::new();
        self.history.record_initial(&self.state);
        self.markers = Self::scatter_markers(
            &self.state,
            &self.specs,
            self.area_half_extents,
            &mut self.rng,
        );
        self.running = false;
        self.last_step_time = 0.0;
        self.last_step_dt = 0.0;
    }

    /// Advances the simulation by a single tick.
    ///
    /// The tick consists of:
    /// 1. [`model::step`] - compute the next populations from the current
    ///    snapshot and commit them.
    /// 2. [`History::record_step`] - append the committed state.
    /// 3. [`Viewer::scatter_markers`] - redraw every species' markers.
    ///
    /// One info line with the new populations is logged per tick.
    fn step_once(&mut self) {
        self.state = model::step(&self.state, &self.cfg);
        self.history.record_step(&self.state);
        self.markers = Self::scatter_markers(
            &self.state,
            &self.specs,
            self.area_half_extents,
            &mut self.rng,
        );

        log::info!(
            "tick {}: plants = {}, herbivores = {}, carnivores = {}",
            self.history.len() - 1,
            self.state.plants,
            self.state.herbivores,
            self.state.carnivores
        );
    }

    /// Converts a world-space position to screen-space.
    ///
    /// World coordinates are scaled by `zoom`, offset by `pan`, and then
    /// centered inside the given `rect`. The y-axis is flipped so that
    /// positive y goes up in world space.
    ///
    /// ### Parameters
    /// - `p` - World-space position.
    /// - `rect` - Screen-space rectangle representing the drawing area.
    ///
    /// ### Returns
    /// The corresponding egui position in screen-space.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        egui::pos2(
            center.x + p.x * self.zoom + self.pan.x,
            center.y - p.y * self.zoom + self.pan.y,
        )
    }

    /// Converts a screen-space position back to world-space.
    ///
    /// This is the inverse of [`Viewer::world_to_screen`] (up to floating
    /// point rounding), using the same `zoom`, `pan`, and `rect` center.
    ///
    /// ### Parameters
    /// - `p` - Screen-space position in egui coordinates.
    /// - `rect` - Screen-space rectangle representing the drawing area.
    ///
    /// ### Returns
    /// The corresponding position in world-space.
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        let x = (p.x - center.x - self.pan.x) / self.zoom;
        let y = (center.y - p.y + self.pan.y) / self.zoom;
        Vec2::new(x, y)
    }

    /// Helper to draw a labeled `u32` [`egui::DragValue`].
    fn labeled_drag_u32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut u32,
        range: std::ops::RangeInclusive<u32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run controls, stepping, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                ui.add(
                    egui::DragValue::new(&mut self.cfg.tick_interval)
                        .prefix("tick interval = ")
                        .range(0.01..=10.0)
                        .speed(0.01),
                );

                if ui.button("Step").clicked() {
                    let now = ctx.input(|i| i.time);
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = now - self.last_step_time;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 1.0..=200.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (tick number, populations, timing).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("dt target = {:.3} s", self.cfg.tick_interval));
                ui.label(format!("dt last = {:.3} s", self.last_step_dt));
                ui.separator();
                ui.label(format!("tick = {}", self.history.len().saturating_sub(1)));
                for species in Species::ALL.iter().rev() {
                    ui.label(format!(
                        "{} = {}",
                        species.label().to_lowercase(),
                        self.state.population(*species)
                    ));
                }
            });
        });
    }

    /// Builds the right-hand configuration panel for simulation parameters.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Plants");
                Self::labeled_drag_f32(
                    ui,
                    "growth_rate:",
                    &mut self.cfg.growth_rate,
                    -1.0..=1.0,
                    0.005,
                );

                ui.separator();
                ui.label("Herbivores");
                Self::labeled_drag_f32(
                    ui,
                    "consumption:",
                    &mut self.cfg.herbivore_consumption,
                    -1.0..=1.0,
                    0.005,
                );
                Self::labeled_drag_f32(
                    ui,
                    "conversion:",
                    &mut self.cfg.herbivore_conversion,
                    -1.0..=1.0,
                    0.005,
                );
                Self::labeled_drag_f32(
                    ui,
                    "mortality:",
                    &mut self.cfg.herbivore_mortality,
                    -1.0..=1.0,
                    0.005,
                );

                ui.separator();
                ui.label("Carnivores");
                Self::labeled_drag_f32(
                    ui,
                    "consumption:",
                    &mut self.cfg.carnivore_consumption,
                    -1.0..=1.0,
                    0.005,
                );
                Self::labeled_drag_f32(
                    ui,
                    "conversion:",
                    &mut self.cfg.carnivore_conversion,
                    -1.0..=1.0,
                    0.005,
                );
                Self::labeled_drag_f32(
                    ui,
                    "mortality:",
                    &mut self.cfg.carnivore_mortality,
                    -1.0..=1.0,
                    0.005,
                );

                ui.separator();
                ui.label("Initial populations (applied on Reset)");
                Self::labeled_drag_u32(ui, "plants:", &mut self.initial.plants, 0..=100_000, 1.0);
                Self::labeled_drag_u32(
                    ui,
                    "herbivores:",
                    &mut self.initial.herbivores,
                    0..=100_000,
                    1.0,
                );
                Self::labeled_drag_u32(
                    ui,
                    "carnivores:",
                    &mut self.initial.carnivores,
                    0..=100_000,
                    1.0,
                );

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = Config::default();
                    self.initial = State::default();
                }
            });
    }

    /// Builds the history panel with one plot line per species.
    fn ui_history_panel(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("history_panel")
            .resizable(true)
            .default_height(160.0)
            .show(ctx, |ui| {
                Plot::new("population_history")
                    .legend(Legend::default())
                    .show_axes(true)
                    .show(ui, |plot_ui| {
                        for species in Species::ALL {
                            let points: PlotPoints = self
                                .history
                                .series(species)
                                .iter()
                                .enumerate()
                                .map(|(tick, &count)| [tick as f64, count as f64])
                                .collect();

                            plot_ui.line(
                                Line::new(species.label(), points).color(species_color(species)),
                            );
                        }
                    });
            });
    }

    /// Builds the central panel where the marker field is drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Pan with drag.
            if response.dragged() {
                let delta = response.drag_delta();
                self.pan += delta;
            }

            // Zoom around the mouse cursor.
            if ui.ctx().input(|i| i.raw_scroll_delta.y != 0.0) {
                let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
                if scroll != 0.0 {
                    let pointer_screen = response.hover_pos().unwrap_or(rect.center());

                    let world_before = self.screen_to_world(pointer_screen, rect);

                    let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                    let new_zoom = (self.zoom * factor).clamp(1.0, 200.0);
                    self.zoom = new_zoom;

                    let screen_after = self.world_to_screen(world_before, rect);

                    let delta = pointer_screen - screen_after;
                    self.pan += delta;
                }
            }

            // Outline of the scatter area for camera orientation.
            let half = self.area_half_extents;
            let corners = [
                Vec2::new(-half.x, -half.y),
                Vec2::new(half.x, -half.y),
                Vec2::new(half.x, half.y),
                Vec2::new(-half.x, half.y),
            ];
            let outline: Vec<egui::Pos2> = corners
                .iter()
                .map(|&c| self.world_to_screen(c, rect))
                .collect();
            painter.add(egui::Shape::closed_line(
                outline,
                egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
            ));

            // Draw markers, smallest species last so predators stay visible.
            for species in Species::ALL {
                let spec = self.specs[species.index()];
                let color = species_color(species);
                let r = (spec.size * self.zoom * 0.5).max(2.0);

                for &p in &self.markers[species.index()].points {
                    painter.circle_filled(self.world_to_screen(p, rect), r, color);
                }
            }

            // Auto-run simulation if requested.
            if self.running {
                let now = ctx.input(|i| i.time);
                let elapsed = now - self.last_step_time;
                if elapsed >= self.cfg.tick_interval as f64 {
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = elapsed;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                ctx.request_repaint();
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// This method:
    /// - Renders the top control bar, status bar, and history plot.
    /// - Renders the config side panel.
    /// - Draws the central marker view and handles camera interactions.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_history_panel(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

/// Draw color for one species, shared by markers and plot lines.
fn species_color(species: Species) -> egui::Color32 {
    match species {
        Species::Plants => egui::Color32::LIGHT_GREEN,
        Species::Herbivores => egui::Color32::LIGHT_BLUE,
        Species::Carnivores => egui::Color32::LIGHT_RED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn world_to_screen_and_back_is_roundtrip() {
        let mut viewer = Viewer::new();
        // Use non-trivial zoom and pan to exercise the math.
        viewer.zoom = 2.0;
        viewer.pan = egui::vec2(15.0, -7.0);
        let rect = test_rect();

        let world_points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, -2.5),
            Vec2::new(-3.5, 1.25),
        ];

        let eps = 1e-5;

        for p in world_points {
            let screen = viewer.world_to_screen(p, rect);
            let back = viewer.screen_to_world(screen, rect);

            assert!(
                (back.x - p.x).abs() < eps && (back.y - p.y).abs() < eps,
                "roundtrip mismatch: p={:?}, back={:?}",
                p,
                back
            );
        }
    }

    #[test]
    fn new_viewer_seeds_history_and_markers() {
        let viewer = Viewer::new();

        assert_eq!(viewer.state, State::default());
        assert_eq!(viewer.history.len(), 1);
        assert_eq!(viewer.history.series(Species::Plants), &[200]);

        // 200 plants -> 20 markers, animals one-to-one.
        assert_eq!(viewer.markers[Species::Plants.index()].points.len(), 20);
        assert_eq!(viewer.markers[Species::Herbivores.index()].points.len(), 40);
        assert_eq!(viewer.markers[Species::Carnivores.index()].points.len(), 8);

        assert!(!viewer.running);
    }

    #[test]
    fn step_once_advances_state_history_and_markers() {
        let mut viewer = Viewer::new();

        viewer.step_once();

        // Default scenario: (200, 40, 8) -> (258, 36, 7).
        assert_eq!(viewer.state, State::new(258, 36, 7));
        assert_eq!(viewer.history.len(), 2);
        assert_eq!(viewer.history.series(Species::Plants), &[200, 258]);
        assert_eq!(viewer.history.series(Species::Herbivores), &[40, 36]);
        assert_eq!(viewer.history.series(Species::Carnivores), &[8, 7]);

        // Markers are redrawn from the committed populations.
        assert_eq!(viewer.markers[Species::Plants.index()].points.len(), 25);
        assert_eq!(viewer.markers[Species::Herbivores.index()].points.len(), 36);
        assert_eq!(viewer.markers[Species::Carnivores.index()].points.len(), 7);
    }

    #[test]
    fn markers_spawn_inside_the_scatter_area() {
        let viewer = Viewer::new();
        let half = viewer.area_half_extents;

        for set in &viewer.markers {
            for p in &set.points {
                assert!(p.x.abs() <= half.x && p.y.abs() <= half.y);
            }
        }
    }

    #[test]
    fn reset_restores_initial_run() {
        let mut viewer = Viewer::new();

        viewer.step_once();
        viewer.step_once();
        viewer.running = true;

        viewer.reset();

        assert_eq!(viewer.state, State::default());
        assert_eq!(viewer.history.len(), 1);
        assert_eq!(viewer.history.series(Species::Carnivores), &[8]);
        assert!(!viewer.running);
        assert_eq!(viewer.last_step_time, 0.0);
    }

    #[test]
    fn reset_applies_edited_initial_populations() {
        let mut viewer = Viewer::new();
        viewer.initial = State::new(500, 10, 2);

        viewer.reset();

        assert_eq!(viewer.state, State::new(500, 10, 2));
        assert_eq!(viewer.history.series(Species::Plants), &[500]);
        assert_eq!(viewer.markers[Species::Plants.index()].points.len(), 50);
        assert_eq!(viewer.markers[Species::Carnivores.index()].points.len(), 2);
    }
}
