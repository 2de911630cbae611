//! Interactive plotting for solver runs.
//!
//! [`PlotApp`] collects named series — continuous lines for analytic curves
//! and markers for discrete solver samples — and opens a blocking egui
//! window showing them with a legend, axis labels, and grid.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoint, Points};

/// A runnable egui application for plotting data.
#[derive(Default)]
pub struct PlotApp {
    series: Vec<Series>,
}

struct Series {
    name: String,
    points: Vec<PlotPoint>,
    style: Style,
}

enum Style {
    Line,
    Markers,
}

impl PlotApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a continuous line series.
    #[must_use]
    pub fn add_line(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: points.iter().copied().map(Into::into).collect(),
            style: Style::Line,
        });

        self
    }

    /// Adds a series drawn as discrete markers.
    #[must_use]
    pub fn add_markers(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: points.iter().copied().map(Into::into).collect(),
            style: Style::Markers,
        });

        self
    }

    /// Opens a blocking native window displaying all collected series.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn run(self, title: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            title,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("odestep-plot")
                .legend(Legend::default())
                .x_axis_label("t")
                .y_axis_label("y")
                .show(ui, |plot_ui| {
                    for series in &self.series {
                        let points = series.points.as_slice();
                        let name = &series.name;

                        match series.style {
                            Style::Line => plot_ui.line(Line::new(points).name(name)),
                            Style::Markers => {
                                plot_ui.points(Points::new(points).radius(3.5).name(name));
                            }
                        }
                    }
                });
        });
    }
}
