//! Forward Euler demonstration for the ODE dy/dt = y, y(0) = 1.
//!
//! Integrates the equation over [0, 1] with h = 0.2, prints a fixed-width
//! table comparing each sample against the exact solution y(t) = e^t, and
//! opens an interactive plot when built with the `plot` feature:
//!
//! ```text
//! cargo run -p odestep-cli --features plot
//! ```
//!
//! Without the feature, a textual notice replaces the plot and the table
//! output is unchanged.

use std::error::Error;

use odestep_core::problems::ExponentialGrowth;
use odestep_report::{Table, rows};
use odestep_solvers::euler;
use tracing::debug;

/// Fixed problem parameters for this run.
const T0: f64 = 0.0;
const Y0: f64 = 1.0;
const STEP_SIZE: f64 = 0.2;
const T_FINAL: f64 = 1.0;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let config = euler::Config::new(T0, Y0, STEP_SIZE, T_FINAL)?;
    let ode = ExponentialGrowth;

    debug!(?config, steps = config.num_steps(), "integrating");
    let solution = euler::solve(&ode, &config)?;

    println!("Aproximación de la EDO dy/dt = y,  y(0) = 1");
    println!(
        "Usando método de Euler en [{}, {}] con h = {}\n",
        config.t0(),
        config.t_final(),
        config.step_size()
    );
    print!("{}", Table::new(rows(&solution, &ode)));

    render_plot(&solution, &ode, &config)
}

/// Step size for sampling the analytic curve densely in the plot.
#[cfg(feature = "plot")]
const CURVE_STEP: f64 = 0.01;

#[cfg(feature = "plot")]
fn render_plot(
    solution: &euler::Solution,
    ode: &ExponentialGrowth,
    config: &euler::Config,
) -> Result<(), Box<dyn Error>> {
    use odestep_core::AnalyticOde;
    use odestep_plot::PlotApp;

    // Same truncating grid policy as the solver, on a fine fixed step.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let curve_points = ((config.t_final() - config.t0()) / CURVE_STEP) as usize;
    let curve: Vec<[f64; 2]> = (0..=curve_points)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = config.t0() + i as f64 * CURVE_STEP;
            [t, ode.exact(t)]
        })
        .collect();

    let samples: Vec<[f64; 2]> = solution.samples.iter().map(|s| [s.t, s.y]).collect();

    PlotApp::new()
        .add_line("Solución exacta y(t) = e^t", &curve)
        .add_markers("Puntos método de Euler", &samples)
        .run("Comparación: solución exacta vs. método de Euler")?;

    Ok(())
}

#[cfg(not(feature = "plot"))]
fn render_plot(
    _solution: &euler::Solution,
    _ode: &ExponentialGrowth,
    _config: &euler::Config,
) -> Result<(), Box<dyn Error>> {
    println!("\nNota: compilado sin la característica `plot`; no se generó la gráfica.");
    println!("Si deseas graficar, ejecuta con: cargo run -p odestep-cli --features plot");

    Ok(())
}
