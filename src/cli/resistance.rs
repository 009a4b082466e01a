use clap::Parser;
use rsm::{validate_model, ResistanceTwoLayer, TetrapolarSystem};
use tracing::{error, info, trace};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Distance between the potential electrodes (m)
    #[arg(short, long)]
    s: f64,

    /// Distance between the current electrodes (m)
    #[arg(short, long)]
    l: f64,

    /// Resistivity of the upper layer (Ohm-m)
    #[arg(long)]
    rho1: f64,

    /// Resistivity of the lower layer (Ohm-m).
    /// Defaults to `rho1`, i.e. a homogeneous half-space
    #[arg(long)]
    rho2: Option<f64>,

    /// Thickness of the upper layer (m)
    #[arg(long, default_value_t = 0.0)]
    thickness: f64,

    /// Output format: 'text' for human-readable or 'json' for machine-readable
    #[arg(short = 'f', long = "format", default_value_t = String::from("text"))]
    output_format: String,
}

/// Returns `false` when the arguments were rejected.
pub(crate) fn run(args: &Args) -> bool {
    trace!("{args:?}");

    let rho2 = args.rho2.unwrap_or(args.rho1);
    let system = match TetrapolarSystem::new(args.s, args.l) {
        Ok(system) => system,
        Err(e) => {
            error!("{e}");
            return false;
        }
    };
    if let Err(e) = validate_model(args.rho1, rho2, args.thickness) {
        error!("{e}");
        return false;
    }

    let model = ResistanceTwoLayer::new(system);
    let resistance = model.value(args.rho1, rho2, args.thickness);
    let apparent = model.apparent(args.rho1, rho2, args.thickness);

    if args.output_format == "json" {
        println!(
            r#"{{"s": {}, "l": {}, "rho1": {}, "rho2": {}, "h": {}, "resistance": {:.9}, "apparent_resistivity": {:.6}}}"#,
            args.s, args.l, args.rho1, rho2, args.thickness, resistance, apparent,
        );
    } else {
        info!("Array: {system}");
        info!(
            "Model: rho1 = {} Ohm-m, rho2 = {} Ohm-m, h = {} m",
            args.rho1, rho2, args.thickness
        );
        println!("Resistance: {resistance:.6} Ohm");
        println!("Apparent resistivity: {apparent:.4} Ohm-m");
    }
    true
}
