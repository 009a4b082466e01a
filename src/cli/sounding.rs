use clap::Parser;
use rsm::sounding::{L_MAX, L_MIN, POINTS, SPACING_RATIO};
use rsm::{get_sounding_curve, write_df_to_file, DataFrameFileType, SoundingSettings};
use std::path::PathBuf;
use tracing::{debug, error, info, trace};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Resistivity of the upper layer (Ohm-m)
    #[arg(long)]
    rho1: f64,

    /// Resistivity of the lower layer (Ohm-m)
    #[arg(long)]
    rho2: f64,

    /// Thickness of the upper layer (m)
    #[arg(long)]
    thickness: f64,

    /// Ratio of potential to current electrode spacing, s / l
    #[arg(short = 'r', long, default_value_t = SPACING_RATIO)]
    ratio: f64,

    /// Smallest current electrode spacing (m)
    #[arg(long = "l-min", default_value_t = L_MIN)]
    l_min: f64,

    /// Largest current electrode spacing (m)
    #[arg(long = "l-max", default_value_t = L_MAX)]
    l_max: f64,

    /// Number of log-spaced arrays between l-min and l-max
    #[arg(short = 'n', long, default_value_t = POINTS)]
    points: usize,

    /// Output file; the extension is set from the output type.
    /// The curve is only logged when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output file type
    #[arg(short = 't', long, default_value_t = DataFrameFileType::Csv)]
    output_format: DataFrameFileType,
}

/// Returns `false` when the curve could not be computed or saved.
pub(crate) fn run(args: &Args) -> bool {
    trace!("{args:?}");

    let settings = SoundingSettings {
        ratio: args.ratio,
        l_min: args.l_min,
        l_max: args.l_max,
        points: args.points,
    };
    let mut df = match get_sounding_curve(args.rho1, args.rho2, args.thickness, &settings) {
        Ok(df) => df,
        Err(e) => {
            error!("{e}");
            return false;
        }
    };
    info!("Sounding curve with {} arrays\n{}", df.height(), df);

    let Some(output) = &args.output else {
        println!("{df}");
        return true;
    };
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        let _ = std::fs::create_dir_all(parent);
    }
    match write_df_to_file(&mut df, output, args.output_format) {
        Ok(path) => {
            debug!("Results saved to {}", path.display());
            true
        }
        Err(e) => {
            error!("Failed to save results: {e}");
            false
        }
    }
}
