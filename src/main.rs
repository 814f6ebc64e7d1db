use clap::{Parser, Subcommand};
use std::path::PathBuf;

use firbench::config::{CutoffFrequency, DesignConfig};
use firbench::dsp::{convolve, design, metrics};
use firbench::error::HarnessError;
use firbench::vectors;

#[derive(Parser, Debug)]
#[command(name = "firbench")]
#[command(about = "Fixed-point FIR filter verification harness", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Design quantized low-pass coefficients and write them to disk
    Design {
        /// Normalized cutoff frequency, open interval (0, 0.5)
        #[arg(long, default_value = "0.1")]
        cutoff: CutoffFrequency,

        /// Number of filter taps
        #[arg(long, default_value = "128")]
        taps: usize,

        /// Signed sample/coefficient width in bits
        #[arg(long, default_value = "16")]
        bit_width: u32,

        /// Hex coefficient output (wire format for the hardware simulator)
        #[arg(long, default_value = "coeffs.hex")]
        hex_out: PathBuf,

        /// Decimal coefficient output (human-readable)
        #[arg(long, default_value = "coeffs.txt")]
        dec_out: PathBuf,
    },
    /// Produce the golden reference output for an input stimulus
    Reference {
        /// Hex input stimulus file
        #[arg(long)]
        input: PathBuf,

        /// Decimal coefficient file; defaults to unity coefficients
        #[arg(long)]
        coeffs: Option<PathBuf>,

        /// Number of filter taps the hardware implements
        #[arg(long, default_value = "128")]
        taps: usize,

        /// Signed sample/coefficient width in bits
        #[arg(long, default_value = "16")]
        bit_width: u32,

        /// Decimal golden output file
        #[arg(long, default_value = "output_ref.txt")]
        output: PathBuf,
    },
    /// Score a simulated output against the golden reference
    Analyze {
        /// Golden reference sequence file
        #[arg(long)]
        reference: PathBuf,

        /// Simulated output sequence file
        #[arg(long)]
        simulated: PathBuf,

        /// Signed sample width in bits (hex input only)
        #[arg(long, default_value = "16")]
        bit_width: u32,

        /// Encoding of the two sequence files
        #[arg(long, value_enum, default_value = "hex")]
        input_format: InputFormat,

        /// Report format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum InputFormat {
    Hex,
    Dec,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match args.command {
        Command::Design {
            cutoff,
            taps,
            bit_width,
            hex_out,
            dec_out,
        } => run_design(cutoff, taps, bit_width, &hex_out, &dec_out),
        Command::Reference {
            input,
            coeffs,
            taps,
            bit_width,
            output,
        } => run_reference(&input, coeffs.as_deref(), taps, bit_width, &output),
        Command::Analyze {
            reference,
            simulated,
            bit_width,
            input_format,
            format,
        } => run_analyze(&reference, &simulated, bit_width, input_format, format),
    }
}

fn run_design(
    cutoff: CutoffFrequency,
    taps: usize,
    bit_width: u32,
    hex_out: &std::path::Path,
    dec_out: &std::path::Path,
) -> anyhow::Result<()> {
    let config = DesignConfig {
        cutoff_frequency: cutoff,
        taps,
        bit_width,
    };
    let coeffs = design::design_quantized_lowpass(&config)?;

    vectors::write_hex_file(hex_out, &coeffs, bit_width)?;
    vectors::write_decimal_file(dec_out, &coeffs)?;

    log::info!(
        "Wrote {} coefficients to {} and {}",
        coeffs.len(),
        hex_out.display(),
        dec_out.display()
    );
    println!("FIR coefficients generated.");
    Ok(())
}

fn run_reference(
    input: &std::path::Path,
    coeffs: Option<&std::path::Path>,
    taps: usize,
    bit_width: u32,
    output: &std::path::Path,
) -> anyhow::Result<()> {
    if taps == 0 {
        return Err(HarnessError::InvalidTapCount(taps).into());
    }

    log::info!("Reading input vector from {}", input.display());
    let stimulus = vectors::read_hex_file(input, bit_width)?;

    let coefficients = match coeffs {
        Some(path) => {
            log::info!("Using coefficients from {}", path.display());
            let loaded = vectors::read_decimal_samples(path, bit_width)?;
            convolve::check_coefficient_count(&loaded, taps)?;
            loaded
        }
        None => {
            log::info!("Using default unity coefficients (all 1s)");
            convolve::unity_coefficients(taps)
        }
    };

    log::info!("Performing convolution...");
    let golden = convolve::convolve_truncated(&stimulus, &coefficients);
    vectors::write_decimal_file(output, &golden)?;

    println!("Filtered output written to '{}'", output.display());
    Ok(())
}

fn run_analyze(
    reference: &std::path::Path,
    simulated: &std::path::Path,
    bit_width: u32,
    input_format: InputFormat,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let load = |path: &std::path::Path| -> anyhow::Result<Vec<i64>> {
        let values = match input_format {
            InputFormat::Hex => vectors::read_hex_file(path, bit_width)?
                .into_iter()
                .map(i64::from)
                .collect(),
            InputFormat::Dec => vectors::read_decimal_file(path)?,
        };
        Ok(values)
    };

    let reference = load(reference)?;
    let simulated = load(simulated)?;
    let report = metrics::analyze(&reference, &simulated);

    match format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn print_text(report: &metrics::FidelityReport) {
    println!("=== Performance Report ===");
    println!("Samples Compared        : {}", report.samples_compared);
    println!("Mean Squared Error (MSE): {:.2}", report.mse);
    println!("Signal-to-Noise Ratio   : {:.2} dB", report.snr_db);
    println!("Estimated Latency       : {} samples", report.latency_samples);
}
