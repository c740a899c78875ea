use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use firmware_assets::asset_pipeline::{
    clean, package_release, verify_header, BlobToHeaderPipeline, CleanConfig, EmbedConfig,
    GammaConfig, GammaTablePipeline, HexCase, ReleaseConfig,
};
use firmware_assets::logger;

#[derive(Parser)]
#[command(name = "firmware-assets")]
#[command(about = "Build-time asset generator for the light firmware")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Defaults to `embed` with its default arguments
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Embed the gzipped web UI as a byte array header
    Embed(EmbedArgs),
    /// Generate the gamma-correction lookup table header
    Gamma(GammaArgs),
    /// Check that a header declares exactly the bytes of a blob
    Verify {
        /// Generated header
        #[arg(long)]
        header: PathBuf,
        /// Blob the header was generated from
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Move the compiled firmware to a versioned file name
    Release {
        /// Header defining APP_VERSION
        #[arg(long, default_value = "src/main.h")]
        version_header: PathBuf,
        /// Firmware image produced by the external build
        #[arg(long, default_value = ".pioenvs/prod/firmware.bin")]
        firmware: PathBuf,
        /// Destination directory
        #[arg(long, default_value = "binaries")]
        binaries_dir: PathBuf,
        /// File name prefix
        #[arg(long, default_value = "ailight")]
        prefix: String,
    },
    /// Delete generated intermediates
    Clean {
        /// Project root the clean rules are relative to
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

#[derive(Args)]
struct EmbedArgs {
    /// Gzipped UI bundle
    #[arg(short, long, default_value = "src/index.html.gz")]
    input: PathBuf,
    /// Header to write
    #[arg(short, long, default_value = "src/html.gz.h")]
    output: PathBuf,
    /// Array symbol; the length constant is `<symbol>_len`
    #[arg(short, long, default_value = "html_gz")]
    symbol: String,
    /// Byte literals per line
    #[arg(long, default_value_t = 1000)]
    values_per_line: usize,
    /// Emit 0xAB instead of 0xab
    #[arg(long)]
    uppercase: bool,
    /// Keep the input and the intermediates instead of deleting them afterwards
    #[arg(long)]
    keep_intermediates: bool,
    /// Intermediate file to delete after the header is written (repeatable)
    #[arg(long = "intermediate", default_values = ["html/style.css"])]
    intermediates: Vec<PathBuf>,
    /// Log per-stage durations
    #[arg(long)]
    timings: bool,
}

impl Default for EmbedArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("src/index.html.gz"),
            output: PathBuf::from("src/html.gz.h"),
            symbol: "html_gz".to_string(),
            values_per_line: 1000,
            uppercase: false,
            keep_intermediates: false,
            intermediates: vec![PathBuf::from("html/style.css")],
            timings: false,
        }
    }
}

#[derive(Args)]
struct GammaArgs {
    /// Correction factor
    #[arg(short, long, default_value_t = 2.8)]
    gamma: f64,
    /// Top end of the input range
    #[arg(long, default_value_t = 255)]
    max_in: u32,
    /// Top end of the output range
    #[arg(long, default_value_t = 255)]
    max_out: u32,
    /// Header to write
    #[arg(short, long, default_value = "gamma.h")]
    output: PathBuf,
    /// Array symbol
    #[arg(short, long, default_value = "gamma8")]
    symbol: String,
    /// Levels per line
    #[arg(long, default_value_t = 16)]
    values_per_line: usize,
}

fn embed_config(args: &EmbedArgs) -> EmbedConfig {
    let mut builder = EmbedConfig::builder()
        .symbol(args.symbol.as_str())
        .values_per_line(args.values_per_line)
        .hex_case(if args.uppercase { HexCase::Upper } else { HexCase::Lower })
        .remove_source(!args.keep_intermediates);
    if !args.keep_intermediates {
        for path in &args.intermediates {
            builder = builder.intermediate(path);
        }
    }
    builder.build()
}

fn embed(args: EmbedArgs) -> Result<()> {
    let pipeline = BlobToHeaderPipeline::new(embed_config(&args));

    let timings = pipeline
        .convert_file_with_timings(&args.input, &args.output)
        .with_context(|| format!("embedding {} into {}", args.input.display(), args.output.display()))?;

    if args.timings {
        timings.log_summary();
    }
    Ok(())
}

fn gamma(args: GammaArgs) -> Result<()> {
    let config = GammaConfig::builder()
        .gamma(args.gamma)
        .max_in(args.max_in)
        .max_out(args.max_out)
        .symbol(args.symbol)
        .values_per_line(args.values_per_line)
        .build();

    GammaTablePipeline::new(config)
        .generate_file(&args.output)
        .with_context(|| format!("generating {}", args.output.display()))?;

    info!("Copy {} into the light driver sources", args.output.display());
    Ok(())
}

fn verify(header: PathBuf, input: PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(&header)
        .with_context(|| format!("reading {}", header.display()))?;
    let blob = std::fs::read(&input).with_context(|| format!("reading {}", input.display()))?;

    verify_header(&text, &blob)
        .with_context(|| format!("{} does not embed {}", header.display(), input.display()))?;

    info!("{} matches {} ({} bytes)", header.display(), input.display(), blob.len());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match cli.command.unwrap_or_else(|| Commands::Embed(EmbedArgs::default())) {
        Commands::Embed(args) => embed(args)?,
        Commands::Gamma(args) => gamma(args)?,
        Commands::Verify { header, input } => verify(header, input)?,
        Commands::Release {
            version_header,
            firmware,
            binaries_dir,
            prefix,
        } => {
            let config = ReleaseConfig::builder()
                .version_header(version_header)
                .firmware(firmware)
                .binaries_dir(binaries_dir)
                .artifact_prefix(prefix)
                .build();
            let destination = package_release(&config).context("packaging release")?;
            info!("Release image at {}", destination.display());
        }
        Commands::Clean { root } => {
            let removed = clean(&CleanConfig::default(), &root)
                .with_context(|| format!("cleaning {}", root.display()))?;
            for path in removed {
                info!("removed {}", path.display());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse_embed(args: &[&str]) -> EmbedArgs {
        match Cli::try_parse_from(args).unwrap().command {
            Some(Commands::Embed(args)) => args,
            _ => panic!("expected the embed subcommand"),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_embed_removes_build_intermediates_by_default() {
        for args in [parse_embed(&["firmware-assets", "embed"]), EmbedArgs::default()] {
            let config = embed_config(&args);

            assert!(config.remove_source);
            assert_eq!(config.intermediates, vec![PathBuf::from("html/style.css")]);
        }
    }

    #[test]
    fn test_keep_intermediates_disables_cleanup() {
        let config = embed_config(&parse_embed(&["firmware-assets", "embed", "--keep-intermediates"]));

        assert!(!config.remove_source);
        assert!(config.intermediates.is_empty());
    }

    #[test]
    fn test_release_default_prefix() {
        let cli = Cli::try_parse_from(["firmware-assets", "release"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Release { ref prefix, .. }) if prefix == "ailight"));
    }
}
