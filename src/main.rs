//! Tile Library CLI entry point
//!
//! Packs and unpacks tile coordinates and runs the tile library validators.

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tile_library::core::dna::md5_hex;
use tile_library::core::{
    decode_position, decode_variant, encode_position, encode_variant, validate_tile_position,
    validate_tile_variant, LanternName, TileVariantFields,
};
use tile_library::formats;

#[derive(Parser)]
#[command(name = "tile-library")]
#[command(about = "Coordinate codec and validators for genome tile libraries")]
#[command(version)]
#[command(author = "Tile Library Contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Parse a decimal or `0x`-prefixed hex integer with at most one leading `-`
fn parse_int(value: &str) -> Result<i64, String> {
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    let (radix, digits) = match digits.strip_prefix("0x") {
        Some(hex) => (16, hex),
        None => (10, digits),
    };
    if digits.starts_with(['+', '-']) {
        return Err(format!("invalid integer '{}': unexpected sign", value));
    }
    let magnitude = u64::from_str_radix(digits, radix)
        .map_err(|e| format!("invalid integer '{}': {}", value, e))?;
    let signed = if negative {
        -(magnitude as i128)
    } else {
        magnitude as i128
    };
    i64::try_from(signed).map_err(|_| format!("invalid integer '{}': out of range for i64", value))
}

#[derive(Subcommand)]
enum Commands {
    /// Pack version, path and step into a tile position int
    EncodePosition {
        #[arg(value_parser = parse_int, allow_hyphen_values = true)]
        version: i64,
        #[arg(value_parser = parse_int, allow_hyphen_values = true)]
        path: i64,
        #[arg(value_parser = parse_int, allow_hyphen_values = true)]
        step: i64,
    },
    /// Unpack a tile position int
    DecodePosition {
        #[arg(value_parser = parse_int, allow_hyphen_values = true)]
        tile_position_int: i64,
    },
    /// Pack version, path, step and variant value into a tile variant int
    EncodeVariant {
        #[arg(value_parser = parse_int, allow_hyphen_values = true)]
        version: i64,
        #[arg(value_parser = parse_int, allow_hyphen_values = true)]
        path: i64,
        #[arg(value_parser = parse_int, allow_hyphen_values = true)]
        step: i64,
        #[arg(value_parser = parse_int, allow_hyphen_values = true)]
        variant_value: i64,
    },
    /// Unpack a tile variant int
    DecodeVariant {
        #[arg(value_parser = parse_int, allow_hyphen_values = true)]
        tile_variant_int: i64,
    },
    /// Parse a lantern name and print its ints
    Lantern {
        /// Name such as 01f.00.002a.003
        name: String,
    },
    /// Validate a tile position's boundary flags and tags
    ValidatePosition {
        #[arg(value_parser = parse_int, allow_hyphen_values = true)]
        tile_position_int: i64,
        /// The tile is the first step of its path
        #[arg(long)]
        start_of_path: bool,
        /// The tile is the last step of its path
        #[arg(long)]
        end_of_path: bool,
        #[arg(long, default_value = "")]
        start_tag: String,
        #[arg(long, default_value = "")]
        end_tag: String,
    },
    /// Validate a tile variant against its position
    ValidateVariant {
        #[arg(value_parser = parse_int, allow_hyphen_values = true)]
        tile_position_int: i64,
        #[arg(value_parser = parse_int, allow_hyphen_values = true)]
        tile_variant_int: i64,
        #[arg(value_parser = parse_int, allow_hyphen_values = true)]
        variant_value: i64,
        /// Tile variant sequence
        sequence: String,
        /// Recorded length (default: length of the sequence)
        #[arg(long, value_parser = parse_int, allow_hyphen_values = true)]
        length: Option<i64>,
        /// Recorded md5sum (default: md5sum of the sequence)
        #[arg(long)]
        md5sum: Option<String>,
        #[arg(long)]
        start_of_path: bool,
        #[arg(long)]
        end_of_path: bool,
        #[arg(long, default_value = "")]
        start_tag: String,
        #[arg(long, default_value = "")]
        end_tag: String,
    },
    /// Validate a tile variant record file
    ValidateTiles {
        /// Input record file (plain or gzip)
        input: PathBuf,
        /// Report of failing records
        output: PathBuf,
        /// Number of threads
        #[arg(short = 't', long, default_value = "1")]
        threads: usize,
    },
    /// Check a lantern translation against an external tile library
    #[cfg(feature = "http")]
    CheckTranslation {
        /// Tile library host (host[:port])
        #[arg(long)]
        host: String,
        /// Request path on the host
        path: String,
        /// Request timeout in milliseconds
        #[arg(long = "timeout-ms", default_value = "1000")]
        timeout_ms: u64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::EncodePosition { version, path, step } => {
            println!("{}", encode_position(version, path, step)?);
        }
        Commands::DecodePosition { tile_position_int } => {
            let position = decode_position(tile_position_int)?;
            println!(
                "{}\tversion={}\tpath={}\tstep={}",
                position,
                position.version(),
                position.path(),
                position.step()
            );
        }
        Commands::EncodeVariant {
            version,
            path,
            step,
            variant_value,
        } => {
            println!("{}", encode_variant(version, path, step, variant_value)?);
        }
        Commands::DecodeVariant { tile_variant_int } => {
            let variant = decode_variant(tile_variant_int)?;
            println!(
                "{}\tversion={}\tpath={}\tstep={}\tvariant_value={}",
                variant,
                variant.version(),
                variant.path(),
                variant.step(),
                variant.variant_value()
            );
        }
        Commands::Lantern { name } => {
            let lantern: LanternName = name
                .parse()
                .map_err(|e| anyhow!("Failed to parse lantern name: {}", e))?;
            println!("tile_position_int\t{}", lantern.tile_position_int());
            if let Some(variant_value) = lantern.variant_value() {
                let variant = lantern.position().with_variant(variant_value as i64)?;
                println!("tile_variant_int\t{}", variant.to_int());
            }
            if let Some(span) = lantern.span() {
                println!("span\t{}", span);
            }
        }
        Commands::ValidatePosition {
            tile_position_int,
            start_of_path,
            end_of_path,
            start_tag,
            end_tag,
        } => {
            validate_tile_position(
                tile_position_int,
                start_of_path,
                end_of_path,
                &start_tag,
                &end_tag,
            )?;
            println!("ok");
        }
        Commands::ValidateVariant {
            tile_position_int,
            tile_variant_int,
            variant_value,
            sequence,
            length,
            md5sum,
            start_of_path,
            end_of_path,
            start_tag,
            end_tag,
        } => {
            let md5sum = md5sum.unwrap_or_else(|| md5_hex(&sequence));
            let fields = TileVariantFields {
                tile_position_int,
                tile_variant_int,
                variant_value,
                sequence: &sequence,
                length: length.unwrap_or(sequence.len() as i64),
                md5sum: &md5sum,
                start_tag: &start_tag,
                end_tag: &end_tag,
                is_start_of_path: start_of_path,
                is_end_of_path: end_of_path,
            };
            validate_tile_variant(&fields)?;
            println!("ok");
        }
        Commands::ValidateTiles {
            input,
            output,
            threads,
        } => {
            let start = Instant::now();
            eprintln!("Validating tile records: {:?} -> {:?}", input, output);
            let stats = formats::validate_tile_file(&input, &output, threads)
                .with_context(|| format!("Failed to validate {:?}", input))?;
            eprintln!("\n=== Validation Statistics ===");
            eprintln!("Total records:   {}", stats.total);
            eprintln!("Valid:           {}", stats.valid);
            eprintln!("Invalid:         {}", stats.invalid);
            eprintln!("Malformed:       {}", stats.malformed);
            eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
            if stats.invalid + stats.malformed > 0 {
                return Err(anyhow!(
                    "{} of {} records failed validation",
                    stats.invalid + stats.malformed,
                    stats.total
                ));
            }
        }
        #[cfg(feature = "http")]
        Commands::CheckTranslation {
            host,
            path,
            timeout_ms,
        } => {
            use tile_library::core::lookup::{
                validate_lantern_translation_outside_database, HttpTranslationLookup,
            };
            let lookup =
                HttpTranslationLookup::with_timeout(std::time::Duration::from_millis(timeout_ms));
            validate_lantern_translation_outside_database(&lookup, &host, &path)?;
            println!("ok");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("42"), Ok(42));
        assert_eq!(parse_int("0x2a"), Ok(42));
        assert_eq!(parse_int("-1"), Ok(-1));
        assert!(parse_int("zz").is_err());
    }

    #[test]
    fn test_parse_int_rejects_repeated_sign() {
        for value in ["--5", "-+5", "+-5", "-0x-5", "0x+5", "+5"] {
            assert!(parse_int(value).is_err(), "{} should not parse", value);
        }
    }

    #[test]
    fn test_parse_int_extremes() {
        assert_eq!(parse_int("-9223372036854775808"), Ok(i64::MIN));
        assert_eq!(parse_int("0x7fffffffffffffff"), Ok(i64::MAX));
        assert!(parse_int("9223372036854775808").is_err());
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
