//! Build script for segclock-firmware
//!
//! - Passes the cortex-m-rt and defmt linker scripts
//! - Validates board.toml at compile time
//! - Generates the `BOARD_CONFIG` constant from it

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use segclock_core::config::{
    ADC_BITS_RANGE, MAX_DIGIT_HOLD_US, MAX_REFERENCE_MV, MIN_DIGIT_HOLD_US,
};

/// Values compiled into the firmware
struct BoardValues {
    digit_hold_us: i64,
    tick_period_ms: i64,
    reference_mv: i64,
    adc_bits: i64,
}

fn main() {
    setup_linker();
    let values = validate_config();
    generate_config(&values);
}

/// Set up linker scripts
///
/// memory.x comes from embassy-stm32's `memory-x` feature.
fn setup_linker() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate board.toml configuration at compile time
fn validate_config() -> BoardValues {
    // Re-run if board.toml changes
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml configuration file.          ║\n\
            ║  Please create one in the segclock-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in board.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let values = BoardValues {
        digit_hold_us: read_integer(&config, "display", "digit_hold_us", 1_000, &mut errors),
        tick_period_ms: read_integer(&config, "clock", "tick_period_ms", 1_000, &mut errors),
        reference_mv: read_integer(&config, "voltage", "reference_mv", 3_300, &mut errors),
        adc_bits: read_integer(&config, "voltage", "adc_bits", 12, &mut errors),
    };

    check_ranges(&values, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid values in board.toml                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    values
}

/// Format error message lines for display in box
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            if line.len() > 62 {
                format!("║  {}... ║", &line[..59])
            } else {
                format!("║  {:<64} ║", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read `[section] key`, falling back to the default when absent
fn read_integer(
    config: &toml::Value,
    section: &str,
    key: &str,
    default: i64,
    errors: &mut Vec<String>,
) -> i64 {
    let table = match config.get(section) {
        None => return default,
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push(format!("[{}] must be a table", section));
            return default;
        }
    };

    match table.get(key) {
        None => default,
        Some(toml::Value::Integer(v)) => *v,
        Some(_) => {
            errors.push(format!("[{}] '{}' must be an integer", section, key));
            default
        }
    }
}

/// Check every value against the range the firmware supports
fn check_ranges(values: &BoardValues, errors: &mut Vec<String>) {
    let hold_range = MIN_DIGIT_HOLD_US as i64..=MAX_DIGIT_HOLD_US as i64;
    if !hold_range.contains(&values.digit_hold_us) {
        errors.push(format!(
            "[display] digit_hold_us must be {}-{} (got {})",
            MIN_DIGIT_HOLD_US, MAX_DIGIT_HOLD_US, values.digit_hold_us
        ));
    }

    if values.tick_period_ms <= 0 || values.tick_period_ms > u32::MAX as i64 {
        errors.push(format!(
            "[clock] tick_period_ms must be positive (got {})",
            values.tick_period_ms
        ));
    }

    if values.reference_mv <= 0 || values.reference_mv > MAX_REFERENCE_MV as i64 {
        errors.push(format!(
            "[voltage] reference_mv must be 1-{} (got {})",
            MAX_REFERENCE_MV, values.reference_mv
        ));
    }

    let adc_bits_ok =
        u8::try_from(values.adc_bits).is_ok_and(|bits| ADC_BITS_RANGE.contains(&bits));
    if !adc_bits_ok {
        errors.push(format!(
            "[voltage] adc_bits must be {}-{} (got {})",
            ADC_BITS_RANGE.start(),
            ADC_BITS_RANGE.end(),
            values.adc_bits
        ));
    }
}

/// Write `board_config.rs` into OUT_DIR for `src/config.rs` to include
fn generate_config(values: &BoardValues) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    let source = format!(
        "/// Board configuration from board.toml\n\
        pub const BOARD_CONFIG: segclock_core::config::DisplayConfig =\n    \
        segclock_core::config::DisplayConfig {{\n        \
        digit_hold_us: {},\n        \
        tick_period_ms: {},\n        \
        reference_mv: {},\n        \
        adc_bits: {},\n    \
        }};\n",
        values.digit_hold_us, values.tick_period_ms, values.reference_mv, values.adc_bits
    );

    fs::write(out_dir.join("board_config.rs"), source).expect("failed to write board_config.rs");
}
