use std::env;
use std::process;

use colour_scale::{ColourUtility, HslColour};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <base-colour> [accent-colour...]", args[0]);
        eprintln!("Examples:");
        eprintln!("  {} \"#3b82f6\"", args[0]);
        eprintln!("  {} \"#3b82f6\" \"#ef4444\" \"#10b981\"", args[0]);
        process::exit(1);
    }

    let base_colour = match HslColour::parse(&args[1]) {
        Ok(colour) => colour,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    let utility = match ColourUtility::new(&args[1]) {
        Ok(utility) => utility,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    println!("Base colour: {} {}", swatch(&base_colour), base_colour);
    println!();

    println!("Contrast anchors:");
    println!("  On light: {} {}", swatch(utility.on_light()), utility.on_light());
    println!("  On dark:  {} {}", swatch(utility.on_dark()), utility.on_dark());
    println!();

    println!("Tone ramp:");
    for tone in (0..=100).step_by(10) {
        let colour = utility.get_tint(&base_colour, tone as f32);
        println!("  Tone {:>3}: {} {}", tone, swatch(&colour), colour);
    }

    for accent_hex in &args[2..] {
        println!();
        match print_accent(&utility, accent_hex) {
            Ok(()) => {}
            Err(err) => {
                eprintln!("Error: {}", err);
                process::exit(1);
            }
        }
    }
}

fn print_accent(
    utility: &ColourUtility,
    accent_hex: &str,
) -> Result<(), colour_scale::ParseColourError> {
    let accent = HslColour::parse(accent_hex)?;
    let tinted = utility.get_base_tinted_colour(accent_hex)?;
    let harmonised = utility.get_harmonised_colour(accent_hex, None)?;
    let neutral = utility.get_harmonised_colour_neutral(accent_hex)?;

    println!("Accent {}:", accent_hex);
    println!("  Input:      {} {}", swatch(&accent), accent);
    println!("  Tinted:     {} {}", swatch(&tinted), tinted);
    println!("  Harmonised: {} {}", swatch(&harmonised), harmonised);
    println!("  Neutral:    {} {}", swatch(&neutral), neutral);

    Ok(())
}

fn swatch(colour: &HslColour) -> String {
    let hex = colour.hex();
    let hex = hex.trim_start_matches('#');
    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);

    // ANSI 24-bit colour with block characters.
    format!("\x1b[38;2;{};{};{}m██\x1b[0m", r, g, b)
}
