//! Generate command implementation.
//!
//! Builds a starting palette, applies lock toggles, regenerates the
//! unlocked slots and prints the five hex colours to stdout.

use std::str::FromStr;

use clap::Args;

use crate::error::{Result, SwatchError};
use crate::output::Printer;
use crate::types::{ColorModel, Colour, Palette, PALETTE_SIZE};

use super::{parse_palette_arg, Context};

/// Generate a harmonious five-colour palette
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Harmony model (default: manifest model)
    #[arg(long, short, value_enum)]
    pub model: Option<ColorModel>,

    /// Seed for a reproducible palette
    #[arg(long)]
    pub seed: Option<u64>,

    /// Starting palette as five comma-separated hex colours
    #[arg(long, conflicts_with = "template")]
    pub palette: Option<String>,

    /// Start from a catalog template
    #[arg(long, short)]
    pub template: Option<String>,

    /// Lock slot I (1-5) before regenerating, optionally setting its colour
    #[arg(long = "lock", value_name = "I[=HEX]")]
    pub locks: Vec<LockSpec>,
}

/// A `--lock` argument: a one-based slot with an optional colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockSpec {
    /// Zero-based slot index.
    pub index: usize,
    pub colour: Option<Colour>,
}

impl FromStr for LockSpec {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        let (slot, colour) = match s.split_once('=') {
            Some((slot, hex)) => (slot, Some(Colour::parse_hex(hex.trim())?)),
            None => (s, None),
        };

        let index = slot
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=PALETTE_SIZE).contains(n))
            .ok_or_else(|| SwatchError::Parse {
                message: format!("Invalid slot: {}", slot),
                help: Some(format!("Slots are numbered 1 to {}", PALETTE_SIZE)),
            })?;

        Ok(Self {
            index: index - 1,
            colour,
        })
    }
}

pub fn run(args: GenerateArgs, ctx: &Context, printer: &Printer) -> Result<()> {
    let model = args.model.unwrap_or(ctx.manifest.model);
    let mut rng = ctx.manifest.rng(args.seed);

    let start = match (&args.palette, &args.template) {
        (Some(text), _) => Some(Palette::from_colours(to_array(parse_palette_arg(text)?))),
        (None, Some(id)) => Some(Palette::from_hex_list(ctx.catalog.template(id)?.colors.as_slice())),
        (None, None) => None,
    };

    let palette = match start {
        None if args.locks.is_empty() => Palette::generate(model, &mut rng),
        start => {
            let mut palette = start.unwrap_or_else(|| Palette::generate(model, &mut rng));
            apply_locks(&mut palette, &args.locks);
            palette.regenerate(model, &mut rng)
        }
    };

    printer.status("Generated", &format!("{} palette", model));
    for (i, slot) in palette.iter().enumerate() {
        eprintln!("{}", printer.slot_line(i, slot));
    }
    for hex in palette.hexes() {
        println!("{}", hex);
    }

    Ok(())
}

fn apply_locks(palette: &mut Palette, locks: &[LockSpec]) {
    for lock in locks {
        if let Some(slot) = palette.get_mut(lock.index) {
            if let Some(colour) = lock.colour {
                slot.set_colour(colour);
            }
            slot.locked = true;
        }
    }
}

fn to_array(colours: Vec<Colour>) -> [Colour; PALETTE_SIZE] {
    std::array::from_fn(|i| colours.get(i).copied().unwrap_or(Colour::BLACK))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_lock_spec_parse() {
        assert_eq!(
            "2".parse::<LockSpec>().unwrap(),
            LockSpec {
                index: 1,
                colour: None
            }
        );
        assert_eq!(
            "5=#ff0000".parse::<LockSpec>().unwrap(),
            LockSpec {
                index: 4,
                colour: Some(Colour::new(255, 0, 0))
            }
        );
    }

    #[test]
    fn test_lock_spec_rejects_out_of_range() {
        assert!("0".parse::<LockSpec>().is_err());
        assert!("6".parse::<LockSpec>().is_err());
        assert!("x".parse::<LockSpec>().is_err());
        assert!("1=#F00".parse::<LockSpec>().is_err());
    }

    #[test]
    fn test_apply_locks_keeps_colour_through_regenerate() {
        let mut palette = Palette::generate(ColorModel::Default, &mut StdRng::seed_from_u64(4));
        let locks = [LockSpec {
            index: 0,
            colour: Some(Colour::new(255, 0, 0)),
        }];

        apply_locks(&mut palette, &locks);
        let next = palette.regenerate(ColorModel::Triadic, &mut StdRng::seed_from_u64(5));

        assert_eq!(next.hexes(), vec!["#FF0000", "#00FF00", "#0000FF", "#FF0000", "#FF0000"]);
        assert!(next.get(0).unwrap().locked);
    }

    #[test]
    fn test_apply_locks_ignores_missing_slot() {
        let mut palette = Palette::from_colours([Colour::WHITE; PALETTE_SIZE]);
        apply_locks(
            &mut palette,
            &[LockSpec {
                index: 9,
                colour: None,
            }],
        );
        assert!(palette.iter().all(|s| !s.locked));
    }
}
