//! Rec. 2020 transfer function command

use crate::{Direction, Rec2020Args};
use anyhow::{Result, bail};
use tinct_transfer::rec2020::{self, BitDepth};

pub fn run(args: Rec2020Args, verbose: u8) -> Result<()> {
    let Some(depth) = BitDepth::from_bits(args.bits) else {
        bail!("unsupported bit depth {} (expected 10 or 12)", args.bits);
    };
    if !args.value.is_finite() {
        bail!("value must be finite, got {}", args.value);
    }

    let out = match args.direction {
        Direction::Encode => rec2020::encode(args.value, depth),
        Direction::Decode => rec2020::decode(args.value, depth),
    };

    if verbose > 0 {
        let c = depth.constants();
        println!("{} (alpha {}, beta {})", depth, c.alpha, c.beta);
    }
    println!("{:.9}", out);
    Ok(())
}
