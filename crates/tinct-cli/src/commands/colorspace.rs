//! Colourspace record command
//!
//! Prints primaries, whitepoint and both RGB/XYZ matrices of a record.

use crate::ColorspaceArgs;
use anyhow::{Context, Result};
use serde::Serialize;
use tinct_color::colorspace::{NAMES, RgbColorspace, colorspace_by_name};

/// Serialisable view of a colourspace record.
#[derive(Debug, Serialize)]
struct ColorspaceInfo<'a> {
    name: &'a str,
    primaries: [[f64; 2]; 3],
    whitepoint: [f64; 2],
    rgb_to_xyz: [[f64; 3]; 3],
    xyz_to_rgb: [[f64; 3]; 3],
}

impl<'a> From<&'a RgbColorspace> for ColorspaceInfo<'a> {
    fn from(cs: &'a RgbColorspace) -> Self {
        let p = &cs.primaries;
        Self {
            name: &cs.name,
            primaries: [[p.r.0, p.r.1], [p.g.0, p.g.1], [p.b.0, p.b.1]],
            whitepoint: [cs.whitepoint.0, cs.whitepoint.1],
            rgb_to_xyz: cs.to_xyz.m,
            xyz_to_rgb: cs.from_xyz.m,
        }
    }
}

pub fn run(args: ColorspaceArgs, _verbose: u8) -> Result<()> {
    let Some(name) = args.name else {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&NAMES)?);
        } else {
            for name in NAMES {
                println!("{}", name);
            }
        }
        return Ok(());
    };

    let cs = colorspace_by_name(&name).with_context(|| format!("Known colourspaces: {}", NAMES.join(", ")))?;
    let info = ColorspaceInfo::from(&cs);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", info.name);
    for (label, xy) in ["R", "G", "B"].iter().zip(info.primaries) {
        println!("  {}: ({:.4}, {:.4})", label, xy[0], xy[1]);
    }
    println!("  W: ({:.4}, {:.4})", info.whitepoint[0], info.whitepoint[1]);
    println!("RGB to XYZ:");
    println!("{}", super::format_matrix(&cs.to_xyz));
    println!("XYZ to RGB:");
    println!("{}", super::format_matrix(&cs.from_xyz));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_color::colorspace::rec2020;

    #[test]
    fn test_info_json() {
        let cs = rec2020().unwrap();
        let json = serde_json::to_value(ColorspaceInfo::from(&cs)).unwrap();
        assert_eq!(json["name"], "Rec. 2020");
        assert_eq!(json["primaries"][0][0], 0.708);
        assert_eq!(json["whitepoint"][1], 0.329);
        assert!(json["rgb_to_xyz"][1][1].as_f64().unwrap() > 0.67);
    }
}
