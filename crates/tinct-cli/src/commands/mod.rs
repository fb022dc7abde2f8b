//! CLI command implementations

pub mod colorspace;
pub mod cvd;
pub mod osa;
pub mod rec2020;

use tinct_math::{Mat3, Vec3};

/// Formats a triplet for display.
pub fn format_triplet(v: Vec3) -> String {
    format!("{:.6} {:.6} {:.6}", v.x, v.y, v.z)
}

/// Formats a matrix as three rows.
pub fn format_matrix(m: &Mat3) -> String {
    (0..3)
        .map(|i| format!("  [{:>10.6} {:>10.6} {:>10.6}]", m.m[i][0], m.m[i][1], m.m[i][2]))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds a triplet from exactly three parsed values.
pub fn triplet(values: &[f64]) -> anyhow::Result<Vec3> {
    match values {
        [a, b, c] => Ok(Vec3::new(*a, *b, *c)),
        _ => anyhow::bail!("expected 3 values, got {}", values.len()),
    }
}
