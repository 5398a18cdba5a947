//! Streaming construction, error propagation and text block output for a small point list

use bandcov::{BandedCovMat, LinearTransform, Result, TextBlockConfig};
use ndarray::array;

fn main() -> Result<()> {
    println!("Building covariance matrix for 3 planar points...");

    // x/y per point, correlated within a point only
    let points = 3;
    let dim = 2 * points;
    let mut cov = BandedCovMat::with_band(dim, 1)?;

    for p in 0..points {
        let sigma = 0.002 * (p + 1) as f64;
        let var = sigma * sigma;
        // x row: var_x, cov_xy
        cov.append_values([var, 0.25 * var])?;
        // y row: var_y, then the slot linking to the next point's x
        cov.append_value(2.0 * var)?;
        if p + 1 < points {
            cov.append_value(0.0)?;
        }
    }

    println!(
        "Matrix dim={} band={} complete={} valid={}",
        cov.dim(),
        cov.band(),
        cov.is_complete(),
        cov.is_valid()
    );

    for p in 0..points {
        let ellipse = cov.error_ellipse(2 * p, 2 * p + 1)?;
        println!(
            "Point {p}: a={:.3} mm b={:.3} mm omega={:.1} deg",
            ellipse.a * 1e3,
            ellipse.b * 1e3,
            ellipse.omega.to_degrees()
        );
    }

    // Rotate every point by 90 degrees
    let rotation = array![[0.0, -1.0], [1.0, 0.0]];
    let mut rotated = cov.clone();
    rotated.transform(&LinearTransform::per_point(&rotation, points)?)?;
    println!(
        "Rotated var_x of point 0: {:.3e} (was var_y {:.3e})",
        rotated.get_var(0)?.unwrap_or(0.0),
        cov.get_var(1)?.unwrap_or(0.0)
    );

    println!("\nText block (default scale):");
    print!("{}", cov.to_text_block());

    println!("\nText block (unscaled, 3 digits):");
    let config = TextBlockConfig::default()
        .with_scale(1.0)
        .with_precision(3)
        .with_width(10);
    print!("{}", cov.to_text_block_with(&config));

    Ok(())
}
