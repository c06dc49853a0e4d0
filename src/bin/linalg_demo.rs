use anyhow::{Context, Result};
use log::LevelFilter;

use dense_linalg::{
    angle_degrees, cos_angle, cross, dot, sin_angle, LinalgConfig, Matrix, TraceLevel, Vector,
};

fn sep() {
    println!(" - - - - - - - - - - - - - - - - - - - ");
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("LINALG_LOG", "error,dense_linalg=info"))
        .init();

    let trace: TraceLevel = match std::env::var("LINALG_TRACE") {
        Ok(level) => level
            .parse()
            .map_err(anyhow::Error::msg)
            .context("invalid LINALG_TRACE")?,
        Err(_) => TraceLevel::Off,
    };
    let config = LinalgConfig::new(trace);
    log::info!("Running demo with trace level {:?}", config.trace);

    let m1 = Matrix::filled_with_config(1, 1, 2.0, config)?;
    let v1 = Vector::filled_with_config(1, 2.0, config)?;

    let m21 = Matrix::from_rows_with_config(&[[1.0, 2.0], [3.0, 4.0]], config)?;
    let m35 = Matrix::from_rows_with_config(
        &[
            [5.0, 6.0, 7.0, 8.0, 9.0],
            [9.0, 8.0, 7.0, 6.0, 5.0],
            [1.0, 2.0, 3.0, 4.0, 5.0],
        ],
        config,
    )?;
    let m51 = Matrix::from_rows_with_config(&[[1.0], [2.0], [5.0], [6.0], [8.0]], config)?;
    let m5 = Matrix::from_rows_with_config(&[[1.0, 2.0, 3.0, 4.0, 5.0]], config)?;

    let mut v5 = Vector::from_slice(&[1.0, 1.0, 2.0, 3.0, 5.0])?;
    v5.set_config(config);
    let v3 = Vector::from_slice(&[5.0, 6.0, 7.0])?;

    sep();
    println!("{:7.4}", m35);
    println!("{:>>8.4}", v3);

    sep();
    println!("{}", m1.try_mul(&m1)?);

    sep();
    println!("{}", m21.try_mul(&m21)?);

    sep();
    println!("{}", v3.try_mul_matrix(&m35)?);

    sep();
    println!("{}", m51.try_mul(v5.as_matrix())?);

    sep();
    println!("{}", v1.try_mul_matrix(v1.as_matrix())?);

    sep();
    println!("{}", &v5 * 6.0);
    println!("{}", &m5 * 6.0);
    println!("{}", 6.0 * &v5);
    println!("{}", 6.0 * &m5);

    sep();
    println!("{}", v5.try_add(&v5)?);

    sep();
    println!("{}", m5.try_add(v5.as_matrix())?);

    sep();
    println!("{}", v5.try_add_matrix(&m5)?);

    sep();
    println!("{}", m5.try_add(&m5)?);

    sep();
    v5.normalize_in_place()?;
    println!("{}", v5);
    println!("{}", v5.get(2)?);
    v5.set(2, 5.0)?;

    sep();
    println!("{}", -&v5);
    println!("{}", v5);

    sep();
    let mut m35 = m35;
    println!("{}", m35);
    println!("{}", m35.transpose_in_place());
    println!("{}", m35.transposed());

    sep();
    let v3 = Vector::from_slice(&[5.0, 5.0, 0.0])?;
    let v31 = Vector::from_slice(&[0.0, 1.0, 1.0])?;

    sep();
    println!("{}", cross(&v3, &v31)?);

    sep();
    println!("{}", dot(&v3, &v31)?);

    sep();
    println!("{}", cos_angle(&v3, &v31)?);

    sep();
    println!("{}", sin_angle(&v3, &v31)?);

    sep();
    println!("{}", angle_degrees(&v3, &v31)?);

    sep();
    Ok(())
}
