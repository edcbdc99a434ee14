//! Walks through the main `EuclideanVector` operations.
//!
//! Run with `RUST_LOG=debug cargo run --example vector_arithmetic` to see the
//! diagnostics emitted for rejected operations.
use anyhow::Result;
use euclidean_vector::{dot, euclidean_norm, unit, EuclideanVector, ToleranceConfig};

fn main() -> Result<()> {
    env_logger::init();

    let a = EuclideanVector::from([1.0, 2.0, 3.0]);
    let b = EuclideanVector::from([3.0, -2.0, 1.0]);

    println!("a = {}", a);
    println!("b = {}", b);
    println!("a + b = {}", (&a + &b)?);
    println!("a - b = {}", (&a - &b)?);
    println!("a * 2.5 = {}", &a * 2.5);
    println!("a / 4 = {}", (&a / 4)?);
    println!("-a = {}", -&a);
    println!("dot(a, b) = {}", dot(&a, &b)?);
    println!("|a| = {}", euclidean_norm(&a)?);
    println!("unit(a) = {}", unit(&a)?);

    let mut accumulator = EuclideanVector::zeros(3);
    accumulator.try_add_assign(&a)?.try_sub_assign(&b)?;
    accumulator *= 0.5;
    println!("(a - b) / 2 = {}", accumulator);

    let loose = ToleranceConfig::new(1e-2);
    let nearly_a = EuclideanVector::from([1.001, 2.0, 2.999]);
    println!(
        "a == {}: strict {}, loose {}",
        nearly_a,
        a == nearly_a,
        a.approx_eq(&nearly_a, &loose)
    );

    let short = EuclideanVector::from([1.0, 2.0]);
    if let Err(e) = &a + &short {
        println!("a + {} failed: {}", short, e);
    }
    if let Err(e) = unit(&EuclideanVector::zeros(3)) {
        println!("unit([0 0 0]) failed: {}", e);
    }

    let parsed: EuclideanVector = "[0.5 -1 4]".parse()?;
    println!("parsed {} with {} dimensions", parsed, parsed.dimensions());

    let components: Vec<f64> = parsed.into();
    println!("as Vec<f64>: {:?}", components);

    Ok(())
}
