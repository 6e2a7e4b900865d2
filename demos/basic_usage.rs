use anyhow::Context;
use serde_json::json;
use vectores::{Operand, Vector};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::default()
        .parse_env(env_logger::Env::default().filter_or("VECTORES_LOG", "info"))
        .init();

    println!("Vector Algebra Demo");
    println!("===================\n");

    let v1 = Vector::from_vec(vec![1, 2, 3]);
    let v2 = Vector::from_vec(vec![4, 5, 6]);
    println!("v1 = {v1}");
    println!("v2 = {v2}\n");

    println!("v1 + v2   = {}", v1.add(&v2)?);
    println!("v1 - v2   = {}", v1.sub(&v2)?);
    println!("v1 * 2    = {}", &v1 * 2);
    println!("v1 * v2   = {}", v1.multiply(Operand::from(v2.clone()))?);
    println!("v1 . v2   = {}", v1.dot(&v2)?);
    println!("|v1|      = {:.6}\n", v1.norm());

    let a = Vector::from_vec(vec![2.0, 1.0, 2.0]);
    let b = Vector::from_vec(vec![0.5, 1.0, 0.5]);
    println!("a = {a}, b = {b}");
    println!("projection of a onto b = {}", a.project(&b)?);
    println!("rejection of a from b  = {}\n", a.reject(&b)?);

    // Operands arriving as JSON go through the same multiply entry point
    for raw in [json!(3), json!([1, 0, -1]), json!("three")] {
        match Operand::try_from(&raw) {
            Ok(operand) => println!("v1 * {raw} = {}", v1.multiply(operand)?),
            Err(e) => log::warn!("skipping operand {raw}: {e}"),
        }
    }

    let zero = Vector::from_vec(vec![0.0, 0.0, 0.0]);
    if let Err(e) = a.project(&zero) {
        log::info!("projecting onto {zero} failed as expected: {e}");
    }

    let json = serde_json::to_string(&a).context("Failed to serialize vector to JSON")?;
    println!("\nSerialized a: {json}");

    println!("\nDemo completed successfully!");
    Ok(())
}
