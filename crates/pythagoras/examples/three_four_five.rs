//! Walk through the five operations on small triangles.
//!
//! Run with `cargo run -p pythagoras --example three_four_five`.

use pythagoras::prelude::*;

fn main() -> Result<(), TriangleError> {
    let c = compute_hypotenuse(3.0, 4.0)?;
    println!("hypotenuse of 3 and 4: {c}");

    println!("side a from (5, 4): {}", compute_side_a(5.0, 4.0)?);
    println!("side b from (5, 3): {}", compute_side_b(5.0, 3.0)?);

    println!("is 3-4-5 right? {}", is_right_triangle(3.0, 4.0, 5.0)?);
    println!("is 5-4-3 right? {}", is_right_triangle(5.0, 4.0, 3.0)?);
    println!("validate (5, 4, hyp 3)? {}", validate_triangle(5.0, 4.0, 3.0)?);

    println!("hypotenuse of 5.5 and 7.3: {}", compute_hypotenuse(5.5, 7.3)?);

    match compute_side_a(3.0, 5.0) {
        Ok(a) => println!("unexpected side: {a}"),
        Err(e) => println!("side a from (3, 5): {e}"),
    }
    Ok(())
}
