//! Transform composition demo.
//!
//! Builds two translation transforms, composes them in place and prints
//! the resulting translation column together with the determinant of
//! the rotation/scale block.

use fulgor_numerics::Matrix4x4;

fn main() {
    println!("Fulgor transform composition demo");
    println!("=================================");

    let mut a = Matrix4x4::<f32>::identity();
    let mut b = Matrix4x4::<f32>::identity();

    a.set_translation(10.0, 5.0, 0.0);
    b.set_translation(2.0, 3.0, 1.0);

    a.multiply(&b);

    let t = a.translation();
    println!("Composed translation: ({}, {}, {})", t.x, t.y, t.z);
    println!("Upper-left 3x3 determinant: {}", a.determinant());
}
