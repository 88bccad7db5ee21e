//! Minimal end-to-end example: convert an angle, compute a velocity (length / time) and resolve a
//! unit symbol.

use metron::angle::{PlaneAngle, DEGREE, RADIAN};
use metron::length::{Length, KILOMETER};
use metron::mechanics::{Velocity, KILOMETER_PER_HOUR};
use metron::time::Time;
use metron::{measure_as, Measure};

fn main() -> metron::Result<()> {
    let a = Measure::<PlaneAngle>::in_unit(180.0, &DEGREE);
    assert!((a.amount_in(&RADIAN) - core::f64::consts::PI).abs() < 1e-12);

    let d = Measure::<Length>::in_unit(1_000.0, &KILOMETER);
    let t = Measure::<Time>::new(100.0);
    let v = d.divide::<Velocity, _>(t)?;
    assert!((v.amount() - 10_000.0).abs() < 1e-9);
    println!("{}", v.convert_to(KILOMETER_PER_HOUR));

    let h = measure_as::<Length>(12.5, "CM")?;
    println!("{} = {}", h, h.convert_to(KILOMETER));
    Ok(())
}
