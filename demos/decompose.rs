use splitfp::{decompose, get_special_test_values, Unpacked, E9S12};

///! Print the decomposition of a list of edge-case binary32 values.
///!  cargo run --example decompose

fn main() {
    println!("narrow format: {}", E9S12);

    for value in get_special_test_values() {
        let unpacked = Unpacked::from_f32(value);
        let (high, low) = decompose(value);

        println!("================================================");
        println!("original: {:.15e}  ({:?})", value, unpacked.class);
        println!("  high: {}", high);
        println!("  low:  {}", low);

        let sum = high.as_f64() + low.as_f64();
        println!("  reconstructed: {:.15e}", sum);
        if value != 0.0 && !value.is_infinite() {
            println!("  error: {:.3e}", (f64::from(value) - sum).abs());
        }
    }
}
