#![no_main]

use libfuzzer_sys::fuzz_target;

use fibmat_core::{fibonacci, hex};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let n = u16::from_le_bytes([data[0], data[1]]) as u64;

    let value = fibonacci(n);
    let text = hex::encode(&value);
    let back = hex::decode(&text).expect("canonical hex must decode");
    assert_eq!(back, value, "hex round trip failed at n={n}");
});
