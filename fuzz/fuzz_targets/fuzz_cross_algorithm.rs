#![no_main]

use libfuzzer_sys::fuzz_target;

use fibmat_core::{fibonacci, fibonacci2};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // First 4 bytes pick n, capped for speed (schoolbook is quadratic).
    let n = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as u64;
    let n = n % 20_000;

    let triad = fibonacci(n);
    let paired = fibonacci2(n);
    assert_eq!(triad, paired, "triad != paired at n={n}");

    let digits = triad.digits();
    assert!(digits.len() == 1 || *digits.last().unwrap() != 0, "untrimmed at n={n}");
});
