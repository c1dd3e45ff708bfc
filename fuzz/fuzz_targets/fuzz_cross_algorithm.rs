#![no_main]

use libfuzzer_sys::fuzz_target;

use decmath_core::{fft_mul, karatsuba_mul, standard_mul, LongInt};
use num_bigint::BigInt;

/// Map fuzzer bytes to a decimal operand string, negative when the length byte
/// has its high bit set. Capped at 512 digits for speed (3 algorithms).
fn operand(data: &[u8]) -> String {
    let negative = data[0] & 0x80 != 0;
    let mut s = String::with_capacity(data.len());
    if negative {
        s.push('-');
    }
    for &b in &data[1..] {
        s.push(char::from(b'0' + b % 10));
    }
    s
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 || data.len() > 1025 {
        return;
    }
    let split = 1 + usize::from(data[0] & 0x7f) % (data.len() - 2);
    let (left, right) = data.split_at(split + 1);
    if right.len() < 2 {
        return;
    }

    let a = operand(left);
    let b = operand(right);

    let la: LongInt = match a.parse() {
        Ok(v) => v,
        Err(_) => return, // sign-only input
    };
    let lb: LongInt = match b.parse() {
        Ok(v) => v,
        Err(_) => return,
    };

    let standard = standard_mul(&la, &lb);
    let karatsuba = karatsuba_mul(&la, &lb);
    let fft = fft_mul(&la, &lb);

    assert_eq!(standard, karatsuba, "standard != karatsuba for {a} * {b}");
    assert_eq!(standard, fft, "standard != fft for {a} * {b}");

    let expected: BigInt = a.parse::<BigInt>().unwrap() * b.parse::<BigInt>().unwrap();
    assert_eq!(standard.to_string(), expected.to_string());
});
