#![no_main]
use libfuzzer_sys::fuzz_target;

use ed25519_byteloader::{load3_at, load4_at, load8_at, ByteLoader};

fn weighted_sum(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .enumerate()
        .map(|(k, &b)| (b as u64) << (8 * k))
        .sum()
}

/// Check every window load against the little-endian weighted byte sum,
/// and that a checked cursor walks any input without panicking.
fuzz_target!(|data: &[u8]| {
    for i in 0..data.len() {
        if i + 3 <= data.len() {
            assert_eq!(load3_at(data, i) as u64, weighted_sum(&data[i..i + 3]));
        }
        if i + 4 <= data.len() {
            assert_eq!(load4_at(data, i), weighted_sum(&data[i..i + 4]));
        }
        if i + 8 <= data.len() {
            assert_eq!(load8_at(data, i), weighted_sum(&data[i..i + 8]));
        }
    }

    // Use the first byte to pick a window width for each step.
    let mut loader = ByteLoader::new(data);
    let mut selector = data.first().copied().unwrap_or(0);
    loop {
        let before = loader.position();
        let ok = match selector % 3 {
            0 => loader.try_load3().is_ok(),
            1 => loader.try_load4().is_ok(),
            _ => loader.try_load8().is_ok(),
        };
        if !ok {
            assert_eq!(loader.position(), before);
            break;
        }
        selector = selector.wrapping_add(1);
    }
});
