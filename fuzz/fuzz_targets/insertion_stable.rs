#![no_main]

use libfuzzer_sys::fuzz_target;

use sort_basics::stable::insertion as test_sort;

fuzz_target!(|data: &[u8]| {
    // Sort on the high nibble only, the attached index shows whether equal keys kept their order.
    let mut v = data
        .iter()
        .enumerate()
        .map(|(i, byte)| (byte >> 4, i))
        .collect::<Vec<_>>();

    test_sort::sort_by_key(&mut v, |e| e.0);

    assert!(v.windows(2).all(|w| w[0] < w[1]));
});
