#![no_main]

use libfuzzer_sys::fuzz_target;

use sort_basics::stable::merge as test_sort;

fuzz_target!(|data: &[u8]| {
    let mut v = data
        .iter()
        .enumerate()
        .map(|(i, byte)| (byte >> 4, i))
        .collect::<Vec<_>>();
    let mut aux = vec![(0, 0); v.len()];

    test_sort::sort_by_key(&mut v, &mut aux, |e| e.0).unwrap();

    assert!(v.windows(2).all(|w| w[0] < w[1]));
});
