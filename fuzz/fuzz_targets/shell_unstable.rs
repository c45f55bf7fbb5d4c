#![no_main]

use libfuzzer_sys::fuzz_target;

use sort_basics::unstable::shell as test_sort;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    let mut expected = data.to_vec();
    expected.sort_unstable();

    test_sort::sort(&mut v);

    assert_eq!(v, expected);
});
