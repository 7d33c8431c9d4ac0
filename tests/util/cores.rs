// Integration tests for util/cores.rs.

use lz77::util::count_cores;

#[test]
fn count_is_positive_and_stable() {
    let n = count_cores();
    assert!(n >= 1);
    assert_eq!(count_cores(), n);
}
