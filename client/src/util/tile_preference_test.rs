#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_is_none_in_non_hydrate_tests() {
    assert_eq!(read(), None);
}

#[test]
fn store_is_noop_but_callable() {
    store("topo");
    assert_eq!(read(), None);
}
