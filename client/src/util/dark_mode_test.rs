#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn document_root_is_noop_but_callable() {
    DocumentRoot.set_dark(true);
    DocumentRoot.set_dark(false);
}

#[test]
fn dark_class_name_is_stable() {
    assert_eq!(DARK_CLASS, "dark");
}
