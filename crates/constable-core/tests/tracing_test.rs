use constable_core::tracing::init_tracing;

#[test]
fn repeated_initialisation_is_a_no_op() {
    let _ = init_tracing(true);
    assert!(!init_tracing(false));
    assert!(!init_tracing(true));
}
