//! Thread-safety markers for types shared across the parallel dispatch.

fn assert_sync_send<T: Sync + Send>() {}

#[test]
fn checker_registry_is_sync_send() {
    assert_sync_send::<confcheck_core::CheckerRegistry>();
}

#[test]
fn discovery_options_are_sync_send() {
    assert_sync_send::<confcheck_core::DiscoveryOptions>();
}

#[test]
fn validation_result_is_sync_send() {
    assert_sync_send::<confcheck_core::ValidationResult>();
}

#[test]
fn run_report_is_sync_send() {
    assert_sync_send::<confcheck_core::RunReport>();
}
