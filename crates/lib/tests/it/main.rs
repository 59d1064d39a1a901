/*! Integration tests for snapstate.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - tree: Tests for the state tree data model, traversal, operations, and wire format
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("snapstate=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod tree;
