use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_ttl_over_max_when_validate_then_error() {
    let (_temp, _guard) = setup_config_dir();
    let _ttl = EnvGuard::set("KB_CACHE_TTL_SECS", "3601");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_zero_ttl_when_validate_then_ok() {
    let (_temp, _guard) = setup_config_dir();
    let _ttl = EnvGuard::set("KB_CACHE_TTL_SECS", "0");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), ok(anything()));
    assert_eq!(config.cache.ttl(), Duration::ZERO);
}
