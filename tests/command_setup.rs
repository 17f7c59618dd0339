#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
//! Integration tests for marketplace resolution in the shared command setup.
//!
//! Every test passes an explicit `--config` path so that the user's real
//! configuration file never leaks in.

mod common;

use std::path::PathBuf;

use common::{IntegrationTestContext, TestContextBuilder, setup_marketplace};
use swap_profile::cli::GlobalOpts;
use swap_profile::commands::{CommandSetup, list};
use swap_profile::logging::BufferedLog;

fn write_config(ctx: &IntegrationTestContext, marketplace: &std::path::Path) -> PathBuf {
    let path = ctx.root.path().join("config.toml");
    std::fs::write(
        &path,
        format!("marketplace = '{}'\n", marketplace.display()),
    )
    .unwrap();
    path
}

#[test]
fn flag_selects_marketplace() {
    let ctx = TestContextBuilder::new()
        .with_profile("default", "{}")
        .build();
    let global = GlobalOpts {
        marketplace: Some(ctx.marketplace()),
        config: Some(ctx.root.path().join("missing.toml")),
        dry_run: false,
    };

    let setup = CommandSetup::init(&global, &BufferedLog::new()).unwrap();

    assert_eq!(setup.marketplace, ctx.marketplace());
    assert_eq!(setup.store.root(), ctx.profiles_root());
}

#[test]
fn config_file_selects_marketplace() {
    let ctx = TestContextBuilder::new().build();
    let config = write_config(&ctx, &ctx.marketplace());
    let global = GlobalOpts {
        config: Some(config),
        ..GlobalOpts::default()
    };

    let setup = CommandSetup::init(&global, &BufferedLog::new()).unwrap();
    assert_eq!(setup.marketplace, ctx.marketplace());
}

#[test]
fn flag_beats_config_file() {
    let ctx = TestContextBuilder::new().build();
    let other = ctx.root.path().join("other");
    setup_marketplace(&other);
    let config = write_config(&ctx, &ctx.marketplace());
    let global = GlobalOpts {
        marketplace: Some(other.clone()),
        config: Some(config),
        dry_run: false,
    };

    let setup = CommandSetup::init(&global, &BufferedLog::new()).unwrap();
    assert_eq!(setup.marketplace, other);
}

#[test]
fn invalid_config_file_is_an_error() {
    let ctx = TestContextBuilder::new().build();
    let config = ctx.root.path().join("config.toml");
    std::fs::write(&config, "colour = 'blue'\n").unwrap();
    let global = GlobalOpts {
        config: Some(config),
        ..GlobalOpts::default()
    };

    let err = CommandSetup::init(&global, &BufferedLog::new()).unwrap_err();
    assert!(format!("{err:#}").contains("loading configuration"));
}

#[test]
fn list_run_uses_resolved_marketplace() {
    let ctx = TestContextBuilder::new()
        .with_profile("default", r#"{"enabledPlugins": {"foo@bar": true}}"#)
        .build();
    let global = GlobalOpts {
        marketplace: Some(ctx.marketplace()),
        config: Some(ctx.root.path().join("missing.toml")),
        dry_run: false,
    };
    let log = BufferedLog::new();

    list::run(&global, &log).unwrap();

    assert!(log.messages().iter().any(|m| m.ends_with("foo@bar")));
}

#[test]
fn missing_marketplace_fails_listing() {
    let ctx = TestContextBuilder::new().build();
    let global = GlobalOpts {
        marketplace: Some(ctx.root.path().join("nowhere")),
        config: Some(ctx.root.path().join("missing.toml")),
        dry_run: false,
    };

    let err = list::run(&global, &BufferedLog::new()).unwrap_err();
    assert!(err.to_string().contains("profiles root not found"));
}
