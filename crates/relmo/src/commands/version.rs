//! `relmo version` and the `--version` text.

use std::env::consts::{ARCH, OS};

use anyhow::Result;
use serde::Serialize;

use crate::context::RuntimeContext;
use crate::output::output_json;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build tag, set with `RELMO_BUILD` at compile time.
const BUILD: &str = match option_env!("RELMO_BUILD") {
    Some(tag) => tag,
    None => "dev",
};

#[derive(Debug, Serialize, PartialEq, Eq)]
struct BuildInfo {
    version: &'static str,
    build: &'static str,
    os: &'static str,
    arch: &'static str,
}

impl BuildInfo {
    fn current() -> Self {
        Self {
            version: VERSION,
            build: BUILD,
            os: OS,
            arch: ARCH,
        }
    }
}

/// `0.1.0 (dev) linux/x86_64`, shared by `relmo version` and `relmo --version`.
pub fn long_version() -> String {
    let info = BuildInfo::current();
    format!("{} ({}) {}/{}", info.version, info.build, info.os, info.arch)
}

pub fn run(ctx: &RuntimeContext) -> Result<()> {
    if ctx.json {
        output_json(&BuildInfo::current());
    } else {
        println!("relmo version {}", long_version());
    }
    Ok(())
}
