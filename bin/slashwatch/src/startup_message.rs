use std::env::consts::{ARCH, OS};

use crate::SLASHWATCH_VERSION;

const SLASHWATCH_CARGO_FEATURES: &str = env!("SLASHWATCH_CARGO_FEATURES");
const SLASHWATCH_BUILD_PROFILE: &str = env!("SLASHWATCH_BUILD_PROFILE");

pub fn startup_message() -> String {
    let cargo_features = if SLASHWATCH_CARGO_FEATURES.is_empty() {
        "none"
    } else {
        SLASHWATCH_CARGO_FEATURES
    };
    format!(
        "
  ___ _           _               _      _
 / __| |__ _ _____| |____ __ ____ _| |_ __| |_
 \\__ \\ / _` (_-< ' \\ V  V / _` |  _/ _| ' \\
 |___/_\\__,_/__/_||_\\_/\\_/\\__,_|\\__\\__|_||_|

 Version          : {SLASHWATCH_VERSION}
 Build Platform   : {OS}-{ARCH}
 Cargo Features   : {cargo_features}
 Build Profile    : {SLASHWATCH_BUILD_PROFILE}
"
    )
}
