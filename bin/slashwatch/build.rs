use std::{collections::BTreeSet, env};

/// Exposes the enabled features and the cargo profile to the startup banner.
fn main() {
    let features: BTreeSet<String> = env::vars()
        .filter_map(|(key, _)| {
            key.strip_prefix("CARGO_FEATURE_")
                .map(|feature| feature.to_ascii_lowercase().replace('_', "-"))
        })
        .collect();
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!(
        "cargo:rustc-env=SLASHWATCH_CARGO_FEATURES={}",
        features.into_iter().collect::<Vec<_>>().join(",")
    );
    println!("cargo:rustc-env=SLASHWATCH_BUILD_PROFILE={profile}");
}
