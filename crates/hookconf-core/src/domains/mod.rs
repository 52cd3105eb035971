//! Configuration domains bundled with the library

pub mod githook;

pub use githook::GitHookSystemConfig;

/// `(name, readme)` for every bundled domain, for tooling that lists them.
pub fn bundled() -> Vec<(String, &'static str)> {
    vec![(
        crate::Configuration::<GitHookSystemConfig>::config_name(),
        <GitHookSystemConfig as crate::ConfigDomain>::readme(),
    )]
}
