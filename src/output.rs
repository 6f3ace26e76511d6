use std::sync::OnceLock;

static QUIET: OnceLock<bool> = OnceLock::new();

/// `CENSUS_QUIET=1` (or `true`) drops the decorative lines of the CLI.
pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| {
        std::env::var("CENSUS_QUIET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}
