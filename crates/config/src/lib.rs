mod address;
pub mod schema;

pub use address::{parse_address, MAX_ADDRESS};
pub use schema::{DisplayConfig, LedConfig, ThresholdConfig, TimeoutPolicy, TimingConfig};

use ledbar_core::{LedError, Result};
use std::path::{Path, PathBuf};

/// Read `ledbar.toml` at `path`.
///
/// A missing file is logged and yields the built-in display defaults; an
/// unreadable or malformed file is a [`LedError::Config`].
pub fn load(path: impl AsRef<Path>) -> Result<LedConfig> {
    let path = path.as_ref();
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No config at {}, driving with defaults", path.display());
            return Ok(LedConfig::default());
        }
        Err(e) => {
            return Err(LedError::Config(format!("reading {}: {e}", path.display())));
        }
    };
    parse(&raw)
}

/// Parse configuration from TOML text.
pub fn parse(raw: &str) -> Result<LedConfig> {
    toml::from_str(raw).map_err(|e| LedError::Config(format!("TOML parse error: {e}")))
}

/// `$XDG_CONFIG_HOME/ledbar/ledbar.toml`, falling back to `~/.config`.
pub fn default_path() -> PathBuf {
    let config_home = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_default()
            .join(".config"),
    };
    config_home.join("ledbar").join("ledbar.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledbar_core::DisplayKind;
    use std::time::Duration;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.display.kind, DisplayKind::Matrix);
        assert_eq!(cfg.display.address(), 0x70);
        assert_eq!(cfg.display.program(), "matrix");
        assert_eq!(cfg.timing.write_timeout(), Duration::from_secs(90));
        assert_eq!(cfg.timing.on_timeout, TimeoutPolicy::Continue);
        assert_eq!(cfg.thresholds.matrix.breakpoints(), &[12, 25, 36, 49, 62, 75, 87]);
    }

    #[test]
    fn per_kind_defaults() {
        let cfg = parse("[display]\nkind = \"ltp305\"\n").unwrap();
        assert_eq!(cfg.display.address(), 0x61);
        assert_eq!(cfg.display.program(), "cli2c");
        assert_eq!(cfg.timing.interval(cfg.display.kind), Duration::from_secs(1));

        let cfg = parse("[display]\nkind = \"segment\"\n").unwrap();
        assert_eq!(cfg.display.brightness(), 4);
        assert_eq!(cfg.timing.interval(cfg.display.kind), Duration::from_millis(500));
    }

    #[test]
    fn overrides_parse() {
        let cfg = parse(
            r#"
            [display]
            kind = "ltp305"
            device = "/dev/cu.usbmodem101"
            address = 0x62
            brightness = 32

            [timing]
            interval_ms = 250
            on_timeout = "retry"
            retries = 2

            [thresholds]
            ltp305 = [0, 14, 29, 44, 59, 74, 89]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.display.device.as_deref(), Some("/dev/cu.usbmodem101"));
        assert_eq!(cfg.display.address(), 0x62);
        assert_eq!(cfg.display.brightness(), 32);
        assert_eq!(cfg.timing.interval(DisplayKind::Ltp305), Duration::from_millis(250));
        assert_eq!(cfg.timing.on_timeout, TimeoutPolicy::Retry);
        assert_eq!(cfg.timing.retries, 2);
        assert_eq!(cfg.thresholds.for_kind(DisplayKind::Ltp305).resolution(), 7);
        assert_eq!(cfg.thresholds.for_kind(DisplayKind::Matrix).resolution(), 7);
    }

    #[test]
    fn unsorted_thresholds_are_rejected() {
        let err = parse("[thresholds]\nmatrix = [50, 10]\n").unwrap_err();
        assert!(matches!(err, LedError::Config(_)));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(parse("[timing]\non_timeout = \"panic\"\n").is_err());
    }

    #[test]
    fn address_accepts_integer_and_hex_string() {
        let cfg = parse("[display]\nkind = \"ltp305\"\naddress = \"0x61\"\n").unwrap();
        assert_eq!(cfg.display.address, Some(0x61));

        let cfg = parse("[display]\naddress = 0x71\n").unwrap();
        assert_eq!(cfg.display.address(), 0x71);

        let cfg = parse("[display]\naddress = \"112\"\n").unwrap();
        assert_eq!(cfg.display.address(), 0x70);
    }

    #[test]
    fn address_outside_seven_bits_is_rejected() {
        for raw in ["address = 0xFF", "address = \"0x80\"", "address = -1", "address = \"bus\""] {
            let err = parse(&format!("[display]\n{raw}\n")).unwrap_err();
            assert!(matches!(err, LedError::Config(_)), "{raw} loaded");
        }
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = load("/nonexistent/ledbar/ledbar.toml").unwrap();
        assert_eq!(cfg.display.kind, DisplayKind::Matrix);
    }
}
