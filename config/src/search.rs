use midpoint_search::Mode;
use serde::Deserialize;

use super::Config;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SearchConfig {
    #[serde(rename = "bitwidth")]
    pub bit_width: u32,
    pub mode: Mode,
}

impl Config for SearchConfig {
    const PREFIX: &'static str = "SEARCH";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_config() {
        std::env::set_var("MIDPOINT_SEARCH_BITWIDTH", "12");
        std::env::set_var("MIDPOINT_SEARCH_MODE", "safe");

        let config = <SearchConfig as Config>::from_env().unwrap();
        assert_eq!(config, SearchConfig { bit_width: 12, mode: Mode::OverflowSafe });
    }

    #[derive(Debug, Deserialize)]
    struct Unset {
        #[allow(dead_code)]
        value: u32,
    }

    impl Config for Unset {
        const PREFIX: &'static str = "UNSET";
    }

    #[test]
    fn missing_field_is_an_error() {
        assert!(matches!(Unset::from_env(), Err(crate::Error::Config(_))));
    }
}
