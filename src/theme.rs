use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage key holding the persisted preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Inline head script that applies the stored theme before first paint, so
/// the server-rendered default never flashes. The value is JSON encoded, as
/// written by the storage codec.
pub fn boot_script() -> String {
    let (light, dark) = (Theme::Light.as_class(), Theme::Dark.as_class());
    format!(
        "try{{var t=JSON.parse(localStorage.getItem('{THEME_STORAGE_KEY}'));\
         if(t==='{light}'||t==='{dark}'){{var c=document.documentElement.classList;\
         c.remove('{light}','{dark}');c.add(t)}}}}catch(e){{}}"
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(String);

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Class placed on the document root.
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_class())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
    }

    #[test]
    fn test_storage_encoding() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        let t: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(t, Theme::Dark);
        assert!(serde_json::from_str::<Theme>("\"sepia\"").is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(" Light ".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert!("system".parse::<Theme>().is_err());
    }

    #[test]
    fn test_boot_script_reads_stored_theme() {
        let script = boot_script();
        assert!(script.contains("localStorage.getItem('theme')"));
        assert!(script.contains("JSON.parse"));
        assert!(script.contains("t==='light'||t==='dark'"));
        assert!(script.contains("c.remove('light','dark');c.add(t)"));
        // inline text must survive html escaping untouched
        assert!(!script.contains(&['<', '>', '&'][..]));
    }
}
