use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Base URL of the admin API server, e.g. "http://localhost:3000"
    pub base_url: String,
    /// Bearer token for the admin API (omit when the server is open)
    #[serde(default)]
    pub auth_token: Option<String>,
    /// External command that reads clipboard text from stdin
    /// (wl-copy, xclip -selection clipboard, pbcopy, ...)
    #[serde(default)]
    pub clipboard_command: Option<String>,
    #[serde(default = "default_icon_mode")]
    pub icon_mode: String,
    #[serde(default = "default_image_preview")]
    pub image_preview: bool,
}

fn default_icon_mode() -> String {
    "nerdfont".to_string()
}

fn default_image_preview() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let config: Config =
            serde_yaml::from_str("base_url: http://localhost:3000").expect("minimal config");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert!(config.auth_token.is_none());
        assert!(config.clipboard_command.is_none());
        assert_eq!(config.icon_mode, "nerdfont");
        assert!(config.image_preview);
    }

    #[test]
    fn test_full_config() {
        let yaml = "\
base_url: https://admin.example.com
auth_token: secret
clipboard_command: wl-copy
icon_mode: emoji
image_preview: false
";
        let config: Config = serde_yaml::from_str(yaml).expect("full config");
        assert_eq!(config.auth_token.as_deref(), Some("secret"));
        assert_eq!(config.clipboard_command.as_deref(), Some("wl-copy"));
        assert_eq!(config.icon_mode, "emoji");
        assert!(!config.image_preview);
    }
}
