//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML document
    ///
    /// The API key is never written out; it belongs in the environment.
    pub fn to_toml(&self) -> String {
        let mut out = String::new();

        out.push_str("# purrshop configuration\n");
        out.push_str("# Environment variables override these values:\n");
        out.push_str("#   PURRSHOP_THEME, PURRSHOP_STORAGE, PURRSHOP_MODEL,\n");
        out.push_str("#   GEMINI_API_KEY (or API_KEY) for the chat assistant\n\n");

        out.push_str("# Theme: \"Purr Dark\", \"Purr Light\", \"Terminal\"\n");
        out.push_str(&format!("theme = {:?}\n\n", self.theme));

        out.push_str("# Where the signed-in session is remembered between runs\n");
        out.push_str(&format!(
            "storage_path = {:?}\n\n",
            self.storage_path.display().to_string()
        ));

        out.push_str("[assistant]\n");
        out.push_str(&format!("model = {:?}\n", self.assistant.model));
        out.push_str(&format!("api_base = {:?}\n", self.assistant.api_base));
        out.push_str(&format!("temperature = {:?}\n", self.assistant.temperature));
        out.push_str("# api_key = \"...\"  # prefer GEMINI_API_KEY in the environment\n\n");

        out.push_str("[logging]\n");
        out.push_str("# Level: trace, debug, info, warn, error (RUST_LOG overrides)\n");
        out.push_str(&format!("level = {:?}\n", self.logging.level));
        out.push_str(&format!("file_enabled = {}\n", self.logging.file_enabled));
        out.push_str(&format!(
            "file_dir = {:?}\n",
            self.logging.file_dir.display().to_string()
        ));
        out.push_str(&format!(
            "file_rotation = {:?}\n",
            self.logging.file_rotation.as_str()
        ));
        out.push_str(&format!("file_prefix = {:?}\n", self.logging.file_prefix));

        out
    }
}
