use super::types::{Bundle, Payload};
use std::borrow::Cow;

const SCRIPT: &[u8] = include_bytes!("../../../../assets/Final PS Script.txt");
const TEMPLATE: &[u8] = include_bytes!("../../../../assets/Power BI Governance Model.pbit");

// Relative to `Config/`. Add new files here and under `assets/Config/`.
const CONFIG: &[(&str, &[u8])] = &[
    (
        "Config.json",
        include_bytes!("../../../../assets/Config/Config.json"),
    ),
    (
        "Rules/ImpactRules.json",
        include_bytes!("../../../../assets/Config/Rules/ImpactRules.json"),
    ),
    (
        "Rules/NamingStandards.csv",
        include_bytes!("../../../../assets/Config/Rules/NamingStandards.csv"),
    ),
];

impl Bundle {
    /// The payloads compiled into this binary.
    pub fn embedded() -> Self {
        Self {
            script: Some(Cow::Borrowed(SCRIPT)),
            template: Some(Cow::Borrowed(TEMPLATE)),
            config: CONFIG
                .iter()
                .map(|(path, bytes)| Payload::new(*path, Cow::Borrowed(*bytes)))
                .collect(),
        }
    }

    pub fn new(
        script: impl Into<Cow<'static, [u8]>>,
        template: impl Into<Cow<'static, [u8]>>,
        config: Vec<Payload>,
    ) -> Self {
        Self {
            script: Some(script.into()),
            template: Some(template.into()),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_bundle_ships_every_payload() {
        let bundle = Bundle::embedded();
        assert!(bundle.script.as_ref().is_some_and(|s| !s.is_empty()));
        assert!(bundle.template.is_some());
        assert_eq!(bundle.config.len(), CONFIG.len());
        assert!(bundle.config.iter().all(|p| p.relative_path.is_relative()));
    }

    #[test]
    fn embedded_script_prompts_for_the_environment() {
        let bundle = Bundle::embedded();
        let script = String::from_utf8_lossy(bundle.script.as_deref().unwrap_or_default());
        assert!(script.contains("Read-Host"));
    }
}
