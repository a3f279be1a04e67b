//! Property tests for the input parsers.

use proptest::prelude::*;

use appengine_deploy::domain::entities::{AppEngineDescriptor, AppYaml};
use appengine_deploy::domain::value_objects::ConfigValue;
use appengine_deploy::Config;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Descriptor parsing never panics on arbitrary input.
    #[test]
    fn property_descriptor_parse_never_panics(s in "(?s).{0,256}") {
        let _ = AppEngineDescriptor::parse(&s);
    }

    /// PROPERTY: app.yaml parsing never panics on arbitrary input.
    #[test]
    fn property_app_yaml_parse_never_panics(s in "(?s).{0,256}") {
        let _ = AppYaml::parse(&s);
    }

    /// PROPERTY: appengine.toml parsing never panics on arbitrary input.
    #[test]
    fn property_config_parse_never_panics(s in "(?s).{0,256}") {
        let _ = toml::from_str::<Config>(&s);
    }

    /// PROPERTY: Sentinel matching is exact; other spellings are literal values.
    #[test]
    fn property_sentinels_are_case_sensitive(
        s in "(?i)(gcloud_config|appengine_config)"
    ) {
        let parsed = ConfigValue::parse(Some(s.as_str()));
        match s.as_str() {
            "GCLOUD_CONFIG" => prop_assert_eq!(parsed, ConfigValue::FromAmbient),
            "APPENGINE_CONFIG" => prop_assert_eq!(parsed, ConfigValue::FromDescriptor),
            _ => prop_assert_eq!(parsed, ConfigValue::Explicit(s.clone())),
        }
    }

    /// PROPERTY: The application element is read back regardless of surrounding elements.
    #[test]
    fn property_descriptor_application_is_found(
        project in "[a-z][a-z0-9-]{0,29}",
        threadsafe in any::<bool>(),
    ) {
        let xml = format!(
            "<?xml version=\"1.0\"?>\n\
             <appengine-web-app xmlns=\"http://appengine.google.com/ns/1.0\">\n\
             <threadsafe>{}</threadsafe>\n\
             <application>{}</application>\n\
             </appengine-web-app>",
            threadsafe, project
        );
        let descriptor = AppEngineDescriptor::parse(&xml).unwrap();
        prop_assert_eq!(descriptor.project_id(), Some(project.as_str()));
        prop_assert_eq!(descriptor.version(), None);
    }
}
