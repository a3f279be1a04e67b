//! Property tests for project id / version resolution.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use proptest::prelude::*;

use appengine_deploy::domain::entities::AppEngineDescriptor;
use appengine_deploy::domain::ports::{AmbientConfig, SdkResult};
use appengine_deploy::domain::services::{ConfigProcessor, ConfigReader};
use appengine_deploy::AppEngineError;

/// Counts lookups so properties can assert gcloud was never consulted
#[derive(Default)]
struct CountingAmbient {
    calls: AtomicUsize,
}

impl AmbientConfig for CountingAmbient {
    fn project(&self) -> SdkResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Some("ambient".to_string()))
    }
}

fn identifier() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,29}").unwrap()
}

fn descriptor() -> AppEngineDescriptor {
    AppEngineDescriptor::parse(
        "<appengine-web-app><application>xml-project</application>\
         <version>xml-version</version></appengine-web-app>",
    )
    .unwrap()
}

fn processors(ambient: &Arc<CountingAmbient>, read_descriptor: bool) -> Vec<ConfigProcessor> {
    let reader = ConfigReader::new(ambient.clone());
    vec![
        ConfigProcessor::descriptor(descriptor(), reader.clone()).with_read_descriptor(read_descriptor),
        ConfigProcessor::manifest(reader).with_read_descriptor(read_descriptor),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A literal project id and version are used verbatim in both flows,
    /// without consulting gcloud.
    #[test]
    fn property_explicit_values_pass_through(
        project in identifier(),
        version in identifier(),
    ) {
        let ambient = Arc::new(CountingAmbient::default());
        for processor in processors(&ambient, false) {
            prop_assert_eq!(processor.process_project_id(Some(project.as_str())).unwrap(), project.clone());
            prop_assert_eq!(processor.process_version(Some(version.as_str())).unwrap(), Some(version.clone()));
        }
        prop_assert_eq!(ambient.calls.load(Ordering::SeqCst), 0);
    }

    /// PROPERTY: Surrounding whitespace never reaches gcloud.
    #[test]
    fn property_explicit_values_are_trimmed(
        project in identifier(),
        pad in "[ \t]{0,3}",
    ) {
        let ambient = Arc::new(CountingAmbient::default());
        let padded = format!("{}{}{}", pad, project, pad);
        for processor in processors(&ambient, false) {
            prop_assert_eq!(processor.process_project_id(Some(padded.as_str())).unwrap(), project.clone());
        }
    }

    /// PROPERTY: With the descriptor toggle on, any explicit value is a conflict.
    #[test]
    fn property_read_descriptor_rejects_explicit_values(
        project in identifier(),
    ) {
        let ambient = Arc::new(CountingAmbient::default());
        for processor in processors(&ambient, true) {
            let err = processor.process_project_id(Some(project.as_str())).unwrap_err();
            let is_conflict = matches!(err, AppEngineError::ConflictingSources { field: "project_id" });
            prop_assert!(is_conflict);
        }
        prop_assert_eq!(ambient.calls.load(Ordering::SeqCst), 0);
    }

    /// PROPERTY: Blank values are unset and always fail with a configuration error.
    #[test]
    fn property_blank_values_are_unset(
        blank in "[ \t]{0,4}",
    ) {
        let ambient = Arc::new(CountingAmbient::default());
        for processor in processors(&ambient, false) {
            prop_assert!(processor.process_project_id(Some(blank.as_str())).unwrap_err().is_configuration());
            prop_assert!(processor.process_version(Some(blank.as_str())).unwrap_err().is_configuration());
        }
    }
}

#[test]
fn gcloud_config_version_is_always_generated() {
    let ambient = Arc::new(CountingAmbient::default());
    for processor in processors(&ambient, false) {
        assert_eq!(processor.process_version(Some("GCLOUD_CONFIG")).unwrap(), None);
    }
    assert_eq!(ambient.calls.load(Ordering::SeqCst), 0);
}
