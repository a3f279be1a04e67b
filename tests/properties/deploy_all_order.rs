//! Property tests for config yaml discovery order.

use proptest::prelude::*;
use tempfile::tempdir;

use appengine_deploy::application::discover_config_yamls;
use appengine_deploy::ConfigYaml;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Whatever subset exists, discovery returns exactly that subset
    /// in cron, dispatch, dos, index, queue order.
    #[test]
    fn property_discovery_follows_fixed_order(
        present in proptest::collection::vec(any::<bool>(), 5),
        write_order in Just(ConfigYaml::ALL.to_vec()).prop_shuffle(),
    ) {
        let dir = tempdir().unwrap();
        for kind in &write_order {
            let index = ConfigYaml::ALL.iter().position(|k| k == kind).unwrap();
            if present[index] {
                std::fs::write(dir.path().join(kind.file_name()), "x: 1\n").unwrap();
            }
        }
        // Unrelated yamls are never picked up
        std::fs::write(dir.path().join("app.yaml"), "runtime: java\n").unwrap();
        std::fs::write(dir.path().join("backends.yaml"), "x: 1\n").unwrap();

        let found = discover_config_yamls(dir.path());

        let expected: Vec<_> = ConfigYaml::ALL
            .iter()
            .zip(&present)
            .filter(|(_, present)| **present)
            .map(|(kind, _)| dir.path().join(kind.file_name()))
            .collect();
        prop_assert_eq!(found, expected);
    }
}
