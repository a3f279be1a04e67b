//! Deploy commands end to end against a fake Cloud SDK.

mod common;

use common::*;

#[test]
fn test_missing_project_id_fails_before_staging() {
    let env = TestEnv::builder().flexible().build();

    let result = env.run(&["deploy", "--version", "v1"]);

    assert!(!result.is_success());
    assert!(
        result
            .stderr
            .contains("Deployment project_id must be defined or configured to read from system state"),
        "{}",
        result.stderr
    );
    assert!(env.list_files("target/appengine-staging").is_empty());
}

#[test]
fn test_missing_version_fails() {
    let env = TestEnv::builder().flexible().build();

    let result = env.run(&["deploy", "--project-id", "p"]);

    assert!(!result.is_success());
    assert!(result.stderr.contains("Deployment version must be defined"));
}

#[test]
fn test_appengine_config_rejected_for_app_yaml_projects() {
    let env = TestEnv::builder().flexible().build();

    let result = env.run(&["deploy", "--project-id", "APPENGINE_CONFIG", "--version", "v1"]);

    assert!(!result.is_success());
    assert!(
        result.stderr.contains("only valid for appengine-web.xml based projects"),
        "{}",
        result.stderr
    );
}

#[test]
fn test_read_descriptor_conflicts_with_explicit_project() {
    let env = TestEnv::builder().standard().build();

    let result = env.run_with_env(
        &["deploy", "--project-id", "p", "--version", "v1"],
        &[("DEPLOY_READ_APPENGINE_WEB_XML", "true")],
    );

    assert!(!result.is_success());
    assert!(
        result.stderr.contains("Cannot override deploy.project_id with appengine-web.xml"),
        "{}",
        result.stderr
    );
}

#[test]
fn test_deploy_without_artifact_fails() {
    let env = TestEnv::builder().build();

    let result = env.run(&["deploy-all", "--project-id", "p", "--version", "v1"]);

    assert!(!result.is_success());
    assert!(result.stderr.contains("did you package your application?"));
}

#[test]
fn test_deploy_skips_other_packaging() {
    let env = TestEnv::builder()
        .flexible()
        .with_project_config("[project]\nartifact = \"target/app-1.0.war\"\npackaging = \"pom\"\n")
        .build();

    let result = env.run(&["deploy"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("deploy skipped"));
}

#[cfg(unix)]
mod with_sdk {
    use super::common::*;

    #[test]
    fn test_deploy_flexible_uses_staging_directory() {
        let env = TestEnv::builder().flexible().with_fake_sdk().build();

        let result = env.run(&["deploy", "--project-id", "my-project", "--version", "v1", "--no-promote"]);

        assert!(result.is_success(), "{}", result.combined_output());
        let staging = env.project_path("target/appengine-staging");
        assert_eq!(
            env.gcloud_calls(),
            vec![format!(
                "app deploy {} --no-promote --version v1 --project my-project --quiet",
                staging.display()
            )]
        );
        assert!(result.stdout.contains("deploy complete"));
    }

    #[test]
    fn test_gcloud_config_sentinels() {
        let env = TestEnv::builder().flexible().with_fake_sdk().build();

        let result = env.run_with_env(
            &["deploy", "--json"],
            &[
                ("APPENGINE_PROJECT_ID", "GCLOUD_CONFIG"),
                ("APPENGINE_VERSION", "GCLOUD_CONFIG"),
            ],
        );

        assert!(result.is_success(), "{}", result.combined_output());
        let calls = env.gcloud_calls();
        assert_eq!(calls.len(), 2, "{:?}", calls);
        assert_eq!(calls[0], "config list --format=json");
        assert!(calls[1].ends_with(&format!("--project {} --quiet", AMBIENT_PROJECT)));
        assert!(!calls[1].contains("--version"));

        let value: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
        assert_eq!(value["project_id"], AMBIENT_PROJECT);
        assert!(value["version"].is_null());
    }

    #[test]
    fn test_deploy_all_flexible_collects_config_yamls() {
        let env = TestEnv::builder()
            .flexible()
            .with_file("src/main/appengine/queue.yaml", QUEUE_YAML)
            .with_file("src/main/appengine/cron.yaml", CRON_YAML)
            .with_fake_sdk()
            .build();

        let result = env.run(&["deploy-all", "--project-id", "p", "--version", "v1"]);

        assert!(result.is_success(), "{}", result.combined_output());
        let calls = env.gcloud_calls();
        assert_eq!(calls.len(), 1);
        let staged_app = env.project_path("target/appengine-staging/app.yaml");
        let cron = env.project_path("src/main/appengine/cron.yaml");
        let queue = env.project_path("src/main/appengine/queue.yaml");
        assert!(
            calls[0].starts_with(&format!(
                "app deploy {} {} {} ",
                staged_app.display(),
                cron.display(),
                queue.display()
            )),
            "{}",
            calls[0]
        );
    }

    #[test]
    fn test_deploy_all_standard_reads_generated_configs() {
        let env = TestEnv::builder().standard().with_fake_sdk().build();

        let result = env.run(&["deploy-all", "--project-id", "APPENGINE_CONFIG", "--version", "APPENGINE_CONFIG"]);

        assert!(result.is_success(), "{}", result.combined_output());
        assert_eq!(env.app_cfg_calls().len(), 1);
        assert!(env.app_cfg_calls()[0].contains("AppCfg"));

        let staging = env.project_path("target/appengine-staging");
        assert_eq!(
            env.gcloud_calls(),
            vec![format!(
                "app deploy {} {} --version descriptor-version --project descriptor-project --quiet",
                staging.join("app.yaml").display(),
                staging.join("WEB-INF/appengine-generated/cron.yaml").display()
            )]
        );
        assert!(result
            .stderr
            .contains("Detected App Engine standard environment application."));
    }

    #[test]
    fn test_read_descriptor_fills_unset_values() {
        let env = TestEnv::builder().standard().with_fake_sdk().build();

        let result = env.run(&["deploy", "--read-descriptor"]);

        assert!(result.is_success(), "{}", result.combined_output());
        let calls = env.gcloud_calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].ends_with("--version descriptor-version --project descriptor-project --quiet"));
    }

    #[test]
    fn test_deploy_cron_standard() {
        let env = TestEnv::builder().standard().with_fake_sdk().build();

        let result = env.run(&["deploy-cron", "--project-id", "p", "--server", "appengine.example.com"]);

        assert!(result.is_success(), "{}", result.combined_output());
        let cron = env.project_path("target/appengine-staging/WEB-INF/appengine-generated/cron.yaml");
        assert_eq!(
            env.gcloud_calls(),
            vec![format!(
                "app deploy {} --server appengine.example.com --project p --quiet",
                cron.display()
            )]
        );
    }

    #[test]
    fn test_deploy_dispatch_flexible_reads_source_directory() {
        let env = TestEnv::builder()
            .flexible()
            .with_file("src/main/appengine/dispatch.yaml", DISPATCH_YAML)
            .with_fake_sdk()
            .build();

        let result = env.run(&["deploy-dispatch", "--project-id", "p"]);

        assert!(result.is_success(), "{}", result.combined_output());
        let dispatch = env.project_path("src/main/appengine/dispatch.yaml");
        assert_eq!(
            env.gcloud_calls(),
            vec![format!("app deploy {} --project p --quiet", dispatch.display())]
        );
    }

    #[test]
    fn test_missing_config_yaml_makes_no_deploy_call() {
        let env = TestEnv::builder().flexible().with_fake_sdk().build();

        let result = env.run(&["deploy-queue", "--project-id", "p"]);

        assert!(!result.is_success());
        assert!(result.stderr.contains("Failed to deploy queue: could not find"), "{}", result.stderr);
        assert!(env.gcloud_calls().is_empty());
    }

    #[test]
    fn test_explicit_deployables_replace_staging_directory() {
        let env = TestEnv::builder()
            .flexible()
            .with_file("extra/app.yaml", APP_YAML)
            .with_fake_sdk()
            .build();

        let result = env.run(&[
            "deploy",
            "--project-id",
            "p",
            "--version",
            "v1",
            "--deployable",
            "extra/app.yaml",
        ]);

        assert!(result.is_success(), "{}", result.combined_output());
        assert_eq!(
            env.gcloud_calls(),
            vec![format!(
                "app deploy {} --version v1 --project p --quiet",
                env.project_path("extra/app.yaml").display()
            )]
        );
    }

    #[test]
    fn test_start_runs_without_staging() {
        let env = TestEnv::builder().flexible().with_fake_sdk().build();

        let result = env.run(&["start", "--project-id", "p", "--version", "v1"]);

        assert!(result.is_success(), "{}", result.combined_output());
        assert_eq!(
            env.gcloud_calls(),
            vec!["app versions start v1 --service default --project p --quiet".to_string()]
        );
        assert!(env.list_files("target/appengine-staging").is_empty());
        assert!(result.stdout.contains("start complete"));
    }

    #[test]
    fn test_set_default_per_service_from_descriptor() {
        let env = TestEnv::builder().standard().with_fake_sdk().build();

        let result = env.run(&[
            "set-default",
            "--read-descriptor",
            "--service",
            "api",
            "--service",
            "worker",
        ]);

        assert!(result.is_success(), "{}", result.combined_output());
        assert_eq!(
            env.gcloud_calls(),
            vec![
                "app services set-traffic api --splits descriptor-version=1 --project descriptor-project --quiet".to_string(),
                "app services set-traffic worker --splits descriptor-version=1 --project descriptor-project --quiet".to_string(),
            ]
        );
    }

    #[test]
    fn test_start_without_version_makes_no_gcloud_call() {
        let env = TestEnv::builder().flexible().with_fake_sdk().build();

        let result = env.run(&["start", "--project-id", "p"]);

        assert!(!result.is_success());
        assert!(result.stderr.contains("Version was not specified"), "{}", result.stderr);
        assert!(env.gcloud_calls().is_empty());
    }
}
