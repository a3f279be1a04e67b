//! Test fixtures - reusable content constants for tests.

/// Minimal flexible environment manifest
pub const APP_YAML: &str = "runtime: java\nenv: flex\n";

/// Custom runtime manifest (needs a Dockerfile)
pub const CUSTOM_APP_YAML: &str = "runtime: custom\nenv: flex\n";

/// Standard environment descriptor with application and version
pub const APPENGINE_WEB_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<appengine-web-app xmlns="http://appengine.google.com/ns/1.0">
  <application>descriptor-project</application>
  <version>descriptor-version</version>
  <threadsafe>true</threadsafe>
</appengine-web-app>
"#;

pub const CRON_YAML: &str = "cron:\n- description: daily\n  url: /tasks/daily\n  schedule: every 24 hours\n";

pub const QUEUE_YAML: &str = "queue:\n- name: default\n  rate: 1/s\n";

pub const DISPATCH_YAML: &str = "dispatch:\n- url: '*/api/*'\n  service: api\n";

/// Project file pointing at the fixture war
pub const PROJECT_CONFIG: &str = r#"
[project]
artifact = "target/app-1.0.war"
"#;
