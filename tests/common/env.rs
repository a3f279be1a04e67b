//! Test environment builder for isolated appengine-deploy testing.
//!
//! Provides `TestEnv` - a temp project directory and home, an optional fake
//! Cloud SDK (a `gcloud` that records its arguments and a `java` that plays
//! AppCfg staging), plus helpers to run the CLI.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{APPENGINE_WEB_XML, APP_YAML, PROJECT_CONFIG};

/// Project id printed by the fake `gcloud config list`
pub const AMBIENT_PROJECT: &str = "ambient-project";

/// Result of running an appengine-deploy CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
///
/// The child process gets a cleared environment: `HOME` points at the temp
/// home, `PATH` is empty and `APPENGINE_*` variables only come from the test.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    /// `project_root` with symlinks resolved, as the CLI sees its working directory
    root: PathBuf,
    /// Fake Cloud SDK root, when requested
    sdk_home: Option<PathBuf>,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(&self.root)
            .args(args)
            .env_clear()
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("PATH", "");

        if let Some(sdk) = &self.sdk_home {
            cmd.env("APPENGINE_CLOUD_SDK_HOME", sdk)
                .env("JAVA_HOME", sdk.join("jdk"));
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute appengine-deploy");
        output_to_result(output)
    }

    /// Argument lines recorded by the fake gcloud, one per invocation
    pub fn gcloud_calls(&self) -> Vec<String> {
        let Some(sdk) = &self.sdk_home else {
            return Vec::new();
        };
        std::fs::read_to_string(sdk.join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Argument lines recorded by the fake AppCfg
    pub fn app_cfg_calls(&self) -> Vec<String> {
        let Some(sdk) = &self.sdk_home else {
            return Vec::new();
        };
        std::fs::read_to_string(sdk.join("java.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    /// Files below `relative`, sorted, relative to it
    pub fn list_files(&self, relative: &str) -> Vec<String> {
        let root = self.project_path(relative);
        let mut files = Vec::new();
        collect_files(&root, &root, &mut files);
        files.sort();
        files
    }
}

fn collect_files(root: &Path, dir: &Path, files: &mut Vec<String>) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect_files(root, &path, files);
            } else if let Ok(rel) = path.strip_prefix(root) {
                files.push(rel.to_string_lossy().replace('\\', "/"));
            }
        }
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    files: Vec<(String, String)>,
    project_config: Option<String>,
    fake_sdk: bool,
}

impl TestEnvBuilder {
    /// Create a new builder with an empty project
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            project_config: None,
            fake_sdk: false,
        }
    }

    /// Built war plus src/main/appengine/app.yaml, with appengine.toml pointing at the war
    pub fn flexible(self) -> Self {
        self.with_file("target/app-1.0.war", "war")
            .with_file("src/main/appengine/app.yaml", APP_YAML)
            .with_project_config(PROJECT_CONFIG)
    }

    /// Built war whose exploded directory carries appengine-web.xml
    pub fn standard(self) -> Self {
        self.with_file("target/app-1.0.war", "war")
            .with_file("target/app-1.0/WEB-INF/appengine-web.xml", APPENGINE_WEB_XML)
            .with_project_config(PROJECT_CONFIG)
    }

    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    /// Replace `appengine.toml`
    pub fn with_project_config(mut self, config: &str) -> Self {
        self.project_config = Some(config.to_string());
        self
    }

    /// Cloud SDK whose gcloud records arguments and reports `AMBIENT_PROJECT`;
    /// its AppCfg stages app.yaml and `WEB-INF/appengine-generated/cron.yaml`
    pub fn with_fake_sdk(mut self) -> Self {
        self.fake_sdk = true;
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project dir");
        let home_dir = TempDir::new().expect("Failed to create home dir");

        for (relative, content) in &self.files {
            write_file(&project_root.path().join(relative), content);
        }
        if let Some(config) = &self.project_config {
            write_file(&project_root.path().join("appengine.toml"), config);
        }

        let sdk_home = self.fake_sdk.then(|| {
            let sdk = home_dir.path().join("google-cloud-sdk");
            install_fake_sdk(&sdk);
            sdk
        });

        let root = project_root
            .path()
            .canonicalize()
            .expect("Failed to resolve project dir");

        TestEnv {
            project_root,
            home_dir,
            root,
            sdk_home,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_appengine-deploy")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn install_fake_sdk(sdk: &Path) {
    let log = sdk.join("calls.log");
    install_script(
        &sdk.join("bin").join("gcloud"),
        &format!(
            "#!/bin/sh\n\
             echo \"$@\" >> '{}'\n\
             if [ \"$1\" = \"config\" ]; then\n\
             echo '{{\"core\": {{\"project\": \"{}\"}}}}'\n\
             fi\n",
            log.display(),
            AMBIENT_PROJECT
        ),
    );

    // AppCfg: the last argument is the staging directory
    let java_log = sdk.join("java.log");
    install_script(
        &sdk.join("jdk").join("bin").join("java"),
        &format!(
            "#!/bin/sh\n\
             echo \"$@\" >> '{}'\n\
             for staging; do :; done\n\
             PATH=/bin:/usr/bin mkdir -p \"$staging/WEB-INF/appengine-generated\"\n\
             echo 'runtime: java8' > \"$staging/app.yaml\"\n\
             echo 'cron: []' > \"$staging/WEB-INF/appengine-generated/cron.yaml\"\n",
            java_log.display()
        ),
    );
    write_file(
        &sdk.join("platform/google_appengine/google/appengine/tools/java/lib/appengine-tools-api.jar"),
        "jar",
    );
}

#[cfg(unix)]
fn install_script(path: &Path, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    write_file(path, script);
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
}

#[cfg(not(unix))]
fn install_fake_sdk(_sdk: &Path) {
    panic!("the fake Cloud SDK is only available on unix");
}
