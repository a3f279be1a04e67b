//! App Engine standard staging tool (`AppCfg stage`)

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::entities::StandardStageRequest;

const TOOLS_JAR: &str = "platform/google_appengine/google/appengine/tools/java/lib/appengine-tools-api.jar";
const MAIN_CLASS: &str = "com.google.appengine.tools.admin.AppCfg";

/// The appengine-tools-api.jar inside a Cloud SDK installation
pub fn tools_jar(sdk_home: &Path) -> PathBuf {
    sdk_home.join(TOOLS_JAR)
}

/// `java -cp <jar> AppCfg [flags...] stage <source> <staging>` (without `java`)
pub fn stage_args(sdk_home: &Path, request: &StandardStageRequest) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-cp".into(),
        tools_jar(sdk_home).into_os_string(),
        MAIN_CLASS.into(),
    ];

    let flags = &request.flags;
    push_flag(&mut args, "--enable_quickstart", flags.enable_quickstart);
    push_flag(&mut args, "--disable_update_check", flags.disable_update_check);
    push_flag(&mut args, "--enable_jar_splitting", flags.enable_jar_splitting);
    push_option(&mut args, "--jar_splitting_excludes", flags.jar_splitting_excludes.as_deref());
    push_option(&mut args, "--compile_encoding", flags.compile_encoding.as_deref());
    push_flag(&mut args, "--delete_jsps", flags.delete_jsps);
    push_flag(&mut args, "--enable_jar_classes", flags.enable_jar_classes);
    push_flag(&mut args, "--disable_jar_jsps", flags.disable_jar_jsps);
    push_option(&mut args, "--runtime", request.runtime.as_deref());

    args.push("stage".into());
    args.push(request.source_directory.clone().into_os_string());
    args.push(request.staging_directory.clone().into_os_string());
    args
}

/// `$JAVA_HOME/bin/java` when set, else `java` from `PATH`
pub fn java_executable() -> PathBuf {
    let name = if cfg!(windows) { "java.exe" } else { "java" };
    match std::env::var_os("JAVA_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home).join("bin").join(name),
        _ => which::which("java").unwrap_or_else(|_| PathBuf::from(name)),
    }
}

fn push_flag(args: &mut Vec<OsString>, flag: &str, enabled: bool) {
    if enabled {
        args.push(flag.into());
    }
}

fn push_option(args: &mut Vec<OsString>, flag: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        args.push(format!("{}={}", flag, value).into());
    }
}
