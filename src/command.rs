//! Generator command construction
//!
//! Builds the argument list a host passes to the external generator
//! executable. Pure string assembly; nothing here spawns a process or
//! reads its output.

use crate::config::GeneratorConfig;

/// Default generator executable name
pub const GENERATOR_EXECUTABLE: &str = "jr";

/// Output template that emits key and value back to back, so keyed runs
/// produce the alternating key/record stream the pairer expects
pub const KEYED_OUTPUT_TEMPLATE: &str = "{{.K}}{{.V}}";

/// Full path to the generator executable for this config
pub fn executable(config: &GeneratorConfig) -> String {
    match config.executable_path.as_deref().filter(|p| !p.is_empty()) {
        Some(dir) => format!("{}/{GENERATOR_EXECUTABLE}", dir.trim_end_matches('/')),
        None => GENERATOR_EXECUTABLE.to_string(),
    }
}

/// Build the generator argument list for one invocation.
///
/// `run <template>` or `run --embedded <body>`, with `--key` and
/// `--outputTemplate` added when a key field is configured, and `-n` for
/// the object count.
pub fn build_args(config: &GeneratorConfig) -> Vec<String> {
    let mut args = vec!["run".to_string()];

    if config.is_embedded() {
        args.push("--embedded".to_string());
        args.push(config.embedded_template.clone().unwrap_or_default());
    } else {
        args.push(config.template.clone().unwrap_or_default());
    }

    if let Some(field) = config.key_field.as_deref().filter(|f| !f.is_empty()) {
        let interval = config.key_interval_max();
        args.push("--key".to_string());
        args.push(format!("{{{{key \"{{\\\"{field}\\\":\" {interval}}}}}"));
        args.push("--outputTemplate".to_string());
        args.push(KEYED_OUTPUT_TEMPLATE.to_string());
    }

    args.push("-n".to_string());
    args.push(config.objects.to_string());

    args
}
