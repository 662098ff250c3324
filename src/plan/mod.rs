//! Build parameter resolution
//!
//! Turns the loosely-specified build options from the command line into a
//! fully resolved [`BuildPlan`]: exactly one project reference, a
//! non-empty scheme, and a concrete SDK. Missing references fall back to
//! a directory scan; a missing scheme is derived from the selected
//! reference's base name.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::project::{locate, ProjectReference};

/// Default build configuration
pub const DEFAULT_CONFIGURATION: &str = "Debug";

/// Default target architecture
pub const DEFAULT_ARCH: &str = "x86_64";

/// Errors produced while resolving a build plan
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No reference was supplied and the directory scan found nothing
    #[error("no .xcworkspace or .xcodeproj found in {}", directory.display())]
    NoProjectFound { directory: PathBuf },

    /// A reference was selected but no scheme name could be derived from it
    #[error("no scheme supplied and none could be derived from {}", reference.display())]
    SchemeUnderivable { reference: PathBuf },

    /// The directory scan itself failed
    #[error("failed to scan {}: {source}", directory.display())]
    Scan {
        directory: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Returns a user-facing error message with troubleshooting hints
    pub fn help_message(&self) -> String {
        match self {
            ConfigError::NoProjectFound { directory } => {
                format!(
                    "Error: No usable workspace or project\nSearched: {}\n\n\
                    Help: Pass --xcworkspace or --xcodeproj explicitly, or run\n\
                    from the directory containing the .xcworkspace/.xcodeproj\n\
                    bundle. For trace-only runs, --app together with --scheme\n\
                    avoids project resolution entirely.",
                    directory.display()
                )
            }
            ConfigError::SchemeUnderivable { reference } => {
                format!(
                    "Error: Cannot derive a scheme name\nReference: {}\n\n\
                    Help: Pass --scheme explicitly.",
                    reference.display()
                )
            }
            ConfigError::Scan { directory, source } => {
                format!(
                    "Error: Cannot scan directory\nDirectory: {}\n\n\
                    Help: Check that the directory exists and is readable.\n\
                    Details: {}",
                    directory.display(),
                    source
                )
            }
        }
    }
}

/// Which kind of device the build targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetDevice {
    #[default]
    Simulator,
    Real,
}

/// SDK selected for the build, derived from the target device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sdk {
    Iphoneos,
    Iphonesimulator,
}

impl Sdk {
    pub fn for_device(device: TargetDevice) -> Self {
        match device {
            TargetDevice::Real => Sdk::Iphoneos,
            TargetDevice::Simulator => Sdk::Iphonesimulator,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sdk::Iphoneos => "iphoneos",
            Sdk::Iphonesimulator => "iphonesimulator",
        }
    }

    /// Name of the per-SDK directory under `Build/Products`.
    ///
    /// Device builds land under `Release-iphoneos` regardless of the
    /// configuration; simulator builds under
    /// `<configuration>-iphonesimulator`.
    pub fn product_dir(&self, configuration: &str) -> String {
        match self {
            Sdk::Iphoneos => "Release-iphoneos".to_string(),
            Sdk::Iphonesimulator => format!("{configuration}-iphonesimulator"),
        }
    }
}

impl fmt::Display for Sdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build options as supplied on the command line, before resolution
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub workspace: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub scheme: Option<String>,
    pub configuration: String,
    pub arch: String,
    pub device: TargetDevice,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            workspace: None,
            project: None,
            scheme: None,
            configuration: DEFAULT_CONFIGURATION.to_string(),
            arch: DEFAULT_ARCH.to_string(),
            device: TargetDevice::default(),
        }
    }
}

/// Fully resolved parameters for one build invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub reference: ProjectReference,
    pub scheme: String,
    pub configuration: String,
    pub sdk: Sdk,
    pub arch: String,
}

/// Resolves `options` into a [`BuildPlan`], scanning `directory` for a
/// workspace or project when neither was supplied explicitly.
pub fn resolve(options: &BuildOptions, directory: &Path) -> Result<BuildPlan, ConfigError> {
    let reference = if options.workspace.is_none() && options.project.is_none() {
        let discovered = locate(directory).map_err(|source| ConfigError::Scan {
            directory: directory.to_path_buf(),
            source,
        })?;
        ProjectReference::select(discovered.workspace, discovered.project)
    } else {
        ProjectReference::select(options.workspace.clone(), options.project.clone())
    }
    .ok_or_else(|| ConfigError::NoProjectFound {
        directory: directory.to_path_buf(),
    })?;

    let sdk = Sdk::for_device(options.device);

    let scheme = match &options.scheme {
        Some(scheme) => scheme.clone(),
        None => reference
            .base_name()
            .ok_or_else(|| ConfigError::SchemeUnderivable {
                reference: reference.path().to_path_buf(),
            })?,
    };

    debug!(
        kind = reference.kind(),
        reference = %reference.path().display(),
        scheme = %scheme,
        configuration = %options.configuration,
        sdk = %sdk,
        arch = %options.arch,
        "Resolved build plan"
    );

    Ok(BuildPlan {
        reference,
        scheme,
        configuration: options.configuration.clone(),
        sdk,
        arch: options.arch.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use yare::parameterized;

    #[test]
    fn test_explicit_workspace_skips_the_scan() {
        // The directory does not exist; an attempted scan would fail.
        let options = BuildOptions {
            workspace: Some(PathBuf::from("/repo/MyApp.xcworkspace")),
            ..Default::default()
        };

        let plan = resolve(&options, Path::new("/nonexistent/dir")).unwrap();
        assert_eq!(
            plan.reference,
            ProjectReference::Workspace(PathBuf::from("/repo/MyApp.xcworkspace"))
        );
        assert_eq!(plan.scheme, "MyApp");
    }

    #[test]
    fn test_workspace_wins_when_both_supplied() {
        let options = BuildOptions {
            workspace: Some(PathBuf::from("A.xcworkspace")),
            project: Some(PathBuf::from("B.xcodeproj")),
            ..Default::default()
        };

        let plan = resolve(&options, Path::new("/nonexistent/dir")).unwrap();
        assert_eq!(
            plan.reference,
            ProjectReference::Workspace(PathBuf::from("A.xcworkspace"))
        );
    }

    #[test]
    fn test_discovery_fallback_selects_workspace() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("MyApp.xcworkspace")).unwrap();
        fs::create_dir(dir.path().join("MyApp.xcodeproj")).unwrap();

        let plan = resolve(&BuildOptions::default(), dir.path()).unwrap();
        assert_eq!(
            plan.reference,
            ProjectReference::Workspace(dir.path().join("MyApp.xcworkspace"))
        );
        assert_eq!(plan.scheme, "MyApp");
    }

    #[test]
    fn test_empty_directory_fails() {
        let dir = TempDir::new().unwrap();
        let err = resolve(&BuildOptions::default(), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::NoProjectFound { .. }));
    }

    #[test]
    fn test_explicit_scheme_is_never_overwritten() {
        let options = BuildOptions {
            workspace: Some(PathBuf::from("MyApp.xcworkspace")),
            scheme: Some("CustomScheme".to_string()),
            ..Default::default()
        };

        let plan = resolve(&options, Path::new("/nonexistent/dir")).unwrap();
        assert_eq!(plan.scheme, "CustomScheme");
    }

    #[test]
    fn test_real_device_selects_iphoneos() {
        let options = BuildOptions {
            project: Some(PathBuf::from("MyApp.xcodeproj")),
            device: TargetDevice::Real,
            ..Default::default()
        };

        let plan = resolve(&options, Path::new("/nonexistent/dir")).unwrap();
        assert_eq!(plan.sdk, Sdk::Iphoneos);
    }

    #[test]
    fn test_defaults_pass_through() {
        let options = BuildOptions {
            project: Some(PathBuf::from("MyApp.xcodeproj")),
            ..Default::default()
        };

        let plan = resolve(&options, Path::new("/nonexistent/dir")).unwrap();
        assert_eq!(plan.configuration, "Debug");
        assert_eq!(plan.arch, "x86_64");
        assert_eq!(plan.sdk, Sdk::Iphonesimulator);
    }

    #[parameterized(
        device_debug = { Sdk::Iphoneos, "Debug", "Release-iphoneos" },
        device_release = { Sdk::Iphoneos, "Release", "Release-iphoneos" },
        simulator_debug = { Sdk::Iphonesimulator, "Debug", "Debug-iphonesimulator" },
        simulator_release = { Sdk::Iphonesimulator, "Release", "Release-iphonesimulator" },
    )]
    fn test_product_dir(sdk: Sdk, configuration: &str, expected: &str) {
        assert_eq!(sdk.product_dir(configuration), expected);
    }

    #[test]
    fn test_sdk_for_device() {
        assert_eq!(Sdk::for_device(TargetDevice::Real), Sdk::Iphoneos);
        assert_eq!(Sdk::for_device(TargetDevice::Simulator), Sdk::Iphonesimulator);
    }

    #[test]
    fn test_config_error_help_messages() {
        let err = ConfigError::NoProjectFound {
            directory: PathBuf::from("/repo"),
        };
        let help = err.help_message();
        assert!(help.contains("/repo"));
        assert!(help.contains("--xcworkspace"));

        let err = ConfigError::SchemeUnderivable {
            reference: PathBuf::from(".."),
        };
        assert!(err.help_message().contains("--scheme"));
    }
}
