//! Lookup tables of the project file format.

use cbexport_graph::{Target, TargetKind};

/// Compiler token for an upstream compiler identifier; `gcc` by default.
pub fn compiler_token(compiler_id: Option<&str>) -> &'static str {
    match compiler_id {
        Some("MSVC") => "msvc8",
        Some("Borland") => "bcc",
        Some("SDCC") => "sdcc",
        Some("Intel") => "icc",
        Some("Watcom") => "ow",
        _ => "gcc",
    }
}

/// Numeric target type of the project file.
pub fn target_type_code(target: &Target) -> u8 {
    match target.kind {
        TargetKind::Executable if target.gui => 0,
        TargetKind::Executable => 1,
        TargetKind::StaticLibrary | TargetKind::ObjectLibrary => 2,
        TargetKind::SharedLibrary | TargetKind::ModuleLibrary => 3,
        TargetKind::Utility | TargetKind::Other => 4,
    }
}

const DASHBOARD_TARGETS: &[&str] = &["Nightly", "Continuous", "Experimental"];

/// Utility targets are listed unless they are dashboard sub-targets such
/// as `NightlyMemCheck`. The dashboard targets themselves are kept.
pub fn is_listed_utility(name: &str) -> bool {
    !DASHBOARD_TARGETS
        .iter()
        .any(|prefix| name.starts_with(prefix) && name != *prefix)
}

/// Whether a target gets a block in the project file.
pub fn is_emitted(target: &Target) -> bool {
    match target.kind {
        TargetKind::Utility => is_listed_utility(&target.name),
        kind => kind.is_buildable(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiler_tokens() {
        assert_eq!(compiler_token(Some("MSVC")), "msvc8");
        assert_eq!(compiler_token(Some("Borland")), "bcc");
        assert_eq!(compiler_token(Some("SDCC")), "sdcc");
        assert_eq!(compiler_token(Some("Intel")), "icc");
        assert_eq!(compiler_token(Some("Watcom")), "ow");
        assert_eq!(compiler_token(Some("GNU")), "gcc");
        assert_eq!(compiler_token(Some("Clang")), "gcc");
        assert_eq!(compiler_token(None), "gcc");
    }

    #[test]
    fn test_target_type_codes() {
        let mut exe = Target::new("app", TargetKind::Executable, "/b");
        assert_eq!(target_type_code(&exe), 1);
        exe.gui = true;
        assert_eq!(target_type_code(&exe), 0);

        let code = |kind| target_type_code(&Target::new("t", kind, "/b"));
        assert_eq!(code(TargetKind::StaticLibrary), 2);
        assert_eq!(code(TargetKind::ObjectLibrary), 2);
        assert_eq!(code(TargetKind::SharedLibrary), 3);
        assert_eq!(code(TargetKind::ModuleLibrary), 3);
        assert_eq!(code(TargetKind::Utility), 4);
        assert_eq!(code(TargetKind::Other), 4);
    }

    #[test]
    fn test_listed_utilities() {
        assert!(is_listed_utility("Nightly"));
        assert!(is_listed_utility("Continuous"));
        assert!(is_listed_utility("Experimental"));
        assert!(is_listed_utility("docs"));
        assert!(is_listed_utility("install"));
        assert!(!is_listed_utility("NightlyMemCheck"));
        assert!(!is_listed_utility("ContinuousBuild"));
        assert!(!is_listed_utility("ExperimentalTest"));
    }

    #[test]
    fn test_is_emitted() {
        assert!(is_emitted(&Target::new("lib", TargetKind::ObjectLibrary, "/b")));
        assert!(is_emitted(&Target::new("docs", TargetKind::Utility, "/b")));
        assert!(!is_emitted(&Target::new("NightlyUpdate", TargetKind::Utility, "/b")));
        assert!(!is_emitted(&Target::new("iface", TargetKind::Other, "/b")));
    }
}
