use crate::error::Error;

/// The two kinds of archive the store accepts, classified by filename
/// suffix alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    /// `*-debuginfo-*.rpm` — extracted debug-symbol trees.
    DebugInfo,
    /// `*.src.rpm` — extracted source trees.
    SourceRpm,
}

impl PackageKind {
    /// Classify an archive filename.
    ///
    /// The two patterns are structurally exclusive: a `.src.rpm` is always
    /// a source package, even when its stem contains `-debuginfo-`.
    pub fn classify(file_name: &str) -> Result<Self, Error> {
        if file_name.ends_with(".src.rpm") {
            Ok(PackageKind::SourceRpm)
        } else if file_name.ends_with(".rpm") && file_name.contains("-debuginfo-") {
            Ok(PackageKind::DebugInfo)
        } else {
            Err(Error::UnrecognizedPackage(file_name.to_string()))
        }
    }

    /// The filename suffix stripped to form the base identifier.
    pub fn archive_suffix(self) -> &'static str {
        match self {
            PackageKind::DebugInfo => ".rpm",
            PackageKind::SourceRpm => ".src.rpm",
        }
    }

    /// Subtree of the extracted archive that is kept in the store.
    /// `None` keeps the whole extracted tree.
    pub fn payload_subpath(self) -> Option<&'static str> {
        match self {
            PackageKind::DebugInfo => Some("usr/src/debug"),
            PackageKind::SourceRpm => None,
        }
    }

    /// Base identifier: the filename with the kind-specific suffix
    /// stripped. Doubles as the installed-package directory name.
    pub fn base_name(self, file_name: &str) -> String {
        file_name
            .strip_suffix(self.archive_suffix())
            .unwrap_or(file_name)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_debuginfo() {
        let kind = PackageKind::classify("httpd-debuginfo-1.0.rpm").unwrap();
        assert_eq!(kind, PackageKind::DebugInfo);
        assert_eq!(kind.payload_subpath(), Some("usr/src/debug"));
        assert_eq!(kind.base_name("httpd-debuginfo-1.0.rpm"), "httpd-debuginfo-1.0");
    }

    #[test]
    fn test_classify_source_rpm() {
        let kind = PackageKind::classify("httpd-1.0.src.rpm").unwrap();
        assert_eq!(kind, PackageKind::SourceRpm);
        assert_eq!(kind.payload_subpath(), None);
        assert_eq!(kind.base_name("httpd-1.0.src.rpm"), "httpd-1.0");
    }

    #[test]
    fn test_classify_rejects_other_names() {
        for name in ["httpd-1.0.rpm", "httpd-debuginfo-1.0.tar.gz", "debuginfo.rpm", ""] {
            let err = PackageKind::classify(name).unwrap_err();
            assert!(
                err.to_string().contains("is not .src.rpm or -debuginfo-"),
                "unexpected error for '{}': {}",
                name,
                err
            );
        }
    }

    #[test]
    fn test_src_rpm_wins_over_debuginfo_stem() {
        // The overlap case: the suffix decides, not check order.
        let kind = PackageKind::classify("httpd-debuginfo-1.0.src.rpm").unwrap();
        assert_eq!(kind, PackageKind::SourceRpm);
        assert_eq!(
            kind.base_name("httpd-debuginfo-1.0.src.rpm"),
            "httpd-debuginfo-1.0"
        );
    }
}
