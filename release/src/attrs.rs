//! Standardized os-release attribute names
//!
//! The FreeDesktop.Org os-release specification defines a fixed set of
//! attribute names. Every one of them can be queried on an [`OsRelease`]
//! whether or not the file on this system sets it; unset names read as
//! `None`.
//!
//! Names are matched case-insensitively. The canonical key is the ASCII
//! lowercase form, see [`fold_case`].
//!
//! [`OsRelease`]: crate::OsRelease

/// Fold an attribute name to its canonical lookup key.
///
/// Always an ASCII fold so matching does not depend on the host locale.
pub fn fold_case(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// Whether `name` is one of the standardized attribute names
pub fn is_standard(name: &str) -> bool {
    STANDARD_ATTRS
        .iter()
        .any(|attr| attr.eq_ignore_ascii_case(name))
}

macro_rules! standard_attrs {
    ($( $(#[$doc:meta])* $method:ident => $key:literal ),* $(,)?) => {
        /// Standardized attribute names, in os-release documentation order
        pub const STANDARD_ATTRS: &[&str] = &[$($key),*];

        impl crate::release::OsRelease {
            $(
                $(#[$doc])*
                pub fn $method(&self) -> Option<&str> {
                    self.get($key)
                }
            )*
        }
    };
}

standard_attrs! {
    /// Operating system name without version (`NAME`)
    name => "NAME",
    /// Lower-case operating system identifier (`ID`)
    id => "ID",
    /// Space-separated identifiers of closely related systems (`ID_LIKE`)
    id_like => "ID_LIKE",
    /// Presentable operating system name (`PRETTY_NAME`)
    pretty_name => "PRETTY_NAME",
    /// CPE name of the operating system (`CPE_NAME`)
    cpe_name => "CPE_NAME",
    /// Presentable variant or edition name (`VARIANT`)
    variant => "VARIANT",
    /// Lower-case variant identifier (`VARIANT_ID`)
    variant_id => "VARIANT_ID",
    /// Version string, possibly with codename (`VERSION`)
    version => "VERSION",
    /// Lower-case version identifier (`VERSION_ID`)
    version_id => "VERSION_ID",
    /// Release codename (`VERSION_CODENAME`)
    version_codename => "VERSION_CODENAME",
    /// Build identifier of the system image (`BUILD_ID`)
    build_id => "BUILD_ID",
    /// Image identifier (`IMAGE_ID`)
    image_id => "IMAGE_ID",
    /// Image version (`IMAGE_VERSION`)
    image_version => "IMAGE_VERSION",
    /// Operating system homepage (`HOME_URL`)
    home_url => "HOME_URL",
    /// Main documentation page (`DOCUMENTATION_URL`)
    documentation_url => "DOCUMENTATION_URL",
    /// Main support page (`SUPPORT_URL`)
    support_url => "SUPPORT_URL",
    /// Bug reporting page (`BUG_REPORT_URL`)
    bug_report_url => "BUG_REPORT_URL",
    /// Privacy policy page (`PRIVACY_POLICY_URL`)
    privacy_policy_url => "PRIVACY_POLICY_URL",
    /// Icon name for the operating system logo (`LOGO`)
    logo => "LOGO",
    /// ANSI escape color suggestion for the name (`ANSI_COLOR`)
    ansi_color => "ANSI_COLOR",
    /// Fallback hostname (`DEFAULT_HOSTNAME`)
    default_hostname => "DEFAULT_HOSTNAME",
    /// Extension image compatibility level (`SYSEXT_LEVEL`)
    sysext_level => "SYSEXT_LEVEL",
}
