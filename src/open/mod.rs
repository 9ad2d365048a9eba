//! Resources served by the Open family at `https://apis.e-conomic.com`.
//!
//! Each product API lives under its own segment and carries its own version,
//! so every URL starts with `{segment}{version}/`. Resources expose
//! `set_version` to target a different version than the built-in default.

/// Segment plus version that prefixes every URL of one Open product API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionedPath {
    segment: &'static str,
    default_version: &'static str,
    version: Option<String>,
}

impl VersionedPath {
    pub const fn new(segment: &'static str, default_version: &'static str) -> Self {
        Self {
            segment,
            default_version,
            version: None,
        }
    }

    pub fn segment(&self) -> &'static str {
        self.segment
    }

    /// Effective version: the override when set and non-empty, the default
    /// otherwise.
    pub fn version(&self) -> &str {
        self.version
            .as_deref()
            .filter(|version| !version.is_empty())
            .unwrap_or(self.default_version)
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
    }

    /// Renders `{segment}{version}/{path}`.
    pub fn join(&self, path: &str) -> String {
        format!("{}{}/{}", self.segment, self.version(), path)
    }
}

/// Implements construction and version handling shared by every Open resource.
macro_rules! open_resource {
    ($name:ident, $segment:literal, $version:literal) => {
        impl $name {
            pub const SEGMENT: &'static str = $segment;
            pub const DEFAULT_VERSION: &'static str = $version;

            /// Creates the resource with its own Open client.
            pub fn new(credential: &$crate::Credential) -> Result<Self, $crate::ClientError> {
                Ok(Self::from_client($crate::ApiClient::open(credential)?))
            }

            /// Wraps an already configured client.
            pub fn from_client(api: $crate::ApiClient) -> Self {
                Self {
                    api,
                    path: $crate::open::VersionedPath::new(Self::SEGMENT, Self::DEFAULT_VERSION),
                }
            }

            pub fn client(&self) -> &$crate::ApiClient {
                &self.api
            }

            /// Version used by every later call on this instance.
            pub fn version(&self) -> &str {
                self.path.version()
            }

            pub fn set_version(&mut self, version: impl Into<String>) -> &mut Self {
                self.path.set_version(version);
                self
            }
        }
    };
}

pub mod employee_groups;
pub mod employees;
pub mod product_groups;
pub mod project_groups;
pub mod projects;
pub mod subscriptions;
pub mod supplier_groups;

pub use employee_groups::EmployeeGroups;
pub use employees::Employees;
pub use product_groups::ProductGroups;
pub use project_groups::ProjectGroups;
pub use projects::Projects;
pub use subscriptions::Subscriptions;
pub use supplier_groups::SupplierGroups;

#[cfg(test)]
mod tests {
    use super::VersionedPath;

    #[test]
    fn default_version_until_overridden() {
        let mut path = VersionedPath::new("api/", "v22.0.0");
        assert_eq!(path.join("projects"), "api/v22.0.0/projects");

        path.set_version("v23.1.0");
        assert_eq!(path.version(), "v23.1.0");
        assert_eq!(path.join("projects/paged"), "api/v23.1.0/projects/paged");
    }

    #[test]
    fn empty_override_falls_back_to_default() {
        let mut path = VersionedPath::new("api/", "v22.0.0");
        path.set_version("");
        assert_eq!(path.version(), "v22.0.0");
        assert_eq!(path.join("projectgroups"), "api/v22.0.0/projectgroups");
    }
}
