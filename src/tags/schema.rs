//! Tag schema definitions.
//!
//! Every record sent by a logger carries these tags. They deserialize from the
//! `[tags]` table of the config file; absent keys fall back to empty values and
//! are reported by validation rather than by serde.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cloud provider hosting the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    Aws,
    Gcp,
    Azure,
}

impl CloudProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "aws",
            CloudProvider::Gcp => "gcp",
            CloudProvider::Azure => "azure",
        }
    }
}

/// Physical datacenter hosting the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Datacenter {
    Ctmm1,
    Ctsp,
}

impl Datacenter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Datacenter::Ctmm1 => "ctmm1",
            Datacenter::Ctsp => "ctsp",
        }
    }
}

/// Platform group ("condomínio") that owns the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Condominio {
    Devops,
    Tradops,
    Paas,
}

impl Condominio {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condominio::Devops => "devops",
            Condominio::Tradops => "tradops",
            Condominio::Paas => "paas",
        }
    }

    /// Groups whose applications must always declare a repository URL.
    pub fn requires_repo_url(&self) -> bool {
        matches!(self, Condominio::Devops | Condominio::Tradops)
    }
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Hom,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Hom => "hom",
            Environment::Prod => "prod",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(CloudProvider, Datacenter, Condominio, Environment);

/// Metadata attached to every log record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Tags {
    /// Project acronym (e.g. "QJ6").
    pub sigla: String,

    /// Cloud provider; mutually exclusive with `datacenter`.
    pub cloud_provider: Option<CloudProvider>,

    /// Physical datacenter; mutually exclusive with `cloud_provider`.
    pub datacenter: Option<Datacenter>,

    pub condominio: Option<Condominio>,

    /// Cloud account identifier (e.g. "123456789012").
    pub account_id: String,

    pub environment: Option<Environment>,

    /// Application version (e.g. "1.0.0").
    pub version: String,

    /// Service name, conventionally `<SIGLA>-<APP-NAME>`.
    pub service: String,

    pub produto: String,

    pub jornada: String,

    pub subjornada: Option<String>,

    #[serde(rename = "correlationId", alias = "correlation_id")]
    pub correlation_id: String,

    /// Required for AWS and for the devops/tradops groups.
    pub repo_url: Option<String>,

    pub sigla_app: Option<String>,

    /// Log source reported to the remote intake (usually the technology).
    pub ddsource: Option<String>,

    pub hostname: Option<String>,
}

impl Tags {
    /// Present tags as `(key, value)` pairs in declaration order.
    ///
    /// Absent and empty values are skipped. The order is fixed so the remote
    /// tag string is identical for identical tags.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let pairs: [(&'static str, Option<&str>); 16] = [
            ("sigla", Some(self.sigla.as_str())),
            ("cloud_provider", self.cloud_provider.as_ref().map(CloudProvider::as_str)),
            ("datacenter", self.datacenter.as_ref().map(Datacenter::as_str)),
            ("condominio", self.condominio.as_ref().map(Condominio::as_str)),
            ("account_id", Some(self.account_id.as_str())),
            ("environment", self.environment.as_ref().map(Environment::as_str)),
            ("version", Some(self.version.as_str())),
            ("service", Some(self.service.as_str())),
            ("produto", Some(self.produto.as_str())),
            ("jornada", Some(self.jornada.as_str())),
            ("subjornada", self.subjornada.as_deref()),
            ("correlationId", Some(self.correlation_id.as_str())),
            ("repo_url", self.repo_url.as_deref()),
            ("sigla_app", self.sigla_app.as_deref()),
            ("ddsource", self.ddsource.as_deref()),
            ("hostname", self.hostname.as_deref()),
        ];

        pairs
            .into_iter()
            .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| (key, v)))
            .collect()
    }

    /// Comma separated `key:value` list sent as the remote `ddtags` field.
    pub fn to_tag_string(&self) -> String {
        self.entries()
            .iter()
            .map(|(k, v)| format!("{k}:{v}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}
