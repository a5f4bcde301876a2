//! Enumerated values produced by inference

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// The PHP framework a project is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhpFramework {
    /// No recognized framework; plain PHP.
    #[default]
    None,
    Laravel,
    #[serde(rename = "thinkphp")]
    ThinkPhp,
    #[serde(rename = "codeigniter")]
    CodeIgniter,
}

impl PhpFramework {
    /// Metadata spelling of this framework.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Laravel => "laravel",
            Self::ThinkPhp => "thinkphp",
            Self::CodeIgniter => "codeigniter",
        }
    }
}

impl FromStr for PhpFramework {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "laravel" => Ok(Self::Laravel),
            "thinkphp" => Ok(Self::ThinkPhp),
            "codeigniter" => Ok(Self::CodeIgniter),
            _ => Err(Error::UnknownFramework {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PhpFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A specific application that needs custom build or runtime handling,
/// such as its own nginx configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum PhpApplication {
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "acg-faka")]
    AcgFaka,
}

impl PhpApplication {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::AcgFaka => "acg-faka",
        }
    }
}

impl fmt::Display for PhpApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which manifest the application classification was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhpProperty {
    /// No manifest was available.
    #[default]
    None,
    /// Classified from `composer.json`.
    Composer,
}

impl PhpProperty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Composer => "composer",
        }
    }
}

impl fmt::Display for PhpProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
