// Copyright 2026, Battle Realms
// For licensing, see https://github.com/battle-realms/realms-deploy-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type RealmsDeployResult = Result<(), RealmsDeployError>;

#[derive(Debug)]
pub struct RealmsDeployError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl RealmsDeployError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for RealmsDeployError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for RealmsDeployError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for RealmsDeployError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<realms_tools::Error> for RealmsDeployError {
    fn from(err: realms_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<realms_tools::core::config::ConfigError> for RealmsDeployError {
    fn from(err: realms_tools::core::config::ConfigError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<realms_tools::core::network::NetworkError> for RealmsDeployError {
    fn from(err: realms_tools::core::network::NetworkError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<realms_tools::core::artifact::ArtifactError> for RealmsDeployError {
    fn from(err: realms_tools::core::artifact::ArtifactError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<realms_tools::core::deployment::DeploymentError> for RealmsDeployError {
    fn from(err: realms_tools::core::deployment::DeploymentError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
