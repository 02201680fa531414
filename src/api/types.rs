use serde::Serialize;

use crate::db::{Account, RankedPerformance};
use crate::entities::{performances, stagings};
use crate::services::AccountInfo;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Account as exposed over the API. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct AccountDto {
    pub email: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        Self {
            email: account.email,
            name: account.name,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

impl From<AccountInfo> for AccountDto {
    fn from(info: AccountInfo) -> Self {
        Self {
            email: info.email,
            name: info.name,
            created_at: info.created_at,
            updated_at: info.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConfirmCodeResponse {
    pub verified: bool,
}

#[derive(Debug, Serialize)]
pub struct RankingEntryDto {
    pub id: String,
    pub name: String,
    pub genre: String,
    pub reservation_count: i64,
}

impl From<RankedPerformance> for RankingEntryDto {
    fn from(row: RankedPerformance) -> Self {
        Self {
            id: row.id,
            name: row.name,
            genre: row.genre,
            reservation_count: row.reservation_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PerformanceDto {
    pub id: String,
    pub name: String,
    pub genre: String,
    pub created_at: String,
}

impl From<performances::Model> for PerformanceDto {
    fn from(model: performances::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            genre: model.genre,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StagingDto {
    pub id: i64,
    pub starts_at: String,
}

impl From<stagings::Model> for StagingDto {
    fn from(model: stagings::Model) -> Self {
        Self {
            id: model.id,
            starts_at: model.starts_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PerformanceDetailDto {
    pub performance: PerformanceDto,
    pub stagings: Vec<StagingDto>,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub database: String,
}
