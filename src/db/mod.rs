//! Database Connection Management Module
//!
//! MongoDB 연결 관리를 담당하는 모듈입니다.
//! 연결 설정은 [`DatabaseConfig`]로 주입받으며, 생성 시 `ping`으로 연결을 검증합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use geo_signup_backend::db::Database;
//!
//! let database = Database::new(&config.database).await?;
//! let users = database.get_database().collection::<User>("users");
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;
use crate::config::DatabaseConfig;

/// MongoDB 데이터베이스 연결 래퍼
///
/// 리포지토리 계층에서 컬렉션에 접근하기 위한 기본 인터페이스를 제공합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 연결과 서버 선택에 설정된 제한 시간을 적용하고,
    /// 연결 상태를 검증한 후 Database 인스턴스를 반환합니다.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        // MongoDB 클라이언트 옵션 파싱
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("geo_signup".to_string());
        client_options.connect_timeout = Some(config.timeout);
        client_options.server_selection_timeout = Some(config.timeout);

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(&config.name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.name);

        Ok(Self {
            client,
            database_name: config.name.clone(),
        })
    }

    /// 실제 MongoDB 작업을 위한 `mongodb::Database` 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
