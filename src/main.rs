//! 지역 제한 가입 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 설정은 시작 시 한 번 읽어 각 컴포넌트 생성자로 전달합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use geo_signup_backend::config::{AppConfig, CorsConfig};
use geo_signup_backend::db::Database;
use geo_signup_backend::repositories::users::user_repo::MongoUserRepository;
use geo_signup_backend::routes::configure_all_routes;
use geo_signup_backend::services::auth::JwtTokenService;
use geo_signup_backend::services::location::OpenWeatherLocationService;
use geo_signup_backend::services::users::{ProfileService, UserRegistrationService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_file = load_env_file();
    init_logging();
    report_env_file(&env_file);

    info!("🚀 지역 제한 가입 서비스 시작중...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        io::Error::other(e)
    })?;

    info!("실행 환경: {:?}", config.environment);

    let (registration, profiles) = initialize_services(&config).await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(&config, registration, profiles).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    config: &AppConfig,
    registration: web::Data<UserRegistrationService>,
    profiles: web::Data<ProfileService>,
) -> io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Signup: POST http://{}/user/signup", bind_address);

    let cors_config = config.cors.clone();

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors(&cors_config);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(registration.clone())
            .app_data(profiles.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(config.server.workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// # 개발 환경
/// PROFILE=dev cargo run
///
/// # 운영 환경
/// PROFILE=prod cargo run
/// ```
fn load_env_file() -> EnvFile {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let (file_name, result) = match profile.as_str() {
        "prod" => (".env.prod", dotenv::from_filename(".env.prod").map(|_| ())),
        "dev" => (".env.dev", dotenv::from_filename(".env.dev").map(|_| ())),
        // 기본 .env 파일 로드
        _ => (".env", dotenv().map(|_| ())),
    };

    EnvFile {
        profile,
        file_name,
        error: result.err().map(|e| e.to_string()),
    }
}

/// `.env` 로드 결과
///
/// `RUST_LOG`도 이 파일에서 올 수 있으므로 로거 초기화 뒤에 기록합니다.
struct EnvFile {
    profile: String,
    file_name: &'static str,
    error: Option<String>,
}

fn report_env_file(env_file: &EnvFile) {
    info!("Current profile: {}", env_file.profile);

    match &env_file.error {
        None => info!("{} 파일 로드 됨", env_file.file_name),
        Some(e) => error!("{} 파일 로드 실패: {}", env_file.file_name, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
///
/// ```bash
/// # 특정 모듈만 debug
/// RUST_LOG=geo_signup_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 저장소와 외부 조회 클라이언트를 만들고 서비스를 조립합니다
///
/// 연결 또는 인덱스 생성에 실패하면 서버를 띄우지 않습니다.
async fn initialize_services(
    config: &AppConfig,
) -> io::Result<(web::Data<UserRegistrationService>, web::Data<ProfileService>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new(&config.database).await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        io::Error::other(e)
    })?;

    info!("✅ MongoDB 연결 성공: {}", database.database_name());

    let repository = MongoUserRepository::new(database, config.database.timeout);
    repository.create_indexes().await.map_err(|e| {
        error!("인덱스 생성 실패: {}", e);
        io::Error::other(e)
    })?;

    let store = Arc::new(repository);

    let lookup = OpenWeatherLocationService::new(&config.location_api).map_err(|e| {
        error!("위치 조회 클라이언트 생성 실패: {}", e);
        io::Error::other(e)
    })?;

    let signer = JwtTokenService::new(&config.jwt);

    let registration = UserRegistrationService::new(
        store.clone(),
        Arc::new(lookup),
        Arc::new(signer),
        &config.region,
    );
    let profiles = ProfileService::new(store);

    Ok((web::Data::new(registration), web::Data::new(profiles)))
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`에 나열된 Origin만 허용합니다.
fn configure_cors(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
