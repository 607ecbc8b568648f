//! JWT 服务单元测试
//!
//! 测试令牌签发与验证

use flix_service::auth::jwt::{JwtService, TokenError};
use flix_service::config::{
    AppConfig, CorsConfig, DatabaseConfig, LoggingConfig, SecurityConfig, ServerConfig,
};
use secrecy::Secret;
use uuid::Uuid;

/// 创建测试配置
fn create_test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            addr: "127.0.0.1:3000".to_string(),
            graceful_shutdown_timeout_secs: 30,
        },
        database: DatabaseConfig {
            url: Secret::new("postgresql://localhost/test".to_string()),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 30,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            format: "json".to_string(),
        },
        security: SecurityConfig {
            jwt_secret: Secret::new("test_secret_key_32_characters_long!".to_string()),
            token_exp_secs: 3600,
            password_min_length: 8,
            password_require_uppercase: false,
            password_require_digit: false,
        },
        cors: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    }
}

#[test]
fn test_jwt_service_creation() {
    let config = create_test_config();
    let service = JwtService::from_config(&config);

    assert!(service.is_ok(), "JWT service should be created successfully");

    // 通过签发令牌验证配置被正确应用
    let service = service.unwrap();
    let user_id = Uuid::new_v4();
    let token = service
        .issue(&user_id, "testuser")
        .expect("Token issuance should succeed");
    let claims = service.verify(&token).unwrap();
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_jwt_service_secret_too_short() {
    let mut config = create_test_config();
    config.security.jwt_secret = Secret::new("short".to_string());

    let result = JwtService::from_config(&config);
    assert!(result.is_err(), "Short secret should fail");
}

#[test]
fn test_issued_token_resolves_to_same_identity() {
    let config = create_test_config();
    let service = JwtService::from_config(&config).unwrap();
    let user_id = Uuid::new_v4();

    let token = service.issue(&user_id, "alice").unwrap();
    let claims = service.verify(&token).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.username, "alice");
}

#[test]
fn test_token_from_other_secret_fails_signature_check() {
    let service = JwtService::from_config(&create_test_config()).unwrap();

    let mut other_config = create_test_config();
    other_config.security.jwt_secret =
        Secret::new("completely_different_secret_32_chars!".to_string());
    let other_service = JwtService::from_config(&other_config).unwrap();

    let token = other_service.issue(&Uuid::new_v4(), "alice").unwrap();
    assert_eq!(service.verify(&token), Err(TokenError::InvalidSignature));
}

#[test]
fn test_malformed_token_fails_parse() {
    let service = JwtService::from_config(&create_test_config()).unwrap();

    assert_eq!(service.verify("garbage"), Err(TokenError::Malformed));
    assert_eq!(
        service.verify("aaa.bbb.ccc"),
        Err(TokenError::Malformed)
    );
}

#[test]
fn test_token_lifetime_follows_config() {
    let mut config = create_test_config();
    config.security.token_exp_secs = 60;
    let service = JwtService::from_config(&config).unwrap();

    let token = service.issue(&Uuid::new_v4(), "alice").unwrap();
    let claims = service.verify(&token).unwrap();
    assert_eq!(claims.exp - claims.iat, 60);
}
