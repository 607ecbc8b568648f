//! 认证服务：登录与注册编排

use crate::{
    auth::jwt::JwtService,
    auth::password::PasswordHasher,
    config::AppConfig,
    error::AppError,
    models::user::*,
    repository::UserRepository,
};
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

pub struct AuthService {
    db: PgPool,
    jwt_service: Arc<JwtService>,
    config: Arc<AppConfig>,
}

impl AuthService {
    pub fn new(db: PgPool, jwt_service: Arc<JwtService>, config: Arc<AppConfig>) -> Self {
        Self {
            db,
            jwt_service,
            config,
        }
    }

    /// 用户登录
    ///
    /// 查找用户 → 验证密码 → 签发令牌。对存储只读。
    /// 用户不存在和密码错误返回同一个错误，防止用户名枚举。
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse, AppError> {
        let user_repo = UserRepository::new(self.db.clone());

        // 获取用户
        let user: User = user_repo
            .find_by_username(&req.username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // 验证密码
        let hasher = PasswordHasher::new();
        if !hasher.verify(&req.password, &user.password_hash) {
            tracing::debug!(username = %req.username, "Login failed: password mismatch");
            return Err(AppError::InvalidCredentials);
        }

        // 签发令牌
        let token = self.jwt_service.issue(&user.id, &user.username)?;

        tracing::info!(user_id = %user.id, username = %user.username, "Login succeeded");

        Ok(LoginResponse { token })
    }

    /// 用户注册
    ///
    /// 明文密码在持久化之前替换为 Argon2id 哈希。
    pub async fn register(&self, req: CreateUserRequest) -> Result<UserResponse, AppError> {
        // 字段与密码策略校验
        req.validate()?;
        PasswordHasher::validate_password_policy(&req.password, &self.config)?;

        // 哈希密码
        let hasher = PasswordHasher::new();
        let password_hash = hasher.hash(&req.password)?;

        // 持久化（唯一约束冲突等存储错误统一映射为 500）
        let user_repo = UserRepository::new(self.db.clone());
        let user = user_repo.create(&req, &password_hash).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(UserResponse::from(user))
    }
}
