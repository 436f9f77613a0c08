//! Account registration and password login.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CredentialsDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, conflict::ConflictError, validation::ValidationError, Error},
        model::db::UserModel,
    },
};

/// Minimum number of characters in a password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Account registration and credential checks
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    password_hash_cost: u32,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, password_hash_cost: u32) -> Self {
        Self {
            db,
            password_hash_cost,
        }
    }

    /// Creates a user account with a bcrypt password hash
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The new user
    /// - `Err(Error::ValidationError)` - Email is blank or malformed, or password is too short
    /// - `Err(Error::ConflictError(ConflictError::Duplicate))` - Email already registered
    pub async fn register(&self, credentials: CredentialsDto) -> Result<UserDto, Error> {
        let email = credentials.email.trim();

        if email.is_empty() {
            return Err(ValidationError::invalid("email", "This field may not be blank.").into());
        }
        if !email.contains('@') {
            return Err(ValidationError::invalid("email", "Enter a valid email address.").into());
        }
        if credentials.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::invalid(
                "password",
                format!("Ensure this field has at least {MIN_PASSWORD_LENGTH} characters."),
            )
            .into());
        }

        let password_hash = bcrypt::hash(&credentials.password, self.password_hash_cost)?;

        let user = UserRepository::new(self.db)
            .create(email, password_hash)
            .await
            .map_err(|err| {
                ConflictError::Duplicate {
                    resource: "user",
                    field: "email",
                }
                .on_unique_violation(err)
            })?;

        tracing::info!(user_id = %user.id, "Registered user");

        Ok(dto(user))
    }

    /// Checks an email and password pair
    ///
    /// Unknown emails and wrong passwords are indistinguishable to the caller.
    pub async fn login(&self, credentials: CredentialsDto) -> Result<UserDto, Error> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_email(credentials.email.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(&credentials.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(dto(user))
    }
}

fn dto(user: UserModel) -> UserDto {
    UserDto {
        id: user.id,
        email: user.email,
    }
}

#[cfg(test)]
mod tests {
    use railway_test_utils::prelude::*;

    use crate::{
        model::user::CredentialsDto,
        server::{
            error::{auth::AuthError, conflict::ConflictError, validation::ValidationError, Error},
            service::auth::AuthService,
        },
    };

    fn credentials(email: &str, password: &str) -> CredentialsDto {
        CredentialsDto {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    mod register {
        use super::*;

        /// Expect a user whose password verifies against the stored hash
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;

            let auth_service = AuthService::new(&test.db, TEST_PASSWORD_HASH_COST);
            let user = auth_service
                .register(credentials(TEST_EMAIL, TEST_PASSWORD))
                .await
                .unwrap();

            assert_eq!(user.email, TEST_EMAIL);
            let logged_in = auth_service
                .login(credentials(TEST_EMAIL, TEST_PASSWORD))
                .await
                .unwrap();
            assert_eq!(logged_in.id, user.id);

            Ok(())
        }

        /// Expect Conflict on the email field for a registered email
        #[tokio::test]
        async fn rejects_duplicate_email() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_booking_tables()
                .with_user(TEST_EMAIL)
                .build()
                .await?;

            let auth_service = AuthService::new(&test.db, TEST_PASSWORD_HASH_COST);
            let result = auth_service
                .register(credentials(TEST_EMAIL, TEST_PASSWORD))
                .await;

            assert!(matches!(
                result,
                Err(Error::ConflictError(ConflictError::Duplicate {
                    field: "email",
                    ..
                }))
            ));

            Ok(())
        }

        /// Expect a password field error for a short password
        #[tokio::test]
        async fn rejects_short_password() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;

            let auth_service = AuthService::new(&test.db, TEST_PASSWORD_HASH_COST);
            let result = auth_service.register(credentials(TEST_EMAIL, "short")).await;

            let Err(Error::ValidationError(err)) = result else {
                panic!("expected validation error, got {:?}", result);
            };
            assert_eq!(err.field(), "password");

            Ok(())
        }

        /// Expect an email field error for a blank email
        #[tokio::test]
        async fn rejects_blank_email() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;

            let auth_service = AuthService::new(&test.db, TEST_PASSWORD_HASH_COST);
            let result = auth_service.register(credentials("  ", TEST_PASSWORD)).await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::InvalidField {
                    field: "email",
                    ..
                }))
            ));

            Ok(())
        }
    }

    mod login {
        use super::*;

        /// Expect InvalidCredentials for a wrong password
        #[tokio::test]
        async fn rejects_wrong_password() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_booking_tables()
                .with_user(TEST_EMAIL)
                .build()
                .await?;

            let auth_service = AuthService::new(&test.db, TEST_PASSWORD_HASH_COST);
            let result = auth_service
                .login(credentials(TEST_EMAIL, "not the password"))
                .await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::InvalidCredentials))
            ));

            Ok(())
        }

        /// Expect InvalidCredentials for an unknown email
        #[tokio::test]
        async fn rejects_unknown_email() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;

            let auth_service = AuthService::new(&test.db, TEST_PASSWORD_HASH_COST);
            let result = auth_service
                .login(credentials("nobody@example.com", TEST_PASSWORD))
                .await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::InvalidCredentials))
            ));

            Ok(())
        }
    }
}
