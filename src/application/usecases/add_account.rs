//! Account creation use case implementation.

use async_trait::async_trait;

use crate::application::dto::{AddAccountInput, NewAccountDto};
use crate::application::error::Result;
use crate::application::ports::inbound::AddAccount;
use crate::application::ports::outbound::{
    AddAccountRepository, Clock, Encrypter, TelemetryPort,
};
use crate::domain::account::StoredAccount;

/// Account creation backed by a repository.
pub struct DbAddAccount {
    encrypter: Box<dyn Encrypter>,
    account_repo: Box<dyn AddAccountRepository>,
    clock: Box<dyn Clock>,
    telemetry: Box<dyn TelemetryPort>,
}

impl DbAddAccount {
    pub fn new(
        encrypter: Box<dyn Encrypter>,
        account_repo: Box<dyn AddAccountRepository>,
        clock: Box<dyn Clock>,
        telemetry: Box<dyn TelemetryPort>,
    ) -> Self {
        Self {
            encrypter,
            account_repo,
            clock,
            telemetry,
        }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    async fn add(&self, input: AddAccountInput) -> Result<StoredAccount> {
        // The record cannot be assembled before the credential exists.
        let password = self.encrypter.encrypt(&input.password).await?;

        let now = self.clock.now();
        let record = NewAccountDto {
            name: input.name,
            email: input.email,
            password,
            created_at: now,
            updated_at: now,
        };

        let account = self.account_repo.add(record).await?;

        self.telemetry.record_account_created(&account.id);

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::adapters::outbound::clock::FixedClock;
    use crate::application::error::ApplicationError;
    use crate::domain::password::Password;

    const ENCRYPTED: &str = "hashed_password";

    #[derive(Default)]
    struct EncrypterSpy {
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl Encrypter for Arc<EncrypterSpy> {
        async fn encrypt(&self, secret: &Password) -> Result<String> {
            self.calls.lock().unwrap().push(secret.as_str().to_owned());
            if self.fail {
                return Err(ApplicationError::internal(std::io::Error::other(
                    "encrypter down",
                )));
            }
            Ok(ENCRYPTED.to_owned())
        }
    }

    #[derive(Default)]
    struct RepositorySpy {
        records: Mutex<Vec<NewAccountDto>>,
        fail: bool,
    }

    #[async_trait]
    impl AddAccountRepository for Arc<RepositorySpy> {
        async fn add(&self, account: NewAccountDto) -> Result<StoredAccount> {
            if self.fail {
                return Err(ApplicationError::internal(std::io::Error::other(
                    "connection reset",
                )));
            }
            let mut records = self.records.lock().unwrap();
            records.push(account.clone());
            Ok(StoredAccount {
                id: records.len().to_string(),
                name: account.name,
                email: account.email,
                password: account.password,
                created_at: account.created_at,
                updated_at: account.updated_at,
            })
        }
    }

    #[derive(Default)]
    struct TelemetrySpy(AtomicUsize);

    impl TelemetryPort for Arc<TelemetrySpy> {
        fn record_account_created(&self, _account_id: &str) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Sut {
        usecase: DbAddAccount,
        encrypter: Arc<EncrypterSpy>,
        repository: Arc<RepositorySpy>,
        telemetry: Arc<TelemetrySpy>,
        now: DateTime<Utc>,
    }

    fn make_sut(encrypter: EncrypterSpy, repository: RepositorySpy) -> Sut {
        let encrypter = Arc::new(encrypter);
        let repository = Arc::new(repository);
        let telemetry = Arc::new(TelemetrySpy::default());
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let usecase = DbAddAccount::new(
            Box::new(Arc::clone(&encrypter)),
            Box::new(Arc::clone(&repository)),
            Box::new(FixedClock::new(now)),
            Box::new(Arc::clone(&telemetry)),
        );

        Sut {
            usecase,
            encrypter,
            repository,
            telemetry,
            now,
        }
    }

    fn input() -> AddAccountInput {
        AddAccountInput::new(
            "valid_name",
            "valid_email@mail.com",
            Password::new("valid_password"),
        )
    }

    #[tokio::test]
    async fn test_encrypter_receives_plaintext_password() {
        let sut = make_sut(EncrypterSpy::default(), RepositorySpy::default());

        sut.usecase.add(input()).await.unwrap();

        assert_eq!(
            *sut.encrypter.calls.lock().unwrap(),
            vec!["valid_password".to_owned()]
        );
    }

    #[tokio::test]
    async fn test_repository_receives_encrypted_password() {
        let sut = make_sut(EncrypterSpy::default(), RepositorySpy::default());

        sut.usecase.add(input()).await.unwrap();

        let records = sut.repository.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            NewAccountDto {
                name: "valid_name".into(),
                email: "valid_email@mail.com".into(),
                password: ENCRYPTED.into(),
                created_at: sut.now,
                updated_at: sut.now,
            }
        );
    }

    #[tokio::test]
    async fn test_returns_repository_account() {
        let sut = make_sut(EncrypterSpy::default(), RepositorySpy::default());

        let account = sut.usecase.add(input()).await.unwrap();

        assert_eq!(account.id, "1");
        assert_eq!(account.name, "valid_name");
        assert_eq!(account.email, "valid_email@mail.com");
        assert_eq!(account.password, ENCRYPTED);
        assert_eq!(account.created_at, sut.now);
        assert_eq!(account.updated_at, sut.now);
        assert_eq!(sut.telemetry.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_encrypter_error_is_propagated() {
        let sut = make_sut(
            EncrypterSpy {
                fail: true,
                ..Default::default()
            },
            RepositorySpy::default(),
        );

        let err = sut.usecase.add(input()).await.unwrap_err();

        assert!(matches!(err, ApplicationError::Internal(_)));
        assert!(sut.repository.records.lock().unwrap().is_empty());
        assert_eq!(sut.telemetry.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_repository_error_is_propagated() {
        let sut = make_sut(
            EncrypterSpy::default(),
            RepositorySpy {
                fail: true,
                ..Default::default()
            },
        );

        let err = sut.usecase.add(input()).await.unwrap_err();

        assert_eq!(err.to_string(), "internal server error");
        assert_eq!(sut.telemetry.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_not_idempotent() {
        let sut = make_sut(EncrypterSpy::default(), RepositorySpy::default());

        let first = sut.usecase.add(input()).await.unwrap();
        let second = sut.usecase.add(input()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(sut.repository.records.lock().unwrap().len(), 2);
    }
}
