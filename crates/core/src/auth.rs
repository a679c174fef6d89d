//! Auth gateway: authenticates a customer against the directory and records
//! every attempt in the login audit trail.

use std::sync::Arc;

use crate::audit::{unknown_user_ref, AuditRecorder, LoginStatus};
use crate::customer::{Customer, CustomerRepo};
use crate::error::CoreResult;

/// Credential verification capability.
///
/// The gateway never sees how credentials are stored; the boundary supplies
/// an Argon2id-backed implementation, tests a plain comparison.
pub trait PasswordVerifier: Send + Sync {
    /// Whether `password` matches the stored `password_hash`.
    fn verify(&self, password: &str, password_hash: &str) -> CoreResult<bool>;
}

/// Authenticates customers by email + password.
///
/// Exactly one login audit record is appended per attempt:
/// - known email, matching password  -> SUCCESS under the customer id
/// - known email, wrong password     -> FAILURE under the customer id
/// - unknown email                   -> FAILURE under `UNKNOWN:<email>`
///
/// No lockout and no rate limiting at this layer.
pub struct AuthGateway {
    customers: Arc<dyn CustomerRepo>,
    audit: Arc<AuditRecorder>,
    verifier: Arc<dyn PasswordVerifier>,
}

impl AuthGateway {
    pub fn new(
        customers: Arc<dyn CustomerRepo>,
        audit: Arc<AuditRecorder>,
        verifier: Arc<dyn PasswordVerifier>,
    ) -> Self {
        Self {
            customers,
            audit,
            verifier,
        }
    }

    /// Attempt a login. Returns the customer on success, `None` on failure.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        ip_address: &str,
    ) -> CoreResult<Option<Customer>> {
        let Some(customer) = self.customers.find_by_email(email).await? else {
            self.audit
                .log_login(
                    unknown_user_ref(email),
                    LoginStatus::Failure,
                    ip_address.to_string(),
                )
                .await?;
            return Ok(None);
        };

        if self.verifier.verify(password, &customer.password_hash)? {
            self.audit
                .log_login(
                    customer.id.to_string(),
                    LoginStatus::Success,
                    ip_address.to_string(),
                )
                .await?;
            tracing::info!(customer_id = %customer.id, "login succeeded");
            Ok(Some(customer))
        } else {
            self.audit
                .log_login(
                    customer.id.to_string(),
                    LoginStatus::Failure,
                    ip_address.to_string(),
                )
                .await?;
            tracing::info!(customer_id = %customer.id, "login failed");
            Ok(None)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::{CreateCustomer, CustomerDirectory, Role};
    use crate::memory::{
        MemoryBookingAuditRepo, MemoryCustomerRepo, MemoryLoginAuditRepo, PlainTextVerifier,
    };

    struct Fixture {
        gateway: AuthGateway,
        directory: CustomerDirectory,
        audit: Arc<AuditRecorder>,
    }

    fn fixture() -> Fixture {
        let customers = Arc::new(MemoryCustomerRepo::default());
        let audit = Arc::new(AuditRecorder::new(
            Arc::new(MemoryLoginAuditRepo::default()),
            Arc::new(MemoryBookingAuditRepo::default()),
        ));
        Fixture {
            gateway: AuthGateway::new(
                Arc::clone(&customers) as Arc<dyn CustomerRepo>,
                Arc::clone(&audit),
                Arc::new(PlainTextVerifier),
            ),
            directory: CustomerDirectory::new(customers),
            audit,
        }
    }

    async fn register(fx: &Fixture, email: &str, password: &str) -> Customer {
        fx.directory
            .create(CreateCustomer {
                name: "Test User".into(),
                email: email.into(),
                phone: None,
                // PlainTextVerifier compares the stored value directly.
                password_hash: password.into(),
                role: Role::Customer,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn correct_credentials_return_customer_and_log_success() {
        let fx = fixture();
        let customer = register(&fx, "a@x.com", "p").await;

        let result = fx.gateway.login("a@x.com", "p", "127.0.0.1").await.unwrap();
        assert_eq!(result.map(|c| c.id), Some(customer.id));

        let audits = fx
            .audit
            .login_audits(Some(&customer.id.to_string()))
            .await
            .unwrap();
        assert_eq!(audits.len(), 1);
        assert_eq!(audits[0].status, LoginStatus::Success);
        assert_eq!(audits[0].ip_address, "127.0.0.1");
    }

    #[tokio::test]
    async fn wrong_password_logs_failure_under_real_customer_id() {
        let fx = fixture();
        let customer = register(&fx, "a@x.com", "p").await;

        let result = fx
            .gateway
            .login("a@x.com", "wrong", "127.0.0.1")
            .await
            .unwrap();
        assert!(result.is_none());

        let audits = fx
            .audit
            .login_audits(Some(&customer.id.to_string()))
            .await
            .unwrap();
        assert_eq!(audits.len(), 1);
        assert_eq!(audits[0].status, LoginStatus::Failure);
    }

    #[tokio::test]
    async fn unknown_email_logs_failure_under_sentinel() {
        let fx = fixture();

        let result = fx
            .gateway
            .login("ghost@x.com", "p", "127.0.0.1")
            .await
            .unwrap();
        assert!(result.is_none());

        let audits = fx
            .audit
            .login_audits(Some("UNKNOWN:ghost@x.com"))
            .await
            .unwrap();
        assert_eq!(audits.len(), 1);
        assert_eq!(audits[0].status, LoginStatus::Failure);
    }

    #[tokio::test]
    async fn every_attempt_appends_exactly_one_record() {
        let fx = fixture();
        register(&fx, "a@x.com", "p").await;

        fx.gateway.login("a@x.com", "p", "127.0.0.1").await.unwrap();
        fx.gateway.login("a@x.com", "no", "127.0.0.1").await.unwrap();
        fx.gateway.login("b@x.com", "p", "127.0.0.1").await.unwrap();

        assert_eq!(fx.audit.login_audits(None).await.unwrap().len(), 3);
    }
}
