pub mod mailer;
pub use mailer::{LogMailer, MailError, Mailer, SmtpMailer};

pub mod verification_service;
pub mod verification_service_impl;
pub use verification_service::{EmailVerificationService, VerificationError, VERIFIED_SENTINEL};
pub use verification_service_impl::DefaultVerificationService;

pub mod signup_service;
pub mod signup_service_impl;
pub use signup_service::{SignupError, SignupService};
pub use signup_service_impl::DefaultSignupService;

pub mod auth_service;
pub mod auth_service_impl;
pub use auth_service::{AccountInfo, AuthError, AuthService};
pub use auth_service_impl::SeaOrmAuthService;

pub mod performance_service;
pub mod performance_service_impl;
pub use performance_service::{PerformanceError, PerformanceService};
pub use performance_service_impl::SeaOrmPerformanceService;
