mod traits;

pub use traits::CredentialVerifier;
