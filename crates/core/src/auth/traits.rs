/// Compares a plaintext secret against a stored password hash.
///
/// Verification is deliberately slow and CPU bound. Callers running on an
/// async runtime should move it off the executor threads.
pub trait CredentialVerifier: Send + Sync {
    /// Returns true if `password` matches `stored_hash`. A malformed hash
    /// never matches.
    fn verify(&self, password: &str, stored_hash: &str) -> bool;
}
