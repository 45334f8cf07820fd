use crate::randomness::{GeneralRng, SecureRng};
use crate::security::BitsOfSecurity;
use crate::NonInvertibleError;

/// A threshold secret-sharing scheme splits a secret into $n$ shares such that any $t$ of them
/// suffice to reconstruct the secret exactly, while fewer than $t$ reveal nothing about it.
///
/// We denote such a scheme using a tuple like (t, n). The struct that implements a
/// `TOfNSecretSharing` holds the general parameters of that scheme, such as the group the
/// arithmetic is performed in. Depending on the scheme, those parameters could play an important
/// role in deciding the level of security.
pub trait TOfNSecretSharing {
    /// The type of a single share of the secret.
    type Share;

    /// Sets up an instance of this scheme with parameters satisfying the security parameter.
    fn setup(security_parameter: &BitsOfSecurity) -> Self;

    /// Splits `secret` into `share_count` shares, any `threshold` of which reconstruct it, using
    /// a cryptographic RNG. It is the responsibility of the caller to request at least
    /// `threshold` shares, or reconstruction will never be possible.
    fn split<R: SecureRng>(
        &self,
        secret: &[u8],
        threshold: usize,
        share_count: usize,
        rng: &mut GeneralRng<R>,
    ) -> Vec<Self::Share>;

    /// Reconstructs the secret from the given shares. It is the responsibility of the caller to
    /// supply at least as many distinct shares as the threshold used when splitting; with fewer,
    /// this function still returns a value, but one that is unrelated to the secret.
    fn combine(&self, shares: &[Self::Share]) -> Result<Vec<u8>, NonInvertibleError>;
}
