use crate::curve::{Curve, CurvePoint};
use crate::polynomial::Polynomial;
use curveshare_field::{Field, FieldElement};
use curveshare_traits::randomness::{GeneralRng, SecureRng};
use curveshare_traits::secret_sharing::TOfNSecretSharing;
use curveshare_traits::security::BitsOfSecurity;
use curveshare_traits::NonInvertibleError;
use rug::integer::Order;
use rug::Integer;
use serde::{Deserialize, Serialize};

/// Shamir's (t, n) threshold secret-sharing scheme over the scalar field of an elliptic curve.
/// The secret becomes the constant term of a random polynomial, shares are evaluations of that
/// polynomial at the nonzero abscissas `1..=n`, and any `t` shares recover the secret by Lagrange
/// interpolation at zero. Share values are carried as [`CurvePoint`]s so that a later extension
/// can encrypt them to a recipient's key.
///
/// ```
/// use curveshare::shamir::Shamir;
/// use curveshare_traits::randomness::GeneralRng;
/// use curveshare_traits::secret_sharing::TOfNSecretSharing;
/// use rand_core::OsRng;
///
/// let mut rng = GeneralRng::new(OsRng);
/// let shamir = Shamir::setup(&Default::default());
///
/// let shares = shamir.split(b"ReaganIsDumbledore", 3, 5, &mut rng);
/// let secret = shamir.combine(&shares[..3]).unwrap();
/// assert_eq!(secret, b"ReaganIsDumbledore");
/// ```
#[derive(Debug, Clone)]
pub struct Shamir {
    curve: Curve,
}

/// One share of a split secret, in the clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearShare {
    /// Identifier of this share: the abscissa the polynomial was evaluated at, never zero.
    pub id: FieldElement,
    /// Carrier of the evaluation: x is the abscissa and y the polynomial value.
    pub point: CurvePoint,
}

/// A key pair for encrypting shares to a recipient: a private scalar, encoded as big-endian
/// bytes of the curve order's length, and the matching public point. Created once by secure
/// random generation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    private: Vec<u8>,
    public: CurvePoint,
}

impl Key {
    /// The private scalar as big-endian bytes.
    pub fn private_bytes(&self) -> &[u8] {
        &self.private
    }

    /// The public point, the private scalar times the curve's base point.
    pub fn public_point(&self) -> &CurvePoint {
        &self.public
    }
}

impl Shamir {
    /// Creates a scheme instance over the given curve.
    pub fn new(curve: Curve) -> Shamir {
        Shamir { curve }
    }

    /// The curve whose group order defines the field that secrets and shares live in.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Generates a fresh key pair using a cryptographic RNG: a uniformly random nonzero scalar
    /// below the group order, together with its public point.
    pub fn generate_key<R: SecureRng>(&self, rng: &mut GeneralRng<R>) -> Key {
        let order = self.curve.order();

        let scalar = loop {
            let candidate = Integer::from(order.random_below_ref(&mut rng.rug_rng()));

            if candidate != 0 {
                break candidate;
            }
        };

        let digits = scalar.to_digits::<u8>(Order::Msf);
        let mut private = vec![0u8; order.significant_digits::<u8>()];
        let padding = private.len() - digits.len();
        private[padding..].copy_from_slice(&digits);

        Key {
            private,
            public: self.curve.generator().scalar_mul(&scalar),
        }
    }

    fn scalar_field(&self) -> Field {
        Field::new(self.curve.order().clone())
    }
}

impl TOfNSecretSharing for Shamir {
    type Share = ClearShare;

    fn setup(security_parameter: &BitsOfSecurity) -> Self {
        match security_parameter.to_group_order_bit_length() {
            256 => Shamir::new(Curve::p256()),
            _ => panic!("Currently only the P-256 curve is supported, with security level AES128."),
        }
    }

    /// Splits `secret`, interpreted as a big-endian unsigned integer, into `share_count` shares
    /// with reconstruction threshold `threshold`. The polynomial holding the secret lives only
    /// for the duration of this call.
    fn split<R: SecureRng>(
        &self,
        secret: &[u8],
        threshold: usize,
        share_count: usize,
        rng: &mut GeneralRng<R>,
    ) -> Vec<ClearShare> {
        assert!(threshold > 0, "the threshold must be at least 1");

        let field = self.scalar_field();

        let mut polynomial = Polynomial::random(threshold, &field, rng);
        polynomial.set_constant_term(field.element(Integer::from_digits(secret, Order::Msf)));

        // The abscissa 0 would evaluate to the secret itself, so ids start at 1.
        (1..=share_count)
            .map(|i| {
                let id = field.element(Integer::from(i));
                let evaluation = polynomial.evaluate(&id);

                ClearShare {
                    point: CurvePoint::new(
                        id.value().clone(),
                        evaluation.value().clone(),
                        self.curve.clone(),
                    ),
                    id,
                }
            })
            .collect()
    }

    /// Reconstructs the secret by evaluating the Lagrange interpolation of the shares at zero.
    /// The abscissas are read back from each share's point, and two shares carrying the same
    /// abscissa make the reconstruction fail with an error rather than a wrong answer.
    ///
    /// The returned bytes are the minimal big-endian encoding of the reconstructed integer;
    /// leading zero bytes of the secret that was split are not restored.
    fn combine(&self, shares: &[ClearShare]) -> Result<Vec<u8>, NonInvertibleError> {
        let field = self.scalar_field();
        let zero = field.zero();

        let mut secret = field.zero();
        for (i, share) in shares.iter().enumerate() {
            let x_i = field.element(share.point.x().clone());

            let mut basis = field.one();
            for (j, other) in shares.iter().enumerate() {
                if i == j {
                    continue;
                }

                let x_j = field.element(other.point.x().clone());
                let denominator = (&x_i - &x_j).invert().ok_or(NonInvertibleError)?;
                basis = &basis * &(&(&zero - &x_j) * &denominator);
            }

            let y_i = field.element(share.point.y().clone());
            secret = &secret + &(&y_i * &basis);
        }

        Ok(secret.value().to_digits::<u8>(Order::Msf))
    }
}
