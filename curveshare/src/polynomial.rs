use curveshare_field::{Field, FieldElement};
use curveshare_traits::randomness::{GeneralRng, SecureRng};

/// A polynomial over a prime-order field, held as the ordered list of its coefficients, with the
/// constant term at index 0.
///
/// When a polynomial encodes a secret, the constant term *is* the secret. The coefficients are
/// therefore never exposed, printed, or serialized; a polynomial is meant to be constructed,
/// evaluated, and dropped within a single operation.
pub struct Polynomial {
    coefficients: Vec<FieldElement>,
}

impl Polynomial {
    /// Generates a polynomial with `coefficient_count` uniformly random coefficients drawn from
    /// `field` using a cryptographic RNG.
    ///
    /// Panics if `coefficient_count` is zero.
    pub fn random<R: SecureRng>(
        coefficient_count: usize,
        field: &Field,
        rng: &mut GeneralRng<R>,
    ) -> Polynomial {
        assert!(
            coefficient_count > 0,
            "a polynomial must have at least one coefficient"
        );

        Polynomial {
            coefficients: (0..coefficient_count)
                .map(|_| field.random_element(rng))
                .collect(),
        }
    }

    /// The number of coefficients, one more than the degree bound.
    pub fn coefficient_count(&self) -> usize {
        self.coefficients.len()
    }

    /// Replaces the constant term.
    ///
    /// Panics if `element` belongs to a different field than the other coefficients.
    pub fn set_constant_term(&mut self, element: FieldElement) {
        assert_eq!(
            element.order(),
            self.coefficients[0].order(),
            "the constant term must belong to the same field as the other coefficients"
        );

        self.coefficients[0] = element;
    }

    /// Evaluates the polynomial at `x` by Horner's rule. Every intermediate product and sum is
    /// reduced by the field operations, and `x^0 = 1` holds even when `x` is zero, so evaluating
    /// at zero yields the constant term.
    pub fn evaluate(&self, x: &FieldElement) -> FieldElement {
        let mut accumulator = self
            .coefficients
            .last()
            .expect("a polynomial always has at least one coefficient")
            .clone();

        for coefficient in self.coefficients.iter().rev().skip(1) {
            accumulator = &(&accumulator * x) + coefficient;
        }

        accumulator
    }
}
