use crate::constants::{
    P256_COEFFICIENT_A, P256_COEFFICIENT_B, P256_FIELD_MODULUS, P256_GENERATOR_X, P256_GENERATOR_Y,
    P256_GROUP_ORDER,
};
use curveshare_traits::NonInvertibleError;
use rug::integer::Order;
use rug::ops::RemRounding;
use rug::Integer;
use serde::de::{self, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain parameters of a named short-Weierstrass curve `y^2 = x^3 + ax + b` over the prime
/// field of modulus `p`, with a base point generating a group of prime order `n`.
///
/// The group's identity element is represented by the coordinate pair `(0, 0)`.
///
/// The group law and scalar multiplication implemented here are not constant-time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    name: &'static str,
    p: Integer,
    a: Integer,
    b: Integer,
    n: Integer,
    g_x: Integer,
    g_y: Integer,
}

impl Curve {
    /// The NIST P-256 curve.
    pub fn p256() -> Curve {
        Curve {
            name: "P-256",
            p: integer_from_hex(P256_FIELD_MODULUS),
            a: integer_from_hex(P256_COEFFICIENT_A),
            b: integer_from_hex(P256_COEFFICIENT_B),
            n: integer_from_hex(P256_GROUP_ORDER),
            g_x: integer_from_hex(P256_GENERATOR_X),
            g_y: integer_from_hex(P256_GENERATOR_Y),
        }
    }

    /// The name identifying this curve.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The prime order of the group generated by the base point.
    pub fn order(&self) -> &Integer {
        &self.n
    }

    /// The base point of this curve.
    pub fn generator(&self) -> CurvePoint {
        CurvePoint {
            x: self.g_x.clone(),
            y: self.g_y.clone(),
            curve: self.clone(),
        }
    }

    /// Adds the points `(x1, y1)` and `(x2, y2)` under the group law of this curve. Both points
    /// must lie on the curve; the identity `(0, 0)` is handled explicitly on either side.
    pub fn add(
        &self,
        x1: &Integer,
        y1: &Integer,
        x2: &Integer,
        y2: &Integer,
    ) -> (Integer, Integer) {
        if *x1 == 0 && *y1 == 0 {
            return (x2.clone(), y2.clone());
        }

        if *x2 == 0 && *y2 == 0 {
            return (x1.clone(), y1.clone());
        }

        let lambda = if x1 == x2 {
            if Integer::from(y1 + y2).rem_euc(&self.p) == 0 {
                // The points are inverses of each other.
                return (Integer::new(), Integer::new());
            }

            // Tangent slope: (3 x1^2 + a) / (2 y1).
            let mut numerator = Integer::from(x1 * x1);
            numerator *= 3u32;
            numerator += &self.a;

            let denominator = Integer::from(y1 * 2u32).rem_euc(&self.p);
            (numerator * self.invert_in_base_field(denominator)).rem_euc(&self.p)
        } else {
            // Chord slope: (y2 - y1) / (x2 - x1).
            let numerator = Integer::from(y2 - y1);

            let denominator = Integer::from(x2 - x1).rem_euc(&self.p);
            (numerator * self.invert_in_base_field(denominator)).rem_euc(&self.p)
        };

        let mut x3 = Integer::from(&lambda * &lambda);
        x3 -= x1;
        x3 -= x2;
        let x3 = x3.rem_euc(&self.p);

        let mut y3 = Integer::from(x1 - &x3);
        y3 *= &lambda;
        y3 -= y1;
        let y3 = y3.rem_euc(&self.p);

        (x3, y3)
    }

    /// Computes `k * (x, y)` by most-significant-bit-first double-and-add, where `k` is a big
    /// unsigned integer in big-endian byte order.
    pub fn scalar_mult(&self, x: &Integer, y: &Integer, k: &[u8]) -> (Integer, Integer) {
        let mut result_x = Integer::new();
        let mut result_y = Integer::new();

        for byte in k {
            for shift in (0..8).rev() {
                let (doubled_x, doubled_y) = self.add(&result_x, &result_y, &result_x, &result_y);
                result_x = doubled_x;
                result_y = doubled_y;

                if (byte >> shift) & 1 == 1 {
                    let (sum_x, sum_y) = self.add(&result_x, &result_y, x, y);
                    result_x = sum_x;
                    result_y = sum_y;
                }
            }
        }

        (result_x, result_y)
    }

    fn invert_in_base_field(&self, value: Integer) -> Integer {
        // The group law only divides by values that are nonzero modulo the prime p.
        value
            .invert(&self.p)
            .expect("nonzero values are invertible modulo a prime")
    }
}

impl Serialize for Curve {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name)
    }
}

impl<'de> Deserialize<'de> for Curve {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct CurveVisitor;

        impl<'de> Visitor<'de> for CurveVisitor {
            type Value = Curve;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("the name of a supported curve")
            }

            fn visit_str<E>(self, name: &str) -> Result<Curve, E>
            where
                E: de::Error,
            {
                match name {
                    "P-256" => Ok(Curve::p256()),
                    _ => Err(de::Error::custom(format_args!(
                        "unsupported curve: {}",
                        name
                    ))),
                }
            }
        }

        deserializer.deserialize_str(CurveVisitor)
    }
}

/// A point associated with a named curve. Genuine group elements support the group operations
/// below; the type is also used as a plain coordinate carrier for share values, which do not lie
/// on the curve and must not be fed to the group operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurvePoint {
    x: Integer,
    y: Integer,
    curve: Curve,
}

impl CurvePoint {
    /// Wraps the coordinates `(x, y)` as a point of `curve`. No on-curve check is performed.
    pub fn new(x: Integer, y: Integer, curve: Curve) -> CurvePoint {
        CurvePoint { x, y, curve }
    }

    /// The x-coordinate of this point.
    pub fn x(&self) -> &Integer {
        &self.x
    }

    /// The y-coordinate of this point.
    pub fn y(&self) -> &Integer {
        &self.y
    }

    /// The curve this point is associated with.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Whether this point is the identity element `(0, 0)`.
    pub fn is_identity(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Adds this point and `other` under the group law of their shared curve.
    ///
    /// Panics if the points are associated with different curves.
    pub fn add(&self, other: &CurvePoint) -> CurvePoint {
        assert_eq!(
            self.curve, other.curve,
            "cannot add points of different curves"
        );

        let (x, y) = self.curve.add(&self.x, &self.y, &other.x, &other.y);

        CurvePoint {
            x,
            y,
            curve: self.curve.clone(),
        }
    }

    /// Computes `k` times this point. `k` is consumed as a big unsigned integer in big-endian
    /// byte order.
    pub fn scalar_mul(&self, k: &Integer) -> CurvePoint {
        let (x, y) = self
            .curve
            .scalar_mult(&self.x, &self.y, &k.to_digits::<u8>(Order::Msf));

        CurvePoint {
            x,
            y,
            curve: self.curve.clone(),
        }
    }

    /// Computes `k^-1` times this point, where the inverse is taken modulo the curve's group
    /// order. This undoes an earlier multiplication of the point by `k`, which is how a decrypt
    /// step reverses an encrypting scalar multiplication.
    ///
    /// Returns an error when `k` has no inverse, which happens exactly when `k` is congruent to
    /// zero modulo the group order.
    pub fn scalar_div(&self, k: &Integer) -> Result<CurvePoint, NonInvertibleError> {
        let inverse = Integer::from(k)
            .invert(&self.curve.n)
            .map_err(|_| NonInvertibleError)?;

        Ok(self.scalar_mul(&inverse))
    }
}

fn integer_from_hex(digits: &str) -> Integer {
    Integer::from_str_radix(digits, 16).expect("curve constants are valid hexadecimal")
}

#[cfg(test)]
mod tests {
    use crate::curve::{Curve, CurvePoint};
    use curveshare_traits::NonInvertibleError;
    use rug::ops::RemRounding;
    use rug::Integer;

    fn is_on_curve(curve: &Curve, point: &CurvePoint) -> bool {
        let left = Integer::from(point.y() * point.y()).rem_euc(&curve.p);

        let mut right = Integer::from(point.x() * point.x());
        right *= point.x();
        right += Integer::from(&curve.a * point.x());
        right += &curve.b;

        left == right.rem_euc(&curve.p)
    }

    #[test]
    fn test_generator_satisfies_curve_equation() {
        let curve = Curve::p256();
        assert!(is_on_curve(&curve, &curve.generator()));
    }

    #[test]
    fn test_add_with_identity() {
        let curve = Curve::p256();
        let generator = curve.generator();
        let identity = CurvePoint::new(Integer::new(), Integer::new(), curve.clone());

        assert_eq!(generator.add(&identity), generator);
        assert_eq!(identity.add(&generator), generator);
        assert!(identity.add(&identity).is_identity());
    }

    #[test]
    fn test_add_inverse_points_gives_identity() {
        let curve = Curve::p256();
        let generator = curve.generator();
        let negated = CurvePoint::new(
            generator.x().clone(),
            Integer::from(&curve.p - generator.y()),
            curve.clone(),
        );

        assert!(generator.add(&negated).is_identity());
    }

    #[test]
    fn test_scalar_mul_matches_repeated_addition() {
        let curve = Curve::p256();
        let generator = curve.generator();

        let mut sum = generator.clone();
        for _ in 0..4 {
            sum = sum.add(&generator);
        }

        assert_eq!(generator.scalar_mul(&Integer::from(5)), sum);
    }

    #[test]
    fn test_scalar_mul_small_cases() {
        let curve = Curve::p256();
        let generator = curve.generator();

        assert!(generator.scalar_mul(&Integer::new()).is_identity());
        assert_eq!(generator.scalar_mul(&Integer::from(1)), generator);
        assert_eq!(
            generator.scalar_mul(&Integer::from(2)),
            generator.add(&generator)
        );
    }

    #[test]
    fn test_scalar_mul_result_is_on_curve() {
        let curve = Curve::p256();
        let point = curve.generator().scalar_mul(&Integer::from(123_456_789));

        assert!(is_on_curve(&curve, &point));
    }

    #[test]
    fn test_scalar_mul_by_group_order_is_identity() {
        let curve = Curve::p256();
        let order = curve.order().clone();

        assert!(curve.generator().scalar_mul(&order).is_identity());
    }

    #[test]
    fn test_scalar_div_undoes_scalar_mul() {
        let curve = Curve::p256();
        let generator = curve.generator();
        let k = Integer::from(7);

        let multiplied = generator.scalar_mul(&k);
        assert_eq!(multiplied.scalar_div(&k).unwrap(), generator);
    }

    #[test]
    fn test_scalar_div_by_zero_fails() {
        let curve = Curve::p256();

        assert_eq!(
            curve.generator().scalar_div(&Integer::new()),
            Err(NonInvertibleError)
        );
        assert_eq!(
            curve.generator().scalar_div(&curve.order().clone()),
            Err(NonInvertibleError)
        );
    }

    #[test]
    #[should_panic(expected = "different curves")]
    fn test_adding_points_of_different_curves_panics() {
        let curve = Curve::p256();
        let mut renamed = Curve::p256();
        renamed.name = "P-256-variant";

        let _ = curve
            .generator()
            .add(&CurvePoint::new(Integer::new(), Integer::new(), renamed));
    }

    #[test]
    fn test_serde_round_trip_keeps_parameters() {
        let curve = Curve::p256();
        let round_tripped: Curve =
            bincode::deserialize(&bincode::serialize(&curve).unwrap()).unwrap();

        assert_eq!(round_tripped, curve);
    }
}
