#![warn(missing_docs, unused_imports)]

//! _This is a part of **curveshare**. For more information, head to the
//! [curveshare](https://crates.io/crates/curveshare) crate homepage._
//!
//! This crate implements arithmetic in finite fields of prime order. A [`FieldElement`] carries
//! its value together with the field order, and every operation reduces its result back into
//! `[0, order)`. Operations return new values rather than mutating their operands, so elements
//! can be shared freely between computations and threads.
//!
//! None of the arithmetic in this crate is constant-time.

use curveshare_traits::randomness::{GeneralRng, SecureRng};
use rug::ops::RemRounding;
use rug::Integer;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A finite field of prime order. This is a value object wrapping a single modulus; it is
/// immutable after construction and acts as a factory for reduced [`FieldElement`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    order: Integer,
}

impl Field {
    /// Creates the field of integers modulo `order`. The order is expected to be prime; this is
    /// not verified, but [`FieldElement::invert`] is only well-defined for prime orders.
    ///
    /// Panics if `order` is smaller than 2.
    pub fn new(order: Integer) -> Field {
        assert!(order > 1, "a field order must be at least 2");
        Field { order }
    }

    /// The order of this field.
    pub fn order(&self) -> &Integer {
        &self.order
    }

    /// The additive identity of this field.
    pub fn zero(&self) -> FieldElement {
        self.element(Integer::new())
    }

    /// The multiplicative identity of this field.
    pub fn one(&self) -> FieldElement {
        self.element(Integer::from(1))
    }

    /// Creates the element representing `value`, reduced into `[0, order)`. Negative values
    /// reduce to their non-negative representative.
    pub fn element(&self, value: Integer) -> FieldElement {
        FieldElement {
            value: value.rem_euc(&self.order),
            order: self.order.clone(),
        }
    }

    /// Samples a uniformly random element of this field using a cryptographic RNG.
    pub fn random_element<R: SecureRng>(&self, rng: &mut GeneralRng<R>) -> FieldElement {
        let value = Integer::from(self.order.random_below_ref(&mut rng.rug_rng()));

        FieldElement {
            value,
            order: self.order.clone(),
        }
    }
}

/// An element of a prime-order [`Field`]. The value is always reduced: `0 <= value < order`.
///
/// Elements of different fields must never be combined; the arithmetic operators panic when the
/// orders of their operands differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldElement {
    value: Integer,
    order: Integer,
}

impl FieldElement {
    /// The reduced value of this element.
    pub fn value(&self) -> &Integer {
        &self.value
    }

    /// The order of the field this element belongs to.
    pub fn order(&self) -> &Integer {
        &self.order
    }

    /// Whether this element is the additive identity.
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Computes the multiplicative inverse of this element, the unique element such that
    /// `self * inverse = 1`. Returns `None` for the zero element, which has no inverse.
    pub fn invert(&self) -> Option<FieldElement> {
        Integer::from(&self.value)
            .invert(&self.order)
            .ok()
            .map(|value| FieldElement {
                value,
                order: self.order.clone(),
            })
    }
}

impl Add for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: Self) -> FieldElement {
        assert_eq!(
            self.order, rhs.order,
            "cannot add elements of different fields"
        );

        FieldElement {
            value: Integer::from(&self.value + &rhs.value).rem_euc(&self.order),
            order: self.order.clone(),
        }
    }
}

impl Sub for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: Self) -> FieldElement {
        assert_eq!(
            self.order, rhs.order,
            "cannot subtract elements of different fields"
        );

        FieldElement {
            value: Integer::from(&self.value - &rhs.value).rem_euc(&self.order),
            order: self.order.clone(),
        }
    }
}

impl Mul for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: Self) -> FieldElement {
        assert_eq!(
            self.order, rhs.order,
            "cannot multiply elements of different fields"
        );

        FieldElement {
            value: Integer::from(&self.value * &rhs.value).rem_euc(&self.order),
            order: self.order.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Field;
    use curveshare_traits::randomness::GeneralRng;
    use rand_core::OsRng;
    use rug::Integer;

    #[test]
    fn test_element_reduces_value() {
        let f2 = Field::new(Integer::from(2));
        assert_eq!(*f2.element(Integer::from(17)).value(), 1);
        assert_eq!(*f2.element(Integer::from(256)).value(), 0);

        let f7 = Field::new(Integer::from(7));
        assert_eq!(*f7.element(Integer::from(8)).value(), 1);
        assert_eq!(*f7.element(Integer::from(6)).value(), 6);
        assert_eq!(*f7.element(Integer::from(14)).value(), 0);
        assert_eq!(*f7.element(Integer::from(25)).value(), 4);
    }

    #[test]
    fn test_element_reduces_negative_value() {
        let f7 = Field::new(Integer::from(7));
        assert_eq!(*f7.element(Integer::from(-5)).value(), 2);
        assert_eq!(*f7.element(Integer::from(-14)).value(), 0);
    }

    #[test]
    fn test_add() {
        let f2 = Field::new(Integer::from(2));
        let a = f2.element(Integer::from(1));
        let b = f2.element(Integer::from(2));
        assert_eq!(*(&a + &b).value(), 1);

        let c = f2.element(Integer::from(5189));
        assert_eq!(*(&c + &b).value(), 1);

        let d = f2.element(Integer::from(147));
        assert_eq!(*(&d + &a).value(), 0);
    }

    #[test]
    fn test_sub_wraps_around() {
        let f7 = Field::new(Integer::from(7));
        let a = f7.element(Integer::from(2));
        let b = f7.element(Integer::from(5));
        assert_eq!(*(&a - &b).value(), 4);
    }

    #[test]
    fn test_mul() {
        let f7 = Field::new(Integer::from(7));
        let a = f7.element(Integer::from(3));
        let b = f7.element(Integer::from(5));
        assert_eq!(*(&a * &b).value(), 1);
        assert_eq!(*(&a * &f7.zero()).value(), 0);
        assert_eq!(*(&a * &f7.one()).value(), 3);
    }

    #[test]
    fn test_invert() {
        let f13 = Field::new(Integer::from(13));
        let a = f13.element(Integer::from(3));

        assert_eq!(*a.invert().unwrap().value(), 9);
    }

    #[test]
    fn test_invert_zero_is_none() {
        let f13 = Field::new(Integer::from(13));

        assert!(f13.zero().is_zero());
        assert!(f13.zero().invert().is_none());
    }

    #[test]
    fn test_mul_with_inverse_is_one() {
        let f13 = Field::new(Integer::from(13));

        for value in 1..13 {
            let a = f13.element(Integer::from(value));
            let inverse = a.invert().unwrap();
            assert_eq!(&a * &inverse, f13.one());
        }
    }

    #[test]
    #[should_panic(expected = "different fields")]
    fn test_mixing_fields_panics() {
        let f7 = Field::new(Integer::from(7));
        let f13 = Field::new(Integer::from(13));

        let _ = &f7.one() + &f13.one();
    }

    #[test]
    fn test_random_element_is_reduced() {
        let mut rng = GeneralRng::new(OsRng);
        let field = Field::new(Integer::from(251));

        for _ in 0..100 {
            let element = field.random_element(&mut rng);
            assert!(*element.value() >= 0);
            assert!(element.value() < field.order());
        }
    }
}
