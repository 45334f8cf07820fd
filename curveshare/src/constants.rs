//! Domain parameters of the named curves, as hexadecimal strings.

/// Prime modulus of the NIST P-256 base field.
pub(crate) const P256_FIELD_MODULUS: &str =
    "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

/// Coefficient `a` of the NIST P-256 curve equation, congruent to -3.
pub(crate) const P256_COEFFICIENT_A: &str =
    "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc";

/// Coefficient `b` of the NIST P-256 curve equation.
pub(crate) const P256_COEFFICIENT_B: &str =
    "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b";

/// Order of the NIST P-256 group, a 256-bit prime.
pub(crate) const P256_GROUP_ORDER: &str =
    "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551";

/// x-coordinate of the NIST P-256 base point.
pub(crate) const P256_GENERATOR_X: &str =
    "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";

/// y-coordinate of the NIST P-256 base point.
pub(crate) const P256_GENERATOR_Y: &str =
    "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";
