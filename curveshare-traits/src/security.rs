/// The number of bits of security as compared to the AES cryptosystem. Check
/// <https://www.keylength.com/en/4/> for recommendations.
pub enum BitsOfSecurity {
    /// Security that is equivalent to the security of the 2TDEA cryptosystem. This choice of
    /// parameters is not secure and is only used for legacy.
    AES80,
    /// This level of security is expected to be safe until 2030.
    AES112,
    /// Security that is equivalent to that of 128 bits in the AES cryptosystem. This level of
    /// security is expected to be safe until 2030 & beyond.
    AES128,
    /// Security that is equivalent to that of 192 bits in the AES cryptosystem. This level of
    /// security is expected to be safe until 2030 & beyond.
    AES192,
    /// Security that is equivalent to that of 256 bits in the AES cryptosystem. This level of
    /// security is expected to be safe until 2030 & beyond.
    AES256,
    /// Security that is equivalent to a number of bits `group_bits` in accordance to the size of
    /// an elliptic-curve group order.
    Other {
        /// The number of bits in the curve's group order.
        group_bits: u64,
    },
}

impl BitsOfSecurity {
    /// Returns the required elliptic-curve group order size in bits for a given symmetric
    /// security level.
    pub fn to_group_order_bit_length(&self) -> u64 {
        match self {
            Self::AES80 => 160,
            Self::AES112 => 224,
            Self::AES128 => 256,
            Self::AES192 => 384,
            Self::AES256 => 512,
            Self::Other { group_bits } => *group_bits,
        }
    }
}

impl Default for BitsOfSecurity {
    fn default() -> Self {
        Self::AES128
    }
}
