//! This module contains the implementation of string conversion.

use super::float::{NarrowFloat, Semantics, SpecialKind};
use core::fmt::Display;

impl Display for NarrowFloat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.get_sign() { "-" } else { "+" };
        match self {
            NarrowFloat::Special {
                kind: SpecialKind::NaN,
                ..
            } => write!(f, "[{}NaN]", sign),
            NarrowFloat::Special {
                kind: SpecialKind::Infinity,
                ..
            } => write!(f, "[{}Inf]", sign),
            NarrowFloat::Special {
                kind: SpecialKind::Zero,
                ..
            } => write!(f, "[{}0.0]", sign),
            NarrowFloat::Finite { exp, sig, .. } => {
                write!(
                    f,
                    "[{} E={:3} S=0x{:03x}] = {:e}",
                    sign,
                    exp,
                    sig,
                    self.as_f64()
                )
            }
        }
    }
}

impl Display for Semantics {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "(exponent:{} precision:{} bias:{})",
            self.get_exponent_len(),
            self.get_precision(),
            self.get_bias()
        )
    }
}

#[cfg(feature = "std")]
#[test]
fn test_display_specials() {
    use std::string::ToString;

    assert_eq!(NarrowFloat::nan(false).to_string(), "[+NaN]");
    assert_eq!(NarrowFloat::inf(true).to_string(), "[-Inf]");
    assert_eq!(NarrowFloat::zero(true).to_string(), "[-0.0]");
    assert_eq!(NarrowFloat::zero(false).to_string(), "[+0.0]");
}

#[cfg(feature = "std")]
#[test]
fn test_display_finite() {
    use std::string::ToString;

    let (high, _) = super::cast::decompose(1.0);
    assert_eq!(high.to_string(), "[+ E=139 S=0x800] = 1e0");

    use super::float::E9S12;
    assert_eq!(E9S12.to_string(), "(exponent:9 precision:12 bias:139)");
}
