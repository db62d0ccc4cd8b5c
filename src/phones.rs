//! Phone products, split into two families.
//!
//! `Smartphone` and `BasicPhone` carry no behavior of their own. They exist
//! so a factory's two creation methods return different types, which keeps
//! a basic phone from being passed where a smartphone is expected.

use std::fmt;

use crate::manufacturer::Manufacturer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneFamily {
    Smartphone,
    Basic,
}

impl fmt::Display for PhoneFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneFamily::Smartphone => write!(f, "Smartphone"),
            PhoneFamily::Basic => write!(f, "Basic Phone"),
        }
    }
}

pub trait Phone: fmt::Debug {
    /// The name given at construction, unchanged.
    fn name(&self) -> &str;
    fn manufacturer(&self) -> Manufacturer;
    fn family(&self) -> PhoneFamily;
}

pub trait Smartphone: Phone {}

pub trait BasicPhone: Phone {}

macro_rules! phone_product {
    ($product:ident, $maker:ident, Smartphone) => {
        phone_product!(@define $product, $maker, PhoneFamily::Smartphone);
        impl Smartphone for $product {}
    };
    ($product:ident, $maker:ident, BasicPhone) => {
        phone_product!(@define $product, $maker, PhoneFamily::Basic);
        impl BasicPhone for $product {}
    };
    (@define $product:ident, $maker:ident, $family:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $product {
            name: String,
        }

        impl $product {
            pub fn new(name: impl Into<String>) -> Self {
                Self { name: name.into() }
            }
        }

        impl Phone for $product {
            fn name(&self) -> &str {
                &self.name
            }

            fn manufacturer(&self) -> Manufacturer {
                Manufacturer::$maker
            }

            fn family(&self) -> PhoneFamily {
                $family
            }
        }
    };
}

phone_product!(NokiaSmartphone, Nokia, Smartphone);
phone_product!(NokiaBasicPhone, Nokia, BasicPhone);
phone_product!(SamsungSmartphone, Samsung, Smartphone);
phone_product!(SamsungBasicPhone, Samsung, BasicPhone);
phone_product!(HtcSmartphone, Htc, Smartphone);
phone_product!(HtcBasicPhone, Htc, BasicPhone);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_report_their_origin() {
        let phone = SamsungSmartphone::new("Galaxy");
        assert_eq!(phone.name(), "Galaxy");
        assert_eq!(phone.manufacturer(), Manufacturer::Samsung);
        assert_eq!(phone.family(), PhoneFamily::Smartphone);

        let phone = HtcBasicPhone::new("");
        assert_eq!(phone.name(), "");
        assert_eq!(phone.manufacturer(), Manufacturer::Htc);
        assert_eq!(phone.family(), PhoneFamily::Basic);
    }

    #[test]
    fn test_family_display() {
        assert_eq!(PhoneFamily::Smartphone.to_string(), "Smartphone");
        assert_eq!(PhoneFamily::Basic.to_string(), "Basic Phone");
    }
}
