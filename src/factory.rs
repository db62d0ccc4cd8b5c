//! Abstract factory: one factory per manufacturer, each building one product
//! of every phone family.

use std::rc::Rc;

use tracing::debug;

use crate::manufacturer::Manufacturer;
use crate::phones::{
    BasicPhone, HtcBasicPhone, HtcSmartphone, NokiaBasicPhone, NokiaSmartphone, SamsungBasicPhone,
    SamsungSmartphone, Smartphone,
};

pub trait PhoneFactory {
    fn manufacturer(&self) -> Manufacturer;
    fn create_smartphone(&self, name: &str) -> Rc<dyn Smartphone>;
    fn create_basic_phone(&self, name: &str) -> Rc<dyn BasicPhone>;
}

impl Manufacturer {
    pub fn factory(&self) -> Rc<dyn PhoneFactory> {
        match self {
            Manufacturer::Nokia => Rc::new(NokiaFactory),
            Manufacturer::Samsung => Rc::new(SamsungFactory),
            Manufacturer::Htc => Rc::new(HtcFactory),
        }
    }
}

macro_rules! phone_factory {
    ($factory:ident, $maker:ident, $smartphone:ident, $basic:ident) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $factory;

        impl PhoneFactory for $factory {
            fn manufacturer(&self) -> Manufacturer {
                Manufacturer::$maker
            }

            fn create_smartphone(&self, name: &str) -> Rc<dyn Smartphone> {
                debug!(manufacturer = %Manufacturer::$maker, name, "creating smartphone");
                Rc::new($smartphone::new(name))
            }

            fn create_basic_phone(&self, name: &str) -> Rc<dyn BasicPhone> {
                debug!(manufacturer = %Manufacturer::$maker, name, "creating basic phone");
                Rc::new($basic::new(name))
            }
        }
    };
}

phone_factory!(NokiaFactory, Nokia, NokiaSmartphone, NokiaBasicPhone);
phone_factory!(SamsungFactory, Samsung, SamsungSmartphone, SamsungBasicPhone);
phone_factory!(HtcFactory, Htc, HtcSmartphone, HtcBasicPhone);
