use crate::domain::order::PaymentMethod;
use crate::domain::ports::{PaymentStrategyBox, StrategyConstructor};
use crate::error::{PaymentError, Result};
use crate::infrastructure::strategies::{BoletoStrategy, CreditCardStrategy, PixStrategy};
use std::collections::HashMap;

/// Builds a payment strategy from a method identifier.
///
/// Holds one constructor per [`PaymentMethod`]. Each call to
/// [`get_strategy`](Self::get_strategy) returns a fresh instance.
pub struct PaymentStrategyFactory {
    constructors: HashMap<PaymentMethod, StrategyConstructor>,
}

impl Default for PaymentStrategyFactory {
    /// A factory wired to the built-in Pix, credit card and boleto strategies.
    fn default() -> Self {
        let mut factory = Self::empty();
        factory.register(PaymentMethod::Pix, || Box::new(PixStrategy));
        factory.register(PaymentMethod::CreditCard, || Box::new(CreditCardStrategy));
        factory.register(PaymentMethod::Boleto, || Box::new(BoletoStrategy));
        factory
    }
}

impl PaymentStrategyFactory {
    pub fn new() -> Self {
        Self::default()
    }

    fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Replaces the constructor used for `method`.
    pub fn register<F>(&mut self, method: PaymentMethod, constructor: F)
    where
        F: Fn() -> PaymentStrategyBox + Send + Sync + 'static,
    {
        let constructor: StrategyConstructor = Box::new(constructor);
        self.constructors.insert(method, constructor);
    }

    /// Resolves `method` to a newly constructed strategy.
    ///
    /// Fails with [`PaymentError::UnsupportedPaymentMethod`] when the identifier
    /// is not one of `pix`, `credit_card` or `boleto`.
    pub fn get_strategy(&self, method: &str) -> Result<PaymentStrategyBox> {
        self.strategy_for(method.parse()?)
    }

    /// Same as [`get_strategy`](Self::get_strategy) for an already parsed method.
    pub fn strategy_for(&self, method: PaymentMethod) -> Result<PaymentStrategyBox> {
        self.constructors
            .get(&method)
            .map(|constructor| constructor())
            .ok_or_else(|| PaymentError::UnsupportedPaymentMethod(method.to_string()))
    }

    pub fn supported_methods(&self) -> Vec<PaymentMethod> {
        PaymentMethod::ALL
            .into_iter()
            .filter(|method| self.constructors.contains_key(method))
            .collect()
    }
}
