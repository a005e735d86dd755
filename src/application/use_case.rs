use crate::application::factory::PaymentStrategyFactory;
use crate::domain::order::{Amount, Order, PaymentMethod};
use crate::domain::payment::{Payment, PaymentResult};
use crate::domain::ports::{PaymentRepository, PaymentRepositoryBox, PaymentStrategy};
use crate::error::Result;
use rust_decimal::Decimal;

/// The caller-facing entry point for charging an order.
///
/// `ProcessPaymentUseCase` resolves a strategy for the requested method, runs
/// it, and records the outcome in the repository it owns. Every step is
/// awaited in order; nothing is saved unless the strategy succeeded.
pub struct ProcessPaymentUseCase {
    repository: PaymentRepositoryBox,
    factory: PaymentStrategyFactory,
}

impl ProcessPaymentUseCase {
    /// Creates a use case backed by the built-in strategies.
    ///
    /// # Arguments
    ///
    /// * `repository` - Where processed payments are stored.
    pub fn new(repository: PaymentRepositoryBox) -> Self {
        Self::with_factory(repository, PaymentStrategyFactory::default())
    }

    pub fn with_factory(repository: PaymentRepositoryBox, factory: PaymentStrategyFactory) -> Self {
        Self {
            repository,
            factory,
        }
    }

    pub fn repository(&self) -> &PaymentRepositoryBox {
        &self.repository
    }

    /// Charges `amount` using the strategy registered for `method`.
    ///
    /// An unknown method is rejected before anything else happens, so neither
    /// the strategy nor the repository is touched.
    pub async fn execute(&self, amount: Decimal, method: &str) -> Result<PaymentResult> {
        let strategy = self.factory.get_strategy(method)?;
        let selected: PaymentMethod = method.parse()?;
        let amount = Amount::new(amount)?;
        let order = Order::new(selected, amount);

        tracing::debug!(method = %order.method(), amount = %amount, "Processing payment");
        let result = strategy.process_payment(&order).await?;

        let payment = Payment::new(order.method(), result.status, order.amount());
        self.repository.save(payment).await?;

        tracing::info!(
            method = %order.method(),
            status = %result.status,
            amount = %amount,
            "Payment recorded"
        );
        Ok(result)
    }

    /// Same as [`execute`](Self::execute) for an already validated order.
    pub async fn execute_order(&self, order: &Order) -> Result<PaymentResult> {
        self.execute(order.amount().value(), order.method().as_str())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentStatus;
    use crate::error::PaymentError;
    use crate::infrastructure::in_memory::InMemoryPaymentRepository;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    struct FailingRepository;

    #[async_trait]
    impl PaymentRepository for FailingRepository {
        async fn save(&self, _payment: Payment) -> Result<()> {
            Err(PaymentError::StorageError(Box::new(std::io::Error::other(
                "disk full",
            ))))
        }

        async fn all(&self) -> Result<Vec<Payment>> {
            Ok(Vec::new())
        }
    }

    struct GatewayDown;

    #[async_trait]
    impl PaymentStrategy for GatewayDown {
        fn method(&self) -> PaymentMethod {
            PaymentMethod::CreditCard
        }

        async fn process_payment(&self, _order: &Order) -> Result<PaymentResult> {
            Err(PaymentError::PaymentProcessingError(
                "gateway timeout".to_string(),
            ))
        }
    }

    struct Declining;

    #[async_trait]
    impl PaymentStrategy for Declining {
        fn method(&self) -> PaymentMethod {
            PaymentMethod::CreditCard
        }

        async fn process_payment(&self, order: &Order) -> Result<PaymentResult> {
            Ok(PaymentResult::for_order(
                order,
                PaymentStatus::Declined,
                "insufficient limit",
            ))
        }
    }

    /// Reports a method other than the one it is registered under.
    struct Mislabelled;

    #[async_trait]
    impl PaymentStrategy for Mislabelled {
        fn method(&self) -> PaymentMethod {
            PaymentMethod::Boleto
        }

        async fn process_payment(&self, order: &Order) -> Result<PaymentResult> {
            Ok(PaymentResult::for_order(
                order,
                PaymentStatus::Pending,
                "queued",
            ))
        }
    }

    fn setup() -> (ProcessPaymentUseCase, InMemoryPaymentRepository) {
        let repo = InMemoryPaymentRepository::new();
        (ProcessPaymentUseCase::new(Box::new(repo.clone())), repo)
    }

    #[tokio::test]
    async fn test_use_case_executes_and_saves_with_pix() {
        let (use_case, repo) = setup();

        let result = use_case.execute(dec!(100.0), "pix").await.unwrap();
        assert_eq!(result.status, PaymentStatus::Approved);

        let saved = repo.all().await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].method(), PaymentMethod::Pix);
        assert_eq!(saved[0].status(), PaymentStatus::Approved);
        assert_eq!(saved[0].amount().value(), dec!(100.0));
    }

    #[tokio::test]
    async fn test_unknown_method_saves_nothing() {
        let (use_case, repo) = setup();

        let result = use_case.execute(dec!(50.0), "unknown_method").await;
        assert!(matches!(
            result,
            Err(PaymentError::UnsupportedPaymentMethod(ref m)) if m == "unknown_method"
        ));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_non_positive_amount_saves_nothing() {
        let (use_case, repo) = setup();

        let result = use_case.execute(dec!(0), "boleto").await;
        assert!(matches!(result, Err(PaymentError::ValidationError(_))));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_every_method_saves_one_matching_record() {
        for method in PaymentMethod::ALL {
            let (use_case, repo) = setup();

            let result = use_case.execute(dec!(12.34), method.as_str()).await.unwrap();

            let saved = repo.all().await.unwrap();
            assert_eq!(saved.len(), 1);
            assert_eq!(saved[0].method(), method);
            assert_eq!(saved[0].status(), result.status);
        }
    }

    #[tokio::test]
    async fn test_repeated_execution_is_not_deduplicated() {
        let (use_case, repo) = setup();

        use_case.execute(dec!(10.0), "credit_card").await.unwrap();
        use_case.execute(dec!(10.0), "credit_card").await.unwrap();

        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_declined_status_is_recorded() {
        let repo = InMemoryPaymentRepository::new();
        let mut factory = PaymentStrategyFactory::default();
        factory.register(PaymentMethod::CreditCard, || Box::new(Declining));
        let use_case = ProcessPaymentUseCase::with_factory(Box::new(repo.clone()), factory);

        let result = use_case.execute(dec!(999.0), "credit_card").await.unwrap();
        assert_eq!(result.status, PaymentStatus::Declined);

        let saved = repo.all().await.unwrap();
        assert_eq!(saved[0].status(), PaymentStatus::Declined);
    }

    #[tokio::test]
    async fn test_recorded_method_follows_requested_identifier() {
        let repo = InMemoryPaymentRepository::new();
        let mut factory = PaymentStrategyFactory::default();
        factory.register(PaymentMethod::Pix, || Box::new(Mislabelled));
        let use_case = ProcessPaymentUseCase::with_factory(Box::new(repo.clone()), factory);

        let result = use_case.execute(dec!(20.0), "pix").await.unwrap();
        assert_eq!(result.status, PaymentStatus::Pending);

        let saved = repo.all().await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].method(), PaymentMethod::Pix);
        assert_eq!(saved[0].status(), PaymentStatus::Pending);
    }

    #[tokio::test]
    async fn test_strategy_failure_saves_nothing() {
        let repo = InMemoryPaymentRepository::new();
        let mut factory = PaymentStrategyFactory::default();
        factory.register(PaymentMethod::CreditCard, || Box::new(GatewayDown));
        let use_case = ProcessPaymentUseCase::with_factory(Box::new(repo.clone()), factory);

        let result = use_case.execute(dec!(5.0), "credit_card").await;
        assert!(matches!(
            result,
            Err(PaymentError::PaymentProcessingError(_))
        ));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_storage_failure_is_propagated() {
        let use_case = ProcessPaymentUseCase::new(Box::new(FailingRepository));

        let result = use_case.execute(dec!(5.0), "pix").await;
        assert!(matches!(result, Err(PaymentError::StorageError(_))));
    }

    #[tokio::test]
    async fn test_execute_order() {
        let (use_case, repo) = setup();
        let order = Order::new(PaymentMethod::Boleto, Amount::new(dec!(80.0)).unwrap());

        let result = use_case.execute_order(&order).await.unwrap();
        assert_eq!(result.method, PaymentMethod::Boleto);
        assert_eq!(repo.len().await, 1);
    }
}
