mod common;

use uuid::Uuid;

use clubdesk_api::error::ServiceError;
use clubdesk_api::models::abonnement::{PaymentStatus, RecordPaymentRequest};
use clubdesk_api::services::{abonnements::AbonnementService, payments::PaymentService};

use common::*;

fn payment(amount: &str, method: &str) -> RecordPaymentRequest {
    RecordPaymentRequest {
        amount: amount.into(),
        method: method.into(),
        bank_name: None,
        account_ref: None,
        note: None,
    }
}

#[tokio::test]
async fn payments_accumulate_up_to_the_price_due() {
    let pool = test_pool().await;
    let adherent = seed_adherent(&pool, "Petit").await;
    let abonnement = seed_abonnement(&pool, adherent, "1000.00").await;

    let receipt = PaymentService::record(&pool, abonnement, &payment("400.00", "cash"))
        .await
        .unwrap();
    assert_eq!(receipt.amount_paid, "400.00");
    assert_eq!(receipt.remaining, "600.00");
    assert_eq!(receipt.status, PaymentStatus::PartialPaid);

    let receipt = PaymentService::record(&pool, abonnement, &payment("600.00", "transfer"))
        .await
        .unwrap();
    assert_eq!(receipt.amount_paid, "1000.00");
    assert_eq!(receipt.remaining, "0.00");
    assert_eq!(receipt.status, PaymentStatus::Paid);

    // Even one cent over the due amount is rejected and nothing moves.
    let err = PaymentService::record(&pool, abonnement, &payment("0.01", "cash"))
        .await
        .unwrap_err();
    match err {
        ServiceError::Overpayment { attempted, remaining } => {
            assert_eq!(attempted, 1);
            assert_eq!(remaining, 0);
        }
        other => panic!("expected Overpayment, got {other:?}"),
    }

    let view = AbonnementService::get(&pool, abonnement).await.unwrap();
    assert_eq!(view.amount_paid, "1000.00");
    assert_eq!(view.status, PaymentStatus::Paid);
}

#[tokio::test]
async fn overpayment_message_names_both_amounts() {
    let pool = test_pool().await;
    let adherent = seed_adherent(&pool, "Moreau").await;
    let abonnement = seed_abonnement(&pool, adherent, "100.00").await;

    let err = PaymentService::record(&pool, abonnement, &payment("150.00", "cash"))
        .await
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("150.00"), "message should name the attempted amount: {msg}");
    assert!(msg.contains("100.00"), "message should name the remaining balance: {msg}");
}

#[tokio::test]
async fn non_positive_or_malformed_amounts_are_rejected() {
    let pool = test_pool().await;
    let adherent = seed_adherent(&pool, "Durand").await;
    let abonnement = seed_abonnement(&pool, adherent, "100.00").await;

    for bad in ["0.00", "-5.00", "abc", "1.234"] {
        let err = PaymentService::record(&pool, abonnement, &payment(bad, "cash"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, ServiceError::Validation(_)),
            "amount {bad:?} should be rejected as validation"
        );
    }

    let view = AbonnementService::get(&pool, abonnement).await.unwrap();
    assert_eq!(view.amount_paid, "0.00");
    assert_eq!(view.status, PaymentStatus::Unpaid);
}

#[tokio::test]
async fn unknown_subscription_is_not_found() {
    let pool = test_pool().await;
    let err = PaymentService::record(&pool, Uuid::new_v4(), &payment("10.00", "cash"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "abonnement", .. }));
}

#[tokio::test]
async fn payment_metadata_is_stored_with_the_balance_change() {
    let pool = test_pool().await;
    let adherent = seed_adherent(&pool, "Bernard").await;
    let abonnement = seed_abonnement(&pool, adherent, "200.00").await;

    let req = RecordPaymentRequest {
        amount: "50.00".into(),
        method: "transfer".into(),
        bank_name: Some("Banque Populaire".into()),
        account_ref: Some("FR76-0000-1111".into()),
        note: Some("september installment".into()),
    };
    PaymentService::record(&pool, abonnement, &req).await.unwrap();

    let view = AbonnementService::get(&pool, abonnement).await.unwrap();
    assert_eq!(view.payment_method.as_deref(), Some("transfer"));
    assert_eq!(view.bank_name.as_deref(), Some("Banque Populaire"));
    assert_eq!(view.account_ref.as_deref(), Some("FR76-0000-1111"));

    // A later payment without metadata keeps what was stored.
    PaymentService::record(&pool, abonnement, &payment("25.00", "cash"))
        .await
        .unwrap();
    let view = AbonnementService::get(&pool, abonnement).await.unwrap();
    assert_eq!(view.payment_method.as_deref(), Some("cash"));
    assert_eq!(view.bank_name.as_deref(), Some("Banque Populaire"));
}

#[tokio::test]
async fn concurrent_payments_never_overshoot_the_due_amount() {
    let pool = test_pool().await;
    let adherent = seed_adherent(&pool, "Martin").await;
    let abonnement = seed_abonnement(&pool, adherent, "500.00").await;

    let (p1, p2) = (pool.clone(), pool.clone());
    let a = tokio::spawn(async move {
        PaymentService::record(&p1, abonnement, &payment("300.00", "cash")).await
    });
    let b = tokio::spawn(async move {
        PaymentService::record(&p2, abonnement, &payment("300.00", "transfer")).await
    });
    let (ra, rb) = (a.await.unwrap(), b.await.unwrap());

    let successes = [&ra, &rb].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one of the two payments must be admitted");
    let rejected = if ra.is_err() { ra } else { rb };
    assert!(
        matches!(rejected, Err(ServiceError::Overpayment { .. })),
        "the losing payment must be rejected as overpayment"
    );

    let view = AbonnementService::get(&pool, abonnement).await.unwrap();
    assert_eq!(view.amount_paid, "300.00");
    assert_eq!(view.remaining, "200.00");
    assert_eq!(view.status, PaymentStatus::PartialPaid);
}
