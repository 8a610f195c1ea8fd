//! Integration tests for the standalone cart page.
//!
//! Run with: cargo test -p shop-chain-integration-tests

use shop_chain_integration_tests::TestContext;

const PRODUCT_NAMES: [&str; 6] = [
    "Twisted Gold Bangle",
    "Pearl Drop Earrings",
    "Layered Chain Necklace",
    "Ruby Heart Pendant",
    "Kundan Bridal Set",
    "Silver Charm Bracelet",
];

#[tokio::test]
async fn test_seeded_with_whole_catalog() {
    let ctx = TestContext::start().await;

    let html = ctx.page("/cart").await;
    for name in PRODUCT_NAMES {
        assert!(html.contains(name), "missing {name}");
    }
    assert_eq!(html.matches("Qty 1").count(), PRODUCT_NAMES.len());
    assert!(html.contains("Subtotal: ₹18894"));
    assert!(html.contains("Checkout"));
    assert!(html.contains("Continue Shopping"));
}

#[tokio::test]
async fn test_edits_survive_reload() {
    let ctx = TestContext::start().await;

    ctx.page("/cart").await;
    ctx.post_product("/cart/increase", 6).await;
    ctx.post_product("/cart/increase", 6).await;
    ctx.post_product("/cart/remove", 5).await;

    let html = ctx.page("/cart").await;
    assert!(html.contains("Qty 3"));
    assert!(!html.contains("Kundan Bridal Set"));
    // 18894 - 8999 + 2 * 999
    assert!(html.contains("Subtotal: ₹11893"));
}

#[tokio::test]
async fn test_decrease_floors_at_one() {
    let ctx = TestContext::start().await;

    let html = ctx.post_product("/cart/decrease", 2).await;
    assert_eq!(html.matches("Qty 1").count(), PRODUCT_NAMES.len());
    assert!(html.contains("Subtotal: ₹18894"));
}

#[tokio::test]
async fn test_remove_everything() {
    let ctx = TestContext::start().await;

    let mut html = ctx.page("/cart").await;
    for id in 1..=6 {
        html = ctx.post_product("/cart/remove", id).await;
    }
    for name in PRODUCT_NAMES {
        assert!(!html.contains(name));
    }
    assert!(html.contains("Subtotal: ₹0"));
}

#[tokio::test]
async fn test_independent_of_drawer_cart() {
    let ctx = TestContext::start().await;

    ctx.post_product("/shop/cart/add", 1).await;
    ctx.post_product("/shop/cart/add", 1).await;

    let html = ctx.page("/cart").await;
    assert_eq!(html.matches("Qty 1").count(), PRODUCT_NAMES.len());
    assert!(html.contains("Subtotal: ₹18894"));

    ctx.post_product("/cart/remove", 1).await;
    let html = ctx.page("/shop").await;
    assert!(html.contains("Your Cart (2)"));
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_concurrent_increases_all_apply() {
    let ctx = TestContext::start().await;
    ctx.page("/cart").await;

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..100 {
        let ctx = ctx.clone();
        tasks.spawn(async move {
            ctx.post_product("/cart/increase", 6).await;
        });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap();
    }

    let html = ctx.page("/cart").await;
    assert!(html.contains("Qty 101"));
    assert_eq!(html.matches("Qty 1<").count() + html.matches("Qty 101").count(), 6);
    // 18894 + 100 * 999
    assert!(html.contains("Subtotal: ₹118794"));
}
