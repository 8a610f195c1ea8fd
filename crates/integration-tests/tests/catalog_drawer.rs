//! Integration tests for the catalog page and its cart drawer.
//!
//! Run with: cargo test -p shop-chain-integration-tests

use reqwest::StatusCode;
use shop_chain_integration_tests::TestContext;

#[tokio::test]
async fn test_drawer_closed_until_first_add() {
    let ctx = TestContext::start().await;

    let html = ctx.page("/shop").await;
    assert!(html.contains("Showing 1–6 of 6 results"));
    assert!(!html.contains("Your Cart"));

    let html = ctx.post_product("/shop/cart/add", 2).await;
    assert!(html.contains("Your Cart (1)"));
    assert!(html.contains("Total: ₹1299"));
}

#[tokio::test]
async fn test_quantity_walkthrough() {
    let ctx = TestContext::start().await;

    let html = ctx.post_product("/shop/cart/add", 1).await;
    assert!(html.contains("Total: ₹2499"));

    let html = ctx.post_product("/shop/cart/add", 1).await;
    assert!(html.contains("Your Cart (2)"));
    assert!(html.contains("Qty 2"));
    assert!(html.contains("Total: ₹4998"));

    let html = ctx.post_product("/shop/cart/decrease", 1).await;
    assert!(html.contains("Qty 1"));
    assert!(html.contains("Total: ₹2499"));

    // Already at one: nothing changes.
    let html = ctx.post_product("/shop/cart/decrease", 1).await;
    assert!(html.contains("Qty 1"));
    assert!(html.contains("Total: ₹2499"));

    let html = ctx.post_product("/shop/cart/remove", 1).await;
    assert!(html.contains("Your cart is empty."));
}

#[tokio::test]
async fn test_increase_twice() {
    let ctx = TestContext::start().await;

    ctx.post_product("/shop/cart/add", 2).await;
    ctx.post_product("/shop/cart/increase", 2).await;
    let html = ctx.post_product("/shop/cart/increase", 2).await;
    assert!(html.contains("Qty 3"));
    assert!(html.contains("Total: ₹3897"));
}

#[tokio::test]
async fn test_total_ignores_listing_discount() {
    let ctx = TestContext::start().await;

    let html = ctx.post_product("/shop/cart/add", 1).await;
    // Listing shows the discounted price, the drawer charges the full one.
    assert!(html.contains("₹2249.1"));
    assert!(html.contains("Total: ₹2499"));
}

#[tokio::test]
async fn test_close_hides_drawer_and_keeps_cart() {
    let ctx = TestContext::start().await;

    ctx.post_product("/shop/cart/add", 3).await;
    let resp = ctx
        .client
        .post(ctx.url("/shop/cart/close"))
        .send()
        .await
        .expect("close request");
    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.expect("body");
    assert!(!html.contains("Your Cart"));

    // Re-adding shows the earlier line was kept.
    let html = ctx.post_product("/shop/cart/add", 3).await;
    assert!(html.contains("Your Cart (2)"));
}

#[tokio::test]
async fn test_add_unknown_product() {
    let ctx = TestContext::start().await;

    let resp = ctx
        .client
        .post(ctx.url("/shop/cart/add"))
        .form(&[("product_id", 4242)])
        .send()
        .await
        .expect("add request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_line_actions_on_missing_product_are_noops() {
    let ctx = TestContext::start().await;

    ctx.post_product("/shop/cart/add", 6).await;
    let html = ctx.post_product("/shop/cart/remove", 4242).await;
    assert!(html.contains("Your Cart (1)"));
    assert!(html.contains("Total: ₹999"));
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_concurrent_edits_on_both_pages_all_apply() {
    let ctx = TestContext::start().await;
    ctx.page("/cart").await;

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..100 {
        let ctx = ctx.clone();
        tasks.spawn(async move {
            if i % 2 == 0 {
                ctx.post_product("/shop/cart/add", 1).await;
            } else {
                ctx.post_product("/cart/increase", 2).await;
            }
        });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap();
    }

    let html = ctx.page("/shop").await;
    assert!(html.contains("Your Cart (50)"));
    // 50 * 2499
    assert!(html.contains("Total: ₹124950"));

    let html = ctx.page("/cart").await;
    assert!(html.contains("Qty 51"));
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_product_images_are_served() {
    let ctx = TestContext::start().await;

    let html = ctx.page("/shop").await;
    assert!(html.contains("/static/photos/twisted-gold-bangle.svg"));

    let resp = ctx
        .client
        .get(ctx.url("/static/photos/twisted-gold-bangle.svg"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
