// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end wiring tests using mock collaborators.
//!
//! Exercises the store, janitor, and alarm registry together the way
//! `serve` wires them, without touching Telegram or Gemini.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use saathi_alarm::{AlarmRegistry, fire};
use saathi_core::ReplyProvider;
use saathi_core::types::{AlarmSpec, UserId};
use saathi_memory::{ConversationStore, Janitor};
use saathi_test_utils::{CannedReplyProvider, MockDeliverer};

#[tokio::test]
async fn conversation_flow_feeds_provider_context() {
    let store = Arc::new(ConversationStore::new());
    let provider = CannedReplyProvider::new("theek hai");

    let user = UserId(42);
    store.add(user, "photosynthesis kya hai?").await;
    let reply = provider.generate_reply(user, "aur detail mein batao").await;

    assert_eq!(reply, "theek hai");
    assert_eq!(store.recent(user, 6).await.len(), 1);
    assert_eq!(
        provider.asked().await,
        vec![(user, "aur detail mein batao".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn janitor_keeps_store_bounded_while_alarms_run() {
    let store = Arc::new(ConversationStore::new());
    let deliverer = Arc::new(MockDeliverer::new());
    let registry = AlarmRegistry::new(deliverer.clone());

    let user = UserId(7);
    registry.set(user, 6, 0, "uth jao").await.unwrap();

    // One stale and one fresh message; a sweep interval passes.
    store.add_at(user, "stale", 0).await;
    store
        .add_at(user, "fresh", chrono::Utc::now().timestamp())
        .await;

    let janitor = Janitor::new(store.clone(), 3600, Duration::from_secs(600));
    let cancel = CancellationToken::new();
    janitor.start(cancel.clone());
    tokio::time::sleep(Duration::from_secs(601)).await;

    let remaining = store.recent(user, 10).await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].text, "fresh");

    // The alarm slot is untouched by memory eviction.
    assert_eq!(registry.get(user).await.unwrap().hour, 6);
    cancel.cancel();
}

#[tokio::test]
async fn alarm_fire_reaches_the_deliverer() {
    let deliverer = MockDeliverer::new();
    let spec = AlarmSpec::new(UserId(9), 21, 15, "revision time").unwrap();

    fire(&deliverer, &spec).await;

    let delivered = deliverer.delivered().await;
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].0, UserId(9));
    assert_eq!(delivered[0].1, "⏰ Reminder: revision time");
}

#[tokio::test]
async fn replace_and_remove_keep_single_slot_semantics() {
    let deliverer = Arc::new(MockDeliverer::new());
    let registry = AlarmRegistry::new(deliverer);

    let user = UserId(5);
    registry.set(user, 9, 30, "padhai").await.unwrap();
    registry.set(user, 10, 0, "padhai v2").await.unwrap();

    assert_eq!(registry.count().await, 1);
    let spec = registry.get(user).await.unwrap();
    assert_eq!((spec.hour, spec.minute), (10, 0));

    assert!(registry.remove(user).await);
    assert!(!registry.remove(user).await);
    assert_eq!(registry.count().await, 0);
}
