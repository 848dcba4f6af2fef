// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram channel adapter for the Saathi bot.
//!
//! Connects to Telegram via teloxide long polling, filters to private
//! chats, routes slash commands to the alarm registry, answers identity
//! keywords locally, and relays everything else to the AI reply provider.
//! [`TelegramDeliverer`] is the outbound half used by scheduled alarms.

pub mod commands;
pub mod identity;

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatKind;
use tracing::{debug, info, warn};

use saathi_alarm::AlarmRegistry;
use saathi_config::model::TelegramConfig;
use saathi_core::error::SaathiError;
use saathi_core::traits::{Deliverer, ReplyProvider};
use saathi_core::types::UserId;
use saathi_memory::ConversationStore;

use crate::commands::{Command, Parsed};

pub const START_REPLY: &str = "🙏 Namaste! Main Raj Dev Bot hoon.\n\n\
    Aap mujhse puch sakte ho: padhai, science, general knowledge, alarms, ping, etc.\n\
    Commands: /setalarm HH:MM, /removealarm, /ping, /raj, /help";
pub const HELP_REPLY: &str = "Commands: /setalarm HH:MM, /removealarm, /ping, /raj, /help";
pub const RAJ_REPLY: &str = "Namaste! Main Raj Dev hoon.";
pub const ALARM_REMOVED_REPLY: &str = "Aapka alarm hata diya gaya hai.";

/// Reminder text used when /setalarm does not carry a custom message.
pub const DEFAULT_ALARM_MESSAGE: &str = "Aapka abhi study time hai — focus kijiye!";

/// Collaborators the message handler routes into.
pub struct BotDeps {
    pub store: Arc<ConversationStore>,
    pub registry: Arc<AlarmRegistry>,
    pub provider: Arc<dyn ReplyProvider>,
}

/// Telegram channel adapter.
///
/// Owns the bot handle and drives the long-polling dispatcher.
pub struct TelegramChannel {
    bot: Bot,
}

impl TelegramChannel {
    /// Creates a new Telegram channel adapter.
    ///
    /// Requires `config.bot_token` to be set.
    pub fn new(config: &TelegramConfig) -> Result<Self, SaathiError> {
        let token = config.bot_token.as_deref().ok_or_else(|| {
            SaathiError::Config("telegram.bot_token is required for the Telegram channel".into())
        })?;

        if token.is_empty() {
            return Err(SaathiError::Config(
                "telegram.bot_token cannot be empty".into(),
            ));
        }

        Ok(Self {
            bot: Bot::new(token),
        })
    }

    /// Returns a reference to the underlying teloxide Bot.
    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    /// Returns the outbound deliverer used by scheduled alarms.
    pub fn deliverer(&self) -> TelegramDeliverer {
        TelegramDeliverer {
            bot: self.bot.clone(),
        }
    }

    /// Runs the long-polling dispatcher until the process shuts down.
    pub async fn run(self, deps: Arc<BotDeps>) {
        info!("starting Telegram long polling");

        let handler = Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                handle_update(bot, msg, deps).await;
                respond(())
            }
        });

        Dispatcher::builder(self.bot, handler)
            .default_handler(|_| async {}) // Silently ignore non-message updates
            .build()
            .dispatch()
            .await;
    }
}

/// Checks whether the message is from a private (DM) chat.
///
/// Group, supergroup, and channel messages return `false`.
fn is_dm(msg: &Message) -> bool {
    matches!(msg.chat.kind, ChatKind::Private(_))
}

async fn handle_update(bot: Bot, msg: Message, deps: Arc<BotDeps>) {
    if !is_dm(&msg) {
        debug!(chat_id = msg.chat.id.0, "ignoring non-DM message");
        return;
    }

    let Some(text) = msg.text() else {
        debug!(msg_id = msg.id.0, "ignoring non-text message");
        return;
    };

    let chat_id = msg.chat.id;
    let user_id = UserId(chat_id.0);

    match commands::parse(text) {
        Parsed::Command(Command::Start) => send(&bot, chat_id, START_REPLY).await,
        Parsed::Command(Command::Help) => send(&bot, chat_id, HELP_REPLY).await,
        Parsed::Command(Command::Raj) => send(&bot, chat_id, RAJ_REPLY).await,
        Parsed::Command(Command::Ping) => handle_ping(&bot, chat_id).await,
        Parsed::Command(Command::SetAlarm { hour, minute }) => {
            match deps
                .registry
                .set(user_id, hour, minute, DEFAULT_ALARM_MESSAGE)
                .await
            {
                Ok(()) => {
                    let reply = format!("Alarm set at {hour:02}:{minute:02} (server time)");
                    send(&bot, chat_id, &reply).await;
                }
                Err(e) => {
                    debug!(user_id = %user_id, error = %e, "alarm rejected");
                    send(&bot, chat_id, commands::INVALID_TIME_REPLY).await;
                }
            }
        }
        Parsed::Command(Command::RemoveAlarm) => {
            deps.registry.remove(user_id).await;
            send(&bot, chat_id, ALARM_REMOVED_REPLY).await;
        }
        Parsed::Usage(reply) => send(&bot, chat_id, reply).await,
        Parsed::Text => {
            deps.store.add(user_id, text).await;

            if let Some(reply) = identity::identity_reply(text) {
                send(&bot, chat_id, reply).await;
                return;
            }

            let reply = deps.provider.generate_reply(user_id, text).await;
            send(&bot, chat_id, &reply).await;
        }
    }
}

/// Replies "Pinging...", then edits the sent message with the observed
/// round-trip latency.
async fn handle_ping(bot: &Bot, chat_id: ChatId) {
    let started = Instant::now();
    match bot.send_message(chat_id, "Pinging...").await {
        Ok(sent) => {
            let latency_ms = started.elapsed().as_millis();
            let text = format!("Pong! Delay: {latency_ms} ms");
            if let Err(e) = bot.edit_message_text(chat_id, sent.id, text).await {
                warn!(chat_id = chat_id.0, error = %e, "failed to edit ping reply");
            }
        }
        Err(e) => warn!(chat_id = chat_id.0, error = %e, "failed to send ping reply"),
    }
}

/// Sends a reply, logging instead of propagating on failure. The handling
/// path never crashes on a transport error.
async fn send(bot: &Bot, chat_id: ChatId, text: &str) {
    if let Err(e) = bot.send_message(chat_id, text).await {
        warn!(chat_id = chat_id.0, error = %e, "failed to send reply");
    }
}

/// Outbound delivery callback backed by the Telegram bot.
#[derive(Clone)]
pub struct TelegramDeliverer {
    bot: Bot,
}

#[async_trait]
impl Deliverer for TelegramDeliverer {
    async fn deliver(&self, user_id: UserId, text: &str) -> Result<(), SaathiError> {
        self.bot
            .send_message(ChatId(user_id.0), text)
            .await
            .map_err(|e| SaathiError::Delivery {
                user_id: user_id.0,
                message: format!("failed to send message: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(())
    }
}
