//! REPL runner: converts teloxide messages to core::Message, passes them to the HandlerChain and
//! delivers the reply. Calls get_me before polling to populate bot_username.

use anyhow::Result;
use dbot_core::{Bot as CoreBot, HandlerResponse, Message, ToCoreMessage};
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Runs the chain for one message and sends `Reply(text)` back to the message's chat.
///
/// Returns the chain's final response. Chain errors and delivery errors are returned to the caller.
#[instrument(skip(chain, bot, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
pub async fn dispatch(
    chain: &HandlerChain,
    bot: &dyn CoreBot,
    message: &Message,
) -> dbot_core::Result<HandlerResponse> {
    let response = chain.handle(message).await?;
    if let HandlerResponse::Reply(text) = &response {
        bot.reply_to(message, text).await?;
        debug!(reply_len = text.len(), "step: reply sent");
    }
    Ok(response)
}

/// Dispatches one message and logs any chain or delivery error; the event is dropped on failure.
///
/// Awaited inside the polling handler so messages of one chat are handled in arrival order.
pub async fn process_message(chain: &HandlerChain, bot: &dyn CoreBot, message: &Message) {
    if let Err(e) = dispatch(chain, bot, message).await {
        error!(
            error = %e,
            user_id = message.user.id,
            message_id = %message.id,
            "Handler chain failed"
        );
    }
}

/// Starts long polling with the given teloxide Bot, HandlerChain, reply transport and bot_username cache.
///
/// teloxide runs updates of one chat sequentially and different chats concurrently; polling returns
/// only after in-flight updates finish.
#[instrument(skip(bot, handler_chain, reply_bot, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    reply_bot: Arc<dyn CoreBot>,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed, commands addressed to @bot accepted for any name"),
    }

    info!("Bot started polling");
    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();
        let reply_bot = reply_bot.clone();

        async move {
            let wrapper = TelegramMessageWrapper(&msg);
            if !wrapper.has_sender() {
                debug!(chat_id = msg.chat.id.0, "Skipping message without sender");
                return respond(());
            }
            let core_msg = wrapper.to_core();
            process_message(&chain, reply_bot.as_ref(), &core_msg).await;
            respond(())
        }
    })
    .await;

    info!("Bot stopped polling");
    Ok(())
}
