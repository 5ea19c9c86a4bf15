use crate::channels::util::{split_message, TELEGRAM_MAX_MESSAGE_LEN};
use crate::commands::{self, ClipRouter, Reply, Request};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{
    BotCommand, InlineQueryResult, InlineQueryResultCachedVoice, InputFile, ParseMode,
};

/// This bot's username, used to ignore `/command@otherbot` in groups.
/// `None` when `get_me` failed at startup.
#[derive(Clone)]
struct BotUsername(Option<String>);

/// Commands advertised in the Telegram command menu
fn command_menu() -> Vec<BotCommand> {
    vec![
        BotCommand::new("start", "Show help"),
        BotCommand::new("add", "Save your next voice note under a name"),
        BotCommand::new("send", "Play a saved clip"),
        BotCommand::new("list", "List saved clips"),
        BotCommand::new("today", "Clip of the day"),
    ]
}

/// Turn an incoming message into a router request.
///
/// Commands win over attachments; anything else from a user is treated as a
/// potential upload so the router can decide whether it carries audio.
fn message_to_request(msg: &Message, bot_username: Option<&str>) -> Option<Request> {
    let requester = msg.from()?.id.0;

    if let Some(command) = msg.text().and_then(|text| commands::parse(text, bot_username)) {
        return Some(Request::Command { requester, command });
    }

    let remote_handle = msg
        .voice()
        .map(|voice| voice.file.id.clone())
        .or_else(|| msg.audio().map(|audio| audio.file.id.clone()));

    if remote_handle.is_none() && msg.text().is_some() {
        // Plain chatter
        return None;
    }

    Some(Request::Upload {
        requester,
        remote_handle,
    })
}

async fn handle_message(
    bot: Bot,
    msg: Message,
    router: Arc<ClipRouter>,
    bot_username: BotUsername,
) -> ResponseResult<()> {
    if msg.from().map(|user| user.is_bot).unwrap_or(true) {
        return Ok(());
    }

    let Some(request) = message_to_request(&msg, bot_username.0.as_deref()) else {
        return Ok(());
    };

    log::info!(
        "Telegram: {:?} from {} in chat {}",
        request,
        msg.from().map(|u| u.full_name()).unwrap_or_default(),
        msg.chat.id
    );

    match router.handle(request) {
        Reply::Nothing => {}
        Reply::Text(text) => {
            for chunk in split_message(&text, TELEGRAM_MAX_MESSAGE_LEN) {
                if let Err(e) = bot.send_message(msg.chat.id, chunk).await {
                    log::error!("Telegram: Failed to send message: {}", e);
                }
            }
        }
        Reply::Clip {
            remote_handle,
            caption,
        } => {
            let request = bot.send_voice(msg.chat.id, InputFile::file_id(remote_handle));
            let result = match caption {
                Some(caption) => request.caption(caption).parse_mode(ParseMode::Html).await,
                None => request.await,
            };
            if let Err(e) = result {
                log::error!("Telegram: Failed to send voice: {}", e);
            }
        }
        Reply::Inline { .. } => {
            log::warn!("Telegram: Inline reply produced for a message, dropping");
        }
    }

    Ok(())
}

async fn handle_inline_query(
    bot: Bot,
    query: InlineQuery,
    router: Arc<ClipRouter>,
) -> ResponseResult<()> {
    let reply = router.handle(Request::InlineQuery {
        query: query.query.clone(),
    });

    let Reply::Inline {
        results,
        cache_time,
    } = reply
    else {
        return Ok(());
    };

    let results: Vec<InlineQueryResult> = results
        .into_iter()
        .map(|clip| {
            InlineQueryResult::CachedVoice(InlineQueryResultCachedVoice::new(
                clip.id,
                clip.remote_handle,
                clip.title,
            ))
        })
        .collect();

    if let Err(e) = bot
        .answer_inline_query(query.id, results)
        .cache_time(cache_time)
        .await
    {
        log::error!("Telegram: Failed to answer inline query: {}", e);
    }

    Ok(())
}

/// Start the Telegram long-polling listener. Returns when the dispatcher
/// stops (Ctrl-C).
pub async fn start_telegram_listener(bot_token: &str, router: Arc<ClipRouter>) {
    let bot = Bot::new(bot_token);

    let bot_username = match bot.get_me().await {
        Ok(me) => {
            log::info!("Telegram: Bot connected as @{}", me.username());
            BotUsername(me.user.username.clone())
        }
        Err(e) => {
            log::warn!("Telegram: Could not fetch bot identity: {}", e);
            BotUsername(None)
        }
    };

    if let Err(e) = bot.set_my_commands(command_menu()).await {
        log::warn!("Telegram: Failed to register command menu: {}", e);
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(handle_message))
        .branch(Update::filter_inline_query().endpoint(handle_inline_query));

    log::info!("Telegram: Listening for updates");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![router, bot_username])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Telegram: Listener stopped");
}
