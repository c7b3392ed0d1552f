//! Wires configuration into a [`Session`] and drives it from stdin.
//!
//! This is the stand-in for the original page UI: type a topic, review the
//! generated variants, publish the one you like. One command runs at a time;
//! there is nothing to cancel mid-flight.

use anyhow::{Context, Result};
use postloom_compose::{assess_length, is_supported, word_count, LengthAssessment, PostComposer, Translator};
use postloom_config::{PostloomConfig, ProviderSettings, SearchModeSetting};
use postloom_llm::chat::ChatApi;
use postloom_publish::{AutomationApi, Publisher};
use postloom_search::{SearchApi, SearchMode};
use postloom_session::Session;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

pub fn build_session(cfg: &PostloomConfig) -> Result<Session> {
    let mode = match cfg.search.mode {
        SearchModeSetting::Search => SearchMode::Search,
        SearchModeSetting::News => SearchMode::News,
    };

    let search = SearchApi::new(&cfg.search.endpoint, cfg.search.api_key.clone())
        .context("search client")?;

    let generator = build_chat_client(&cfg.generator, "generation API key")?;
    let translator = build_chat_client(&cfg.translator, "translation API key")?;

    let automation = AutomationApi::new(&cfg.publisher.endpoint, cfg.publisher.api_key.clone())
        .context("automation client")?;

    if !is_supported(&cfg.language) {
        tracing::warn!(language = %cfg.language, "language not in the catalog; passing through");
    }

    Ok(Session::new(
        search,
        PostComposer::new(generator),
        Translator::new(translator),
        Publisher::new(Arc::new(automation)),
        cfg.language.clone(),
        mode,
        cfg.search.result_count,
    ))
}

fn build_chat_client(
    settings: &ProviderSettings,
    credential: &'static str,
) -> Result<Arc<ChatApi>> {
    let client = ChatApi::new(
        settings.endpoint(),
        settings.api_key().to_string(),
        settings.model().to_string(),
        settings.temperature(),
        credential,
    )
    .with_context(|| format!("chat client for {}", settings.model()))?;
    Ok(Arc::new(client))
}

pub async fn run(mut session: Session, author: String) -> Result<()> {
    let mut out = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut instructions = String::new();

    out.write_all(HELP.as_bytes()).await?;
    prompt(&mut out).await?;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line {
            "" => {}
            ":quit" | ":q" => break,
            ":help" => out.write_all(HELP.as_bytes()).await?,
            ":clear" => {
                session.clear();
                instructions.clear();
                out.write_all(b"Session cleared.\n").await?;
            }
            _ if line.starts_with(":style") => {
                instructions = line.trim_start_matches(":style").trim().to_string();
                out.write_all(b"Style instructions updated.\n").await?;
            }
            _ if line.starts_with(":publish") => {
                let reply = handle_publish(&session, line, &author).await;
                out.write_all(reply.as_bytes()).await?;
            }
            _ if line.starts_with(":translate") => {
                let reply = handle_translate(&session, line).await;
                out.write_all(reply.as_bytes()).await?;
            }
            topic => {
                let reply = handle_topic(&mut session, topic, &instructions).await;
                out.write_all(reply.as_bytes()).await?;
            }
        }
        prompt(&mut out).await?;
    }

    Ok(())
}

const HELP: &str = "\
postloom: search a topic, review draft posts, publish one.\n\
  <topic text>           search and generate three draft variants\n\
  :style <text>          extra instructions for the next generation\n\
  :translate <n> <lang>  translate draft n\n\
  :publish <n>           publish draft n\n\
  :clear                 drop results and drafts\n\
  :quit                  exit\n";

async fn prompt(out: &mut tokio::io::Stdout) -> Result<()> {
    out.write_all(b"postloom> ").await?;
    out.flush().await?;
    Ok(())
}

async fn handle_topic(session: &mut Session, topic: &str, instructions: &str) -> String {
    match session.run(topic, instructions).await {
        Ok(count) => {
            let mut reply = String::new();
            if let Some(overview) = session.overview() {
                reply.push_str(&format!(
                    "{} organic, {} news results\n",
                    overview.organic_count, overview.news_count
                ));
                for line in overview.top_organic.iter().chain(&overview.top_news) {
                    reply.push_str(&format!("  {line}\n"));
                }
            }
            reply.push_str(&format!("\nGenerated {count} draft variant(s):\n"));
            for draft in session.drafts() {
                reply.push_str(&format!(
                    "\n--- {} [{}] ({} words{}) ---\n{}\n",
                    draft.label,
                    draft.language,
                    word_count(&draft.content),
                    length_note(&draft.content),
                    draft.content
                ));
            }
            reply
        }
        Err(e) => format!("{e}\n"),
    }
}

fn length_note(content: &str) -> &'static str {
    match assess_length(content) {
        LengthAssessment::TooShort => ", may be too short",
        LengthAssessment::TooLong => ", may be too long",
        LengthAssessment::Ok => "",
    }
}

async fn handle_publish(session: &Session, line: &str, author: &str) -> String {
    let index = match parse_draft_index(line, session) {
        Ok(i) => i,
        Err(msg) => return msg,
    };

    let content = session.drafts()[index].content.clone();
    match session.publish(&content, author).await {
        Ok(result) => format!("Published.\n{}\n", result.raw),
        Err(e) => format!("{e}\n"),
    }
}

async fn handle_translate(session: &Session, line: &str) -> String {
    let mut parts = line.splitn(3, ' ');
    let _cmd = parts.next();
    let index = match parts
        .next()
        .and_then(|n| n.parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1))
    {
        Some(i) if i < session.drafts().len() => i,
        _ => return "Usage: :translate <n> <language>\n".to_string(),
    };
    let Some(language) = parts.next().map(str::trim).filter(|l| !l.is_empty()) else {
        return "Usage: :translate <n> <language>\n".to_string();
    };

    let content = session.drafts()[index].content.clone();
    match session.translate(&content, language).await {
        Ok(translated) => format!("--- {language} ---\n{translated}\n"),
        Err(e) => format!("{e}\n"),
    }
}

fn parse_draft_index(line: &str, session: &Session) -> std::result::Result<usize, String> {
    let arg = line.split_whitespace().nth(1);
    match arg.and_then(|n| n.parse::<usize>().ok()).and_then(|n| n.checked_sub(1)) {
        Some(i) if i < session.drafts().len() => Ok(i),
        _ => Err(format!(
            "Pick a draft between 1 and {}.\n",
            session.drafts().len()
        )),
    }
}
